#![allow(clippy::no_effect_underscore_binding)]
use rocket::{Build, Rocket};

use config::ServiceConfig;
use database::fairing::DatabaseFairing;

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod ids;
mod migrator;

#[macro_use]
extern crate rocket;

/// Builds the service: Postgres backed store plus the model routes.
#[must_use]
pub fn build(config: &ServiceConfig) -> Rocket<Build> {
    rocket::custom(config.figment())
        .attach(DatabaseFairing::fairing(config))
        .mount("/", handlers::routes())
}
