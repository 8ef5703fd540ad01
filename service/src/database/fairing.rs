use rocket::{
    fairing::{self, Fairing, Info, Kind},
    Build, Rocket,
};
use sqlx::postgres::PgPoolOptions;

use crate::{config::ServiceConfig, migrator};

use super::{entities::account::DEFAULT_ACCOUNT_ID, DynModelStore, ModelStore, PgModelStore};

pub struct DatabaseFairing {
    connection_string: String,
    max_connections: u32,
}

impl DatabaseFairing {
    pub fn fairing(config: &ServiceConfig) -> Self {
        Self {
            connection_string: config.database_url.clone(),
            max_connections: config.max_connections,
        }
    }
}

#[rocket::async_trait]
impl Fairing for DatabaseFairing {
    fn info(&self) -> Info {
        Info {
            name: "Database",
            kind: Kind::Ignite | Kind::Singleton,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> fairing::Result {
        let pool = match PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.connection_string)
            .await
        {
            Ok(pool) => pool,
            Err(e) => {
                error!("Failed to connect to database: {e}");
                return Err(rocket);
            }
        };

        if let Err(e) = migrator::sync_schema(&pool).await {
            error!("Failed to synchronise the database schema: {e}");
            return Err(rocket);
        }

        let store = PgModelStore::new(pool);
        match store.account(DEFAULT_ACCOUNT_ID).await {
            Ok(Some(account)) => info!("Models will be owned by account {}.", account.id),
            Ok(None) => {
                error!("Default account {DEFAULT_ACCOUNT_ID} is missing after schema sync.");
                return Err(rocket);
            }
            Err(e) => {
                error!("Failed to look up the default account: {e}");
                return Err(rocket);
            }
        }

        Ok(rocket.manage::<DynModelStore>(Box::new(store)))
    }
}
