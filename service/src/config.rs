use std::env;

use rocket::figment::Figment;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No database connection string set. Provide POSTGRES_CONNECTION_DETAILS or DATABASE_URL.")]
    MissingDatabaseUrl,
    #[error("{name} must be a positive number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Settings read from the process environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
}

impl ServiceConfig {
    /// Loads the configuration, picking up a `.env` file if one is present.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection string is set or a numeric setting
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("POSTGRES_CONNECTION_DETAILS")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        Ok(Self {
            database_url,
            port: parse_number(&lookup, "PORT", DEFAULT_PORT)?,
            max_connections: parse_number(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        })
    }

    /// Rocket configuration listening on every interface at the configured port.
    #[must_use]
    pub fn figment(&self) -> Figment {
        rocket::Config::figment()
            .merge(("address", "0.0.0.0"))
            .merge(("port", self.port))
    }
}

fn parse_number<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => match value.trim().parse::<T>() {
            Ok(number) if number != T::default() => Ok(number),
            _ => Err(ConfigError::InvalidNumber { name, value }),
        },
    }
}
