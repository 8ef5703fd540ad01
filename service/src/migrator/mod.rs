use rocket::futures::StreamExt;
use sqlx::{Executor, PgPool};

use crate::error::Error;

/// Idempotent DDL bringing both tables in line with the entity structs. It is
/// replayed on every start, there is no version table.
pub static SCHEMA: &str = include_str!("schema.sql");

pub async fn sync_schema(db: &PgPool) -> Result<(), Error> {
    let mut results = db.execute_many(SCHEMA);
    let mut applied = 0;

    while let Some(result) = results.next().await {
        if let Err(e) = result {
            error!("Encountered an error whilst applying the schema: {e}");
            return Err(e.into());
        }
        applied += 1;
    }

    info!("Database schema synchronised ({applied} statements).");
    Ok(())
}
