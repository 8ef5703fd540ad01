use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::Error;

use super::{entities::prelude::*, ModelFilter, ModelStore};

const MODEL_SELECT_SQL: &str = "SELECT
    id,
    name,
    accuracy,
    account_id,
    feature_names,
    hyper_parameters,
    train_start_time,
    train_stop_time
FROM models";

const MODEL_INSERT_SQL: &str = "INSERT INTO models (
    id,
    name,
    accuracy,
    account_id,
    feature_names,
    hyper_parameters,
    train_start_time,
    train_stop_time
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)";

const MODEL_SAVE_SQL: &str = "INSERT INTO models (
    id,
    name,
    accuracy,
    account_id,
    feature_names,
    hyper_parameters,
    train_start_time,
    train_stop_time
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
ON CONFLICT (id) DO UPDATE SET
    name = EXCLUDED.name,
    accuracy = EXCLUDED.accuracy,
    account_id = EXCLUDED.account_id,
    feature_names = EXCLUDED.feature_names,
    hyper_parameters = EXCLUDED.hyper_parameters,
    train_start_time = EXCLUDED.train_start_time,
    train_stop_time = EXCLUDED.train_stop_time";

/// Select statement for a listing. Values are bound, the sort column comes
/// from the closed `SortColumn` set.
fn find_query(filter: &ModelFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new(MODEL_SELECT_SQL);
    query.push(" WHERE TRUE");

    if let Some(name) = &filter.name {
        query.push(" AND name = ").push_bind(name.clone());
    }
    if let Some(account_id) = &filter.account_id {
        query.push(" AND account_id = ").push_bind(account_id.clone());
    }
    if let Some(column) = filter.sort_by {
        query
            .push(" ORDER BY ")
            .push(column.column_name())
            .push(" DESC NULLS LAST");
    }
    if let Some(limit) = filter.limit {
        query.push(" LIMIT ").push_bind(i64::from(limit));
    }
    query
}

pub struct PgModelStore {
    pool: PgPool,
}

impl PgModelStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn write(&self, model: &Model, statement: &str) -> Result<(), Error> {
        sqlx::query(statement)
            .bind(&model.id)
            .bind(&model.name)
            .bind(model.accuracy)
            .bind(&model.account_id)
            .bind(&model.feature_names)
            .bind(&model.hyper_parameters)
            .bind(model.train_start_time)
            .bind(model.train_stop_time)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[rocket::async_trait]
impl ModelStore for PgModelStore {
    async fn find(&self, filter: &ModelFilter) -> Result<Vec<Model>, Error> {
        let mut query = find_query(filter);
        Ok(query.build_query_as::<Model>().fetch_all(&self.pool).await?)
    }

    async fn get(&self, id: &str) -> Result<Option<Model>, Error> {
        let statement = format!("{MODEL_SELECT_SQL} WHERE id = $1");
        Ok(sqlx::query_as::<_, Model>(&statement)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create(&self, model: &Model) -> Result<(), Error> {
        self.write(model, MODEL_INSERT_SQL).await
    }

    async fn save(&self, model: &Model) -> Result<(), Error> {
        self.write(model, MODEL_SAVE_SQL).await
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        sqlx::query("DELETE FROM models WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn account(&self, id: &str) -> Result<Option<Account>, Error> {
        Ok(sqlx::query_as::<_, Account>("SELECT id FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }
}
