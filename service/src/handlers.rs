use rocket::{
    http::Status,
    serde::json::{self, Json},
    Route, State,
};
use shared::data::{Model, ModelPayload};

use crate::{
    database::{
        entities::{account::DEFAULT_ACCOUNT_ID, model},
        DynModelStore, ModelFilter, SortColumn,
    },
    error::{Error, ModelResult},
    ids,
};

#[must_use]
pub fn routes() -> Vec<Route> {
    routes![
        health,
        list_models,
        get_model,
        create_model,
        update_model,
        delete_model,
    ]
}

#[derive(Debug, FromForm)]
pub struct ListQuery {
    name: Option<String>,
    #[field(name = "accountId")]
    account_id: Option<String>,
    #[field(name = "sortBy")]
    sort_by: Option<String>,
    total: Option<String>,
}

impl ListQuery {
    /// Validates the raw query parameters. Empty values count as absent.
    fn into_filter(self) -> Result<ModelFilter, Error> {
        let sort_by = non_empty(self.sort_by)
            .map(|column| {
                column.parse::<SortColumn>().map_err(|e| Error::InvalidQuery {
                    parameter: "sortBy",
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let limit = non_empty(self.total)
            .map(|total| match total.parse::<u32>() {
                Ok(limit) if limit > 0 => Ok(limit),
                _ => Err(Error::InvalidQuery {
                    parameter: "total",
                    reason: format!("'{total}' is not a positive integer"),
                }),
            })
            .transpose()?;

        Ok(ModelFilter {
            name: non_empty(self.name),
            account_id: non_empty(self.account_id),
            sort_by,
            limit,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

async fn load_model(store: &State<DynModelStore>, id: &str) -> Result<model::Model, Error> {
    store
        .get(id)
        .await?
        .ok_or_else(|| Error::ModelNotFound(id.into()))
}

#[get("/health")]
fn health() -> Status {
    Status::Ok
}

#[get("/models?<query..>")]
async fn list_models(
    query: ListQuery,
    store: &State<DynModelStore>,
) -> Result<Json<Vec<Model>>, Error> {
    let filter = query.into_filter()?;
    let models = store.find(&filter).await?;
    Ok(Json(models.into_iter().map(Model::from).collect()))
}

#[get("/models/<id>")]
async fn get_model(id: &str, store: &State<DynModelStore>) -> Result<Json<Model>, Error> {
    Ok(Json(load_model(store, id).await?.into()))
}

#[put("/models", data = "<payload>")]
async fn create_model(
    payload: Result<Json<ModelPayload>, json::Error<'_>>,
    store: &State<DynModelStore>,
) -> Result<ModelResult, Error> {
    let payload = payload?.into_inner();
    let model = model::Model::create(ids::new_model_id(), DEFAULT_ACCOUNT_ID, payload);
    store.create(&model).await?;
    info!("Created model {}.", model.id);
    Ok(ModelResult::Created(model.into()))
}

#[post("/models/<id>", data = "<payload>")]
async fn update_model(
    id: &str,
    payload: Result<Json<ModelPayload>, json::Error<'_>>,
    store: &State<DynModelStore>,
) -> Result<Json<Model>, Error> {
    let mut model = load_model(store, id).await?;
    model.apply(payload?.into_inner());
    store.save(&model).await?;
    Ok(Json(model.into()))
}

#[delete("/models/<id>")]
async fn delete_model(id: &str, store: &State<DynModelStore>) -> Result<ModelResult, Error> {
    let model = load_model(store, id).await?;
    store.delete(&model.id).await?;
    info!("Deleted model {}.", model.id);
    Ok(ModelResult::NoContent)
}
