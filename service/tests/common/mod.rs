use std::{
    cmp::Ordering,
    sync::{
        atomic::{AtomicBool, Ordering as AtomicOrdering},
        Arc, Mutex,
    },
};

use model_service::{
    database::{
        entities::{account::Account, model::Model},
        DynModelStore, ModelFilter, ModelStore, SortColumn,
    },
    error::Error,
    handlers,
};
use rocket::local::asynchronous::Client;

/// In-memory store with the same filtering rules as the Postgres one.
#[derive(Clone, Default)]
pub struct MemoryStore {
    rows: Arc<Mutex<Vec<Model>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn rows(&self) -> Vec<Model> {
        self.rows.lock().unwrap().clone()
    }

    pub fn insert(&self, model: Model) {
        self.rows.lock().unwrap().push(model);
    }

    /// Makes every following call fail like a dropped connection.
    pub fn fail(&self) {
        self.failing.store(true, AtomicOrdering::SeqCst);
    }

    fn check(&self) -> Result<(), Error> {
        if self.failing.load(AtomicOrdering::SeqCst) {
            Err(Error::DatabaseError(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }
}

fn compare(column: SortColumn, a: &Model, b: &Model) -> Ordering {
    // Descending, NULLs last.
    fn optional<T: PartialOrd>(a: Option<&T>, b: Option<&T>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => b.partial_cmp(a).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    match column {
        SortColumn::Id => b.id.cmp(&a.id),
        SortColumn::Name => optional(a.name.as_ref(), b.name.as_ref()),
        SortColumn::Accuracy => b.accuracy.total_cmp(&a.accuracy),
        SortColumn::TrainStartTime => {
            optional(a.train_start_time.as_ref(), b.train_start_time.as_ref())
        }
        SortColumn::TrainStopTime => optional(a.train_stop_time.as_ref(), b.train_stop_time.as_ref()),
    }
}

#[rocket::async_trait]
impl ModelStore for MemoryStore {
    async fn find(&self, filter: &ModelFilter) -> Result<Vec<Model>, Error> {
        self.check()?;
        let mut rows: Vec<Model> = self
            .rows()
            .into_iter()
            .filter(|m| filter.name.is_none() || m.name == filter.name)
            .filter(|m| {
                filter
                    .account_id
                    .as_ref()
                    .map_or(true, |account| &m.account_id == account)
            })
            .collect();

        if let Some(column) = filter.sort_by {
            rows.sort_by(|a, b| compare(column, a, b));
        }
        if let Some(limit) = filter.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }

    async fn get(&self, id: &str) -> Result<Option<Model>, Error> {
        self.check()?;
        Ok(self.rows().into_iter().find(|m| m.id == id))
    }

    async fn create(&self, model: &Model) -> Result<(), Error> {
        self.check()?;
        self.insert(model.clone());
        Ok(())
    }

    async fn save(&self, model: &Model) -> Result<(), Error> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|m| m.id == model.id) {
            Some(row) => *row = model.clone(),
            None => rows.push(model.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        self.check()?;
        self.rows.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }

    async fn account(&self, id: &str) -> Result<Option<Account>, Error> {
        self.check()?;
        Ok(Some(Account { id: id.into() }))
    }
}

pub async fn client(store: &MemoryStore) -> Client {
    let rocket = rocket::build()
        .manage::<DynModelStore>(Box::new(store.clone()))
        .mount("/", handlers::routes());
    Client::tracked(rocket).await.expect("valid rocket instance")
}

pub fn model(id: &str, name: &str, accuracy: f64) -> Model {
    Model {
        id: id.into(),
        name: Some(name.into()),
        accuracy,
        account_id: "1AMMDguYEpokKpOpXjRIFBezvVd".into(),
        feature_names: vec!["age".into()],
        hyper_parameters: vec!["lr=0.1".into()],
        train_start_time: None,
        train_stop_time: None,
    }
}
