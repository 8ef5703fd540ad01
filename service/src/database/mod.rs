use std::{fmt, str::FromStr};

use crate::error::Error;

use self::entities::prelude::*;

pub mod convert;
pub mod entities;
pub mod fairing;
pub mod store;

pub use store::PgModelStore;

/// Store handle managed by Rocket.
pub type DynModelStore = Box<dyn ModelStore>;

/// Persistence contract for models.
///
/// Absent rows are reported as `None` or an empty list, `Err` is reserved for
/// storage failures.
#[rocket::async_trait]
pub trait ModelStore: Send + Sync {
    async fn find(&self, filter: &ModelFilter) -> Result<Vec<Model>, Error>;

    async fn get(&self, id: &str) -> Result<Option<Model>, Error>;

    async fn create(&self, model: &Model) -> Result<(), Error>;

    /// Writes every column of `model`, replacing the stored row.
    async fn save(&self, model: &Model) -> Result<(), Error>;

    async fn delete(&self, id: &str) -> Result<(), Error>;

    async fn account(&self, id: &str) -> Result<Option<Account>, Error>;
}

/// Equality filters, ordering and row cap for listing models.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelFilter {
    pub name: Option<String>,
    pub account_id: Option<String>,
    /// Results are ordered descending on this column, NULLs last.
    pub sort_by: Option<SortColumn>,
    pub limit: Option<u32>,
}

/// Columns a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Name,
    Accuracy,
    TrainStartTime,
    TrainStopTime,
}

impl SortColumn {
    #[must_use]
    pub fn column_name(self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Name => "name",
            SortColumn::Accuracy => "accuracy",
            SortColumn::TrainStartTime => "train_start_time",
            SortColumn::TrainStopTime => "train_stop_time",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColumn(pub String);

impl fmt::Display for UnknownColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not one of id, name, accuracy, train_start_time, train_stop_time",
            self.0
        )
    }
}

impl FromStr for SortColumn {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortColumn::Id),
            "name" => Ok(SortColumn::Name),
            "accuracy" => Ok(SortColumn::Accuracy),
            "train_start_time" | "trainStartTime" => Ok(SortColumn::TrainStartTime),
            "train_stop_time" | "trainStopTime" => Ok(SortColumn::TrainStopTime),
            other => Err(UnknownColumn(other.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_columns_accept_both_spellings() {
        assert_eq!(
            "train_stop_time".parse::<SortColumn>(),
            Ok(SortColumn::TrainStopTime)
        );
        assert_eq!(
            "trainStartTime".parse::<SortColumn>(),
            Ok(SortColumn::TrainStartTime)
        );
        assert_eq!(SortColumn::Accuracy.to_string(), "accuracy");
    }

    #[test]
    fn unknown_columns_are_rejected() {
        let err = "account_id; DROP TABLE models".parse::<SortColumn>().unwrap_err();
        assert!(err.to_string().contains("DROP TABLE"));
        assert!("feature_names".parse::<SortColumn>().is_err());
    }
}
