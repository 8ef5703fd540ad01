use sqlx::FromRow;

/// Owner of every model created through the API until accounts are managed.
pub const DEFAULT_ACCOUNT_ID: &str = "1AMMDguYEpokKpOpXjRIFBezvVd";

#[derive(Clone, Debug, PartialEq, Eq, FromRow)]
pub struct Account {
    pub id: String,
}
