pub mod account;
pub mod model;

pub mod prelude {
    pub use super::account::Account;
    pub use super::model::Model;
}
