use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trained model as it is exposed over HTTP.
///
/// The owning account is never part of the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feature_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hyper_parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_stop_time: Option<DateTime<Utc>>,
}

/// Client supplied fields for creating or updating a model.
///
/// Every field is optional. On update only the fields that are present replace
/// the stored ones. Identifiers are not part of the payload, any `id` or
/// `account_id` key in a request body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyper_parameters: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_stop_time: Option<DateTime<Utc>>,
}
