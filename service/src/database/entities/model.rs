use chrono::{DateTime, Utc};
use shared::data::ModelPayload;
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct Model {
    pub id: String,
    pub name: Option<String>,
    pub accuracy: f64,
    pub account_id: String,
    pub feature_names: Vec<String>,
    pub hyper_parameters: Vec<String>,
    pub train_start_time: Option<DateTime<Utc>>,
    pub train_stop_time: Option<DateTime<Utc>>,
}

impl Model {
    /// Builds a new row owned by `account_id`. Fields missing from the payload
    /// start out empty.
    pub fn create(id: String, account_id: &str, payload: ModelPayload) -> Self {
        let mut model = Self {
            id,
            name: None,
            accuracy: 0.0,
            account_id: account_id.into(),
            feature_names: Vec::new(),
            hyper_parameters: Vec::new(),
            train_start_time: None,
            train_stop_time: None,
        };
        model.apply(payload);
        model
    }

    /// Overrides every field that is present in `payload`. An empty name
    /// counts as absent. `id` and `account_id` are never touched.
    pub fn apply(&mut self, payload: ModelPayload) {
        let ModelPayload {
            name,
            accuracy,
            feature_names,
            hyper_parameters,
            train_start_time,
            train_stop_time,
        } = payload;

        if let Some(name) = name.filter(|name| !name.is_empty()) {
            self.name = Some(name);
        }
        if let Some(accuracy) = accuracy {
            self.accuracy = accuracy;
        }
        if let Some(feature_names) = feature_names {
            self.feature_names = feature_names;
        }
        if let Some(hyper_parameters) = hyper_parameters {
            self.hyper_parameters = hyper_parameters;
        }
        if train_start_time.is_some() {
            self.train_start_time = train_start_time;
        }
        if train_stop_time.is_some() {
            self.train_stop_time = train_stop_time;
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn stored() -> Model {
        Model {
            id: "01927c4e-8f3a-7b21-9c4d-5e6f7a8b9c0d".into(),
            name: Some("churn".into()),
            accuracy: 0.82,
            account_id: "owner".into(),
            feature_names: vec!["age".into(), "plan".into()],
            hyper_parameters: vec!["lr=0.1".into()],
            train_start_time: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            train_stop_time: None,
        }
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut model = stored();
        model.apply(ModelPayload {
            name: Some("new".into()),
            ..ModelPayload::default()
        });

        let expected = Model {
            name: Some("new".into()),
            ..stored()
        };
        assert_eq!(model, expected);
    }

    #[test]
    fn apply_replaces_lists_wholesale() {
        let mut model = stored();
        model.apply(ModelPayload {
            accuracy: Some(0.0),
            feature_names: Some(vec!["tenure".into()]),
            ..ModelPayload::default()
        });

        assert_eq!(model.accuracy, 0.0);
        assert_eq!(model.feature_names, vec!["tenure".to_string()]);
        assert_eq!(model.hyper_parameters, vec!["lr=0.1".to_string()]);
    }

    #[test]
    fn empty_name_is_not_an_override() {
        let mut model = stored();
        model.apply(ModelPayload {
            name: Some(String::new()),
            ..ModelPayload::default()
        });
        assert_eq!(model, stored());

        let created = Model::create(
            "id".into(),
            "owner",
            ModelPayload {
                name: Some(String::new()),
                ..ModelPayload::default()
            },
        );
        assert_eq!(created.name, None);
    }

    #[test]
    fn create_uses_given_identifiers() {
        let model = Model::create(
            "id".into(),
            "owner",
            ModelPayload {
                accuracy: Some(0.5),
                ..ModelPayload::default()
            },
        );

        assert_eq!(model.id, "id");
        assert_eq!(model.account_id, "owner");
        assert_eq!(model.accuracy, 0.5);
        assert_eq!(model.name, None);
        assert!(model.feature_names.is_empty());
    }
}
