use shared::data::Model;

use super::entities::model::Model as ModelRow;

impl From<ModelRow> for Model {
    fn from(value: ModelRow) -> Self {
        Self {
            id: value.id,
            name: value.name,
            accuracy: value.accuracy,
            feature_names: value.feature_names,
            hyper_parameters: value.hyper_parameters,
            train_start_time: value.train_start_time,
            train_stop_time: value.train_stop_time,
        }
    }
}
