//! Model ids are UUIDv7 strings: the leading 48 bits hold the creation time
//! in milliseconds, so ids sort by creation time.

use uuid::Uuid;

pub fn new_model_id() -> String {
    Uuid::now_v7().to_string()
}
