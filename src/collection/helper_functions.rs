use chrono::Utc;
use uuid::Uuid;

/// Random (v4) UUID in hyphenated lowercase form.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
