use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One button press as it lives in the store. Immutable after creation;
/// the store assigns `id` on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampRecord {
    pub id: u64,
    pub timestamp: NaiveDateTime,
    pub scheduled_time: NaiveDateTime,
}

/// On-disk layout of the store: the id counter plus every record in
/// insertion order. `next_id` is persisted so ids keep increasing even
/// after the log is cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreData {
    pub next_id: u64,
    pub records: Vec<TimestampRecord>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogResponse {
    pub records: Vec<TimestampRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearResponse {
    pub removed: u64,
}
