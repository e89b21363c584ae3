use crate::errors::StoreError;
use crate::models::{StoreData, TimestampRecord};
use chrono::NaiveDateTime;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::{fs, sync::Mutex};
use tracing::info;

pub fn resolve_data_path() -> PathBuf {
    env::var("APP_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/log.json"))
}

/// The storage gateway: one record collection persisted as a single JSON
/// file, rewritten whole on every mutation. Each operation takes the lock
/// for its own duration only; there is no cross-call transaction.
pub struct Store {
    path: PathBuf,
    data: Mutex<StoreData>,
}

impl Store {
    /// Opens the store, creating parent directories on first use. A missing
    /// data file means an empty store; reopening an existing file never
    /// resets or duplicates records.
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| StoreError::Unavailable(format!("cannot create {}: {err}", parent.display())))?;
        }

        let data = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|err| StoreError::Unavailable(format!("corrupt data file {}: {err}", path.display())))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
            Err(err) => {
                return Err(StoreError::Unavailable(format!("cannot read {}: {err}", path.display())));
            }
        };

        info!("opened store at {}", path.display());
        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }

    /// Inserts a new record and returns it with its assigned id. Ids are
    /// strictly increasing in insertion order, starting at 1.
    pub async fn add_record(
        &self,
        timestamp: NaiveDateTime,
        scheduled_time: NaiveDateTime,
    ) -> Result<TimestampRecord, StoreError> {
        let mut data = self.data.lock().await;
        let record = TimestampRecord {
            id: data.next_id,
            timestamp,
            scheduled_time,
        };
        data.next_id += 1;
        data.records.push(record.clone());

        if let Err(err) = persist(&self.path, &data).await {
            data.records.pop();
            data.next_id = record.id;
            return Err(err);
        }
        Ok(record)
    }

    /// Returns every record in insertion order. An empty store yields an
    /// empty vec, not an error.
    pub async fn list_records(&self) -> Result<Vec<TimestampRecord>, StoreError> {
        let data = self.data.lock().await;
        Ok(data.records.clone())
    }

    /// Deletes every record and returns how many were removed. The id
    /// counter is not reset, so ids stay unique across clears.
    pub async fn clear_all(&self) -> Result<u64, StoreError> {
        let mut data = self.data.lock().await;
        let drained = std::mem::take(&mut data.records);
        let removed = drained.len() as u64;

        if let Err(err) = persist(&self.path, &data).await {
            data.records = drained;
            return Err(err);
        }
        Ok(removed)
    }
}

async fn persist(path: &Path, data: &StoreData) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(data).map_err(|err| StoreError::Write(err.to_string()))?;
    fs::write(path, payload)
        .await
        .map_err(|err| StoreError::Write(format!("cannot write {}: {err}", path.display())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn unique_data_path(label: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("timestamp_log_{label}_{}_{}.json", std::process::id(), nanos));
        path
    }

    fn instant(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 30)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[tokio::test]
    async fn records_come_back_in_insertion_order_with_increasing_ids() {
        let store = Store::open(unique_data_path("order")).await.unwrap();
        store.add_record(instant(7, 40, 0), instant(7, 52, 0)).await.unwrap();
        store.add_record(instant(7, 41, 0), instant(7, 52, 0)).await.unwrap();
        store.add_record(instant(9, 0, 0), instant(8, 36, 0)).await.unwrap();

        let records = store.list_records().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 2);
        assert_eq!(records[2].id, 3);
        assert_eq!(records[0].timestamp, instant(7, 40, 0));
        assert_eq!(records[2].timestamp, instant(9, 0, 0));
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = Store::open(unique_data_path("empty")).await.unwrap();
        assert!(store.list_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_empties_the_log_but_keeps_the_counter() {
        let store = Store::open(unique_data_path("clear")).await.unwrap();
        store.add_record(instant(7, 40, 0), instant(7, 52, 0)).await.unwrap();
        store.add_record(instant(7, 41, 0), instant(7, 52, 0)).await.unwrap();

        assert_eq!(store.clear_all().await.unwrap(), 2);
        assert!(store.list_records().await.unwrap().is_empty());

        let next = store.add_record(instant(7, 42, 0), instant(7, 52, 0)).await.unwrap();
        assert_eq!(next.id, 3);
    }

    #[tokio::test]
    async fn reopening_preserves_records_and_ids() {
        let path = unique_data_path("reopen");
        {
            let store = Store::open(path.clone()).await.unwrap();
            store.add_record(instant(7, 36, 0), instant(7, 36, 0)).await.unwrap();
        }

        let reopened = Store::open(path.clone()).await.unwrap();
        let records = reopened.list_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 1);

        // A second reopen is just as harmless.
        let again = Store::open(path).await.unwrap();
        assert_eq!(again.list_records().await.unwrap().len(), 1);
        let next = again.add_record(instant(8, 0, 0), instant(8, 36, 0)).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn stored_fields_round_trip_exactly() {
        let path = unique_data_path("roundtrip");
        let timestamp = NaiveDate::from_ymd_opt(2026, 8, 30)
            .unwrap()
            .and_hms_nano_opt(7, 40, 13, 123_456_789)
            .unwrap();
        let scheduled = instant(7, 52, 0);

        {
            let store = Store::open(path.clone()).await.unwrap();
            store.add_record(timestamp, scheduled).await.unwrap();
        }

        let reopened = Store::open(path).await.unwrap();
        let records = reopened.list_records().await.unwrap();
        assert_eq!(records[0].timestamp, timestamp);
        assert_eq!(records[0].scheduled_time, scheduled);
    }

    #[tokio::test]
    async fn corrupt_data_file_reports_unavailable() {
        let path = unique_data_path("corrupt");
        std::fs::write(&path, b"not json").unwrap();

        match Store::open(path).await {
            Err(StoreError::Unavailable(_)) => {}
            Err(other) => panic!("expected Unavailable, got {other}"),
            Ok(_) => panic!("expected open to fail"),
        }
    }
}
