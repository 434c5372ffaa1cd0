use super::RecordStore;
use crate::error::Result;
use crate::model::ParkingRecord;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<ParkingRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn read_all(&self) -> Result<Vec<ParkingRecord>> {
        Ok(self.records.clone())
    }

    fn write_all(&mut self, records: &[ParkingRecord]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }

    fn ensure_exists(&mut self) -> Result<bool> {
        Ok(false)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::TIME_FORMAT;
    use crate::store::RecordStore;
    use chrono::NaiveDateTime;

    pub fn time(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIME_FORMAT).unwrap()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_active_record(mut self, registration: &str, space: u32) -> Self {
            let record = ParkingRecord::new(
                registration.to_string(),
                format!("{}{}", registration.replace(' ', ""), 1000 + space),
                space,
                time("09:00:00 2024-01-01"),
            );
            self.store.append(&record).unwrap();
            self
        }

        pub fn with_closed_record(mut self, registration: &str, space: u32, fee: f64) -> Self {
            let mut record = ParkingRecord::new(
                registration.to_string(),
                format!("{}{}", registration.replace(' ', ""), 2000 + space),
                space,
                time("08:00:00 2024-01-01"),
            );
            record.exit_time = Some(time("09:00:00 2024-01-01"));
            record.fee = Some(fee);
            self.store.append(&record).unwrap();
            self
        }
    }
}
