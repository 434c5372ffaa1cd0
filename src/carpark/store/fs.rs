use super::RecordStore;
use crate::error::{CarParkError, Result};
use crate::model::ParkingRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed store, one CSV row per record.
pub struct CsvStore {
    data_file: PathBuf,
}

impl CsvStore {
    pub fn new<P: Into<PathBuf>>(data_file: P) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CarParkError::Io)?;
            }
        }
        Ok(())
    }
}

impl RecordStore for CsvStore {
    fn read_all(&self) -> Result<Vec<ParkingRecord>> {
        let content = fs::read_to_string(&self.data_file).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                CarParkError::NotFound(self.data_file.display().to_string())
            } else {
                CarParkError::Io(e)
            }
        })?;

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ParkingRecord::from_row)
            .collect()
    }

    fn write_all(&mut self, records: &[ParkingRecord]) -> Result<()> {
        self.ensure_parent_dir()?;
        let mut content = String::new();
        for record in records {
            content.push_str(&record.to_row());
            content.push('\n');
        }
        fs::write(&self.data_file, content).map_err(CarParkError::Io)?;
        Ok(())
    }

    fn ensure_exists(&mut self) -> Result<bool> {
        if self.data_file.exists() {
            return Ok(false);
        }
        self.ensure_parent_dir()?;
        fs::write(&self.data_file, "").map_err(CarParkError::Io)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TIME_FORMAT;
    use chrono::NaiveDateTime;

    fn record(registration: &str, ticket: &str, space: u32) -> ParkingRecord {
        let entry =
            NaiveDateTime::parse_from_str("09:00:00 2024-01-01", TIME_FORMAT).unwrap();
        ParkingRecord::new(registration.into(), ticket.into(), space, entry)
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CsvStore::new(dir.path().join("records.csv"));

        let mut closed = record("AB12 CDE", "AB12CDE1000", 1);
        closed.exit_time = Some(
            NaiveDateTime::parse_from_str("11:30:00 2024-01-01", TIME_FORMAT).unwrap(),
        );
        closed.fee = Some(5.0);
        let records = vec![closed, record("XY99 ZZZ", "XY99ZZZ1001", 2)];

        store.write_all(&records).unwrap();
        assert_eq!(store.read_all().unwrap(), records);
    }

    #[test]
    fn append_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CsvStore::new(dir.path().join("records.csv"));
        store.ensure_exists().unwrap();

        store.append(&record("AB12 CDE", "T1", 1)).unwrap();
        store.append(&record("XY99 ZZZ", "T2", 2)).unwrap();

        let all = store.read_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].ticket, "T1");
        assert_eq!(all[1].ticket, "T2");
    }

    #[test]
    fn ensure_exists_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CsvStore::new(dir.path().join("records.csv"));
        assert!(store.ensure_exists().unwrap());
        assert!(!store.ensure_exists().unwrap());
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_a_not_found_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("absent.csv"));
        assert!(matches!(store.read_all(), Err(CarParkError::NotFound(_))));
    }

    #[test]
    fn corrupt_rows_are_format_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        fs::write(&path, "not,a,valid,row\n").unwrap();
        let store = CsvStore::new(&path);
        assert!(matches!(store.read_all(), Err(CarParkError::Format(_))));
    }
}
