//! # Storage Layer
//!
//! This module defines the storage abstraction for parking records. The
//! [`RecordStore`] trait allows the ledger to work with different backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing the ledger
//! - Keep the state machine **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: Production file-based storage, one CSV row per
//!   record. No caching: every call hits the file, which is fine at the
//!   record counts involved and keeps the file the single source of truth.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! ```text
//! registration,ticket,space,entry,exit,fee
//! AB12 CDE,AB12CDE4821,1,09:00:00 2024-01-01,11:30:00 2024-01-01,5.00
//! XY99 ZZZ,XY99ZZZ1044,1,12:05:00 2024-01-01,,
//! ```
//!
//! Rows stay in append order; both key orders needed by the lookups are
//! produced per query, never persisted.

use crate::error::Result;
use crate::model::ParkingRecord;

pub mod fs;
pub mod memory;

/// Abstract interface for the durable record collection.
///
/// Implementations attach no business meaning to field contents; they only
/// promise that a successful `write_all` is observed exactly by the next
/// `read_all`.
pub trait RecordStore {
    /// Read every record, newest-appended last.
    fn read_all(&self) -> Result<Vec<ParkingRecord>>;

    /// Replace the whole collection (truncate and rewrite).
    fn write_all(&mut self, records: &[ParkingRecord]) -> Result<()>;

    /// Read-all, push, write-all. Default implementation is fine for any
    /// backend.
    fn append(&mut self, record: &ParkingRecord) -> Result<()> {
        let mut records = self.read_all()?;
        records.push(record.clone());
        self.write_all(&records)
    }

    /// Idempotent bootstrap. Returns `true` iff a new empty backing store
    /// was created (informational, not an error).
    fn ensure_exists(&mut self) -> Result<bool>;
}
