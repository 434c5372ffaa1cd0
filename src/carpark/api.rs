//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for every car park operation, regardless of the front end.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs to the ledger
//! - **I/O operations**: no stdout, stderr, or terminal formatting
//! - **Interpreting domain state**: callers get messages, not branches
//!
//! ## Generic Over RecordStore
//!
//! `CarParkApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `CarParkApi<CsvStore>`
//! - Testing: `CarParkApi<InMemoryStore>`
//!
//! This enables testing the full service path without touching the
//! filesystem.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::ledger::ParkingLedger;
use crate::store::RecordStore;

/// The main API facade for car park operations.
///
/// All front ends (CLI or otherwise) obtain a raw string from the user,
/// call one of these methods, and display the returned messages.
pub struct CarParkApi<S: RecordStore> {
    ledger: ParkingLedger<S>,
}

impl<S: RecordStore> CarParkApi<S> {
    pub fn new(ledger: ParkingLedger<S>) -> Self {
        Self { ledger }
    }

    /// Vehicle arrives: validate, allocate a space, issue a ticket.
    pub fn enter(&mut self, registration: &str) -> Result<CmdResult> {
        commands::enter::run(&mut self.ledger, registration)
    }

    /// Vehicle leaves: close the active stay and charge the fee.
    pub fn exit(&mut self, registration: &str) -> Result<CmdResult> {
        commands::exit::run(&mut self.ledger, registration)
    }

    /// Look up a record by ticket number (read-only).
    pub fn query_by_ticket(&self, ticket: &str) -> Result<CmdResult> {
        commands::query::run(&self.ledger, ticket)
    }

    /// Current `(free, capacity)` as a display message (read-only).
    pub fn availability(&self) -> Result<CmdResult> {
        commands::spaces::run(&self.ledger)
    }
}
