//! # Carpark Architecture
//!
//! Carpark is a **UI-agnostic car park management library**. This is not a
//! CLI application that happens to have some library code—it's a library
//! that happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, prints messages, handles exit codes    │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: one method per user-facing operation        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service Layer (commands/*.rs)                              │
//! │  - Input validation and outcome → message mapping           │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain Layer (ledger.rs + occupancy.rs + search.rs)        │
//! │  - Check-in/check-out state machine, fees, lookups          │
//! │  - Capacity invariant lives here                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait                               │
//! │  - CsvStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! A different front end (say, a GUI) would reuse everything from the API
//! down and only replace the printing.
//!
//! ## Determinism at the Seams
//!
//! The two ambient inputs—wall-clock time and ticket randomness—enter the
//! ledger through the [`ledger::Clock`] and [`ledger::TicketGenerator`]
//! traits, so every fee calculation and ticket string is reproducible in
//! tests.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Validation and message mapping per operation
//! - [`ledger`]: The parking state machine and fee rules
//! - [`occupancy`]: Derived set of occupied space numbers
//! - [`search`]: Ordered-key binary search, duplicate-aware variant
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`ParkingRecord`, timestamp format)
//! - [`validate`]: Registration-number syntax checks
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ledger;
pub mod model;
pub mod occupancy;
pub mod search;
pub mod store;
pub mod validate;
