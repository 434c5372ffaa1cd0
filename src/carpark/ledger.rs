//! The parking ledger: record store + occupancy index + ordered lookups,
//! composed into the domain operations (check-in, check-out, availability,
//! ticket lookup, fee projection).
//!
//! Per registration the ledger runs a small state machine:
//!
//! ```text
//! ABSENT --check_in--> ACTIVE --check_out--> CLOSED (terminal)
//! ```
//!
//! A later check-in for the same registration starts a fresh, independent
//! record; closed records are never touched again.
//!
//! Every mutating operation is read-all, compute, write-all against the
//! store, with the occupancy index updated in the same step. The design
//! assumes a single active process; interleaved callers would need the
//! whole read-modify-write sequence under one lock. A failed write leaves
//! the in-memory index ahead of storage; the error propagates rather than
//! being papered over.

use crate::error::Result;
use crate::model::{normalize_registration, ParkingRecord};
use crate::occupancy::OccupancyIndex;
use crate::search::{find_by_key, find_by_key_where};
use crate::store::RecordStore;
use chrono::NaiveDateTime;
use rand::Rng;

/// Time source for entry/exit stamps. Injected so fee calculations are
/// testable without wall-clock flakiness.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time, matching what gets printed on tickets.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Ticket suffix policy. A ticket is the registration with its space
/// removed plus a numeric suffix; collisions are not checked, the suffix
/// is assumed distinct enough at these volumes.
pub trait TicketGenerator {
    fn suffix(&mut self) -> String;
}

/// Four random digits, like the printed tickets the barrier used to issue.
pub struct RandomTickets;

impl TicketGenerator for RandomTickets {
    fn suffix(&mut self) -> String {
        rand::thread_rng().gen_range(1000..10000).to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckIn {
    SpaceAssigned { space: u32, ticket: String },
    Full,
    AlreadyParked,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckOut {
    Closed { record: ParkingRecord, fee: f64 },
    NotParked,
}

pub struct ParkingLedger<S: RecordStore> {
    store: S,
    capacity: u32,
    hourly_rate: f64,
    occupancy: OccupancyIndex,
    clock: Box<dyn Clock>,
    tickets: Box<dyn TicketGenerator>,
}

impl<S: RecordStore> ParkingLedger<S> {
    pub fn new(store: S, capacity: u32, hourly_rate: f64) -> Result<Self> {
        Self::with_parts(
            store,
            capacity,
            hourly_rate,
            Box::new(SystemClock),
            Box::new(RandomTickets),
        )
    }

    /// Construct with explicit clock and ticket policies. The occupancy
    /// index is rebuilt from the store here, the one full scan per session.
    pub fn with_parts(
        store: S,
        capacity: u32,
        hourly_rate: f64,
        clock: Box<dyn Clock>,
        tickets: Box<dyn TicketGenerator>,
    ) -> Result<Self> {
        let mut occupancy = OccupancyIndex::new();
        occupancy.rebuild(&store.read_all()?);
        Ok(Self {
            store,
            capacity,
            hourly_rate,
            occupancy,
            clock,
            tickets,
        })
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// `(free, capacity)`.
    pub fn availability(&self) -> (u32, u32) {
        (
            self.capacity.saturating_sub(self.occupancy.count()),
            self.capacity,
        )
    }

    /// Admit a vehicle. The full test comes first: a full lot rejects
    /// everyone, even a registration that is already parked.
    pub fn check_in(&mut self, registration: &str) -> Result<CheckIn> {
        if self.occupancy.is_full(self.capacity) {
            return Ok(CheckIn::Full);
        }

        let registration = normalize_registration(registration);
        if self.is_parked(&registration)? {
            return Ok(CheckIn::AlreadyParked);
        }

        let space = match self.occupancy.allocate(self.capacity) {
            Some(space) => space,
            None => return Ok(CheckIn::Full),
        };

        let ticket = format!("{}{}", registration.replace(' ', ""), self.tickets.suffix());
        let record =
            ParkingRecord::new(registration, ticket.clone(), space, self.clock.now());

        // Index mutation only after the store write succeeded.
        self.store.append(&record)?;
        self.occupancy.occupy(space);

        Ok(CheckIn::SpaceAssigned { space, ticket })
    }

    /// Close the active stay for a registration, stamping exit time and fee
    /// and freeing its space.
    pub fn check_out(&mut self, registration: &str) -> Result<CheckOut> {
        let registration = normalize_registration(registration);
        let mut records = self.store.read_all()?;

        // Records stay in append order on disk; sort a view of indices by
        // registration for the search instead.
        let found = {
            let mut view: Vec<usize> = (0..records.len()).collect();
            view.sort_by_key(|&i| normalize_registration(&records[i].registration));
            find_by_key_where(
                &view,
                |&i| normalize_registration(&records[i].registration),
                &registration,
                |&i| records[i].is_active(),
            )
            .map(|pos| view[pos])
        };

        let idx = match found {
            Some(idx) => idx,
            None => return Ok(CheckOut::NotParked),
        };

        let now = self.clock.now();
        let fee = round_fee(self.current_fee(&records[idx], now));
        records[idx].exit_time = Some(now);
        records[idx].fee = Some(fee);

        let space = records[idx].space;
        self.store.write_all(&records)?;
        self.occupancy.release(space);

        Ok(CheckOut::Closed {
            record: records[idx].clone(),
            fee,
        })
    }

    /// Tickets are unique by construction, so a plain binary search will do.
    pub fn find_by_ticket(&self, ticket: &str) -> Result<Option<ParkingRecord>> {
        let mut records = self.store.read_all()?;
        records.sort_by(|a, b| a.ticket.cmp(&b.ticket));
        Ok(find_by_key(&records, |r| r.ticket.clone(), &ticket.to_string())
            .map(|i| records[i].clone()))
    }

    /// Fee an active record would owe if it checked out at `now`. Pure
    /// projection, mutates nothing; used by the ticket query.
    pub fn current_fee(&self, record: &ParkingRecord, now: NaiveDateTime) -> f64 {
        let hours = (now - record.entry_time).num_seconds() as f64 / 3600.0;
        hours * self.hourly_rate
    }

    fn is_parked(&self, registration: &str) -> Result<bool> {
        let mut records = self.store.read_all()?;
        records.sort_by_key(|r| normalize_registration(&r.registration));
        Ok(find_by_key_where(
            &records,
            |r| normalize_registration(&r.registration),
            &registration.to_string(),
            |r| r.is_active(),
        )
        .is_some())
    }
}

/// Fees persist with two decimals; round once at closing time so the value
/// handed back equals the value read back later.
fn round_fee(raw: f64) -> f64 {
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
pub mod testing {
    use super::{Clock, TicketGenerator};
    use chrono::NaiveDateTime;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared-handle clock: tests keep the `Rc` and move time forward.
    pub struct TestClock(pub Rc<RefCell<NaiveDateTime>>);

    impl Clock for TestClock {
        fn now(&self) -> NaiveDateTime {
            *self.0.borrow()
        }
    }

    /// Deterministic suffixes: 1000, 1001, 1002, ...
    pub struct SeqTickets {
        next: u32,
    }

    impl SeqTickets {
        pub fn new() -> Self {
            Self { next: 1000 }
        }
    }

    impl TicketGenerator for SeqTickets {
        fn suffix(&mut self) -> String {
            let n = self.next;
            self.next += 1;
            n.to_string()
        }
    }
}
