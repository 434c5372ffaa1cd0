//! Derived occupancy state.
//!
//! The set of space numbers currently in use, kept alongside the durable
//! record store so that availability checks and allocation do not rescan
//! the file. Rebuilt once from the store when the ledger is constructed,
//! then maintained incrementally: add on check-in, remove on check-out.

use crate::model::ParkingRecord;
use std::collections::BTreeSet;

#[derive(Debug, Default)]
pub struct OccupancyIndex {
    occupied: BTreeSet<u32>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset and repopulate from the authoritative record set.
    pub fn rebuild(&mut self, records: &[ParkingRecord]) {
        self.occupied.clear();
        for record in records.iter().filter(|r| r.is_active()) {
            self.occupied.insert(record.space);
        }
    }

    pub fn is_full(&self, capacity: u32) -> bool {
        self.occupied.len() as u32 >= capacity
    }

    /// Smallest unused space in `[1, capacity]`, or `None` when full.
    /// Smallest-first keeps allocation deterministic.
    pub fn allocate(&self, capacity: u32) -> Option<u32> {
        (1..=capacity).find(|space| !self.occupied.contains(space))
    }

    pub fn occupy(&mut self, space: u32) {
        self.occupied.insert(space);
    }

    /// Must be called exactly once per check-out, paired with the record
    /// mutation that closed the stay.
    pub fn release(&mut self, space: u32) {
        self.occupied.remove(&space);
    }

    pub fn count(&self) -> u32 {
        self.occupied.len() as u32
    }
}
