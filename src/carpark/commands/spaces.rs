use crate::commands::{availability_message, CmdResult};
use crate::error::Result;
use crate::ledger::ParkingLedger;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(ledger: &ParkingLedger<S>) -> Result<CmdResult> {
    let (free, capacity) = ledger.availability();
    let mut result = CmdResult::default();
    result.add_message(availability_message(free, capacity));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::enter;
    use crate::ledger::testing::{SeqTickets, TestClock};
    use crate::model::TIME_FORMAT;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDateTime;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn reports_free_over_capacity() {
        let now = NaiveDateTime::parse_from_str("09:00:00 2024-01-01", TIME_FORMAT).unwrap();
        let mut ledger = ParkingLedger::with_parts(
            InMemoryStore::new(),
            5,
            2.0,
            Box::new(TestClock(Rc::new(RefCell::new(now)))),
            Box::new(SeqTickets::new()),
        )
        .unwrap();

        enter::run(&mut ledger, "AB12 CDE").unwrap();
        let result = run(&ledger).unwrap();
        assert_eq!(result.display(), "Available Parking Spaces: 4/5");
    }
}
