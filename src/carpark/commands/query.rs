use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ledger::ParkingLedger;
use crate::model::TIME_FORMAT;
use crate::store::RecordStore;

/// Look up a parking record by ticket number. Read-only: an active record
/// shows the fee it would owe right now, without closing anything.
pub fn run<S: RecordStore>(ledger: &ParkingLedger<S>, ticket: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if ticket.trim().is_empty() {
        result.add_message(CmdMessage::warning(
            "No ticket number entered. Please enter your ticket number to query a parking record.",
        ));
        return Ok(result);
    }

    let ticket = ticket.trim().to_uppercase();
    match ledger.find_by_ticket(&ticket)? {
        Some(record) => {
            result.add_message(CmdMessage::success("Parking Record Found:"));
            result.add_message(CmdMessage::info(format!("Ticket Number: {}", record.ticket)));
            result.add_message(CmdMessage::info(format!(
                "Registration Number: {}",
                record.registration
            )));
            result.add_message(CmdMessage::info(format!(
                "Entry Time: {}",
                record.entry_time.format(TIME_FORMAT)
            )));
            match (record.exit_time, record.fee) {
                (Some(exit_time), Some(fee)) => {
                    result.add_message(CmdMessage::info(format!(
                        "Car has exited the car park at {}",
                        exit_time.format(TIME_FORMAT)
                    )));
                    result.add_message(CmdMessage::info(format!(
                        "Total Parking fee: £{:.2}",
                        fee
                    )));
                }
                _ => {
                    let fee = ledger.current_fee(&record, ledger.now());
                    result.add_message(CmdMessage::info(format!(
                        "Car is currently parked in parking space {}",
                        record.space
                    )));
                    result.add_message(CmdMessage::info(format!(
                        "Current cost of parking is: £{:.2}",
                        fee
                    )));
                }
            }
            result = result.with_record(record);
        }
        None => result.add_message(CmdMessage::warning(format!(
            "No parking record found for ticket number {}. \
             Please make sure you have correctly entered the ticket number",
            ticket
        ))),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{enter, exit};
    use crate::ledger::testing::{SeqTickets, TestClock};
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDateTime;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn time(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIME_FORMAT).unwrap()
    }

    fn ledger() -> (ParkingLedger<InMemoryStore>, Rc<RefCell<NaiveDateTime>>) {
        let now = Rc::new(RefCell::new(time("09:00:00 2024-01-01")));
        let ledger = ParkingLedger::with_parts(
            InMemoryStore::new(),
            3,
            2.0,
            Box::new(TestClock(now.clone())),
            Box::new(SeqTickets::new()),
        )
        .unwrap();
        (ledger, now)
    }

    #[test]
    fn active_record_shows_live_fee() {
        let (mut ledger, now) = ledger();
        enter::run(&mut ledger, "AB12 CDE").unwrap();
        *now.borrow_mut() = time("10:30:00 2024-01-01");

        let result = run(&ledger, "ab12cde1000").unwrap();
        let text = result.display();
        assert!(text.contains("Parking Record Found:"));
        assert!(text.contains("Entry Time: 09:00:00 2024-01-01"));
        assert!(text.contains("currently parked in parking space 1"));
        assert!(text.contains("Current cost of parking is: £3.00"));
    }

    #[test]
    fn closed_record_shows_stored_fee() {
        let (mut ledger, now) = ledger();
        enter::run(&mut ledger, "AB12 CDE").unwrap();
        *now.borrow_mut() = time("11:30:00 2024-01-01");
        exit::run(&mut ledger, "AB12 CDE").unwrap();

        // Move time on: the stored fee must not change.
        *now.borrow_mut() = time("20:00:00 2024-01-01");
        let result = run(&ledger, "AB12CDE1000").unwrap();
        let text = result.display();
        assert!(text.contains("Car has exited the car park at 11:30:00 2024-01-01"));
        assert!(text.contains("Total Parking fee: £5.00"));
    }

    #[test]
    fn unknown_ticket_is_reported() {
        let (ledger, _) = ledger();
        let result = run(&ledger, "NOSUCH0000").unwrap();
        assert!(result
            .display()
            .contains("No parking record found for ticket number NOSUCH0000"));
    }

    #[test]
    fn empty_ticket_is_rejected() {
        let (ledger, _) = ledger();
        let result = run(&ledger, "  ").unwrap();
        assert!(result.display().contains("No ticket number entered"));
    }
}
