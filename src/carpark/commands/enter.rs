use crate::commands::{availability_message, CmdMessage, CmdResult};
use crate::error::Result;
use crate::ledger::{CheckIn, ParkingLedger};
use crate::model::normalize_registration;
use crate::store::RecordStore;
use crate::validate::is_valid_uk_registration;

const FORMAT_HINT: &str = "Please enter a valid UK registration number. For example: LM55 TCU";

/// Admit a vehicle. Input checks run in the historical order: empty input,
/// then an availability pre-check, then plate format; the ledger repeats
/// the full test internally before assigning a space.
pub fn run<S: RecordStore>(ledger: &mut ParkingLedger<S>, registration: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if registration.trim().is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No registration number entered. {}",
            FORMAT_HINT
        )));
        return Ok(result);
    }

    if ledger.availability().0 == 0 {
        result.add_message(full_message());
        return Ok(result);
    }

    let registration = normalize_registration(registration);
    if !is_valid_uk_registration(&registration) {
        result.add_message(CmdMessage::warning(format!(
            "Invalid registration number. {}",
            FORMAT_HINT
        )));
        return Ok(result);
    }

    match ledger.check_in(&registration)? {
        CheckIn::SpaceAssigned { space, ticket } => {
            result.add_message(CmdMessage::success(
                "Your vehicle has been successfully parked.",
            ));
            result.add_message(CmdMessage::info(format!(
                "Assigned Parking space: {}",
                space
            )));
            result.add_message(CmdMessage::info(format!("Your Ticket Number: {}", ticket)));
            result.add_message(CmdMessage::info("Please keep your ticket safe."));
            let (free, capacity) = ledger.availability();
            result.add_message(availability_message(free, capacity));
        }
        CheckIn::Full => result.add_message(full_message()),
        CheckIn::AlreadyParked => result.add_message(CmdMessage::warning(format!(
            "Vehicle with registration {} is already parked.",
            registration
        ))),
    }

    Ok(result)
}

fn full_message() -> CmdMessage {
    CmdMessage::warning("Sorry, the car park is at maximum capacity currently.")
}
