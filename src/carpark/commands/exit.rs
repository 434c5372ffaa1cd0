use crate::commands::{availability_message, CmdMessage, CmdResult};
use crate::error::Result;
use crate::ledger::{CheckOut, ParkingLedger};
use crate::model::{normalize_registration, TIME_FORMAT};
use crate::store::RecordStore;

/// Close the active stay for a registration and report the fee.
pub fn run<S: RecordStore>(ledger: &mut ParkingLedger<S>, registration: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if registration.trim().is_empty() {
        result.add_message(CmdMessage::warning(
            "No registration number entered. Please enter a registration number to leave the Car Park.",
        ));
        return Ok(result);
    }

    let registration = normalize_registration(registration);
    match ledger.check_out(&registration)? {
        CheckOut::Closed { record, fee } => {
            result.add_message(CmdMessage::success(format!(
                "Vehicle with registration {} exited the car park.",
                record.registration
            )));
            if let Some(exit_time) = record.exit_time {
                result.add_message(CmdMessage::info(format!(
                    "Exit time: {}",
                    exit_time.format(TIME_FORMAT)
                )));
            }
            result.add_message(CmdMessage::info(format!(
                "Parking Identifier: {}",
                record.space
            )));
            result.add_message(CmdMessage::info(format!("Parking Fee: £{:.2}", fee)));
            let (free, capacity) = ledger.availability();
            result.add_message(availability_message(free, capacity));
            result = result.with_record(record);
        }
        CheckOut::NotParked => result.add_message(CmdMessage::warning(format!(
            "No vehicle with registration {} is currently parked",
            registration
        ))),
    }

    Ok(result)
}
