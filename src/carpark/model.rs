use crate::error::{CarParkError, Result};
use chrono::NaiveDateTime;

/// Timestamp format used everywhere: persistence, display, fee parsing.
/// Changing it breaks round-tripping of existing data files.
pub const TIME_FORMAT: &str = "%H:%M:%S %Y-%m-%d";

/// Trim surrounding whitespace and uppercase, so that searches and stored
/// rows agree on one canonical spelling.
pub fn normalize_registration(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// One vehicle stay. Created at check-in, closed exactly once at check-out;
/// closed records are never touched again.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingRecord {
    pub registration: String,
    pub ticket: String,
    pub space: u32,
    pub entry_time: NaiveDateTime,
    pub exit_time: Option<NaiveDateTime>,
    pub fee: Option<f64>,
}

impl ParkingRecord {
    pub fn new(
        registration: String,
        ticket: String,
        space: u32,
        entry_time: NaiveDateTime,
    ) -> Self {
        Self {
            registration,
            ticket,
            space,
            entry_time,
            exit_time: None,
            fee: None,
        }
    }

    /// A record with no exit time belongs to a vehicle still in the car park.
    pub fn is_active(&self) -> bool {
        self.exit_time.is_none()
    }

    /// Serialize to one CSV row: `registration,ticket,space,entry,exit,fee`.
    /// `exit`/`fee` are empty strings while the record is active.
    pub fn to_row(&self) -> String {
        let exit = self
            .exit_time
            .map(|t| t.format(TIME_FORMAT).to_string())
            .unwrap_or_default();
        let fee = self.fee.map(|f| format!("{:.2}", f)).unwrap_or_default();
        format!(
            "{},{},{},{},{},{}",
            self.registration,
            self.ticket,
            self.space,
            self.entry_time.format(TIME_FORMAT),
            exit,
            fee
        )
    }

    pub fn from_row(row: &str) -> Result<Self> {
        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() != 6 {
            return Err(CarParkError::Format(format!(
                "expected 6 columns, got {}: {:?}",
                fields.len(),
                row
            )));
        }

        let space: u32 = fields[2]
            .parse()
            .map_err(|_| CarParkError::Format(format!("bad space number: {:?}", fields[2])))?;
        let entry_time = parse_time(fields[3])?;
        let exit_time = if fields[4].is_empty() {
            None
        } else {
            Some(parse_time(fields[4])?)
        };
        let fee = if fields[5].is_empty() {
            None
        } else {
            Some(
                fields[5]
                    .parse()
                    .map_err(|_| CarParkError::Format(format!("bad fee: {:?}", fields[5])))?,
            )
        };

        Ok(Self {
            registration: fields[0].to_string(),
            ticket: fields[1].to_string(),
            space,
            entry_time,
            exit_time,
            fee,
        })
    }
}

fn parse_time(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIME_FORMAT)
        .map_err(|_| CarParkError::Format(format!("bad timestamp: {:?}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIME_FORMAT).unwrap()
    }

    #[test]
    fn normalizes_registration() {
        assert_eq!(normalize_registration("  ab12 cde "), "AB12 CDE");
    }

    #[test]
    fn active_row_round_trips() {
        let record = ParkingRecord::new(
            "AB12 CDE".into(),
            "AB12CDE4821".into(),
            3,
            ts("09:15:00 2024-01-01"),
        );
        let row = record.to_row();
        assert_eq!(row, "AB12 CDE,AB12CDE4821,3,09:15:00 2024-01-01,,");
        assert_eq!(ParkingRecord::from_row(&row).unwrap(), record);
    }

    #[test]
    fn closed_row_round_trips() {
        let mut record = ParkingRecord::new(
            "AB12 CDE".into(),
            "AB12CDE4821".into(),
            1,
            ts("09:00:00 2024-01-01"),
        );
        record.exit_time = Some(ts("11:30:00 2024-01-01"));
        record.fee = Some(5.0);
        let row = record.to_row();
        assert!(row.ends_with(",11:30:00 2024-01-01,5.00"));
        let parsed = ParkingRecord::from_row(&row).unwrap();
        assert_eq!(parsed.exit_time, record.exit_time);
        assert_eq!(parsed.fee, Some(5.0));
        assert!(!parsed.is_active());
    }

    #[test]
    fn rejects_malformed_rows() {
        assert!(ParkingRecord::from_row("too,few,columns").is_err());
        assert!(ParkingRecord::from_row("R,T,not-a-number,09:00:00 2024-01-01,,").is_err());
        assert!(ParkingRecord::from_row("R,T,1,2024-01-01 09:00:00,,").is_err());
    }
}
