//! Service layer: one module per user-facing operation. Each `run` validates
//! raw input, drives the ledger, and maps the outcome to display messages.
//! No I/O happens here; the binary decides how messages reach the user.

use crate::model::ParkingRecord;

pub mod enter;
pub mod exit;
pub mod query;
pub mod spaces;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub record: Option<ParkingRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_record(mut self, record: ParkingRecord) -> Self {
        self.record = Some(record);
        self
    }

    /// Flatten to the plain display string the presentation boundary needs.
    pub fn display(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub(crate) fn availability_message(free: u32, capacity: u32) -> CmdMessage {
    CmdMessage::info(format!("Available Parking Spaces: {}/{}", free, capacity))
}
