use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ticket kinds with distinct pricing rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketKind {
    Day,
    Night,
}

impl TicketKind {
    /// Only `"night"` selects the night rules; every other ticket type the
    /// venue sells is priced as a day ticket.
    pub fn from_type_name(name: &str) -> Self {
        if name == "night" {
            TicketKind::Night
        } else {
            TicketKind::Day
        }
    }
}

/// A single pricing request, normalized at the boundary.
///
/// Absent fields are genuinely absent (`None`), never sentinel values: an
/// absent age means "no age-based rule applies", an absent date disables the
/// weekday reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRequest {
    pub kind: TicketKind,
    pub age: Option<u32>,
    pub date: Option<NaiveDate>,
}

/// Base price entry, keyed by ticket-type string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasePrice {
    pub kind: String,
    pub cost: u32,
}

/// Raw holiday calendar entry as the collaborator yields it; the date-like
/// string may carry a time-of-day that civil-date matching discards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub holiday: String,
}
