use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::date;
use crate::ticket::{HolidayRecord, TicketKind, TicketRequest};

/// Civil dates on which the Monday reduction is suspended.
///
/// Built per request from the holiday calendar's records. Matching is by
/// (year, month, day) only; records carrying a time-of-day still match the
/// plain date.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    pub fn from_records(records: &[HolidayRecord]) -> Self {
        let dates = records
            .iter()
            .filter_map(|record| {
                let parsed = date::parse_calendar_date(&record.holiday);
                if parsed.is_none() {
                    tracing::warn!("ignoring unparsable holiday record '{}'", record.holiday);
                }
                parsed
            })
            .collect();
        Self { dates }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// Price a ticket request against its base cost.
///
/// Pure and total: no I/O, no failure paths. Malformed inputs never reach
/// this function; the boundary normalizes them to the absent branches.
pub fn compute_cost(request: &TicketRequest, base_cost: u32, holidays: &HolidaySet) -> u32 {
    match request.kind {
        TicketKind::Night => night_ticket_cost(request.age, base_cost),
        TicketKind::Day => day_ticket_cost(request.age, request.date, base_cost, holidays),
    }
}

fn night_ticket_cost(age: Option<u32>, base_cost: u32) -> u32 {
    let Some(age) = age else {
        // Night tickets without an age are free; day tickets are not.
        return 0;
    };
    if age < 6 {
        0
    } else if age > 64 {
        ceil_of(base_cost as f64 * 0.4)
    } else {
        base_cost
    }
}

fn day_ticket_cost(
    age: Option<u32>,
    date: Option<NaiveDate>,
    base_cost: u32,
    holidays: &HolidaySet,
) -> u32 {
    let reduction = calculate_reduction(date, holidays);
    let Some(age) = age else {
        return reduced(base_cost as f64, reduction);
    };
    if age < 6 {
        0
    } else if age < 15 {
        // Flat child rate, the weekday reduction never applies.
        ceil_of(base_cost as f64 * 0.7)
    } else if age > 64 {
        reduced(base_cost as f64 * 0.75, reduction)
    } else {
        reduced(base_cost as f64, reduction)
    }
}

/// Monday reduction in percent: 35 on a non-holiday Monday, 0 otherwise.
/// An absent date counts as a non-Monday.
fn calculate_reduction(date: Option<NaiveDate>, holidays: &HolidaySet) -> u32 {
    match date {
        Some(date) if date.weekday() == Weekday::Mon && !holidays.contains(date) => 35,
        _ => 0,
    }
}

fn reduced(amount: f64, reduction: u32) -> u32 {
    ceil_of(amount * (1.0 - reduction as f64 / 100.0))
}

// Fractional costs always round up; the venue never undercharges.
fn ceil_of(amount: f64) -> u32 {
    amount.ceil() as u32
}
