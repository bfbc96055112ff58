use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date-like string into a civil calendar date.
///
/// Accepts a plain `YYYY-MM-DD` date as well as datetime forms (RFC 3339 or
/// a bare datetime); any time-of-day or zone component is discarded, since
/// tariff rules compare civil dates only. Returns `None` for anything that
/// does not normalize to a date.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime.date());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_date() {
        let date = parse_calendar_date("2024-12-25").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
    }

    #[test]
    fn discards_time_component() {
        let expected = NaiveDate::from_ymd_opt(2019, 2, 18).unwrap();
        assert_eq!(parse_calendar_date("2019-02-18 13:30:00"), Some(expected));
        assert_eq!(parse_calendar_date("2019-02-18T13:30:00"), Some(expected));
    }

    #[test]
    fn discards_zone_component() {
        // The civil date is taken as written, not shifted into another zone.
        let expected = NaiveDate::from_ymd_opt(2019, 2, 18).unwrap();
        assert_eq!(parse_calendar_date("2019-02-18T23:30:00+01:00"), Some(expected));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_calendar_date("not-a-date"), None);
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("2019-13-40"), None);
    }
}
