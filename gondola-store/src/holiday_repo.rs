use async_trait::async_trait;

use gondola_core::date;
use gondola_core::repository::HolidayRepository;
use gondola_core::ticket::HolidayRecord;
use gondola_core::{CoreError, CoreResult};

/// Holiday calendar backed by the configured holiday list.
///
/// The list is fixed at startup; there is no endpoint for editing holidays.
#[derive(Debug)]
pub struct MemoryHolidayRepository {
    records: Vec<HolidayRecord>,
}

impl MemoryHolidayRepository {
    /// Builds the calendar from configured date strings, rejecting any entry
    /// that does not normalize to a civil date.
    pub fn from_dates(dates: &[String]) -> CoreResult<Self> {
        for raw in dates {
            if date::parse_calendar_date(raw).is_none() {
                return Err(CoreError::ValidationError(format!(
                    "unparsable holiday date '{raw}' in configuration"
                )));
            }
        }
        let records: Vec<HolidayRecord> = dates
            .iter()
            .map(|raw| HolidayRecord { holiday: raw.clone() })
            .collect();
        tracing::debug!("holiday calendar seeded with {} dates", records.len());
        Ok(Self { records })
    }
}

#[async_trait]
impl HolidayRepository for MemoryHolidayRepository {
    async fn holidays(&self) -> Result<Vec<HolidayRecord>, Box<dyn std::error::Error + Send + Sync>>
    {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn yields_configured_records() {
        let repo = MemoryHolidayRepository::from_dates(&[
            "2019-02-18".to_string(),
            "2019-02-25".to_string(),
        ])
        .unwrap();

        let records = repo.holidays().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].holiday, "2019-02-18");
    }

    #[test]
    fn rejects_unparsable_dates() {
        let err = MemoryHolidayRepository::from_dates(&["someday".to_string()]).unwrap_err();
        assert!(err.to_string().contains("someday"));
    }

    #[test]
    fn accepts_an_empty_calendar() {
        let repo = MemoryHolidayRepository::from_dates(&[]).unwrap();
        assert!(repo.records.is_empty());
    }
}
