use async_trait::async_trait;

use crate::ticket::{BasePrice, HolidayRecord};

/// Repository trait for base price access
#[async_trait]
pub trait BasePriceRepository: Send + Sync {
    async fn set_base_price(
        &self,
        kind: &str,
        cost: u32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// `None` means the ticket type has no base price on record.
    async fn find_base_price(
        &self,
        kind: &str,
    ) -> Result<Option<BasePrice>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for the holiday calendar
#[async_trait]
pub trait HolidayRepository: Send + Sync {
    async fn holidays(&self) -> Result<Vec<HolidayRecord>, Box<dyn std::error::Error + Send + Sync>>;
}
