pub mod app_config;
pub mod holiday_repo;
pub mod price_repo;

pub use holiday_repo::MemoryHolidayRepository;
pub use price_repo::MemoryPriceRepository;
