use std::sync::Arc;

use gondola_core::repository::{BasePriceRepository, HolidayRepository};

#[derive(Clone)]
pub struct AppState {
    pub prices: Arc<dyn BasePriceRepository>,
    pub holidays: Arc<dyn HolidayRepository>,
}
