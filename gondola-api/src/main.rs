use std::net::SocketAddr;
use std::sync::Arc;

use gondola_api::{app, AppState};
use gondola_store::app_config::Config;
use gondola_store::{MemoryHolidayRepository, MemoryPriceRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gondola_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting Gondola API on port {}", config.server.port);

    let prices = Arc::new(MemoryPriceRepository::with_seed(&config.tariff.base_prices));
    let holidays = Arc::new(MemoryHolidayRepository::from_dates(&config.tariff.holidays)?);
    tracing::info!(
        "Seeded {} base prices and {} holidays",
        config.tariff.base_prices.len(),
        config.tariff.holidays.len()
    );

    let app = app(AppState { prices, holidays });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
