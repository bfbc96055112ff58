use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use gondola_core::date::parse_calendar_date;
use gondola_core::tariff::{self, HolidaySet};
use gondola_core::ticket::{TicketKind, TicketRequest};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SetPriceParams {
    #[serde(rename = "type")]
    pub kind: String,
    pub cost: u32,
}

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    #[serde(rename = "type")]
    pub kind: String,
    pub age: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub cost: u32,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/prices", get(quote_price).put(set_base_price))
}

// ============================================================================
// Handlers
// ============================================================================

/// PUT /prices?type=<string>&cost=<integer>
/// Set the base price for a ticket type
pub async fn set_base_price(
    State(state): State<AppState>,
    Query(params): Query<SetPriceParams>,
) -> Result<Json<Value>, AppError> {
    state.prices.set_base_price(&params.kind, params.cost).await?;
    tracing::debug!("base price for '{}' set to {}", params.kind, params.cost);

    Ok(Json(json!({})))
}

/// GET /prices?type=<string>&age=<integer>&date=<ISO date>
/// Quote the computed cost for a ticket
pub async fn quote_price(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> Result<Json<QuoteResponse>, AppError> {
    // 1. Look up the base cost; unknown types are a request failure
    let base = state.prices.find_base_price(&params.kind).await?.ok_or_else(|| {
        AppError::NotFound(format!("no base price for ticket type '{}'", params.kind))
    })?;

    // 2. Normalize the optional inputs. Malformed ages and dates become
    //    absent rather than failing the request.
    let age = params.age.as_deref().and_then(|raw| raw.parse::<u32>().ok());
    let date = params.date.as_deref().and_then(parse_calendar_date);

    // 3. Fetch the holiday calendar and price the request
    let records = state.holidays.holidays().await?;
    let holidays = HolidaySet::from_records(&records);

    let request = TicketRequest {
        kind: TicketKind::from_type_name(&params.kind),
        age,
        date,
    };
    let cost = tariff::compute_cost(&request, base.cost, &holidays);

    Ok(Json(QuoteResponse { cost }))
}
