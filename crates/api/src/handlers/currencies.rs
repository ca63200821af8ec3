//! Public handlers for the currency-display helper.

use axum::extract::Query;
use axum::Json;
use portal_core::currency;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::AppResult;

/// GET /api/v1/currencies
///
/// Lists all supported currencies with their fixed INR-based rates.
pub async fn list_currencies() -> Json<Value> {
    Json(json!({ "currencies": currency::CURRENCIES }))
}

/// Query parameters for `GET /api/v1/currencies/convert`.
#[derive(Debug, Deserialize)]
pub struct ConvertParams {
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub from: String,
    #[serde(default = "default_currency")]
    pub to: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

/// Response body for a conversion.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub converted: f64,
    /// Converted amount with the target currency's symbol, e.g. `"$1,198.00"`.
    pub formatted: String,
}

/// GET /api/v1/currencies/convert?amount=..&from=..&to=..
pub async fn convert(Query(params): Query<ConvertParams>) -> AppResult<Json<ConvertResponse>> {
    let converted = currency::convert(params.amount, &params.from, &params.to)?;
    let formatted = currency::format_amount(converted, &params.to);

    Ok(Json(ConvertResponse {
        amount: params.amount,
        from: params.from,
        to: params.to,
        converted,
        formatted,
    }))
}
