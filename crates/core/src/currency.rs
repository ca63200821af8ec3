//! Fixed-rate currency conversion for price display.
//!
//! Rates are a static lookup table with INR as the base currency. They are
//! approximate and informational only; nothing here touches payments.

use serde::Serialize;

use crate::error::CoreError;

/// One supported currency: code, display name, symbol, and the fixed rate
/// expressed as `1 INR = rate_from_inr <code>`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub rate_from_inr: f64,
}

/// Supported currencies, INR first.
pub const CURRENCIES: &[Currency] = &[
    Currency { code: "INR", name: "Indian Rupee", symbol: "\u{20b9}", rate_from_inr: 1.0 },
    Currency { code: "USD", name: "US Dollar", symbol: "$", rate_from_inr: 0.01198 },
    Currency { code: "EUR", name: "Euro", symbol: "\u{20ac}", rate_from_inr: 0.01111 },
    Currency { code: "GBP", name: "British Pound", symbol: "\u{a3}", rate_from_inr: 0.00952 },
    Currency { code: "AED", name: "UAE Dirham", symbol: "\u{62f}.\u{625}", rate_from_inr: 0.04396 },
    Currency { code: "SGD", name: "Singapore Dollar", symbol: "S$", rate_from_inr: 0.01613 },
    Currency { code: "AUD", name: "Australian Dollar", symbol: "A$", rate_from_inr: 0.01852 },
    Currency { code: "CAD", name: "Canadian Dollar", symbol: "C$", rate_from_inr: 0.01639 },
];

/// Look up a currency by its code (case-sensitive, upper-case codes).
pub fn find(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Convert an amount between two supported currencies via INR.
///
/// Returns the converted amount rounded to 2 decimal places, or a
/// [`CoreError::Validation`] naming the unknown code.
pub fn convert(amount: f64, from: &str, to: &str) -> Result<f64, CoreError> {
    let from = find(from)
        .ok_or_else(|| CoreError::Validation(format!("Unknown source currency: {from}")))?;
    let to =
        find(to).ok_or_else(|| CoreError::Validation(format!("Unknown target currency: {to}")))?;

    let amount_in_inr = amount / from.rate_from_inr;
    let converted = amount_in_inr * to.rate_from_inr;
    Ok((converted * 100.0).round() / 100.0)
}

/// Format an amount with its currency symbol and thousands separators,
/// e.g. `format_amount(1198.0, "USD")` -> `"$1,198.00"`.
pub fn format_amount(amount: f64, code: &str) -> String {
    let symbol = find(code).map(|c| c.symbol).unwrap_or(code);
    format!("{symbol}{}", group_thousands(amount))
}

/// Render `amount` with 2 decimals and `,` thousands separators.
fn group_thousands(amount: f64) -> String {
    let raw = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
