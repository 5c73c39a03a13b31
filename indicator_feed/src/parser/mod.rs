//! Parsers for the upstream payloads.
//!
//! Each parser takes the response body as text and returns a typed record or
//! an `IndicatorError`; none of them touch the network, so they are tested
//! against literal fixtures.
//! - `ticker`: market-ticker JSON array.
//! - `network`: statistics page with an embedded JSON blob.
//! - `exchange`: BitGrail and Kucoin public tickers.
//! - `market_list`: line-scraped per-exchange prices from the currency page.
//! - `version`: published version literal.
use serde_json::Value;

pub mod exchange;
pub mod market_list;
pub mod network;
pub mod ticker;
pub mod version;

/// Renders a JSON scalar the way it should appear in a label: strings
/// without quotes, numbers verbatim, `null` as `n/a`.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "n/a".to_string(),
        other => other.to_string(),
    }
}

/// Reads a JSON number or numeric string as `f64`.
pub(crate) fn value_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
