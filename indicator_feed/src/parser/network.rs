//! Network statistics page.
//!
//! The page is HTML; the figures live in a JSON blob assigned on a line that
//! starts with `__NEXT_DATA__`, e.g. `__NEXT_DATA__ = {"props": {...}}`.
//! The summary sits under `props.networkSummary` next to a large
//! `latest_transactions` array that is dropped.
use indicator_common::snapshot::NetworkSnapshot;
use indicator_common::{IndicatorError, Result};
use serde_json::{Map, Value};

use super::{value_f64, value_text};

/// Prefix of the line carrying the embedded JSON.
pub const MARKER: &str = "__NEXT_DATA__";
/// Sub-field removed from the summary before use.
pub const EXCLUDED_FIELD: &str = "latest_transactions";

/// Extracts `props.networkSummary` from the marker line, minus
/// [`EXCLUDED_FIELD`].
pub fn extract_network_summary(body: &str) -> Result<Map<String, Value>> {
    let payload = body
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(MARKER))
        .ok_or_else(|| IndicatorError::MissingMarker(MARKER.to_string()))?;

    let (_, json) = payload
        .split_once("= ")
        .ok_or_else(|| IndicatorError::MissingMarker(format!("{} assignment", MARKER)))?;
    let json = json.trim().trim_end_matches(';');

    let mut data: Value = serde_json::from_str(json)?;
    let mut summary = match data
        .pointer_mut("/props/networkSummary")
        .map(Value::take)
    {
        Some(Value::Object(map)) => map,
        _ => return Err(IndicatorError::MissingKey("props.networkSummary".to_string())),
    };
    summary.remove(EXCLUDED_FIELD);
    Ok(summary)
}

/// Parses the page into a [`NetworkSnapshot`].
pub fn parse_network_stats(body: &str) -> Result<NetworkSnapshot> {
    let summary = extract_network_summary(body)?;

    let text = |key: &str| {
        summary
            .get(key)
            .map(value_text)
            .ok_or_else(|| IndicatorError::MissingKey(key.to_string()))
    };
    let rate = |key: &str| {
        summary
            .get(key)
            .and_then(value_f64)
            .ok_or_else(|| IndicatorError::MissingKey(key.to_string()))
    };

    Ok(NetworkSnapshot {
        block_count: text("block_count")?,
        peer_count: text("peer_count")?,
        tx_rate_5_sec: rate("tx_rate_5_sec")?,
        tx_rate_1_min: rate("tx_rate_1_min")?,
        tx_rate_30_min: rate("tx_rate_30_min")?,
        tx_rate_24_hr: rate("tx_rate_24_hr")?,
        frontier_count: text("frontier_count")?,
    })
}
