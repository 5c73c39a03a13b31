//! Market-ticker response: a JSON array with one record per asset.
use indicator_common::snapshot::{MarketTicker, TickerSnapshot};
use indicator_common::{IndicatorError, Result};
use log::debug;
use serde_json::Value;

/// Finds the record whose `id` equals `asset_id` and keeps the first
/// `top_len` records as the leading-assets listing.
///
/// Only the array itself must be well formed; records that are not objects
/// or carry no `id` are skipped.
pub fn parse_ticker(body: &str, asset_id: &str, top_len: usize) -> Result<MarketTicker> {
    let entries: Vec<Value> = serde_json::from_str(body)?;
    let records: Vec<TickerSnapshot> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("Skipping ticker record: {}", e);
                None
            }
        })
        .collect();
    let asset = records
        .iter()
        .find(|r| r.id == asset_id)
        .cloned()
        .ok_or_else(|| IndicatorError::MissingKey(format!("asset id '{}'", asset_id)))?;
    let top = records.into_iter().take(top_len).collect();
    Ok(MarketTicker { asset, top })
}
