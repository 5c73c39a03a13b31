//! Public ticker endpoints of the two fixed exchanges.
use indicator_common::snapshot::{Exchange, ExchangeQuote};
use indicator_common::{IndicatorError, Result};
use serde_json::Value;

use super::value_text;

/// Quote currency of the tracked pair on both venues.
pub const UNIT: &str = "BTC";
/// Path of the tracked market in the BitGrail response (`XRB/BTC`, `/` escaped).
pub const BITGRAIL_MARKET: &str = "/response/BTC/markets/XRB~1BTC";
/// Symbol of the tracked pair in the Kucoin response.
pub const KUCOIN_SYMBOL: &str = "XRB-BTC";

/// Parses the response of `exchange`'s ticker endpoint.
pub fn parse_quote(exchange: Exchange, body: &str) -> Result<ExchangeQuote> {
    match exchange {
        Exchange::BitGrail => parse_bitgrail(body),
        Exchange::Kucoin => parse_kucoin(body),
    }
}

/// BitGrail nests the market at a fixed path with `bid` / `ask` fields.
pub fn parse_bitgrail(body: &str) -> Result<ExchangeQuote> {
    let data: Value = serde_json::from_str(body)?;
    let market = data
        .pointer(BITGRAIL_MARKET)
        .ok_or_else(|| IndicatorError::MissingKey("response.BTC.markets.XRB/BTC".to_string()))?;

    Ok(ExchangeQuote::new(
        Exchange::BitGrail,
        UNIT,
        field(market, "bid")?,
        field(market, "ask")?,
    ))
}

/// Kucoin lists every pair under `data`; `buy` is the bid and `sell` the ask.
pub fn parse_kucoin(body: &str) -> Result<ExchangeQuote> {
    let data: Value = serde_json::from_str(body)?;
    let tick = data
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| IndicatorError::MissingKey("data".to_string()))?
        .iter()
        .find(|entry| entry.get("symbol").and_then(Value::as_str) == Some(KUCOIN_SYMBOL))
        .ok_or_else(|| IndicatorError::MissingKey(format!("symbol '{}'", KUCOIN_SYMBOL)))?;

    Ok(ExchangeQuote::new(
        Exchange::Kucoin,
        UNIT,
        field(tick, "buy")?,
        field(tick, "sell")?,
    ))
}

fn field(object: &Value, key: &str) -> Result<String> {
    object
        .get(key)
        .map(value_text)
        .ok_or_else(|| IndicatorError::MissingKey(key.to_string()))
}
