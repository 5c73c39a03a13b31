//! Transient records produced by one refresh cycle.
//!
//! Nothing here has an identity beyond "most recent": each cycle replaces the
//! previous values wholesale and nothing is persisted.
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use strum_macros::{Display, EnumIter};

/// One asset record from the market-ticker endpoint.
///
/// Upstream usually encodes numbers as strings but may send bare numbers or
/// `null`, so every field is kept as optional raw text and formatted as-is.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TickerSnapshot {
    /// Upstream identifier (`raiblocks`); records without one are unusable.
    #[serde(deserialize_with = "required_text")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    /// Ticker symbol.
    #[serde(default, deserialize_with = "scalar_text")]
    pub symbol: Option<String>,
    /// Market-cap rank.
    #[serde(default, deserialize_with = "scalar_text")]
    pub rank: Option<String>,
    /// Price in USD.
    #[serde(default, deserialize_with = "scalar_text")]
    pub price_usd: Option<String>,
    /// Price in BTC.
    #[serde(default, deserialize_with = "scalar_text")]
    pub price_btc: Option<String>,
    /// Traded volume over 24 hours, in USD.
    #[serde(default, rename = "24h_volume_usd", deserialize_with = "scalar_text")]
    pub volume_24h_usd: Option<String>,
    /// Market capitalisation in USD.
    #[serde(default, deserialize_with = "scalar_text")]
    pub market_cap_usd: Option<String>,
    /// Price change over one hour, in percent.
    #[serde(default, deserialize_with = "scalar_text")]
    pub percent_change_1h: Option<String>,
    /// Price change over 24 hours, in percent.
    #[serde(default, deserialize_with = "scalar_text")]
    pub percent_change_24h: Option<String>,
    /// Price change over seven days, in percent.
    #[serde(default, deserialize_with = "scalar_text")]
    pub percent_change_7d: Option<String>,
}

/// Any JSON scalar as text; `null` is `None`.
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn required_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_text(deserializer)?.ok_or_else(|| serde::de::Error::custom("null id"))
}

/// The tracked asset together with the leading assets of the same response.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketTicker {
    /// Record of the tracked asset.
    pub asset: TickerSnapshot,
    /// First entries of the response, in upstream (rank) order.
    pub top: Vec<TickerSnapshot>,
}

/// Network health figures from the statistics page.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSnapshot {
    /// Number of blocks in the ledger.
    pub block_count: String,
    /// Number of connected peers.
    pub peer_count: String,
    /// Transactions per second over the last 5 seconds.
    pub tx_rate_5_sec: f64,
    /// Transactions per second over the last minute.
    pub tx_rate_1_min: f64,
    /// Transactions per second over the last 30 minutes.
    pub tx_rate_30_min: f64,
    /// Transactions per second over the last 24 hours.
    pub tx_rate_24_hr: f64,
    /// Number of account frontiers.
    pub frontier_count: String,
}

/// Exchanges with a public ticker the arbitrage line is computed from.
#[derive(Debug, Clone, Copy, Display, EnumIter, Hash, Eq, PartialEq)]
pub enum Exchange {
    /// BitGrail, quoting `XRB/BTC`.
    #[strum(to_string = "BitGrail")]
    BitGrail,
    /// Kucoin, quoting `XRB-BTC`.
    #[strum(to_string = "Kucoin")]
    Kucoin,
}

impl Exchange {
    /// Short venue code used in the arbitrage description.
    pub fn code(&self) -> &'static str {
        match self {
            Exchange::BitGrail => "BG",
            Exchange::Kucoin => "Ku",
        }
    }
}

/// Two-sided quote for the tracked pair on one venue.
///
/// Prices are the raw upstream text so labels show exactly what the venue
/// reported; they are parsed only when a calculation needs them. Entries
/// scraped from the market list carry the last traded price on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeQuote {
    /// Venue name as shown in labels.
    pub exchange: String,
    /// Short venue code (`BG`, `Ku`); equals `exchange` for scraped entries.
    pub code: String,
    /// Quote currency of the pair (e.g. `BTC`).
    pub unit: String,
    /// Highest buy price.
    pub bid: String,
    /// Lowest sell price.
    pub ask: String,
}

impl ExchangeQuote {
    /// Quote for one of the fixed exchanges.
    pub fn new(exchange: Exchange, unit: &str, bid: String, ask: String) -> Self {
        ExchangeQuote {
            exchange: exchange.to_string(),
            code: exchange.code().to_string(),
            unit: unit.to_string(),
            bid,
            ask,
        }
    }

    /// Entry of the scraped market list; only a last price is known.
    pub fn last_price(exchange: &str, unit: &str, price: &str) -> Self {
        ExchangeQuote {
            exchange: exchange.to_string(),
            code: exchange.to_string(),
            unit: unit.to_string(),
            bid: price.to_string(),
            ask: price.to_string(),
        }
    }

    /// Composite key the market list is sorted by.
    pub fn sort_key(&self) -> String {
        format!("{}{}", self.exchange, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_tolerates_nulls_and_missing_fields() {
        let json = r#"{"id":"raiblocks","price_usd":"3.50","price_btc":null,"24h_volume_usd":"1000.0"}"#;
        let ticker: TickerSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.price_usd.as_deref(), Some("3.50"));
        assert_eq!(ticker.price_btc, None);
        assert_eq!(ticker.volume_24h_usd.as_deref(), Some("1000.0"));
        assert_eq!(ticker.rank, None);
    }

    #[test]
    fn ticker_accepts_bare_numbers() {
        let json = r#"{"id":"bitcoin","rank":1,"price_usd":10300.5,"percent_change_1h":-0.25}"#;
        let ticker: TickerSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.rank.as_deref(), Some("1"));
        assert_eq!(ticker.price_usd.as_deref(), Some("10300.5"));
        assert_eq!(ticker.percent_change_1h.as_deref(), Some("-0.25"));
    }

    #[test]
    fn ticker_requires_an_id() {
        assert!(serde_json::from_str::<TickerSnapshot>(r#"{"name":"Anon"}"#).is_err());
        assert!(serde_json::from_str::<TickerSnapshot>(r#"{"id":null}"#).is_err());
    }

    #[test]
    fn quote_constructors() {
        let q = ExchangeQuote::new(Exchange::Kucoin, "BTC", "0.1".into(), "0.2".into());
        assert_eq!(q.exchange, "Kucoin");
        assert_eq!(q.code, "Ku");
        let s = ExchangeQuote::last_price("Binance", "BTC", "0.0009");
        assert_eq!(s.bid, s.ask);
        assert_eq!(s.sort_key(), "BinanceBTC");
    }
}
