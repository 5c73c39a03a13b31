//! Identifiers of the labelled fields shown in the indicator menu.

use clap::ValueEnum;
use strum_macros::{Display, EnumIter, EnumString};

/// Placeholder shown before a field has ever been refreshed.
pub const UNKNOWN: &str = "Unknown";
/// Placeholder shown when the source behind a field failed during a refresh.
pub const ERROR_RX: &str = "Error Rx";

/// Menu section a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    /// Values from the market-ticker endpoint.
    Market,
    /// Values from the network statistics page.
    Network,
    /// Exchange quotes and the derived arbitrage line.
    Exchange,
    /// Informational lines (version).
    About,
}

/// Every single-line field the refresh cycle can update.
///
/// The string form is used on the command line and in stdin
/// commands, e.g. `default tx-rate-1m`.
#[derive(
    Debug,
    Clone,
    Copy,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
)]
#[strum(ascii_case_insensitive)]
pub enum FieldId {
    /// Price in USD.
    #[value(name = "price-usd")]
    #[strum(to_string = "price-usd")]
    PriceUsd,
    /// Price in BTC.
    #[value(name = "price-btc")]
    #[strum(to_string = "price-btc")]
    PriceBtc,
    /// Price change over one hour.
    #[value(name = "change-1h")]
    #[strum(to_string = "change-1h")]
    Change1h,
    /// Price change over 24 hours.
    #[value(name = "change-24h")]
    #[strum(to_string = "change-24h")]
    Change24h,
    /// Price change over seven days.
    #[value(name = "change-7d")]
    #[strum(to_string = "change-7d")]
    Change7d,
    /// Traded volume over 24 hours.
    #[value(name = "volume-24h")]
    #[strum(to_string = "volume-24h")]
    Volume24h,
    /// Market capitalisation.
    #[value(name = "market-cap")]
    #[strum(to_string = "market-cap")]
    MarketCap,
    /// Market-cap rank.
    #[value(name = "rank")]
    #[strum(to_string = "rank")]
    Rank,
    /// Ledger block count.
    #[value(name = "block-count")]
    #[strum(to_string = "block-count")]
    BlockCount,
    /// Connected peers.
    #[value(name = "peer-count")]
    #[strum(to_string = "peer-count")]
    PeerCount,
    /// Transaction rate over 5 seconds.
    #[value(name = "tx-rate-5s")]
    #[strum(to_string = "tx-rate-5s")]
    TxRate5s,
    /// Transaction rate over one minute.
    #[value(name = "tx-rate-1m")]
    #[strum(to_string = "tx-rate-1m")]
    TxRate1m,
    /// Transaction rate over 30 minutes.
    #[value(name = "tx-rate-30m")]
    #[strum(to_string = "tx-rate-30m")]
    TxRate30m,
    /// Transaction rate over 24 hours.
    #[value(name = "tx-rate-24h")]
    #[strum(to_string = "tx-rate-24h")]
    TxRate24h,
    /// Account frontier count.
    #[value(name = "frontiers")]
    #[strum(to_string = "frontiers")]
    Frontiers,
    /// Best cross-exchange arbitrage return.
    #[value(name = "arbitrage")]
    #[strum(to_string = "arbitrage")]
    Arbitrage,
    /// BitGrail ask and bid.
    #[value(name = "bitgrail")]
    #[strum(to_string = "bitgrail")]
    BitGrail,
    /// Kucoin ask and bid.
    #[value(name = "kucoin")]
    #[strum(to_string = "kucoin")]
    Kucoin,
    /// Running version and update hint.
    #[value(name = "version")]
    #[strum(to_string = "version")]
    Version,
}

impl FieldId {
    /// Human-readable title used as the label prefix for placeholders.
    pub fn title(&self) -> &'static str {
        match self {
            FieldId::PriceUsd => "USD",
            FieldId::PriceBtc => "BTC",
            FieldId::Change1h => "1h",
            FieldId::Change24h => "24h",
            FieldId::Change7d => "7d",
            FieldId::Volume24h => "Volume",
            FieldId::MarketCap => "Market Cap",
            FieldId::Rank => "CMC Rank",
            FieldId::BlockCount => "Block Count",
            FieldId::PeerCount => "Peer Count",
            FieldId::TxRate5s => "5s",
            FieldId::TxRate1m => "1m",
            FieldId::TxRate30m => "30m",
            FieldId::TxRate24h => "24h",
            FieldId::Frontiers => "Frontiers",
            FieldId::Arbitrage => "Arb",
            FieldId::BitGrail => "BitGrail (BTC)",
            FieldId::Kucoin => "Kucoin (BTC)",
            FieldId::Version => "Version",
        }
    }

    /// Section of the menu the field is rendered in.
    pub fn group(&self) -> FieldGroup {
        match self {
            FieldId::PriceUsd
            | FieldId::PriceBtc
            | FieldId::Change1h
            | FieldId::Change24h
            | FieldId::Change7d
            | FieldId::Volume24h
            | FieldId::MarketCap
            | FieldId::Rank => FieldGroup::Market,
            FieldId::BlockCount
            | FieldId::PeerCount
            | FieldId::TxRate5s
            | FieldId::TxRate1m
            | FieldId::TxRate30m
            | FieldId::TxRate24h
            | FieldId::Frontiers => FieldGroup::Network,
            FieldId::Arbitrage | FieldId::BitGrail | FieldId::Kucoin => FieldGroup::Exchange,
            FieldId::Version => FieldGroup::About,
        }
    }

    /// Label shown before the first refresh.
    pub fn unknown_label(&self) -> String {
        format!("{}: {}", self.title(), UNKNOWN)
    }

    /// Label shown after the field's source failed.
    pub fn error_label(&self) -> String {
        format!("{}: {}", self.title(), ERROR_RX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!("price-usd".parse::<FieldId>().unwrap(), FieldId::PriceUsd);
        assert_eq!("TX-RATE-1M".parse::<FieldId>().unwrap(), FieldId::TxRate1m);
        assert_eq!(FieldId::BitGrail.to_string(), "bitgrail");
        assert!("price-eur".parse::<FieldId>().is_err());
    }

    #[test]
    fn placeholders_carry_title() {
        assert_eq!(FieldId::PriceUsd.unknown_label(), "USD: Unknown");
        assert_eq!(FieldId::Frontiers.error_label(), "Frontiers: Error Rx");
        for field in FieldId::iter() {
            assert!(field.error_label().ends_with(ERROR_RX));
        }
    }
}
