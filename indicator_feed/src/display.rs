//! Display state rendered by the presentation layer.
//!
//! `DisplayState` is the only state carried from one cycle to the next: the
//! formatted text of every field, the listing lines, the user's preferences
//! (default field, notification toggle) and whether the previous cycle was
//! already above the arbitrage threshold. Applying a [`CycleReport`] rewrites
//! each source's fields independently of the others.
use std::collections::HashMap;

use chrono::{DateTime, Local};
use indicator_common::FieldId;
use indicator_common::snapshot::{ExchangeQuote, MarketTicker, NetworkSnapshot, TickerSnapshot};
use log::info;
use strum::IntoEnumIterator;

use crate::arbitrage::{ArbitrageResult, compute_arbitrage};
use crate::config::FeedConfig;
use crate::cycle::CycleReport;
use crate::parser::version::VersionStatus;

/// Placeholder line for listings whose source failed.
pub const ERROR_RECEIVING: &str = "Error receiving data";
/// Title of the arbitrage notification.
pub const ARBITRAGE_TITLE: &str = "Arbitrage Opportunity";

/// Title and body of a notification to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Formatted state of every menu field.
#[derive(Debug, Clone)]
pub struct DisplayState {
    labels: HashMap<FieldId, String>,
    top_listing: Vec<String>,
    market_list: Vec<String>,
    default_field: FieldId,
    notify_enabled: bool,
    last_updated: Option<DateTime<Local>>,
    above_threshold: bool,
}

impl DisplayState {
    /// Every field reads "Unknown" until the first cycle.
    pub fn new(default_field: FieldId, notify_enabled: bool) -> Self {
        Self {
            labels: FieldId::iter().map(|f| (f, f.unknown_label())).collect(),
            top_listing: Vec::new(),
            market_list: Vec::new(),
            default_field,
            notify_enabled,
            last_updated: None,
            above_threshold: false,
        }
    }

    /// Current text of `field`.
    pub fn label(&self, field: FieldId) -> &str {
        self.labels.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Text mirrored onto the compact status label.
    pub fn status_label(&self) -> &str {
        self.label(self.default_field)
    }

    pub fn default_field(&self) -> FieldId {
        self.default_field
    }

    pub fn notify_enabled(&self) -> bool {
        self.notify_enabled
    }

    pub fn top_listing(&self) -> &[String] {
        &self.top_listing
    }

    pub fn market_list(&self) -> &[String] {
        &self.market_list
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn last_updated_label(&self) -> String {
        match self.last_updated {
            Some(at) => format!("Last Updated: {}", at.format("%Y-%m-%d %H:%M:%S")),
            None => "Last Updated: Never".to_string(),
        }
    }

    /// Label of the menu entry that flips the notification toggle.
    pub fn notify_toggle_label(&self) -> &'static str {
        if self.notify_enabled {
            "Disable Arb Notifications"
        } else {
            "Enable Arb Notifications"
        }
    }

    pub fn set_default(&mut self, field: FieldId) {
        self.default_field = field;
    }

    /// Flips the notification toggle and returns the new value.
    pub fn toggle_notify(&mut self) -> bool {
        self.notify_enabled = !self.notify_enabled;
        self.notify_enabled
    }

    /// Rewrites every field from `report`; returns the notification to show,
    /// if the arbitrage return newly crossed the threshold.
    pub fn apply_report(&mut self, report: CycleReport, config: &FeedConfig) -> Option<Notification> {
        self.last_updated = Some(report.started_at);

        match &report.ticker {
            Ok(ticker) => self.show_ticker(ticker),
            Err(_) => {
                self.show_errors(&MARKET_FIELDS);
                self.top_listing = vec![ERROR_RECEIVING.to_string()];
            }
        }

        match &report.network {
            Ok(stats) => self.show_network(stats),
            Err(_) => self.show_errors(&NETWORK_FIELDS),
        }

        for (field, quote) in [
            (FieldId::BitGrail, &report.bitgrail),
            (FieldId::Kucoin, &report.kucoin),
        ] {
            match quote {
                Ok(q) => self.set(field, format!("{}: {} | {}", field.title(), q.ask, q.bid)),
                Err(_) => self.set(field, field.error_label()),
            }
        }

        let notification = match (&report.bitgrail, &report.kucoin) {
            (Ok(bitgrail), Ok(kucoin)) => {
                let result = compute_arbitrage(bitgrail, kucoin);
                self.set(FieldId::Arbitrage, result.description.clone());
                self.arbitrage_notification(&result, config.notify_threshold)
            }
            _ => {
                self.set(FieldId::Arbitrage, FieldId::Arbitrage.error_label());
                self.above_threshold = false;
                None
            }
        };

        if let Some(markets) = &report.markets {
            self.market_list = markets.iter().map(market_line).collect();
        }

        if let Some(version) = &report.version {
            let text = match version {
                VersionStatus::UpToDate => format!("Version: {}", config.current_version),
                VersionStatus::UpdateAvailable(latest) => format!(
                    "Version: {} (update available: {})",
                    config.current_version, latest
                ),
            };
            self.set(FieldId::Version, text);
        }

        notification
    }

    fn arbitrage_notification(&mut self, result: &ArbitrageResult, threshold: f64) -> Option<Notification> {
        let above = result.valid && result.best_return > threshold;
        if !self.notify_enabled {
            // the edge is only tracked while notifications are on
            if above {
                info!("Arbitrage at {:.2}% (notifications disabled)", result.percent());
            }
            self.above_threshold = false;
            return None;
        }

        let newly_above = above && !self.above_threshold;
        self.above_threshold = above;
        if !newly_above {
            return None;
        }
        Some(Notification {
            title: ARBITRAGE_TITLE.to_string(),
            body: result.description.clone(),
        })
    }

    fn show_ticker(&mut self, ticker: &MarketTicker) {
        let t = &ticker.asset;
        self.set(FieldId::PriceUsd, format!("${}", text(&t.price_usd)));
        self.set(FieldId::PriceBtc, format!("฿{}", text(&t.price_btc)));
        self.set(FieldId::Change1h, format!("1h: {}%", text(&t.percent_change_1h)));
        self.set(FieldId::Change24h, format!("24h: {}%", text(&t.percent_change_24h)));
        self.set(FieldId::Change7d, format!("7d: {}%", text(&t.percent_change_7d)));
        self.set(FieldId::Volume24h, format!("Volume: ${}", text(&t.volume_24h_usd)));
        self.set(FieldId::MarketCap, format!("Market Cap: ${}", text(&t.market_cap_usd)));
        self.set(FieldId::Rank, format!("CMC Rank: #{}", text(&t.rank)));

        self.top_listing = ticker
            .top
            .iter()
            .enumerate()
            .map(|(i, t)| top_line(i + 1, t))
            .collect();
    }

    fn show_network(&mut self, stats: &NetworkSnapshot) {
        self.set(FieldId::BlockCount, format!("Block Count: {}", stats.block_count));
        self.set(FieldId::PeerCount, format!("Peer Count: {}", stats.peer_count));
        self.set(FieldId::TxRate5s, format!("5s: {:.3} tps", stats.tx_rate_5_sec));
        self.set(FieldId::TxRate1m, format!("1m: {:.3} tps", stats.tx_rate_1_min));
        self.set(FieldId::TxRate30m, format!("30m: {:.3} tps", stats.tx_rate_30_min));
        self.set(FieldId::TxRate24h, format!("24h: {:.3} tps", stats.tx_rate_24_hr));
        self.set(FieldId::Frontiers, format!("Frontiers: {}", stats.frontier_count));
    }

    fn show_errors(&mut self, fields: &[FieldId]) {
        for field in fields {
            self.set(*field, field.error_label());
        }
    }

    fn set(&mut self, field: FieldId, text: String) {
        self.labels.insert(field, text);
    }
}

const MARKET_FIELDS: [FieldId; 8] = [
    FieldId::PriceUsd,
    FieldId::PriceBtc,
    FieldId::Change1h,
    FieldId::Change24h,
    FieldId::Change7d,
    FieldId::Volume24h,
    FieldId::MarketCap,
    FieldId::Rank,
];

const NETWORK_FIELDS: [FieldId; 7] = [
    FieldId::BlockCount,
    FieldId::PeerCount,
    FieldId::TxRate5s,
    FieldId::TxRate1m,
    FieldId::TxRate30m,
    FieldId::TxRate24h,
    FieldId::Frontiers,
];

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("n/a")
}

fn top_line(position: usize, t: &TickerSnapshot) -> String {
    format!(
        "{}.) {}: ${} ( 1h:{}% | 24h:{}% | 7d:{}% )",
        position,
        t.name.as_deref().unwrap_or(&t.id),
        text(&t.price_usd),
        text(&t.percent_change_1h),
        text(&t.percent_change_24h),
        text(&t.percent_change_7d)
    )
}

fn market_line(quote: &ExchangeQuote) -> String {
    format!("{} ({}): {}", quote.exchange, quote.unit, quote.bid)
}
