//! Feed configuration: which endpoints to poll, how often, and what counts
//! as an arbitrage opportunity worth a notification.
use std::time::Duration;

use indicator_common::net;

/// Default refresh period.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);
/// Default arbitrage return above which a notification is emitted (1%).
pub const DEFAULT_NOTIFY_THRESHOLD: f64 = 0.01;
/// Number of leading assets kept from the market-ticker response.
pub const TOP_LISTING_LEN: usize = 20;

/// URLs of every upstream source.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    /// Market-ticker JSON array.
    pub ticker: String,
    /// Network statistics page.
    pub network_stats: String,
    /// BitGrail markets endpoint.
    pub bitgrail: String,
    /// Kucoin tick endpoint.
    pub kucoin: String,
    /// Currency page scraped for the market list.
    pub markets: String,
    /// File carrying the published version.
    pub version: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ticker: net::TICKER_URL.to_string(),
            network_stats: net::NETWORK_STATS_URL.to_string(),
            bitgrail: net::BITGRAIL_URL.to_string(),
            kucoin: net::KUCOIN_URL.to_string(),
            markets: net::MARKETS_URL.to_string(),
            version: net::VERSION_URL.to_string(),
        }
    }
}

/// Everything a refresh cycle needs besides the HTTP source.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    /// `id` of the tracked record in the market-ticker response.
    pub asset_id: String,
    /// Period between two timer-driven cycles.
    pub interval: Duration,
    /// Fractional return (0.01 == 1%) that triggers a notification.
    pub notify_threshold: f64,
    /// Scrape the per-exchange market list.
    pub scrape_markets: bool,
    /// Compare the running version with the published one.
    pub check_version: bool,
    /// Version string compared against the published one.
    pub current_version: String,
    /// Upstream URLs.
    pub endpoints: Endpoints,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            asset_id: net::DEFAULT_ASSET_ID.to_string(),
            interval: DEFAULT_INTERVAL,
            notify_threshold: DEFAULT_NOTIFY_THRESHOLD,
            scrape_markets: true,
            check_version: true,
            current_version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: Endpoints::default(),
        }
    }
}
