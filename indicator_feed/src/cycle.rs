//! One refresh cycle: fetch every source, then hand the results to the
//! display.
//!
//! Fetching and presenting are split so the blocking part can run on the
//! scheduler's worker thread while only the presentation thread owns the
//! [`DisplayState`]. Every source is fetched independently; a failure is
//! logged and kept as an `Err` in the [`CycleReport`] without affecting the
//! other sources.
use chrono::{DateTime, Local};
use indicator_common::Result;
use indicator_common::snapshot::{Exchange, ExchangeQuote, MarketTicker, NetworkSnapshot};
use log::{info, warn};

use crate::config::{FeedConfig, TOP_LISTING_LEN};
use crate::display::{DisplayState, Notification};
use crate::http::HttpSource;
use crate::parser::exchange::parse_quote;
use crate::parser::market_list::parse_market_list_html;
use crate::parser::network::parse_network_stats;
use crate::parser::ticker::parse_ticker;
use crate::parser::version::{VersionStatus, parse_published_version};

/// Everything fetched during one cycle, each source with its own outcome.
#[derive(Debug)]
pub struct CycleReport {
    /// When the cycle started; shown as "Last Updated".
    pub started_at: DateTime<Local>,
    pub ticker: Result<MarketTicker>,
    pub network: Result<NetworkSnapshot>,
    pub bitgrail: Result<ExchangeQuote>,
    pub kucoin: Result<ExchangeQuote>,
    /// `None` when market scraping is disabled.
    pub markets: Option<Vec<ExchangeQuote>>,
    /// `None` when the version check is disabled.
    pub version: Option<VersionStatus>,
}

/// Tracked asset from the market-ticker endpoint.
pub fn fetch_ticker<S: HttpSource>(source: &S, config: &FeedConfig) -> Result<MarketTicker> {
    let body = source.get_text(&config.endpoints.ticker)?;
    parse_ticker(&body, &config.asset_id, TOP_LISTING_LEN)
}

/// Network figures from the statistics page.
pub fn fetch_network_stats<S: HttpSource>(source: &S, config: &FeedConfig) -> Result<NetworkSnapshot> {
    let body = source.get_text(&config.endpoints.network_stats)?;
    parse_network_stats(&body)
}

/// Quote for the tracked pair on `exchange`.
pub fn fetch_exchange_quote<S: HttpSource>(
    source: &S,
    config: &FeedConfig,
    exchange: Exchange,
) -> Result<ExchangeQuote> {
    let url = match exchange {
        Exchange::BitGrail => &config.endpoints.bitgrail,
        Exchange::Kucoin => &config.endpoints.kucoin,
    };
    let body = source.get_text(url)?;
    parse_quote(exchange, &body)
}

/// Scraped market list; empty on any failure.
pub fn fetch_market_list<S: HttpSource>(source: &S, config: &FeedConfig) -> Vec<ExchangeQuote> {
    match source.get_text(&config.endpoints.markets) {
        Ok(body) => parse_market_list_html(&body),
        Err(e) => {
            warn!("Market list unavailable: {}", e);
            Vec::new()
        }
    }
}

/// Compares the running version with the published one; failures mean
/// "up to date".
pub fn check_version<S: HttpSource>(source: &S, config: &FeedConfig) -> VersionStatus {
    let published = match source.get_text(&config.endpoints.version) {
        Ok(body) => parse_published_version(&body),
        Err(e) => {
            warn!("Version check failed: {}", e);
            None
        }
    };
    VersionStatus::compare(&config.current_version, published.as_deref())
}

/// Runs every fetch of one cycle sequentially.
pub fn collect<S: HttpSource>(source: &S, config: &FeedConfig) -> CycleReport {
    let started_at = Local::now();

    let report = CycleReport {
        started_at,
        ticker: logged("ticker", fetch_ticker(source, config)),
        network: logged("network stats", fetch_network_stats(source, config)),
        bitgrail: logged("BitGrail", fetch_exchange_quote(source, config, Exchange::BitGrail)),
        kucoin: logged("Kucoin", fetch_exchange_quote(source, config, Exchange::Kucoin)),
        markets: config.scrape_markets.then(|| fetch_market_list(source, config)),
        version: config.check_version.then(|| check_version(source, config)),
    };

    info!(
        "Cycle finished in {} ms",
        (Local::now() - started_at).num_milliseconds()
    );
    report
}

/// Fetches and applies one cycle in the calling thread.
pub fn run_cycle<S: HttpSource>(
    source: &S,
    config: &FeedConfig,
    display: &mut DisplayState,
) -> Option<Notification> {
    display.apply_report(collect(source, config), config)
}

fn logged<T>(source: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        warn!("Failed to refresh {} ({:?}): {}", source, e.kind(), e);
    }
    result
}
