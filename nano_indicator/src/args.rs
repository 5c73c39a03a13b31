//! Command-line arguments for the Nano indicator.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use indicator_common::FieldId;
use indicator_common::net::DEFAULT_ASSET_ID;
use indicator_feed::FeedConfig;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seconds between two refresh cycles.
    #[clap(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Identifier of the tracked asset in the market-ticker response.
    #[clap(long, default_value = DEFAULT_ASSET_ID)]
    pub asset: String,

    /// Field mirrored onto the status label.
    #[clap(long, value_enum, default_value_t = FieldId::PriceUsd)]
    pub default_field: FieldId,

    /// Arbitrage return, in percent, above which a notification is shown.
    #[clap(long, default_value_t = 1.0)]
    pub threshold: f64,

    /// Start with arbitrage notifications disabled.
    #[clap(long)]
    pub no_notify: bool,

    /// Skip scraping the per-exchange market list.
    #[clap(long)]
    pub no_markets: bool,

    /// Skip the published-version check.
    #[clap(long)]
    pub no_version_check: bool,

    /// HTTP request timeout in seconds.
    #[clap(long, default_value_t = 15)]
    pub timeout: u64,

    /// Run a single cycle, print the menu and exit.
    #[clap(long)]
    pub once: bool,
}

impl Args {
    /// Feed configuration derived from the flags; endpoints keep their defaults.
    pub fn feed_config(&self) -> FeedConfig {
        FeedConfig {
            asset_id: self.asset.trim().to_string(),
            interval: Duration::from_secs(self.interval),
            notify_threshold: self.threshold / 100.0,
            scrape_markets: !self.no_markets,
            check_version: !self.no_version_check,
            ..FeedConfig::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
