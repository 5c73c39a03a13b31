//! Upstream endpoints, request headers and the fixed link table.

/// User agent sent with every request; at least one upstream rejects requests without one.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Market-ticker JSON array (one record per asset).
pub const TICKER_URL: &str = "https://api.coinmarketcap.com/v1/ticker/";
/// Network statistics page carrying an embedded JSON blob.
pub const NETWORK_STATS_URL: &str = "https://www.nanode.co/blocks";
/// BitGrail public markets endpoint.
pub const BITGRAIL_URL: &str = "https://api.bitgrail.com/v1/markets";
/// Kucoin public tick endpoint.
pub const KUCOIN_URL: &str = "https://api.kucoin.com/v1/open/tick";
/// Currency HTML page scraped for the per-exchange market list.
pub const MARKETS_URL: &str = "https://coinmarketcap.com/currencies/raiblocks/";
/// Raw source file carrying the published version literal.
pub const VERSION_URL: &str =
    "https://raw.githubusercontent.com/jpawlak/nano-indicator/master/nano_indicator.py";

/// Identifier of the tracked asset in the market-ticker response.
pub const DEFAULT_ASSET_ID: &str = "raiblocks";

/// Menu labels of the community links; the URL is `http://www.<label>`.
pub const LINKS: [&str; 6] = [
    "CoinMarketcap.com/currencies/raiblocks/",
    "RaiBlocks.net",
    "RaiBlocks.club",
    "Rai.watch",
    "reddit.com/r/RaiBlocks",
    "RaiWallet.com",
];

/// Helper to build the URL opened for a link label.
pub fn link_url(label: &str) -> String {
    format!("http://www.{}", label)
}
