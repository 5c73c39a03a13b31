use std::collections::HashMap;

use indicator_common::fields::ERROR_RX;
use indicator_common::{FieldId, IndicatorError, Result};
use indicator_feed::config::Endpoints;
use indicator_feed::display::{ARBITRAGE_TITLE, ERROR_RECEIVING};
use indicator_feed::{DisplayState, FeedConfig, HttpSource, run_cycle};
use strum::IntoEnumIterator;

/// Serves canned bodies by URL; unknown URLs fail like a refused connection.
#[derive(Default)]
struct FakeSource {
    bodies: HashMap<String, String>,
}

impl FakeSource {
    fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }

    fn without(mut self, url: &str) -> Self {
        self.bodies.remove(url);
        self
    }
}

impl HttpSource for FakeSource {
    fn get_text(&self, url: &str) -> Result<String> {
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| IndicatorError::Network {
                url: url.to_string(),
                message: "connection refused".to_string(),
            })
    }
}

const TICKER: &str = r#"[
  {"id":"bitcoin","name":"Bitcoin","symbol":"BTC","rank":"1","price_usd":"10300.0","price_btc":"1.0","24h_volume_usd":"9000000000.0","market_cap_usd":"173000000000","percent_change_1h":"0.5","percent_change_24h":"-1.2","percent_change_7d":"4.0"},
  {"id":"raiblocks","name":"RaiBlocks","symbol":"XRB","rank":"24","price_usd":"3.50","price_btc":"0.00034","24h_volume_usd":"26000000.0","market_cap_usd":"466000000","percent_change_1h":"-0.3","percent_change_24h":"2.1","percent_change_7d":"-8.4"}
]"#;

const STATS: &str = "<html>\n<script>\n__NEXT_DATA__ = {\"props\":{\"networkSummary\":{\"block_count\":5432100,\"peer_count\":812,\"tx_rate_5_sec\":1.2,\"tx_rate_1_min\":0.95,\"tx_rate_30_min\":0.8126,\"tx_rate_24_hr\":0.5,\"frontier_count\":390000,\"latest_transactions\":[]}}}\n</script>\n</html>\n";

const BITGRAIL: &str = r#"{"success":1,"response":{"BTC":{"markets":{"XRB/BTC":{"bid":"0.00030","ask":"0.00031"}}}}}"#;
const KUCOIN: &str = r#"{"success":true,"data":[{"symbol":"XRB-BTC","buy":"0.00027","sell":"0.00028"}]}"#;

const MARKETS: &str = "<table>\n<tr>\n\
<td><a href=\"/exchanges/kucoin/\">Kucoin</a></td>\n\
<td><a href=\"https://kucoin.com\">XRB/BTC</a></td>\n\
<td><span class=\"price\" data-usd=\"3.49\" data-native=\"0.00028\">$3.49</span></td>\n\
</tr>\n<tr>\n\
<td><a href=\"/exchanges/bitgrail/\">BitGrail</a></td>\n\
<td><a href=\"https://bitgrail.com\">XRB/BTC</a></td>\n\
<td><span class=\"price\" data-usd=\"3.52\" data-native=\"0.00030\">$3.52</span></td>\n\
</tr>\n</table>\n";

const VERSION: &str = "import gi\nVERSION = '0.2.0'\n";

fn config() -> FeedConfig {
    FeedConfig {
        current_version: "0.1.0".to_string(),
        endpoints: Endpoints {
            ticker: "test://ticker".into(),
            network_stats: "test://stats".into(),
            bitgrail: "test://bitgrail".into(),
            kucoin: "test://kucoin".into(),
            markets: "test://markets".into(),
            version: "test://version".into(),
        },
        ..FeedConfig::default()
    }
}

fn healthy() -> FakeSource {
    FakeSource::default()
        .with("test://ticker", TICKER)
        .with("test://stats", STATS)
        .with("test://bitgrail", BITGRAIL)
        .with("test://kucoin", KUCOIN)
        .with("test://markets", MARKETS)
        .with("test://version", VERSION)
}

#[test]
fn ticker_fields_are_formatted() {
    let mut display = DisplayState::new(FieldId::PriceUsd, true);
    run_cycle(&healthy(), &config(), &mut display);

    assert_eq!(display.label(FieldId::PriceUsd), "$3.50");
    assert_eq!(display.label(FieldId::PriceBtc), "฿0.00034");
    assert_eq!(display.label(FieldId::Change1h), "1h: -0.3%");
    assert_eq!(display.label(FieldId::Volume24h), "Volume: $26000000.0");
    assert_eq!(display.label(FieldId::MarketCap), "Market Cap: $466000000");
    assert_eq!(display.label(FieldId::Rank), "CMC Rank: #24");
    assert_eq!(display.status_label(), "$3.50");
    assert_eq!(
        display.top_listing()[0],
        "1.) Bitcoin: $10300.0 ( 1h:0.5% | 24h:-1.2% | 7d:4.0% )"
    );
    assert_eq!(display.top_listing().len(), 2);
}

#[test]
fn network_fields_are_formatted() {
    let mut display = DisplayState::new(FieldId::PriceUsd, true);
    run_cycle(&healthy(), &config(), &mut display);

    assert_eq!(display.label(FieldId::BlockCount), "Block Count: 5432100");
    assert_eq!(display.label(FieldId::PeerCount), "Peer Count: 812");
    assert_eq!(display.label(FieldId::TxRate5s), "5s: 1.200 tps");
    assert_eq!(display.label(FieldId::TxRate30m), "30m: 0.813 tps");
    assert_eq!(display.label(FieldId::Frontiers), "Frontiers: 390000");
}

#[test]
fn arbitrage_above_threshold_notifies_once() {
    let mut display = DisplayState::new(FieldId::Arbitrage, true);
    let note = run_cycle(&healthy(), &config(), &mut display).expect("notification");

    assert_eq!(note.title, ARBITRAGE_TITLE);
    assert_eq!(note.body, "Arb: 0.00028 | B:Ku S:BG | 0.00030 | 7.14%");
    assert_eq!(display.status_label(), note.body);
    assert_eq!(display.label(FieldId::Kucoin), "Kucoin (BTC): 0.00028 | 0.00027");

    assert!(run_cycle(&healthy(), &config(), &mut display).is_none());
}

#[test]
fn failed_source_does_not_block_others() {
    let source = healthy().without("test://stats");
    let mut display = DisplayState::new(FieldId::PriceUsd, true);
    run_cycle(&healthy(), &config(), &mut display);
    assert_eq!(display.label(FieldId::BlockCount), "Block Count: 5432100");

    run_cycle(&source, &config(), &mut display);
    assert_eq!(display.label(FieldId::PriceUsd), "$3.50");
    for field in [
        FieldId::BlockCount,
        FieldId::PeerCount,
        FieldId::TxRate5s,
        FieldId::TxRate1m,
        FieldId::TxRate30m,
        FieldId::TxRate24h,
        FieldId::Frontiers,
    ] {
        assert!(display.label(field).ends_with(ERROR_RX), "{}", display.label(field));
    }
    assert!(display.label(FieldId::Arbitrage).ends_with('%'));
}

#[test]
fn every_source_failing_marks_every_field() {
    let mut display = DisplayState::new(FieldId::PriceUsd, true);
    let note = run_cycle(&FakeSource::default(), &config(), &mut display);
    assert!(note.is_none());

    for field in FieldId::iter().filter(|f| *f != FieldId::Version) {
        assert!(display.label(field).ends_with(ERROR_RX), "{}", display.label(field));
    }
    assert_eq!(display.label(FieldId::Version), "Version: 0.1.0");
    assert_eq!(display.top_listing(), [ERROR_RECEIVING.to_string()]);
    assert!(display.market_list().is_empty());
}

#[test]
fn malformed_stats_page_is_an_error_placeholder() {
    let source = healthy().with("test://stats", "<html>\n__NEXT_DATA__ = {\"props\": \n</html>");
    let mut display = DisplayState::new(FieldId::PeerCount, true);
    run_cycle(&source, &config(), &mut display);
    assert_eq!(display.status_label(), "Peer Count: Error Rx");
    assert_eq!(display.label(FieldId::PriceUsd), "$3.50");
}

#[test]
fn market_list_and_version_are_shown() {
    let mut display = DisplayState::new(FieldId::PriceUsd, true);
    run_cycle(&healthy(), &config(), &mut display);

    assert_eq!(
        display.market_list(),
        ["BitGrail (BTC): 0.00030".to_string(), "Kucoin (BTC): 0.00028".to_string()]
    );
    assert_eq!(display.label(FieldId::Version), "Version: 0.1.0 (update available: 0.2.0)");
}

#[test]
fn disabled_extras_are_not_fetched() {
    let config = FeedConfig {
        scrape_markets: false,
        check_version: false,
        ..config()
    };
    let mut display = DisplayState::new(FieldId::PriceUsd, true);
    run_cycle(&healthy(), &config, &mut display);
    assert!(display.market_list().is_empty());
    assert_eq!(display.label(FieldId::Version), "Version: Unknown");
}

#[test]
fn identical_responses_give_identical_labels() {
    let mut display = DisplayState::new(FieldId::TxRate1m, true);
    run_cycle(&healthy(), &config(), &mut display);
    let first: Vec<String> = FieldId::iter().map(|f| display.label(f).to_string()).collect();
    let first_top = display.top_listing().to_vec();
    let first_markets = display.market_list().to_vec();

    run_cycle(&healthy(), &config(), &mut display);
    let second: Vec<String> = FieldId::iter().map(|f| display.label(f).to_string()).collect();

    assert_eq!(first, second);
    assert_eq!(first_top, display.top_listing());
    assert_eq!(first_markets, display.market_list());
}
