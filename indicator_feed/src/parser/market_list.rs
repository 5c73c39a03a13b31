//! Per-exchange prices scraped from the currency HTML page.
//!
//! There is no structured endpoint for this list, so the page is scanned
//! line by line: every line holding the price marker starts a block, the
//! exchange name sits two lines above it and the traded pair one line above.
//! Any markup change upstream breaks this; callers only ever see an empty
//! list in that case.
//!
//! ```text
//! <td class="no-wrap"><a href="/exchanges/binance/">Binance</a></td>
//! <td class="no-wrap"><a href="https://www.binance.com/...">NANO/BTC</a></td>
//! <td class="text-right"><span class="price" data-usd="8.94" data-native="0.00087">$8.94</span></td>
//! ```
use indicator_common::snapshot::ExchangeQuote;
use indicator_common::{IndicatorError, Result};
use log::debug;

/// Attribute that identifies a price cell.
pub const PRICE_MARKER: &str = "class=\"price\"";
/// Attribute carrying the price in the pair's quote currency.
pub const NATIVE_PRICE_ATTR: &str = "data-native";

const EXCHANGE_OFFSET: usize = 2;
const PAIR_OFFSET: usize = 1;

/// Scrapes the market list; returns an empty list when the page does not
/// have the expected shape.
pub fn parse_market_list_html(body: &str) -> Vec<ExchangeQuote> {
    match try_parse_market_list(body) {
        Ok(list) => list,
        Err(e) => {
            debug!("Market list discarded: {}", e);
            Vec::new()
        }
    }
}

fn try_parse_market_list(body: &str) -> Result<Vec<ExchangeQuote>> {
    let lines: Vec<&str> = body.lines().collect();
    let mut quotes = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !line.contains(PRICE_MARKER) {
            continue;
        }
        let malformed = |what: &str| IndicatorError::MissingKey(format!("{} for price on line {}", what, i + 1));

        let exchange_line = i
            .checked_sub(EXCHANGE_OFFSET)
            .map(|n| lines[n])
            .ok_or_else(|| malformed("exchange line"))?;
        let pair_line = i
            .checked_sub(PAIR_OFFSET)
            .map(|n| lines[n])
            .ok_or_else(|| malformed("pair line"))?;

        let exchange = inner_text(exchange_line);
        if exchange.is_empty() {
            return Err(malformed("exchange name"));
        }
        let pair = inner_text(pair_line);
        let unit = pair
            .split_once('/')
            .map(|(_, unit)| unit.trim())
            .filter(|unit| !unit.is_empty())
            .ok_or_else(|| malformed("pair unit"))?;
        let price = attr_value(line, NATIVE_PRICE_ATTR).ok_or_else(|| malformed("price value"))?;

        quotes.push(ExchangeQuote::last_price(&exchange, unit, price));
    }

    quotes.sort_by_key(ExchangeQuote::sort_key);
    Ok(quotes)
}

/// Text content of a line with every tag removed.
fn inner_text(line: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in line.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.trim().to_string()
}

/// Value of a double-quoted attribute on the line.
fn attr_value<'a>(line: &'a str, attr: &str) -> Option<&'a str> {
    let start = line.find(&format!("{}=\"", attr))? + attr.len() + 2;
    let len = line[start..].find('"')?;
    Some(&line[start..start + len])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(exchange: &str, pair: &str, price: &str) -> String {
        format!(
            "<tr>\n<td class=\"text-left\">1</td>\n\
             <td class=\"no-wrap\"><img class=\"logo-sprite\" alt=\"{e}\"> <a class=\"link-secondary\" href=\"/exchanges/x/\">{e}</a></td>\n\
             <td class=\"no-wrap\"><a href=\"https://example.com/trade\" target=\"_blank\">{p}</a></td>\n\
             <td class=\"text-right\"><span class=\"price\" data-usd=\"8.94\" data-native=\"{n}\">$8.94</span></td>\n</tr>\n",
            e = exchange,
            p = pair,
            n = price
        )
    }

    #[test]
    fn scrapes_sorted_blocks() {
        let html = format!(
            "<table>\n{}{}{}</table>\n",
            block("Kucoin", "XRB/BTC", "0.00028"),
            block("Binance", "NANO/ETH", "0.0091"),
            block("Binance", "NANO/BTC", "0.00087"),
        );
        let list = parse_market_list_html(&html);
        assert_eq!(list.len(), 3);
        let keys: Vec<String> = list.iter().map(ExchangeQuote::sort_key).collect();
        assert_eq!(keys, ["BinanceBTC", "BinanceETH", "KucoinBTC"]);
        assert_eq!(list[0].bid, "0.00087");
        assert_eq!(list[2].exchange, "Kucoin");
    }

    #[test]
    fn no_blocks_yields_empty_list() {
        assert!(parse_market_list_html("<html><body>nothing here</body></html>").is_empty());
        assert!(parse_market_list_html("").is_empty());
    }

    #[test]
    fn malformed_block_discards_list() {
        let html = format!(
            "{}<td class=\"no-wrap\">Orphan</td>\n<td>no pair</td>\n<span class=\"price\" data-native=\"1\">$1</span>\n",
            block("Binance", "NANO/BTC", "0.00087")
        );
        assert!(parse_market_list_html(&html).is_empty());

        let top = "<span class=\"price\" data-native=\"1\">$1</span>\n";
        assert!(parse_market_list_html(top).is_empty());
    }

    #[test]
    fn helpers() {
        assert_eq!(inner_text("<td><a href=\"/x\">Binance</a></td>"), "Binance");
        assert_eq!(attr_value("<span data-native=\"0.5\">", "data-native"), Some("0.5"));
        assert_eq!(attr_value("<span>", "data-native"), None);
    }
}
