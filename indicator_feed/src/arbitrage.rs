//! Two-venue arbitrage spread.
//!
//! Buying on one venue at its ask and selling on the other at its bid returns
//! `(bid_sell - ask_buy) / ask_buy`. Both directions are evaluated and the
//! larger return wins; the first direction (buy on `b`, sell on `a`) wins
//! ties.
use indicator_common::snapshot::ExchangeQuote;
use indicator_common::{IndicatorError, Result};

/// Best direction of one cycle; never stored across cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct ArbitrageResult {
    /// Fractional return (0.0714 == 7.14%); `0.0` when inputs were unusable.
    pub best_return: f64,
    /// Menu text naming the buy and sell venues and both reference prices.
    pub description: String,
    /// `false` when the inputs were non-numeric or degenerate.
    pub valid: bool,
}

impl ArbitrageResult {
    fn error(reason: &IndicatorError) -> Self {
        ArbitrageResult {
            best_return: 0.0,
            description: format!("Arb: Error ({})", reason),
            valid: false,
        }
    }

    /// Return expressed in percent.
    pub fn percent(&self) -> f64 {
        self.best_return * 100.0
    }
}

/// Evaluates both directions between `a` and `b`.
///
/// Unusable inputs (non-numeric or non-finite prices, asks that are zero or
/// negative) give a zero return with an error description instead of failing.
pub fn compute_arbitrage(a: &ExchangeQuote, b: &ExchangeQuote) -> ArbitrageResult {
    match try_compute(a, b) {
        Ok(result) => result,
        Err(e) => ArbitrageResult::error(&e),
    }
}

fn try_compute(a: &ExchangeQuote, b: &ExchangeQuote) -> Result<ArbitrageResult> {
    let (bid_a, ask_a) = (bid(a)?, ask(a)?);
    let (bid_b, ask_b) = (bid(b)?, ask(b)?);

    // buy on b, sell on a
    let forward = (bid_a - ask_b) / ask_b;
    // buy on a, sell on b
    let backward = (bid_b - ask_a) / ask_a;

    let (best_return, buy, sell) = if backward > forward {
        (backward, a, b)
    } else {
        (forward, b, a)
    };

    Ok(ArbitrageResult {
        best_return,
        description: format!(
            "Arb: {} | B:{} S:{} | {} | {:.2}%",
            buy.ask,
            buy.code,
            sell.code,
            sell.bid,
            best_return * 100.0
        ),
        valid: true,
    })
}

fn price(quote: &ExchangeQuote, side: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        IndicatorError::Computation(format!("{} {} '{}' is not numeric", quote.code, side, raw))
    })?;
    if !value.is_finite() {
        return Err(IndicatorError::Computation(format!(
            "{} {} '{}' is not finite",
            quote.code, side, raw
        )));
    }
    Ok(value)
}

fn bid(quote: &ExchangeQuote) -> Result<f64> {
    price(quote, "bid", &quote.bid)
}

/// Asks are divisors, so they must also be positive.
fn ask(quote: &ExchangeQuote) -> Result<f64> {
    let value = price(quote, "ask", &quote.ask)?;
    if value <= 0.0 {
        return Err(IndicatorError::Computation(format!(
            "{} ask '{}' is not a positive price",
            quote.code, quote.ask
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicator_common::snapshot::Exchange;

    fn quote(exchange: Exchange, bid: &str, ask: &str) -> ExchangeQuote {
        ExchangeQuote::new(exchange, "BTC", bid.to_string(), ask.to_string())
    }

    #[test]
    fn picks_forward_direction() {
        let bg = quote(Exchange::BitGrail, "0.00030", "0.00031");
        let ku = quote(Exchange::Kucoin, "0.00027", "0.00028");
        let result = compute_arbitrage(&bg, &ku);
        assert!(result.valid);
        assert!((result.best_return - 0.02 / 0.28).abs() < 1e-12);
        assert_eq!(result.description, "Arb: 0.00028 | B:Ku S:BG | 0.00030 | 7.14%");
    }

    #[test]
    fn picks_backward_direction() {
        let bg = quote(Exchange::BitGrail, "0.00020", "0.00021");
        let ku = quote(Exchange::Kucoin, "0.00025", "0.00026");
        let result = compute_arbitrage(&bg, &ku);
        let expected = (0.00025 - 0.00021) / 0.00021;
        assert!((result.best_return - expected).abs() < 1e-12);
        assert!(result.description.starts_with("Arb: 0.00021 | B:BG S:Ku | 0.00025 |"));
    }

    #[test]
    fn best_of_two_for_many_pairs() {
        let cases = [
            (1.0, 1.1, 1.05, 1.2),
            (2.0, 2.5, 1.0, 1.5),
            (0.5, 0.6, 0.7, 0.8),
            (3.0, 3.0, 3.0, 3.0),
        ];
        for (bid_a, ask_a, bid_b, ask_b) in cases {
            let a = quote(Exchange::BitGrail, &bid_a.to_string(), &ask_a.to_string());
            let b = quote(Exchange::Kucoin, &bid_b.to_string(), &ask_b.to_string());
            let forward: f64 = (bid_a - ask_b) / ask_b;
            let backward: f64 = (bid_b - ask_a) / ask_a;
            let result = compute_arbitrage(&a, &b);
            assert_eq!(result.best_return, forward.max(backward));
            let venues = if backward > forward { "B:BG S:Ku" } else { "B:Ku S:BG" };
            assert!(result.description.contains(venues), "{}", result.description);
        }
    }

    #[test]
    fn zero_or_non_numeric_ask_is_an_error_result() {
        let bg = quote(Exchange::BitGrail, "0.00030", "0");
        let ku = quote(Exchange::Kucoin, "0.00027", "0.00028");
        let result = compute_arbitrage(&bg, &ku);
        assert!(!result.valid);
        assert_eq!(result.best_return, 0.0);
        assert!(result.description.starts_with("Arb: Error"));

        let ku = quote(Exchange::Kucoin, "0.00027", "n/a");
        let result = compute_arbitrage(&quote(Exchange::BitGrail, "1", "1"), &ku);
        assert!(!result.valid);
        assert_eq!(result.best_return, 0.0);

        let ku = quote(Exchange::Kucoin, "NaN", "0.1");
        assert!(!compute_arbitrage(&quote(Exchange::BitGrail, "1", "1"), &ku).valid);
    }

    #[test]
    fn zero_bid_is_a_total_loss_not_an_error() {
        let bg = quote(Exchange::BitGrail, "0", "0.00031");
        let ku = quote(Exchange::Kucoin, "0", "0.00028");
        let result = compute_arbitrage(&bg, &ku);
        assert!(result.valid);
        assert_eq!(result.best_return, -1.0);
        assert_eq!(result.description, "Arb: 0.00028 | B:Ku S:BG | 0 | -100.00%");
    }
}
