//! Metrics Derivation
//!
//! Pure computation over a fetched tick. Total over its input domain:
//! no panics, no division by zero.

use crate::model::{DerivedMetrics, TickSnapshot};

/// Derive spread and buy/sell ratio from a tick.
///
/// The spread is stored exactly as `best_ask - best_bid`; a crossed book
/// yields a negative spread which passes through untouched. The ratio is
/// `None` whenever sell volume is zero (or the division does not fit a
/// `Decimal`), which callers must treat as "undefined", not as zero.
pub fn derive(tick: &TickSnapshot) -> DerivedMetrics {
    let buy_sell_ratio = if tick.sell_volume_24h.is_zero() {
        None
    } else {
        tick.buy_volume_24h.checked_div(tick.sell_volume_24h)
    };

    DerivedMetrics {
        spread: tick.best_ask - tick.best_bid,
        buy_sell_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tick(buy: rust_decimal::Decimal, sell: rust_decimal::Decimal) -> TickSnapshot {
        TickSnapshot {
            symbol: "BTC".into(),
            price: dec!(65000.12),
            best_bid: dec!(65000),
            best_ask: dec!(65000.5),
            change_24h: dec!(2.5),
            change_7d: dec!(-1.1),
            change_30d: dec!(10.0),
            day_open: dec!(64000),
            day_high: dec!(65500),
            day_low: dec!(63800),
            volume_24h: dec!(12345.67),
            quote_volume_24h: dec!(802634000),
            trades_24h: 48210,
            buy_volume_24h: buy,
            sell_volume_24h: sell,
        }
    }

    #[test]
    fn test_spread_is_exact() {
        let metrics = derive(&tick(dec!(10), dec!(20)));
        assert_eq!(metrics.spread, dec!(0.5));
    }

    #[test]
    fn test_ratio_defined() {
        let metrics = derive(&tick(dec!(300), dec!(200)));
        assert_eq!(metrics.buy_sell_ratio, Some(dec!(1.5)));
    }

    #[test]
    fn test_ratio_undefined_on_zero_sell_volume() {
        let metrics = derive(&tick(dec!(300), dec!(0)));
        assert_eq!(metrics.buy_sell_ratio, None);
    }

    #[test]
    fn test_zero_buy_volume_is_still_defined() {
        let metrics = derive(&tick(dec!(0), dec!(200)));
        assert_eq!(metrics.buy_sell_ratio, Some(dec!(0)));
    }
}
