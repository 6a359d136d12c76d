//! Report Assembly
//!
//! Pure transform from fetched data and derived metrics into the
//! structured report the summarization engine consumes. Cannot fail for
//! a valid snapshot.

use rust_decimal::Decimal;

use crate::format;
use crate::model::{DerivedMetrics, NewsItem, Performance, Report, TickSnapshot};

/// Build the engine-facing report. Numeric values become display strings
/// here and nowhere else; see [`crate::format`] for the exact rules.
pub fn assemble(tick: &TickSnapshot, metrics: &DerivedMetrics, news: Vec<NewsItem>) -> Report {
    Report {
        symbol: tick.symbol.clone(),
        price: format::usd(tick.price),
        performance: Performance {
            day: format::percent(tick.change_24h),
            week: format::percent(tick.change_7d),
            month: format::percent(tick.change_30d),
        },
        range_today: format!(
            "{} - {}",
            format::usd(tick.day_low),
            format::usd(tick.day_high)
        ),
        volume_24h: format::thousands(tick.volume_24h),
        quote_volume_24h: format::thousands(tick.quote_volume_24h),
        trades_24h: format::thousands(Decimal::from(tick.trades_24h)),
        best_bid: format::usd(tick.best_bid),
        best_ask: format::usd(tick.best_ask),
        spread: format::usd_precise(metrics.spread),
        buy_volume_24h: format::thousands(tick.buy_volume_24h),
        sell_volume_24h: format::thousands(tick.sell_volume_24h),
        buy_sell_ratio: metrics.buy_sell_ratio.map(|ratio| format::fixed(ratio, 2)),
        latest_news: news,
    }
}
