//! Mock Data Sources
//!
//! For testing and demo purposes. Return canned snapshots and news items
//! without touching the network.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use super::{MarketDataSource, NewsSource};
use crate::error::{AnalystError, Result};
use crate::model::{NewsItem, Sentiment, TickSnapshot};
use crate::symbol;

/// Mock market data source with a canned snapshot
pub struct MockMarketData {
    snapshot: Option<TickSnapshot>,
}

impl MockMarketData {
    /// Always answers with the given snapshot (symbol is overridden per
    /// request).
    pub fn with_snapshot(snapshot: TickSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    /// Simulates a dead upstream: every fetch fails.
    pub fn unavailable() -> Self {
        Self { snapshot: None }
    }

    /// A plausible tick for tests and demos
    pub fn sample(symbol: &str) -> TickSnapshot {
        TickSnapshot {
            symbol: symbol::base(symbol),
            price: dec!(65000.12),
            best_bid: dec!(65000),
            best_ask: dec!(65000.5),
            change_24h: dec!(2.345),
            change_7d: dec!(-1.1),
            change_30d: dec!(10.0),
            day_open: dec!(64000),
            day_high: dec!(65500),
            day_low: dec!(63800),
            volume_24h: dec!(12345.67),
            quote_volume_24h: dec!(802634000),
            trades_24h: 48210,
            buy_volume_24h: dec!(6000),
            sell_volume_24h: dec!(6345.67),
        }
    }
}

impl Default for MockMarketData {
    fn default() -> Self {
        Self::with_snapshot(Self::sample("BTC"))
    }
}

#[async_trait]
impl MarketDataSource for MockMarketData {
    async fn fetch_tick(&self, symbol: &str) -> Result<TickSnapshot> {
        match &self.snapshot {
            Some(snapshot) => {
                let mut tick = snapshot.clone();
                tick.symbol = symbol::base(symbol);
                Ok(tick)
            }
            None => Err(AnalystError::UpstreamUnavailable(
                "mock market data offline".into(),
            )),
        }
    }

    fn venue(&self) -> &str {
        "mock"
    }
}

/// Mock news source with a fixed item list
pub struct MockNewsSource {
    items: Vec<NewsItem>,
    fail: bool,
}

impl MockNewsSource {
    pub fn with_items(items: Vec<NewsItem>) -> Self {
        Self { items, fail: false }
    }

    pub fn unavailable() -> Self {
        Self {
            items: Vec::new(),
            fail: true,
        }
    }

    /// `count` sequential sample articles
    pub fn sample_items(count: usize) -> Vec<NewsItem> {
        (0..count)
            .map(|i| NewsItem {
                url: format!("https://example.com/news/{i}"),
                published: Utc.with_ymd_and_hms(2024, 3, 5, 14, i as u32 % 60, 0).unwrap(),
                sentiment: Sentiment::Neutral,
                source: "CoinDesk".into(),
            })
            .collect()
    }
}

impl Default for MockNewsSource {
    fn default() -> Self {
        Self::with_items(Self::sample_items(3))
    }
}

#[async_trait]
impl NewsSource for MockNewsSource {
    async fn fetch_news(&self, _symbol: &str) -> Result<Vec<NewsItem>> {
        if self.fail {
            return Err(AnalystError::UpstreamUnavailable(
                "mock news source offline".into(),
            ));
        }
        Ok(self.items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_market_data() {
        let source = MockMarketData::default();
        let tick = source.fetch_tick("eth").await.unwrap();
        assert_eq!(tick.symbol, "ETH");
        assert_eq!(tick.trades_24h, 48210);
    }

    #[tokio::test]
    async fn test_mock_market_data_unavailable() {
        let source = MockMarketData::unavailable();
        assert!(source.fetch_tick("BTC").await.is_err());
    }

    #[tokio::test]
    async fn test_mock_news() {
        let source = MockNewsSource::default();
        let items = source.fetch_news("BTC").await.unwrap();
        assert_eq!(items.len(), 3);
    }
}
