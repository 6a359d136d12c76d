//! Data Sources
//!
//! Abstractions and implementations for the market data and news
//! upstreams.

mod coindesk;
mod mock;

pub use coindesk::{CoinDeskClient, CoinDeskConfig};
pub use mock::{MockMarketData, MockNewsSource};

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{NewsItem, TickSnapshot};

/// A news response never carries more than this many items.
pub const MAX_NEWS_ITEMS: usize = 10;

/// Current tick-level market data for a symbol (Strategy pattern).
///
/// Implement this per data vendor. One attempt per call: implementations
/// fail fast with `UpstreamUnavailable` and never retry.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch the latest tick for a user-supplied symbol.
    async fn fetch_tick(&self, symbol: &str) -> Result<TickSnapshot>;

    /// Venue the ticks are scoped to
    fn venue(&self) -> &str;
}

/// Recent news for a symbol, newest first as the upstream orders them,
/// capped at [`MAX_NEWS_ITEMS`].
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_news(&self, symbol: &str) -> Result<Vec<NewsItem>>;
}
