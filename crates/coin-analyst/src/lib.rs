//! # coin-analyst
//!
//! Aggregation-and-report pipeline behind a crypto trading assistant.
//! One request flows through four stages:
//!
//! ```text
//! symbol ──> MarketDataSource ──> metrics ──┐
//!                 │ (on success)            │
//!                 ├──> NewsSource ──────────┼──> Report ──> Summarizer ──> text
//!                 └──> ChartProducer ───────┘    (exact display contract)
//! ```
//!
//! Market data failure yields a no-result sentinel without touching the
//! other upstreams; news and chart failures degrade the report instead of
//! killing the request. All collaborators sit behind traits so tests run
//! against mocks without process-wide state.

pub mod assemble;
pub mod chart;
pub mod error;
pub mod format;
pub mod gateway;
pub mod metrics;
pub mod model;
pub mod pipeline;
pub mod sources;
pub mod symbol;

pub use chart::{ChartConfig, ChartProducer, HttpChartRenderer, MockChartRenderer};
pub use error::{AnalystError, Result};
pub use gateway::Summarizer;
pub use model::{
    ChartArtifact, DerivedMetrics, NewsItem, Performance, Report, Sentiment, TickSnapshot,
};
pub use pipeline::Analyst;
pub use sources::{
    CoinDeskClient, CoinDeskConfig, MarketDataSource, MockMarketData, MockNewsSource, NewsSource,
    MAX_NEWS_ITEMS,
};

/// Fixed system instruction for the summarization engine.
///
/// The report serialization in [`model::Report`] is the object this
/// prompt refers to; changing either side breaks the other.
pub const ANALYST_PROMPT: &str = r#"You are a financial analyst specializing in cryptocurrencies.
You receive an object with data about a selected cryptocurrency. The object contains:
- the current price, volatility, trading volume, liquidity and other metrics;
- an array of news items (each with a link, publication time, sentiment and source);
- a rendered price chart for the recent period, when available.

Your task:
1. Analyze all of the provided data (metrics, news, chart).
2. Assess the current state of the market.
3. Give a concrete decision for **Spot trading**:
   - Buy / Sell / Hold.
   - State your confidence (0 to 1).
   - Briefly explain the reason.
4. Give a concrete decision for **Futures trading**:
   - Long / Short / Stay out.
   - Recommend leverage (for example x3, x5, x10).
   - Give the expected range (high / low).
   - State your confidence (0 to 1).
   - Briefly explain the reason.
5. Weigh the influence of the news on market sentiment (positive/negative).
6. Return the result as text so the user knows what to do.

Very important: do not add anything beyond the analysis itself."#;
