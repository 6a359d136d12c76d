//! Analysis Pipeline
//!
//! Sequences one request: market tick, then news and chart, then report
//! assembly, then the summarization call. All collaborators are injected
//! as trait objects; the pipeline owns every piece of per-request data
//! and nothing outlives the request.
//!
//! Partial-failure policy:
//! - market data unavailable: the whole request short-circuits to a
//!   no-result sentinel (`Ok(None)`); nothing downstream is invoked
//! - news unavailable: empty news list, pipeline continues
//! - chart unavailable: the report goes to the engine without an image
//! - summarization failure: terminal error

use std::sync::Arc;

use crate::assemble;
use crate::chart::ChartProducer;
use crate::error::Result;
use crate::gateway::Summarizer;
use crate::metrics;
use crate::sources::{MarketDataSource, NewsSource};
use crate::symbol;

/// One-shot analyst over injected collaborators.
pub struct Analyst {
    market: Arc<dyn MarketDataSource>,
    news: Arc<dyn NewsSource>,
    chart: Arc<dyn ChartProducer>,
    gateway: Arc<dyn Summarizer>,
}

impl Analyst {
    pub fn new(
        market: Arc<dyn MarketDataSource>,
        news: Arc<dyn NewsSource>,
        chart: Arc<dyn ChartProducer>,
        gateway: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            market,
            news,
            chart,
            gateway,
        }
    }

    /// Analyze a symbol and return the engine's recommendation text.
    ///
    /// `Ok(None)` is the no-result sentinel: market data could not be
    /// fetched and no partial report exists. The boundary layer maps it
    /// (and any `Err`) to a generic user-facing message.
    pub async fn summarize(&self, raw_symbol: &str) -> Result<Option<String>> {
        let base = symbol::base(raw_symbol);
        tracing::info!(symbol = %base, venue = self.market.venue(), "analyzing symbol");

        let tick = match self.market.fetch_tick(raw_symbol).await {
            Ok(tick) => tick,
            Err(error) => {
                tracing::warn!(symbol = %base, %error, "market data unavailable, no result");
                return Ok(None);
            }
        };

        let derived = metrics::derive(&tick);

        let news = match self.news.fetch_news(raw_symbol).await {
            Ok(items) => items,
            Err(error) => {
                tracing::warn!(symbol = %base, %error, "news fetch failed, continuing without news");
                Vec::new()
            }
        };
        tracing::debug!(symbol = %base, news_count = news.len(), "auxiliary data fetched");

        let chart = match self.chart.render(raw_symbol).await {
            Ok(artifact) => Some(artifact),
            Err(error) => {
                tracing::warn!(symbol = %base, %error, "chart render failed, degrading to text-only report");
                None
            }
        };

        let report = assemble::assemble(&tick, &derived, news);

        let text = self.gateway.summarize(&report, chart.as_ref()).await?;
        tracing::info!(symbol = %base, engine = self.gateway.engine(), "analysis complete");

        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::chart::MockChartRenderer;
    use crate::error::AnalystError;
    use crate::model::{ChartArtifact, NewsItem, Report};
    use crate::sources::{MockMarketData, MockNewsSource};

    /// Echoes the serialized report and counts invocations.
    struct RecordingGateway {
        calls: AtomicUsize,
        saw_chart: AtomicBool,
        fail: bool,
    }

    impl RecordingGateway {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                saw_chart: AtomicBool::new(false),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl Summarizer for RecordingGateway {
        async fn summarize(
            &self,
            report: &Report,
            chart: Option<&ChartArtifact>,
        ) -> crate::error::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.saw_chart.store(chart.is_some(), Ordering::SeqCst);
            if self.fail {
                return Err(AnalystError::Gateway("mock engine down".into()));
            }
            Ok(serde_json::to_string(report)?)
        }

        fn engine(&self) -> &str {
            "recording"
        }
    }

    /// News source that counts how often it was asked.
    struct CountingNews {
        calls: AtomicUsize,
        items: Vec<NewsItem>,
    }

    #[async_trait]
    impl crate::sources::NewsSource for CountingNews {
        async fn fetch_news(&self, _symbol: &str) -> crate::error::Result<Vec<NewsItem>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.items.clone())
        }
    }

    /// Chart producer that counts how often it was asked.
    struct CountingChart {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChartProducer for CountingChart {
        async fn render(&self, _symbol: &str) -> crate::error::Result<ChartArtifact> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ChartArtifact::png(vec![0x89]))
        }
    }

    #[tokio::test]
    async fn test_happy_path_mentions_symbol() {
        let gateway = Arc::new(RecordingGateway::new());
        let analyst = Analyst::new(
            Arc::new(MockMarketData::default()),
            Arc::new(MockNewsSource::with_items(MockNewsSource::sample_items(3))),
            Arc::new(MockChartRenderer::new()),
            gateway.clone(),
        );

        let result = analyst.summarize("btc").await.unwrap();
        let text = result.expect("pipeline should produce a result");
        assert!(text.contains("BTC"));
        assert!(text.contains("$65000.12"));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
        assert!(gateway.saw_chart.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_market_failure_short_circuits() {
        let gateway = Arc::new(RecordingGateway::new());
        let news = Arc::new(CountingNews {
            calls: AtomicUsize::new(0),
            items: Vec::new(),
        });
        let chart = Arc::new(CountingChart {
            calls: AtomicUsize::new(0),
        });
        let analyst = Analyst::new(
            Arc::new(MockMarketData::unavailable()),
            news.clone(),
            chart.clone(),
            gateway.clone(),
        );

        let result = analyst.summarize("BTC").await.unwrap();
        assert!(result.is_none());
        assert_eq!(news.calls.load(Ordering::SeqCst), 0);
        assert_eq!(chart.calls.load(Ordering::SeqCst), 0);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_news_failure_degrades_to_empty_list() {
        let gateway = Arc::new(RecordingGateway::new());
        let analyst = Analyst::new(
            Arc::new(MockMarketData::default()),
            Arc::new(MockNewsSource::unavailable()),
            Arc::new(MockChartRenderer::new()),
            gateway.clone(),
        );

        let text = analyst.summarize("BTC").await.unwrap().unwrap();
        assert!(text.contains("\"latest_news\":[]"));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_chart_failure_degrades_to_text_only() {
        let gateway = Arc::new(RecordingGateway::new());
        let analyst = Analyst::new(
            Arc::new(MockMarketData::default()),
            Arc::new(MockNewsSource::default()),
            Arc::new(MockChartRenderer::failing()),
            gateway.clone(),
        );

        let result = analyst.summarize("BTC").await.unwrap();
        assert!(result.is_some());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
        assert!(!gateway.saw_chart.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_gateway_failure_is_terminal() {
        let analyst = Analyst::new(
            Arc::new(MockMarketData::default()),
            Arc::new(MockNewsSource::default()),
            Arc::new(MockChartRenderer::new()),
            Arc::new(RecordingGateway::failing()),
        );

        let result = analyst.summarize("BTC").await;
        assert!(matches!(result, Err(AnalystError::Gateway(_))));
    }
}
