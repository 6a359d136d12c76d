//! HTTP Chart Renderer
//!
//! Fetches the rendered chart image from an external render service. The
//! service owns the actual plotting; this side only carries the bytes.

use std::time::Duration;

use async_trait::async_trait;

use super::ChartProducer;
use crate::error::{AnalystError, Result};
use crate::model::ChartArtifact;
use crate::symbol;

/// Chart render service configuration
#[derive(Clone, Debug)]
pub struct ChartConfig {
    /// Render endpoint URL
    pub base_url: String,

    /// History window requested from the renderer
    pub period: String,

    /// Candle interval within the window
    pub interval: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/chart".into(),
            period: "1mo".into(),
            interval: "1h".into(),
            timeout_secs: 10,
        }
    }
}

impl ChartConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("CHART_RENDER_URL")
            .unwrap_or_else(|_| "http://localhost:8080/chart".into());
        let timeout_secs = std::env::var("CHART_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(10);

        Self {
            base_url,
            timeout_secs,
            ..Default::default()
        }
    }
}

/// Chart producer backed by an HTTP render service
pub struct HttpChartRenderer {
    http: reqwest::Client,
    config: ChartConfig,
}

impl HttpChartRenderer {
    pub fn new(config: ChartConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ChartConfig::from_env())
    }
}

#[async_trait]
impl ChartProducer for HttpChartRenderer {
    async fn render(&self, symbol: &str) -> Result<ChartArtifact> {
        let instrument = symbol::instrument(symbol);

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("symbol", instrument.as_str()),
                ("period", self.config.period.as_str()),
                ("interval", self.config.interval.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AnalystError::Artifact(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalystError::Artifact(format!(
                "chart renderer returned {status} for {instrument}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AnalystError::Artifact(e.to_string()))?;
        if bytes.is_empty() {
            return Err(AnalystError::Artifact(format!(
                "chart renderer returned an empty image for {instrument}"
            )));
        }

        Ok(ChartArtifact::png(bytes.to_vec()))
    }
}
