//! Mock Chart Renderer

use async_trait::async_trait;

use super::ChartProducer;
use crate::error::{AnalystError, Result};
use crate::model::ChartArtifact;

/// Mock chart producer returning a tiny static image, or failing on
/// demand to exercise the degraded text-only path.
pub struct MockChartRenderer {
    fail: bool,
}

impl MockChartRenderer {
    pub fn new() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl Default for MockChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChartProducer for MockChartRenderer {
    async fn render(&self, symbol: &str) -> Result<ChartArtifact> {
        if self.fail {
            return Err(AnalystError::Artifact(format!(
                "mock renderer failure for {symbol}"
            )));
        }
        // PNG magic bytes are enough for a stand-in artifact
        Ok(ChartArtifact::png(vec![
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A,
        ]))
    }
}
