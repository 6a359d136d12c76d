//! Chart Artifacts
//!
//! Price-history rendering is an external collaborator: the pipeline only
//! needs "give me an image for this symbol". Artifacts travel through the
//! pipeline as in-memory bytes, one per request.

mod http;
mod mock;

pub use http::{ChartConfig, HttpChartRenderer};
pub use mock::MockChartRenderer;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::ChartArtifact;

/// Produces a rendered price-history image for a symbol.
#[async_trait]
pub trait ChartProducer: Send + Sync {
    async fn render(&self, symbol: &str) -> Result<ChartArtifact>;
}
