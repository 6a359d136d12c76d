//! Summarization Gateway
//!
//! Seam between the pipeline and the summarization engine. The engine is
//! a pass-through collaborator: it receives the serialized report plus an
//! optional chart image and its response comes back verbatim, unparsed.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{ChartArtifact, Report};

/// Strategy trait for summarization engines.
///
/// `chart` is `None` when the pipeline degraded to a text-only report.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, report: &Report, chart: Option<&ChartArtifact>) -> Result<String>;

    /// Engine name, for logging
    fn engine(&self) -> &str;
}
