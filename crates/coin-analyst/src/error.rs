//! Error Types for the Analyst Pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalystError>;

/// Failure taxonomy for the report pipeline.
///
/// An undefined buy/sell ratio is deliberately *not* represented here:
/// it is a valid `None` state on [`crate::model::DerivedMetrics`].
#[derive(Error, Debug)]
pub enum AnalystError {
    /// Market or news endpoint returned a bad status or a malformed body
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Chart render or fetch failure
    #[error("Chart artifact error: {0}")]
    Artifact(String),

    /// Summarization engine call failure
    #[error("Summarization gateway error: {0}")]
    Gateway(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
