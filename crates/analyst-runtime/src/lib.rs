//! # analyst-runtime
//!
//! Summarization-engine gateways for the coin-analyst pipeline.
//!
//! ## Gateways
//!
//! - **OpenAI** (Responses API): serialized report + inline chart image
//!
//! ## Usage
//!
//! ```rust,ignore
//! use analyst_runtime::openai::OpenAiGateway;
//!
//! let gateway = Arc::new(OpenAiGateway::from_env()?);
//! let analyst = Analyst::new(market, news, chart, gateway);
//! ```

pub mod openai;

pub use openai::{OpenAiConfig, OpenAiGateway};

// Re-export core types for convenience
pub use coin_analyst::{Analyst, AnalystError, ChartArtifact, Report, Result, Summarizer};
