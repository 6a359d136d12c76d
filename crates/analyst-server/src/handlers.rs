//! HTTP Handlers
//!
//! Thin text-in/text-out boundary over the pipeline. Raw error text never
//! reaches the user: a no-result sentinel and any pipeline error both map
//! to one generic apologetic message.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use coin_analyst::symbol;

use crate::state::AppState;

/// Shown when the pipeline produced no result or failed internally.
const APOLOGY: &str =
    "Sorry, I couldn't put together an analysis for that symbol right now. Please try again later.";

const EMPTY_SYMBOL_HINT: &str = "Send a coin symbol to analyze, e.g. BTC, XRP or XLM.";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub symbol: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub symbol: String,
    pub analysis: String,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Analyze a symbol and return the recommendation text
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let raw = payload.symbol.trim();
    if raw.is_empty() {
        return Json(AnalyzeResponse {
            symbol: String::new(),
            analysis: EMPTY_SYMBOL_HINT.into(),
        });
    }

    let base = symbol::base(raw);
    let analysis = match state.analyst.summarize(raw).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            tracing::info!(symbol = %base, "no result for symbol");
            APOLOGY.into()
        }
        Err(error) => {
            tracing::error!(symbol = %base, %error, "analysis pipeline failed");
            APOLOGY.into()
        }
    };

    Json(AnalyzeResponse {
        symbol: base,
        analysis,
    })
}
