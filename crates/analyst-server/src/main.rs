//! coin-analyst HTTP Server
//!
//! Axum boundary over the analysis pipeline: one POST endpoint takes a
//! symbol, the pipeline fetches market data and news, obtains a chart
//! and asks the summarization engine for a recommendation.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use analyst_runtime::OpenAiGateway;
use coin_analyst::{Analyst, CoinDeskClient, HttpChartRenderer};

use crate::handlers::{analyze_handler, health_check};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    if std::env::var("COINDESK_API_KEY").is_err() {
        tracing::warn!("COINDESK_API_KEY not set - market and news fetches will fail");
    }
    if std::env::var("OPENAI_API_KEY").is_err() {
        tracing::warn!("OPENAI_API_KEY not set - summarization will fail");
    }

    // One CoinDesk client serves both the tick and the news endpoints
    let coindesk = Arc::new(CoinDeskClient::from_env()?);
    let chart = Arc::new(HttpChartRenderer::from_env()?);
    let gateway = Arc::new(OpenAiGateway::from_env()?);

    let analyst = Arc::new(Analyst::new(
        coindesk.clone(),
        coindesk,
        chart,
        gateway,
    ));

    let state = AppState { analyst };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/analyze", post(analyze_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("analyst-server running on http://{}", addr);
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  POST /api/analyze  - Analyze a symbol");

    axum::serve(listener, app).await?;

    Ok(())
}
