//! Application State

use std::sync::Arc;

use coin_analyst::Analyst;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The report pipeline with its injected collaborators
    pub analyst: Arc<Analyst>,
}
