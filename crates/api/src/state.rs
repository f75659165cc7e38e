//! Shared application state for the Axum API server.

use std::sync::Arc;

use headwatch_common::state::ChainState;

/// Application state shared across all route handlers via Axum `State`.
///
/// Holds the same `ChainState` instance the block poller writes into.
#[derive(Clone)]
pub struct AppState {
    pub chain: Arc<ChainState>,
}

impl AppState {
    pub fn new(chain: Arc<ChainState>) -> Self {
        Self { chain }
    }
}
