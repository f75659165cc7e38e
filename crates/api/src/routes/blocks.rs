//! Chain head route.

use axum::Router;
use axum::extract::State;
use axum::routing::get;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/currentBlock", get(current_block))
}

/// GET /currentBlock — Latest block height seen by the poller, as plain text.
///
/// Reads the in-memory store only and never touches the node. While the RPC
/// endpoint is down the value goes stale until the poller recovers; the route
/// itself keeps serving.
async fn current_block(State(state): State<AppState>) -> String {
    format!("Current Block: {}", state.chain.current_block())
}
