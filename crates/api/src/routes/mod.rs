pub mod blocks;
pub mod health;
pub mod subscriptions;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(blocks::router())
        .merge(subscriptions::router())
        .with_state(state)
}
