//! Subscription bookkeeping routes.
//!
//! Subscribing records an address of interest; nothing is delivered to it.
//! The set lives in memory and is cleared on restart.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use headwatch_common::error::AppError;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subscribe", get(subscribe))
        .route("/subscriptions", get(list_subscriptions))
}

#[derive(Debug, Deserialize)]
struct SubscribeParams {
    address: Option<String>,
}

/// GET /subscribe?address=… — Register an address, as plain text.
///
/// The response distinguishes a fresh registration from a duplicate; both are
/// 200. A missing or blank `address` is the caller's error.
async fn subscribe(
    State(state): State<AppState>,
    Query(params): Query<SubscribeParams>,
) -> Result<String, AppError> {
    let address = params.address.unwrap_or_default();
    if address.trim().is_empty() {
        return Err(AppError::Validation(
            "Address parameter is required".to_string(),
        ));
    }

    if state.chain.subscribe(&address) {
        tracing::info!(address = %address, "Address subscribed");
        Ok(format!("Subscribed to address: {address}"))
    } else {
        Ok(format!("Address already subscribed: {address}"))
    }
}

/// GET /subscriptions — All subscribed addresses, sorted.
async fn list_subscriptions(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.chain.subscriptions())
}
