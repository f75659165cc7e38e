use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors from a single `eth_blockNumber` fetch against the JSON-RPC node.
///
/// The poller treats all three the same way (log and skip the cycle); the
/// split exists so logs distinguish an unreachable node from a misbehaving one.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The HTTP request could not be completed (connection refused, timeout, DNS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON or lacked the `result` field.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The `result` field was not a 0x-prefixed hexadecimal integer.
    #[error("malformed block number {0:?}")]
    Format(String),
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Rpc(_) => StatusCode::BAD_GATEWAY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        };

        // Response bodies are plain text; clients of this API parse exact strings.
        (status, self.to_string()).into_response()
    }
}
