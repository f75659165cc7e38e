//! Minimal JSON-RPC client for the one call this service makes:
//! `eth_blockNumber`.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;

use headwatch_common::error::RpcError;

/// Anything the poller can ask for the current chain head.
///
/// `RpcClient` is the production implementation; tests drive the poller with
/// a scripted source instead of a live node.
pub trait BlockHeightSource: Send + Sync {
    /// Fetch the node's current block height. One outbound request per call;
    /// no state is retained between calls. Retrying is the caller's concern.
    fn fetch_block_height(&self) -> impl Future<Output = Result<u64, RpcError>> + Send;
}

/// Shape of a successful `eth_blockNumber` response. The `jsonrpc` and `id`
/// envelope fields are ignored; an error response carries no `result` and
/// fails decoding.
#[derive(Debug, Deserialize)]
struct BlockNumberResponse {
    result: String,
}

/// HTTP JSON-RPC client bound to a single endpoint.
pub struct RpcClient {
    endpoint: String,
    http: reqwest::Client,
}

impl RpcClient {
    /// Build a client for `endpoint` with a bounded per-request timeout, so a
    /// hung node surfaces as `RpcError::Transport` instead of stalling the
    /// caller indefinitely.
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, http })
    }

    /// POST an `eth_blockNumber` request and parse the hex-quantity result.
    pub async fn fetch_block_height(&self) -> Result<u64, RpcError> {
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "method": "eth_blockNumber",
            "params": [],
            "id": 1,
        });

        let body = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .text()
            .await?;

        let response: BlockNumberResponse = serde_json::from_str(&body)?;
        parse_hex_quantity(&response.result)
    }
}

impl BlockHeightSource for RpcClient {
    async fn fetch_block_height(&self) -> Result<u64, RpcError> {
        RpcClient::fetch_block_height(self).await
    }
}

/// Parse a JSON-RPC quantity: a `0x`-prefixed, variable-length hex integer.
fn parse_hex_quantity(raw: &str) -> Result<u64, RpcError> {
    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| RpcError::Format(raw.to_string()))?;
    u64::from_str_radix(digits, 16).map_err(|_| RpcError::Format(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_quantity() {
        assert_eq!(parse_hex_quantity("0x10").unwrap(), 16);
        assert_eq!(parse_hex_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_hex_quantity("0x152d7c8").unwrap(), 22_206_408);
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        assert!(matches!(parse_hex_quantity("10"), Err(RpcError::Format(_))));
        assert!(matches!(parse_hex_quantity(""), Err(RpcError::Format(_))));
    }

    #[test]
    fn test_parse_rejects_bad_digits() {
        assert!(matches!(parse_hex_quantity("0x"), Err(RpcError::Format(_))));
        assert!(matches!(
            parse_hex_quantity("0xnope"),
            Err(RpcError::Format(_))
        ));
    }

    #[test]
    fn test_decode_requires_result_field() {
        let err = serde_json::from_str::<BlockNumberResponse>(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("result"));
    }
}
