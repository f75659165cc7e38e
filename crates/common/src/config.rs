/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Ethereum JSON-RPC endpoint to poll for the chain head
    pub eth_rpc_url: String,

    /// Block polling interval in milliseconds (default: 10000)
    pub poll_interval_ms: u64,

    /// Timeout for outbound JSON-RPC requests in seconds (default: 5)
    pub rpc_timeout_secs: u64,

    /// Port the HTTP API listens on (default: 8080)
    pub api_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            eth_rpc_url: std::env::var("ETH_RPC_URL")
                .unwrap_or_else(|_| "http://localhost:8545".to_string()),
            poll_interval_ms: std::env::var("POLL_INTERVAL_MS")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("POLL_INTERVAL_MS must be a valid u64"))?,
            rpc_timeout_secs: std::env::var("RPC_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("RPC_TIMEOUT_SECS must be a valid u64"))?,
            api_port: std::env::var("API_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("API_PORT must be a valid port number"))?,
        })
    }
}
