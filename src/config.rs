// src/config.rs
//! Gateway connection settings, resolved from the environment.

use anyhow::{Context, Result};
use tracing::info;

const DEFAULT_GATEWAY_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl GatewayConfig {
    /// Load configuration from environment variables, falling back to a
    /// local gateway.
    pub fn load() -> Result<Self> {
        let base_url = std::env::var("GATEWAY_URL")
            .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_seconds = match std::env::var("GATEWAY_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("GATEWAY_TIMEOUT_SECS must be a number of seconds")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        info!("Gateway: {}", base_url);

        Ok(Self {
            base_url,
            timeout_seconds,
        })
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// WebSocket base derived from the HTTP base (http→ws, https→wss).
    pub fn ws_base_url(&self) -> String {
        if let Some(rest) = self.base_url.strip_prefix("https://") {
            format!("wss://{}", rest)
        } else if let Some(rest) = self.base_url.strip_prefix("http://") {
            format!("ws://{}", rest)
        } else {
            format!("ws://{}", self.base_url)
        }
    }
}
