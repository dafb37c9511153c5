//! Launcher configuration.
//!
//! The configuration is an explicit object constructed once at process
//! start and passed into the orchestrator, never read from ambient global
//! state mid-workflow. `from_env` exists as a convenience for binaries.

use std::env;

/// Environment variable holding the base58 funding keypair.
pub const FUNDING_KEY_ENV: &str = "LIFT_FUNDING_KEY";

/// Environment variable holding the RPC endpoint URL.
pub const RPC_URL_ENV: &str = "LIFT_RPC_URL";

/// Default RPC endpoint when none is configured.
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Process-wide launcher configuration.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Base58-encoded funding keypair, if configured.
    pub funding_key: Option<String>,
    /// RPC endpoint consumed by the chain-facing collaborators.
    pub rpc_url: String,
}

impl LauncherConfig {
    /// Create a configuration with an explicit funding key.
    #[must_use]
    pub fn new(funding_key: impl Into<String>) -> Self {
        Self {
            funding_key: Some(funding_key.into()),
            rpc_url: DEFAULT_RPC_URL.to_string(),
        }
    }

    /// Create a configuration with no funding identity.
    #[must_use]
    pub fn unfunded() -> Self {
        Self {
            funding_key: None,
            rpc_url: DEFAULT_RPC_URL.to_string(),
        }
    }

    /// Override the RPC endpoint.
    #[must_use]
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// Read configuration from the process environment.
    ///
    /// An empty `LIFT_FUNDING_KEY` counts as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let funding_key = env::var(FUNDING_KEY_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let rpc_url = env::var(RPC_URL_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        Self {
            funding_key,
            rpc_url,
        }
    }
}
