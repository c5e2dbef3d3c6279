use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

use crate::ledger::LedgerConfig;

/// Configuration for the trust gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Trust score provider configuration
    pub trust: TrustConfig,
    /// Ledger gateway configuration
    pub ledger: LedgerSection,
    /// Feed configuration
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    pub level: String,
    /// Enable request/response span logging
    pub log_requests: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustConfig {
    /// Known-address score table, injected into the provider at
    /// construction so tests can substitute fixtures
    pub known_scores: HashMap<String, u8>,
    /// Optional remote scorer; when unset, unknown addresses take the
    /// pseudo-random fallback
    pub upstream_url: Option<String>,
    /// Timeout for remote scorer requests
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSection {
    /// Enable the on-chain submission path
    pub enabled: bool,
    /// Contract gateway RPC URL
    pub rpc_url: String,
    /// TrustTok contract address
    pub contract_address: String,
    /// Signing account for the gateway's wallet session
    pub account: String,
    /// Timeout for ledger requests
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Seed the feed with the launch demo posts
    pub seed_demo: bool,
}

impl LedgerSection {
    /// Convert to the client's own config type
    pub fn to_client_config(&self) -> LedgerConfig {
        LedgerConfig {
            rpc_url: self.rpc_url.clone(),
            contract_address: self.contract_address.clone(),
            account: self.account.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Score table for the launch fixture addresses
fn default_known_scores() -> HashMap<String, u8> {
    let mut scores = HashMap::new();
    scores.insert("0x1234567890123456789012345678901234567890".to_string(), 85);
    scores.insert("0xabcdefabcdefabcdefabcdefabcdefabcdefabcd".to_string(), 92);
    scores.insert("0x9876543210987654321098765432109876543210".to_string(), 45);
    scores
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                log_requests: false,
            },
            trust: TrustConfig {
                known_scores: default_known_scores(),
                upstream_url: None,
                timeout_secs: 10,
            },
            ledger: LedgerSection {
                enabled: false,
                rpc_url: "http://127.0.0.1:8545".to_string(),
                contract_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
                account: String::new(),
                timeout_secs: 30,
            },
            feed: FeedConfig { seed_demo: true },
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables over the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Server configuration
        if let Ok(host) = env::var("TRUSTTOK_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = env::var("TRUSTTOK_PORT") {
            config.server.port = port.parse().context("Invalid TRUSTTOK_PORT value")?;
        }

        // Logging configuration
        if let Ok(level) = env::var("TRUSTTOK_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(log_requests) = env::var("TRUSTTOK_LOG_REQUESTS") {
            config.logging.log_requests = log_requests
                .parse()
                .context("Invalid TRUSTTOK_LOG_REQUESTS value")?;
        }

        // Trust provider configuration
        if let Ok(upstream) = env::var("TRUSTTOK_TRUST_UPSTREAM_URL") {
            config.trust.upstream_url = Some(upstream);
        }

        if let Ok(timeout) = env::var("TRUSTTOK_TRUST_TIMEOUT_SECS") {
            config.trust.timeout_secs = timeout
                .parse()
                .context("Invalid TRUSTTOK_TRUST_TIMEOUT_SECS value")?;
        }

        // Ledger configuration
        if let Ok(enabled) = env::var("TRUSTTOK_LEDGER_ENABLED") {
            config.ledger.enabled = enabled
                .parse()
                .context("Invalid TRUSTTOK_LEDGER_ENABLED value")?;
        }

        if let Ok(rpc_url) = env::var("TRUSTTOK_LEDGER_RPC_URL") {
            config.ledger.rpc_url = rpc_url;
        }

        if let Ok(contract) = env::var("TRUSTTOK_LEDGER_CONTRACT") {
            config.ledger.contract_address = contract;
        }

        if let Ok(account) = env::var("TRUSTTOK_LEDGER_ACCOUNT") {
            config.ledger.account = account;
        }

        if let Ok(timeout) = env::var("TRUSTTOK_LEDGER_TIMEOUT_SECS") {
            config.ledger.timeout_secs = timeout
                .parse()
                .context("Invalid TRUSTTOK_LEDGER_TIMEOUT_SECS value")?;
        }

        // Feed configuration
        if let Ok(seed) = env::var("TRUSTTOK_SEED_DEMO_FEED") {
            config.feed.seed_demo = seed
                .parse()
                .context("Invalid TRUSTTOK_SEED_DEMO_FEED value")?;
        }

        Ok(config)
    }
}
