//! HTTP client for the TrustTok contract gateway.
//!
//! Issues contract writes (`createPost`, `likePost`, `sharePost`) and
//! waits for their receipts. There are deliberately no retry helpers
//! here: a failed submission is terminal for that attempt, and
//! resubmission is a fresh, explicit call from the caller.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::GatewayError;
use crate::ledger::session::{TxReceipt, WalletSession};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    pub rpc_url: String,
    pub contract_address: String,
    /// Signing account bound to this session; empty means not connected.
    pub account: String,
    pub timeout_secs: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            contract_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
            account: String::new(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct TxRequest<'a> {
    method: &'a str,
    args: &'a [serde_json::Value],
    from: &'a str,
}

#[derive(Debug, Clone)]
pub struct LedgerClient {
    config: LedgerConfig,
    http_client: Client,
    state: Arc<RwLock<ClientState>>,
}

#[derive(Debug, Clone, Default)]
struct ClientState {
    connected: bool,
    last_tx_hash: Option<String>,
}

impl LedgerClient {
    pub fn new(config: LedgerConfig) -> anyhow::Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("TrustTok-Gateway/1.0")
            .build()?;

        Ok(Self {
            config,
            http_client,
            state: Arc::new(RwLock::new(ClientState::default())),
        })
    }

    /// Probe the gateway and mark the session connected on success.
    pub async fn connect(&self) -> anyhow::Result<bool> {
        let url = format!("{}/health", self.config.rpc_url);

        match self.http_client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => {
                let mut state = self.state.write().await;
                state.connected = true;
                info!(contract = %self.config.contract_address, "Ledger session connected");
                Ok(true)
            }
            Ok(resp) => {
                warn!("Ledger health check failed with status: {}", resp.status());
                Ok(false)
            }
            Err(e) => {
                warn!("Ledger health check failed: {}", e);
                Ok(false)
            }
        }
    }

    pub async fn create_post(&self, content: &str) -> Result<TxReceipt, GatewayError> {
        self.send_transaction("createPost", &[serde_json::json!(content)])
            .await
    }

    pub async fn like_post(&self, post_id: u64) -> Result<TxReceipt, GatewayError> {
        self.send_transaction("likePost", &[serde_json::json!(post_id)])
            .await
    }

    pub async fn share_post(&self, post_id: u64) -> Result<TxReceipt, GatewayError> {
        self.send_transaction("sharePost", &[serde_json::json!(post_id)])
            .await
    }

    pub async fn last_tx_hash(&self) -> Option<String> {
        self.state.read().await.last_tx_hash.clone()
    }

    async fn call_contract(
        &self,
        method: &str,
        args: &[serde_json::Value],
    ) -> Result<TxReceipt, GatewayError> {
        let url = format!(
            "{}/contract/{}/tx",
            self.config.rpc_url, self.config.contract_address
        );

        info!(method = %method, "Submitting ledger transaction");

        let resp = self
            .http_client
            .post(&url)
            .json(&TxRequest {
                method,
                args,
                from: &self.config.account,
            })
            .send()
            .await
            .map_err(|e| GatewayError::submission_failed(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(GatewayError::submission_failed(format!(
                "gateway returned status {}",
                resp.status()
            )));
        }

        let receipt: TxReceipt = resp
            .json()
            .await
            .map_err(|e| GatewayError::submission_failed(e.to_string()))?;

        if receipt.success {
            info!(method = %method, tx = ?receipt.tx_hash, "Transaction confirmed");
            let mut state = self.state.write().await;
            state.last_tx_hash = receipt.tx_hash.clone();
        } else {
            warn!(method = %method, error = ?receipt.error, "Transaction rejected");
        }

        Ok(receipt)
    }
}

#[async_trait]
impl WalletSession for LedgerClient {
    async fn is_connected(&self) -> bool {
        self.state.read().await.connected && !self.config.account.is_empty()
    }

    async fn current_account(&self) -> Option<String> {
        if self.config.account.is_empty() {
            None
        } else {
            Some(self.config.account.clone())
        }
    }

    async fn send_transaction(
        &self,
        method: &str,
        args: &[serde_json::Value],
    ) -> Result<TxReceipt, GatewayError> {
        self.call_contract(method, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = LedgerConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.account.is_empty());
        assert!(config.contract_address.starts_with("0x"));
    }

    #[test]
    fn test_client_creation() {
        let client = LedgerClient::new(LedgerConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_unconnected_session_has_no_account() {
        let client = LedgerClient::new(LedgerConfig::default()).unwrap();
        assert!(!client.is_connected().await);
        assert!(client.current_account().await.is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_is_submission_failed() {
        let config = LedgerConfig {
            rpc_url: "http://127.0.0.1:1".to_string(),
            account: "0xauthor".to_string(),
            timeout_secs: 1,
            ..LedgerConfig::default()
        };
        let client = LedgerClient::new(config).unwrap();

        let err = client.create_post("hello").await.unwrap_err();
        assert!(matches!(err, GatewayError::SubmissionFailed { .. }));
    }
}
