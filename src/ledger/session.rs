//! Wallet session capability interface.
//!
//! The submission router talks to the ledger only through this trait;
//! the HTTP-backed `LedgerClient` implements it in production and tests
//! substitute a mock.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Outcome of a ledger transaction. Success/failure is the only signal
/// the core acts on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxReceipt {
    pub success: bool,
    pub tx_hash: Option<String>,
    pub error: Option<String>,
}

impl TxReceipt {
    pub fn confirmed(tx_hash: impl Into<String>) -> Self {
        Self {
            success: true,
            tx_hash: Some(tx_hash.into()),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            tx_hash: None,
            error: Some(error.into()),
        }
    }
}

/// An active (or absent) wallet connection to the ledger.
#[async_trait]
pub trait WalletSession: Send + Sync {
    async fn is_connected(&self) -> bool;

    /// Address of the signing account, when one is bound to the session.
    async fn current_account(&self) -> Option<String>;

    /// Issue a contract write and wait for its receipt. May suspend for
    /// an unbounded duration; not cancellable once issued. Transport
    /// failures surface as `SubmissionFailed`.
    async fn send_transaction(
        &self,
        method: &str,
        args: &[serde_json::Value],
    ) -> Result<TxReceipt, GatewayError>;
}
