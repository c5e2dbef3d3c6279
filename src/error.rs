//! Domain error taxonomy for the trust gateway
//!
//! Policy functions are total and never fail; these variants cover the
//! submission paths, feed mutation, and the optional remote scorer.
//! A failed submission leaves the feed exactly as it was.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Content was empty or whitespace-only; rejected before any side effect.
    #[error("content is empty after trimming whitespace")]
    InvalidInput,

    /// On-chain submission attempted without an active wallet session.
    #[error("on-chain submission requires a connected wallet session")]
    NotConnected,

    /// A transaction for this author is already awaiting its receipt.
    /// Non-terminal: the pending attempt may still succeed.
    #[error("a submission is already pending for {address}")]
    AlreadyPending { address: String },

    /// Ledger transaction rejected, reverted, or timed out awaiting
    /// confirmation. Terminal for this attempt; resubmission is a fresh call.
    #[error("ledger transaction failed: {reason}")]
    SubmissionFailed { reason: String },

    /// Mutation target id absent from the feed.
    #[error("no feed item with id {id}")]
    NotFound { id: String },

    /// Remote trust-score upstream unreachable. The pseudo-random fallback
    /// covers unknown-but-valid addresses only, never an unreachable scorer.
    #[error("trust score upstream unavailable: {reason}")]
    UpstreamUnavailable { reason: String },
}

impl GatewayError {
    pub fn submission_failed(reason: impl Into<String>) -> Self {
        Self::SubmissionFailed {
            reason: reason.into(),
        }
    }

    pub fn upstream_unavailable(reason: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            reason: reason.into(),
        }
    }
}
