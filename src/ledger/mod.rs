//! Ledger Integration
//!
//! Communication with the TrustTok smart contract through a capability
//! interface, so the core never touches a provider global:
//!
//! ```text
//! ┌──────────────────┐     ┌───────────────┐     ┌──────────────────┐
//! │ SubmissionRouter │────►│ WalletSession │◄────│ LedgerClient     │
//! │ (onchain path)   │     │ (trait seam)  │     │ (HTTP gateway)   │
//! └──────────────────┘     └───────────────┘     └────────┬─────────┘
//!                                                         │ RPC
//!                                                         ▼
//!                                                 TrustTok contract
//!                                                 createPost/likePost/
//!                                                 sharePost
//! ```
//!
//! The core consumes only the receipt success/failure signal; contract
//! return tuples are not parsed here.

pub mod client;
pub mod session;

pub use client::{LedgerClient, LedgerConfig};
pub use session::{TxReceipt, WalletSession};
