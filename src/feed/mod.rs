//! Content Feed and Dual-Path Submission
//!
//! One unified feed over two submission paths: the off-chain API path and
//! the on-chain transaction path through a wallet session. Both paths
//! normalize into the same `ContentItem` shape before insertion.
//!
//! ## Architecture
//!
//! ```text
//!            PostDraft {author, content, mode}
//!                         │
//!                         ▼
//!              ┌──────────────────┐
//!              │ SubmissionRouter │
//!              └───────┬──────────┘
//!         offchain     │     onchain
//!       ┌──────────────┴───────────────┐
//!       ▼                              ▼
//! generated id                ┌───────────────┐
//! content_<ms>_<seq>          │ WalletSession │ createPost → receipt
//!       │                     └───────┬───────┘
//!       └──────────────┬──────────────┘
//!                      ▼
//!             ┌────────────────┐
//!             │ FeedAggregator │  prepend, newest first
//!             └────────────────┘
//! ```
//!
//! ## Ownership
//!
//! The aggregator exclusively owns its items. Score and boost are frozen
//! onto each item at creation; likes and shares are the only fields that
//! change afterward, only through aggregator methods, and only upward.

mod aggregator;
mod item;
mod submission;

pub use aggregator::{demo_feed, FeedAggregator};
pub use item::{ContentItem, Origin};
pub use submission::{PostDraft, SubmissionMode, SubmissionOutcome, SubmissionRouter};
