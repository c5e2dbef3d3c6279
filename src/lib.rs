//! TrustTok Gateway
//!
//! Trust-score decision engine and dual-path content submission for the
//! TrustTok network. Maps an address's trust score to tiered benefits,
//! decides whether submitted content is auto-approved, queued for
//! review, or approved, and merges on-chain and off-chain posts into one
//! consistently ordered feed.
//!
//! ## Module Structure
//!
//! ```text
//! gateway/src/
//! ├── lib.rs         - Crate root with re-exports
//! ├── main.rs        - Server entrypoint
//! ├── config.rs      - Configuration management
//! ├── error.rs       - Domain error taxonomy
//! ├── trust/         - Scoring and policy
//! │   ├── provider.rs   - Score lookup (table + fallback + upstream)
//! │   ├── benefits.rs   - Benefit policy (boost/tier/moderation rights)
//! │   ├── moderation.rs - Submission disposition policy
//! │   └── boost.rs      - Reach estimate policy
//! ├── feed/          - Content feed
//! │   ├── item.rs       - Content item (frozen score/boost)
//! │   ├── aggregator.rs - Ordered feed, targeted mutation
//! │   └── submission.rs - Dual-path submission router
//! ├── ledger/        - Smart contract integration
//! │   ├── session.rs - WalletSession capability trait
//! │   └── client.rs  - HTTP contract gateway client
//! └── api/           - HTTP API endpoints
//!     ├── web.rs        - Trust, submission, and feed endpoints
//!     └── middleware.rs - Security headers, CORS
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod feed;
pub mod ledger;
pub mod trust;

// Re-export main types for convenience
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use feed::{
    demo_feed, ContentItem, FeedAggregator, Origin, PostDraft, SubmissionMode, SubmissionOutcome,
    SubmissionRouter,
};
pub use ledger::{LedgerClient, LedgerConfig, TxReceipt, WalletSession};
pub use trust::{
    boost_multiplier, compute_benefits, decide_disposition, estimated_reach, Benefits,
    Disposition, MonetizationTier, TrustLevel, TrustScoreProvider,
};
