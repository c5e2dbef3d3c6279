//! Trust Scoring and Policy
//!
//! Maps an address to a trust score, then maps the score to the three
//! gated outcomes: benefits, submission disposition, and reach estimate.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────┐
//! │ TrustScoreProvider │  table hit → exact score
//! │ (table + fallback) │  unknown   → pseudo-random [0,100)
//! └─────────┬──────────┘
//!           │ score
//!     ┌─────┴─────────┬────────────────┐
//!     ▼               ▼                ▼
//! ┌─────────┐  ┌────────────┐  ┌──────────────┐
//! │ Benefit │  │ Moderation │  │ ContentBoost │
//! │ Policy  │  │ Policy     │  │ Policy       │
//! └─────────┘  └────────────┘  └──────────────┘
//! ```
//!
//! ## Policy model
//!
//! - The benefit ladder (80/50) and the reach curve (80/60/40) are two
//!   separate policies answering different questions; they must not be
//!   unified.
//! - `can_moderate` sits on its own 70 threshold, orthogonal to the tiers.
//! - All three policy functions are pure and total: same score in,
//!   same result out, no failure path.

mod benefits;
mod boost;
mod moderation;
mod provider;

pub use benefits::{compute_benefits, Benefits, MonetizationTier};
pub use boost::{boost_multiplier, estimated_reach};
pub use moderation::{decide_disposition, Disposition};
pub use provider::{TrustLevel, TrustScoreProvider};
