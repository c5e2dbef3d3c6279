//! Benefit Policy
//!
//! Maps a trust score to the per-user benefits record. The tier ladder
//! breaks at 80 and 50; moderation eligibility sits on its own 70
//! threshold, so a score of 72 lands in the standard tier with
//! moderation rights.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonetizationTier {
    Basic,
    Standard,
    Premium,
}

/// Benefits derived entirely from the trust score. Recomputed on every
/// fetch, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefits {
    pub content_boost: u32,
    pub monetization_tier: MonetizationTier,
    pub can_moderate: bool,
}

pub fn compute_benefits(score: u8) -> Benefits {
    let (content_boost, monetization_tier) = if score >= 80 {
        (3, MonetizationTier::Premium)
    } else if score >= 50 {
        (2, MonetizationTier::Standard)
    } else {
        (1, MonetizationTier::Basic)
    };

    Benefits {
        content_boost,
        monetization_tier,
        can_moderate: score >= 70,
    }
}
