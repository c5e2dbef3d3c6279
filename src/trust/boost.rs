//! Content Boost Policy
//!
//! Bulk-reach estimate with its own curve (80/60/40 breakpoints, a
//! non-integer step at 1.5). Deliberately separate from the benefit
//! ladder's per-post `content_boost` — the two answer different
//! questions and must not be unified.

pub fn boost_multiplier(score: u8) -> f64 {
    if score >= 80 {
        3.0
    } else if score >= 60 {
        2.0
    } else if score >= 40 {
        1.5
    } else {
        1.0
    }
}

pub fn estimated_reach(score: u8) -> u64 {
    (1000.0 * boost_multiplier(score)).floor() as u64
}
