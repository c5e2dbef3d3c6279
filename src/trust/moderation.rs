//! Moderation Policy
//!
//! Maps a trust score to a content-submission disposition. Mid-trust
//! scores in [50,80) are approved outright, not merely "not rejected",
//! so those users stay unblocked; the auto-approved tier above 80 exists
//! for UI messaging. Nothing is ever hard-rejected here, and
//! pending-review is resolved externally.

use serde::{Deserialize, Serialize};

/// Disposition computed once at submission and attached to the result;
/// never re-derived afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    AutoApproved,
    PendingReview,
    Approved,
}

pub fn decide_disposition(score: u8) -> Disposition {
    if score >= 80 {
        Disposition::AutoApproved
    } else if score < 50 {
        Disposition::PendingReview
    } else {
        Disposition::Approved
    }
}

impl Disposition {
    /// Wire status for the submit response. Auto-approved and approved
    /// collapse to the same value; clients distinguish them by message
    /// text only. Kept as-is for compatibility with existing clients.
    pub fn wire_status(&self) -> &'static str {
        match self {
            Disposition::AutoApproved | Disposition::Approved => "approved",
            Disposition::PendingReview => "pending_review",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Disposition::AutoApproved => "Content auto-approved due to high trust score",
            Disposition::PendingReview => "Content requires manual review due to low trust score",
            Disposition::Approved => "Content approved",
        }
    }

    /// Pending-review is the only non-terminal state.
    pub fn is_pending(&self) -> bool {
        matches!(self, Disposition::PendingReview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(decide_disposition(80), Disposition::AutoApproved);
        assert_eq!(decide_disposition(79), Disposition::Approved);
        assert_eq!(decide_disposition(50), Disposition::Approved);
        assert_eq!(decide_disposition(49), Disposition::PendingReview);
        assert_eq!(decide_disposition(100), Disposition::AutoApproved);
        assert_eq!(decide_disposition(0), Disposition::PendingReview);
    }

    #[test]
    fn test_total_over_full_range() {
        for score in 0..=100u8 {
            // Exactly one disposition per score; the match below is
            // exhaustive, so constructing it proves totality.
            let d = decide_disposition(score);
            match d {
                Disposition::AutoApproved => assert!(score >= 80),
                Disposition::Approved => assert!((50..80).contains(&score)),
                Disposition::PendingReview => assert!(score < 50),
            }
        }
    }

    #[test]
    fn test_wire_collapse() {
        assert_eq!(Disposition::AutoApproved.wire_status(), "approved");
        assert_eq!(Disposition::Approved.wire_status(), "approved");
        assert_eq!(Disposition::PendingReview.wire_status(), "pending_review");
        // The two approved forms differ only in message.
        assert_ne!(
            Disposition::AutoApproved.message(),
            Disposition::Approved.message()
        );
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(decide_disposition(65), decide_disposition(65));
    }
}
