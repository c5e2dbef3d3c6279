//! Content item created once at submission time.
//!
//! `trust_score_at_submission` and `boost_multiplier` are frozen at
//! creation — the author's live score changing later must not touch
//! existing items. Fields are private and no mutators exist for the
//! frozen ones; likes/shares move only through `pub(crate)` bumps
//! reachable from the aggregator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which submission path produced the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Offchain,
    Onchain,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    id: String,
    author: String,
    content: String,
    trust_score_at_submission: u8,
    boost_multiplier: f64,
    likes: u64,
    shares: u64,
    timestamp: DateTime<Utc>,
    origin: Origin,
}

impl ContentItem {
    pub fn new(
        id: String,
        author: String,
        content: String,
        trust_score_at_submission: u8,
        boost_multiplier: f64,
        origin: Origin,
    ) -> Self {
        Self {
            id,
            author,
            content,
            trust_score_at_submission,
            boost_multiplier,
            likes: 0,
            shares: 0,
            timestamp: Utc::now(),
            origin,
        }
    }

    /// Seed constructor for pre-populated feeds (demo data).
    pub(crate) fn seeded(
        id: &str,
        author: &str,
        content: &str,
        trust_score_at_submission: u8,
        boost_multiplier: f64,
        likes: u64,
        shares: u64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.to_string(),
            author: author.to_string(),
            content: content.to_string(),
            trust_score_at_submission,
            boost_multiplier,
            likes,
            shares,
            timestamp,
            origin: Origin::Offchain,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn trust_score_at_submission(&self) -> u8 {
        self.trust_score_at_submission
    }

    pub fn boost_multiplier(&self) -> f64 {
        self.boost_multiplier
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn shares(&self) -> u64 {
        self.shares
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub(crate) fn bump_likes(&mut self) -> u64 {
        self.likes += 1;
        self.likes
    }

    pub(crate) fn bump_shares(&mut self) -> u64 {
        self.shares += 1;
        self.shares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero_and_only_increase() {
        let mut item = ContentItem::new(
            "content_1".to_string(),
            "0xauthor".to_string(),
            "hello".to_string(),
            85,
            3.0,
            Origin::Offchain,
        );
        assert_eq!(item.likes(), 0);
        assert_eq!(item.shares(), 0);
        assert_eq!(item.bump_likes(), 1);
        assert_eq!(item.bump_likes(), 2);
        assert_eq!(item.bump_shares(), 1);
        // Frozen fields untouched by counter bumps.
        assert_eq!(item.trust_score_at_submission(), 85);
        assert_eq!(item.boost_multiplier(), 3.0);
    }

    #[test]
    fn test_wire_field_names() {
        let item = ContentItem::new(
            "content_1".to_string(),
            "0xauthor".to_string(),
            "hello".to_string(),
            85,
            3.0,
            Origin::Onchain,
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["trustScoreAtSubmission"], 85);
        assert_eq!(json["boostMultiplier"], 3.0);
        assert_eq!(json["origin"], "onchain");
    }
}
