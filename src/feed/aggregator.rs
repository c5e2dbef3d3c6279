//! Feed Aggregator
//!
//! Ordered sequence of content items, newest first. Insertion is a head
//! prepend; nothing here ever removes an item — hiding moderated content
//! is a read-time concern for callers. Targeted mutation touches exactly
//! one counter on one item; an absent id is an explicit error rather than
//! a silent no-op, so data-integrity bugs surface.

use chrono::{Duration, Utc};
use std::collections::VecDeque;
use tracing::debug;

use crate::error::GatewayError;
use crate::feed::item::ContentItem;

#[derive(Debug, Default)]
pub struct FeedAggregator {
    items: VecDeque<ContentItem>,
}

impl FeedAggregator {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Insert at the head. O(1); relative order of existing items is
    /// untouched.
    pub fn prepend(&mut self, item: ContentItem) {
        debug!(id = %item.id(), origin = ?item.origin(), "Prepending item to feed");
        self.items.push_front(item);
    }

    /// Increment the like count of the item with `id` by exactly 1 and
    /// return the new count. Absent id is `NotFound`.
    pub fn increment_like(&mut self, id: &str) -> Result<u64, GatewayError> {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => Ok(item.bump_likes()),
            None => Err(GatewayError::NotFound { id: id.to_string() }),
        }
    }

    /// Increment the share count of the item with `id` by exactly 1 and
    /// return the new count. Absent id is `NotFound`.
    pub fn increment_share(&mut self, id: &str) -> Result<u64, GatewayError> {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => Ok(item.bump_shares()),
            None => Err(GatewayError::NotFound { id: id.to_string() }),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items in feed order, newest first.
    pub fn items(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter()
    }

    /// Owned snapshot for serialization outside the lock.
    pub fn snapshot(&self) -> Vec<ContentItem> {
        self.items.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The three demo posts the platform launched with, newest first once
/// prepended in order.
pub fn demo_feed() -> Vec<ContentItem> {
    let now = Utc::now();
    vec![
        ContentItem::seeded(
            "content_demo_3",
            "0x9876543210987654321098765432109876543210",
            "Quick crypto tip: Always DYOR before investing!",
            45,
            1.0,
            23,
            5,
            now - Duration::hours(6),
        ),
        ContentItem::seeded(
            "content_demo_2",
            "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd",
            "Sharing my research on blockchain scalability solutions. Layer 2 is the way forward!",
            92,
            3.0,
            890,
            156,
            now - Duration::hours(4),
        ),
        ContentItem::seeded(
            "content_demo_1",
            "0x1234567890123456789012345678901234567890",
            "Just launched my new DeFi project! Building the future of decentralized finance \
             with complete transparency.",
            85,
            3.0,
            1250,
            340,
            now - Duration::hours(2),
        ),
    ]
}
