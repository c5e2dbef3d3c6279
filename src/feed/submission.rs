//! Submission Router
//!
//! Single entry point for both submission paths. A draft carries its mode
//! as a tagged variant; the router validates, freezes the author's score
//! and boost onto the item, dispatches off-chain or on-chain, and hands
//! the normalized item to the feed. It never reorders or deletes
//! existing items, and a failed submission leaves the feed exactly as it
//! was.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::GatewayError;
use crate::feed::aggregator::FeedAggregator;
use crate::feed::item::{ContentItem, Origin};
use crate::ledger::session::WalletSession;
use crate::trust::{compute_benefits, decide_disposition, Disposition, TrustScoreProvider};

/// Which path a draft takes to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionMode {
    Offchain,
    Onchain,
}

#[derive(Debug, Clone)]
pub struct PostDraft {
    pub author: String,
    pub content: String,
    pub mode: SubmissionMode,
}

/// Result of a successful submission. The disposition is computed once
/// here and attached; it is never re-derived afterward.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub item: ContentItem,
    pub disposition: Disposition,
}

pub struct SubmissionRouter {
    provider: Arc<TrustScoreProvider>,
    feed: Arc<RwLock<FeedAggregator>>,
    wallet: Option<Arc<dyn WalletSession>>,
    /// Authors with an on-chain transaction awaiting its receipt.
    /// Guarded by a sync mutex so the entry releases in Drop even when
    /// the ledger call errors.
    in_flight: Mutex<HashSet<String>>,
    /// Monotonic suffix for off-chain ids; a timestamp alone collides
    /// under concurrent submissions within the same timer resolution.
    next_seq: AtomicU64,
}

impl SubmissionRouter {
    pub fn new(provider: Arc<TrustScoreProvider>, feed: Arc<RwLock<FeedAggregator>>) -> Self {
        Self {
            provider,
            feed,
            wallet: None,
            in_flight: Mutex::new(HashSet::new()),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn with_wallet(mut self, wallet: Arc<dyn WalletSession>) -> Self {
        self.wallet = Some(wallet);
        self
    }

    pub fn has_wallet(&self) -> bool {
        self.wallet.is_some()
    }

    /// Submit a post draft through its declared path.
    ///
    /// Empty-after-trim content is rejected before any side effect: no
    /// ledger call is issued and the feed is untouched.
    pub async fn submit(&self, draft: PostDraft) -> Result<SubmissionOutcome, GatewayError> {
        let content = draft.content.trim();
        if content.is_empty() {
            return Err(GatewayError::InvalidInput);
        }

        let score = self.provider.score(&draft.author).await?;
        let disposition = decide_disposition(score);
        // The per-post multiplier frozen onto the item is the benefit
        // ladder's content_boost; the reach curve stays a read-time policy.
        let boost = f64::from(compute_benefits(score).content_boost);

        let item = match draft.mode {
            SubmissionMode::Offchain => {
                let item = ContentItem::new(
                    self.next_offchain_id(),
                    draft.author.clone(),
                    content.to_string(),
                    score,
                    boost,
                    Origin::Offchain,
                );
                debug!(id = %item.id(), author = %draft.author, "Off-chain submission accepted");
                item
            }
            SubmissionMode::Onchain => {
                self.submit_onchain(&draft.author, content, score, boost)
                    .await?
            }
        };

        info!(
            id = %item.id(),
            author = %draft.author,
            score = score,
            disposition = ?disposition,
            "Content item created"
        );

        self.feed.write().await.prepend(item.clone());

        Ok(SubmissionOutcome { item, disposition })
    }

    /// On-chain path: requires a connected wallet session, refuses a
    /// second submission for an author whose transaction is still
    /// pending, and synthesizes the item only once a successful receipt
    /// is observed.
    async fn submit_onchain(
        &self,
        author: &str,
        content: &str,
        score: u8,
        boost: f64,
    ) -> Result<ContentItem, GatewayError> {
        let wallet = self.wallet.as_ref().ok_or(GatewayError::NotConnected)?;
        if !wallet.is_connected().await {
            return Err(GatewayError::NotConnected);
        }

        let _pending = InFlightGuard::acquire(&self.in_flight, author)?;

        // The receipt wait is unbounded and not cancellable once issued;
        // the feed lock is not held across it.
        let receipt = wallet
            .send_transaction("createPost", &[serde_json::json!(content)])
            .await?;

        if !receipt.success {
            warn!(author = %author, error = ?receipt.error, "Ledger rejected createPost");
            return Err(GatewayError::submission_failed(
                receipt
                    .error
                    .unwrap_or_else(|| "transaction rejected".to_string()),
            ));
        }

        let id = match receipt.tx_hash {
            Some(ref hash) => format!("onchain_{hash}"),
            None => format!(
                "onchain_{}_{}",
                chrono::Utc::now().timestamp_millis(),
                self.next_seq.fetch_add(1, Ordering::Relaxed)
            ),
        };

        Ok(ContentItem::new(
            id,
            author.to_string(),
            content.to_string(),
            score,
            boost,
            Origin::Onchain,
        ))
    }

    fn next_offchain_id(&self) -> String {
        format!(
            "content_{}_{}",
            chrono::Utc::now().timestamp_millis(),
            self.next_seq.fetch_add(1, Ordering::Relaxed)
        )
    }
}

/// Holds an author's slot in the in-flight set for the lifetime of one
/// on-chain attempt.
struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<String>>,
    author: String,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(set: &'a Mutex<HashSet<String>>, author: &str) -> Result<Self, GatewayError> {
        let mut pending = set.lock().expect("in-flight set poisoned");
        if !pending.insert(author.to_string()) {
            return Err(GatewayError::AlreadyPending {
                address: author.to_string(),
            });
        }
        Ok(Self {
            set,
            author: author.to_string(),
        })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set
            .lock()
            .expect("in-flight set poisoned")
            .remove(&self.author);
    }
}
