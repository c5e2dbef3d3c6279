//! Integration tests for the TrustTok gateway
//!
//! These tests verify end-to-end functionality of the trust scoring and
//! submission system: policy thresholds, both submission paths, failure
//! handling, and feed consistency.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, Notify, RwLock};

use trusttok_gateway::{
    boost_multiplier, compute_benefits, decide_disposition, estimated_reach, Disposition,
    FeedAggregator, GatewayError, MonetizationTier, Origin, PostDraft, SubmissionMode,
    SubmissionRouter, TrustLevel, TrustScoreProvider, TxReceipt, WalletSession,
};

// ============================================================================
// Test Helpers
// ============================================================================

const TRUSTED: &str = "0x1234567890123456789012345678901234567890";
const RESEARCHER: &str = "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd";
const NEWCOMER: &str = "0x9876543210987654321098765432109876543210";

/// Score table matching the launch fixtures
fn fixture_table() -> HashMap<String, u8> {
    let mut table = HashMap::new();
    table.insert(TRUSTED.to_string(), 85);
    table.insert(RESEARCHER.to_string(), 92);
    table.insert(NEWCOMER.to_string(), 45);
    table
}

fn fixture_provider() -> Arc<TrustScoreProvider> {
    Arc::new(TrustScoreProvider::new(fixture_table()))
}

fn fixture_feed() -> Arc<RwLock<FeedAggregator>> {
    Arc::new(RwLock::new(FeedAggregator::new()))
}

fn draft(author: &str, content: &str, mode: SubmissionMode) -> PostDraft {
    PostDraft {
        author: author.to_string(),
        content: content.to_string(),
        mode,
    }
}

/// Wallet that resolves every transaction immediately
struct InstantWallet {
    receipt: fn() -> Result<TxReceipt, GatewayError>,
}

#[async_trait]
impl WalletSession for InstantWallet {
    async fn is_connected(&self) -> bool {
        true
    }

    async fn current_account(&self) -> Option<String> {
        Some(TRUSTED.to_string())
    }

    async fn send_transaction(
        &self,
        _method: &str,
        _args: &[serde_json::Value],
    ) -> Result<TxReceipt, GatewayError> {
        (self.receipt)()
    }
}

/// Wallet that signals when a transaction enters and holds its receipt
/// until released, to model an unbounded confirmation wait
struct GatedWallet {
    entered: mpsc::Sender<()>,
    release: Arc<Notify>,
}

#[async_trait]
impl WalletSession for GatedWallet {
    async fn is_connected(&self) -> bool {
        true
    }

    async fn current_account(&self) -> Option<String> {
        Some(TRUSTED.to_string())
    }

    async fn send_transaction(
        &self,
        _method: &str,
        _args: &[serde_json::Value],
    ) -> Result<TxReceipt, GatewayError> {
        self.entered.send(()).await.ok();
        self.release.notified().await;
        Ok(TxReceipt::confirmed("0xslow"))
    }
}

// ============================================================================
// Trust Policy Tests
// ============================================================================

mod trust_policies {
    use super::*;

    #[tokio::test]
    async fn test_known_address_end_to_end() {
        let provider = fixture_provider();

        let score = provider.score(TRUSTED).await.unwrap();
        assert_eq!(score, 85);
        assert_eq!(TrustLevel::from_score(score), TrustLevel::High);

        let benefits = compute_benefits(score);
        assert_eq!(benefits.content_boost, 3);
        assert_eq!(benefits.monetization_tier, MonetizationTier::Premium);
        assert!(benefits.can_moderate);
    }

    #[tokio::test]
    async fn test_low_trust_address_end_to_end() {
        let provider = fixture_provider();

        let score = provider.score(NEWCOMER).await.unwrap();
        assert_eq!(score, 45);
        assert_eq!(TrustLevel::from_score(score), TrustLevel::Low);

        let benefits = compute_benefits(score);
        assert_eq!(benefits.content_boost, 1);
        assert_eq!(benefits.monetization_tier, MonetizationTier::Basic);
        assert!(!benefits.can_moderate);

        assert_eq!(decide_disposition(score), Disposition::PendingReview);
        assert_eq!(decide_disposition(score).wire_status(), "pending_review");
        // Reach curve diverges from the benefit ladder at this score.
        assert_eq!(boost_multiplier(score), 1.5);
        assert_eq!(estimated_reach(score), 1500);
    }

    #[tokio::test]
    async fn test_policies_are_idempotent_across_calls() {
        for score in [0u8, 45, 50, 70, 80, 100] {
            assert_eq!(compute_benefits(score), compute_benefits(score));
            assert_eq!(decide_disposition(score), decide_disposition(score));
            assert_eq!(boost_multiplier(score), boost_multiplier(score));
        }
    }

    #[tokio::test]
    async fn test_unknown_address_scores_in_range() {
        let provider = fixture_provider();
        for _ in 0..20 {
            let score = provider.score("0x0000000000000000000000000000000000000000").await;
            assert!(score.unwrap() < 100);
        }
    }
}

// ============================================================================
// Submission Flow Tests
// ============================================================================

mod submission_flows {
    use super::*;

    #[tokio::test]
    async fn test_offchain_submission_reaches_feed_head() {
        let feed = fixture_feed();
        let router = SubmissionRouter::new(fixture_provider(), feed.clone());

        let first = router
            .submit(draft(TRUSTED, "first post", SubmissionMode::Offchain))
            .await
            .unwrap();
        let second = router
            .submit(draft(NEWCOMER, "second post", SubmissionMode::Offchain))
            .await
            .unwrap();

        assert_eq!(first.disposition, Disposition::AutoApproved);
        assert_eq!(second.disposition, Disposition::PendingReview);

        let guard = feed.read().await;
        let ids: Vec<&str> = guard.items().map(|i| i.id()).collect();
        assert_eq!(ids, vec![second.item.id(), first.item.id()]);
    }

    #[tokio::test]
    async fn test_frozen_fields_survive_later_submissions() {
        let feed = fixture_feed();
        let router = SubmissionRouter::new(fixture_provider(), feed.clone());

        let early = router
            .submit(draft(TRUSTED, "early", SubmissionMode::Offchain))
            .await
            .unwrap();

        for n in 0..5 {
            router
                .submit(draft(NEWCOMER, &format!("later {n}"), SubmissionMode::Offchain))
                .await
                .unwrap();
        }

        let guard = feed.read().await;
        let item = guard.get(early.item.id()).unwrap();
        assert_eq!(item.trust_score_at_submission(), 85);
        assert_eq!(item.boost_multiplier(), 3.0);
    }

    #[tokio::test]
    async fn test_whitespace_submission_is_rejected_with_no_feed_mutation() {
        let feed = fixture_feed();
        let router = SubmissionRouter::new(fixture_provider(), feed.clone());

        let err = router
            .submit(draft(TRUSTED, "   ", SubmissionMode::Offchain))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidInput));

        let err = router
            .submit(draft(TRUSTED, "\t\n", SubmissionMode::Onchain))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidInput));

        assert!(feed.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_onchain_submission_normalizes_into_the_same_feed() {
        let feed = fixture_feed();
        let router = SubmissionRouter::new(fixture_provider(), feed.clone()).with_wallet(
            Arc::new(InstantWallet {
                receipt: || Ok(TxReceipt::confirmed("0xabc")),
            }),
        );

        router
            .submit(draft(TRUSTED, "api post", SubmissionMode::Offchain))
            .await
            .unwrap();
        let onchain = router
            .submit(draft(TRUSTED, "chain post", SubmissionMode::Onchain))
            .await
            .unwrap();

        let guard = feed.read().await;
        assert_eq!(guard.len(), 2);

        // Newest first regardless of origin; both items share the shape.
        let head = guard.items().next().unwrap();
        assert_eq!(head.id(), onchain.item.id());
        assert_eq!(head.origin(), Origin::Onchain);
        assert_eq!(head.trust_score_at_submission(), 85);
        assert_eq!(head.boost_multiplier(), 3.0);
        assert_eq!(head.likes(), 0);
    }

    #[tokio::test]
    async fn test_ledger_failure_is_terminal_and_leaves_feed_untouched() {
        let feed = fixture_feed();
        let router = SubmissionRouter::new(fixture_provider(), feed.clone()).with_wallet(
            Arc::new(InstantWallet {
                receipt: || Ok(TxReceipt::rejected("out of gas")),
            }),
        );

        let err = router
            .submit(draft(TRUSTED, "doomed", SubmissionMode::Onchain))
            .await
            .unwrap_err();

        match err {
            GatewayError::SubmissionFailed { reason } => assert!(reason.contains("out of gas")),
            other => panic!("expected SubmissionFailed, got {other:?}"),
        }
        assert!(feed.read().await.is_empty());

        // Resubmission is a fresh, explicit call and is not blocked.
        let err = router
            .submit(draft(TRUSTED, "doomed again", SubmissionMode::Onchain))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::SubmissionFailed { .. }));
    }

    #[tokio::test]
    async fn test_pending_transaction_blocks_resubmission_but_not_reads() {
        let feed = fixture_feed();
        let (entered_tx, mut entered_rx) = mpsc::channel(1);
        let release = Arc::new(Notify::new());

        let router = Arc::new(
            SubmissionRouter::new(fixture_provider(), feed.clone()).with_wallet(Arc::new(
                GatedWallet {
                    entered: entered_tx,
                    release: release.clone(),
                },
            )),
        );

        let background = {
            let router = router.clone();
            tokio::spawn(async move {
                router
                    .submit(draft(TRUSTED, "slow post", SubmissionMode::Onchain))
                    .await
            })
        };

        // Wait until the transaction is in flight.
        entered_rx.recv().await.unwrap();

        // Same author cannot double-submit while the receipt is pending.
        let err = router
            .submit(draft(TRUSTED, "impatient", SubmissionMode::Onchain))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::AlreadyPending { .. }));

        // Unrelated reads and other authors proceed.
        assert!(feed.read().await.is_empty());
        router
            .submit(draft(NEWCOMER, "meanwhile", SubmissionMode::Offchain))
            .await
            .unwrap();

        // The item lands only once the receipt is observed.
        release.notify_one();
        let outcome = background.await.unwrap().unwrap();
        assert_eq!(outcome.item.id(), "onchain_0xslow");
        assert_eq!(feed.read().await.len(), 2);
    }
}

// ============================================================================
// Feed Consistency Tests
// ============================================================================

mod feed_consistency {
    use super::*;

    #[tokio::test]
    async fn test_targeted_like_touches_exactly_one_item() {
        let feed = fixture_feed();
        let router = SubmissionRouter::new(fixture_provider(), feed.clone());

        let a = router
            .submit(draft(TRUSTED, "post a", SubmissionMode::Offchain))
            .await
            .unwrap();
        let b = router
            .submit(draft(RESEARCHER, "post b", SubmissionMode::Offchain))
            .await
            .unwrap();

        let mut guard = feed.write().await;
        assert_eq!(guard.increment_like(a.item.id()).unwrap(), 1);
        assert_eq!(guard.increment_like(a.item.id()).unwrap(), 2);
        assert_eq!(guard.increment_share(b.item.id()).unwrap(), 1);

        let a_stored = guard.get(a.item.id()).unwrap();
        let b_stored = guard.get(b.item.id()).unwrap();
        assert_eq!(a_stored.likes(), 2);
        assert_eq!(a_stored.shares(), 0);
        assert_eq!(b_stored.likes(), 0);
        assert_eq!(b_stored.shares(), 1);

        // Content and frozen fields unaffected by engagement.
        assert_eq!(a_stored.content(), "post a");
        assert_eq!(b_stored.trust_score_at_submission(), 92);
    }

    #[tokio::test]
    async fn test_mutating_absent_id_is_an_explicit_error() {
        let feed = fixture_feed();
        let err = feed
            .write()
            .await
            .increment_like("content_ghost")
            .unwrap_err();
        match err {
            GatewayError::NotFound { id } => assert_eq!(id, "content_ghost"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_concurrent_submissions_produce_unique_ids() {
        let feed = fixture_feed();
        let router = Arc::new(SubmissionRouter::new(fixture_provider(), feed.clone()));

        let mut handles = Vec::new();
        for n in 0..25 {
            let router = router.clone();
            handles.push(tokio::spawn(async move {
                router
                    .submit(draft(TRUSTED, &format!("burst {n}"), SubmissionMode::Offchain))
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let guard = feed.read().await;
        assert_eq!(guard.len(), 25);
        let mut ids: Vec<String> = guard.items().map(|i| i.id().to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 25);
    }
}
