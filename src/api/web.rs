//! Web API for the trust gateway
//!
//! Endpoints:
//!   GET  /health -> Health check
//!   GET  /trust-score/{address} -> Score, level, and benefits
//!   GET  /content-boost/{address} -> Reach multiplier and estimate
//!   POST /content/submit -> Off-chain content submission
//!   POST /content/submit-onchain -> On-chain content submission
//!   GET  /feed -> Unified feed, newest first
//!   POST /feed/{id}/like -> Increment a like count
//!   POST /feed/{id}/share -> Increment a share count

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::GatewayError;
use crate::feed::{ContentItem, FeedAggregator, PostDraft, SubmissionMode, SubmissionRouter};
use crate::trust::{
    boost_multiplier, compute_benefits, estimated_reach, Benefits, TrustLevel, TrustScoreProvider,
};

#[derive(Clone)]
pub struct WebApiState {
    pub provider: Arc<TrustScoreProvider>,
    pub feed: Arc<RwLock<FeedAggregator>>,
    pub submissions: Arc<SubmissionRouter>,
}

// Response types

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustScoreResponse {
    pub address: String,
    pub trust_score: u8,
    pub level: TrustLevel,
    pub benefits: Benefits,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBoostResponse {
    pub address: String,
    pub trust_score: u8,
    pub boost_multiplier: f64,
    pub estimated_reach: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContentRequest {
    pub user_address: String,
    pub content: String,
    #[serde(default)]
    pub content_type: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContentResponse {
    pub content_id: String,
    pub status: String,
    pub trust_score: u8,
    pub message: String,
}

#[derive(Serialize)]
pub struct FeedResponse {
    pub items: Vec<ContentItem>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct EngagementResponse {
    pub id: String,
    pub likes: Option<u64>,
    pub shares: Option<u64>,
}

/// Map a domain error to its wire status. Kept in one place so the
/// taxonomy and the surface stay in sync.
fn error_response(err: GatewayError) -> (StatusCode, String) {
    let status = match err {
        GatewayError::InvalidInput => StatusCode::BAD_REQUEST,
        GatewayError::NotFound { .. } => StatusCode::NOT_FOUND,
        GatewayError::NotConnected => StatusCode::SERVICE_UNAVAILABLE,
        GatewayError::AlreadyPending { .. } => StatusCode::CONFLICT,
        GatewayError::SubmissionFailed { .. } | GatewayError::UpstreamUnavailable { .. } => {
            StatusCode::BAD_GATEWAY
        }
    };
    (status, err.to_string())
}

// Endpoints

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "TrustTok API is running".to_string(),
    })
}

/// GET /trust-score/{address} - Score with derived level and benefits
pub async fn get_trust_score(
    State(state): State<WebApiState>,
    Path(address): Path<String>,
) -> Result<Json<TrustScoreResponse>, (StatusCode, String)> {
    let trust_score = state
        .provider
        .score(&address)
        .await
        .map_err(error_response)?;

    info!(address = %address, score = trust_score, "Trust score requested");

    Ok(Json(TrustScoreResponse {
        level: TrustLevel::from_score(trust_score),
        benefits: compute_benefits(trust_score),
        address,
        trust_score,
    }))
}

/// GET /content-boost/{address} - Reach multiplier from the boost curve
pub async fn get_content_boost(
    State(state): State<WebApiState>,
    Path(address): Path<String>,
) -> Result<Json<ContentBoostResponse>, (StatusCode, String)> {
    let trust_score = state
        .provider
        .score(&address)
        .await
        .map_err(error_response)?;

    Ok(Json(ContentBoostResponse {
        boost_multiplier: boost_multiplier(trust_score),
        estimated_reach: estimated_reach(trust_score),
        address,
        trust_score,
    }))
}

/// POST /content/submit - Off-chain submission path
pub async fn submit_content(
    State(state): State<WebApiState>,
    Json(payload): Json<SubmitContentRequest>,
) -> Result<Json<SubmitContentResponse>, (StatusCode, String)> {
    let outcome = state
        .submissions
        .submit(PostDraft {
            author: payload.user_address.clone(),
            content: payload.content,
            mode: SubmissionMode::Offchain,
        })
        .await
        .map_err(error_response)?;

    info!(
        author = %payload.user_address,
        score = outcome.item.trust_score_at_submission(),
        content_type = ?payload.content_type,
        "Content submitted"
    );

    Ok(Json(SubmitContentResponse {
        content_id: outcome.item.id().to_string(),
        status: outcome.disposition.wire_status().to_string(),
        trust_score: outcome.item.trust_score_at_submission(),
        message: outcome.disposition.message().to_string(),
    }))
}

/// POST /content/submit-onchain - On-chain submission path
pub async fn submit_content_onchain(
    State(state): State<WebApiState>,
    Json(payload): Json<SubmitContentRequest>,
) -> Result<Json<SubmitContentResponse>, (StatusCode, String)> {
    let outcome = state
        .submissions
        .submit(PostDraft {
            author: payload.user_address.clone(),
            content: payload.content,
            mode: SubmissionMode::Onchain,
        })
        .await
        .map_err(error_response)?;

    Ok(Json(SubmitContentResponse {
        content_id: outcome.item.id().to_string(),
        status: outcome.disposition.wire_status().to_string(),
        trust_score: outcome.item.trust_score_at_submission(),
        message: outcome.disposition.message().to_string(),
    }))
}

/// GET /feed - Snapshot of the unified feed, newest first
pub async fn get_feed(State(state): State<WebApiState>) -> Json<FeedResponse> {
    let feed = state.feed.read().await;
    let items = feed.snapshot();

    Json(FeedResponse {
        total: items.len(),
        items,
    })
}

/// POST /feed/{id}/like - Increment one like count
pub async fn like_item(
    State(state): State<WebApiState>,
    Path(id): Path<String>,
) -> Result<Json<EngagementResponse>, (StatusCode, String)> {
    let likes = state
        .feed
        .write()
        .await
        .increment_like(&id)
        .map_err(error_response)?;

    Ok(Json(EngagementResponse {
        id,
        likes: Some(likes),
        shares: None,
    }))
}

/// POST /feed/{id}/share - Increment one share count
pub async fn share_item(
    State(state): State<WebApiState>,
    Path(id): Path<String>,
) -> Result<Json<EngagementResponse>, (StatusCode, String)> {
    let shares = state
        .feed
        .write()
        .await
        .increment_share(&id)
        .map_err(error_response)?;

    Ok(Json(EngagementResponse {
        id,
        likes: None,
        shares: Some(shares),
    }))
}

pub fn create_router(state: WebApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/trust-score/{address}", get(get_trust_score))
        .route("/content-boost/{address}", get(get_content_boost))
        .route("/content/submit", post(submit_content))
        .route("/content/submit-onchain", post(submit_content_onchain))
        .route("/feed", get(get_feed))
        .route("/feed/{id}/like", post(like_item))
        .route("/feed/{id}/share", post(share_item))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let (status, _) = error_response(GatewayError::InvalidInput);
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(GatewayError::NotFound {
            id: "x".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = error_response(GatewayError::NotConnected);
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, _) = error_response(GatewayError::submission_failed("reverted"));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
