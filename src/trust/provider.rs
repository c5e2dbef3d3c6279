//! Trust Score Provider
//!
//! Known addresses resolve to their table score exactly. Unknown addresses
//! get a pseudo-random score in [0,100) — intentionally non-deterministic,
//! so tests can only assert the range on that path. An optional remote
//! scorer can replace the random fallback; when it is unreachable the
//! error propagates instead of fabricating a score.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use crate::error::GatewayError;

/// Coarse trust tier derived solely from the score. Never stored
/// independently of the score that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    Low,
    Medium,
    High,
}

impl TrustLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            TrustLevel::High
        } else if score >= 50 {
            TrustLevel::Medium
        } else {
            TrustLevel::Low
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct UpstreamScoreResponse {
    score: u8,
}

/// Stateless score lookup over an injected table plus a random source.
pub struct TrustScoreProvider {
    known: HashMap<String, u8>,
    upstream: Option<ScoreUpstream>,
}

struct ScoreUpstream {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for TrustScoreProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustScoreProvider")
            .field("known", &self.known.len())
            .field("upstream", &self.upstream.as_ref().map(|u| &u.base_url))
            .finish()
    }
}

impl TrustScoreProvider {
    /// Build a provider over an explicit known-address table. The table is
    /// injected here rather than read from module state so tests can
    /// substitute fixtures.
    pub fn new(known: HashMap<String, u8>) -> Self {
        Self {
            known,
            upstream: None,
        }
    }

    /// Attach a remote scorer queried for addresses the table does not
    /// cover.
    pub fn with_upstream(
        mut self,
        base_url: impl Into<String>,
        timeout_secs: u64,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("TrustTok-Gateway/1.0")
            .build()?;
        self.upstream = Some(ScoreUpstream {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        });
        Ok(self)
    }

    /// Resolve the trust score for an address, in [0,100].
    ///
    /// The table always wins. Past that, a configured upstream is asked
    /// and its failure propagates; otherwise the pseudo-random fallback
    /// applies.
    pub async fn score(&self, address: &str) -> Result<u8, GatewayError> {
        if let Some(score) = self.known.get(address) {
            debug!(address = %address, score = score, "Trust score from known-address table");
            return Ok(*score);
        }

        if let Some(ref upstream) = self.upstream {
            return upstream.fetch(address).await;
        }

        let score = rand::thread_rng().gen_range(0..100);
        debug!(address = %address, score = score, "Trust score from pseudo-random fallback");
        Ok(score)
    }

    /// Whether the address resolves deterministically.
    pub fn is_known(&self, address: &str) -> bool {
        self.known.contains_key(address)
    }
}

impl ScoreUpstream {
    async fn fetch(&self, address: &str) -> Result<u8, GatewayError> {
        let url = format!("{}/score/{}", self.base_url, address);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::upstream_unavailable(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(GatewayError::upstream_unavailable(format!(
                "scorer returned status {}",
                resp.status()
            )));
        }

        let body: UpstreamScoreResponse = resp
            .json()
            .await
            .map_err(|e| GatewayError::upstream_unavailable(e.to_string()))?;

        Ok(body.score.min(100))
    }
}
