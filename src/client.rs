//! HTTP client for the Hyperliquid public API.
//!
//! Two hosts are involved: the main API host serving `POST /info`, and the
//! stats host serving the leaderboard. Every call carries the configured
//! per-request timeout; retry policy lives in [`with_retries`].

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::warn;

use crate::config::Config;
use crate::error::{Result, SnapshotError};
use crate::types::{ClearinghouseState, LeaderboardResponse, MetaAndAssetCtxs};

#[derive(Debug, Clone)]
pub struct HyperliquidClient {
    client: Client,
    info_url: String,
    leaderboard_url: String,
}

impl HyperliquidClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.http_timeout).build()?;
        Ok(Self {
            client,
            info_url: config.info_url.clone(),
            leaderboard_url: config.leaderboard_url.clone(),
        })
    }

    /// `{"type":"metaAndAssetCtxs"}` — market metadata plus per-asset contexts.
    pub async fn meta_and_asset_ctxs(&self) -> Result<MetaAndAssetCtxs> {
        self.post_info(json!({"type": "metaAndAssetCtxs"})).await
    }

    /// `{"type":"clearinghouseState","user":...}` — open positions for one account.
    pub async fn clearinghouse_state(&self, user: &str) -> Result<ClearinghouseState> {
        self.post_info(json!({"type": "clearinghouseState", "user": user}))
            .await
    }

    /// GET the full leaderboard from the stats host.
    pub async fn leaderboard(&self) -> Result<LeaderboardResponse> {
        let resp = self.client.get(&self.leaderboard_url).send().await?;
        Self::decode(resp).await
    }

    /// POST a typed request body to `/info`.
    async fn post_info<T: DeserializeOwned>(&self, body: serde_json::Value) -> Result<T> {
        let resp = self.client.post(&self.info_url).json(&body).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(SnapshotError::Http { status, message });
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(SnapshotError::Json)
    }
}

/// Run `op` up to `attempts` times with doubling backoff.
///
/// Used for the two required stages (markets, leaderboard); exhausting every
/// attempt aborts the run with [`SnapshotError::RetriesExhausted`].
pub async fn with_retries<T, F, Fut>(
    what: &'static str,
    attempts: u32,
    backoff: Duration,
    mut op: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut delay = backoff;
    for attempt in 1..=attempts {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!(what, attempt, error = %e, "fetch attempt failed");
                if attempt < attempts {
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
    Err(SnapshotError::RetriesExhausted { what, attempts })
}
