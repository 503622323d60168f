//! Linear snapshot pipeline: fetch → normalize → write.
//!
//! The two required stages (markets, leaderboard) run concurrently and are
//! retried; either failing after retries aborts the run before anything is
//! written. Per-account position fetches are issued with bounded concurrency
//! and individual failures only drop that account from the artifact.

use chrono::Utc;
use futures_util::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::client::{with_retries, HyperliquidClient};
use crate::config::Config;
use crate::error::{Result, SnapshotError};
use crate::types::ClearinghouseState;
use crate::{normalize, writer};

/// Counters reported after a successful run.
#[derive(Debug)]
pub struct RunReport {
    pub markets: usize,
    pub leaderboard_entries: usize,
    pub accounts_polled: usize,
    pub accounts_failed: usize,
    pub risky_positions: usize,
}

/// Execute one snapshot run against the configured endpoints.
pub async fn run(config: &Config) -> Result<RunReport> {
    let client = HyperliquidClient::new(config)?;

    info!("fetching markets and leaderboard");
    let (meta, leaderboard) = tokio::join!(
        with_retries(
            "markets",
            config.fetch_attempts,
            config.fetch_backoff,
            || client.meta_and_asset_ctxs(),
        ),
        with_retries(
            "leaderboard",
            config.fetch_attempts,
            config.fetch_backoff,
            || client.leaderboard(),
        ),
    );
    let meta = meta?;
    let leaderboard = leaderboard?;
    if meta.0.universe.is_empty() {
        return Err(SnapshotError::Schema("empty market universe".to_string()));
    }
    if leaderboard.leaderboard_rows.is_empty() {
        return Err(SnapshotError::Schema("empty leaderboard".to_string()));
    }
    info!(
        markets = meta.0.universe.len(),
        traders = leaderboard.leaderboard_rows.len(),
        "required stages fetched"
    );

    // Top-K accounts by the same ranking the artifact uses.
    let ranked = normalize::rank_leaderboard(
        &leaderboard.leaderboard_rows,
        &config.pnl_window,
        config.top_n,
    );
    let accounts: Vec<String> = ranked
        .iter()
        .take(config.top_k)
        .map(|e| e.account_id.clone())
        .collect();
    let polled = accounts.len();

    info!(accounts = polled, "fetching positions");
    let results: Vec<(String, Result<ClearinghouseState>)> = stream::iter(accounts)
        .map(|addr| {
            let client = &client;
            async move {
                let result = client.clearinghouse_state(&addr).await;
                (addr, result)
            }
        })
        .buffer_unordered(config.max_concurrent_position_fetches)
        .collect()
        .await;

    let mut positions = Vec::with_capacity(results.len());
    let mut failed = 0usize;
    for (addr, result) in results {
        match result {
            Ok(state) => positions.push((addr, state)),
            Err(e) => {
                warn!(account = %addr, error = %e, "position fetch failed, skipping account");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        warn!(
            failed,
            polled, "some accounts unreachable; artifact built from the rest"
        );
    }

    let snapshot = normalize::build_snapshot(Utc::now(), &meta, &leaderboard, &positions, config);
    writer::write_snapshot(&config.out, &snapshot)?;

    Ok(RunReport {
        markets: snapshot.markets.len(),
        leaderboard_entries: snapshot.leaderboard.len(),
        accounts_polled: polled,
        accounts_failed: failed,
        risky_positions: snapshot.risky_positions.len(),
    })
}
