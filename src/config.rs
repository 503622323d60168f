//! Runtime configuration for the snapshot builder.

use std::path::PathBuf;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::cli::Args;

/// Default `/info` endpoint on the main API host.
pub const DEFAULT_INFO_URL: &str = "https://api.hyperliquid.xyz/info";

/// Default leaderboard endpoint on the stats host.
pub const DEFAULT_LEADERBOARD_URL: &str =
    "https://stats-data.hyperliquid.xyz/Mainnet/leaderboard";

/// Funding intervals per year: 8-hour funding, 3 × 365.
pub const FUNDING_PERIODS_PER_YEAR: u32 = 1095;

/// All tuneable parameters for a snapshot run.
///
/// Use [`Default::default()`] for production values; tests override the URLs
/// and shrink the retry backoff.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the `POST /info` endpoint.
    pub info_url: String,
    /// Full URL of the leaderboard endpoint.
    pub leaderboard_url: String,
    /// Artifact output path.
    pub out: PathBuf,
    /// Liquidation-distance percentage under which a position is flagged.
    pub risk_threshold_pct: Decimal,
    /// Leaderboard entries kept in the artifact.
    pub top_n: usize,
    /// Top accounts polled for open positions.
    pub top_k: usize,
    /// Leaderboard performance window selected for ranking.
    pub pnl_window: String,
    /// Concurrency limit for per-account position requests.
    pub max_concurrent_position_fetches: usize,
    /// Timeout applied to every HTTP call.
    pub http_timeout: Duration,
    /// Overall run deadline.
    pub run_timeout: Duration,
    /// Attempts per required fetch stage before the run aborts.
    pub fetch_attempts: u32,
    /// Initial retry backoff; doubles per attempt.
    pub fetch_backoff: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            info_url: DEFAULT_INFO_URL.to_string(),
            leaderboard_url: DEFAULT_LEADERBOARD_URL.to_string(),
            out: PathBuf::from("data/snapshot.json"),
            risk_threshold_pct: dec!(5),
            top_n: 200,
            top_k: 50,
            pnl_window: "day".to_string(),
            max_concurrent_position_fetches: 10,
            http_timeout: Duration::from_secs(10),
            run_timeout: Duration::from_secs(300),
            fetch_attempts: 3,
            fetch_backoff: Duration::from_millis(500),
        }
    }
}

impl Config {
    /// Resolve the runtime configuration from CLI arguments.
    ///
    /// `HL_INFO_URL` and `HL_LEADERBOARD_URL` environment variables override
    /// the API hosts (useful for testnets and local mocks).
    pub fn from_args(args: &Args) -> Self {
        Self {
            info_url: std::env::var("HL_INFO_URL")
                .unwrap_or_else(|_| DEFAULT_INFO_URL.to_string()),
            leaderboard_url: std::env::var("HL_LEADERBOARD_URL")
                .unwrap_or_else(|_| DEFAULT_LEADERBOARD_URL.to_string()),
            out: args.out.clone(),
            risk_threshold_pct: args.risk_threshold_pct,
            top_n: args.top_n,
            top_k: args.top_k,
            pnl_window: args.pnl_window.clone(),
            max_concurrent_position_fetches: args.max_concurrent_position_fetches.max(1),
            http_timeout: Duration::from_secs(args.http_timeout_secs),
            run_timeout: Duration::from_secs(args.run_timeout_secs),
            ..Default::default()
        }
    }
}
