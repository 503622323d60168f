use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

/// hl-snapshot — builds the dashboard snapshot artifact from the
/// Hyperliquid public API.
#[derive(Parser, Debug)]
#[command(name = "hl-snapshot", version)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Artifact output path
    #[arg(long, default_value = "data/snapshot.json")]
    pub out: PathBuf,

    /// Liquidation-distance percentage under which a position is flagged
    #[arg(long, default_value = "5")]
    pub risk_threshold_pct: Decimal,

    /// Number of leaderboard entries kept in the artifact
    #[arg(long, default_value = "200")]
    pub top_n: usize,

    /// Number of top accounts polled for open positions
    #[arg(long, default_value = "50")]
    pub top_k: usize,

    /// Leaderboard performance window (day, week, month, allTime)
    #[arg(long, default_value = "day")]
    pub pnl_window: String,

    /// Maximum concurrent per-account position requests
    #[arg(long, default_value = "10")]
    pub max_concurrent_position_fetches: usize,

    /// Timeout per HTTP call in seconds
    #[arg(long, default_value = "10")]
    pub http_timeout_secs: u64,

    /// Overall run deadline in seconds
    #[arg(long, default_value = "300")]
    pub run_timeout_secs: u64,
}
