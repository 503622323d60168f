//! Normalized snapshot artifact consumed by the static dashboard.
//!
//! Field order is fixed by struct declaration order and every quantity is a
//! `Decimal` serialized as a plain JSON number, so identical inputs produce
//! byte-identical artifacts. There are no maps anywhere in the tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Root artifact. Rebuilt from scratch on every run and atomically replaced
/// on disk; a failed run leaves the previous artifact untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub generated_at: DateTime<Utc>,
    pub stats: SnapshotStats,
    /// Sorted by `openInterest` descending, symbol ascending on ties.
    pub markets: Vec<MarketSnapshot>,
    /// Top N traders, rank 1 first.
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Sorted ascending by `liquidationDistancePct`.
    pub risky_positions: Vec<Position>,
}

/// Aggregate dashboard figures across all markets and traders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotStats {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_open_interest: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_volume_24h: Decimal,
    pub active_markets: usize,
    pub total_traders: usize,
}

/// One perpetual market.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub mark_price: Decimal,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub oracle_price: Option<Decimal>,
    /// 24h notional volume in USD.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub volume_24h: Decimal,
    /// Open interest in USD notional (contracts × mark price).
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub open_interest: Decimal,
    /// Open interest in contracts, as reported by the API.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub open_interest_contracts: Decimal,
    /// Funding rate per funding interval, as reported.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub funding_rate: Decimal,
    /// Annualized funding in percent. Always recomputed from `fundingRate`,
    /// never taken from upstream.
    #[serde(rename = "fundingAPY", with = "rust_decimal::serde::arbitrary_precision")]
    pub funding_apy: Decimal,
    /// 24h price change in percent; null when no previous-day price exists.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub change_24h_pct: Option<Decimal>,
    #[serde(default)]
    pub max_leverage: Option<u32>,
}

/// One ranked trader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based rank: descending pnl, accountId ascending on ties.
    pub rank: u32,
    pub account_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub pnl: Decimal,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub roi: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub volume: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub account_value: Option<Decimal>,
}

/// One open position flagged as close to liquidation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub account_id: String,
    pub symbol: String,
    /// Signed size: positive = long, negative = short.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub size: Decimal,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub entry_price: Option<Decimal>,
    /// Positions without a liquidation price never reach the artifact.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub liquidation_price: Decimal,
    /// Mark price of the position's market at snapshot time.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub mark_price: Decimal,
    /// `|mark − liq| / mark × 100`; non-negative by construction.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub liquidation_distance_pct: Decimal,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub position_value: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub unrealized_pnl: Option<Decimal>,
    #[serde(default)]
    pub leverage: Option<u32>,
}
