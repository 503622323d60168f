//! Raw Hyperliquid API response schema.
//!
//! Field names match the API. Prices, sizes, and rates arrive as decimal
//! strings and are parsed on ingress; fields the API may omit or null are
//! `Option`. Anything that fails validation here is a [`crate::error::SnapshotError::Json`]
//! for the whole response — per-record leniency lives in the normalizer.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// `{"type":"metaAndAssetCtxs"}` response: a two-element array
/// `[{"universe": [...]}, [assetCtx, ...]]`, zipped by index.
#[derive(Debug, Deserialize)]
pub struct MetaAndAssetCtxs(pub Meta, pub Vec<AssetCtx>);

#[derive(Debug, Deserialize)]
pub struct Meta {
    pub universe: Vec<AssetMeta>,
}

/// Static per-asset metadata from the universe list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMeta {
    pub name: String,
    #[serde(default)]
    pub max_leverage: Option<u32>,
}

/// Per-asset market context, index-aligned with the universe.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCtx {
    /// Mark price.
    #[serde(with = "rust_decimal::serde::str")]
    pub mark_px: Decimal,
    /// Oracle (index) price.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub oracle_px: Option<Decimal>,
    /// 24h notional volume in USD.
    #[serde(with = "rust_decimal::serde::str")]
    pub day_ntl_vlm: Decimal,
    /// Open interest in contracts (base units, not USD).
    #[serde(with = "rust_decimal::serde::str")]
    pub open_interest: Decimal,
    /// Current funding rate per funding interval.
    #[serde(with = "rust_decimal::serde::str")]
    pub funding: Decimal,
    /// Mark price 24h ago.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub prev_day_px: Option<Decimal>,
}

/// Leaderboard response from the stats host.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    #[serde(default)]
    pub leaderboard_rows: Vec<LeaderboardRow>,
}

/// One trader row. `windowPerformances` is an array of
/// `["day", {"pnl": "...", "roi": "...", "vlm": "..."}]` pairs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub eth_address: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub account_value: Option<Decimal>,
    #[serde(default)]
    pub window_performances: Vec<(String, WindowPerformance)>,
}

#[derive(Debug, Deserialize)]
pub struct WindowPerformance {
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub pnl: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub roi: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub vlm: Option<Decimal>,
}

/// `{"type":"clearinghouseState","user":...}` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearinghouseState {
    #[serde(default)]
    pub asset_positions: Vec<AssetPosition>,
}

#[derive(Debug, Deserialize)]
pub struct AssetPosition {
    pub position: RawPosition,
}

/// An open position as reported by the clearinghouse.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPosition {
    pub coin: String,
    /// Signed size: positive = long, negative = short.
    #[serde(with = "rust_decimal::serde::str")]
    pub szi: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub entry_px: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub position_value: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub unrealized_pnl: Option<Decimal>,
    /// Absent, null, or `""` when the position cannot be liquidated.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub liquidation_px: Option<Decimal>,
    #[serde(default)]
    pub leverage: Option<Leverage>,
}

#[derive(Debug, Deserialize)]
pub struct Leverage {
    #[serde(default)]
    pub value: Option<u32>,
}

/// The API encodes a missing liquidation price as null or an empty string;
/// either maps to `None` instead of a parse failure.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}
