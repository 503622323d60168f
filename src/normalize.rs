//! Pure normalization of raw API payloads into the snapshot artifact.
//!
//! Everything here is deterministic given identical inputs (the timestamp is
//! injected by the caller). Malformed or incomplete records are skipped, never
//! propagated: a position without a liquidation price, or on a market with no
//! usable mark price, simply does not appear in `riskyPositions`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::config::{Config, FUNDING_PERIODS_PER_YEAR};
use crate::snapshot::{LeaderboardEntry, MarketSnapshot, Position, Snapshot, SnapshotStats};
use crate::types::{ClearinghouseState, LeaderboardResponse, LeaderboardRow, MetaAndAssetCtxs};

/// Derived percentages are rounded for a diffable artifact.
const DERIVED_SCALE: u32 = 6;

/// Annualized funding in percent: `rate × periods × 100`.
pub fn funding_apy(rate: Decimal, periods_per_year: u32) -> Decimal {
    (rate * Decimal::from(periods_per_year) * Decimal::ONE_HUNDRED).normalize()
}

/// `|mark − liq| / mark × 100`, or `None` when the mark price is unusable.
pub fn liquidation_distance_pct(mark: Decimal, liq: Decimal) -> Option<Decimal> {
    if mark <= Decimal::ZERO {
        return None;
    }
    let pct = (mark - liq).abs() / mark * Decimal::ONE_HUNDRED;
    Some(pct.round_dp(DERIVED_SCALE).normalize())
}

/// Build the full artifact from the three raw payloads.
pub fn build_snapshot(
    generated_at: DateTime<Utc>,
    raw_markets: &MetaAndAssetCtxs,
    raw_leaderboard: &LeaderboardResponse,
    positions: &[(String, ClearinghouseState)],
    config: &Config,
) -> Snapshot {
    let markets = normalize_markets(raw_markets);
    let leaderboard = rank_leaderboard(
        &raw_leaderboard.leaderboard_rows,
        &config.pnl_window,
        config.top_n,
    );
    let risky_positions = risky_positions(positions, &markets, config.risk_threshold_pct);
    let stats = SnapshotStats {
        total_open_interest: markets
            .iter()
            .map(|m| m.open_interest)
            .sum::<Decimal>()
            .normalize(),
        total_volume_24h: markets
            .iter()
            .map(|m| m.volume_24h)
            .sum::<Decimal>()
            .normalize(),
        active_markets: markets.len(),
        total_traders: raw_leaderboard.leaderboard_rows.len(),
    };

    Snapshot {
        generated_at,
        stats,
        markets,
        leaderboard,
        risky_positions,
    }
}

/// Zip the universe with its contexts and compute derived market fields.
///
/// Output is sorted by USD open interest descending, symbol ascending on ties.
pub fn normalize_markets(raw: &MetaAndAssetCtxs) -> Vec<MarketSnapshot> {
    let MetaAndAssetCtxs(meta, ctxs) = raw;

    let mut markets: Vec<MarketSnapshot> = meta
        .universe
        .iter()
        .zip(ctxs.iter())
        .map(|(asset, ctx)| {
            let change_24h_pct = ctx
                .prev_day_px
                .filter(|prev| *prev > Decimal::ZERO)
                .map(|prev| {
                    ((ctx.mark_px - prev) / prev * Decimal::ONE_HUNDRED)
                        .round_dp(DERIVED_SCALE)
                        .normalize()
                });
            MarketSnapshot {
                symbol: asset.name.clone(),
                mark_price: ctx.mark_px,
                oracle_price: ctx.oracle_px,
                volume_24h: ctx.day_ntl_vlm,
                open_interest: (ctx.open_interest * ctx.mark_px).normalize(),
                open_interest_contracts: ctx.open_interest,
                funding_rate: ctx.funding,
                funding_apy: funding_apy(ctx.funding, FUNDING_PERIODS_PER_YEAR),
                change_24h_pct,
                max_leverage: asset.max_leverage,
            }
        })
        .collect();

    markets.sort_by(|a, b| {
        b.open_interest
            .cmp(&a.open_interest)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
    markets
}

/// Rank traders by pnl over the selected window.
///
/// Descending pnl, accountId ascending on ties, truncated to `top_n`,
/// 1-based rank. Rows without the window are ranked with zero pnl, matching
/// the upstream leaderboard semantics.
pub fn rank_leaderboard(
    rows: &[LeaderboardRow],
    window: &str,
    top_n: usize,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = rows
        .iter()
        .map(|row| {
            let perf = row
                .window_performances
                .iter()
                .find(|(name, _)| name == window)
                .map(|(_, perf)| perf);
            LeaderboardEntry {
                rank: 0,
                account_id: row.eth_address.clone(),
                display_name: row.display_name.clone(),
                pnl: perf.and_then(|p| p.pnl).unwrap_or(Decimal::ZERO),
                roi: perf.and_then(|p| p.roi),
                volume: perf.and_then(|p| p.vlm),
                account_value: row.account_value,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.pnl
            .cmp(&a.pnl)
            .then_with(|| a.account_id.cmp(&b.account_id))
    });
    entries.truncate(top_n);
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = (i + 1) as u32;
    }
    entries
}

/// Cross-reference open positions against mark prices and keep those within
/// the risk threshold of liquidation.
///
/// Excluded: flat positions, positions without a positive liquidation price,
/// and positions whose symbol has no market with a positive mark price.
/// Output is sorted ascending by distance, accountId/symbol ascending on ties.
pub fn risky_positions(
    accounts: &[(String, ClearinghouseState)],
    markets: &[MarketSnapshot],
    threshold_pct: Decimal,
) -> Vec<Position> {
    let marks: HashMap<&str, Decimal> = markets
        .iter()
        .filter(|m| m.mark_price > Decimal::ZERO)
        .map(|m| (m.symbol.as_str(), m.mark_price))
        .collect();

    let marks = &marks;
    let mut risky: Vec<Position> = accounts
        .iter()
        .flat_map(|(account_id, state)| {
            state.asset_positions.iter().filter_map(move |ap| {
                let p = &ap.position;
                if p.szi.is_zero() {
                    return None;
                }
                let liq = p.liquidation_px.filter(|px| *px > Decimal::ZERO)?;
                let mark = marks.get(p.coin.as_str()).copied()?;
                let distance = liquidation_distance_pct(mark, liq)?;
                if distance >= threshold_pct {
                    return None;
                }
                Some(Position {
                    account_id: account_id.clone(),
                    symbol: p.coin.clone(),
                    size: p.szi,
                    entry_price: p.entry_px,
                    liquidation_price: liq,
                    mark_price: mark,
                    liquidation_distance_pct: distance,
                    position_value: p.position_value,
                    unrealized_pnl: p.unrealized_pnl,
                    leverage: p.leverage.as_ref().and_then(|l| l.value),
                })
            })
        })
        .collect();

    risky.sort_by(|a, b| {
        a.liquidation_distance_pct
            .cmp(&b.liquidation_distance_pct)
            .then_with(|| a.account_id.cmp(&b.account_id))
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
    risky
}
