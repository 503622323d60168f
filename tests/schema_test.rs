//! Fixture tests for the raw API schema and the artifact schema.
//!
//! Each test deserializes a realistic JSON payload, verifies field values,
//! and (for artifact types) round-trips to confirm the encoding is lossless.

use hl_snapshot::snapshot::Snapshot;
use hl_snapshot::types::*;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// MetaAndAssetCtxs
// ---------------------------------------------------------------------------

#[test]
fn test_meta_and_asset_ctxs_parses_two_element_array() {
    let json = r#"[
        {
            "universe": [
                {"name": "BTC", "szDecimals": 5, "maxLeverage": 50},
                {"name": "ETH", "szDecimals": 4, "maxLeverage": 50}
            ]
        },
        [
            {
                "markPx": "50000.0",
                "oraclePx": "50010.5",
                "dayNtlVlm": "123456789.12",
                "openInterest": "1234.5",
                "funding": "0.0000125",
                "prevDayPx": "49000.0"
            },
            {
                "markPx": "3000.0",
                "oraclePx": null,
                "dayNtlVlm": "9876543.21",
                "openInterest": "55555.5",
                "funding": "-0.00005"
            }
        ]
    ]"#;

    let MetaAndAssetCtxs(meta, ctxs) = serde_json::from_str(json).unwrap();
    assert_eq!(meta.universe.len(), 2);
    assert_eq!(meta.universe[0].name, "BTC");
    assert_eq!(meta.universe[0].max_leverage, Some(50));
    assert_eq!(ctxs.len(), 2);
    assert_eq!(ctxs[0].mark_px, dec!(50000.0));
    assert_eq!(ctxs[0].oracle_px, Some(dec!(50010.5)));
    assert_eq!(ctxs[0].funding, dec!(0.0000125));
    assert_eq!(ctxs[0].prev_day_px, Some(dec!(49000.0)));
    assert!(ctxs[1].oracle_px.is_none());
    assert!(ctxs[1].prev_day_px.is_none());
    assert_eq!(ctxs[1].funding, dec!(-0.00005));
}

#[test]
fn test_asset_meta_without_max_leverage() {
    let json = r#"{"name": "KPEPE"}"#;
    let asset: AssetMeta = serde_json::from_str(json).unwrap();
    assert_eq!(asset.name, "KPEPE");
    assert!(asset.max_leverage.is_none());
}

// ---------------------------------------------------------------------------
// LeaderboardResponse
// ---------------------------------------------------------------------------

#[test]
fn test_leaderboard_rows_with_window_performances() {
    let json = r#"{
        "leaderboardRows": [
            {
                "ethAddress": "0x1111111111111111111111111111111111111111",
                "displayName": "whale",
                "accountValue": "12345678.90",
                "windowPerformances": [
                    ["day", {"pnl": "1000.5", "roi": "0.05", "vlm": "2000000.0"}],
                    ["week", {"pnl": "-250.25", "roi": "-0.01", "vlm": "9000000.0"}]
                ]
            },
            {
                "ethAddress": "0x2222222222222222222222222222222222222222",
                "displayName": null,
                "accountValue": "500.0",
                "windowPerformances": []
            }
        ]
    }"#;

    let resp: LeaderboardResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.leaderboard_rows.len(), 2);

    let whale = &resp.leaderboard_rows[0];
    assert_eq!(whale.display_name.as_deref(), Some("whale"));
    assert_eq!(whale.account_value, Some(dec!(12345678.90)));
    assert_eq!(whale.window_performances.len(), 2);
    let (window, perf) = &whale.window_performances[0];
    assert_eq!(window, "day");
    assert_eq!(perf.pnl, Some(dec!(1000.5)));
    assert_eq!(perf.vlm, Some(dec!(2000000.0)));

    let anon = &resp.leaderboard_rows[1];
    assert!(anon.display_name.is_none());
    assert!(anon.window_performances.is_empty());
}

#[test]
fn test_leaderboard_empty_body() {
    let resp: LeaderboardResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.leaderboard_rows.is_empty());
}

// ---------------------------------------------------------------------------
// ClearinghouseState
// ---------------------------------------------------------------------------

#[test]
fn test_clearinghouse_state_positions() {
    let json = r#"{
        "marginSummary": {"accountValue": "100000.0"},
        "assetPositions": [
            {
                "type": "oneWay",
                "position": {
                    "coin": "BTC",
                    "szi": "1.5",
                    "entryPx": "48000.0",
                    "positionValue": "75000.0",
                    "unrealizedPnl": "3000.0",
                    "liquidationPx": "43000.0",
                    "leverage": {"type": "cross", "value": 20}
                }
            },
            {
                "type": "oneWay",
                "position": {
                    "coin": "ETH",
                    "szi": "-10.0",
                    "entryPx": "3100.0",
                    "positionValue": "30000.0",
                    "unrealizedPnl": "-1000.0",
                    "liquidationPx": null,
                    "leverage": {"type": "isolated", "value": 5}
                }
            }
        ]
    }"#;

    let state: ClearinghouseState = serde_json::from_str(json).unwrap();
    assert_eq!(state.asset_positions.len(), 2);

    let btc = &state.asset_positions[0].position;
    assert_eq!(btc.coin, "BTC");
    assert_eq!(btc.szi, dec!(1.5));
    assert_eq!(btc.liquidation_px, Some(dec!(43000.0)));
    assert_eq!(btc.leverage.as_ref().and_then(|l| l.value), Some(20));

    let eth = &state.asset_positions[1].position;
    assert_eq!(eth.szi, dec!(-10.0));
    assert!(eth.liquidation_px.is_none());
}

#[test]
fn test_liquidation_px_empty_string_is_none() {
    let json = r#"{
        "assetPositions": [
            {"position": {"coin": "SOL", "szi": "100.0", "liquidationPx": ""}}
        ]
    }"#;

    let state: ClearinghouseState = serde_json::from_str(json).unwrap();
    let sol = &state.asset_positions[0].position;
    assert!(sol.liquidation_px.is_none());
    assert!(sol.entry_px.is_none());
    assert!(sol.leverage.is_none());
}

#[test]
fn test_clearinghouse_state_without_positions() {
    let state: ClearinghouseState = serde_json::from_str("{}").unwrap();
    assert!(state.asset_positions.is_empty());
}

// ---------------------------------------------------------------------------
// Snapshot artifact
// ---------------------------------------------------------------------------

#[test]
fn test_artifact_round_trip_with_plain_numbers() {
    let json = r#"{
        "generatedAt": "2025-06-01T12:00:00Z",
        "stats": {
            "totalOpenInterest": 11000000,
            "totalVolume24h": 123456789.12,
            "activeMarkets": 1,
            "totalTraders": 2
        },
        "markets": [
            {
                "symbol": "BTC",
                "markPrice": 50000.0,
                "oraclePrice": 50010.5,
                "volume24h": 123456789.12,
                "openInterest": 11000000,
                "openInterestContracts": 220,
                "fundingRate": 0.0001,
                "fundingAPY": 10.95,
                "change24hPct": null,
                "maxLeverage": 50
            }
        ],
        "leaderboard": [
            {
                "rank": 1,
                "accountId": "0x1111111111111111111111111111111111111111",
                "displayName": "whale",
                "pnl": 1000.5,
                "roi": 0.05,
                "volume": 2000000.0,
                "accountValue": 12345678.90
            }
        ],
        "riskyPositions": [
            {
                "accountId": "0x1111111111111111111111111111111111111111",
                "symbol": "BTC",
                "size": 1.5,
                "entryPrice": 48000.0,
                "liquidationPrice": 49000.0,
                "markPrice": 50000.0,
                "liquidationDistancePct": 2,
                "positionValue": 75000.0,
                "unrealizedPnl": 3000.0,
                "leverage": 20
            }
        ]
    }"#;

    let snap: Snapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snap.markets[0].funding_apy, dec!(10.95));
    assert_eq!(snap.leaderboard[0].rank, 1);
    assert_eq!(snap.risky_positions[0].liquidation_distance_pct, dec!(2));

    // Round-trip is lossless and keeps numbers plain (no strings, no NaN).
    let serialized = serde_json::to_string(&snap).unwrap();
    assert!(serialized.contains("\"fundingAPY\":10.95"));
    assert!(serialized.contains("\"markPrice\":50000.0"));
    assert!(!serialized.contains("\"markPrice\":\""));
    let snap2: Snapshot = serde_json::from_str(&serialized).unwrap();
    assert_eq!(
        serde_json::to_string(&snap2).unwrap(),
        serialized
    );
}
