//! Snapshot builder for a Hyperliquid analytics dashboard.
//!
//! Fetches market contexts, the trader leaderboard, and top accounts' open
//! positions from the public REST API, normalizes them into a single
//! [`snapshot::Snapshot`], and atomically writes it as the JSON artifact the
//! static viewer reads. Each run rebuilds the artifact from scratch; a failed
//! run leaves the previous one untouched.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod snapshot;
pub mod types;
pub mod writer;
