use clap::Parser;
use tracing::{error, info};

use hl_snapshot::cli::Args;
use hl_snapshot::config::Config;
use hl_snapshot::error::SnapshotError;
use hl_snapshot::pipeline;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv(); // load .env if present

    let args = Args::parse();

    // Initialize tracing
    let filter = args
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(&args);
    info!(
        out = %config.out.display(),
        top_n = config.top_n,
        top_k = config.top_k,
        risk_threshold_pct = %config.risk_threshold_pct,
        "snapshot run starting"
    );

    match tokio::time::timeout(config.run_timeout, pipeline::run(&config)).await {
        Ok(Ok(report)) => {
            info!(
                markets = report.markets,
                leaderboard = report.leaderboard_entries,
                accounts_polled = report.accounts_polled,
                accounts_failed = report.accounts_failed,
                risky_positions = report.risky_positions,
                "artifact written"
            );
        }
        Ok(Err(e)) => {
            error!(error = %e, "snapshot run failed, previous artifact preserved");
            std::process::exit(1);
        }
        Err(_) => {
            error!(
                error = %SnapshotError::Timeout,
                timeout_secs = config.run_timeout.as_secs(),
                "snapshot run failed, previous artifact preserved"
            );
            std::process::exit(1);
        }
    }
}
