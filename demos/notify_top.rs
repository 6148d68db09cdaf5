//! Example: notify the top players of a leaderboard
//!
//! Run with `cargo run --example notify_top`, optionally passing the path to
//! a TOML config file. Set `RUST_LOG=leaderboard=debug` for more detail.

use futures::StreamExt;
use leaderboard::prelude::*;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "leaderboard=debug,notify_top=debug,info"
    } else {
        "leaderboard=info,notify_top=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

/// A score source that is down, to show how failures surface
struct Maintenance;

#[async_trait]
impl ScoreSource for Maintenance {
    async fn fetch_top(&self, _count: usize) -> SourceResult<Vec<ScoreEntry>> {
        Err(SourceError::Unavailable("scheduled maintenance".to_string()))
    }
}

fn load_config() -> LeaderboardResult<LeaderboardConfig> {
    match std::env::args().nth(1) {
        Some(path) => Ok(LeaderboardConfig::from_file(Path::new(&path))?),
        None => Ok(LeaderboardConfig::new().with_name("gsl-weekly")),
    }
}

#[tokio::main]
async fn main() -> LeaderboardResult<()> {
    let config = load_config()?;
    init_logger(config.is_verbose());

    let mut board = ScoreBoard::new()
        .with_entry("Maru", 7)
        .with_entry("TY", 9)
        .with_entry("Rogue", 7)
        .with_entry("Dark", 4);
    board.award_points(["Dark"], 4);

    // Dry run: log each notification
    let leaderboard = Leaderboard::from_config(&config, board.clone(), TracingNotifier::new())?;
    let delivered = leaderboard.run().await?;
    tracing::info!(delivered, config = config.name(), "dry run finished");

    // Stream notifications to an in-process listener
    let (sender, mut stream) = create_stream::<Notification>();
    let leaderboard = Leaderboard::new(board, ChannelNotifier::new(sender));
    let (result, received) = tokio::join!(
        async move { leaderboard.notify_top_players(config.top_count).await },
        async move {
            let mut received = Vec::new();
            while let Some(notification) = stream.next().await {
                received.push(notification);
            }
            received
        }
    );
    result?;
    for notification in &received {
        tracing::info!(
            identity = %notification.identity,
            score = notification.score,
            "listener received notification"
        );
    }

    // Source outage: nobody is notified
    let leaderboard = Leaderboard::new(Maintenance, TracingNotifier::new());
    if let Err(err) = leaderboard.notify_top_players(3).await {
        tracing::warn!(error = %err, "run aborted");
    }

    Ok(())
}
