//! Integration tests for the leaderboard workflow
//!
//! These tests wire real providers and hand-written collaborators into a
//! `Leaderboard` through its public API only.

use futures::StreamExt;
use leaderboard::prelude::*;
use std::sync::{Arc, Mutex};

// =============================================================================
// Test Collaborators
// =============================================================================

/// A score source that is always down
struct OfflineSource;

#[async_trait]
impl ScoreSource for OfflineSource {
    async fn fetch_top(&self, _count: usize) -> SourceResult<Vec<ScoreEntry>> {
        Err(SourceError::Unavailable("connection refused".to_string()))
    }
}

/// Notifier that fails once it has delivered `budget` notifications
struct BudgetNotifier {
    budget: usize,
    sent: Mutex<Vec<String>>,
}

impl BudgetNotifier {
    fn new(budget: usize) -> Self {
        Self {
            budget,
            sent: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for BudgetNotifier {
    async fn notify(&self, identity: &str, _score: i64) -> DeliveryResult<()> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(identity.to_string());
        if sent.len() > self.budget {
            return Err(DeliveryError::Failed("quota exceeded".to_string()));
        }
        Ok(())
    }
}

/// One concrete type that satisfies both capabilities.
///
/// It ranks players and also keeps an inbox of what it was told, so a single
/// shared instance can be handed to the leaderboard twice.
#[derive(Default)]
struct Arcade {
    board: ScoreBoard,
    inbox: Mutex<Vec<Notification>>,
}

#[async_trait]
impl ScoreSource for Arcade {
    async fn fetch_top(&self, count: usize) -> SourceResult<Vec<ScoreEntry>> {
        self.board.fetch_top(count).await
    }
}

#[async_trait]
impl Notifier for Arcade {
    async fn notify(&self, identity: &str, score: i64) -> DeliveryResult<()> {
        self.inbox
            .lock()
            .unwrap()
            .push(Notification::new(identity, score));
        Ok(())
    }
}

fn podium() -> ScoreBoard {
    ScoreBoard::new()
        .with_entry("user-3", 5)
        .with_entry("user-1", 10)
        .with_entry("user-2", 7)
}

// =============================================================================
// Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_top_three_notified_in_order() {
    let (sender, stream) = create_stream::<Notification>();
    let leaderboard = Leaderboard::new(podium(), ChannelNotifier::new(sender));

    let delivered = leaderboard.notify_top_players(3).await.unwrap();
    assert_eq!(delivered, 3);
    drop(leaderboard);

    let received: Vec<_> = stream.collect().await;
    assert_eq!(
        received,
        vec![
            Notification::new("user-1", 10),
            Notification::new("user-2", 7),
            Notification::new("user-3", 5),
        ]
    );
}

#[tokio::test]
async fn test_source_error_means_zero_notifications() {
    let notifier = Arc::new(BudgetNotifier::new(usize::MAX));
    let leaderboard = Leaderboard::new(OfflineSource, Arc::clone(&notifier));

    let err = leaderboard.notify_top_players(3).await.unwrap_err();
    assert!(matches!(
        err,
        NotifyError::SourceUnavailable(SourceError::Unavailable(_))
    ));
    assert!(notifier.calls().is_empty());
}

#[tokio::test]
async fn test_fewer_entries_than_requested() {
    let notifier = Arc::new(BudgetNotifier::new(usize::MAX));
    let leaderboard = Leaderboard::new(podium(), Arc::clone(&notifier));

    assert_eq!(leaderboard.notify_top_players(50).await.unwrap(), 3);
    assert_eq!(notifier.calls(), vec!["user-1", "user-2", "user-3"]);
}

#[tokio::test]
async fn test_failure_on_kth_entry_attempts_exactly_k() {
    for k in 1..=3 {
        let notifier = Arc::new(BudgetNotifier::new(k - 1));
        let leaderboard = Leaderboard::new(podium(), Arc::clone(&notifier));

        let err = leaderboard.notify_top_players(3).await.unwrap_err();
        assert!(matches!(err, NotifyError::DeliveryFailed { .. }));
        assert_eq!(notifier.calls().len(), k);
    }
}

#[tokio::test]
async fn test_best_effort_reports_every_failure() {
    let notifier = Arc::new(BudgetNotifier::new(1));
    let leaderboard =
        Leaderboard::new(podium(), Arc::clone(&notifier)).with_policy(DeliveryPolicy::BestEffort);

    match leaderboard.notify_top_players(3).await {
        Err(NotifyError::PartialDelivery {
            delivered,
            failures,
        }) => {
            assert_eq!(delivered, 1);
            assert_eq!(failures.len(), 2);
            assert_eq!(failures[0].identity, "user-2");
            assert_eq!(failures[1].identity, "user-3");
        }
        other => panic!("expected partial delivery, got {other:?}"),
    }
    assert_eq!(notifier.calls().len(), 3);
}

#[tokio::test]
async fn test_dropped_listener_fails_delivery() {
    let (sender, stream) = create_stream::<Notification>();
    drop(stream);
    let leaderboard = Leaderboard::new(podium(), ChannelNotifier::new(sender));

    match leaderboard.notify_top_players(3).await {
        Err(NotifyError::DeliveryFailed { identity, source }) => {
            assert_eq!(identity, "user-1");
            assert_eq!(source, DeliveryError::Closed);
        }
        other => panic!("expected delivery failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_one_type_serves_both_capabilities() {
    let arcade = Arc::new(Arcade {
        board: ScoreBoard::new().with_entry("TY", 9).with_entry("Maru", 8),
        ..Default::default()
    });

    let leaderboard = Leaderboard::new(Arc::clone(&arcade), Arc::clone(&arcade));
    assert_eq!(leaderboard.notify_top_players(1).await.unwrap(), 1);
    assert_eq!(
        *arcade.inbox.lock().unwrap(),
        vec![Notification::new("TY", 9)]
    );
}

#[tokio::test]
async fn test_boxed_trait_objects() {
    let source: Box<dyn ScoreSource> = Box::new(podium());
    let notifier: Box<dyn Notifier> = Box::new(TracingNotifier::new());

    let leaderboard = Leaderboard::new(source, notifier);
    assert_eq!(leaderboard.notify_top_players(2).await.unwrap(), 2);
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[tokio::test]
async fn test_config_file_drives_run() -> LeaderboardResult<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaderboard.toml");
    std::fs::write(&path, "name = \"weekly\"\ntop_count = 2\n").unwrap();

    let config = LeaderboardConfig::from_file(&path)?;
    assert_eq!(config.name(), "weekly");

    let notifier = Arc::new(BudgetNotifier::new(usize::MAX));
    let leaderboard = Leaderboard::from_config(&config, podium(), Arc::clone(&notifier))?;
    assert_eq!(leaderboard.run().await?, 2);
    assert_eq!(notifier.calls(), vec!["user-1", "user-2"]);
    Ok(())
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");

    let config = LeaderboardConfig::new()
        .with_name("monthly")
        .with_top_count(10)
        .with_policy(DeliveryPolicy::BestEffort);
    config.to_file(&path).unwrap();

    assert_eq!(LeaderboardConfig::from_file(&path).unwrap(), config);
}

#[test]
fn test_missing_config_file() {
    let err = LeaderboardConfig::from_file(std::path::Path::new("/nonexistent/leaderboard.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_error_display() {
    let error = NotifyError::SourceUnavailable(SourceError::from("lolnope"));
    let msg = format!("{}", error);
    assert!(msg.contains("lolnope"));

    let root: LeaderboardError = ConfigError::Invalid("bad".to_string()).into();
    assert!(root.to_string().contains("bad"));
}
