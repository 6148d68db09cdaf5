//! The top-player notification workflow.
//!
//! A `Leaderboard` is handed a [`ScoreSource`] and a [`Notifier`] and never
//! learns what is behind either of them. It asks the source for the top
//! players and notifies each one in ranking order, one call at a time.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{Config, LeaderboardConfig};
use crate::error::{ConfigResult, FailedDelivery, NotifyError, NotifyResult};
use crate::notifier::Notifier;
use crate::source::ScoreSource;

/// What a run does when a delivery fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryPolicy {
    /// Stop at the first failed delivery and report it.
    ///
    /// Players notified before the failure stay notified; nobody after it is
    /// attempted.
    #[default]
    FailFast,
    /// Attempt every player, then report all failures together.
    BestEffort,
}

/// Notifies the top players on a leaderboard.
///
/// # Example
///
/// ```rust
/// use leaderboard::{Leaderboard, ScoreBoard, TracingNotifier};
///
/// # async fn example() {
/// let board = ScoreBoard::new()
///     .with_entry("user-1", 10)
///     .with_entry("user-2", 7);
///
/// let leaderboard = Leaderboard::new(board, TracingNotifier::new());
/// let delivered = leaderboard.notify_top_players(3).await.unwrap();
/// assert_eq!(delivered, 2);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Leaderboard<S, N> {
    source: S,
    notifier: N,
    policy: DeliveryPolicy,
    top_count: usize,
}

impl<S: ScoreSource, N: Notifier> Leaderboard<S, N> {
    /// Create a leaderboard using the fail-fast policy.
    pub fn new(source: S, notifier: N) -> Self {
        let defaults = LeaderboardConfig::default();
        Self {
            source,
            notifier,
            policy: defaults.policy,
            top_count: defaults.top_count,
        }
    }

    /// Create a leaderboard from validated configuration.
    pub fn from_config(config: &LeaderboardConfig, source: S, notifier: N) -> ConfigResult<Self> {
        config.validate()?;
        debug!(
            config = config.name(),
            top_count = config.top_count,
            policy = ?config.policy,
            "configured leaderboard"
        );
        Ok(Self {
            source,
            notifier,
            policy: config.policy,
            top_count: config.top_count,
        })
    }

    /// Set the delivery policy.
    pub fn with_policy(mut self, policy: DeliveryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DeliveryPolicy {
        self.policy
    }

    /// How many players [`run`](Self::run) notifies.
    pub fn top_count(&self) -> usize {
        self.top_count
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Notify the configured number of top players.
    pub async fn run(&self) -> NotifyResult<usize> {
        self.notify_top_players(self.top_count).await
    }

    /// Notify the top `top` players, best first.
    ///
    /// Returns how many notifications were delivered. If the source fails,
    /// nobody is notified.
    pub async fn notify_top_players(&self, top: usize) -> NotifyResult<usize> {
        let entries = self.source.fetch_top(top).await.map_err(|err| {
            warn!(error = %err, "failed to fetch top players");
            NotifyError::SourceUnavailable(err)
        })?;

        debug!(requested = top, fetched = entries.len(), policy = ?self.policy, "notifying top players");

        let mut delivered = 0;
        let mut failures = Vec::new();

        for entry in &entries {
            match self.notifier.notify(entry.identity(), entry.score()).await {
                Ok(()) => delivered += 1,
                Err(err) => {
                    warn!(identity = entry.identity(), error = %err, "notification failed");
                    match self.policy {
                        DeliveryPolicy::FailFast => {
                            return Err(NotifyError::DeliveryFailed {
                                identity: entry.identity().to_string(),
                                source: err,
                            });
                        }
                        DeliveryPolicy::BestEffort => failures.push(FailedDelivery {
                            identity: entry.identity().to_string(),
                            error: err,
                        }),
                    }
                }
            }
        }

        if !failures.is_empty() {
            return Err(NotifyError::PartialDelivery {
                delivered,
                failures,
            });
        }

        debug!(delivered, "notified top players");
        Ok(delivered)
    }
}
