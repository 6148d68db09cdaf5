//! Error types for the leaderboard workflow.

use thiserror::Error;

/// Root error type for leaderboard operations.
#[derive(Error, Debug)]
pub enum LeaderboardError {
    /// Notification run errors
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors a score source reports when it cannot produce a ranking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The backing store could not be reached or queried
    #[error("Score source unavailable: {0}")]
    Unavailable(String),

    /// IO error while reading scores
    #[error("IO error: {0}")]
    Io(String),
}

/// Errors a notifier reports for a single delivery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The notification could not be delivered
    #[error("Delivery failed: {0}")]
    Failed(String),

    /// The receiving side is gone
    #[error("Delivery channel closed")]
    Closed,

    /// IO error during delivery
    #[error("IO error: {0}")]
    Io(String),
}

/// One entry that could not be notified during a best-effort run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDelivery {
    /// Identity of the participant that was not notified
    pub identity: String,
    /// Why the delivery failed
    pub error: DeliveryError,
}

/// Errors returned by [`Leaderboard`](crate::Leaderboard) runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// Fetching the top entries failed; nobody was notified
    #[error("Fetching top scores failed: {0}")]
    SourceUnavailable(#[from] SourceError),

    /// A delivery failed and the run stopped there
    #[error("Notifying {identity} failed: {source}")]
    DeliveryFailed {
        identity: String,
        #[source]
        source: DeliveryError,
    },

    /// Every entry was attempted but some deliveries failed
    #[error("{} notification(s) failed, {delivered} delivered", .failures.len())]
    PartialDelivery {
        delivered: usize,
        failures: Vec<FailedDelivery>,
    },
}

/// Errors that can occur while loading or validating configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Reading or writing the configuration file failed
    #[error("IO error: {0}")]
    Io(String),

    /// The configuration file is not valid TOML for this schema
    #[error("Parse error: {0}")]
    Parse(String),

    /// The configuration could not be rendered as TOML
    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::Io(err.to_string())
    }
}

impl From<String> for SourceError {
    fn from(msg: String) -> Self {
        SourceError::Unavailable(msg)
    }
}

impl From<&str> for SourceError {
    fn from(msg: &str) -> Self {
        SourceError::Unavailable(msg.to_string())
    }
}

impl From<std::io::Error> for DeliveryError {
    fn from(err: std::io::Error) -> Self {
        DeliveryError::Io(err.to_string())
    }
}

impl From<String> for DeliveryError {
    fn from(msg: String) -> Self {
        DeliveryError::Failed(msg)
    }
}

impl From<&str> for DeliveryError {
    fn from(msg: &str) -> Self {
        DeliveryError::Failed(msg.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err.to_string())
    }
}

/// Result type alias for score source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type alias for notifier operations.
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Result type alias for leaderboard runs.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for general leaderboard operations.
pub type LeaderboardResult<T> = Result<T, LeaderboardError>;
