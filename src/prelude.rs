//! Prelude module for convenient imports.
//!
//! ```rust
//! use leaderboard::prelude::*;
//! ```

// Configuration
pub use crate::config::{Config, FileConfig, LeaderboardConfig};

// Capabilities and providers
pub use crate::notifier::{ChannelNotifier, Notifier, TracingNotifier};
pub use crate::source::{ScoreBoard, ScoreSource};

// Workflow
pub use crate::leaderboard::{DeliveryPolicy, Leaderboard};
pub use crate::model::{Notification, ScoreEntry};

// Streams
pub use crate::stream::{create_stream, EventSender, EventStream, StreamBuilder};

// Errors
pub use crate::error::{
    ConfigError, ConfigResult, DeliveryError, DeliveryResult, FailedDelivery, LeaderboardError,
    LeaderboardResult, NotifyError, NotifyResult, SourceError, SourceResult,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
