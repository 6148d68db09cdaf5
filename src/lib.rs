//! # Leaderboard
//!
//! Notify the top players on a leaderboard through two narrow capability
//! traits declared by the consumer:
//!
//! - [`ScoreSource`] supplies the top `n` participants, best first.
//! - [`Notifier`] delivers one notification to one participant.
//!
//! [`Leaderboard`] accepts any implementation of both and returns a concrete
//! value from its constructor. Concrete providers ([`ScoreBoard`],
//! [`TracingNotifier`], [`ChannelNotifier`]) do the same: callers get the real
//! type and decide themselves which capability to hand out.
//!
//! ## Quick Start
//!
//! ```rust
//! use leaderboard::prelude::*;
//!
//! # async fn example() -> Result<(), NotifyError> {
//! let board = ScoreBoard::new()
//!     .with_entry("user-1", 10)
//!     .with_entry("user-2", 7)
//!     .with_entry("user-3", 5);
//!
//! let leaderboard = Leaderboard::new(board, TracingNotifier::new());
//! leaderboard.notify_top_players(3).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure handling
//!
//! By default a run stops at the first failed delivery
//! ([`DeliveryPolicy::FailFast`]); earlier notifications are not rolled back.
//! [`DeliveryPolicy::BestEffort`] attempts everyone and reports all failures.

mod config;
mod error;
mod leaderboard;
mod model;
mod notifier;
mod source;
pub mod stream;

pub mod prelude;

// Re-export core types
pub use config::{Config, FileConfig, LeaderboardConfig};
pub use error::{
    ConfigError, ConfigResult, DeliveryError, DeliveryResult, FailedDelivery, LeaderboardError,
    LeaderboardResult, NotifyError, NotifyResult, SourceError, SourceResult,
};
pub use leaderboard::{DeliveryPolicy, Leaderboard};
pub use model::{Notification, ScoreEntry};
pub use notifier::{ChannelNotifier, Notifier, TracingNotifier};
pub use source::{ScoreBoard, ScoreSource};
pub use stream::{create_stream, create_stream_with_buffer, EventSender, EventStream, StreamBuilder};

// Re-export async-trait for convenience
pub use async_trait::async_trait;
