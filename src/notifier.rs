//! The notifier capability and two ready-made providers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::error::{DeliveryError, DeliveryResult};
use crate::model::Notification;
use crate::stream::EventSender;

/// Delivers a top-score notification to one participant.
///
/// Deliveries are externally visible and not idempotent: calling `notify`
/// twice may notify the participant twice. Implementations do not retry.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Tell `identity` about their `score`.
    async fn notify(&self, identity: &str, score: i64) -> DeliveryResult<()>;
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    async fn notify(&self, identity: &str, score: i64) -> DeliveryResult<()> {
        (**self).notify(identity, score).await
    }
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for Box<T> {
    async fn notify(&self, identity: &str, score: i64) -> DeliveryResult<()> {
        (**self).notify(identity, score).await
    }
}

/// Notifier that records each notification as a `tracing` event.
///
/// Never fails. Useful as a dry-run stand-in for a real delivery channel.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, identity: &str, score: i64) -> DeliveryResult<()> {
        info!(identity, score, "sending top score notification");
        Ok(())
    }
}

/// Notifier that forwards every notification into an event stream.
///
/// # Example
///
/// ```rust
/// use leaderboard::{create_stream, ChannelNotifier, Notification, Notifier};
///
/// # async fn example() {
/// let (sender, _stream) = create_stream::<Notification>();
/// let notifier = ChannelNotifier::new(sender);
/// notifier.notify("user-1", 10).await.unwrap();
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: EventSender<Notification>,
}

impl ChannelNotifier {
    pub fn new(sender: EventSender<Notification>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl Notifier for ChannelNotifier {
    async fn notify(&self, identity: &str, score: i64) -> DeliveryResult<()> {
        self.sender
            .send(Notification::new(identity, score))
            .await
            .map_err(|_| DeliveryError::Closed)
    }
}
