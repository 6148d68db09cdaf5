//! In-process event streams.
//!
//! Listeners that want to observe notifications as they happen receive an
//! [`EventStream`]; the producing side holds an [`EventSender`].

use std::pin::Pin;

use futures_core::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

/// Boxed async stream of events.
pub type EventStream<T> = Pin<Box<dyn Stream<Item = T> + Send>>;

/// Producing half of an event stream, backed by a bounded tokio channel.
#[derive(Debug)]
pub struct EventSender<T> {
    tx: mpsc::Sender<T>,
}

impl<T> EventSender<T> {
    pub fn new(tx: mpsc::Sender<T>) -> Self {
        Self { tx }
    }

    /// Send an event, waiting for buffer space.
    ///
    /// Returns `Err(event)` if the stream was dropped.
    pub async fn send(&self, event: T) -> Result<(), T> {
        self.tx.send(event).await.map_err(|e| e.0)
    }

    /// Check if the stream has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<T> Clone for EventSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Builder for event streams.
///
/// # Example
///
/// ```rust
/// use leaderboard::{Notification, StreamBuilder};
///
/// # async fn example() {
/// let (sender, stream) = StreamBuilder::<Notification>::new()
///     .buffer_size(16)
///     .build();
///
/// sender.send(Notification::new("user-1", 10)).await.unwrap();
/// # }
/// ```
pub struct StreamBuilder<T> {
    buffer_size: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T: Send + 'static> StreamBuilder<T> {
    pub fn new() -> Self {
        Self {
            buffer_size: 100,
            _marker: std::marker::PhantomData,
        }
    }

    /// Set the channel buffer size. Default is 100.
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Build the (sender, stream) pair.
    pub fn build(self) -> (EventSender<T>, EventStream<T>) {
        let (tx, rx) = mpsc::channel(self.buffer_size);
        let sender = EventSender::new(tx);
        let stream: EventStream<T> = Box::pin(ReceiverStream::new(rx));
        (sender, stream)
    }
}

impl<T: Send + 'static> Default for StreamBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create an event stream with the default buffer size.
pub fn create_stream<T: Send + 'static>() -> (EventSender<T>, EventStream<T>) {
    StreamBuilder::<T>::new().build()
}

/// Create an event stream with a specific buffer size.
pub fn create_stream_with_buffer<T: Send + 'static>(
    buffer_size: usize,
) -> (EventSender<T>, EventStream<T>) {
    StreamBuilder::<T>::new().buffer_size(buffer_size).build()
}
