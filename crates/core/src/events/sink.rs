//! Store event sink trait and implementations.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use super::StoreEvent;

/// Trait for receiving store events.
///
/// Stores emit events through this trait after successful mutations.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no disk writes)
/// - Implementations should queue events for async processing
/// - Failure to emit must not affect the originating store action (best-effort)
pub trait StoreEventSink: Send + Sync {
    /// Emit a single store event.
    fn emit(&self, event: StoreEvent);

    /// Emit multiple store events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<StoreEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpStoreEventSink;

impl StoreEventSink for NoOpStoreEventSink {
    fn emit(&self, _event: StoreEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Sink that forwards events into an unbounded channel for the UI layer.
///
/// Sending never blocks; once the receiver is dropped, events are silently
/// discarded.
pub struct ChannelStoreEventSink {
    sender: mpsc::UnboundedSender<StoreEvent>,
}

impl ChannelStoreEventSink {
    /// Creates the sink together with the receiving end.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<StoreEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl StoreEventSink for ChannelStoreEventSink {
    fn emit(&self, event: StoreEvent) {
        let _ = self.sender.send(event);
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockStoreEventSink {
    events: Arc<Mutex<Vec<StoreEvent>>>,
}

impl MockStoreEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl StoreEventSink for MockStoreEventSink {
    fn emit(&self, event: StoreEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpStoreEventSink;
        sink.emit(StoreEvent::DashboardRefreshed);
        sink.emit_batch(vec![
            StoreEvent::SessionChanged { authenticated: true },
            StoreEvent::SessionInvalidated,
        ]);
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockStoreEventSink::new();
        assert!(sink.is_empty());

        sink.emit(StoreEvent::DashboardRefreshed);
        assert_eq!(sink.len(), 1);

        sink.emit_batch(vec![
            StoreEvent::SessionChanged { authenticated: true },
            StoreEvent::SessionChanged { authenticated: false },
        ]);
        assert_eq!(sink.len(), 3);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_channel_sink_forwards_events() {
        let (sink, mut receiver) = ChannelStoreEventSink::new();
        sink.emit(StoreEvent::SessionInvalidated);

        assert_eq!(receiver.recv().await, Some(StoreEvent::SessionInvalidated));
    }

    #[test]
    fn test_channel_sink_survives_dropped_receiver() {
        let (sink, receiver) = ChannelStoreEventSink::new();
        drop(receiver);
        sink.emit(StoreEvent::DashboardRefreshed);
    }
}
