//! Secondary-channel sinks — destinations for mirrored custom events.

use bridge_core::{CustomEvent, Tracker};
use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Ingestion point for the secondary reporting channel. Dispatch is
/// fire-and-forget; delivery is the sink's own concern.
pub trait EventSink: Send + Sync {
    fn dispatch(&self, event: CustomEvent, tracker: &dyn Tracker);
}

/// Sink that logs dispatched events. Invalid events are dropped with a
/// warning rather than logged as dispatched.
pub struct LoggingSink;

impl EventSink for LoggingSink {
    fn dispatch(&self, event: CustomEvent, tracker: &dyn Tracker) {
        if let Err(e) = event.validate() {
            warn!(tracker = tracker.name(), error = %e, "Dropping invalid custom event");
            return;
        }
        debug!(
            tracker = tracker.name(),
            event = %event.name,
            properties = event.properties.len(),
            "Custom event dispatched"
        );
    }
}

/// Bounded in-memory sink. Events accumulate until drained with
/// [`flush`](BufferingSink::flush); when the buffer is full the oldest
/// event is discarded to admit the new one.
pub struct BufferingSink {
    buffer: Mutex<VecDeque<CustomEvent>>,
    capacity: usize,
}

impl BufferingSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Drain and return all buffered events, oldest first.
    pub fn flush(&self) -> Vec<CustomEvent> {
        self.buffer.lock().drain(..).collect()
    }

    pub fn buffered_count(&self) -> usize {
        self.buffer.lock().len()
    }
}

impl EventSink for BufferingSink {
    fn dispatch(&self, event: CustomEvent, tracker: &dyn Tracker) {
        if let Err(e) = event.validate() {
            warn!(tracker = tracker.name(), error = %e, "Dropping invalid custom event");
            return;
        }
        let mut buffer = self.buffer.lock();
        if buffer.len() >= self.capacity {
            buffer.pop_front();
            warn!(
                tracker = tracker.name(),
                capacity = self.capacity,
                "Event buffer full, discarding oldest event"
            );
        }
        buffer.push_back(event);
    }
}
