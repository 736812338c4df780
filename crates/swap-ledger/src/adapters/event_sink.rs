//! Event sink adapters.

use crate::events::SwapEvent;
use crate::ports::outbound::EventSink;
use parking_lot::RwLock;
use tracing::{info, warn};

/// Keeps every emitted event in order. Used by tests and embedders that
/// poll instead of subscribing.
#[derive(Default)]
pub struct InMemoryEventLog {
    events: RwLock<Vec<SwapEvent>>,
}

impl InMemoryEventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events so far.
    pub fn events(&self) -> Vec<SwapEvent> {
        self.events.read().clone()
    }

    /// Most recent event.
    pub fn last(&self) -> Option<SwapEvent> {
        self.events.read().last().cloned()
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// True if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

impl EventSink for InMemoryEventLog {
    fn emit(&self, event: &SwapEvent) {
        self.events.write().push(event.clone());
    }
}

/// Writes each event as a structured `tracing` record under the
/// `swap_events` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &SwapEvent) {
        match event.to_json() {
            Ok(payload) => info!(
                target: "swap_events",
                kind = event.name(),
                swap_id = %event.swap_id(),
                payload = %payload,
                "swap event"
            ),
            Err(e) => warn!(
                target: "swap_events",
                kind = event.name(),
                swap_id = %event.swap_id(),
                error = %e,
                "swap event could not be encoded"
            ),
        }
    }
}
