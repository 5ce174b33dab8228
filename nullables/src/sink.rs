//! Nullable event sink — records every event for inspection.

use meander_env::EventSink;
use meander_types::{AuditEvent, EventCategory};
use std::sync::Mutex;

/// An event sink that stores everything it receives.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every recorded event, in emission order.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many recorded events have the given category.
    pub fn count_of(&self, category: EventCategory) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.category == category)
            .count()
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: &AuditEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
