//! Event sink capability — where structured operation events go.

use meander_types::AuditEvent;
use std::sync::Arc;

/// Receives the structured events the core emits.
///
/// The core never formats or persists events itself; sinks do.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &AuditEvent);
}

/// Discards every event.
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &AuditEvent) {}
}

/// Formats events as `tracing` log lines.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &AuditEvent) {
        let mint = event
            .mint_id
            .map(|m| m.short())
            .unwrap_or_else(|| "-".to_string());
        let token = event
            .token_id
            .map(|t| t.short())
            .unwrap_or_else(|| "-".to_string());
        let amount = event.amount.map(|a| a.raw());
        let provenance = event.provenance.as_deref().unwrap_or("-");
        tracing::info!(
            category = event.category.as_str(),
            mint = %mint,
            token = %token,
            amount,
            provenance,
            timestamp = event.timestamp.as_millis(),
            "audit event"
        );
    }
}

/// Tees every event to several sinks in order.
pub struct FanoutSink {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl FanoutSink {
    pub fn new(sinks: Vec<Arc<dyn EventSink>>) -> Self {
        Self { sinks }
    }
}

impl EventSink for FanoutSink {
    fn record(&self, event: &AuditEvent) {
        for sink in &self.sinks {
            sink.record(event);
        }
    }
}
