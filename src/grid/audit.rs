//! Pass lifecycle audit hooks.
//!
//! Lightweight instrumentation seam so hosts can observe what a recompute
//! pass did without contorting the pass loop. Records carry a stage marker
//! plus structured detail pairs that downstream code can log, buffer, or
//! visualize.

use std::time::SystemTime;

use serde_json::Value;

/// Checkpoints emitted during one `Grid::recompute` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassStage {
    /// The pass probed the target and is about to resolve geometry.
    PassStarted,
    /// Both axes resolved their slot boundaries.
    AxesResolved,
    /// One placement resolved and its rectangle reached the sink.
    PlacementResolved,
    /// One placement was skipped; details carry the reason.
    PlacementSkipped,
    /// The pass finished and the report is about to be returned.
    PassCompleted,
}

/// Structured audit entry.
#[derive(Debug, Clone)]
pub struct PassAuditEvent {
    pub timestamp: SystemTime,
    pub stage: PassStage,
    pub details: Vec<(String, Value)>,
}

impl PassAuditEvent {
    fn new(stage: PassStage) -> Self {
        Self {
            timestamp: SystemTime::now(),
            stage,
            details: Vec::new(),
        }
    }
}

/// Builder helper to append detail fields ergonomically.
pub struct PassAuditEventBuilder {
    event: PassAuditEvent,
}

impl PassAuditEventBuilder {
    pub fn new(stage: PassStage) -> Self {
        Self {
            event: PassAuditEvent::new(stage),
        }
    }

    pub fn detail(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.event.details.push((key.into(), value));
        self
    }

    pub fn finish(self) -> PassAuditEvent {
        self.event
    }
}

/// Trait implemented by any audit sink.
pub trait PassAudit: Send + Sync {
    fn record(&self, event: PassAuditEvent);
}

/// Default no-op implementation used when auditing is disabled.
#[derive(Debug, Default)]
pub struct NullPassAudit;

impl PassAudit for NullPassAudit {
    fn record(&self, _event: PassAuditEvent) {}
}
