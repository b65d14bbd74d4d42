use crate::logging::{LogEvent, LogFields, LogLevel, field_map};
use serde_json::json;

/// Saturating counters accumulated across layout passes. Shared with the
/// grid through `GridConfig::enable_metrics`.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    passes: u64,
    placements_placed: u64,
    placements_skipped: u64,
    slots_resolved: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&mut self, placed: usize, skipped: usize, slots: usize) {
        self.passes = self.passes.saturating_add(1);
        self.placements_placed = self.placements_placed.saturating_add(placed as u64);
        self.placements_skipped = self.placements_skipped.saturating_add(skipped as u64);
        self.slots_resolved = self.slots_resolved.saturating_add(slots as u64);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            passes: self.passes,
            placements_placed: self.placements_placed,
            placements_skipped: self.placements_skipped,
            slots_resolved: self.slots_resolved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub passes: u64,
    pub placements_placed: u64,
    pub placements_skipped: u64,
    pub slots_resolved: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "layout_metrics".to_string(),
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = field_map();
        map.insert("passes".to_string(), json!(self.passes));
        map.insert(
            "placements_placed".to_string(),
            json!(self.placements_placed),
        );
        map.insert(
            "placements_skipped".to_string(),
            json!(self.placements_skipped),
        );
        map.insert("slots_resolved".to_string(), json!(self.slots_resolved));
        map
    }
}

pub fn snapshot_event(snapshot: &MetricSnapshot, target: &str) -> LogEvent {
    snapshot.to_log_event(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_pass_accumulates() {
        let mut metrics = LayoutMetrics::new();
        metrics.record_pass(4, 1, 6);
        metrics.record_pass(3, 0, 6);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.passes, 2);
        assert_eq!(snapshot.placements_placed, 7);
        assert_eq!(snapshot.placements_skipped, 1);
        assert_eq!(snapshot.slots_resolved, 12);
    }

    #[test]
    fn snapshot_converts_to_log_fields() {
        let mut metrics = LayoutMetrics::new();
        metrics.record_pass(2, 0, 4);

        let event = metrics.snapshot().to_log_event("trellis::grid.metrics");
        assert_eq!(event.message, "layout_metrics");
        assert_eq!(event.fields.get("passes"), Some(&json!(1)));
        assert_eq!(event.fields.get("placements_placed"), Some(&json!(2)));
    }
}
