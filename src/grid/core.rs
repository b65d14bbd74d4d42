use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use crate::error::{LayoutError, Result};
use crate::geometry::{Insets, Rect, Size, Spacing};
use crate::grid::audit::{NullPassAudit, PassAudit, PassAuditEventBuilder, PassStage};
use crate::host::{HostError, RectSink, TargetSource, Viewport};
use crate::layout::{Band, build_axis, compose_rect, resolve_anchor};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::LayoutMetrics;
use crate::registry::{ItemId, Placement, PlacementRegistry};
use crate::slot::{Axis, Slot, SlotPadding, SlotSpec};

/// Observability knobs for a grid.
pub struct GridConfig {
    /// Optional structured logger used during passes.
    pub logger: Option<Logger>,
    /// Optional shared metrics recorded during passes.
    pub metrics: Option<Arc<Mutex<LayoutMetrics>>>,
    /// Target field used when emitting pass events.
    pub log_target: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            logger: None,
            metrics: None,
            log_target: "trellis::grid".to_string(),
        }
    }
}

impl GridConfig {
    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(LayoutMetrics::new())));
        }
    }

    /// Disable metrics collection.
    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<LayoutMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// One placement a pass could not emit, and why.
#[derive(Debug)]
pub struct PlacementSkip {
    pub item: ItemId,
    pub error: LayoutError,
}

/// Report of one recompute pass.
///
/// Bands are axis-local (the viewport origin is not applied); emitted
/// rectangles in `placed` are final, origin included, in emission order.
#[derive(Debug)]
pub struct LayoutPass {
    pub viewport: Viewport,
    pub columns: Vec<Band>,
    pub rows: Vec<Band>,
    pub placed: Vec<(ItemId, Rect)>,
    pub skipped: Vec<PlacementSkip>,
}

impl LayoutPass {
    /// Rectangle emitted for `id` on this pass, if it resolved.
    pub fn rect_of(&self, id: &str) -> Option<Rect> {
        self.placed
            .iter()
            .find(|(item, _)| item == id)
            .map(|(_, rect)| *rect)
    }

    pub fn was_skipped(&self, id: &str) -> bool {
        self.skipped.iter().any(|skip| skip.item == id)
    }
}

/// Grid layout engine façade.
///
/// Owns the declarative description (axes, offsets, padding, spacing,
/// placements) plus the host collaborators, and turns them into emitted
/// rectangles on every `recompute` call. Nothing is cached between passes:
/// identical configuration and viewport always produce identical output.
pub struct Grid {
    columns: Axis,
    rows: Axis,
    offsets: Insets,
    padding: Insets,
    spacing: Spacing,
    override_width: Option<i32>,
    override_height: Option<i32>,
    label: Option<String>,
    registry: PlacementRegistry,
    source: Box<dyn TargetSource>,
    sink: Box<dyn RectSink>,
    audit: Arc<dyn PassAudit>,
    config: GridConfig,
}

impl Grid {
    pub fn new(
        columns: usize,
        rows: usize,
        source: impl TargetSource + 'static,
        sink: impl RectSink + 'static,
    ) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(LayoutError::InvalidDimension { columns, rows });
        }
        Ok(Self {
            columns: Axis::with_len(columns),
            rows: Axis::with_len(rows),
            offsets: Insets::ZERO,
            padding: Insets::ZERO,
            spacing: Spacing::ZERO,
            override_width: None,
            override_height: None,
            label: None,
            registry: PlacementRegistry::new(),
            source: Box::new(source),
            sink: Box::new(sink),
            audit: Arc::new(NullPassAudit),
            config: GridConfig::default(),
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GridConfig {
        &mut self.config
    }

    pub fn set_audit(&mut self, audit: Arc<dyn PassAudit>) {
        self.audit = audit;
    }

    pub fn columns(&self) -> &Axis {
        &self.columns
    }

    pub fn rows(&self) -> &Axis {
        &self.rows
    }

    /// Resize both axes. Existing slots keep their configuration; new slots
    /// default to `SlotSpec::Auto`. Placements left out of range are skipped
    /// on later passes until the grid covers them again.
    pub fn set_dimensions(&mut self, columns: usize, rows: usize) -> Result<()> {
        if columns == 0 || rows == 0 {
            return Err(LayoutError::InvalidDimension { columns, rows });
        }
        self.columns.resize(columns);
        self.rows.resize(rows);
        Ok(())
    }

    pub fn offsets(&self) -> Insets {
        self.offsets
    }

    pub fn set_offsets(&mut self, offsets: Insets) {
        self.offsets = offsets;
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Default padding applied to every cell edge that has no slot or
    /// placement override.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: Spacing) {
        self.spacing = spacing;
    }

    pub fn override_width(&self) -> Option<i32> {
        self.override_width
    }

    /// Pin the pass width, ignoring the probed viewport width. `None`
    /// returns to the probed value.
    pub fn set_override_width(&mut self, width: Option<i32>) {
        self.override_width = width;
    }

    pub fn override_height(&self) -> Option<i32> {
        self.override_height
    }

    pub fn set_override_height(&mut self, height: Option<i32>) {
        self.override_height = height;
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    pub fn set_column_spec(&mut self, index: usize, spec: SlotSpec) -> Result<()> {
        spec.validate(index)?;
        self.columns.slot_mut(index)?.spec = spec;
        Ok(())
    }

    pub fn set_row_spec(&mut self, index: usize, spec: SlotSpec) -> Result<()> {
        spec.validate(index)?;
        self.rows.slot_mut(index)?.spec = spec;
        Ok(())
    }

    pub fn set_column_padding(&mut self, index: usize, padding: SlotPadding) -> Result<()> {
        self.columns.slot_mut(index)?.padding = padding;
        Ok(())
    }

    pub fn set_row_padding(&mut self, index: usize, padding: SlotPadding) -> Result<()> {
        self.rows.slot_mut(index)?.padding = padding;
        Ok(())
    }

    pub fn set_column_label(&mut self, index: usize, label: impl Into<String>) -> Result<()> {
        self.columns.slot_mut(index)?.label = Some(label.into());
        Ok(())
    }

    pub fn set_row_label(&mut self, index: usize, label: impl Into<String>) -> Result<()> {
        self.rows.slot_mut(index)?.label = Some(label.into());
        Ok(())
    }

    /// Insert a column at `index`, shifting later columns right. Placements
    /// are not re-indexed.
    pub fn insert_column(&mut self, index: usize, slot: Slot) -> Result<()> {
        slot.spec.validate(index)?;
        self.columns.insert(index, slot)
    }

    pub fn insert_row(&mut self, index: usize, slot: Slot) -> Result<()> {
        slot.spec.validate(index)?;
        self.rows.insert(index, slot)
    }

    /// Remove the column at `index`. The last column cannot be removed.
    pub fn remove_column(&mut self, index: usize) -> Result<()> {
        if self.columns.len() <= 1 {
            return Err(LayoutError::InvalidDimension {
                columns: 0,
                rows: self.rows.len(),
            });
        }
        self.columns.remove(index)?;
        Ok(())
    }

    pub fn remove_row(&mut self, index: usize) -> Result<()> {
        if self.rows.len() <= 1 {
            return Err(LayoutError::InvalidDimension {
                columns: self.columns.len(),
                rows: 0,
            });
        }
        self.rows.remove(index)?;
        Ok(())
    }

    /// Register or replace a placement. Anchors are validated against the
    /// grid on every pass, not here, since later dimension changes can both
    /// invalidate and revalidate them.
    pub fn attach(&mut self, id: impl Into<ItemId>, placement: Placement) {
        self.registry.attach(id, placement);
    }

    /// Remove a placement, reporting whether it was present.
    pub fn detach(&mut self, id: &str) -> bool {
        self.registry.detach(id)
    }

    pub fn is_attached(&self, id: &str) -> bool {
        self.registry.contains(id)
    }

    pub fn placement_of(&self, id: &str) -> Result<&Placement> {
        self.registry.get(id)
    }

    /// Iterate placements in attach order.
    pub fn placements(&self) -> impl Iterator<Item = (&ItemId, &Placement)> {
        self.registry.iter()
    }

    /// Run one full layout pass: probe the target, resolve both axes,
    /// compose a rectangle per placement and emit it through the sink.
    ///
    /// Per-placement failures (out-of-range anchors, sink errors) skip only
    /// that placement; a sink reporting the item missing detaches it. Only a
    /// target probe failure aborts the pass.
    pub fn recompute(&mut self) -> Result<LayoutPass> {
        let probed = self
            .source
            .probe()
            .map_err(|err| LayoutError::Target(err.to_string()))?;
        let size = Size::new(
            self.override_width.unwrap_or(probed.size.width),
            self.override_height.unwrap_or(probed.size.height),
        );
        let viewport = Viewport::new(size, probed.origin);

        let mut started_fields = vec![
            json_kv("width", json!(size.width)),
            json_kv("height", json!(size.height)),
            json_kv("columns", json!(self.columns.len())),
            json_kv("rows", json!(self.rows.len())),
            json_kv("placements", json!(self.registry.len())),
        ];
        if let Some(label) = &self.label {
            started_fields.push(json_str("label", label.clone()));
        }
        self.record_stage(PassStage::PassStarted, started_fields.clone());
        self.log_pass_event(LogLevel::Debug, "pass_started", started_fields);

        let columns = build_axis(
            &self.columns,
            size.width,
            self.offsets.left,
            self.offsets.right,
            self.spacing.column,
            (self.padding.left, self.padding.right),
        );
        let rows = build_axis(
            &self.rows,
            size.height,
            self.offsets.top,
            self.offsets.bottom,
            self.spacing.row,
            (self.padding.top, self.padding.bottom),
        );
        let mut axes_fields = vec![
            json_kv("columns", json!(columns.len())),
            json_kv("rows", json!(rows.len())),
        ];
        if let Some(labels) = labeled_slots(&self.columns) {
            axes_fields.push(json_kv("column_labels", labels));
        }
        if let Some(labels) = labeled_slots(&self.rows) {
            axes_fields.push(json_kv("row_labels", labels));
        }
        self.record_stage(PassStage::AxesResolved, axes_fields);

        let mut placed: Vec<(ItemId, Rect)> = Vec::new();
        let mut skipped: Vec<PlacementSkip> = Vec::new();
        let mut evicted: Vec<ItemId> = Vec::new();

        for (id, placement) in self.registry.iter() {
            let area = placement.area;
            let anchor = (
                resolve_anchor(area.col, columns.len()),
                resolve_anchor(area.row, rows.len()),
            );
            let (col, row) = match anchor {
                (Some(col), Some(row)) => (col, row),
                _ => {
                    let error = LayoutError::OutOfRangeAnchor {
                        item: id.clone(),
                        col: area.col,
                        row: area.row,
                        columns: columns.len(),
                        rows: rows.len(),
                    };
                    self.report_skip(id, &error);
                    skipped.push(PlacementSkip {
                        item: id.clone(),
                        error,
                    });
                    continue;
                }
            };

            let rect = compose_rect(&columns, &rows, col, row, placement)
                .translated(viewport.origin.x, viewport.origin.y);

            match self.sink.place(id, rect) {
                Ok(()) => {
                    self.record_stage(
                        PassStage::PlacementResolved,
                        vec![
                            json_str("item", id.clone()),
                            json_kv("x", json!(rect.x)),
                            json_kv("y", json!(rect.y)),
                            json_kv("width", json!(rect.width)),
                            json_kv("height", json!(rect.height)),
                        ],
                    );
                    placed.push((id.clone(), rect));
                }
                Err(HostError::ItemMissing) => {
                    let error = LayoutError::Host(HostError::ItemMissing);
                    self.report_skip(id, &error);
                    skipped.push(PlacementSkip {
                        item: id.clone(),
                        error,
                    });
                    evicted.push(id.clone());
                }
                Err(err) => {
                    let error = LayoutError::Host(err);
                    self.report_skip(id, &error);
                    skipped.push(PlacementSkip {
                        item: id.clone(),
                        error,
                    });
                }
            }
        }

        for id in &evicted {
            self.registry.detach(id);
            self.log_pass_event(
                LogLevel::Warn,
                "placement_evicted",
                [json_str("item", id.clone())],
            );
        }

        self.record_pass_metrics(placed.len(), skipped.len(), columns.len() + rows.len());

        let completed_fields = vec![
            json_kv("placed", json!(placed.len())),
            json_kv("skipped", json!(skipped.len())),
            json_kv("width", json!(size.width)),
            json_kv("height", json!(size.height)),
        ];
        self.record_stage(PassStage::PassCompleted, completed_fields.clone());
        self.log_pass_event(LogLevel::Info, "pass_completed", completed_fields);

        Ok(LayoutPass {
            viewport,
            columns,
            rows,
            placed,
            skipped,
        })
    }

    fn report_skip(&self, id: &str, error: &LayoutError) {
        let fields = vec![
            json_str("item", id.to_string()),
            json_str("reason", error.to_string()),
        ];
        self.record_stage(PassStage::PlacementSkipped, fields.clone());
        self.log_pass_event(LogLevel::Warn, "placement_skipped", fields);
    }

    fn record_stage(&self, stage: PassStage, details: Vec<(String, Value)>) {
        let mut builder = PassAuditEventBuilder::new(stage);
        for (key, value) in details {
            builder.detail(key, value);
        }
        self.audit.record(builder.finish());
    }

    fn log_pass_event<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(level, &self.config.log_target, message, fields);
            let _ = logger.log_event(event);
        }
    }

    fn record_pass_metrics(&self, placed: usize, skipped: usize, slots: usize) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_pass(placed, skipped, slots);
            }
        }
    }
}

/// Label list for one axis, present only when at least one slot is labeled.
fn labeled_slots(axis: &Axis) -> Option<Value> {
    if axis.slots().iter().any(|slot| slot.label.is_some()) {
        let labels: Vec<Option<String>> = axis
            .slots()
            .iter()
            .map(|slot| slot.label.clone())
            .collect();
        Some(json!(labels))
    } else {
        None
    }
}
