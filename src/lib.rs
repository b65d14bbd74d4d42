//! trellis computes pixel-accurate rectangles for externally-owned items
//! arranged on a row/column grid.
//!
//! The engine never creates, owns, or draws anything. A host hands it a
//! target size source and a rectangle sink, describes the grid
//! declaratively (slot sizing, offsets, padding, spacing, placements), and
//! calls [`Grid::recompute`] whenever the content region may have changed.
//! Every pass fully recomputes; nothing is cached between calls.
//!
//! Modules follow an orchestrator pattern: a public `mod.rs` fronts a
//! private `core` implementation where one exists.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod host;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod overlay;
pub mod registry;
pub mod slot;

pub use error::{LayoutError, Result};
pub use geometry::{Anchor, Insets, MaxSize, Point, Rect, Size, Spacing};
pub use grid::audit::{
    NullPassAudit, PassAudit, PassAuditEvent, PassAuditEventBuilder, PassStage,
};
pub use grid::{Grid, GridConfig, LayoutPass, PlacementSkip};
pub use host::{HostError, HostResult, NullSink, RectSink, StaticTarget, TargetSource, Viewport};
pub use layout::{Band, resolve_lengths};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use overlay::OverlayGeometry;
pub use registry::{GridArea, ItemId, PadOverride, Placement, PlacementRegistry};
pub use slot::{Axis, Slot, SlotPadding, SlotSpec};
