//! Placement registry orchestrator.
//!
//! Placements bind external item identifiers to cells or cell ranges. The
//! registry keeps them in attach order; validity against the current grid
//! dimensions is re-evaluated on every pass, never stored.

mod core;

pub use self::core::{GridArea, ItemId, PadOverride, Placement, PlacementRegistry};
