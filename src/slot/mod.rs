//! Slot module orchestrator.
//!
//! Slots describe how a single column or row wants to be sized and padded;
//! an `Axis` keeps the ordered slot list for one direction of the grid.

mod core;

pub use self::core::{Axis, Slot, SlotPadding, SlotSpec};
