//! Debug overlay orchestrator.
//!
//! Consumes a `LayoutPass` and produces outline geometry a host can draw on
//! top of the target. Consumer only; never feeds back into layout.

mod core;

pub use self::core::OverlayGeometry;
