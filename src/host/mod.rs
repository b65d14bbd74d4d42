//! Host boundary orchestrator.
//!
//! The grid never owns or draws items; these traits are the two seams it
//! talks to the embedding UI system through.

mod core;

pub use self::core::{HostError, HostResult, NullSink, RectSink, StaticTarget, TargetSource, Viewport};
