//! Axis layout orchestrator.
//!
//! The sizing resolver and band builder live in the private `core` module,
//! the cell/span rectangle composer in `compose`. Downstream code imports
//! the public pieces from here.

mod compose;
mod core;

pub use self::core::{Band, resolve_lengths};

pub(crate) use self::compose::{compose_rect, resolve_anchor};
pub(crate) use self::core::build_axis;
