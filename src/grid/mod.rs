//! Grid façade orchestrator.
//!
//! `Grid` is the single entry point hosts talk to: configuration setters,
//! placement attach/detach, and `recompute`. The audit hooks live in the
//! public `audit` module.

pub mod audit;
mod core;

pub use self::core::{Grid, GridConfig, LayoutPass, PlacementSkip};
