//! Error module orchestrator.
//!
//! Downstream code imports error types from here; the definitions live in
//! the private `types` module.

mod types;

pub use self::types::{LayoutError, Result};
