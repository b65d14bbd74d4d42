use thiserror::Error;

use crate::host::HostError;

/// Unified result type for the trellis crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by the grid engine.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("grid needs at least one column and one row (got {columns}x{rows})")]
    InvalidDimension { columns: usize, rows: usize },
    #[error("invalid sizing spec for slot {index}: {reason}")]
    InvalidSizingSpec { index: usize, reason: String },
    #[error("slot index {index} out of range for axis of {len}")]
    SlotOutOfRange { index: usize, len: usize },
    #[error("placement `{item}` anchors at ({col}, {row}) outside {columns}x{rows}")]
    OutOfRangeAnchor {
        item: String,
        col: i32,
        row: i32,
        columns: usize,
        rows: usize,
    },
    #[error("item `{0}` is not attached")]
    UnknownItem(String),
    #[error("target probe failed: {0}")]
    Target(String),
    #[error(transparent)]
    Host(#[from] HostError),
}
