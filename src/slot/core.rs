use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Sizing policy for a single column or row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotSpec {
    /// One weight-1 share of the space left after fixed slots.
    #[default]
    Auto,
    /// Exact length in pixels.
    Fixed(i32),
    /// Weighted share of the space left after fixed slots.
    Flex(f64),
}

impl SlotSpec {
    /// Weight used during distribution. Fixed slots carry no weight.
    pub fn weight(&self) -> f64 {
        match self {
            SlotSpec::Auto => 1.0,
            SlotSpec::Fixed(_) => 0.0,
            SlotSpec::Flex(weight) => *weight,
        }
    }

    pub fn fixed_length(&self) -> Option<i32> {
        match self {
            SlotSpec::Fixed(length) => Some(*length),
            _ => None,
        }
    }

    /// Reject negative fixed lengths and non-finite or non-positive weights.
    /// Runs at configuration time so the resolver never sees a bad spec.
    pub(crate) fn validate(&self, index: usize) -> Result<()> {
        match self {
            SlotSpec::Auto => Ok(()),
            SlotSpec::Fixed(length) if *length < 0 => Err(LayoutError::InvalidSizingSpec {
                index,
                reason: format!("fixed length {length} is negative"),
            }),
            SlotSpec::Fixed(_) => Ok(()),
            SlotSpec::Flex(weight) if !weight.is_finite() || *weight <= 0.0 => {
                Err(LayoutError::InvalidSizingSpec {
                    index,
                    reason: format!("weight {weight} must be finite and positive"),
                })
            }
            SlotSpec::Flex(_) => Ok(()),
        }
    }
}

/// Per-slot padding override for the two edges facing into the slot.
/// Unset components fall through to the grid default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPadding {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

impl SlotPadding {
    pub const fn new(start: Option<i32>, end: Option<i32>) -> Self {
        Self { start, end }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(Some(value), Some(value))
    }
}

/// One column or row of the grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub spec: SlotSpec,
    pub padding: SlotPadding,
    /// Informal name used only in diagnostics.
    pub label: Option<String>,
}

impl Slot {
    pub fn new(spec: SlotSpec) -> Self {
        Self {
            spec,
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, padding: SlotPadding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Ordered slot list for one axis of the grid. Always holds at least one
/// slot; the grid enforces the dimension rule before mutating.
#[derive(Debug, Clone)]
pub struct Axis {
    slots: Vec<Slot>,
}

impl Axis {
    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            slots: vec![Slot::default(); len.max(1)],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Result<&mut Slot> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(LayoutError::SlotOutOfRange { index, len })
    }

    /// Grow with default slots or truncate. Existing slots keep their
    /// configuration.
    pub(crate) fn resize(&mut self, len: usize) {
        self.slots.resize(len.max(1), Slot::default());
    }

    pub(crate) fn insert(&mut self, index: usize, slot: Slot) -> Result<()> {
        if index > self.slots.len() {
            return Err(LayoutError::SlotOutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        self.slots.insert(index, slot);
        Ok(())
    }

    pub(crate) fn remove(&mut self, index: usize) -> Result<Slot> {
        if index >= self.slots.len() {
            return Err(LayoutError::SlotOutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        Ok(self.slots.remove(index))
    }
}
