use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::geometry::{Anchor, MaxSize};

/// Identifier of an externally-owned item. The grid never owns the item,
/// only its placement.
pub type ItemId = String;

/// Cell or cell-range coordinates for one placement. Negative `col`/`row`
/// anchor from the end of the axis and resolve on every pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridArea {
    pub col: i32,
    pub row: i32,
    pub col_span: i32,
    pub row_span: i32,
}

impl GridArea {
    pub const fn cell(col: i32, row: i32) -> Self {
        Self {
            col,
            row,
            col_span: 1,
            row_span: 1,
        }
    }

    pub fn span(col: i32, row: i32, col_span: i32, row_span: i32) -> Self {
        Self {
            col,
            row,
            col_span: col_span.max(1),
            row_span: row_span.max(1),
        }
    }

    /// Inclusive two-corner form. Corners may arrive in any order; each
    /// component pair is normalized with min/max.
    pub fn between(a: (i32, i32), b: (i32, i32)) -> Self {
        Self {
            col: a.0.min(b.0),
            row: a.1.min(b.1),
            col_span: (a.0 - b.0).abs() + 1,
            row_span: (a.1 - b.1).abs() + 1,
        }
    }
}

/// Per-placement padding override. Unset components fall through to the
/// adjoining slot's padding, then the grid default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadOverride {
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub right: Option<i32>,
    pub bottom: Option<i32>,
}

impl PadOverride {
    pub const NONE: PadOverride = PadOverride {
        left: None,
        top: None,
        right: None,
        bottom: None,
    };

    pub const fn uniform(value: i32) -> Self {
        Self {
            left: Some(value),
            top: Some(value),
            right: Some(value),
            bottom: Some(value),
        }
    }
}

/// Everything the grid stores about one attached item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub area: GridArea,
    pub padding: PadOverride,
    pub max_size: MaxSize,
    pub anchor: Anchor,
}

impl Placement {
    pub fn new(area: GridArea) -> Self {
        Self {
            area,
            padding: PadOverride::default(),
            max_size: MaxSize::default(),
            anchor: Anchor::default(),
        }
    }

    pub fn with_padding(mut self, padding: PadOverride) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_max_size(mut self, max_size: MaxSize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// Registry mapping item identifiers to placements, iterated in attach
/// order so emission stays deterministic.
#[derive(Debug, Default, Clone)]
pub struct PlacementRegistry {
    entries: HashMap<ItemId, Placement>,
    order: Vec<ItemId>,
}

impl PlacementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace. Re-attaching keeps the item's original position
    /// in the emission order.
    pub fn attach(&mut self, id: impl Into<ItemId>, placement: Placement) {
        let id = id.into();
        if self.entries.insert(id.clone(), placement).is_none() {
            self.order.push(id);
        }
    }

    /// Remove an item, reporting whether it was present. Detaching an id
    /// that was never attached is a no-op.
    pub fn detach(&mut self, id: &str) -> bool {
        if self.entries.remove(id).is_some() {
            self.order.retain(|entry| entry != id);
            true
        } else {
            false
        }
    }

    pub fn get(&self, id: &str) -> Result<&Placement> {
        self.entries
            .get(id)
            .ok_or_else(|| LayoutError::UnknownItem(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate placements in attach order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &Placement)> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|placement| (id, placement)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_normalizes_inverted_corners() {
        let area = GridArea::between((2, 3), (0, 1));
        assert_eq!(area, GridArea::span(0, 1, 3, 3));
        assert_eq!(GridArea::between((1, 1), (1, 1)), GridArea::cell(1, 1));
    }

    #[test]
    fn span_normalizes_non_positive_spans() {
        let area = GridArea::span(0, 0, 0, -2);
        assert_eq!(area.col_span, 1);
        assert_eq!(area.row_span, 1);
    }

    #[test]
    fn attach_order_is_emission_order() {
        let mut registry = PlacementRegistry::new();
        registry.attach("b", Placement::new(GridArea::cell(0, 0)));
        registry.attach("a", Placement::new(GridArea::cell(1, 0)));
        registry.attach("c", Placement::new(GridArea::cell(2, 0)));

        let ids: Vec<&str> = registry.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn reattach_replaces_without_moving() {
        let mut registry = PlacementRegistry::new();
        registry.attach("a", Placement::new(GridArea::cell(0, 0)));
        registry.attach("b", Placement::new(GridArea::cell(1, 0)));
        registry.attach("a", Placement::new(GridArea::cell(2, 2)));

        assert_eq!(registry.len(), 2);
        let ids: Vec<&str> = registry.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(registry.get("a").unwrap().area, GridArea::cell(2, 2));
    }

    #[test]
    fn detach_unknown_is_a_noop() {
        let mut registry = PlacementRegistry::new();
        registry.attach("a", Placement::new(GridArea::cell(0, 0)));
        assert!(!registry.detach("missing"));
        assert!(registry.detach("a"));
        assert!(!registry.detach("a"));
        assert!(registry.is_empty());
    }

    #[test]
    fn get_reports_unknown_items() {
        let registry = PlacementRegistry::new();
        assert!(matches!(
            registry.get("ghost"),
            Err(LayoutError::UnknownItem(id)) if id == "ghost"
        ));
    }
}
