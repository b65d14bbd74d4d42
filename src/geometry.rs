use serde::{Deserialize, Serialize};

/// Position in the target's local pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Integer size measured in target pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Rectangle anchored in the target's local pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }
}

/// Per-edge lengths carved around a region (left, top, right, bottom).
///
/// Used both for the grid's outer offsets and for its default cell padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const ZERO: Insets = Insets::uniform(0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Gap between adjacent slots along each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub column: i32,
    pub row: i32,
}

impl Spacing {
    pub const ZERO: Spacing = Spacing::uniform(0);

    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    pub const fn uniform(gap: i32) -> Self {
        Self::new(gap, gap)
    }
}

/// Optional per-component cap on an emitted rectangle. Unset components
/// leave that dimension filling the padded cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxSize {
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl MaxSize {
    pub const NONE: MaxSize = MaxSize::new(None, None);

    pub const fn new(width: Option<i32>, height: Option<i32>) -> Self {
        Self { width, height }
    }

    pub const fn both(width: i32, height: i32) -> Self {
        Self::new(Some(width), Some(height))
    }

    pub fn is_unbounded(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

/// Where an item sits inside its cell once a `MaxSize` leaves free room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[serde(alias = "n")]
    North,
    #[serde(alias = "ne")]
    NorthEast,
    #[serde(alias = "e")]
    East,
    #[serde(alias = "se")]
    SouthEast,
    #[serde(alias = "s")]
    South,
    #[serde(alias = "sw")]
    SouthWest,
    #[serde(alias = "w")]
    West,
    #[serde(alias = "nw")]
    NorthWest,
    #[default]
    #[serde(alias = "c", alias = "centered")]
    Center,
}

impl Anchor {
    /// Origin for an item of `item` size positioned inside `within`.
    /// Callers clamp `item` to `within` first; free space is never negative.
    pub fn place(&self, item: Size, within: Rect) -> Point {
        let free_x = within.width - item.width;
        let free_y = within.height - item.height;
        let (dx, dy) = match self {
            Anchor::NorthWest => (0, 0),
            Anchor::North => (free_x / 2, 0),
            Anchor::NorthEast => (free_x, 0),
            Anchor::West => (0, free_y / 2),
            Anchor::Center => (free_x / 2, free_y / 2),
            Anchor::East => (free_x, free_y / 2),
            Anchor::SouthWest => (0, free_y),
            Anchor::South => (free_x / 2, free_y),
            Anchor::SouthEast => (free_x, free_y),
        };
        Point::new(within.x + dx, within.y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = Rect::new(8, 26, 95, 89);
        assert_eq!(rect.right(), 103);
        assert_eq!(rect.bottom(), 115);
        assert_eq!(rect.origin(), Point::new(8, 26));
        assert_eq!(rect.size(), Size::new(95, 89));
    }

    #[test]
    fn rect_translation_keeps_size() {
        let rect = Rect::new(0, 0, 10, 5).translated(3, -2);
        assert_eq!(rect, Rect::new(3, -2, 10, 5));
    }

    #[test]
    fn anchor_corners_and_center() {
        let within = Rect::new(10, 10, 100, 60);
        let item = Size::new(20, 20);

        assert_eq!(
            Anchor::NorthWest.place(item, within),
            Point::new(10, 10)
        );
        assert_eq!(
            Anchor::SouthEast.place(item, within),
            Point::new(90, 50)
        );
        assert_eq!(Anchor::Center.place(item, within), Point::new(50, 30));
        assert_eq!(Anchor::East.place(item, within), Point::new(90, 30));
        assert_eq!(Anchor::South.place(item, within), Point::new(50, 50));
    }

    #[test]
    fn anchor_full_size_item_sits_at_origin() {
        let within = Rect::new(4, 6, 30, 20);
        let item = within.size();
        for anchor in [Anchor::North, Anchor::Center, Anchor::SouthEast] {
            assert_eq!(anchor.place(item, within), within.origin());
        }
    }

    #[test]
    fn anchor_compass_aliases_deserialize() {
        let anchor: Anchor = serde_json::from_str("\"ne\"").unwrap();
        assert_eq!(anchor, Anchor::NorthEast);
        let anchor: Anchor = serde_json::from_str("\"centered\"").unwrap();
        assert_eq!(anchor, Anchor::Center);
        let anchor: Anchor = serde_json::from_str("\"south_west\"").unwrap();
        assert_eq!(anchor, Anchor::SouthWest);
    }

    #[test]
    fn max_size_unbounded() {
        assert!(MaxSize::NONE.is_unbounded());
        assert!(!MaxSize::both(10, 10).is_unbounded());
    }
}
