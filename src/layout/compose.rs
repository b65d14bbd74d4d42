use crate::geometry::{Anchor, MaxSize, Rect, Size};
use crate::layout::Band;
use crate::registry::Placement;

/// Resolve a possibly negative anchor component against an axis length.
/// Negative indices count from the end (-1 is the last slot); anything that
/// lands outside the axis resolves to `None`.
pub(crate) fn resolve_anchor(index: i32, len: usize) -> Option<usize> {
    let len = len as i32;
    let resolved = if index < 0 { index + len } else { index };
    if resolved >= 0 && resolved < len {
        Some(resolved as usize)
    } else {
        None
    }
}

/// Index of the last slot a span covers, clamped to the axis edge.
fn span_end(start: usize, span: i32, len: usize) -> usize {
    let span = span.max(1) as usize;
    (start + span).min(len) - 1
}

/// Compose the rectangle for one placement from resolved axis bands.
///
/// The outer span runs from the anchor slot's start boundary to the covered
/// end slot's end boundary, then shrinks inward by the effective padding on
/// each edge. Left/top read the anchor slot's padding, right/bottom the end
/// slot's, and a per-placement override beats both. A `MaxSize` cap
/// repositions the item inside the padded span by its anchor.
pub(crate) fn compose_rect(
    columns: &[Band],
    rows: &[Band],
    col: usize,
    row: usize,
    placement: &Placement,
) -> Rect {
    let col_end = span_end(col, placement.area.col_span, columns.len());
    let row_end = span_end(row, placement.area.row_span, rows.len());

    let first_col = &columns[col];
    let last_col = &columns[col_end];
    let first_row = &rows[row];
    let last_row = &rows[row_end];

    let pad = &placement.padding;
    let left = first_col.start + pad.left.unwrap_or(first_col.pad_start);
    let top = first_row.start + pad.top.unwrap_or(first_row.pad_start);
    let right = last_col.end - pad.right.unwrap_or(last_col.pad_end);
    let bottom = last_row.end - pad.bottom.unwrap_or(last_row.pad_end);

    let outer = Rect::new(left, top, (right - left).max(0), (bottom - top).max(0));
    fit_into(outer, placement.max_size, placement.anchor)
}

/// Clamp to `max` where set, then position the clamped size inside `outer`
/// by `anchor`. Unclamped placements fill `outer` unchanged.
fn fit_into(outer: Rect, max: MaxSize, anchor: Anchor) -> Rect {
    let width = match max.width {
        Some(cap) if cap < outer.width => cap.max(0),
        _ => outer.width,
    };
    let height = match max.height {
        Some(cap) if cap < outer.height => cap.max(0),
        _ => outer.height,
    };
    if width == outer.width && height == outer.height {
        return outer;
    }
    let origin = anchor.place(Size::new(width, height), outer);
    Rect::new(origin.x, origin.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MaxSize;
    use crate::registry::{GridArea, PadOverride, Placement};

    fn band(start: i32, end: i32, pad_start: i32, pad_end: i32) -> Band {
        Band {
            start,
            end,
            pad_start,
            pad_end,
        }
    }

    fn three_bands() -> Vec<Band> {
        vec![band(0, 100, 0, 0), band(100, 200, 0, 0), band(200, 300, 0, 0)]
    }

    #[test]
    fn negative_anchor_resolves_from_the_end() {
        assert_eq!(resolve_anchor(-1, 3), Some(2));
        assert_eq!(resolve_anchor(-3, 3), Some(0));
        assert_eq!(resolve_anchor(-4, 3), None);
        assert_eq!(resolve_anchor(0, 3), Some(0));
        assert_eq!(resolve_anchor(2, 3), Some(2));
        assert_eq!(resolve_anchor(3, 3), None);
    }

    #[test]
    fn single_cell_rect_spans_its_band() {
        let cols = three_bands();
        let rows = vec![band(0, 50, 0, 0)];
        let placement = Placement::new(GridArea::cell(1, 0));
        let rect = compose_rect(&cols, &rows, 1, 0, &placement);
        assert_eq!(rect, Rect::new(100, 0, 100, 50));
    }

    #[test]
    fn span_clamps_to_the_grid_edge() {
        let cols = three_bands();
        let rows = vec![band(0, 50, 0, 0)];
        let placement = Placement::new(GridArea::span(1, 0, 5, 1));
        let rect = compose_rect(&cols, &rows, 1, 0, &placement);
        assert_eq!(rect.x, 100);
        assert_eq!(rect.right(), 300);
    }

    #[test]
    fn padding_edges_read_anchor_and_end_slots() {
        let cols = vec![band(0, 100, 5, 9), band(100, 200, 2, 7)];
        let rows = vec![band(0, 80, 1, 3)];
        let placement = Placement::new(GridArea::span(0, 0, 2, 1));
        let rect = compose_rect(&cols, &rows, 0, 0, &placement);
        // left from col 0's start pad, right from col 1's end pad
        assert_eq!(rect.x, 5);
        assert_eq!(rect.right(), 200 - 7);
        assert_eq!(rect.y, 1);
        assert_eq!(rect.bottom(), 80 - 3);
    }

    #[test]
    fn placement_override_beats_slot_padding() {
        let cols = vec![band(0, 100, 5, 5)];
        let rows = vec![band(0, 100, 5, 5)];
        let placement = Placement::new(GridArea::cell(0, 0)).with_padding(PadOverride {
            left: Some(0),
            top: None,
            right: Some(20),
            bottom: None,
        });
        let rect = compose_rect(&cols, &rows, 0, 0, &placement);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.right(), 80);
        assert_eq!(rect.y, 5);
        assert_eq!(rect.bottom(), 95);
    }

    #[test]
    fn oversized_padding_clamps_to_zero_size() {
        let cols = vec![band(0, 10, 8, 8)];
        let rows = vec![band(0, 10, 0, 0)];
        let placement = Placement::new(GridArea::cell(0, 0));
        let rect = compose_rect(&cols, &rows, 0, 0, &placement);
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 10);
    }

    #[test]
    fn max_size_repositions_by_anchor() {
        let cols = vec![band(0, 100, 0, 0)];
        let rows = vec![band(0, 100, 0, 0)];
        let placement = Placement::new(GridArea::cell(0, 0))
            .with_max_size(MaxSize::both(40, 20))
            .with_anchor(Anchor::SouthEast);
        let rect = compose_rect(&cols, &rows, 0, 0, &placement);
        assert_eq!(rect, Rect::new(60, 80, 40, 20));
    }

    #[test]
    fn max_size_larger_than_cell_has_no_effect() {
        let cols = vec![band(0, 100, 0, 0)];
        let rows = vec![band(0, 100, 0, 0)];
        let placement =
            Placement::new(GridArea::cell(0, 0)).with_max_size(MaxSize::both(500, 500));
        let rect = compose_rect(&cols, &rows, 0, 0, &placement);
        assert_eq!(rect, Rect::new(0, 0, 100, 100));
    }
}
