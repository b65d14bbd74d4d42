use crate::geometry::Rect;
use crate::grid::LayoutPass;

/// Drawable guide geometry for one pass, in final target coordinates.
/// Purely derived data; the host decides how (and whether) to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayGeometry {
    /// The probed content region itself.
    pub frame: Rect,
    /// Envelope actually covered by slots, inside the offsets.
    pub content: Rect,
    /// Outer cell rectangles in row-major order, before any padding.
    pub cells: Vec<Rect>,
    /// Spacing strips between adjacent columns, spanning the content height.
    pub column_gutters: Vec<Rect>,
    /// Spacing strips between adjacent rows, spanning the content width.
    pub row_gutters: Vec<Rect>,
}

impl OverlayGeometry {
    pub fn from_pass(pass: &LayoutPass) -> Self {
        let origin = pass.viewport.origin;
        let frame = Rect::new(
            origin.x,
            origin.y,
            pass.viewport.size.width,
            pass.viewport.size.height,
        );

        let x0 = pass.columns.first().map(|band| band.start).unwrap_or(0);
        let x1 = pass.columns.last().map(|band| band.end).unwrap_or(0);
        let y0 = pass.rows.first().map(|band| band.start).unwrap_or(0);
        let y1 = pass.rows.last().map(|band| band.end).unwrap_or(0);
        let content = Rect::new(origin.x + x0, origin.y + y0, x1 - x0, y1 - y0);

        let mut cells = Vec::with_capacity(pass.columns.len() * pass.rows.len());
        for row in &pass.rows {
            for col in &pass.columns {
                cells.push(Rect::new(
                    origin.x + col.start,
                    origin.y + row.start,
                    col.length(),
                    row.length(),
                ));
            }
        }

        let mut column_gutters = Vec::new();
        for pair in pass.columns.windows(2) {
            let gap = pair[1].start - pair[0].end;
            if gap > 0 {
                column_gutters.push(Rect::new(
                    origin.x + pair[0].end,
                    origin.y + y0,
                    gap,
                    y1 - y0,
                ));
            }
        }

        let mut row_gutters = Vec::new();
        for pair in pass.rows.windows(2) {
            let gap = pair[1].start - pair[0].end;
            if gap > 0 {
                row_gutters.push(Rect::new(
                    origin.x + x0,
                    origin.y + pair[0].end,
                    x1 - x0,
                    gap,
                ));
            }
        }

        Self {
            frame,
            content,
            cells,
            column_gutters,
            row_gutters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size};
    use crate::host::Viewport;
    use crate::layout::Band;

    fn band(start: i32, end: i32) -> Band {
        Band {
            start,
            end,
            pad_start: 0,
            pad_end: 0,
        }
    }

    fn pass_2x2() -> LayoutPass {
        LayoutPass {
            viewport: Viewport::new(Size::new(110, 60), Point::new(5, 5)),
            columns: vec![band(0, 50), band(60, 110)],
            rows: vec![band(0, 30), band(30, 60)],
            placed: Vec::new(),
            skipped: Vec::new(),
        }
    }

    #[test]
    fn frame_and_content_follow_viewport_origin() {
        let overlay = OverlayGeometry::from_pass(&pass_2x2());
        assert_eq!(overlay.frame, Rect::new(5, 5, 110, 60));
        assert_eq!(overlay.content, Rect::new(5, 5, 110, 60));
    }

    #[test]
    fn cells_come_out_row_major() {
        let overlay = OverlayGeometry::from_pass(&pass_2x2());
        assert_eq!(overlay.cells.len(), 4);
        assert_eq!(overlay.cells[0], Rect::new(5, 5, 50, 30));
        assert_eq!(overlay.cells[1], Rect::new(65, 5, 50, 30));
        assert_eq!(overlay.cells[2], Rect::new(5, 35, 50, 30));
    }

    #[test]
    fn gutters_cover_the_spacing_only() {
        let overlay = OverlayGeometry::from_pass(&pass_2x2());
        assert_eq!(overlay.column_gutters, vec![Rect::new(55, 5, 10, 60)]);
        // rows touch, so no row gutters
        assert!(overlay.row_gutters.is_empty());
    }
}
