use thiserror::Error;

use crate::geometry::{Point, Rect, Size};

/// Content region reported by the host for one pass: the size to distribute
/// and the local origin emitted rectangles are translated by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub size: Size,
    pub origin: Point,
}

impl Viewport {
    pub const fn new(size: Size, origin: Point) -> Self {
        Self { size, origin }
    }

    /// Viewport at the local origin.
    pub const fn sized(width: i32, height: i32) -> Self {
        Self::new(Size::new(width, height), Point::new(0, 0))
    }
}

pub type HostResult<T> = std::result::Result<T, HostError>;

/// Failures reported by host collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The externally-owned item no longer exists. The grid detaches the
    /// placement and carries on.
    #[error("item no longer exists on the host")]
    ItemMissing,
    #[error("host backend error: {0}")]
    Backend(String),
}

/// Supplies the current content region. Probed exactly once per pass; a
/// failure here aborts the whole pass.
pub trait TargetSource {
    fn probe(&self) -> HostResult<Viewport>;
}

/// Receives one rectangle per valid placement per pass. Failures are
/// reported per placement and never abort the pass.
pub trait RectSink {
    fn place(&mut self, id: &str, rect: Rect) -> HostResult<()>;
}

/// Fixed-region source for hosts without a live surface, and for tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticTarget {
    viewport: Viewport,
}

impl StaticTarget {
    pub const fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }
}

impl TargetSource for StaticTarget {
    fn probe(&self) -> HostResult<Viewport> {
        Ok(self.viewport)
    }
}

/// Sink that drops every rectangle. Useful when only the returned pass
/// report matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RectSink for NullSink {
    fn place(&mut self, _id: &str, _rect: Rect) -> HostResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_target_reports_its_viewport() {
        let target = StaticTarget::new(Viewport::sized(300, 200));
        let viewport = target.probe().unwrap();
        assert_eq!(viewport.size, Size::new(300, 200));
        assert_eq!(viewport.origin, Point::new(0, 0));
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullSink;
        assert!(sink.place("anything", Rect::new(0, 0, 1, 1)).is_ok());
    }
}
