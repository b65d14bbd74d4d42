//! Dashboard layout demo: mixed fixed and flex tracks, spans, a size-capped
//! badge, and pass telemetry printed as JSONL on stdout.

use trellis::logging::{LogEvent, LogSink, LoggingResult};
use trellis::{
    Anchor, Grid, GridArea, HostResult, Insets, Logger, MaxSize, OverlayGeometry, Placement,
    Rect, RectSink, Result, SlotSpec, Spacing, StaticTarget, Viewport,
};

const HEADER: &str = "app:header";
const SIDEBAR: &str = "app:sidebar";
const CONTENT: &str = "app:content";
const STATUS: &str = "app:status";
const BADGE: &str = "app:badge";

struct StdoutLog;

impl LogSink for StdoutLog {
    fn log(&self, event: &LogEvent) -> LoggingResult<()> {
        println!("{}", serde_json::to_string(event)?);
        Ok(())
    }
}

struct PrintSink;

impl RectSink for PrintSink {
    fn place(&mut self, id: &str, rect: Rect) -> HostResult<()> {
        println!(
            "{id:<14} -> ({}, {}) {}x{}",
            rect.x, rect.y, rect.width, rect.height
        );
        Ok(())
    }
}

fn main() -> Result<()> {
    let mut grid = Grid::new(
        3,
        3,
        StaticTarget::new(Viewport::sized(1280, 720)),
        PrintSink,
    )?;
    grid.set_label("dashboard");
    grid.set_offsets(Insets::uniform(8));
    grid.set_padding(Insets::uniform(4));
    grid.set_spacing(Spacing::uniform(6));

    // fixed sidebar and status bar, everything else flexes
    grid.set_column_spec(0, SlotSpec::Fixed(240))?;
    grid.set_column_spec(2, SlotSpec::Flex(2.0))?;
    grid.set_row_spec(0, SlotSpec::Fixed(64))?;
    grid.set_row_spec(2, SlotSpec::Fixed(28))?;

    grid.attach(HEADER, Placement::new(GridArea::span(0, 0, 3, 1)));
    grid.attach(SIDEBAR, Placement::new(GridArea::cell(0, 1)));
    grid.attach(CONTENT, Placement::new(GridArea::span(1, 1, 2, 1)));
    grid.attach(STATUS, Placement::new(GridArea::span(0, -1, 3, 1)));
    grid.attach(
        BADGE,
        Placement::new(GridArea::cell(-1, 0))
            .with_max_size(MaxSize::both(96, 32))
            .with_anchor(Anchor::East),
    );

    grid.config_mut().logger = Some(Logger::new(StdoutLog));
    grid.config_mut().enable_metrics();

    let pass = grid.recompute()?;

    let overlay = OverlayGeometry::from_pass(&pass);
    println!(
        "content {}x{} inside frame {}x{}, {} cells, {} gutters",
        overlay.content.width,
        overlay.content.height,
        overlay.frame.width,
        overlay.frame.height,
        overlay.cells.len(),
        overlay.column_gutters.len() + overlay.row_gutters.len()
    );

    if let Some(metrics) = grid.config().metrics_handle() {
        let snapshot = metrics.lock().expect("metrics lock").snapshot();
        println!(
            "pass #{}: {} placed, {} skipped",
            snapshot.passes, snapshot.placements_placed, snapshot.placements_skipped
        );
    }
    Ok(())
}
