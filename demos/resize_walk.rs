//! Walks the target width down and back up, showing fixed tracks holding
//! their length until starvation scales them, then shrinks the grid itself
//! so placements fall out of range and return when it grows back.

use std::sync::{Arc, Mutex};

use trellis::{
    Grid, GridArea, HostResult, NullSink, Placement, Result, SlotSpec, TargetSource, Viewport,
};

#[derive(Clone)]
struct SharedTarget {
    viewport: Arc<Mutex<Viewport>>,
}

impl TargetSource for SharedTarget {
    fn probe(&self) -> HostResult<Viewport> {
        Ok(*self.viewport.lock().expect("viewport lock"))
    }
}

fn main() -> Result<()> {
    let viewport = Arc::new(Mutex::new(Viewport::sized(1280, 320)));
    let target = SharedTarget {
        viewport: Arc::clone(&viewport),
    };

    let mut grid = Grid::new(3, 1, target, NullSink)?;
    grid.set_column_spec(0, SlotSpec::Fixed(400))?;
    grid.set_column_spec(2, SlotSpec::Flex(2.0))?;
    grid.attach("nav", Placement::new(GridArea::cell(0, 0)));
    grid.attach("list", Placement::new(GridArea::cell(1, 0)));
    grid.attach("detail", Placement::new(GridArea::cell(2, 0)));

    for width in [1280, 960, 640, 400, 240, 960] {
        *viewport.lock().expect("viewport lock") = Viewport::sized(width, 320);
        let pass = grid.recompute()?;
        let lengths: Vec<i32> = pass.columns.iter().map(|band| band.length()).collect();
        println!("width {width:>4}: columns {lengths:?}");
    }

    grid.set_dimensions(1, 1)?;
    let pass = grid.recompute()?;
    println!(
        "1 column: {} placed, {} skipped",
        pass.placed.len(),
        pass.skipped.len()
    );
    for skip in &pass.skipped {
        println!("  skipped {}: {}", skip.item, skip.error);
    }

    grid.set_dimensions(3, 1)?;
    let pass = grid.recompute()?;
    println!("3 columns again: {} placed", pass.placed.len());
    Ok(())
}
