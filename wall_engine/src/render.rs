//! Row rendering: walks a classified (and optimized) row and accumulates one
//! composited raster per altitude band.

use skyfort_core::Raster;

use crate::classify::ClassifiedGrid;
use crate::geometry;

/// Renders every altitude band of the grid into its own raster.
///
/// Rows come back in original band order. The sentinel row is never rendered;
/// the sentinel column is, because it carries the rightmost side face of a
/// run.
#[must_use]
pub fn render_rows(grid: &ClassifiedGrid) -> Vec<Raster> {
    (0..grid.wall_height()).map(|y| render_row(grid, y)).collect()
}

/// Renders a single band.
///
/// The cursor starts at the band origin; each symbol composites its subimage
/// at cursor plus draw offset, then advances the cursor and skips the columns
/// it consumed. Glyphs that rise above the band grow the raster upward; the
/// accumulated origin shift is tracked so later glyphs keep compositing in
/// band coordinates. A band of pure holes yields an empty raster.
#[must_use]
pub fn render_row(grid: &ClassifiedGrid, y: usize) -> Raster {
    let mut accumulated = Raster::empty();
    let mut origin = (0_i32, 0_i32);
    let mut cursor = (0_i32, 0_i32);

    let mut x = 0;
    while x < grid.grid_width() {
        let entry = geometry::descriptor(grid.symbol(x, y));
        if let Some(image) = entry.image {
            let placed_x = origin.0 + cursor.0 + entry.draw_offset.0;
            let placed_y = origin.1 + cursor.1 + entry.draw_offset.1;
            accumulated = accumulated.overlay(image, placed_x, placed_y);
            if placed_x < 0 {
                origin.0 -= placed_x;
            }
            if placed_y < 0 {
                origin.1 -= placed_y;
            }
        }
        cursor.0 += entry.advance.0;
        cursor.1 += entry.advance.1;
        x += entry.consumed;
    }

    accumulated
}
