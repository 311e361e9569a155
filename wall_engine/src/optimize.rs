//! Run-length optimization: long runs of full front blocks collapse into
//! superblock stamps so the renderer composites them in O(log n).
//!
//! Optimization only ever touches the copy handed to the renderer. Hitboxes
//! are extracted from the unoptimized grid, so collision geometry cannot be
//! affected by anything done here.

use crate::classify::{BlockSymbol, ClassifiedGrid};

/// Largest supported superblock level; one stamp covers at most `2^4` blocks.
const MAX_LEVEL: u8 = 4;

/// Returns a rendering copy of the grid with full-front runs collapsed.
///
/// Per row, every maximal run of `FrontFull` cells is consumed greedily:
/// while at least four columns remain, the largest level whose `2^(level+1)`
/// columns still fit is stamped and the scan continues behind it. Remainders
/// shorter than four columns stay as individual full fronts. Runs are always
/// pair-aligned and even in length, so stamps never split a front pair.
#[must_use]
pub fn optimize(grid: &ClassifiedGrid) -> ClassifiedGrid {
    let mut optimized = grid.clone();
    for y in 0..grid.grid_height() {
        let mut x = 0;
        while x < grid.grid_width() {
            if grid.symbol(x, y) != BlockSymbol::FrontFull {
                x += 1;
                continue;
            }
            let run = run_length(grid, x, y);
            collapse_run(&mut optimized, x, y, run);
            x += run;
        }
    }
    optimized
}

fn run_length(grid: &ClassifiedGrid, start: usize, y: usize) -> usize {
    let mut length = 0;
    while grid.symbol(start + length, y) == BlockSymbol::FrontFull {
        length += 1;
    }
    length
}

fn collapse_run(grid: &mut ClassifiedGrid, start: usize, y: usize, run: usize) {
    let mut offset = 0;
    let mut remaining = run;
    while remaining >= 4 {
        let level = largest_fitting_level(remaining);
        let span = 2usize << level;
        for column in 0..span {
            grid.set(start + offset + column, y, BlockSymbol::Super(level));
        }
        offset += span;
        remaining -= span;
    }
}

fn largest_fitting_level(columns: usize) -> u8 {
    let mut level = MAX_LEVEL;
    while (2usize << level) > columns {
        level -= 1;
    }
    level
}
