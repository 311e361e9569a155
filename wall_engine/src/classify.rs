//! Cell classification: three ordered passes assign every silhouette cell a
//! block symbol that drives both rendering and collision extraction.

use crate::silhouette::{Cell, Silhouette};

/// Symbol alphabet assigned to classified cells.
///
/// Multi-column symbols (`FrontFull` and `Super`) are stamped into every grid
/// cell they cover; the renderer skips the duplicates through each symbol's
/// consumed-column count, which keeps the grid rectangular so neighbor rules
/// and hitbox extraction stay uniform per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockSymbol {
    /// Open air; draws nothing but still advances the cursor one column.
    Hole,
    /// Wall face two columns wide.
    FrontFull,
    /// Wall face one column wide.
    FrontHalf,
    /// Ledge over a full-width face with open air continuing to its right.
    TopFull,
    /// Ledge abutting further wall to its right, or over a half-width face.
    TopHalf,
    /// Vertical face at the right edge of a solid run.
    Side,
    /// Side face carrying a full ledge flange.
    SideFullTop,
    /// Side face carrying a half ledge flange.
    SideHalfTop,
    /// Shortened side face. Part of the renderable alphabet although the
    /// classifier never emits it; the geometry table still covers it so
    /// rendering stays total.
    SideHalf,
    /// Precomputed run of `2^level` adjacent full front blocks, produced by
    /// the run-length optimizer for levels 1 through 4.
    Super(u8),
}

impl BlockSymbol {
    /// Reports whether the symbol is part of the collidable front family.
    #[must_use]
    pub const fn is_front(self) -> bool {
        matches!(self, Self::FrontFull | Self::FrontHalf)
    }
}

/// Fully classified wall grid, sentinel border included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedGrid {
    symbols: Vec<BlockSymbol>,
    wall_width: usize,
    wall_height: usize,
}

impl ClassifiedGrid {
    fn holes(wall_width: usize, wall_height: usize) -> Self {
        Self {
            symbols: vec![BlockSymbol::Hole; (wall_width + 1) * (wall_height + 1)],
            wall_width,
            wall_height,
        }
    }

    /// Padded wall width in columns, excluding the sentinel column.
    #[must_use]
    pub const fn wall_width(&self) -> usize {
        self.wall_width
    }

    /// Number of altitude bands, excluding the sentinel row.
    #[must_use]
    pub const fn wall_height(&self) -> usize {
        self.wall_height
    }

    /// Grid width including the sentinel column.
    #[must_use]
    pub const fn grid_width(&self) -> usize {
        self.wall_width + 1
    }

    /// Grid height including the sentinel row.
    #[must_use]
    pub const fn grid_height(&self) -> usize {
        self.wall_height + 1
    }

    /// Symbol at the provided grid position; positions outside the grid read
    /// as holes.
    #[must_use]
    pub fn symbol(&self, x: usize, y: usize) -> BlockSymbol {
        if x < self.grid_width() && y < self.grid_height() {
            self.symbols[y * self.grid_width() + x]
        } else {
            BlockSymbol::Hole
        }
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, symbol: BlockSymbol) {
        let width = self.grid_width();
        self.symbols[y * width + x] = symbol;
    }
}

/// Classifies a normalized silhouette.
///
/// Classification is a pure function of the grid: every cell's symbol is
/// determined by at most its right and upper neighbors plus the sentinel
/// border, no cell is revisited, and every original solid cell ends up
/// carrying exactly one front symbol.
#[must_use]
pub fn classify(silhouette: &Silhouette) -> ClassifiedGrid {
    let mut grid = ClassifiedGrid::holes(silhouette.wall_width(), silhouette.wall_height());
    classify_fronts(silhouette, &mut grid);
    classify_tops(&mut grid);
    classify_sides(&mut grid);
    grid
}

/// Pass A: solid cells become full or half front faces.
///
/// A pair may only start where the brick parity `(x + y) % 2 == 0` holds and
/// the right neighbor is solid; a hole on the right forces a half face
/// regardless of parity. Parity is absolute per cell, so decisions on either
/// side of a hole are independent.
fn classify_fronts(silhouette: &Silhouette, grid: &mut ClassifiedGrid) {
    for y in 0..grid.grid_height() {
        let mut x = 0;
        while x < grid.grid_width() {
            if silhouette.cell(x, y) != Cell::Solid {
                x += 1;
                continue;
            }
            let pair_allowed = (x + y) % 2 == 0 && silhouette.cell(x + 1, y) == Cell::Solid;
            if pair_allowed {
                grid.set(x, y, BlockSymbol::FrontFull);
                grid.set(x + 1, y, BlockSymbol::FrontFull);
                x += 2;
            } else {
                grid.set(x, y, BlockSymbol::FrontHalf);
                x += 1;
            }
        }
    }
}

/// Pass B: holes directly above a front face become ledges.
///
/// Above a full face the ledge is full when the hole's own right neighbor is
/// also open, half when further wall abuts it; above a half face the ledge is
/// always half. Ledges written into the sentinel row are discarded with it,
/// so a single-band wall contributes no ledge row of its own.
fn classify_tops(grid: &mut ClassifiedGrid) {
    for y in 0..grid.wall_height() {
        for x in 0..grid.grid_width() {
            if grid.symbol(x, y + 1) != BlockSymbol::Hole {
                continue;
            }
            match grid.symbol(x, y) {
                BlockSymbol::FrontFull => {
                    let ledge = if grid.symbol(x + 1, y + 1) == BlockSymbol::Hole {
                        BlockSymbol::TopFull
                    } else {
                        BlockSymbol::TopHalf
                    };
                    grid.set(x, y + 1, ledge);
                }
                BlockSymbol::FrontHalf => grid.set(x, y + 1, BlockSymbol::TopHalf),
                _ => {}
            }
        }
    }
}

/// Pass C: cells to the right of a front face grow side faces.
///
/// A hole becomes a side face, with a full ledge flange when a front face
/// also sits directly above it; a ledge written by pass B upgrades to the
/// matching flanged side. The sentinel column participates — it is where the
/// rightmost side face of a run lives.
fn classify_sides(grid: &mut ClassifiedGrid) {
    for y in 0..grid.grid_height() {
        for x in 1..grid.grid_width() {
            if !grid.symbol(x - 1, y).is_front() {
                continue;
            }
            match grid.symbol(x, y) {
                BlockSymbol::Hole => {
                    let flanged = grid.symbol(x, y + 1).is_front();
                    let side = if flanged {
                        BlockSymbol::SideFullTop
                    } else {
                        BlockSymbol::Side
                    };
                    grid.set(x, y, side);
                }
                BlockSymbol::TopFull => grid.set(x, y, BlockSymbol::SideFullTop),
                BlockSymbol::TopHalf => grid.set(x, y, BlockSymbol::SideHalfTop),
                _ => {}
            }
        }
    }
}
