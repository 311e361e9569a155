#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Skyfort Run wall engine.
//!
//! This crate defines the value types that connect the wall generation
//! pipeline with its adapters. The engine consumes textual wall silhouettes
//! supplied by level data, produces a [`DynamicWall`] — one composited
//! [`Raster`] plus one list of [`HitboxInterval`] values per altitude row —
//! and reports malformed level content through [`WallError`]. Adapters only
//! ever observe these types; the classification grid and glyph tables stay
//! internal to the engine crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of altitude rows a wall silhouette may describe.
///
/// A ship occupies one of nine discrete flight levels, so level data that
/// describes a taller wall is an authoring mistake rather than a runtime
/// condition.
pub const MAX_WALL_ROWS: usize = 9;

/// Failures reported while validating wall description content.
///
/// These are authoring bugs surfaced at level-load time. They are returned
/// synchronously, are never retried, and never yield partial output: a wall
/// either generates completely or not at all, because a partially wrong wall
/// would corrupt visuals and collision geometry at the same time.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WallError {
    /// The trimmed description contains more altitude rows than the game
    /// supports.
    #[error("wall description spans {rows} altitude rows, the limit is {max}")]
    TooTall {
        /// Number of rows counted after trimming blank lines.
        rows: usize,
        /// Permitted maximum, [`MAX_WALL_ROWS`].
        max: usize,
    },
    /// The description contains a character other than `x` and space.
    #[error("unrecognized character {character:?} at row {row}, column {column}")]
    UnrecognizedCharacter {
        /// Offending character as found in the input.
        character: char,
        /// Zero-based trimmed row that contains the character.
        row: usize,
        /// Zero-based column of the character within its row.
        column: usize,
    },
}

/// Two-dimensional character raster used for composited wall imagery.
///
/// Cells hold plain characters; [`Raster::TRANSPARENT`] (a blank) marks a
/// cell that lets the content beneath it show through. Rasters are plain
/// values: composition via [`Raster::overlay`] returns a new raster and never
/// mutates its operands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raster {
    cells: Vec<char>,
    width: usize,
    height: usize,
}

impl Raster {
    /// Glyph that marks a transparent cell.
    pub const TRANSPARENT: char = ' ';

    /// Creates a raster with no cells at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    /// Creates a fully transparent raster of the provided dimensions.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Self::TRANSPARENT; width * height],
            width,
            height,
        }
    }

    /// Builds a raster from text lines, right-padding short lines with
    /// transparent cells so the result is rectangular.
    #[must_use]
    pub fn from_lines(lines: &[&str]) -> Self {
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let mut raster = Self::new(width, lines.len());
        for (y, line) in lines.iter().enumerate() {
            for (x, glyph) in line.chars().enumerate() {
                raster.set(x, y, glyph);
            }
        }
        raster
    }

    /// Width of the raster in characters.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the raster in characters.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Reports whether the raster covers no area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Glyph stored at the provided position.
    ///
    /// Positions outside the raster read as transparent, matching how the
    /// compositor treats anything beyond an operand's bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> char {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Self::TRANSPARENT
        }
    }

    fn set(&mut self, x: usize, y: usize, glyph: char) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = glyph;
        }
    }

    /// Renders the raster back into one string per row.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.get(x, y)).collect())
            .collect()
    }

    /// Composites `other` over this raster with `other`'s origin displaced by
    /// `(dx, dy)` relative to this raster's origin.
    ///
    /// The result is the minimal raster covering both operands. This raster's
    /// origin stays anchored: negative offsets grow the canvas up or left and
    /// both placements are rebased so the combined top-left corner lands at
    /// (0, 0). This raster is copied in first, then `other` is written
    /// cell-wise wherever its glyph is non-blank — last write wins, and
    /// transparent cells never erase what lies beneath them.
    #[must_use]
    pub fn overlay(&self, other: &Raster, dx: i32, dy: i32) -> Raster {
        let left = dx.min(0);
        let top = dy.min(0);
        let right = (self.width as i32).max(dx.saturating_add(other.width as i32));
        let bottom = (self.height as i32).max(dy.saturating_add(other.height as i32));

        let width = usize::try_from(right - left).unwrap_or(0);
        let height = usize::try_from(bottom - top).unwrap_or(0);
        let mut combined = Raster::new(width, height);

        for y in 0..self.height {
            for x in 0..self.width {
                if let (Ok(placed_x), Ok(placed_y)) = (
                    usize::try_from(x as i32 - left),
                    usize::try_from(y as i32 - top),
                ) {
                    combined.set(placed_x, placed_y, self.get(x, y));
                }
            }
        }

        for y in 0..other.height {
            for x in 0..other.width {
                let glyph = other.get(x, y);
                if glyph == Self::TRANSPARENT {
                    continue;
                }
                if let (Ok(placed_x), Ok(placed_y)) = (
                    usize::try_from(x as i32 + dx - left),
                    usize::try_from(y as i32 + dy - top),
                ) {
                    combined.set(placed_x, placed_y, glyph);
                }
            }
        }

        combined
    }
}

/// Closed run of solid columns within one altitude row.
///
/// Coordinates count wall columns of the original, unpadded silhouette, not
/// raster characters; physics consumes these directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HitboxInterval {
    row: u32,
    start: u32,
    end: u32,
}

impl HitboxInterval {
    /// Creates a new interval spanning `start..=end` within `row`.
    #[must_use]
    pub const fn new(row: u32, start: u32, end: u32) -> Self {
        Self { row, start, end }
    }

    /// Zero-based altitude row that contains the interval.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// First solid column of the interval.
    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Last solid column of the interval, inclusive.
    #[must_use]
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Number of columns covered by the interval.
    #[must_use]
    pub const fn span(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Reports whether the provided column lies inside the interval.
    #[must_use]
    pub const fn contains(&self, column: u32) -> bool {
        self.start <= column && column <= self.end
    }
}

/// Fully generated wall: composited imagery and collision geometry per
/// altitude row.
///
/// Both lists share the trimmed row count of the source description and keep
/// its row order. Walls are computed once per distinct description value at
/// level load and shared read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicWall {
    rows: Vec<Raster>,
    hitbox_rows: Vec<Vec<HitboxInterval>>,
}

impl DynamicWall {
    /// Assembles a wall from per-row rasters and per-row hitbox lists.
    ///
    /// Callers must supply one hitbox list per raster row; the engine is the
    /// only producer and upholds this by construction.
    #[must_use]
    pub fn from_parts(rows: Vec<Raster>, hitbox_rows: Vec<Vec<HitboxInterval>>) -> Self {
        debug_assert_eq!(rows.len(), hitbox_rows.len());
        Self { rows, hitbox_rows }
    }

    /// Composited raster for each altitude row, in original row order.
    #[must_use]
    pub fn rows(&self) -> &[Raster] {
        &self.rows
    }

    /// Solid column intervals for each altitude row, in original row order.
    #[must_use]
    pub fn hitbox_rows(&self) -> &[Vec<HitboxInterval>] {
        &self.hitbox_rows
    }

    /// Number of altitude rows the wall spans.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Reports whether the wall contains no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
