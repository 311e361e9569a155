//! Silhouette normalization: raw description text into a sentinel-bordered
//! solid/hole grid.

use skyfort_core::{WallError, MAX_WALL_ROWS};

/// Content of a single silhouette cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// The cell belongs to the wall body.
    Solid,
    /// The cell is open air.
    Hole,
}

/// Rectangular, sentinel-bordered silhouette grid.
///
/// Rows are altitude bands in description order: row 0 is the lowest band and
/// row `y + 1` sits spatially above row `y`. The grid carries one all-hole
/// sentinel row above the topmost band and one hole sentinel column to the
/// right of every row, so every look-above and look-right during
/// classification proceeds without a bounds check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Silhouette {
    cells: Vec<Cell>,
    wall_width: usize,
    wall_height: usize,
}

impl Silhouette {
    /// Padded silhouette width in wall columns, excluding the sentinel column.
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

    /// Cell at the provided grid position.
    ///
    /// Positions outside the grid read as holes, which matches the sentinel
    /// border semantics.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x < self.grid_width() && y < self.grid_height() {
            self.cells[y * self.grid_width() + x]
        } else {
            Cell::Hole
        }
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let width = self.grid_width();
        self.cells[y * width + x] = cell;
    }
}

/// Validates and normalizes raw wall description text.
///
/// Leading and trailing blank lines are ignored; rows shorter than the widest
/// row are right-padded with holes; the sentinel border is attached. A
/// trimmed description taller than [`MAX_WALL_ROWS`] or containing any
/// character other than `x` and space is rejected before any grid exists.
pub fn normalize(description: &str) -> Result<Silhouette, WallError> {
    let lines: Vec<&str> = description.lines().collect();
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let Some(first) = first else {
        return Ok(Silhouette {
            cells: vec![Cell::Hole],
            wall_width: 0,
            wall_height: 0,
        });
    };
    let last = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .unwrap_or(first);
    let trimmed = &lines[first..=last];

    if trimmed.len() > MAX_WALL_ROWS {
        return Err(WallError::TooTall {
            rows: trimmed.len(),
            max: MAX_WALL_ROWS,
        });
    }

    let wall_width = trimmed
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let wall_height = trimmed.len();

    let mut silhouette = Silhouette {
        cells: vec![Cell::Hole; (wall_width + 1) * (wall_height + 1)],
        wall_width,
        wall_height,
    };

    for (row, line) in trimmed.iter().enumerate() {
        for (column, character) in line.chars().enumerate() {
            match character {
                'x' => silhouette.set(column, row, Cell::Solid),
                ' ' => {}
                _ => {
                    return Err(WallError::UnrecognizedCharacter {
                        character,
                        row,
                        column,
                    })
                }
            }
        }
    }

    Ok(silhouette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_pads_rows_to_widest_line() {
        let silhouette = normalize("xx\nxxxx").expect("valid description");

        assert_eq!(silhouette.wall_width(), 4);
        assert_eq!(silhouette.wall_height(), 2);
        assert_eq!(silhouette.cell(1, 0), Cell::Solid);
        assert_eq!(silhouette.cell(2, 0), Cell::Hole);
        assert_eq!(silhouette.cell(3, 1), Cell::Solid);
    }

    #[test]
    fn normalize_trims_blank_boundary_lines_only() {
        let silhouette = normalize("\n  \nxx\n\nx\n   \n").expect("valid description");

        assert_eq!(silhouette.wall_height(), 3);
        assert_eq!(silhouette.cell(0, 0), Cell::Solid);
        assert_eq!(silhouette.cell(0, 1), Cell::Hole);
        assert_eq!(silhouette.cell(0, 2), Cell::Solid);
    }

    #[test]
    fn normalize_attaches_hole_sentinel_border() {
        let silhouette = normalize("xx").expect("valid description");

        assert_eq!(silhouette.grid_width(), 3);
        assert_eq!(silhouette.grid_height(), 2);
        assert_eq!(silhouette.cell(2, 0), Cell::Hole);
        assert_eq!(silhouette.cell(0, 1), Cell::Hole);
        assert_eq!(silhouette.cell(1, 1), Cell::Hole);
    }

    #[test]
    fn normalize_rejects_descriptions_above_the_row_limit() {
        let description = "x\n".repeat(11);

        let error = normalize(&description).expect_err("11 rows must be rejected");

        assert_eq!(error, WallError::TooTall { rows: 11, max: 9 });
    }

    #[test]
    fn normalize_rejects_unknown_characters_with_position() {
        let error = normalize("xx\nx#").expect_err("'#' must be rejected");

        assert_eq!(
            error,
            WallError::UnrecognizedCharacter {
                character: '#',
                row: 1,
                column: 1,
            }
        );
    }

    #[test]
    fn normalize_accepts_blank_only_input_as_empty_wall() {
        let silhouette = normalize("\n  \n").expect("blank input is an empty wall");

        assert_eq!(silhouette.wall_height(), 0);
        assert_eq!(silhouette.wall_width(), 0);
    }
}
