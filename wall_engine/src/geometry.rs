//! Immutable glyph geometry: per-symbol subimages, draw offsets, cursor
//! advances and consumed column counts.
//!
//! The table is built once behind a [`OnceLock`] on first use and shared
//! read-only afterwards; concurrent first calls initialize it exactly once.

use std::sync::OnceLock;

use skyfort_core::Raster;

use crate::classify::BlockSymbol;
use crate::superblock;

/// Characters spanned by a single wall column.
pub const COLUMN_WIDTH: i32 = 4;

/// Characters spanned by a single altitude band.
pub const BAND_HEIGHT: i32 = 3;

/// Horizontal cursor advance of one full front block (two columns).
pub const FULL_BLOCK_ADVANCE: i32 = 2 * COLUMN_WIDTH;

pub(crate) const FRONT_FULL_GLYPH: &[&str] = &[
    ".======.", //
    "|::::::|",
    "'======'",
];

const FRONT_HALF_GLYPH: &[&str] = &[
    ".==.", //
    "|::|",
    "'=='",
];

const TOP_FULL_GLYPH: &[&str] = &[
    "____", //
    "\\__\\",
];

const TOP_HALF_GLYPH: &[&str] = &[
    "___", //
    "\\__|",
];

const SIDE_GLYPH: &[&str] = &[
    "\\", //
    " \\",
    "  \\",
];

const SIDE_FULL_TOP_GLYPH: &[&str] = &[
    "__", //
    "\\ \\",
    " \\ \\",
    "  \\_\\",
];

const SIDE_HALF_TOP_GLYPH: &[&str] = &[
    "__", //
    "\\ \\",
    " \\_\\",
];

const SIDE_HALF_GLYPH: &[&str] = &[
    "\\", //
    " \\",
];

/// Geometry entry describing how one symbol participates in row rendering.
#[derive(Clone, Copy, Debug)]
pub struct GeometryDescriptor {
    /// Subimage composited for the symbol, if it draws anything at all.
    pub image: Option<&'static Raster>,
    /// Placement of the subimage relative to the cursor, in characters. The
    /// vertical component may be negative for glyphs that rise above the
    /// band, growing the row raster upward.
    pub draw_offset: (i32, i32),
    /// Cursor displacement applied after the symbol, in characters.
    pub advance: (i32, i32),
    /// Grid columns covered by the symbol, skipped by the renderer.
    pub consumed: usize,
}

struct GlyphTable {
    front_full: Raster,
    front_half: Raster,
    top_full: Raster,
    top_half: Raster,
    side: Raster,
    side_full_top: Raster,
    side_half_top: Raster,
    side_half: Raster,
}

static GLYPHS: OnceLock<GlyphTable> = OnceLock::new();

fn glyphs() -> &'static GlyphTable {
    GLYPHS.get_or_init(|| GlyphTable {
        front_full: Raster::from_lines(FRONT_FULL_GLYPH),
        front_half: Raster::from_lines(FRONT_HALF_GLYPH),
        top_full: Raster::from_lines(TOP_FULL_GLYPH),
        top_half: Raster::from_lines(TOP_HALF_GLYPH),
        side: Raster::from_lines(SIDE_GLYPH),
        side_full_top: Raster::from_lines(SIDE_FULL_TOP_GLYPH),
        side_half_top: Raster::from_lines(SIDE_HALF_TOP_GLYPH),
        side_half: Raster::from_lines(SIDE_HALF_GLYPH),
    })
}

/// Looks up the geometry entry for a symbol.
///
/// # Panics
///
/// Panics when a [`BlockSymbol::Super`] level outside the precomputed cache
/// reaches the lookup. That symbol cannot originate from level content — only
/// from a defect in the optimizer — and rendering a wall whose imagery no
/// longer matches its collision geometry would be worse than stopping.
#[must_use]
pub fn descriptor(symbol: BlockSymbol) -> GeometryDescriptor {
    let table = glyphs();
    match symbol {
        BlockSymbol::Hole => GeometryDescriptor {
            image: None,
            draw_offset: (0, 0),
            advance: (COLUMN_WIDTH, 0),
            consumed: 1,
        },
        BlockSymbol::FrontFull => GeometryDescriptor {
            image: Some(&table.front_full),
            draw_offset: (0, 0),
            advance: (FULL_BLOCK_ADVANCE, 0),
            consumed: 2,
        },
        BlockSymbol::FrontHalf => GeometryDescriptor {
            image: Some(&table.front_half),
            draw_offset: (0, 0),
            advance: (COLUMN_WIDTH, 0),
            consumed: 1,
        },
        BlockSymbol::TopFull => GeometryDescriptor {
            image: Some(&table.top_full),
            draw_offset: (2, -1),
            advance: (COLUMN_WIDTH, 0),
            consumed: 1,
        },
        BlockSymbol::TopHalf => GeometryDescriptor {
            image: Some(&table.top_half),
            draw_offset: (2, -1),
            advance: (COLUMN_WIDTH, 0),
            consumed: 1,
        },
        BlockSymbol::Side => GeometryDescriptor {
            image: Some(&table.side),
            draw_offset: (0, 0),
            advance: (COLUMN_WIDTH, 0),
            consumed: 1,
        },
        BlockSymbol::SideFullTop => GeometryDescriptor {
            image: Some(&table.side_full_top),
            draw_offset: (0, -1),
            advance: (COLUMN_WIDTH, 0),
            consumed: 1,
        },
        BlockSymbol::SideHalfTop => GeometryDescriptor {
            image: Some(&table.side_half_top),
            draw_offset: (0, -1),
            advance: (COLUMN_WIDTH, 0),
            consumed: 1,
        },
        BlockSymbol::SideHalf => GeometryDescriptor {
            image: Some(&table.side_half),
            draw_offset: (0, 0),
            advance: (COLUMN_WIDTH, 0),
            consumed: 1,
        },
        BlockSymbol::Super(level) => {
            let blocks = 1_i32 << level;
            GeometryDescriptor {
                image: Some(superblock::level(level)),
                draw_offset: (0, 0),
                advance: (FULL_BLOCK_ADVANCE * blocks, 0),
                consumed: 2 << level,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_glyphs_match_canonical_block_metrics() {
        let full = descriptor(BlockSymbol::FrontFull);
        let half = descriptor(BlockSymbol::FrontHalf);

        let full_image = full.image.expect("full front draws");
        assert_eq!(full_image.width() as i32, FULL_BLOCK_ADVANCE);
        assert_eq!(full_image.height() as i32, BAND_HEIGHT);
        assert_eq!(full.consumed, 2);

        let half_image = half.image.expect("half front draws");
        assert_eq!(half_image.width() as i32, COLUMN_WIDTH);
        assert_eq!(half.consumed, 1);
    }

    #[test]
    fn holes_advance_without_drawing() {
        let hole = descriptor(BlockSymbol::Hole);

        assert!(hole.image.is_none());
        assert_eq!(hole.advance, (COLUMN_WIDTH, 0));
        assert_eq!(hole.consumed, 1);
    }

    #[test]
    fn ledge_glyphs_rise_above_the_band() {
        for symbol in [
            BlockSymbol::TopFull,
            BlockSymbol::TopHalf,
            BlockSymbol::SideFullTop,
            BlockSymbol::SideHalfTop,
        ] {
            assert!(
                descriptor(symbol).draw_offset.1 < 0,
                "{symbol:?} should draw above the band line"
            );
        }
    }

    #[test]
    fn super_descriptor_scales_with_level() {
        let level_two = descriptor(BlockSymbol::Super(2));

        assert_eq!(level_two.consumed, 8);
        assert_eq!(level_two.advance, (4 * FULL_BLOCK_ADVANCE, 0));
        let image = level_two.image.expect("superblocks draw");
        assert_eq!(image.width() as i32, 4 * FULL_BLOCK_ADVANCE);
    }

    #[test]
    #[should_panic(expected = "superblock level")]
    fn out_of_range_super_level_fails_fast() {
        let _ = descriptor(BlockSymbol::Super(5));
    }
}
