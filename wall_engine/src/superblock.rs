//! Process-wide cache of precomputed full-front-block runs.
//!
//! Level 0 holds the canonical single full front block; every further level
//! composites the previous level next to itself, doubling coverage, so a run
//! of `n` blocks renders in O(log n) composites instead of O(n).

use std::sync::OnceLock;

use skyfort_core::Raster;

use crate::geometry::{FRONT_FULL_GLYPH, FULL_BLOCK_ADVANCE};

/// Number of cached levels; level `k` covers `2^k` full front blocks.
pub const LEVEL_COUNT: usize = 5;

static SUPERBLOCKS: OnceLock<[Raster; LEVEL_COUNT]> = OnceLock::new();

fn build() -> [Raster; LEVEL_COUNT] {
    let level0 = Raster::from_lines(FRONT_FULL_GLYPH);
    let level1 = level0.overlay(&level0, FULL_BLOCK_ADVANCE, 0);
    let level2 = level1.overlay(&level1, FULL_BLOCK_ADVANCE * 2, 0);
    let level3 = level2.overlay(&level2, FULL_BLOCK_ADVANCE * 4, 0);
    let level4 = level3.overlay(&level3, FULL_BLOCK_ADVANCE * 8, 0);
    [level0, level1, level2, level3, level4]
}

/// Composite raster covering `2^level` adjacent full front blocks.
///
/// The cache is built lazily exactly once, even under concurrent first use,
/// and is immutable afterwards.
///
/// # Panics
///
/// Panics for levels outside the cache. No classified grid can carry such a
/// level; reaching this is an engine defect and must not degrade silently.
#[must_use]
pub fn level(level: u8) -> &'static Raster {
    let cache = SUPERBLOCKS.get_or_init(build);
    cache
        .get(usize::from(level))
        .unwrap_or_else(|| panic!("superblock level {level} outside the precomputed cache"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_zero_is_the_canonical_front_block() {
        assert_eq!(level(0), &Raster::from_lines(FRONT_FULL_GLYPH));
    }

    #[test]
    fn each_level_composites_the_previous_level_beside_itself() {
        for k in 1..LEVEL_COUNT {
            let previous = level(k as u8 - 1);
            let advance = FULL_BLOCK_ADVANCE << (k - 1);
            let expected = previous.overlay(previous, advance, 0);

            assert_eq!(level(k as u8), &expected, "level {k}");
        }
    }

    #[test]
    fn level_widths_double_per_level() {
        for k in 0..LEVEL_COUNT {
            let expected = (FULL_BLOCK_ADVANCE as usize) << k;
            assert_eq!(level(k as u8).width(), expected, "level {k}");
        }
    }

    #[test]
    #[should_panic(expected = "superblock level 7")]
    fn out_of_range_level_panics() {
        let _ = level(7);
    }
}
