//! Hitbox extraction: reconstructs per-band collision intervals from the
//! classified grid.

use skyfort_core::HitboxInterval;

use crate::classify::ClassifiedGrid;

/// Extracts the solid column intervals of every altitude band.
///
/// The input must be the grid as classified, before run-length optimization —
/// the engine wires it that way so the optimizer can never move collision
/// geometry. Only front symbols collide; ledges and side faces are imagery
/// over open air. The sentinel border is dropped, so interval coordinates are
/// original wall columns. Bands without solid columns yield an empty list.
#[must_use]
pub fn extract(grid: &ClassifiedGrid) -> Vec<Vec<HitboxInterval>> {
    (0..grid.wall_height()).map(|y| extract_row(grid, y)).collect()
}

fn extract_row(grid: &ClassifiedGrid, y: usize) -> Vec<HitboxInterval> {
    let mut intervals = Vec::new();
    let mut run_start: Option<usize> = None;

    for x in 0..grid.wall_width() {
        let solid = grid.symbol(x, y).is_front();
        match (solid, run_start) {
            (true, None) => run_start = Some(x),
            (false, Some(start)) => {
                intervals.push(HitboxInterval::new(y as u32, start as u32, (x - 1) as u32));
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        intervals.push(HitboxInterval::new(
            y as u32,
            start as u32,
            (grid.wall_width() - 1) as u32,
        ));
    }

    intervals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::silhouette::normalize;

    fn hitboxes(description: &str) -> Vec<Vec<HitboxInterval>> {
        extract(&classify(&normalize(description).expect("valid description")))
    }

    #[test]
    fn solid_band_yields_one_interval_spanning_all_columns() {
        let rows = hitboxes("xxxx");

        assert_eq!(rows, vec![vec![HitboxInterval::new(0, 0, 3)]]);
    }

    #[test]
    fn gap_splits_the_band_into_two_intervals() {
        let rows = hitboxes("xx  xx");

        assert_eq!(
            rows,
            vec![vec![
                HitboxInterval::new(0, 0, 1),
                HitboxInterval::new(0, 4, 5),
            ]]
        );
    }

    #[test]
    fn ledge_band_contributes_no_collision_geometry() {
        let rows = hitboxes("xx\n  ");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![HitboxInterval::new(0, 0, 1)]);
        assert!(rows[1].is_empty());
    }

    #[test]
    fn side_faces_do_not_collide() {
        // The sentinel column's side face must not leak into the intervals,
        // and neither must the flanged side right of the band-0 run.
        let rows = hitboxes("xx  \nxxxx");

        assert_eq!(rows[0], vec![HitboxInterval::new(0, 0, 1)]);
        assert_eq!(rows[1], vec![HitboxInterval::new(1, 0, 3)]);
    }

    #[test]
    fn brick_parity_does_not_affect_intervals() {
        let rows = hitboxes("xxxx\nxxxx\nxxxx");

        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row, &vec![HitboxInterval::new(y as u32, 0, 3)], "band {y}");
        }
    }

    #[test]
    fn single_column_runs_produce_degenerate_intervals() {
        let rows = hitboxes("x x x");

        assert_eq!(
            rows,
            vec![vec![
                HitboxInterval::new(0, 0, 0),
                HitboxInterval::new(0, 2, 2),
                HitboxInterval::new(0, 4, 4),
            ]]
        );
    }
}
