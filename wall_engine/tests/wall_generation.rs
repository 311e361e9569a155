use skyfort_core::{HitboxInterval, WallError, MAX_WALL_ROWS};
use skyfort_wall_engine::{classify, generate, hitbox, render, silhouette};

#[test]
fn generation_is_deterministic() {
    let description = "xx  xxxx\nxxxxxxxx\n  xx";

    let first = generate(description).expect("valid description");
    let second = generate(description).expect("valid description");

    assert_eq!(first, second, "generation diverged between runs");
}

#[test]
fn wall_carries_one_raster_and_one_interval_list_per_band() {
    let wall = generate("xxxx\nxx\nx").expect("valid description");

    assert_eq!(wall.row_count(), 3);
    assert_eq!(wall.rows().len(), wall.hitbox_rows().len());
}

#[test]
fn solid_band_collides_across_all_its_columns() {
    let wall = generate("xxxx").expect("valid description");

    assert_eq!(wall.hitbox_rows(), &[vec![HitboxInterval::new(0, 0, 3)]]);
}

#[test]
fn gap_band_collides_as_two_separate_intervals() {
    let wall = generate("xx  xx").expect("valid description");

    assert_eq!(
        wall.hitbox_rows(),
        &[vec![
            HitboxInterval::new(0, 0, 1),
            HitboxInterval::new(0, 4, 5),
        ]]
    );
}

#[test]
fn blank_upper_band_draws_ledges_but_never_collides() {
    let wall = generate("xx\n  ").expect("valid description");

    assert_eq!(wall.row_count(), 2);
    assert!(!wall.rows()[1].is_empty(), "ledge band should draw");
    assert!(wall.hitbox_rows()[1].is_empty(), "ledge band must not collide");
}

#[test]
fn run_collapsing_never_changes_imagery_or_collision() {
    for description in ["xxxxxxxx", "xxxx  xxxx\nxxxxxxxxxx", "x\nxxxxxxxxxxxx"] {
        let wall = generate(description).expect("valid description");

        let normalized = silhouette::normalize(description).expect("valid description");
        let classified = classify::classify(&normalized);
        let unoptimized_rows = render::render_rows(&classified);
        let intervals = hitbox::extract(&classified);

        assert_eq!(wall.rows(), &unoptimized_rows[..], "{description:?}");
        assert_eq!(wall.hitbox_rows(), &intervals[..], "{description:?}");
    }
}

#[test]
fn too_tall_description_yields_no_wall() {
    let description = "x\n".repeat(MAX_WALL_ROWS + 2);

    let error = generate(&description).expect_err("over-tall wall must be rejected");

    assert_eq!(
        error,
        WallError::TooTall {
            rows: MAX_WALL_ROWS + 2,
            max: MAX_WALL_ROWS,
        }
    );
}

#[test]
fn unrecognized_characters_are_reported_with_their_position() {
    let error = generate("xx\n x?x").expect_err("'?' must be rejected");

    assert_eq!(
        error,
        WallError::UnrecognizedCharacter {
            character: '?',
            row: 1,
            column: 2,
        }
    );
}

#[test]
fn blank_description_generates_an_empty_wall() {
    let wall = generate("  \n\n").expect("blank input is an empty wall");

    assert!(wall.is_empty());
    assert_eq!(wall.row_count(), 0);
}

#[test]
fn every_band_raster_is_rectangular_and_trimmed_text() {
    let wall = generate("xx  xxxx\nxxxxxxxx").expect("valid description");

    for (band, raster) in wall.rows().iter().enumerate() {
        for line in raster.lines() {
            assert_eq!(
                line.chars().count(),
                raster.width(),
                "band {band} line width"
            );
        }
    }
}
