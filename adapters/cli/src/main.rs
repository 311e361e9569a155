#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates a wall and prints it.
//!
//! Intended for level authors: feed it a silhouette file and inspect the
//! composited bands and collision intervals the engine would hand the game.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use skyfort_core::DynamicWall;

const DEMO_WALL: &str = "\
xxxxxxxx    xx
xxxx
xx
xx";

/// Generates a Skyfort Run wall from a text silhouette and prints the result.
#[derive(Debug, Parser)]
#[command(name = "skyfort")]
struct Args {
    /// Path to a silhouette file of `x` and space characters; the built-in
    /// demo wall is used when omitted.
    description: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let description = match &args.description {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read wall description {}", path.display()))?,
        None => DEMO_WALL.to_string(),
    };

    let wall = skyfort_wall_engine::generate(&description)
        .context("wall description was rejected by the engine")?;

    print_wall(&wall);
    Ok(())
}

/// Prints bands top-down so the output matches the wall's on-screen shape.
fn print_wall(wall: &DynamicWall) {
    for band in (0..wall.row_count()).rev() {
        println!("band {band}:");
        for line in wall.rows()[band].lines() {
            println!("  {line}");
        }
        let intervals = &wall.hitbox_rows()[band];
        if intervals.is_empty() {
            println!("  (no collision)");
        } else {
            for interval in intervals {
                println!(
                    "  collides over columns {}..={}",
                    interval.start(),
                    interval.end()
                );
            }
        }
    }
}
