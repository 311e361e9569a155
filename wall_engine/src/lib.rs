//! Dynamic wall generation engine for Skyfort Run.
//!
//! A wall arrives as a text silhouette of `x` and space characters and leaves
//! as a [`DynamicWall`]: one composited character raster per altitude band
//! plus per-band collision intervals. The pipeline is pure and deterministic;
//! generating the same description twice yields bit-identical walls.
//!
//! Stages run in a fixed order: [`silhouette`] normalizes the description,
//! [`classify`] assigns a block symbol to every grid cell, [`hitbox`] reads
//! collision intervals off the classified grid, [`optimize`] collapses long
//! front runs for rendering only, and [`render`] composites each band with
//! the subimages from [`geometry`].

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

pub mod classify;
pub mod geometry;
pub mod hitbox;
pub mod optimize;
pub mod render;
pub mod silhouette;
pub mod superblock;

use skyfort_core::{DynamicWall, WallError};

/// Generates a complete wall from its text description.
///
/// Hitboxes are extracted before optimization, so collapsing front runs can
/// only ever affect how the wall is drawn, never where it collides. Errors
/// from normalization pass through unchanged; no partial wall is produced.
pub fn generate(description: &str) -> Result<DynamicWall, WallError> {
    let silhouette = silhouette::normalize(description)?;
    let classified = classify::classify(&silhouette);
    let hitboxes = hitbox::extract(&classified);
    let optimized = optimize::optimize(&classified);
    let rows = render::render_rows(&optimized);
    Ok(DynamicWall::from_parts(rows, hitboxes))
}
