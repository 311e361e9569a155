#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Skyfort Run adapters.
//!
//! The wall engine produces resolution-independent character rasters; this
//! crate turns a [`DynamicWall`] into positioned sprites a backend can draw
//! without knowing anything about silhouettes or classification.

use anyhow::Result as AnyResult;
use glam::Vec2;
use skyfort_core::{DynamicWall, Raster};
use std::{error::Error, fmt};

/// One altitude band of a wall, placed in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct RowSprite {
    raster: Raster,
    position: Vec2,
    scale: f32,
    rotation: f32,
}

impl RowSprite {
    /// Character raster the backend should draw for this band.
    #[must_use]
    pub const fn raster(&self) -> &Raster {
        &self.raster
    }

    /// World-space position of the raster's top-left corner.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Uniform scale applied to the raster's character cells.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Rotation around the sprite position, in radians. Walls are laid out
    /// unrotated; backends that tilt entities still receive the field.
    #[must_use]
    pub const fn rotation(&self) -> f32 {
        self.rotation
    }
}

/// Fully laid-out wall ready for a rendering backend.
///
/// Bands keep their engine order but are positioned bottom-up: band 0 sits at
/// the wall origin and every further band is lifted by the row spacing, so
/// higher altitude draws higher on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct WallPresentation {
    sprites: Vec<RowSprite>,
}

impl WallPresentation {
    /// Lays out every band of a generated wall.
    ///
    /// `origin` is the world-space anchor of the lowest band, `row_spacing`
    /// the vertical distance between consecutive bands. Both `row_spacing`
    /// and `scale` must be positive; a degenerate layout would draw every
    /// band on top of band 0.
    pub fn from_wall(
        wall: &DynamicWall,
        origin: Vec2,
        row_spacing: f32,
        scale: f32,
    ) -> Result<Self, PresentationError> {
        if !(row_spacing > 0.0) {
            return Err(PresentationError::InvalidRowSpacing { row_spacing });
        }
        if !(scale > 0.0) {
            return Err(PresentationError::InvalidScale { scale });
        }

        let sprites = wall
            .rows()
            .iter()
            .enumerate()
            .map(|(band, raster)| RowSprite {
                raster: raster.clone(),
                position: Vec2::new(origin.x, origin.y - row_spacing * band as f32),
                scale,
                rotation: 0.0,
            })
            .collect();

        Ok(Self { sprites })
    }

    /// Positioned band sprites, lowest band first.
    #[must_use]
    pub fn sprites(&self) -> &[RowSprite] {
        &self.sprites
    }

    /// Reports whether the presentation contains no sprites at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Rendering backend capable of presenting Skyfort Run walls.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    fn run(self, presentation: WallPresentation) -> AnyResult<()>;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq)]
pub enum PresentationError {
    /// Row spacing must be positive so bands stack instead of overlapping.
    InvalidRowSpacing {
        /// Provided spacing that failed validation.
        row_spacing: f32,
    },
    /// Scale must be positive to avoid zero-sized or mirrored glyphs.
    InvalidScale {
        /// Provided scale that failed validation.
        scale: f32,
    },
}

impl fmt::Display for PresentationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRowSpacing { row_spacing } => {
                write!(f, "row_spacing must be positive (received {row_spacing})")
            }
            Self::InvalidScale { scale } => {
                write!(f, "scale must be positive (received {scale})")
            }
        }
    }
}

impl Error for PresentationError {}
