//! Error types for map generation.

use thiserror::Error;

use crate::terrain::Terrain;

/// Configuration problems detected before any tile is written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapGenError {
    /// The map needs at least one interior cell inside its border
    #[error("map must be at least 3x3 to have an interior, got {width}x{height}")]
    TooSmall {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Wiggle chance is a percentage
    #[error("road wiggle chance must be 0-100 percent, got {0}")]
    InvalidWiggle(u32),
    /// Blobs may only paint open ground, grass or water
    #[error("blob terrain {0:?} cannot be painted")]
    UnpaintableTerrain(Terrain),
    /// A building glyph collides with the terrain alphabet
    #[error("building symbol {0:?} is reserved or not printable")]
    ReservedSymbol(char),
}

/// Result type for map generation.
pub type MapGenResult<T> = Result<T, MapGenError>;
