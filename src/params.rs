//! Map generation parameters and configuration

use crate::error::{MapGenError, MapGenResult};
use crate::terrain::Terrain;

/// Default map width in tiles
pub const DEFAULT_WIDTH: usize = 80;
/// Default map height in tiles
pub const DEFAULT_HEIGHT: usize = 21;

/// One random-walk terrain patch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlobSpec {
    /// Terrain written along the walk
    pub terrain: Terrain,
    /// Number of walk steps
    pub steps: usize,
}

impl BlobSpec {
    pub const fn new(terrain: Terrain, steps: usize) -> Self {
        Self { terrain, steps }
    }
}

/// Global map generation parameters
#[derive(Clone, Debug, PartialEq)]
pub struct MapGenParams {
    /// Map width including the border (default: 80)
    pub width: usize,

    /// Map height including the border (default: 21)
    pub height: usize,

    /// Terrain patches, painted in order. Later patches overwrite earlier ones.
    pub blobs: Vec<BlobSpec>,

    /// Chance (percent) that a road step drifts sideways.
    /// Split evenly between the two sideways directions.
    pub road_wiggle_percent: u32,

    /// Minimum distance of the intersection from the left/right edges (default: 10)
    pub intersection_margin_x: usize,

    /// Minimum distance of the intersection from the top/bottom edges (default: 5)
    pub intersection_margin_y: usize,

    /// Random road samples tried per building before giving up (default: 8000)
    pub building_attempts: u32,

    /// One building per symbol, placed in order
    pub buildings: Vec<char>,
}

impl Default for MapGenParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            blobs: vec![
                BlobSpec::new(Terrain::TallGrass, 260),
                BlobSpec::new(Terrain::TallGrass, 260),
                BlobSpec::new(Terrain::Water, 170),
            ],
            road_wiggle_percent: 20,
            intersection_margin_x: 10,
            intersection_margin_y: 5,
            building_attempts: 8000,
            buildings: vec!['C', 'M'],
        }
    }
}

impl MapGenParams {
    /// Default parameters on a different map size.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Check the parameters describe a map that can be generated.
    pub fn validate(&self) -> MapGenResult<()> {
        if self.width < 3 || self.height < 3 {
            return Err(MapGenError::TooSmall {
                width: self.width,
                height: self.height,
            });
        }

        if self.road_wiggle_percent > 100 {
            return Err(MapGenError::InvalidWiggle(self.road_wiggle_percent));
        }

        for blob in &self.blobs {
            if !matches!(blob.terrain, Terrain::Clearing | Terrain::TallGrass | Terrain::Water) {
                return Err(MapGenError::UnpaintableTerrain(blob.terrain));
            }
        }

        for &symbol in &self.buildings {
            if Terrain::RESERVED_GLYPHS.contains(&symbol) || !symbol.is_ascii_graphic() {
                return Err(MapGenError::ReservedSymbol(symbol));
            }
        }

        Ok(())
    }

    /// Upper bound on steps for a single road carve.
    ///
    /// A carve normally needs far fewer steps than this; the cap only matters
    /// when the random source keeps pushing the walk sideways.
    pub fn carve_step_budget(&self) -> usize {
        4 * self.width * self.height
    }
}
