//! Tile map generation library
//!
//! Builds a single walled ASCII map tile with terrain patches, two crossing
//! roads and a pair of buildings. Re-exports modules for use by the binary
//! and tests.

pub mod ascii;
pub mod border;
pub mod buildings;
pub mod error;
pub mod generate;
pub mod params;
pub mod regions;
pub mod rng;
pub mod roads;
pub mod terrain;
pub mod tilemap;
pub mod verify;

pub use error::{MapGenError, MapGenResult};
pub use generate::{generate_from_seed, generate_map, GeneratedMap};
pub use params::MapGenParams;
