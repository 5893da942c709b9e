//! Full map generation pipeline.
//!
//! Phases run in a fixed order against one exclusively-owned tile map, and
//! they draw from the random source in that same order:
//! 1. Border walls and the four exits
//! 2. Clearing fill, then each terrain blob in turn
//! 3. Intersection point
//! 4. Roads: top, bottom, left, right legs
//! 5. Buildings, one per configured symbol
//!
//! The draw order is what makes a seed reproduce the same map.

use tracing::{debug, info};

use crate::ascii::{calculate_terrain_stats, render_ascii_map};
use crate::border::{place_border_and_exits, Exits};
use crate::buildings::{place_building_near_road, Placement};
use crate::error::MapGenResult;
use crate::params::MapGenParams;
use crate::regions::{fill_interior, paint_blob};
use crate::rng::{seeded, RandomSource};
use crate::roads::{carve_road_network, pick_intersection, CarvedRoad};
use crate::terrain::Terrain;
use crate::tilemap::{Point, Tilemap};

/// A finished map plus everything the pipeline decided along the way
#[derive(Clone, Debug)]
pub struct GeneratedMap {
    /// Seed used, when generated from one
    pub seed: Option<u64>,
    pub tiles: Tilemap<Terrain>,
    pub exits: Exits,
    pub intersection: Point,
    /// The four road legs, in carve order
    pub roads: Vec<CarvedRoad>,
    /// One entry per requested building, in placement order
    pub buildings: Vec<Placement>,
    /// Tile writes made by each blob, in paint order
    pub blob_writes: Vec<usize>,
}

impl GeneratedMap {
    pub fn buildings_placed(&self) -> usize {
        self.buildings.iter().filter(|b| b.is_placed()).count()
    }

    /// True when every road leg reached its goal.
    pub fn roads_complete(&self) -> bool {
        self.roads.iter().all(|r| r.outcome.reached())
    }

    pub fn render(&self) -> String {
        render_ascii_map(&self.tiles)
    }
}

/// Generate a map with an explicit random source.
pub fn generate_map<R: RandomSource>(params: &MapGenParams, rng: &mut R) -> MapGenResult<GeneratedMap> {
    params.validate()?;

    let mut tiles: Tilemap<Terrain> = Tilemap::new(params.width, params.height);

    debug!(width = params.width, height = params.height, "placing border");
    let exits = place_border_and_exits(&mut tiles, rng);

    fill_interior(&mut tiles, Terrain::Clearing);
    let blob_writes: Vec<usize> = params
        .blobs
        .iter()
        .map(|&blob| paint_blob(&mut tiles, blob, rng))
        .collect();

    let intersection = pick_intersection(
        &tiles,
        params.intersection_margin_x,
        params.intersection_margin_y,
        rng,
    );
    debug!(?intersection, "picked intersection");

    let roads = carve_road_network(&mut tiles, &exits, intersection, params, rng);

    let buildings: Vec<Placement> = params
        .buildings
        .iter()
        .map(|&symbol| place_building_near_road(&mut tiles, symbol, params.building_attempts, rng))
        .collect();

    let map = GeneratedMap {
        seed: None,
        tiles,
        exits,
        intersection,
        roads,
        buildings,
        blob_writes,
    };

    let stats = calculate_terrain_stats(&map.tiles);
    info!(
        roads = stats.get(&Terrain::Road).copied().unwrap_or(0),
        tall_grass = stats.get(&Terrain::TallGrass).copied().unwrap_or(0),
        water = stats.get(&Terrain::Water).copied().unwrap_or(0),
        buildings = map.buildings_placed(),
        roads_complete = map.roads_complete(),
        "map generated"
    );

    Ok(map)
}

/// Generate a map from a seed using `ChaCha8Rng`.
pub fn generate_from_seed(params: &MapGenParams, seed: u64) -> MapGenResult<GeneratedMap> {
    let mut rng = seeded(seed);
    let mut map = generate_map(params, &mut rng)?;
    map.seed = Some(seed);
    Ok(map)
}
