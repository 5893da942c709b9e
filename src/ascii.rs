//! ASCII rendering of tile maps
//!
//! One character per tile, one line per row, nothing else. This is the
//! program's only output format.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::terrain::Terrain;
use crate::tilemap::Tilemap;

/// Get ASCII character for a terrain tile
pub fn terrain_char(terrain: &Terrain) -> char {
    match terrain {
        Terrain::Unset => ' ',
        Terrain::Wall => '%',
        Terrain::Road => '#',
        Terrain::Clearing => '.',
        Terrain::TallGrass => ':',
        Terrain::Water => '~',
        Terrain::Building(symbol) => *symbol,
    }
}

/// Render a map to ASCII string
pub fn render_ascii_map(map: &Tilemap<Terrain>) -> String {
    let mut result = String::with_capacity((map.width + 1) * map.height);

    for row in map.rows() {
        result.extend(row.iter().map(terrain_char));
        result.push('\n');
    }

    result
}

/// Write the rendered map to any writer (stdout in the CLI).
pub fn write_ascii_map<W: Write>(map: &Tilemap<Terrain>, out: &mut W) -> io::Result<()> {
    out.write_all(render_ascii_map(map).as_bytes())?;
    out.flush()
}

/// Count tiles of each terrain
pub fn calculate_terrain_stats(map: &Tilemap<Terrain>) -> HashMap<Terrain, usize> {
    let mut stats = HashMap::new();
    for (_, _, &terrain) in map.iter() {
        *stats.entry(terrain).or_insert(0) += 1;
    }
    stats
}
