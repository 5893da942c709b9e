//! Building placement next to the road network.
//!
//! Buildings are 2x2 blocks. A placement samples random road tiles and tries
//! a fixed ring of anchors around each one, so a building always ends up one
//! tile off a road with a cleared yard around it.

use tracing::{debug, warn};

use crate::rng::RandomSource;
use crate::terrain::Terrain;
use crate::tilemap::{Point, Tilemap};

/// Side length of a building footprint
pub const FOOTPRINT: usize = 2;

/// Top-left anchor offsets tried around a road tile, in order.
const ANCHOR_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (1, -1),
    (-2, 0),
    (1, 0),
    (-1, -2),
    (0, -2),
    (-1, 1),
    (0, 1),
];

/// Result of trying to place one building
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Footprint stamped with its top-left corner at `at`
    Placed { symbol: char, at: Point, attempts: u32 },
    /// Every attempt was used without finding a footprint
    Failed { symbol: char, attempts: u32 },
}

impl Placement {
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }

    pub fn symbol(&self) -> char {
        match *self {
            Placement::Placed { symbol, .. } | Placement::Failed { symbol, .. } => symbol,
        }
    }

    /// Anchor of the placed footprint, if any.
    pub fn anchor(&self) -> Option<Point> {
        match *self {
            Placement::Placed { at, .. } => Some(at),
            Placement::Failed { .. } => None,
        }
    }
}

/// Whether a 2x2 footprint anchored at `(x, y)` fits.
///
/// The whole footprint must be interior and free of walls, roads and other
/// buildings.
pub fn can_place_footprint(map: &Tilemap<Terrain>, x: isize, y: isize) -> bool {
    let size = FOOTPRINT as isize;
    if x < 1 || y < 1 || x + size - 1 > map.interior_max_x() as isize || y + size - 1 > map.interior_max_y() as isize {
        return false;
    }

    let (x, y) = (x as usize, y as usize);
    (y..y + FOOTPRINT).all(|fy| {
        (x..x + FOOTPRINT).all(|fx| {
            let tile = map.get(fx, fy);
            !tile.is_wall() && !tile.is_protected()
        })
    })
}

/// Clear the footprint and a 1-tile margin around it to clearing.
///
/// The yard is clipped to the interior and keeps any road or building
/// already on it.
fn clear_yard(map: &mut Tilemap<Terrain>, anchor: Point) {
    let x0 = anchor.x.saturating_sub(1).max(1);
    let y0 = anchor.y.saturating_sub(1).max(1);
    let x1 = (anchor.x + FOOTPRINT).min(map.interior_max_x());
    let y1 = (anchor.y + FOOTPRINT).min(map.interior_max_y());

    for y in y0..=y1 {
        for x in x0..=x1 {
            if !map.get(x, y).is_protected() {
                map.set(x, y, Terrain::Clearing);
            }
        }
    }
}

fn stamp(map: &mut Tilemap<Terrain>, anchor: Point, symbol: char) {
    for y in anchor.y..anchor.y + FOOTPRINT {
        for x in anchor.x..anchor.x + FOOTPRINT {
            map.set(x, y, Terrain::Building(symbol));
        }
    }
}

/// Place one building beside a road.
///
/// Each attempt samples an interior tile (x, then y); non-road samples are
/// skipped. From a road sample the anchors are tried in a fixed order and
/// the first footprint that fits wins.
pub fn place_building_near_road<R: RandomSource>(
    map: &mut Tilemap<Terrain>,
    symbol: char,
    max_attempts: u32,
    rng: &mut R,
) -> Placement {
    let max_x = map.interior_max_x();
    let max_y = map.interior_max_y();

    for attempt in 1..=max_attempts {
        let rx = rng.range_inclusive(1, max_x);
        let ry = rng.range_inclusive(1, max_y);
        if !map.get(rx, ry).is_road() {
            continue;
        }

        let anchor = ANCHOR_OFFSETS
            .iter()
            .map(|&(ox, oy)| (rx as isize + ox, ry as isize + oy))
            .find(|&(x, y)| can_place_footprint(map, x, y));

        if let Some((x, y)) = anchor {
            let at = Point::new(x as usize, y as usize);
            clear_yard(map, at);
            stamp(map, at, symbol);
            debug!(%symbol, ?at, attempt, "placed building");
            return Placement::Placed { symbol, at, attempts: attempt };
        }
    }

    warn!(%symbol, attempts = max_attempts, "no room for building next to a road");
    Placement::Failed { symbol, attempts: max_attempts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::fill_interior;
    use crate::rng::{seeded, ScriptedSource};

    fn with_road_row(width: usize, height: usize, row: usize) -> Tilemap<Terrain> {
        let mut map = Tilemap::new_with(width, height, Terrain::Wall);
        fill_interior(&mut map, Terrain::TallGrass);
        for x in 1..width - 1 {
            map.set(x, row, Terrain::Road);
        }
        map
    }

    #[test]
    fn test_footprint_rules() {
        let map = with_road_row(10, 8, 4);

        assert!(can_place_footprint(&map, 1, 1));
        assert!(!can_place_footprint(&map, 0, 1));
        assert!(!can_place_footprint(&map, 8, 1));
        assert!(!can_place_footprint(&map, 2, 3));
        assert!(can_place_footprint(&map, 7, 5));
        assert!(!can_place_footprint(&map, 7, 6));
    }

    #[test]
    fn test_first_anchor_wins() {
        // Sample (5, 4). The first four anchors all overlap the road row;
        // (-1, -2) gives (4, 2), which fits.
        let mut map = with_road_row(10, 8, 4);
        let mut rng = ScriptedSource::new(vec![4, 3]);

        let placement = place_building_near_road(&mut map, 'C', 10, &mut rng);

        assert_eq!(
            placement,
            Placement::Placed { symbol: 'C', at: Point::new(4, 2), attempts: 1 }
        );
        for (x, y) in [(4, 2), (5, 2), (4, 3), (5, 3)] {
            assert_eq!(*map.get(x, y), Terrain::Building('C'));
        }
    }

    #[test]
    fn test_yard_is_cleared_but_roads_kept() {
        let mut map = with_road_row(10, 8, 4);
        let mut rng = ScriptedSource::new(vec![4, 3]);
        place_building_near_road(&mut map, 'C', 10, &mut rng);

        for y in 1..=4 {
            for x in 3..=6 {
                let tile = *map.get(x, y);
                match y {
                    4 => assert_eq!(tile, Terrain::Road),
                    2 | 3 if (4..=5).contains(&x) => assert_eq!(tile, Terrain::Building('C')),
                    _ => assert_eq!(tile, Terrain::Clearing),
                }
            }
        }
        assert_eq!(*map.get(7, 2), Terrain::TallGrass);
    }

    #[test]
    fn test_gives_up_without_roads() {
        let mut map = Tilemap::new_with(10, 8, Terrain::Wall);
        fill_interior(&mut map, Terrain::Clearing);

        let placement = place_building_near_road(&mut map, 'M', 50, &mut seeded(1));

        assert_eq!(placement, Placement::Failed { symbol: 'M', attempts: 50 });
        assert!(map.iter().all(|(_, _, t)| !t.is_building()));
    }

    #[test]
    fn test_buildings_do_not_overlap() {
        let mut map = with_road_row(30, 12, 6);
        let mut rng = seeded(9);

        let first = place_building_near_road(&mut map, 'C', 8000, &mut rng);
        let second = place_building_near_road(&mut map, 'M', 8000, &mut rng);

        assert!(first.is_placed() && second.is_placed());
        let count = |c: char| map.iter().filter(|(_, _, t)| **t == Terrain::Building(c)).count();
        assert_eq!(count('C'), 4);
        assert_eq!(count('M'), 4);
    }

    #[test]
    fn test_single_cell_interior_gives_up() {
        let mut map = Tilemap::new_with(3, 3, Terrain::Wall);
        map.set(1, 1, Terrain::Road);

        let placement = place_building_near_road(&mut map, 'C', 8000, &mut seeded(2));

        assert_eq!(placement, Placement::Failed { symbol: 'C', attempts: 8000 });
    }
}
