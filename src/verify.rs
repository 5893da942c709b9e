//! Verification of generated maps.
//!
//! Checks a finished map against the guarantees the generator makes. The
//! generator itself never fails on a valid configuration, so this is where a
//! skipped building or a stalled road becomes visible.
//!
//! # Verification Categories
//!
//! - **Border Integrity**: every border cell is wall except the four exits
//! - **Exit Connectivity**: all exits and the intersection share one road network
//! - **Building Placement**: each placed building is an intact 2x2 block with a clear yard
//! - **Building Count**: every requested building was placed
//! - **Terrain Coverage**: no unset tiles, and both grass and water survived
//! - **Road Completion**: every road leg reached its goal

use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::ascii::calculate_terrain_stats;
use crate::border::Exits;
use crate::buildings::{Placement, FOOTPRINT};
use crate::generate::GeneratedMap;
use crate::roads::CarvedRoad;
use crate::terrain::Terrain;
use crate::tilemap::{Point, Tilemap};

/// Category of verification check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerifyCategory {
    BorderIntegrity,
    ExitConnectivity,
    BuildingPlacement,
    BuildingCount,
    TerrainCoverage,
    RoadCompletion,
}

impl fmt::Display for VerifyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyCategory::BorderIntegrity => write!(f, "Border Integrity"),
            VerifyCategory::ExitConnectivity => write!(f, "Exit Connectivity"),
            VerifyCategory::BuildingPlacement => write!(f, "Building Placement"),
            VerifyCategory::BuildingCount => write!(f, "Building Count"),
            VerifyCategory::TerrainCoverage => write!(f, "Terrain Coverage"),
            VerifyCategory::RoadCompletion => write!(f, "Road Completion"),
        }
    }
}

/// Result of a single verification check
#[derive(Clone, Debug)]
pub struct VerifyResult {
    /// Whether this check passed
    pub passed: bool,
    /// Category of the check
    pub category: VerifyCategory,
    /// What was found (first problem on failure)
    pub message: String,
}

impl VerifyResult {
    fn pass(category: VerifyCategory, message: impl Into<String>) -> Self {
        Self { passed: true, category, message: message.into() }
    }

    fn fail(category: VerifyCategory, message: impl Into<String>) -> Self {
        Self { passed: false, category, message: message.into() }
    }
}

/// All check results for one map
#[derive(Clone, Debug, Default)]
pub struct VerifyReport {
    pub results: Vec<VerifyResult>,
}

impl VerifyReport {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Whether every check in `category` passed.
    pub fn passed(&self, category: VerifyCategory) -> bool {
        self.results
            .iter()
            .filter(|r| r.category == category)
            .all(|r| r.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &VerifyResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            writeln!(f, "[{}] {}: {}", status, r.category, r.message)?;
        }
        Ok(())
    }
}

/// Every road tile reachable from `start` under 4-adjacency.
pub fn road_component(map: &Tilemap<Terrain>, start: Point) -> HashSet<(usize, usize)> {
    let mut seen = HashSet::new();
    if !map.get_at(start).is_road() {
        return seen;
    }

    let mut queue = VecDeque::new();
    seen.insert((start.x, start.y));
    queue.push_back((start.x, start.y));

    while let Some((x, y)) = queue.pop_front() {
        for (nx, ny) in map.neighbors(x, y) {
            if map.get(nx, ny).is_road() && seen.insert((nx, ny)) {
                queue.push_back((nx, ny));
            }
        }
    }

    seen
}

/// Whether a road path joins `a` and `b`.
pub fn roads_connected(map: &Tilemap<Terrain>, a: Point, b: Point) -> bool {
    road_component(map, a).contains(&(b.x, b.y))
}

/// Border cells must be wall, except the exits which must be road.
pub fn check_border(map: &Tilemap<Terrain>, exits: &Exits) -> VerifyResult {
    let category = VerifyCategory::BorderIntegrity;

    for exit in exits.all() {
        let on_corner = (exit.x == 0 || exit.x == map.width - 1) && (exit.y == 0 || exit.y == map.height - 1);
        if !map.is_border(exit.x, exit.y) || on_corner {
            return VerifyResult::fail(category, format!("exit {:?} is not a side cell", exit));
        }
    }

    for (x, y, tile) in map.iter() {
        if !map.is_border(x, y) {
            continue;
        }
        let expected = if exits.contains(Point::new(x, y)) { Terrain::Road } else { Terrain::Wall };
        if *tile != expected {
            return VerifyResult::fail(
                category,
                format!("border ({}, {}) is {} instead of {}", x, y, tile.name(), expected.name()),
            );
        }
    }

    VerifyResult::pass(category, "wall intact with four exits")
}

/// All exits and the intersection must sit in one road network.
pub fn check_connectivity(map: &Tilemap<Terrain>, exits: &Exits, intersection: Point) -> VerifyResult {
    let category = VerifyCategory::ExitConnectivity;
    let network = road_component(map, exits.top);

    for p in exits.all().into_iter().chain(std::iter::once(intersection)) {
        if !network.contains(&(p.x, p.y)) {
            return VerifyResult::fail(category, format!("{:?} is not reachable by road from the top exit", p));
        }
    }

    VerifyResult::pass(category, format!("{} road tiles join all exits", network.len()))
}

/// Placed buildings must be intact 2x2 interior blocks with a clear yard.
pub fn check_buildings(map: &Tilemap<Terrain>, placements: &[Placement]) -> VerifyResult {
    let category = VerifyCategory::BuildingPlacement;

    for placement in placements {
        let Placement::Placed { symbol, at, .. } = *placement else {
            continue;
        };

        for y in at.y..at.y + FOOTPRINT {
            for x in at.x..at.x + FOOTPRINT {
                if !map.is_interior(x, y) || *map.get(x, y) != Terrain::Building(symbol) {
                    return VerifyResult::fail(category, format!("building {} broken at ({}, {})", symbol, x, y));
                }
            }
        }

        // Yard, clipped to the interior
        let x0 = at.x.saturating_sub(1).max(1);
        let y0 = at.y.saturating_sub(1).max(1);
        let x1 = (at.x + FOOTPRINT).min(map.interior_max_x());
        let y1 = (at.y + FOOTPRINT).min(map.interior_max_y());
        for y in y0..=y1 {
            for x in x0..=x1 {
                let tile = map.get(x, y);
                if !matches!(tile, Terrain::Clearing | Terrain::Road | Terrain::Building(_)) {
                    return VerifyResult::fail(
                        category,
                        format!("building {} yard has {} at ({}, {})", symbol, tile.name(), x, y),
                    );
                }
            }
        }
    }

    VerifyResult::pass(category, "all placed buildings intact")
}

/// Every requested building should have been placed.
pub fn check_building_count(placements: &[Placement]) -> VerifyResult {
    let category = VerifyCategory::BuildingCount;
    let placed = placements.iter().filter(|p| p.is_placed()).count();
    let message = format!("{} of {} buildings placed", placed, placements.len());

    if placed == placements.len() {
        VerifyResult::pass(category, message)
    } else {
        VerifyResult::fail(category, message)
    }
}

/// No tile may be left unset, and both grass and water must remain.
pub fn check_coverage(map: &Tilemap<Terrain>) -> VerifyResult {
    let category = VerifyCategory::TerrainCoverage;
    let stats = calculate_terrain_stats(map);
    let count = |t: Terrain| stats.get(&t).copied().unwrap_or(0);

    if count(Terrain::Unset) > 0 {
        return VerifyResult::fail(category, format!("{} tiles left unset", count(Terrain::Unset)));
    }

    let grass = count(Terrain::TallGrass);
    let water = count(Terrain::Water);
    let message = format!("{} tall grass, {} water", grass, water);
    if grass == 0 || water == 0 {
        VerifyResult::fail(category, message)
    } else {
        VerifyResult::pass(category, message)
    }
}

/// Every road leg must have reached its goal.
pub fn check_roads(roads: &[CarvedRoad]) -> VerifyResult {
    let category = VerifyCategory::RoadCompletion;

    match roads.iter().find(|r| !r.outcome.reached()) {
        Some(road) => VerifyResult::fail(
            category,
            format!("road {:?} -> {:?} ended early: {:?}", road.start, road.goal, road.outcome),
        ),
        None => VerifyResult::pass(category, format!("{} roads reached their goals", roads.len())),
    }
}

/// Run every check against a generated map.
pub fn verify_map(map: &GeneratedMap) -> VerifyReport {
    VerifyReport {
        results: vec![
            check_border(&map.tiles, &map.exits),
            check_connectivity(&map.tiles, &map.exits, map.intersection),
            check_buildings(&map.tiles, &map.buildings),
            check_building_count(&map.buildings),
            check_coverage(&map.tiles),
            check_roads(&map.roads),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::fill_interior;
    use crate::roads::CarveOutcome;

    fn sample() -> (Tilemap<Terrain>, Exits) {
        let mut map = Tilemap::new_with(8, 6, Terrain::Wall);
        fill_interior(&mut map, Terrain::Clearing);
        let exits = Exits {
            top: Point::new(3, 0),
            bottom: Point::new(3, 5),
            left: Point::new(0, 2),
            right: Point::new(7, 2),
        };
        for exit in exits.all() {
            map.set_at(exit, Terrain::Road);
        }
        (map, exits)
    }

    #[test]
    fn test_border_check_catches_breach() {
        let (mut map, exits) = sample();
        assert!(check_border(&map, &exits).passed);

        map.set(5, 0, Terrain::Road);
        let result = check_border(&map, &exits);
        assert!(!result.passed);
        assert!(result.message.contains("(5, 0)"));
    }

    #[test]
    fn test_connectivity_check() {
        let (mut map, exits) = sample();
        let center = Point::new(3, 2);
        assert!(!check_connectivity(&map, &exits, center).passed);

        for y in 1..5 {
            map.set(3, y, Terrain::Road);
        }
        for x in 1..7 {
            map.set(x, 2, Terrain::Road);
        }
        assert!(check_connectivity(&map, &exits, center).passed);
        assert!(roads_connected(&map, exits.left, exits.bottom));
    }

    #[test]
    fn test_diagonal_roads_are_not_connected() {
        let (mut map, _) = sample();
        map.set(2, 2, Terrain::Road);
        map.set(3, 3, Terrain::Road);
        assert!(!roads_connected(&map, Point::new(2, 2), Point::new(3, 3)));
    }

    #[test]
    fn test_building_check_catches_grass_in_yard() {
        let (mut map, _) = sample();
        for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            map.set(x, y, Terrain::Building('C'));
        }
        let placed = [Placement::Placed { symbol: 'C', at: Point::new(2, 2), attempts: 1 }];
        assert!(check_buildings(&map, &placed).passed);

        map.set(4, 4, Terrain::TallGrass);
        assert!(!check_buildings(&map, &placed).passed);
    }

    #[test]
    fn test_building_count_reports_failures() {
        let placements = [
            Placement::Placed { symbol: 'C', at: Point::new(2, 2), attempts: 3 },
            Placement::Failed { symbol: 'M', attempts: 8000 },
        ];
        let result = check_building_count(&placements);
        assert!(!result.passed);
        assert_eq!(result.message, "1 of 2 buildings placed");
    }

    #[test]
    fn test_coverage_check() {
        let (mut map, _) = sample();
        assert!(!check_coverage(&map).passed);

        map.set(1, 1, Terrain::TallGrass);
        map.set(6, 4, Terrain::Water);
        assert!(check_coverage(&map).passed);

        map.set(1, 4, Terrain::Unset);
        assert!(!check_coverage(&map).passed);
    }

    #[test]
    fn test_road_check_reports_stall() {
        let stalled = CarvedRoad {
            start: Point::new(1, 0),
            goal: Point::new(4, 4),
            outcome: CarveOutcome::Stalled { at: Point::new(2, 2), steps: 9 },
        };
        assert!(!check_roads(&[stalled]).passed);
    }
}
