//! Interior terrain: base fill plus random-walk blobs.

use tracing::debug;

use crate::params::BlobSpec;
use crate::rng::RandomSource;
use crate::terrain::Terrain;
use crate::tilemap::Tilemap;

/// Fill every interior cell with one terrain.
pub fn fill_interior(map: &mut Tilemap<Terrain>, terrain: Terrain) {
    for y in 1..map.height - 1 {
        for x in 1..map.width - 1 {
            map.set(x, y, terrain);
        }
    }
}

/// Paint a terrain blob with a bounded random walk.
///
/// The walk starts at a random interior cell and moves one cardinal step at
/// a time, clamped to the interior. Roads are never painted over.
/// Returns the number of tile writes (a cell visited twice counts twice).
pub fn paint_blob<R: RandomSource>(map: &mut Tilemap<Terrain>, blob: BlobSpec, rng: &mut R) -> usize {
    let max_x = map.interior_max_x();
    let max_y = map.interior_max_y();

    let mut x = rng.range_inclusive(1, max_x);
    let mut y = rng.range_inclusive(1, max_y);
    let mut painted = 0;

    for _ in 0..blob.steps {
        if !map.is_border(x, y) && !map.get(x, y).is_protected() {
            map.set(x, y, blob.terrain);
            painted += 1;
        }

        let (nx, ny) = match rng.below(4) {
            0 => (x + 1, y),
            1 => (x - 1, y),
            2 => (x, y + 1),
            _ => (x, y - 1),
        };

        // Clamp to interior; walks stick to the edge rather than wrap
        x = nx.clamp(1, max_x);
        y = ny.clamp(1, max_y);
    }

    debug!(terrain = blob.terrain.name(), steps = blob.steps, painted, "painted blob");

    painted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{seeded, ScriptedSource};

    fn walled(width: usize, height: usize) -> Tilemap<Terrain> {
        let mut map = Tilemap::new_with(width, height, Terrain::Wall);
        fill_interior(&mut map, Terrain::Clearing);
        map
    }

    #[test]
    fn test_fill_interior_leaves_border() {
        let map = walled(10, 6);
        for (x, y, tile) in map.iter() {
            if map.is_border(x, y) {
                assert_eq!(*tile, Terrain::Wall);
            } else {
                assert_eq!(*tile, Terrain::Clearing);
            }
        }
    }

    #[test]
    fn test_blob_stays_inside_border() {
        let mut map = walled(20, 8);
        let mut rng = seeded(11);
        let painted = paint_blob(&mut map, BlobSpec::new(Terrain::Water, 500), &mut rng);

        assert_eq!(painted, 500);
        for (x, y, tile) in map.iter() {
            if map.is_border(x, y) {
                assert_eq!(*tile, Terrain::Wall);
            }
        }
        assert!(map.iter().any(|(_, _, t)| *t == Terrain::Water));
    }

    #[test]
    fn test_blob_never_paints_roads() {
        let mut map = walled(12, 6);
        for x in 1..11 {
            map.set(x, 3, Terrain::Road);
        }

        let mut rng = seeded(5);
        paint_blob(&mut map, BlobSpec::new(Terrain::TallGrass, 400), &mut rng);

        for x in 1..11 {
            assert_eq!(*map.get(x, 3), Terrain::Road);
        }
    }

    #[test]
    fn test_walk_clamps_at_edge() {
        // Start at (1, 1), then keep stepping -x: the walk sticks to x = 1
        let mut map = walled(10, 5);
        let mut rng = ScriptedSource::new(vec![0, 0, 1, 1, 1, 1]);
        paint_blob(&mut map, BlobSpec::new(Terrain::Water, 4), &mut rng);

        assert_eq!(*map.get(1, 1), Terrain::Water);
        assert_eq!(*map.get(2, 1), Terrain::Clearing);
        assert_eq!(*map.get(0, 1), Terrain::Wall);
    }

    #[test]
    fn test_single_cell_interior() {
        let mut map = walled(3, 3);
        let mut rng = seeded(1);
        let painted = paint_blob(&mut map, BlobSpec::new(Terrain::Water, 50), &mut rng);

        assert_eq!(painted, 50);
        assert_eq!(*map.get(1, 1), Terrain::Water);
        assert_eq!(map.iter().filter(|(_, _, t)| **t == Terrain::Wall).count(), 8);
    }
}
