//! Map border and edge exits.
//!
//! The border is the only place walls come from. Each side gets exactly one
//! exit, never on a corner, and exits are roads from the moment they exist.

use tracing::debug;

use crate::rng::RandomSource;
use crate::terrain::Terrain;
use crate::tilemap::{Point, Tilemap};

/// The four edge exits of a map
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exits {
    pub top: Point,
    pub bottom: Point,
    pub left: Point,
    pub right: Point,
}

impl Exits {
    /// Exits in top, bottom, left, right order.
    pub fn all(&self) -> [Point; 4] {
        [self.top, self.bottom, self.left, self.right]
    }

    pub fn contains(&self, p: Point) -> bool {
        self.all().contains(&p)
    }
}

/// Wall off the border and open one exit per side.
///
/// Exit coordinates are drawn top, bottom, left, right.
pub fn place_border_and_exits<R: RandomSource>(map: &mut Tilemap<Terrain>, rng: &mut R) -> Exits {
    let width = map.width;
    let height = map.height;

    for y in 0..height {
        for x in 0..width {
            if map.is_border(x, y) {
                map.set(x, y, Terrain::Wall);
            }
        }
    }

    let exits = Exits {
        top: Point::new(rng.range_inclusive(1, width - 2), 0),
        bottom: Point::new(rng.range_inclusive(1, width - 2), height - 1),
        left: Point::new(0, rng.range_inclusive(1, height - 2)),
        right: Point::new(width - 1, rng.range_inclusive(1, height - 2)),
    };

    for exit in exits.all() {
        map.set_at(exit, Terrain::Road);
    }

    debug!(
        top = exits.top.x,
        bottom = exits.bottom.x,
        left = exits.left.y,
        right = exits.right.y,
        "placed border exits"
    );

    exits
}
