//! Road carving between exits and the central intersection.
//!
//! Roads are carved with a directed walk: every step heads toward the goal
//! along the axis with the larger remaining distance, with an occasional
//! sideways drift so roads don't come out ruler-straight. The walk may only
//! touch the border at its goal or at cells that are already road, so the
//! only openings in the wall stay the four exits.

use tracing::{debug, warn};

use crate::border::Exits;
use crate::params::MapGenParams;
use crate::rng::RandomSource;
use crate::terrain::Terrain;
use crate::tilemap::{Point, Tilemap};

/// How a carve ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarveOutcome {
    /// The walk arrived at its goal
    Reached { steps: usize },
    /// No legal move was left (or the step budget ran out) before the goal
    Stalled { at: Point, steps: usize },
}

impl CarveOutcome {
    pub fn reached(&self) -> bool {
        matches!(self, CarveOutcome::Reached { .. })
    }

    pub fn steps(&self) -> usize {
        match *self {
            CarveOutcome::Reached { steps } | CarveOutcome::Stalled { steps, .. } => steps,
        }
    }
}

/// One carved road and how it ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarvedRoad {
    pub start: Point,
    pub goal: Point,
    pub outcome: CarveOutcome,
}

/// Whether a road may be extended onto `(x, y)`.
fn can_enter(map: &Tilemap<Terrain>, x: isize, y: isize, goal: Point) -> Option<Point> {
    let tile = map.get_signed(x, y)?;
    let p = Point::new(x as usize, y as usize);
    if map.is_border(p.x, p.y) && p != goal && !tile.is_road() {
        return None;
    }
    Some(p)
}

/// Whether a road may widen onto `(x, y)` without touching an intact wall.
fn can_pave(map: &Tilemap<Terrain>, x: isize, y: isize) -> bool {
    match map.get_signed(x, y) {
        Some(tile) => tile.is_road() || !map.is_border(x as usize, y as usize),
        None => false,
    }
}

/// Carve a road from `start` to `goal`.
///
/// Each step rolls once against `wiggle_percent`; the lower half of the
/// range drifts the step by -1 on the secondary axis, the upper half by +1.
/// A drift that would leave the map or break a wall falls back to the
/// straight move, then to a straight move on the secondary axis. A drifted
/// (diagonal) step also paves one of the two elbow cells so consecutive road
/// cells stay 4-connected.
pub fn carve_path<R: RandomSource>(
    map: &mut Tilemap<Terrain>,
    start: Point,
    goal: Point,
    wiggle_percent: u32,
    step_budget: usize,
    rng: &mut R,
) -> CarveOutcome {
    let half_wiggle = wiggle_percent / 2;
    let mut pos = start;
    let mut steps = 0;
    let mut stalled = false;

    while pos != goal {
        if steps >= step_budget {
            stalled = true;
            break;
        }

        map.set_at(pos, Terrain::Road);

        let dx = goal.x as isize - pos.x as isize;
        let dy = goal.y as isize - pos.y as isize;

        // Ties go to the y axis
        let x_dominant = dx.abs() > dy.abs();
        let primary = if x_dominant { (dx.signum(), 0) } else { (0, dy.signum()) };
        let corrective = if x_dominant { (0, dy.signum()) } else { (dx.signum(), 0) };

        let roll = rng.below(100);
        let drift = if roll < half_wiggle {
            -1
        } else if roll < wiggle_percent {
            1
        } else {
            0
        };
        let wiggled = if x_dominant {
            (primary.0, drift)
        } else {
            (drift, primary.1)
        };

        let mut moves = Vec::with_capacity(3);
        if drift != 0 {
            moves.push(wiggled);
        }
        moves.push(primary);
        if corrective != (0, 0) {
            moves.push(corrective);
        }

        let x = pos.x as isize;
        let y = pos.y as isize;
        let next = moves
            .into_iter()
            .find_map(|(mx, my)| can_enter(map, x + mx, y + my, goal).map(|p| (p, mx, my)));

        let Some((next, mx, my)) = next else {
            stalled = true;
            break;
        };

        if mx != 0 && my != 0 {
            // Pave the elbow along the primary axis when possible
            let elbows = if x_dominant {
                [(x + mx, y), (x, y + my)]
            } else {
                [(x, y + my), (x + mx, y)]
            };
            if let Some(&(ex, ey)) = elbows.iter().find(|&&(ex, ey)| can_pave(map, ex, ey)) {
                map.set(ex as usize, ey as usize, Terrain::Road);
            }
        }

        pos = next;
        steps += 1;
    }

    map.set_at(goal, Terrain::Road);

    if stalled {
        warn!(
            from = ?start,
            to = ?goal,
            at = ?pos,
            steps,
            "road carve stalled before reaching its goal"
        );
        CarveOutcome::Stalled { at: pos, steps }
    } else {
        CarveOutcome::Reached { steps }
    }
}

/// Inclusive coordinate range for the intersection on one axis.
///
/// Falls back to the full interior when the margin leaves no room.
fn intersection_range(len: usize, margin: usize) -> (usize, usize) {
    let hi = len.checked_sub(margin + 1);
    match hi {
        Some(hi) if margin >= 1 && margin <= hi => (margin, hi),
        _ => (1, len - 2),
    }
}

/// Pick the interior point where all four roads meet. Draws x, then y.
pub fn pick_intersection<R: RandomSource>(
    map: &Tilemap<Terrain>,
    margin_x: usize,
    margin_y: usize,
    rng: &mut R,
) -> Point {
    let (lo_x, hi_x) = intersection_range(map.width, margin_x);
    let (lo_y, hi_y) = intersection_range(map.height, margin_y);
    let x = rng.range_inclusive(lo_x, hi_x);
    let y = rng.range_inclusive(lo_y, hi_y);
    Point::new(x, y)
}

/// Carve the two crossing roads: top to bottom and left to right, both
/// through `intersection`.
pub fn carve_road_network<R: RandomSource>(
    map: &mut Tilemap<Terrain>,
    exits: &Exits,
    intersection: Point,
    params: &MapGenParams,
    rng: &mut R,
) -> Vec<CarvedRoad> {
    let legs = [
        (exits.top, intersection),
        (intersection, exits.bottom),
        (exits.left, intersection),
        (intersection, exits.right),
    ];

    let budget = params.carve_step_budget();
    legs.into_iter()
        .map(|(start, goal)| {
            let outcome = carve_path(map, start, goal, params.road_wiggle_percent, budget, rng);
            debug!(?start, ?goal, steps = outcome.steps(), reached = outcome.reached(), "carved road");
            CarvedRoad { start, goal, outcome }
        })
        .collect()
}
