//! Neighborhood move generation.
//!
//! A neighbor is the current tour with one randomized local move applied:
//! relocating one element, exchanging two, or reversing a sub-range. Moves
//! draw two distinct interior positions, so the leading and trailing depot
//! markers are never touched; interior separators are fair game — moving
//! them is what reshapes the route structure.

use crate::instance::Instance;
use crate::tour::{self, Tour};
use rand::Rng;

/// The three local move operators, drawn uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Remove the element at `i` and reinsert it relative to `j`.
    Insert,
    /// Exchange the elements at `i` and `j`.
    Swap,
    /// Reverse the closed sub-range between `i` and `j`.
    Reversal,
}

impl Move {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..3) {
            0 => Move::Insert,
            1 => Move::Swap,
            _ => Move::Reversal,
        }
    }

    /// Applies the move to `stops` in place. `i` and `j` must be distinct
    /// in-bounds positions.
    pub(crate) fn apply(self, stops: &mut Vec<usize>, i: usize, j: usize) {
        match self {
            Move::Swap => stops.swap(i, j),
            Move::Reversal => {
                let (lo, hi) = if i < j { (i, j) } else { (j, i) };
                stops[lo..=hi].reverse();
            }
            Move::Insert => {
                let moved = stops.remove(i);
                let at = if j < i { j + 1 } else { j };
                stops.insert(at, moved);
            }
        }
    }
}

/// A candidate neighbor and whether a capacity-feasible one was found.
///
/// When `feasible` is `false` the tour is the last (infeasible) attempt;
/// callers must not accept it as the new current tour.
#[derive(Debug, Clone)]
pub struct Neighbor {
    pub tour: Tour,
    pub feasible: bool,
}

/// Generates a feasible neighbor of `current`, retrying a fresh operator
/// and position pair up to `attempts` times.
///
/// Tours too short to have two distinct interior positions (fewer than
/// four stops) have no neighborhood; the current tour is returned
/// unmodified with `feasible = false`.
pub fn generate<R: Rng>(
    instance: &Instance,
    current: &Tour,
    attempts: usize,
    rng: &mut R,
) -> Neighbor {
    let len = current.len();
    if len < 4 {
        return Neighbor {
            tour: current.clone(),
            feasible: false,
        };
    }

    let mut last = current.clone();
    for _ in 0..attempts {
        let mut stops = current.stops().to_vec();
        let op = Move::sample(rng);
        let i = rng.random_range(1..=len - 2);
        let j = loop {
            let j = rng.random_range(1..=len - 2);
            if j != i {
                break j;
            }
        };
        op.apply(&mut stops, i, j);

        let candidate = Tour::new(stops);
        if tour::is_feasible(&candidate, instance) {
            return Neighbor {
                tour: candidate,
                feasible: true,
            };
        }
        last = candidate;
    }

    Neighbor {
        tour: last,
        feasible: false,
    }
}
