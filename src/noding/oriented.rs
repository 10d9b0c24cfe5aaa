//! Orientation-independent comparison of coordinate sequences.

use std::cmp::Ordering;

use crate::math::{compare_coords, Coord};

/// A coordinate sequence compared in a canonical direction, so a sequence
/// and its reverse are equal and sequences can key an ordered map.
#[derive(Debug, Clone)]
pub struct OrientedCoordinateArray {
    coords: Vec<Coord>,
    forward: bool,
}

impl OrientedCoordinateArray {
    #[must_use]
    pub fn new(coords: Vec<Coord>) -> Self {
        let forward = Self::is_increasing(&coords);
        Self { coords, forward }
    }

    /// A sequence is increasing if its first point sorts before its last,
    /// comparing inward from both ends. Palindromes count as increasing.
    fn is_increasing(coords: &[Coord]) -> bool {
        for i in 0..coords.len() / 2 {
            let j = coords.len() - 1 - i;
            match compare_coords(&coords[i], &coords[j]) {
                Ordering::Equal => {}
                ord => return ord == Ordering::Less,
            }
        }
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    fn coord_at(&self, i: usize) -> &Coord {
        if self.forward {
            &self.coords[i]
        } else {
            &self.coords[self.coords.len() - 1 - i]
        }
    }
}

impl PartialEq for OrientedCoordinateArray {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrientedCoordinateArray {}

impl PartialOrd for OrientedCoordinateArray {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrientedCoordinateArray {
    fn cmp(&self, other: &Self) -> Ordering {
        let n = self.len().min(other.len());
        for i in 0..n {
            match compare_coords(self.coord_at(i), other.coord_at(i)) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        self.len().cmp(&other.len())
    }
}
