//! Edge depths: how many times each side of an edge is covered by the
//! area components of each input geometry.

use super::label::{Label, Position};
use crate::geometry::Location;

const NULL_DEPTH: i32 = -1;

fn depth_at_location(loc: Location) -> i32 {
    match loc {
        Location::Interior => 1,
        _ => 0,
    }
}

fn pos_index(pos: Position) -> usize {
    match pos {
        Position::On => 0,
        Position::Left => 1,
        Position::Right => 2,
    }
}

/// Per-geometry, per-side coverage counts accumulated while merging
/// coincident edges.
#[derive(Debug, Clone)]
pub struct Depth {
    depths: [[i32; 3]; 2],
}

impl Default for Depth {
    fn default() -> Self {
        Self::new()
    }
}

impl Depth {
    #[must_use]
    pub fn new() -> Self {
        Self {
            depths: [[NULL_DEPTH; 3]; 2],
        }
    }

    #[must_use]
    pub fn depth(&self, geom: usize, pos: Position) -> i32 {
        self.depths[geom][pos_index(pos)]
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.depths
            .iter()
            .flatten()
            .all(|&d| d == NULL_DEPTH)
    }

    #[must_use]
    pub fn is_null_for(&self, geom: usize) -> bool {
        self.depths[geom].iter().all(|&d| d == NULL_DEPTH)
    }

    #[must_use]
    pub fn is_null_at(&self, geom: usize, pos: Position) -> bool {
        self.depths[geom][pos_index(pos)] == NULL_DEPTH
    }

    /// Accumulates the side locations of a label into the depth counts.
    pub fn add_label(&mut self, label: &Label) {
        for geom in 0..2 {
            for pos in [Position::Left, Position::Right] {
                let Some(loc) = label.location(geom, pos) else {
                    continue;
                };
                if loc == Location::Interior || loc == Location::Exterior {
                    let slot = &mut self.depths[geom][pos_index(pos)];
                    if *slot == NULL_DEPTH {
                        *slot = depth_at_location(loc);
                    } else {
                        *slot += depth_at_location(loc);
                    }
                }
            }
        }
    }

    #[must_use]
    pub fn delta(&self, geom: usize) -> i32 {
        self.depths[geom][pos_index(Position::Right)] - self.depths[geom][pos_index(Position::Left)]
    }

    #[must_use]
    pub fn location(&self, geom: usize, pos: Position) -> Location {
        if self.depths[geom][pos_index(pos)] <= 0 {
            Location::Exterior
        } else {
            Location::Interior
        }
    }

    /// Reduces the depths to 0/1 values relative to the shallowest side, so
    /// they read directly as exterior/interior.
    pub fn normalize(&mut self) {
        for geom in 0..2 {
            if self.is_null_for(geom) {
                continue;
            }
            let mut min_depth = self.depths[geom][1].min(self.depths[geom][2]);
            if min_depth < 0 {
                min_depth = 0;
            }
            for d in &mut self.depths[geom] {
                *d = i32::from(*d > min_depth);
            }
        }
    }
}
