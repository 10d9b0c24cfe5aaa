//! Walking linked result edges into rings.

use crate::error::TopologyError;
use crate::graph::{DirId, PlanarGraph};
use crate::math::{is_ccw, Coord};

/// A maximal ring: the closed walk obtained by following `next` pointers.
/// At nodes where the result area touches itself it can pinch through the
/// node and enclose more than one minimal cycle.
#[derive(Debug)]
pub struct MaximalRing {
    pub dirs: Vec<DirId>,
}

/// Builds all maximal rings over the in-result directed edges, assigning
/// each edge its ring index.
pub fn build_maximal_rings(graph: &mut PlanarGraph) -> Result<Vec<MaximalRing>, TopologyError> {
    let mut rings = Vec::new();
    for start in graph.dir_ids() {
        let de = &graph.dirs[start];
        if !de.in_result || !de.label.is_area() || de.ring.is_some() {
            continue;
        }
        let ring_index = rings.len();
        let mut dirs = Vec::new();
        let mut cur = start;
        loop {
            if graph.dirs[cur].ring == Some(ring_index) {
                let coord = graph.dir_coord(cur);
                return Err(TopologyError::RingVisitedTwice {
                    x: coord.x,
                    y: coord.y,
                });
            }
            dirs.push(cur);
            graph.dirs[cur].ring = Some(ring_index);
            let coord = graph.dir_coord(cur);
            let Some(next) = graph.dirs[cur].next else {
                return Err(TopologyError::NoOutgoingEdge {
                    x: coord.x,
                    y: coord.y,
                });
            };
            cur = next;
            if cur == start {
                break;
            }
        }
        rings.push(MaximalRing { dirs });
    }
    Ok(rings)
}

/// Largest number of edges of this ring leaving any single node. A value
/// above one means the ring pinches and must be split into minimal rings.
#[must_use]
pub fn max_outgoing_degree(graph: &PlanarGraph, ring_index: usize, ring: &MaximalRing) -> usize {
    ring.dirs
        .iter()
        .map(|&d| graph.outgoing_degree_in_ring(graph.dirs[d].origin, ring_index))
        .max()
        .unwrap_or(0)
}

/// Splits a pinched maximal ring into its minimal rings by relinking each
/// node in clockwise order and walking the `next_min` pointers.
pub fn build_minimal_rings(
    graph: &mut PlanarGraph,
    ring_index: usize,
    ring: &MaximalRing,
    next_min_ring_id: &mut usize,
) -> Result<Vec<Vec<DirId>>, TopologyError> {
    for &d in &ring.dirs {
        let node = graph.dirs[d].origin;
        graph.link_minimal_directed_edges(node, ring_index)?;
    }
    let mut result = Vec::new();
    for &start in &ring.dirs {
        if graph.dirs[start].min_ring.is_some() {
            continue;
        }
        let id = *next_min_ring_id;
        *next_min_ring_id += 1;
        let mut dirs = Vec::new();
        let mut cur = start;
        loop {
            if graph.dirs[cur].min_ring == Some(id) {
                let coord = graph.dir_coord(cur);
                return Err(TopologyError::RingVisitedTwice {
                    x: coord.x,
                    y: coord.y,
                });
            }
            dirs.push(cur);
            graph.dirs[cur].min_ring = Some(id);
            let coord = graph.dir_coord(cur);
            let Some(next) = graph.dirs[cur].next_min else {
                return Err(TopologyError::NoOutgoingEdge {
                    x: coord.x,
                    y: coord.y,
                });
            };
            cur = next;
            if cur == start {
                break;
            }
        }
        result.push(dirs);
    }
    Ok(result)
}

/// Concatenates the edge coordinates of a ring walk into a closed
/// coordinate ring.
#[must_use]
pub fn ring_coords(graph: &PlanarGraph, dirs: &[DirId]) -> Vec<Coord> {
    let mut coords: Vec<Coord> = Vec::new();
    for (i, &d) in dirs.iter().enumerate() {
        let de = &graph.dirs[d];
        let edge_coords = &graph.edges[de.edge].coords;
        if de.forward {
            let start = usize::from(i != 0);
            coords.extend_from_slice(&edge_coords[start..]);
        } else {
            let end = if i == 0 {
                edge_coords.len()
            } else {
                edge_coords.len() - 1
            };
            coords.extend(edge_coords[..end].iter().rev());
        }
    }
    coords
}

/// Result rings are traversed with their interior on the right, so a
/// counter-clockwise ring bounds a hole.
#[must_use]
pub fn is_hole(ring: &[Coord]) -> bool {
    is_ccw(ring)
}
