//! Assembling result polygons from linked area edges.

use super::ring::{
    build_maximal_rings, build_minimal_rings, is_hole, max_outgoing_degree, ring_coords,
};
use crate::error::TopologyError;
use crate::geometry::{locate, point_in_ring, Geometry, Location, Polygon};
use crate::math::{compare_coords, is_ccw, Coord, Envelope};
use crate::graph::PlanarGraph;

#[derive(Debug)]
struct Shell {
    coords: Vec<Coord>,
    env: Envelope,
    holes: Vec<Vec<Coord>>,
}

/// Links the in-result edges of the graph into rings and assembles them
/// into polygons, assigning every hole to the shell that contains it.
pub fn build_polygons(graph: &mut PlanarGraph) -> Result<Vec<Polygon>, TopologyError> {
    for node in graph.node_ids() {
        graph.link_result_directed_edges(node)?;
    }
    let maximal = build_maximal_rings(graph)?;

    let mut shells: Vec<Shell> = Vec::new();
    let mut free_holes: Vec<Vec<Coord>> = Vec::new();
    let mut next_min_ring_id = 0;

    for (ring_index, ring) in maximal.iter().enumerate() {
        if max_outgoing_degree(graph, ring_index, ring) > 1 {
            // The ring pinches through at least one node: split it into
            // minimal rings, at most one of which is the shell.
            let minimal = build_minimal_rings(graph, ring_index, ring, &mut next_min_ring_id)?;
            let rings: Vec<Vec<Coord>> = minimal.iter().map(|d| ring_coords(graph, d)).collect();
            let mut shell: Option<Shell> = None;
            let mut holes: Vec<Vec<Coord>> = Vec::new();
            for coords in rings {
                if is_hole(&coords) {
                    holes.push(coords);
                } else if shell.is_some() {
                    return Err(TopologyError::Invalid(
                        "more than one shell in a maximal ring".to_owned(),
                    ));
                } else {
                    shell = Some(new_shell(coords));
                }
            }
            match shell {
                Some(mut shell) => {
                    shell.holes.extend(holes);
                    shells.push(shell);
                }
                None => free_holes.extend(holes),
            }
        } else {
            let coords = ring_coords(graph, &ring.dirs);
            if is_hole(&coords) {
                free_holes.push(coords);
            } else {
                shells.push(new_shell(coords));
            }
        }
    }

    place_free_holes(&mut shells, free_holes)?;

    Ok(shells
        .into_iter()
        .map(|shell| {
            let outer = normalize_ring(shell.coords, true);
            let holes = shell
                .holes
                .into_iter()
                .map(|h| normalize_ring(h, false))
                .collect();
            Polygon::new(outer, holes)
        })
        .collect())
}

fn new_shell(coords: Vec<Coord>) -> Shell {
    let env = Envelope::from_points(&coords);
    Shell {
        coords,
        env,
        holes: Vec::new(),
    }
}

/// Assigns each hole produced by a different maximal ring to the smallest
/// shell containing it.
fn place_free_holes(shells: &mut [Shell], free_holes: Vec<Vec<Coord>>) -> Result<(), TopologyError> {
    for hole in free_holes {
        let hole_env = Envelope::from_points(&hole);
        let mut best: Option<usize> = None;
        for (i, shell) in shells.iter().enumerate() {
            if !shell.env.contains(&hole_env) {
                continue;
            }
            // Test with a hole vertex not on the shell, since the rings
            // may touch.
            let contained = match hole.iter().find(|&c| !shell.coords.contains(c)) {
                Some(pt) => point_in_ring(pt, &shell.coords) != Location::Exterior,
                None => true,
            };
            if !contained {
                continue;
            }
            let smaller = match best {
                Some(b) => shells[b].env.contains(&shell.env),
                None => true,
            };
            if smaller {
                best = Some(i);
            }
        }
        match best {
            Some(i) => shells[i].holes.push(hole),
            None => {
                let pt = hole.first().copied().unwrap_or_else(|| Coord::new(0.0, 0.0));
                return Err(TopologyError::UnassignedHole { x: pt.x, y: pt.y });
            }
        }
    }
    Ok(())
}

/// Rewrites a closed ring into canonical form: the requested orientation,
/// starting from its lowest coordinate.
pub fn normalize_ring(coords: Vec<Coord>, want_ccw: bool) -> Vec<Coord> {
    let mut ring = coords;
    if ring.len() < 4 {
        return ring;
    }
    if is_ccw(&ring) != want_ccw {
        ring.reverse();
    }
    ring.pop();
    let low = ring
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| compare_coords(a, b))
        .map_or(0, |(i, _)| i);
    ring.rotate_left(low);
    if let Some(first) = ring.first().copied() {
        ring.push(first);
    }
    ring
}

/// Tests whether a coordinate is covered by any of the result polygons.
pub fn covered_by_areas(pt: &Coord, polygons: &[Polygon]) -> bool {
    let areas = Geometry::MultiPolygon(polygons.to_vec());
    locate(pt, &areas) != Location::Exterior
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn normalize_orients_and_rotates() {
        // A CW square starting from an arbitrary vertex.
        let ring = vec![c(10.0, 10.0), c(10.0, 0.0), c(0.0, 0.0), c(0.0, 10.0), c(10.0, 10.0)];
        let normalized = normalize_ring(ring, true);
        assert_eq!(
            normalized,
            vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0), c(0.0, 10.0), c(0.0, 0.0)]
        );
    }

    #[test]
    fn normalize_keeps_requested_cw() {
        let ring = vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0), c(0.0, 10.0), c(0.0, 0.0)];
        let normalized = normalize_ring(ring, false);
        assert!(!is_ccw(&normalized));
        assert_eq!(normalized[0], c(0.0, 0.0));
    }
}
