//! Completing the topology labels of a built graph.
//!
//! Edges arrive labelled only with respect to the geometry they came from.
//! Side labels for the other geometry are propagated around each node star
//! in angular order; whatever remains undefined is resolved by locating
//! the node against the other input geometry.

use super::label::Position;
use super::{DirId, NodeId, PlanarGraph};
use crate::error::TopologyError;
use crate::geometry::{locate, locate_areal, Geometry, Location};

/// Runs the full labelling pipeline over the graph.
pub fn compute_labelling(
    graph: &mut PlanarGraph,
    geoms: [&Geometry; 2],
) -> Result<(), TopologyError> {
    for node in graph.node_ids() {
        label_star(graph, node, geoms)?;
    }
    merge_sym_labels(graph);
    update_node_labelling(graph);
    label_incomplete_nodes(graph, geoms);
    Ok(())
}

fn label_star(
    graph: &mut PlanarGraph,
    node: NodeId,
    geoms: [&Geometry; 2],
) -> Result<(), TopologyError> {
    propagate_side_labels(graph, node, 0)?;
    propagate_side_labels(graph, node, 1)?;

    let star: Vec<DirId> = graph.nodes[node].star.clone();

    // An area boundary edge relabelled as a line marks a dimensional
    // collapse: the regions on both sides are exterior.
    let mut has_collapse = [false, false];
    for &d in &star {
        let label = &graph.dirs[d].label;
        for geom in 0..2 {
            if label.is_line_for(geom) && label.on_location(geom) == Some(Location::Boundary) {
                has_collapse[geom] = true;
            }
        }
    }

    let coord = graph.nodes[node].coord;
    let mut located: [Option<Location>; 2] = [None, None];
    for &d in &star {
        for geom in 0..2 {
            if graph.dirs[d].label.is_any_null(geom) {
                let loc = if has_collapse[geom] {
                    Location::Exterior
                } else {
                    *located[geom].get_or_insert_with(|| locate_areal(&coord, geoms[geom]))
                };
                graph.dirs[d].label.set_all_locations_if_null(geom, loc);
            }
        }
    }
    Ok(())
}

/// Walks the star in counter-clockwise order, carrying the location of the
/// region between consecutive edges across edges whose sides are unknown.
fn propagate_side_labels(
    graph: &mut PlanarGraph,
    node: NodeId,
    geom: usize,
) -> Result<(), TopologyError> {
    let star: Vec<DirId> = graph.nodes[node].star.clone();

    let mut start_loc = None;
    for &d in &star {
        let label = &graph.dirs[d].label;
        if label.is_area_for(geom) {
            if let Some(loc) = label.location(geom, Position::Left) {
                start_loc = Some(loc);
            }
        }
    }
    let Some(mut curr) = start_loc else {
        return Ok(());
    };

    for &d in &star {
        let coord = graph.dirs[d].p0;
        let label = &mut graph.dirs[d].label;
        if label.on_location(geom).is_none() {
            label.set_location(geom, Position::On, curr);
        }
        if !label.is_area_for(geom) {
            continue;
        }
        let left = label.location(geom, Position::Left);
        match label.location(geom, Position::Right) {
            Some(right) => {
                // Moving counter-clockwise we arrive on the right side of
                // each edge, which must agree with the carried location.
                if right != curr {
                    return Err(TopologyError::SideLocationConflict {
                        x: coord.x,
                        y: coord.y,
                    });
                }
                let Some(left) = left else {
                    return Err(TopologyError::Invalid(format!(
                        "edge with defined right side but undefined left side at ({}, {})",
                        coord.x, coord.y
                    )));
                };
                curr = left;
            }
            None => {
                label.set_location(geom, Position::Right, curr);
                label.set_location(geom, Position::Left, curr);
            }
        }
    }
    Ok(())
}

fn merge_sym_labels(graph: &mut PlanarGraph) {
    for d in graph.dir_ids() {
        let sym = graph.dirs[d].sym;
        let sym_label = graph.dirs[sym].label;
        graph.dirs[d].label.merge(&sym_label);
    }
}

/// Merges the on locations of the incident edges into each node label. A
/// node with any interior or boundary edge for a geometry lies in that
/// geometry's interior or boundary, never its exterior.
fn update_node_labelling(graph: &mut PlanarGraph) {
    for node in graph.node_ids() {
        let star: Vec<DirId> = graph.nodes[node].star.clone();
        for geom in 0..2 {
            let touches = star.iter().any(|&d| {
                matches!(
                    graph.dirs[d].label.on_location(geom),
                    Some(Location::Interior | Location::Boundary)
                )
            });
            if touches {
                let label = &mut graph.nodes[node].label;
                if label.on_location(geom).is_none() {
                    label.set_on_location(geom, Location::Interior);
                }
            }
        }
    }
}

/// Labels nodes not touched by any edge of a geometry by locating them in
/// that geometry directly.
fn label_incomplete_nodes(graph: &mut PlanarGraph, geoms: [&Geometry; 2]) {
    for node in graph.node_ids() {
        for geom in 0..2 {
            if graph.nodes[node].label.is_null(geom) {
                let loc = locate(&graph.nodes[node].coord, geoms[geom]);
                graph.nodes[node].label.set_on_location(geom, loc);
            }
        }
    }
}
