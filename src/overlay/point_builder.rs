//! Collecting result points.

use std::collections::BTreeSet;

use super::{is_result_of_op_on, BooleanOp};
use crate::geometry::{locate, Geometry, Location, Polygon};
use crate::graph::PlanarGraph;
use crate::math::Coord;

/// Collects the nodes that enter the result as points: nodes satisfying
/// the operation that have no incident result edge and are not covered by
/// the result lines or areas. Nodes with incident edges only qualify for
/// intersection, where a boundary touch can reduce to a single point.
pub fn build_points(
    graph: &PlanarGraph,
    op: BooleanOp,
    result_areas: &[Polygon],
    result_lines: &[Vec<Coord>],
    line_edges: &BTreeSet<usize>,
) -> Vec<Coord> {
    let covered = Geometry::GeometryCollection(vec![
        Geometry::MultiPolygon(result_areas.to_vec()),
        Geometry::MultiLineString(result_lines.to_vec()),
    ]);

    let mut points = Vec::new();
    for node in graph.node_ids() {
        let n = &graph.nodes[node];
        let incident_in_result = n.star.iter().any(|&d| {
            let de = &graph.dirs[d];
            de.in_result
                || de.ring.is_some()
                || graph.dirs[de.sym].in_result
                || graph.dirs[de.sym].ring.is_some()
                || line_edges.contains(&de.edge)
        });
        if incident_in_result {
            continue;
        }
        if !n.star.is_empty() && op != BooleanOp::Intersection {
            continue;
        }
        if !is_result_of_op_on(n.label.on_location(0), n.label.on_location(1), op) {
            continue;
        }
        if locate(&n.coord, &covered) != Location::Exterior {
            continue;
        }
        points.push(n.coord);
    }
    points
}
