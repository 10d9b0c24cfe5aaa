//! Collecting result line strings.

use std::collections::BTreeSet;

use super::polygon_builder::covered_by_areas;
use super::{is_result_of_op_on, BooleanOp};
use crate::geometry::Polygon;
use crate::graph::{Label, PlanarGraph};
use crate::math::Coord;

fn is_line_edge(label: &Label) -> bool {
    label.is_line_for(0) || label.is_line_for(1)
}

fn is_interior_area_edge(label: &Label) -> bool {
    use crate::geometry::Location;
    use crate::graph::Position;
    (0..2).all(|g| {
        label.is_area_for(g)
            && label.location(g, Position::Left) == Some(Location::Interior)
            && label.location(g, Position::Right) == Some(Location::Interior)
    })
}

fn midpoint_of_first_segment(coords: &[Coord]) -> Coord {
    Coord::new(
        (coords[0].x + coords[1].x) / 2.0,
        (coords[0].y + coords[1].y) / 2.0,
    )
}

/// Collects the edges that belong to the result as lines: line edges whose
/// on locations satisfy the operation, plus boundary sections where the two
/// area boundaries touch without enclosing common area (intersection only).
/// Edges already covered by the result polygons are dropped.
///
/// Returns the lines and the indices of the edges they came from.
pub fn build_lines(
    graph: &mut PlanarGraph,
    op: BooleanOp,
    result_areas: &[Polygon],
) -> (Vec<Vec<Coord>>, BTreeSet<usize>) {
    let mut lines = Vec::new();
    let mut line_edges = BTreeSet::new();
    for d in graph.dir_ids() {
        let de = &graph.dirs[d];
        if de.visited {
            continue;
        }
        let label = de.label;
        let edge_index = de.edge;
        let sym = de.sym;
        let in_result_area = de.in_result || graph.dirs[sym].in_result;

        let collect = if is_line_edge(&label) {
            is_result_of_op_on(label.on_location(0), label.on_location(1), op)
        } else {
            // An area edge cancelled out of the result marks boundaries
            // touching from both sides; intersection keeps the touch line.
            op == BooleanOp::Intersection
                && !in_result_area
                && !is_interior_area_edge(&label)
                && is_result_of_op_on(label.on_location(0), label.on_location(1), op)
        };
        if !collect {
            continue;
        }
        let midpoint = midpoint_of_first_segment(&graph.edges[edge_index].coords);
        if covered_by_areas(&midpoint, result_areas) {
            continue;
        }
        lines.push(graph.edges[edge_index].coords.clone());
        line_edges.insert(edge_index);
        graph.dirs[d].visited = true;
        graph.dirs[sym].visited = true;
    }
    (lines, line_edges)
}
