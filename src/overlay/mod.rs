//! Boolean overlay of two geometries.
//!
//! The pipeline: decompose both inputs into labelled segment strings, node
//! them fully (self-intersections first, then mutual ones), merge the
//! noded substrings into unique edges, build the planar graph, complete
//! the topology labels, select the edges and nodes belonging to the
//! requested operation, and assemble polygons, lines and points from them.

pub mod input;
pub mod line_builder;
pub mod point_builder;
pub mod polygon_builder;
pub mod ring;

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Result;
use crate::geometry::{Geometry, Location};
use crate::graph::labeling::compute_labelling;
use crate::graph::{Edge, EdgeList, Label, PlanarGraph, Position};
use crate::noding::{
    check_noded, IntersectionAdder, McIndexNoder, McIndexSegmentSetMutualIntersector,
    NodedSegmentString,
};
use input::InputGeometry;

/// The supported boolean operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Intersection,
    Union,
    Difference,
    SymDifference,
}

static VALIDATE_NODING: AtomicBool = AtomicBool::new(true);

/// Enables or disables the post-noding validation pass. Validation is on
/// by default; disabling it trades safety for speed.
pub fn set_noding_validation(enabled: bool) {
    VALIDATE_NODING.store(enabled, Ordering::Relaxed);
}

#[must_use]
pub fn noding_validation() -> bool {
    VALIDATE_NODING.load(Ordering::Relaxed)
}

/// Location pair test deciding whether an element labelled with the given
/// locations belongs to the result of an operation. Boundary counts as
/// interior: a piece on a boundary is inside the closed region.
pub(crate) fn is_result_of_op_on(
    loc0: Option<Location>,
    loc1: Option<Location>,
    op: BooleanOp,
) -> bool {
    let in0 = matches!(loc0, Some(Location::Interior | Location::Boundary));
    let in1 = matches!(loc1, Some(Location::Interior | Location::Boundary));
    match op {
        BooleanOp::Intersection => in0 && in1,
        BooleanOp::Union => in0 || in1,
        BooleanOp::Difference => in0 && !in1,
        BooleanOp::SymDifference => in0 != in1,
    }
}

fn is_interior_area_edge(label: &Label) -> bool {
    (0..2).all(|g| {
        label.is_area_for(g)
            && label.location(g, Position::Left) == Some(Location::Interior)
            && label.location(g, Position::Right) == Some(Location::Interior)
    })
}

/// Marks the directed edges bounding the result area: those with the
/// result region on their right side. Edges interior to both input areas
/// bound nothing.
fn find_result_area_edges(graph: &mut PlanarGraph, op: BooleanOp) {
    for d in graph.dir_ids() {
        let label = graph.dirs[d].label;
        if label.is_area()
            && !is_interior_area_edge(&label)
            && is_result_of_op_on(
                label.location(0, Position::Right),
                label.location(1, Position::Right),
                op,
            )
        {
            graph.dirs[d].in_result = true;
        }
    }
}

/// An edge whose both directions made the result cut encloses area on
/// neither side, so it drops out entirely.
fn cancel_duplicate_result_edges(graph: &mut PlanarGraph) {
    for d in graph.dir_ids() {
        let sym = graph.dirs[d].sym;
        if graph.dirs[d].in_result && graph.dirs[sym].in_result {
            graph.dirs[d].in_result = false;
            graph.dirs[sym].in_result = false;
        }
    }
}

fn result_dimension(op: BooleanOp, dim0: u8, dim1: u8) -> u8 {
    match op {
        BooleanOp::Intersection => dim0.min(dim1),
        BooleanOp::Union | BooleanOp::SymDifference => dim0.max(dim1),
        BooleanOp::Difference => dim0,
    }
}

/// Computes the boolean overlay of two geometries.
///
/// # Errors
///
/// Returns an error when an input geometry is degenerate or when the
/// topology cannot be resolved, for instance when noding leaves an
/// intersection inside a segment.
pub fn overlay(a: &Geometry, b: &Geometry, op: BooleanOp) -> Result<Geometry> {
    let input0 = InputGeometry::extract(a, 0)?;
    let input1 = InputGeometry::extract(b, 1)?;

    let to_strings = |edges: &[Edge]| -> Vec<Rc<NodedSegmentString<Label>>> {
        edges
            .iter()
            .map(|e| Rc::new(NodedSegmentString::new(e.coords.clone(), e.label)))
            .collect()
    };
    let strings0 = to_strings(&input0.edges);
    let strings1 = to_strings(&input1.edges);

    let noder = McIndexNoder::new();
    let mut self_adder = IntersectionAdder::new();
    noder.compute_nodes(&strings0, &mut self_adder);
    let mut self_adder = IntersectionAdder::new();
    noder.compute_nodes(&strings1, &mut self_adder);

    let mutual = McIndexSegmentSetMutualIntersector::new(&strings0);
    let mut cross_adder = IntersectionAdder::new();
    mutual.process(&strings1, &mut cross_adder);

    let mut substrings = NodedSegmentString::noded_substrings(&strings0);
    substrings.extend(NodedSegmentString::noded_substrings(&strings1));
    if noding_validation() {
        check_noded(&substrings)?;
    }

    let mut edge_list = EdgeList::new();
    for s in &substrings {
        edge_list.insert_unique(Edge::new(s.coords().to_vec(), *s.data()));
    }
    edge_list.compute_labels_from_depths();
    edge_list.replace_collapsed_edges();

    let mut graph = PlanarGraph::build(edge_list.into_edges());
    for (geom_index, input) in [&input0, &input1].into_iter().enumerate() {
        for &(coord, loc) in &input.nodes {
            let id = graph.add_node(coord);
            graph.nodes[id].label.set_on_location(geom_index, loc);
        }
    }

    compute_labelling(&mut graph, [a, b])?;

    find_result_area_edges(&mut graph, op);
    cancel_duplicate_result_edges(&mut graph);

    let polygons = polygon_builder::build_polygons(&mut graph)?;
    let (lines, line_edges) = line_builder::build_lines(&mut graph, op, &polygons);
    let points = point_builder::build_points(&graph, op, &polygons, &lines, &line_edges);

    let mut parts: Vec<Geometry> = Vec::new();
    parts.extend(points.into_iter().map(Geometry::Point));
    parts.extend(lines.into_iter().map(Geometry::LineString));
    parts.extend(polygons.into_iter().map(Geometry::Polygon));
    if parts.is_empty() {
        Ok(Geometry::empty_of_dimension(result_dimension(
            op,
            input0.dimension,
            input1.dimension,
        )))
    } else {
        Ok(Geometry::build_most_specific(parts))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::Polygon;
    use crate::math::{signed_area, Coord};

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    fn square(x0: f64, y0: f64, size: f64) -> Geometry {
        Geometry::Polygon(Polygon::new(
            vec![
                c(x0, y0),
                c(x0 + size, y0),
                c(x0 + size, y0 + size),
                c(x0, y0 + size),
                c(x0, y0),
            ],
            vec![],
        ))
    }

    fn area(geom: &Geometry) -> f64 {
        fn polygon_area(p: &Polygon) -> f64 {
            let shell = signed_area(&p.shell).abs();
            let holes: f64 = p.holes.iter().map(|h| signed_area(h).abs()).sum();
            shell - holes
        }
        match geom {
            Geometry::Polygon(p) => polygon_area(p),
            Geometry::MultiPolygon(ps) => ps.iter().map(polygon_area).sum(),
            Geometry::GeometryCollection(parts) => parts.iter().map(area).sum(),
            _ => 0.0,
        }
    }

    #[test]
    fn intersection_of_overlapping_squares() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        let result = overlay(&a, &b, BooleanOp::Intersection).unwrap();
        assert_relative_eq!(area(&result), 25.0);
        assert_eq!(result, square(5.0, 5.0, 5.0));
    }

    #[test]
    fn union_of_overlapping_squares() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        let result = overlay(&a, &b, BooleanOp::Union).unwrap();
        assert!(matches!(result, Geometry::Polygon(_)));
        assert_relative_eq!(area(&result), 175.0);
    }

    #[test]
    fn difference_of_overlapping_squares() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        let result = overlay(&a, &b, BooleanOp::Difference).unwrap();
        assert_relative_eq!(area(&result), 75.0);
    }

    #[test]
    fn sym_difference_of_overlapping_squares() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        let result = overlay(&a, &b, BooleanOp::SymDifference).unwrap();
        assert_relative_eq!(area(&result), 150.0);
        assert!(matches!(result, Geometry::MultiPolygon(ref ps) if ps.len() == 2));
    }

    #[test]
    fn intersection_with_self_is_identity() {
        let a = square(0.0, 0.0, 10.0);
        let result = overlay(&a, &a, BooleanOp::Intersection).unwrap();
        assert_eq!(result, a);
    }

    #[test]
    fn union_with_self_is_identity() {
        let a = square(0.0, 0.0, 10.0);
        let result = overlay(&a, &a, BooleanOp::Union).unwrap();
        assert_eq!(result, a);
    }

    #[test]
    fn difference_with_self_is_empty() {
        let a = square(0.0, 0.0, 10.0);
        let result = overlay(&a, &a, BooleanOp::Difference).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.dimension(), 2);
    }

    #[test]
    fn sym_difference_with_self_is_empty() {
        let a = square(0.0, 0.0, 10.0);
        let result = overlay(&a, &a, BooleanOp::SymDifference).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn union_with_empty_is_identity() {
        let a = square(0.0, 0.0, 10.0);
        let empty = Geometry::MultiPolygon(Vec::new());
        let result = overlay(&a, &empty, BooleanOp::Union).unwrap();
        assert_eq!(result, a);
    }

    #[test]
    fn disjoint_intersection_is_empty_with_min_dimension() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(20.0, 20.0, 5.0);
        let result = overlay(&a, &b, BooleanOp::Intersection).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.dimension(), 2);

        let line = Geometry::LineString(vec![c(20.0, 0.0), c(30.0, 0.0)]);
        let result = overlay(&a, &line, BooleanOp::Intersection).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.dimension(), 1);
    }

    #[test]
    fn disjoint_union_keeps_both() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(20.0, 20.0, 5.0);
        let result = overlay(&a, &b, BooleanOp::Union).unwrap();
        assert!(matches!(result, Geometry::MultiPolygon(ref ps) if ps.len() == 2));
        assert_relative_eq!(area(&result), 125.0);
    }

    #[test]
    fn corner_touching_intersection_is_a_point() {
        let a = square(0.0, 0.0, 5.0);
        let b = square(5.0, 5.0, 5.0);
        let result = overlay(&a, &b, BooleanOp::Intersection).unwrap();
        assert_eq!(result, Geometry::Point(c(5.0, 5.0)));
    }

    #[test]
    fn edge_touching_intersection_is_a_line() {
        let a = square(0.0, 0.0, 5.0);
        let b = square(5.0, 0.0, 5.0);
        let result = overlay(&a, &b, BooleanOp::Intersection).unwrap();
        match result {
            Geometry::LineString(coords) => {
                assert!(coords.contains(&c(5.0, 0.0)));
                assert!(coords.contains(&c(5.0, 5.0)));
            }
            other => unreachable!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn difference_cuts_a_hole() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(2.0, 2.0, 6.0);
        let result = overlay(&a, &b, BooleanOp::Difference).unwrap();
        match result {
            Geometry::Polygon(ref p) => {
                assert_eq!(p.holes.len(), 1);
            }
            ref other => unreachable!("expected a polygon, got {other:?}"),
        }
        assert_relative_eq!(area(&result), 64.0);
    }

    #[test]
    fn line_clipped_by_polygon() {
        let a = Geometry::LineString(vec![c(-5.0, 5.0), c(15.0, 5.0)]);
        let b = square(0.0, 0.0, 10.0);
        let result = overlay(&a, &b, BooleanOp::Intersection).unwrap();
        assert_eq!(result, Geometry::LineString(vec![c(0.0, 5.0), c(10.0, 5.0)]));
    }

    #[test]
    fn line_difference_keeps_outside_parts() {
        let a = Geometry::LineString(vec![c(-5.0, 5.0), c(15.0, 5.0)]);
        let b = square(0.0, 0.0, 10.0);
        let result = overlay(&a, &b, BooleanOp::Difference).unwrap();
        assert!(matches!(result, Geometry::MultiLineString(ref ls) if ls.len() == 2));
    }

    #[test]
    fn union_absorbs_interior_line() {
        let a = square(0.0, 0.0, 10.0);
        let line = Geometry::LineString(vec![c(2.0, 2.0), c(8.0, 8.0)]);
        let result = overlay(&a, &line, BooleanOp::Union).unwrap();
        assert_eq!(result, a);
    }

    #[test]
    fn collinear_line_intersection() {
        let a = Geometry::LineString(vec![c(0.0, 0.0), c(10.0, 0.0)]);
        let b = Geometry::LineString(vec![c(5.0, 0.0), c(15.0, 0.0)]);
        let result = overlay(&a, &b, BooleanOp::Intersection).unwrap();
        assert_eq!(result, Geometry::LineString(vec![c(5.0, 0.0), c(10.0, 0.0)]));
    }

    #[test]
    fn crossing_lines_intersect_in_a_point() {
        let a = Geometry::LineString(vec![c(0.0, 0.0), c(10.0, 10.0)]);
        let b = Geometry::LineString(vec![c(0.0, 10.0), c(10.0, 0.0)]);
        let result = overlay(&a, &b, BooleanOp::Intersection).unwrap();
        assert_eq!(result, Geometry::Point(c(5.0, 5.0)));
    }

    #[test]
    fn point_in_polygon_intersection() {
        let p = Geometry::Point(c(5.0, 5.0));
        let b = square(0.0, 0.0, 10.0);
        let result = overlay(&p, &b, BooleanOp::Intersection).unwrap();
        assert_eq!(result, Geometry::Point(c(5.0, 5.0)));
    }

    #[test]
    fn point_outside_polygon_intersection_is_empty() {
        let p = Geometry::Point(c(50.0, 50.0));
        let b = square(0.0, 0.0, 10.0);
        let result = overlay(&p, &b, BooleanOp::Intersection).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.dimension(), 0);
    }

    #[test]
    fn union_absorbs_interior_point() {
        let a = square(0.0, 0.0, 10.0);
        let p = Geometry::Point(c(5.0, 5.0));
        let result = overlay(&a, &p, BooleanOp::Union).unwrap();
        assert_eq!(result, a);
    }

    #[test]
    fn point_difference_against_covering_polygon_is_empty() {
        let p = Geometry::Point(c(5.0, 5.0));
        let b = square(0.0, 0.0, 10.0);
        let result = overlay(&p, &b, BooleanOp::Difference).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.dimension(), 0);
    }

    #[test]
    fn result_rings_are_normalized() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        let result = overlay(&a, &b, BooleanOp::Intersection).unwrap();
        match result {
            Geometry::Polygon(p) => {
                assert_eq!(p.shell[0], c(5.0, 5.0));
                assert!(crate::math::is_ccw(&p.shell));
            }
            other => unreachable!("expected a polygon, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_input_is_rejected() {
        let bad = Geometry::Polygon(Polygon::new(vec![c(0.0, 0.0), c(1.0, 1.0), c(0.0, 0.0)], vec![]));
        let b = square(0.0, 0.0, 10.0);
        assert!(overlay(&bad, &b, BooleanOp::Union).is_err());
    }

    #[test]
    fn op_membership_truth_table() {
        let locs = [Location::Interior, Location::Boundary, Location::Exterior];
        for l0 in locs {
            for l1 in locs {
                let in0 = l0 != Location::Exterior;
                let in1 = l1 != Location::Exterior;
                let at = |op| is_result_of_op_on(Some(l0), Some(l1), op);
                assert_eq!(at(BooleanOp::Intersection), in0 && in1);
                assert_eq!(at(BooleanOp::Union), in0 || in1);
                assert_eq!(at(BooleanOp::Difference), in0 && !in1);
                assert_eq!(at(BooleanOp::SymDifference), in0 != in1);
            }
        }
        // Undefined locations count as exterior.
        assert!(!is_result_of_op_on(None, Some(Location::Interior), BooleanOp::Intersection));
        assert!(is_result_of_op_on(None, Some(Location::Interior), BooleanOp::Union));
    }

    #[test]
    fn validation_toggle_round_trips() {
        assert!(noding_validation());
        set_noding_validation(false);
        assert!(!noding_validation());
        set_noding_validation(true);
    }
}
