//! Undirected edges produced by noding, deduplicated by geometry.

use std::collections::BTreeMap;

use super::depth::Depth;
use super::label::{Label, Position};
use crate::math::Coord;
use crate::noding::OrientedCoordinateArray;

/// A noded edge with its topology label and accumulated depths.
#[derive(Debug, Clone)]
pub struct Edge {
    pub coords: Vec<Coord>,
    pub label: Label,
    pub depth: Depth,
}

impl Edge {
    #[must_use]
    pub fn new(coords: Vec<Coord>, label: Label) -> Self {
        Self {
            coords,
            label,
            depth: Depth::new(),
        }
    }

    #[must_use]
    pub fn is_pointwise_equal(&self, other: &Edge) -> bool {
        self.coords == other.coords
    }

    /// An area edge that immediately doubles back on itself has collapsed
    /// to a line.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.label.is_area() && self.coords.len() == 3 && self.coords[0] == self.coords[2]
    }

    #[must_use]
    pub fn collapsed_edge(&self) -> Edge {
        let mut label = self.label;
        label.to_line(0);
        label.to_line(1);
        Edge::new(vec![self.coords[0], self.coords[1]], label)
    }
}

/// A list of edges unique up to orientation.
///
/// Inserting an edge geometrically equal to an existing one merges its
/// label into the existing edge instead, flipping the sides when the two
/// run in opposite directions, and accumulates both labels into the depth
/// so coincident area boundaries can be resolved afterwards.
#[derive(Debug, Default)]
pub struct EdgeList {
    edges: Vec<Edge>,
    index: BTreeMap<OrientedCoordinateArray, usize>,
}

impl EdgeList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn insert_unique(&mut self, edge: Edge) {
        let key = OrientedCoordinateArray::new(edge.coords.clone());
        if let Some(&i) = self.index.get(&key) {
            let existing = &mut self.edges[i];
            let mut label_to_merge = edge.label;
            if !existing.is_pointwise_equal(&edge) {
                label_to_merge.flip();
            }
            if existing.depth.is_null() {
                let existing_label = existing.label;
                existing.depth.add_label(&existing_label);
            }
            existing.depth.add_label(&label_to_merge);
            existing.label.merge(&label_to_merge);
        } else {
            self.index.insert(key, self.edges.len());
            self.edges.push(edge);
        }
    }

    /// Resolves the labels of merged edges from their depths. A zero depth
    /// delta means the regions on both sides are the same, so the edge
    /// collapses to a line for that geometry.
    pub fn compute_labels_from_depths(&mut self) {
        for edge in &mut self.edges {
            if edge.depth.is_null() {
                continue;
            }
            edge.depth.normalize();
            for geom in 0..2 {
                if edge.label.is_null(geom)
                    || !edge.label.is_area()
                    || edge.depth.is_null_for(geom)
                {
                    continue;
                }
                if edge.depth.delta(geom) == 0 {
                    edge.label.to_line(geom);
                } else {
                    edge.label.set_location(
                        geom,
                        Position::Left,
                        edge.depth.location(geom, Position::Left),
                    );
                    edge.label.set_location(
                        geom,
                        Position::Right,
                        edge.depth.location(geom, Position::Right),
                    );
                }
            }
        }
    }

    /// Replaces edges which have collapsed to a doubled-back line with the
    /// equivalent line edge.
    pub fn replace_collapsed_edges(&mut self) {
        for edge in &mut self.edges {
            if edge.is_collapsed() {
                *edge = edge.collapsed_edge();
            }
        }
    }

    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Location;

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn distinct_edges_are_kept() {
        let mut list = EdgeList::new();
        list.insert_unique(Edge::new(
            vec![c(0.0, 0.0), c(1.0, 0.0)],
            Label::line(0, Location::Interior),
        ));
        list.insert_unique(Edge::new(
            vec![c(0.0, 0.0), c(0.0, 1.0)],
            Label::line(0, Location::Interior),
        ));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn opposite_direction_edge_merges_flipped() {
        let mut list = EdgeList::new();
        list.insert_unique(Edge::new(
            vec![c(0.0, 0.0), c(1.0, 0.0)],
            Label::area(0, Location::Boundary, Location::Interior, Location::Exterior),
        ));
        list.insert_unique(Edge::new(
            vec![c(1.0, 0.0), c(0.0, 0.0)],
            Label::area(1, Location::Boundary, Location::Interior, Location::Exterior),
        ));
        assert_eq!(list.len(), 1);
        let edge = list.iter().next().map(|e| e.label);
        let label = edge.unwrap_or_else(Label::empty_line);
        // The second edge runs the other way, so its sides swap on merge.
        assert_eq!(label.location(1, Position::Left), Some(Location::Exterior));
        assert_eq!(label.location(1, Position::Right), Some(Location::Interior));
    }

    #[test]
    fn shared_boundary_collapses_to_line() {
        // The same boundary traced twice in opposite directions by one
        // geometry encloses nothing.
        let mut list = EdgeList::new();
        list.insert_unique(Edge::new(
            vec![c(0.0, 0.0), c(1.0, 0.0)],
            Label::area(0, Location::Boundary, Location::Interior, Location::Exterior),
        ));
        list.insert_unique(Edge::new(
            vec![c(1.0, 0.0), c(0.0, 0.0)],
            Label::area(0, Location::Boundary, Location::Interior, Location::Exterior),
        ));
        list.compute_labels_from_depths();
        let edge = list.iter().next();
        assert!(edge.is_some_and(|e| e.label.is_line_for(0)));
    }

    #[test]
    fn doubled_back_edge_is_collapsed() {
        let edge = Edge::new(
            vec![c(0.0, 0.0), c(5.0, 0.0), c(0.0, 0.0)],
            Label::area(0, Location::Boundary, Location::Interior, Location::Exterior),
        );
        assert!(edge.is_collapsed());
        let line = edge.collapsed_edge();
        assert_eq!(line.coords, vec![c(0.0, 0.0), c(5.0, 0.0)]);
        assert!(line.label.is_line_for(0));
    }
}
