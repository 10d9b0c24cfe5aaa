//! Segment strings that accumulate intersection nodes.

use std::cell::RefCell;
use std::rc::Rc;

use super::segment_node::{SegmentNode, SegmentNodeList};
use crate::math::{Coord, LineIntersector};

/// A polyline that records the intersection points computed against it and
/// can split itself into fully noded substrings.
///
/// Strings are shared between the spatial index and the intersection
/// detectors via `Rc`, so the node list sits behind a `RefCell`. The
/// coordinate sequence itself never changes after construction.
#[derive(Debug)]
pub struct NodedSegmentString<D> {
    coords: Vec<Coord>,
    data: D,
    nodes: RefCell<SegmentNodeList>,
}

impl<D: Clone> NodedSegmentString<D> {
    #[must_use]
    pub fn new(coords: Vec<Coord>, data: D) -> Self {
        Self {
            coords,
            data,
            nodes: RefCell::new(SegmentNodeList::new()),
        }
    }

    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    #[must_use]
    pub fn data(&self) -> &D {
        &self.data
    }

    #[must_use]
    pub fn num_points(&self) -> usize {
        self.coords.len()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.coords.first() == self.coords.last()
    }

    /// Records an intersection point on the given segment.
    ///
    /// A point coincident with the segment's far endpoint is re-homed to
    /// the next segment, so every node is keyed by the vertex at or before
    /// it.
    pub fn add_intersection(&self, pt: &Coord, segment_index: usize) {
        let mut index = segment_index;
        let next = index + 1;
        if next < self.coords.len() && *pt == self.coords[next] {
            index = next;
        }
        self.nodes.borrow_mut().add(*pt, index, &self.coords);
    }

    /// Records every intersection point held by `li` against the given
    /// segment of this string.
    pub fn add_intersections(&self, li: &LineIntersector, segment_index: usize) {
        for k in 0..li.intersection_count() {
            self.add_intersection(&li.intersection(k), segment_index);
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.borrow().len()
    }

    /// Splits a batch of strings at their recorded nodes, returning the
    /// fully noded substrings.
    #[must_use]
    pub fn noded_substrings(strings: &[Rc<Self>]) -> Vec<Rc<Self>> {
        let mut result = Vec::new();
        for string in strings {
            string.collect_substrings(&mut result);
        }
        result
    }

    fn collect_substrings(&self, out: &mut Vec<Rc<Self>>) {
        let mut nodes = self.nodes.borrow_mut();
        nodes.add_endpoints(&self.coords);
        nodes.add_collapsed_nodes(&self.coords);
        let ordered: Vec<SegmentNode> = nodes.iter().cloned().collect();
        drop(nodes);
        for pair in ordered.windows(2) {
            out.push(Rc::new(self.split_edge(&pair[0], &pair[1])));
        }
    }

    fn split_edge(&self, n0: &SegmentNode, n1: &SegmentNode) -> Self {
        let mut pts = Vec::with_capacity(n1.segment_index - n0.segment_index + 2);
        pts.push(n0.coord);
        pts.extend_from_slice(&self.coords[n0.segment_index + 1..=n1.segment_index]);
        // The far node duplicates the last vertex unless it sits in a
        // segment interior.
        let last_seg_start = self.coords[n1.segment_index];
        if n1.is_interior() || n1.coord != last_seg_start {
            pts.push(n1.coord);
        }
        Self::new(pts, self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    fn coords_of(strings: &[Rc<NodedSegmentString<u8>>]) -> Vec<Vec<Coord>> {
        strings.iter().map(|s| s.coords().to_vec()).collect()
    }

    #[test]
    fn split_at_interior_node() {
        let s = Rc::new(NodedSegmentString::new(vec![c(0.0, 0.0), c(10.0, 0.0)], 0_u8));
        s.add_intersection(&c(4.0, 0.0), 0);
        let parts = NodedSegmentString::noded_substrings(&[s]);
        assert_eq!(
            coords_of(&parts),
            vec![vec![c(0.0, 0.0), c(4.0, 0.0)], vec![c(4.0, 0.0), c(10.0, 0.0)]]
        );
    }

    #[test]
    fn node_at_far_endpoint_rehomes() {
        let s = NodedSegmentString::new(vec![c(0.0, 0.0), c(5.0, 0.0), c(10.0, 0.0)], 0_u8);
        s.add_intersection(&c(5.0, 0.0), 0);
        // The node lands on segment 1, so splitting yields the two
        // original segments rather than a degenerate piece.
        let parts = NodedSegmentString::noded_substrings(&[Rc::new(s)]);
        assert_eq!(
            coords_of(&parts),
            vec![vec![c(0.0, 0.0), c(5.0, 0.0)], vec![c(5.0, 0.0), c(10.0, 0.0)]]
        );
    }

    #[test]
    fn no_nodes_yields_whole_string() {
        let s = Rc::new(NodedSegmentString::new(
            vec![c(0.0, 0.0), c(5.0, 5.0), c(10.0, 0.0)],
            0_u8,
        ));
        let parts = NodedSegmentString::noded_substrings(&[s]);
        assert_eq!(coords_of(&parts), vec![vec![c(0.0, 0.0), c(5.0, 5.0), c(10.0, 0.0)]]);
    }

    #[test]
    fn closed_ring_splits_at_two_nodes() {
        let ring = vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0), c(0.0, 10.0), c(0.0, 0.0)];
        let s = Rc::new(NodedSegmentString::new(ring, 0_u8));
        s.add_intersection(&c(5.0, 0.0), 0);
        s.add_intersection(&c(10.0, 5.0), 1);
        let parts = NodedSegmentString::noded_substrings(&[s]);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].coords(), &[c(0.0, 0.0), c(5.0, 0.0)]);
        assert_eq!(parts[1].coords(), &[c(5.0, 0.0), c(10.0, 0.0), c(10.0, 5.0)]);
        assert_eq!(
            parts[2].coords(),
            &[c(10.0, 5.0), c(10.0, 10.0), c(0.0, 10.0), c(0.0, 0.0)]
        );
    }
}
