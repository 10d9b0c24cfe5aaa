//! Intersection nodes recorded on a segment string.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::octant::{compare_in_octant, safe_octant};
use crate::math::Coord;

/// An intersection point lying on a segment string, keyed by the index of
/// the segment it falls on and ordered along that segment by octant.
#[derive(Debug, Clone)]
pub struct SegmentNode {
    pub coord: Coord,
    pub segment_index: usize,
    octant: u8,
    is_interior: bool,
}

impl SegmentNode {
    #[must_use]
    pub fn new(coord: Coord, segment_index: usize, coords: &[Coord]) -> Self {
        let octant = if segment_index + 1 < coords.len() {
            safe_octant(&coords[segment_index], &coords[segment_index + 1])
        } else {
            0
        };
        let is_interior = coord != coords[segment_index];
        Self {
            coord,
            segment_index,
            octant,
            is_interior,
        }
    }

    #[must_use]
    pub fn is_interior(&self) -> bool {
        self.is_interior
    }
}

impl PartialEq for SegmentNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SegmentNode {}

impl PartialOrd for SegmentNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SegmentNode {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.segment_index.cmp(&other.segment_index) {
            Ordering::Equal => {}
            ord => return ord,
        }
        if self.coord == other.coord {
            return Ordering::Equal;
        }
        // The segment start point sorts before any interior node on it.
        if !self.is_interior {
            return Ordering::Less;
        }
        if !other.is_interior {
            return Ordering::Greater;
        }
        compare_in_octant(self.octant, &self.coord, &other.coord)
    }
}

/// The ordered set of nodes on one segment string.
#[derive(Debug, Default)]
pub struct SegmentNodeList {
    nodes: BTreeSet<SegmentNode>,
}

impl SegmentNodeList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, coord: Coord, segment_index: usize, coords: &[Coord]) {
        self.nodes.insert(SegmentNode::new(coord, segment_index, coords));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SegmentNode> {
        self.nodes.iter()
    }

    /// Adds nodes for the first and last vertex, so splitting always
    /// produces substrings covering the whole string.
    pub fn add_endpoints(&mut self, coords: &[Coord]) {
        let last = coords.len() - 1;
        self.add(coords[0], 0, coords);
        self.add(coords[last], last, coords);
    }

    /// Adds nodes at vertices where the string doubles back on itself, so
    /// the collapsed spike is split off into its own substring.
    pub fn add_collapsed_nodes(&mut self, coords: &[Coord]) {
        let mut collapsed: Vec<usize> = Vec::new();
        for i in 0..coords.len().saturating_sub(2) {
            if coords[i] == coords[i + 2] {
                collapsed.push(i + 1);
            }
        }
        let nodes: Vec<SegmentNode> = self.nodes.iter().cloned().collect();
        for pair in nodes.windows(2) {
            if let Some(index) = Self::find_collapse_index(&pair[0], &pair[1]) {
                collapsed.push(index);
            }
        }
        for index in collapsed {
            self.add(coords[index], index, coords);
        }
    }

    /// A pair of equal-coordinate nodes one vertex apart marks a collapsed
    /// spike introduced by noding.
    fn find_collapse_index(prev: &SegmentNode, next: &SegmentNode) -> Option<usize> {
        if prev.coord != next.coord {
            return None;
        }
        let mut vertices_between = next.segment_index - prev.segment_index;
        if !next.is_interior {
            vertices_between -= 1;
        }
        if vertices_between == 1 {
            Some(prev.segment_index + 1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn nodes_sort_along_the_string() {
        let coords = vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0)];
        let mut list = SegmentNodeList::new();
        list.add(c(10.0, 5.0), 1, &coords);
        list.add(c(3.0, 0.0), 0, &coords);
        list.add(c(7.0, 0.0), 0, &coords);
        list.add_endpoints(&coords);

        let order: Vec<Coord> = list.iter().map(|n| n.coord).collect();
        assert_eq!(
            order,
            vec![c(0.0, 0.0), c(3.0, 0.0), c(7.0, 0.0), c(10.0, 5.0), c(10.0, 10.0)]
        );
    }

    #[test]
    fn duplicate_nodes_collapse() {
        let coords = vec![c(0.0, 0.0), c(10.0, 0.0)];
        let mut list = SegmentNodeList::new();
        list.add(c(5.0, 0.0), 0, &coords);
        list.add(c(5.0, 0.0), 0, &coords);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn endpoint_node_is_not_interior() {
        let coords = vec![c(0.0, 0.0), c(10.0, 0.0)];
        let node = SegmentNode::new(c(0.0, 0.0), 0, &coords);
        assert!(!node.is_interior());
        let node = SegmentNode::new(c(4.0, 0.0), 0, &coords);
        assert!(node.is_interior());
    }

    #[test]
    fn collapsed_vertex_detection() {
        // The string doubles back at index 1.
        let coords = vec![c(0.0, 0.0), c(5.0, 0.0), c(0.0, 0.0), c(0.0, 5.0)];
        let mut list = SegmentNodeList::new();
        list.add_endpoints(&coords);
        list.add_collapsed_nodes(&coords);
        assert!(list.iter().any(|n| n.segment_index == 1 && n.coord == c(5.0, 0.0)));
    }
}
