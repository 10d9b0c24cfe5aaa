//! Spatial-index driven noding.

use std::rc::Rc;

use rstar::{RTree, RTreeObject, AABB};

use super::chain::MonotoneChain;
use super::segment_intersector::SegmentIntersector;
use super::segment_string::NodedSegmentString;
use crate::math::Envelope;

struct ChainEntry {
    aabb: AABB<[f64; 2]>,
    index: usize,
}

impl RTreeObject for ChainEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.aabb
    }
}

fn to_aabb(env: &Envelope) -> AABB<[f64; 2]> {
    AABB::from_corners([env.min_x, env.min_y], [env.max_x, env.max_y])
}

/// Finds all segment intersections within one batch of strings.
///
/// Strings are decomposed into monotone chains, the chain envelopes are
/// bulk-loaded into an R-tree, and only chain pairs with overlapping
/// envelopes are searched for intersecting segments.
#[derive(Debug, Default)]
pub struct McIndexNoder;

impl McIndexNoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn compute_nodes<D, S>(&self, strings: &[Rc<NodedSegmentString<D>>], si: &mut S)
    where
        D: Clone,
        S: SegmentIntersector<D>,
    {
        let mut next_id = 0;
        let mut chains: Vec<MonotoneChain<D>> = Vec::new();
        for string in strings {
            chains.extend(MonotoneChain::chains_for(string, &mut next_id));
        }
        let entries: Vec<ChainEntry> = chains
            .iter()
            .enumerate()
            .map(|(index, chain)| ChainEntry {
                aabb: to_aabb(&chain.envelope()),
                index,
            })
            .collect();
        let tree = RTree::bulk_load(entries);

        for chain in &chains {
            for entry in tree.locate_in_envelope_intersecting(&to_aabb(&chain.envelope())) {
                let other = &chains[entry.index];
                // Each chain pair is visited from both sides; keep one.
                if other.id <= chain.id {
                    continue;
                }
                chain.compute_overlaps(other, &mut |i0, i1| {
                    si.process_intersections(chain.string(), i0, other.string(), i1);
                });
                if si.is_done() {
                    return;
                }
            }
        }
    }
}

/// Finds intersections between a fixed base set of strings and any number
/// of query batches, indexing the base set once.
pub struct McIndexSegmentSetMutualIntersector<D> {
    base_chains: Vec<MonotoneChain<D>>,
    tree: RTree<ChainEntry>,
}

impl<D: Clone> McIndexSegmentSetMutualIntersector<D> {
    #[must_use]
    pub fn new(base: &[Rc<NodedSegmentString<D>>]) -> Self {
        let mut next_id = 0;
        let mut base_chains: Vec<MonotoneChain<D>> = Vec::new();
        for string in base {
            base_chains.extend(MonotoneChain::chains_for(string, &mut next_id));
        }
        let entries: Vec<ChainEntry> = base_chains
            .iter()
            .enumerate()
            .map(|(index, chain)| ChainEntry {
                aabb: to_aabb(&chain.envelope()),
                index,
            })
            .collect();
        let tree = RTree::bulk_load(entries);
        Self { base_chains, tree }
    }

    pub fn process<S>(&self, strings: &[Rc<NodedSegmentString<D>>], si: &mut S)
    where
        S: SegmentIntersector<D>,
    {
        let mut next_id = 0;
        for string in strings {
            for chain in MonotoneChain::chains_for(string, &mut next_id) {
                for entry in self
                    .tree
                    .locate_in_envelope_intersecting(&to_aabb(&chain.envelope()))
                {
                    let base_chain = &self.base_chains[entry.index];
                    base_chain.compute_overlaps(&chain, &mut |i0, i1| {
                        si.process_intersections(base_chain.string(), i0, chain.string(), i1);
                    });
                    if si.is_done() {
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Coord;
    use crate::noding::segment_intersector::IntersectionAdder;

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    fn string(coords: Vec<Coord>) -> Rc<NodedSegmentString<u8>> {
        Rc::new(NodedSegmentString::new(coords, 0))
    }

    #[test]
    fn crossing_strings_are_noded() {
        let a = string(vec![c(0.0, 0.0), c(10.0, 10.0)]);
        let b = string(vec![c(0.0, 10.0), c(10.0, 0.0)]);
        let strings = vec![Rc::clone(&a), Rc::clone(&b)];
        let mut adder = IntersectionAdder::new();
        McIndexNoder::new().compute_nodes(&strings, &mut adder);
        assert_eq!(adder.num_proper_intersections, 1);

        let parts = NodedSegmentString::noded_substrings(&strings);
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|p| p.coords().contains(&c(5.0, 5.0))));
    }

    #[test]
    fn self_intersecting_string_is_noded() {
        // A bowtie: the two diagonal strokes cross at (5, 5).
        let s = string(vec![c(0.0, 0.0), c(10.0, 10.0), c(10.0, 0.0), c(0.0, 10.0)]);
        let strings = vec![Rc::clone(&s)];
        let mut adder = IntersectionAdder::new();
        McIndexNoder::new().compute_nodes(&strings, &mut adder);
        assert!(adder.has_interior);
        let parts = NodedSegmentString::noded_substrings(&strings);
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn disjoint_strings_stay_whole() {
        let a = string(vec![c(0.0, 0.0), c(1.0, 0.0)]);
        let b = string(vec![c(0.0, 5.0), c(1.0, 5.0)]);
        let strings = vec![a, b];
        let mut adder = IntersectionAdder::new();
        McIndexNoder::new().compute_nodes(&strings, &mut adder);
        assert!(!adder.has_intersection());
        assert_eq!(NodedSegmentString::noded_substrings(&strings).len(), 2);
    }

    #[test]
    fn mutual_intersector_nodes_both_sets() {
        let base = vec![string(vec![c(0.0, 5.0), c(10.0, 5.0)])];
        let query = vec![string(vec![c(5.0, 0.0), c(5.0, 10.0)])];
        let mutual = McIndexSegmentSetMutualIntersector::new(&base);
        let mut adder = IntersectionAdder::new();
        mutual.process(&query, &mut adder);
        assert!(adder.has_proper);
        assert_eq!(base[0].node_count(), 1);
        assert_eq!(query[0].node_count(), 1);
    }
}
