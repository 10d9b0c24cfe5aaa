//! Monotone chains over segment strings.
//!
//! A chain is a maximal run of segments whose direction vectors stay in one
//! quadrant. Within a chain no two segments intersect, and the envelope of
//! any subrange is the envelope of its two end vertices, which makes
//! pairwise overlap search a cheap binary subdivision.

use std::rc::Rc;

use super::segment_string::NodedSegmentString;
use crate::math::{quadrant, Coord, Envelope};

#[derive(Debug)]
pub struct MonotoneChain<D> {
    string: Rc<NodedSegmentString<D>>,
    start: usize,
    end: usize,
    pub id: usize,
}

impl<D: Clone> MonotoneChain<D> {
    #[must_use]
    pub fn string(&self) -> &Rc<NodedSegmentString<D>> {
        &self.string
    }

    #[must_use]
    pub fn envelope(&self) -> Envelope {
        let coords = self.string.coords();
        Envelope::from_coords(&coords[self.start], &coords[self.end])
    }

    /// Splits a string into its monotone chains, numbering them from
    /// `next_id`.
    pub fn chains_for(string: &Rc<NodedSegmentString<D>>, next_id: &mut usize) -> Vec<Self> {
        let coords = string.coords();
        let mut chains = Vec::new();
        if coords.len() < 2 {
            return chains;
        }
        let mut start = 0;
        loop {
            let end = Self::find_chain_end(coords, start);
            chains.push(Self {
                string: Rc::clone(string),
                start,
                end,
                id: *next_id,
            });
            *next_id += 1;
            start = end;
            if start >= coords.len() - 1 {
                break;
            }
        }
        chains
    }

    /// Last point index of the monotone run beginning at `start`.
    fn find_chain_end(coords: &[Coord], start: usize) -> usize {
        let mut safe_start = start;
        // Skip zero-length leading segments to get a usable direction.
        while safe_start < coords.len() - 1 && coords[safe_start] == coords[safe_start + 1] {
            safe_start += 1;
        }
        if safe_start >= coords.len() - 1 {
            return coords.len() - 1;
        }
        let chain_quad = quadrant(&coords[safe_start], &coords[safe_start + 1]);
        let mut last = start + 1;
        while last < coords.len() {
            if coords[last - 1] != coords[last]
                && quadrant(&coords[last - 1], &coords[last]) != chain_quad
            {
                break;
            }
            last += 1;
        }
        last - 1
    }

    /// Reports each candidate segment pair between `self` and `other`
    /// whose envelopes overlap.
    pub fn compute_overlaps<F: FnMut(usize, usize)>(&self, other: &Self, f: &mut F) {
        self.overlap_ranges(self.start, self.end, other, other.start, other.end, f);
    }

    #[allow(clippy::too_many_arguments)]
    fn overlap_ranges<F: FnMut(usize, usize)>(
        &self,
        start0: usize,
        end0: usize,
        other: &Self,
        start1: usize,
        end1: usize,
        f: &mut F,
    ) {
        if end0 - start0 == 1 && end1 - start1 == 1 {
            f(start0, start1);
            return;
        }
        let c0 = self.string.coords();
        let c1 = other.string.coords();
        if !Envelope::intersects_segments(&c0[start0], &c0[end0], &c1[start1], &c1[end1]) {
            return;
        }
        let mid0 = (start0 + end0) / 2;
        let mid1 = (start1 + end1) / 2;
        if start0 < mid0 {
            if start1 < mid1 {
                self.overlap_ranges(start0, mid0, other, start1, mid1, f);
            }
            if mid1 < end1 {
                self.overlap_ranges(start0, mid0, other, mid1, end1, f);
            }
        }
        if mid0 < end0 {
            if start1 < mid1 {
                self.overlap_ranges(mid0, end0, other, start1, mid1, f);
            }
            if mid1 < end1 {
                self.overlap_ranges(mid0, end0, other, mid1, end1, f);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    fn string(coords: Vec<Coord>) -> Rc<NodedSegmentString<u8>> {
        Rc::new(NodedSegmentString::new(coords, 0))
    }

    #[test]
    fn monotone_string_is_one_chain() {
        let s = string(vec![c(0.0, 0.0), c(1.0, 1.0), c(3.0, 2.0), c(5.0, 5.0)]);
        let mut id = 0;
        let chains = MonotoneChain::chains_for(&s, &mut id);
        assert_eq!(chains.len(), 1);
        assert_eq!(id, 1);
    }

    #[test]
    fn direction_change_starts_new_chain() {
        let s = string(vec![c(0.0, 0.0), c(5.0, 5.0), c(10.0, 0.0)]);
        let mut id = 0;
        let chains = MonotoneChain::chains_for(&s, &mut id);
        assert_eq!(chains.len(), 2);
    }

    #[test]
    fn square_ring_has_four_chains() {
        let s = string(vec![
            c(0.0, 0.0),
            c(10.0, 0.0),
            c(10.0, 10.0),
            c(0.0, 10.0),
            c(0.0, 0.0),
        ]);
        let mut id = 0;
        let chains = MonotoneChain::chains_for(&s, &mut id);
        // The NE run covers the first two segments; the west and south
        // segments each form their own chain.
        assert_eq!(chains.len(), 3);
    }

    #[test]
    fn overlaps_find_the_crossing_pair() {
        let a = string(vec![c(0.0, 0.0), c(10.0, 10.0)]);
        let b = string(vec![c(0.0, 10.0), c(10.0, 0.0)]);
        let mut id = 0;
        let ca = MonotoneChain::chains_for(&a, &mut id);
        let cb = MonotoneChain::chains_for(&b, &mut id);
        let mut pairs = Vec::new();
        ca[0].compute_overlaps(&cb[0], &mut |i, j| pairs.push((i, j)));
        assert_eq!(pairs, vec![(0, 0)]);
    }

    #[test]
    fn distant_chains_produce_no_pairs() {
        let a = string(vec![c(0.0, 0.0), c(1.0, 1.0), c(2.0, 3.0)]);
        let b = string(vec![c(100.0, 100.0), c(101.0, 101.0), c(102.0, 103.0)]);
        let mut id = 0;
        let ca = MonotoneChain::chains_for(&a, &mut id);
        let cb = MonotoneChain::chains_for(&b, &mut id);
        let mut pairs = Vec::new();
        ca[0].compute_overlaps(&cb[0], &mut |i, j| pairs.push((i, j)));
        assert!(pairs.is_empty());
    }
}
