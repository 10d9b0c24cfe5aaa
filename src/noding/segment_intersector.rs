//! Callbacks invoked by the noder for candidate segment pairs.

use std::rc::Rc;

use super::segment_string::NodedSegmentString;
use crate::math::{Coord, LineIntersector};

/// Receives every candidate segment pair produced by a noder and decides
/// what to record.
pub trait SegmentIntersector<D> {
    fn process_intersections(
        &mut self,
        e0: &Rc<NodedSegmentString<D>>,
        i0: usize,
        e1: &Rc<NodedSegmentString<D>>,
        i1: usize,
    );

    /// Allows the noder to stop early once the intersector has what it
    /// needs.
    fn is_done(&self) -> bool {
        false
    }
}

/// Computes intersections between candidate segments and records the
/// non-trivial ones as nodes on both strings.
#[derive(Debug, Default)]
pub struct IntersectionAdder {
    li: LineIntersector,
    pub num_intersections: usize,
    pub num_interior_intersections: usize,
    pub num_proper_intersections: usize,
    pub has_proper: bool,
    pub has_proper_interior: bool,
    pub has_interior: bool,
}

impl IntersectionAdder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_intersection(&self) -> bool {
        self.num_intersections > 0
    }

    /// An intersection between consecutive segments of one string at their
    /// shared vertex carries no information, so it is not recorded. For a
    /// closed string the first and last segments count as consecutive.
    fn is_trivial_intersection<D: Clone>(
        &self,
        e0: &Rc<NodedSegmentString<D>>,
        i0: usize,
        e1: &Rc<NodedSegmentString<D>>,
        i1: usize,
    ) -> bool {
        if !Rc::ptr_eq(e0, e1) || self.li.intersection_count() != 1 {
            return false;
        }
        if i0.abs_diff(i1) == 1 {
            return true;
        }
        if e0.is_closed() {
            let max_seg_index = e0.num_points() - 2;
            if (i0 == 0 && i1 == max_seg_index) || (i1 == 0 && i0 == max_seg_index) {
                return true;
            }
        }
        false
    }
}

impl<D: Clone> SegmentIntersector<D> for IntersectionAdder {
    fn process_intersections(
        &mut self,
        e0: &Rc<NodedSegmentString<D>>,
        i0: usize,
        e1: &Rc<NodedSegmentString<D>>,
        i1: usize,
    ) {
        if Rc::ptr_eq(e0, e1) && i0 == i1 {
            return;
        }
        let p0 = e0.coords();
        let p1 = e1.coords();
        self.li
            .compute_intersection(&p0[i0], &p0[i0 + 1], &p1[i1], &p1[i1 + 1]);
        if !self.li.has_intersection() {
            return;
        }

        self.num_intersections += 1;
        if self.li.is_interior_intersection() {
            self.num_interior_intersections += 1;
            self.has_interior = true;
        }
        if self.is_trivial_intersection(e0, i0, e1, i1) {
            return;
        }
        e0.add_intersections(&self.li, i0);
        e1.add_intersections(&self.li, i1);
        if self.li.is_proper() {
            self.num_proper_intersections += 1;
            self.has_proper = true;
            self.has_proper_interior = true;
        }
    }
}

/// Searches for a single intersection point interior to a segment, as
/// evidence that a set of strings is not fully noded.
#[derive(Debug, Default)]
pub struct InteriorIntersectionFinder {
    li: LineIntersector,
    intersection: Option<Coord>,
}

impl InteriorIntersectionFinder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn intersection(&self) -> Option<Coord> {
        self.intersection
    }
}

impl<D: Clone> SegmentIntersector<D> for InteriorIntersectionFinder {
    fn process_intersections(
        &mut self,
        e0: &Rc<NodedSegmentString<D>>,
        i0: usize,
        e1: &Rc<NodedSegmentString<D>>,
        i1: usize,
    ) {
        if self.intersection.is_some() {
            return;
        }
        if Rc::ptr_eq(e0, e1) && i0 == i1 {
            return;
        }
        let p0 = e0.coords();
        let p1 = e1.coords();
        self.li
            .compute_intersection(&p0[i0], &p0[i0 + 1], &p1[i1], &p1[i1 + 1]);
        if self.li.has_intersection() && self.li.is_interior_intersection() {
            self.intersection = Some(self.li.intersection(0));
        }
    }

    fn is_done(&self) -> bool {
        self.intersection.is_some()
    }
}
