use super::distance::point_segment_distance;
use super::envelope::Envelope;
use super::orientation::orientation_index;
use super::Coord;

/// Classification of a segment-segment intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectionKind {
    /// The segments do not intersect.
    None,
    /// The segments intersect in a single point.
    Point,
    /// The segments overlap along a collinear section.
    Collinear,
}

/// Robust intersector for pairs of 2D line segments.
///
/// Orientation tests use adaptive-precision predicates, so the *kind* of
/// intersection is always exact. Single-point intersection coordinates are
/// computed by parametric interpolation and snapped onto an input endpoint
/// whenever the intersection coincides with one, which guarantees that an
/// intersection at a shared vertex is reported with that vertex's exact
/// coordinates.
#[derive(Debug, Clone)]
pub struct LineIntersector {
    kind: IntersectionKind,
    is_proper: bool,
    int_pts: [Coord; 2],
    input: [[Coord; 2]; 2],
}

impl Default for LineIntersector {
    fn default() -> Self {
        Self::new()
    }
}

impl LineIntersector {
    #[must_use]
    pub fn new() -> Self {
        let origin = Coord::new(0.0, 0.0);
        Self {
            kind: IntersectionKind::None,
            is_proper: false,
            int_pts: [origin, origin],
            input: [[origin, origin], [origin, origin]],
        }
    }

    /// Computes the intersection of segments `p1-p2` and `q1-q2`, replacing
    /// any previously stored result.
    pub fn compute_intersection(&mut self, p1: &Coord, p2: &Coord, q1: &Coord, q2: &Coord) {
        self.input = [[*p1, *p2], [*q1, *q2]];
        self.is_proper = false;
        self.kind = self.compute(p1, p2, q1, q2);
    }

    /// Returns `true` if the last computed pair intersects at all.
    #[must_use]
    pub fn has_intersection(&self) -> bool {
        self.kind != IntersectionKind::None
    }

    #[must_use]
    pub fn kind(&self) -> IntersectionKind {
        self.kind
    }

    /// Number of intersection points (0, 1, or 2).
    #[must_use]
    pub fn intersection_count(&self) -> usize {
        match self.kind {
            IntersectionKind::None => 0,
            IntersectionKind::Point => 1,
            IntersectionKind::Collinear => 2,
        }
    }

    /// Returns intersection point `k`.
    #[must_use]
    pub fn intersection(&self, k: usize) -> Coord {
        self.int_pts[k]
    }

    /// Returns `true` if the intersection is a single point lying in the
    /// open interior of both segments.
    #[must_use]
    pub fn is_proper(&self) -> bool {
        self.has_intersection() && self.is_proper
    }

    /// Returns `true` if any intersection point lies in the interior of at
    /// least one of the input segments.
    #[must_use]
    pub fn is_interior_intersection(&self) -> bool {
        (0..self.intersection_count()).any(|k| self.is_interior_intersection_at(k))
    }

    fn is_interior_intersection_at(&self, k: usize) -> bool {
        let pt = self.int_pts[k];
        self.input
            .iter()
            .any(|seg| seg.iter().all(|endpoint| *endpoint != pt))
    }

    fn compute(&mut self, p1: &Coord, p2: &Coord, q1: &Coord, q2: &Coord) -> IntersectionKind {
        if !Envelope::intersects_segments(p1, p2, q1, q2) {
            return IntersectionKind::None;
        }

        let pq1 = orientation_index(p1, p2, q1);
        let pq2 = orientation_index(p1, p2, q2);
        if (pq1 > 0 && pq2 > 0) || (pq1 < 0 && pq2 < 0) {
            return IntersectionKind::None;
        }

        let qp1 = orientation_index(q1, q2, p1);
        let qp2 = orientation_index(q1, q2, p2);
        if (qp1 > 0 && qp2 > 0) || (qp1 < 0 && qp2 < 0) {
            return IntersectionKind::None;
        }

        if pq1 == 0 && pq2 == 0 && qp1 == 0 && qp2 == 0 {
            return self.compute_collinear(p1, p2, q1, q2);
        }

        // The segments intersect in exactly one point. A zero orientation
        // means the intersection lies on a segment endpoint, so the exact
        // endpoint coordinate is used.
        if pq1 == 0 || pq2 == 0 || qp1 == 0 || qp2 == 0 {
            self.int_pts[0] = if p1 == q1 || p1 == q2 {
                *p1
            } else if p2 == q1 || p2 == q2 {
                *p2
            } else if pq1 == 0 {
                *q1
            } else if pq2 == 0 {
                *q2
            } else if qp1 == 0 {
                *p1
            } else {
                *p2
            };
        } else {
            self.is_proper = true;
            self.int_pts[0] = Self::intersection_point(p1, p2, q1, q2);
        }
        IntersectionKind::Point
    }

    fn compute_collinear(
        &mut self,
        p1: &Coord,
        p2: &Coord,
        q1: &Coord,
        q2: &Coord,
    ) -> IntersectionKind {
        let q1_in_p = Envelope::intersects_point(p1, p2, q1);
        let q2_in_p = Envelope::intersects_point(p1, p2, q2);
        let p1_in_q = Envelope::intersects_point(q1, q2, p1);
        let p2_in_q = Envelope::intersects_point(q1, q2, p2);

        if q1_in_p && q2_in_p {
            self.int_pts = [*q1, *q2];
            return IntersectionKind::Collinear;
        }
        if p1_in_q && p2_in_q {
            self.int_pts = [*p1, *p2];
            return IntersectionKind::Collinear;
        }
        if q1_in_p && p1_in_q {
            self.int_pts = [*q1, *p1];
            return Self::collinear_kind(q1, p1, q2_in_p, p2_in_q);
        }
        if q1_in_p && p2_in_q {
            self.int_pts = [*q1, *p2];
            return Self::collinear_kind(q1, p2, q2_in_p, p1_in_q);
        }
        if q2_in_p && p1_in_q {
            self.int_pts = [*q2, *p1];
            return Self::collinear_kind(q2, p1, q1_in_p, p2_in_q);
        }
        if q2_in_p && p2_in_q {
            self.int_pts = [*q2, *p2];
            return Self::collinear_kind(q2, p2, q1_in_p, p1_in_q);
        }
        IntersectionKind::None
    }

    /// A shared endpoint with no further overlap is a point intersection;
    /// anything else collinear is an overlap.
    fn collinear_kind(a: &Coord, b: &Coord, other1: bool, other2: bool) -> IntersectionKind {
        if a == b && !other1 && !other2 {
            IntersectionKind::Point
        } else {
            IntersectionKind::Collinear
        }
    }

    /// Computes the interior intersection point of two crossing segments.
    fn intersection_point(p1: &Coord, p2: &Coord, q1: &Coord, q2: &Coord) -> Coord {
        let dpx = p2.x - p1.x;
        let dpy = p2.y - p1.y;
        let dqx = q2.x - q1.x;
        let dqy = q2.y - q1.y;

        let denom = dpx * dqy - dpy * dqx;
        let t = ((q1.x - p1.x) * dqy - (q1.y - p1.y) * dqx) / denom;
        let pt = Coord::new(p1.x + t * dpx, p1.y + t * dpy);

        // A badly conditioned pair can push the computed point outside the
        // segment envelopes; fall back to the nearest input endpoint.
        if Envelope::intersects_point(p1, p2, &pt) && Envelope::intersects_point(q1, q2, &pt) {
            pt
        } else {
            Self::nearest_endpoint(p1, p2, q1, q2)
        }
    }

    /// Endpoint of either segment closest to the other segment.
    fn nearest_endpoint(p1: &Coord, p2: &Coord, q1: &Coord, q2: &Coord) -> Coord {
        let mut nearest = *p1;
        let mut min_dist = point_segment_distance(p1, q1, q2);
        for (pt, dist) in [
            (p2, point_segment_distance(p2, q1, q2)),
            (q1, point_segment_distance(q1, p1, p2)),
            (q2, point_segment_distance(q2, p1, p2)),
        ] {
            if dist < min_dist {
                min_dist = dist;
                nearest = *pt;
            }
        }
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn crossing_segments() {
        let mut li = LineIntersector::new();
        li.compute_intersection(&c(0.0, 0.0), &c(10.0, 10.0), &c(0.0, 10.0), &c(10.0, 0.0));
        assert_eq!(li.kind(), IntersectionKind::Point);
        assert!(li.is_proper());
        assert!(li.is_interior_intersection());
        assert_eq!(li.intersection(0), c(5.0, 5.0));
    }

    #[test]
    fn disjoint_segments() {
        let mut li = LineIntersector::new();
        li.compute_intersection(&c(0.0, 0.0), &c(1.0, 0.0), &c(0.0, 1.0), &c(1.0, 1.0));
        assert!(!li.has_intersection());
        assert_eq!(li.intersection_count(), 0);
    }

    #[test]
    fn endpoint_touch_is_not_proper() {
        let mut li = LineIntersector::new();
        li.compute_intersection(&c(0.0, 0.0), &c(10.0, 0.0), &c(5.0, 0.0), &c(5.0, 10.0));
        assert_eq!(li.kind(), IntersectionKind::Point);
        assert!(!li.is_proper());
        // Interior to the first segment even though it ends the second.
        assert!(li.is_interior_intersection());
        assert_eq!(li.intersection(0), c(5.0, 0.0));
    }

    #[test]
    fn shared_vertex() {
        let mut li = LineIntersector::new();
        li.compute_intersection(&c(0.0, 0.0), &c(5.0, 5.0), &c(5.0, 5.0), &c(10.0, 0.0));
        assert_eq!(li.kind(), IntersectionKind::Point);
        assert!(!li.is_proper());
        assert_eq!(li.intersection(0), c(5.0, 5.0));
    }

    #[test]
    fn collinear_overlap() {
        let mut li = LineIntersector::new();
        li.compute_intersection(&c(0.0, 0.0), &c(10.0, 0.0), &c(5.0, 0.0), &c(15.0, 0.0));
        assert_eq!(li.kind(), IntersectionKind::Collinear);
        assert_eq!(li.intersection_count(), 2);
        let pts = [li.intersection(0), li.intersection(1)];
        assert!(pts.contains(&c(5.0, 0.0)));
        assert!(pts.contains(&c(10.0, 0.0)));
    }

    #[test]
    fn collinear_touch_at_endpoints_is_point() {
        let mut li = LineIntersector::new();
        li.compute_intersection(&c(0.0, 0.0), &c(5.0, 0.0), &c(5.0, 0.0), &c(10.0, 0.0));
        assert_eq!(li.kind(), IntersectionKind::Point);
        assert_eq!(li.intersection(0), c(5.0, 0.0));
    }

    #[test]
    fn proper_intersection_interior_flag() {
        let mut li = LineIntersector::new();
        li.compute_intersection(&c(0.0, 5.0), &c(10.0, 5.0), &c(5.0, 0.0), &c(5.0, 10.0));
        assert!(li.is_proper());
        assert!(li.is_interior_intersection());
    }
}
