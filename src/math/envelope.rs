use super::Coord;

/// Axis-aligned bounding rectangle.
///
/// A "null" envelope (containing nothing) is represented by `min > max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self::null()
    }
}

impl Envelope {
    /// Creates an envelope containing nothing.
    #[must_use]
    pub fn null() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Creates the envelope of two coordinates, in any order.
    #[must_use]
    pub fn from_coords(p: &Coord, q: &Coord) -> Self {
        Self {
            min_x: p.x.min(q.x),
            min_y: p.y.min(q.y),
            max_x: p.x.max(q.x),
            max_y: p.y.max(q.y),
        }
    }

    /// Creates the envelope of a coordinate slice.
    #[must_use]
    pub fn from_points(coords: &[Coord]) -> Self {
        let mut env = Self::null();
        for c in coords {
            env.expand_to_include(c);
        }
        env
    }

    /// Returns `true` if this envelope contains nothing.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.min_x > self.max_x
    }

    /// Grows the envelope to cover `coord`.
    pub fn expand_to_include(&mut self, coord: &Coord) {
        self.min_x = self.min_x.min(coord.x);
        self.min_y = self.min_y.min(coord.y);
        self.max_x = self.max_x.max(coord.x);
        self.max_y = self.max_y.max(coord.y);
    }

    /// Grows the envelope to cover `other`.
    pub fn expand_to_include_envelope(&mut self, other: &Envelope) {
        if other.is_null() {
            return;
        }
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// Returns `true` if the two envelopes share any point.
    #[must_use]
    pub fn intersects(&self, other: &Envelope) -> bool {
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }

    /// Returns `true` if `coord` lies inside or on the boundary.
    #[must_use]
    pub fn contains_coord(&self, coord: &Coord) -> bool {
        coord.x >= self.min_x
            && coord.x <= self.max_x
            && coord.y >= self.min_y
            && coord.y <= self.max_y
    }

    /// Returns `true` if `other` lies entirely inside or on the boundary.
    #[must_use]
    pub fn contains(&self, other: &Envelope) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        if self.is_null() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        if self.is_null() {
            0.0
        } else {
            self.max_y - self.min_y
        }
    }

    /// Tests whether the envelope of segment `p1-p2` covers `q`, without
    /// materializing an envelope.
    #[must_use]
    pub fn intersects_point(p1: &Coord, p2: &Coord, q: &Coord) -> bool {
        q.x >= p1.x.min(p2.x)
            && q.x <= p1.x.max(p2.x)
            && q.y >= p1.y.min(p2.y)
            && q.y <= p1.y.max(p2.y)
    }

    /// Tests whether the envelopes of segments `p1-p2` and `q1-q2` intersect.
    #[must_use]
    pub fn intersects_segments(p1: &Coord, p2: &Coord, q1: &Coord, q2: &Coord) -> bool {
        p1.x.min(p2.x) <= q1.x.max(q2.x)
            && p1.x.max(p2.x) >= q1.x.min(q2.x)
            && p1.y.min(p2.y) <= q1.y.max(q2.y)
            && p1.y.max(p2.y) >= q1.y.min(q2.y)
    }
}
