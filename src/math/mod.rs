pub mod distance;
pub mod envelope;
pub mod line_intersector;
pub mod orientation;

pub use envelope::Envelope;
pub use line_intersector::{IntersectionKind, LineIntersector};
pub use orientation::{is_ccw, orientation_index, quadrant, signed_area};

use std::cmp::Ordering;

/// 2D coordinate type.
pub type Coord = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector = nalgebra::Vector2<f64>;

/// Total lexicographic order over coordinates: x first, then y.
///
/// Negative zero is folded onto positive zero so that coordinates equal
/// under `==` never compare unequal here.
#[must_use]
pub fn compare_coords(a: &Coord, b: &Coord) -> Ordering {
    let ax = a.x + 0.0;
    let bx = b.x + 0.0;
    match ax.total_cmp(&bx) {
        Ordering::Equal => (a.y + 0.0).total_cmp(&(b.y + 0.0)),
        other => other,
    }
}

/// A coordinate wrapper ordered by [`compare_coords`], usable as a map key.
#[derive(Debug, Clone, Copy)]
pub struct CoordKey(pub Coord);

impl CoordKey {
    #[must_use]
    pub fn new(coord: Coord) -> Self {
        Self(Coord::new(coord.x + 0.0, coord.y + 0.0))
    }

    #[must_use]
    pub fn coord(&self) -> Coord {
        self.0
    }
}

impl PartialEq for CoordKey {
    fn eq(&self, other: &Self) -> bool {
        compare_coords(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for CoordKey {}

impl PartialOrd for CoordKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CoordKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_coords(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_order_x_before_y() {
        let a = Coord::new(1.0, 5.0);
        let b = Coord::new(2.0, 0.0);
        assert_eq!(compare_coords(&a, &b), Ordering::Less);
        assert_eq!(compare_coords(&b, &a), Ordering::Greater);
    }

    #[test]
    fn coord_order_equal() {
        let a = Coord::new(1.0, 5.0);
        assert_eq!(compare_coords(&a, &a), Ordering::Equal);
    }

    #[test]
    fn negative_zero_folds_onto_zero() {
        let a = Coord::new(-0.0, 0.0);
        let b = Coord::new(0.0, -0.0);
        assert_eq!(compare_coords(&a, &b), Ordering::Equal);
        assert_eq!(CoordKey::new(a), CoordKey::new(b));
    }
}
