//! Octant-based ordering of points along a segment.
//!
//! The octant of a segment's direction vector gives a cheap total order for
//! points lying on that segment, without computing distances.

use crate::error::GeometryError;
use crate::math::Coord;

/// Octant of the direction vector `(dx, dy)`.
///
/// Octants are numbered 0 through 7 counter-clockwise starting from the
/// positive x axis.
pub fn octant(dx: f64, dy: f64) -> Result<u8, GeometryError> {
    if dx == 0.0 && dy == 0.0 {
        return Err(GeometryError::ZeroLengthVector);
    }
    let adx = dx.abs();
    let ady = dy.abs();
    let oct = if dx >= 0.0 {
        if dy >= 0.0 {
            if adx >= ady {
                0
            } else {
                1
            }
        } else if adx >= ady {
            7
        } else {
            6
        }
    } else if dy >= 0.0 {
        if adx >= ady {
            3
        } else {
            2
        }
    } else if adx >= ady {
        4
    } else {
        5
    };
    Ok(oct)
}

/// Octant of the segment `p0 -> p1`, mapping a degenerate zero-length
/// segment to octant 0.
#[must_use]
pub fn safe_octant(p0: &Coord, p1: &Coord) -> u8 {
    if p0 == p1 {
        return 0;
    }
    octant(p1.x - p0.x, p1.y - p0.y).unwrap_or(0)
}

fn relative_sign(a: f64, b: f64) -> i32 {
    if a < b {
        -1
    } else if a > b {
        1
    } else {
        0
    }
}

fn compare_value(sign0: i32, sign1: i32) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match sign0.cmp(&0) {
        Ordering::Equal => sign1.cmp(&0),
        ord => ord,
    }
}

/// Compares two points lying on a segment with the given octant, in order
/// of position along the segment.
#[must_use]
pub fn compare_in_octant(oct: u8, p0: &Coord, p1: &Coord) -> std::cmp::Ordering {
    let x_sign = relative_sign(p0.x, p1.x);
    let y_sign = relative_sign(p0.y, p1.y);
    match oct {
        0 => compare_value(x_sign, y_sign),
        1 => compare_value(y_sign, x_sign),
        2 => compare_value(y_sign, -x_sign),
        3 => compare_value(-x_sign, y_sign),
        4 => compare_value(-x_sign, -y_sign),
        5 => compare_value(-y_sign, -x_sign),
        6 => compare_value(-y_sign, x_sign),
        _ => compare_value(x_sign, -y_sign),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn octant_numbering() {
        assert_eq!(octant(2.0, 1.0).unwrap(), 0);
        assert_eq!(octant(1.0, 2.0).unwrap(), 1);
        assert_eq!(octant(-1.0, 2.0).unwrap(), 2);
        assert_eq!(octant(-2.0, 1.0).unwrap(), 3);
        assert_eq!(octant(-2.0, -1.0).unwrap(), 4);
        assert_eq!(octant(-1.0, -2.0).unwrap(), 5);
        assert_eq!(octant(1.0, -2.0).unwrap(), 6);
        assert_eq!(octant(2.0, -1.0).unwrap(), 7);
    }

    #[test]
    fn zero_vector_is_an_error() {
        assert!(octant(0.0, 0.0).is_err());
        assert_eq!(safe_octant(&Coord::new(1.0, 1.0), &Coord::new(1.0, 1.0)), 0);
    }

    #[test]
    fn ordering_along_segment() {
        // Points along a segment heading into octant 0.
        let a = Coord::new(1.0, 0.5);
        let b = Coord::new(2.0, 1.0);
        assert_eq!(compare_in_octant(0, &a, &b), Ordering::Less);
        assert_eq!(compare_in_octant(0, &b, &a), Ordering::Greater);
        assert_eq!(compare_in_octant(0, &a, &a), Ordering::Equal);
        // Heading into octant 4 the x order reverses.
        assert_eq!(compare_in_octant(4, &a, &b), Ordering::Greater);
    }
}
