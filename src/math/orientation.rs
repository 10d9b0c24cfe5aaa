use super::Coord;

/// Robust orientation index of point `q` relative to the directed line
/// `p1 -> p2`.
///
/// Returns `1` if `q` lies to the left (counter-clockwise), `-1` if it lies
/// to the right (clockwise), and `0` if the three points are collinear.
/// Uses adaptive-precision arithmetic, so the sign is exact.
#[must_use]
pub fn orientation_index(p1: &Coord, p2: &Coord, q: &Coord) -> i32 {
    let det = robust::orient2d(
        robust::Coord { x: p1.x, y: p1.y },
        robust::Coord { x: p2.x, y: p2.y },
        robust::Coord { x: q.x, y: q.y },
    );
    if det > 0.0 {
        1
    } else if det < 0.0 {
        -1
    } else {
        0
    }
}

/// Signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise rings, negative for clockwise.
#[must_use]
pub fn signed_area(ring: &[Coord]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n - 1 {
        sum += ring[i].x * ring[i + 1].y - ring[i + 1].x * ring[i].y;
    }
    // Close the ring if the input is not already closed.
    if ring[n - 1] != ring[0] {
        sum += ring[n - 1].x * ring[0].y - ring[0].x * ring[n - 1].y;
    }
    sum * 0.5
}

/// Tests whether a closed ring is oriented counter-clockwise.
///
/// Decided from the orientation at the topmost vertex, so the answer stays
/// exact even for rings whose signed area underflows.
#[must_use]
pub fn is_ccw(ring: &[Coord]) -> bool {
    let n = ring.len();
    if n < 4 {
        return false;
    }
    // Index of the vertex with maximum y (ignoring the duplicate closing point).
    let mut hi = 0;
    for i in 1..n - 1 {
        if ring[i].y > ring[hi].y {
            hi = i;
        }
    }
    // Nearest distinct vertex before the high point.
    let mut i_prev = hi;
    loop {
        i_prev = (i_prev + n - 2) % (n - 1);
        if ring[i_prev] != ring[hi] || i_prev == hi {
            break;
        }
    }
    // Nearest distinct vertex after the high point.
    let mut i_next = hi;
    loop {
        i_next = (i_next + 1) % (n - 1);
        if ring[i_next] != ring[hi] || i_next == hi {
            break;
        }
    }
    let prev = &ring[i_prev];
    let next = &ring[i_next];
    if prev == &ring[hi] || next == &ring[hi] || prev == next {
        // Degenerate ring (all points collapsed).
        return false;
    }
    let disc = orientation_index(prev, &ring[hi], next);
    if disc == 0 {
        // Collinear at the top: orientation follows the x ordering.
        prev.x > next.x
    } else {
        disc > 0
    }
}

/// Quadrant of the direction vector `p0 -> p1`.
///
/// Quadrants are numbered counter-clockwise: 0 = NE, 1 = NW, 2 = SW, 3 = SE.
/// The zero vector maps to quadrant 0.
#[must_use]
pub fn quadrant(p0: &Coord, p1: &Coord) -> u8 {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    if dx >= 0.0 {
        if dy >= 0.0 {
            0
        } else {
            3
        }
    } else if dy >= 0.0 {
        1
    } else {
        2
    }
}
