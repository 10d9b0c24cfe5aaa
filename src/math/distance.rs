use super::Coord;

/// Distance from point `p` to the segment `a-b`.
#[must_use]
pub fn point_segment_distance(p: &Coord, a: &Coord, b: &Coord) -> f64 {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return (p - a).norm();
    }
    let ap = p - a;
    let t = (ap.x * ab.x + ap.y * ab.y) / len_sq;
    if t <= 0.0 {
        (p - a).norm()
    } else if t >= 1.0 {
        (p - b).norm()
    } else {
        let closest = Coord::new(a.x + ab.x * t, a.y + ab.y * t);
        (p - closest).norm()
    }
}
