//! Point-in-geometry location.
//!
//! Ring containment uses a ray-crossing counter with robust orientation
//! tests, so points exactly on a ring edge are always reported as
//! `Boundary`. Locations across the components of a multi-geometry are
//! combined with the mod-2 boundary rule: a point on an odd number of
//! component boundaries is on the boundary of the whole geometry.

use super::{Geometry, Location, Polygon};
use crate::math::{orientation_index, Coord, Envelope};

/// Locates a point relative to a closed ring.
#[must_use]
pub fn point_in_ring(p: &Coord, ring: &[Coord]) -> Location {
    let mut crossings = 0_u32;
    for i in 1..ring.len() {
        let p1 = &ring[i - 1];
        let p2 = &ring[i];

        if p1.x < p.x && p2.x < p.x {
            continue;
        }
        if p == p2 || p == p1 {
            return Location::Boundary;
        }
        // Horizontal segment at the ray height.
        if p1.y == p.y && p2.y == p.y {
            let (min_x, max_x) = if p1.x < p2.x { (p1.x, p2.x) } else { (p2.x, p1.x) };
            if p.x >= min_x && p.x <= max_x {
                return Location::Boundary;
            }
            continue;
        }
        // Segment straddles the horizontal ray through p.
        if (p1.y > p.y && p2.y <= p.y) || (p2.y > p.y && p1.y <= p.y) {
            let mut orient = orientation_index(p1, p2, p);
            if orient == 0 {
                return Location::Boundary;
            }
            // Normalize to an upward-directed segment.
            if p2.y < p1.y {
                orient = -orient;
            }
            if orient > 0 {
                crossings += 1;
            }
        }
    }
    if crossings % 2 == 1 {
        Location::Interior
    } else {
        Location::Exterior
    }
}

fn on_segment(p: &Coord, a: &Coord, b: &Coord) -> bool {
    Envelope::intersects_point(a, b, p) && orientation_index(a, b, p) == 0
}

fn locate_in_polygon(p: &Coord, poly: &Polygon) -> Location {
    if poly.shell.is_empty() {
        return Location::Exterior;
    }
    match point_in_ring(p, &poly.shell) {
        Location::Exterior => Location::Exterior,
        Location::Boundary => Location::Boundary,
        Location::Interior => {
            for hole in &poly.holes {
                match point_in_ring(p, hole) {
                    Location::Interior => return Location::Exterior,
                    Location::Boundary => return Location::Boundary,
                    Location::Exterior => {}
                }
            }
            Location::Interior
        }
    }
}

fn locate_on_line(p: &Coord, line: &[Coord]) -> Location {
    if line.len() < 2 {
        return Location::Exterior;
    }
    let closed = line.first() == line.last();
    if !closed && (p == &line[0] || p == &line[line.len() - 1]) {
        return Location::Boundary;
    }
    for i in 1..line.len() {
        if on_segment(p, &line[i - 1], &line[i]) {
            return Location::Interior;
        }
    }
    Location::Exterior
}

fn update(loc: Location, is_in: &mut bool, num_boundaries: &mut u32) {
    match loc {
        Location::Interior => *is_in = true,
        Location::Boundary => *num_boundaries += 1,
        Location::Exterior => {}
    }
}

fn locate_parts(p: &Coord, geom: &Geometry, is_in: &mut bool, num_boundaries: &mut u32) {
    match geom {
        Geometry::Point(c) => {
            if p == c {
                *is_in = true;
            }
        }
        Geometry::MultiPoint(pts) => {
            if pts.contains(p) {
                *is_in = true;
            }
        }
        Geometry::LineString(line) => update(locate_on_line(p, line), is_in, num_boundaries),
        Geometry::MultiLineString(lines) => {
            for line in lines {
                update(locate_on_line(p, line), is_in, num_boundaries);
            }
        }
        Geometry::Polygon(poly) => update(locate_in_polygon(p, poly), is_in, num_boundaries),
        Geometry::MultiPolygon(polys) => {
            for poly in polys {
                update(locate_in_polygon(p, poly), is_in, num_boundaries);
            }
        }
        Geometry::GeometryCollection(parts) => {
            for part in parts {
                locate_parts(p, part, is_in, num_boundaries);
            }
        }
    }
}

/// Locates a point considering only the areal components of a geometry.
/// Points and lines have no area, so against them everything is exterior.
#[must_use]
pub fn locate_areal(p: &Coord, geom: &Geometry) -> Location {
    match geom {
        Geometry::Polygon(poly) => locate_in_polygon(p, poly),
        Geometry::MultiPolygon(polys) => {
            for poly in polys {
                let loc = locate_in_polygon(p, poly);
                if loc != Location::Exterior {
                    return loc;
                }
            }
            Location::Exterior
        }
        Geometry::GeometryCollection(parts) => {
            for part in parts {
                let loc = locate_areal(p, part);
                if loc != Location::Exterior {
                    return loc;
                }
            }
            Location::Exterior
        }
        _ => Location::Exterior,
    }
}

/// Locates a point relative to an arbitrary geometry.
#[must_use]
pub fn locate(p: &Coord, geom: &Geometry) -> Location {
    let mut is_in = false;
    let mut num_boundaries = 0_u32;
    locate_parts(p, geom, &mut is_in, &mut num_boundaries);
    if num_boundaries % 2 == 1 {
        Location::Boundary
    } else if num_boundaries > 0 || is_in {
        Location::Interior
    } else {
        Location::Exterior
    }
}
