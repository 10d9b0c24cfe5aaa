pub mod locate;
pub mod location;

pub use locate::{locate, locate_areal, point_in_ring};
pub use location::Location;

use crate::math::{Coord, Envelope};

/// A polygon: one outer shell plus zero or more holes.
///
/// Rings are closed (first coordinate equals last).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub shell: Vec<Coord>,
    pub holes: Vec<Vec<Coord>>,
}

impl Polygon {
    #[must_use]
    pub fn new(shell: Vec<Coord>, holes: Vec<Vec<Coord>>) -> Self {
        Self { shell, holes }
    }
}

/// The geometry object model consumed and produced by the overlay engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coord),
    LineString(Vec<Coord>),
    Polygon(Polygon),
    MultiPoint(Vec<Coord>),
    MultiLineString(Vec<Vec<Coord>>),
    MultiPolygon(Vec<Polygon>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Topological dimension: 0 for points, 1 for lines, 2 for areas.
    ///
    /// Empty multi-geometries report their nominal dimension; collections
    /// report the maximum over their parts.
    #[must_use]
    pub fn dimension(&self) -> u8 {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => 0,
            Geometry::LineString(_) | Geometry::MultiLineString(_) => 1,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => 2,
            Geometry::GeometryCollection(parts) => {
                parts.iter().map(Geometry::dimension).max().unwrap_or(0)
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::LineString(coords) => coords.is_empty(),
            Geometry::Polygon(p) => p.shell.is_empty(),
            Geometry::MultiPoint(pts) => pts.is_empty(),
            Geometry::MultiLineString(lines) => lines.iter().all(Vec::is_empty),
            Geometry::MultiPolygon(polys) => polys.iter().all(|p| p.shell.is_empty()),
            Geometry::GeometryCollection(parts) => parts.iter().all(Geometry::is_empty),
        }
    }

    #[must_use]
    pub fn envelope(&self) -> Envelope {
        let mut env = Envelope::null();
        match self {
            Geometry::Point(c) => env.expand_to_include(c),
            Geometry::LineString(coords) | Geometry::MultiPoint(coords) => {
                for c in coords {
                    env.expand_to_include(c);
                }
            }
            Geometry::Polygon(p) => {
                for c in &p.shell {
                    env.expand_to_include(c);
                }
            }
            Geometry::MultiLineString(lines) => {
                for line in lines {
                    for c in line {
                        env.expand_to_include(c);
                    }
                }
            }
            Geometry::MultiPolygon(polys) => {
                for p in polys {
                    for c in &p.shell {
                        env.expand_to_include(c);
                    }
                }
            }
            Geometry::GeometryCollection(parts) => {
                for g in parts {
                    env.expand_to_include_envelope(&g.envelope());
                }
            }
        }
        env
    }

    /// Builds the most specific geometry for a flat list of parts.
    ///
    /// A homogeneous list becomes the single part or the matching multi
    /// type; a mixed list becomes a collection; an empty list becomes an
    /// empty collection.
    #[must_use]
    pub fn build_most_specific(parts: Vec<Geometry>) -> Geometry {
        if parts.len() == 1 {
            return parts.into_iter().next().map_or_else(
                || Geometry::GeometryCollection(Vec::new()),
                |g| g,
            );
        }
        let all_points = parts.iter().all(|g| matches!(g, Geometry::Point(_)));
        let all_lines = parts.iter().all(|g| matches!(g, Geometry::LineString(_)));
        let all_polys = parts.iter().all(|g| matches!(g, Geometry::Polygon(_)));
        if all_points && !parts.is_empty() {
            let pts = parts
                .into_iter()
                .filter_map(|g| match g {
                    Geometry::Point(c) => Some(c),
                    _ => None,
                })
                .collect();
            Geometry::MultiPoint(pts)
        } else if all_lines && !parts.is_empty() {
            let lines = parts
                .into_iter()
                .filter_map(|g| match g {
                    Geometry::LineString(c) => Some(c),
                    _ => None,
                })
                .collect();
            Geometry::MultiLineString(lines)
        } else if all_polys && !parts.is_empty() {
            let polys = parts
                .into_iter()
                .filter_map(|g| match g {
                    Geometry::Polygon(p) => Some(p),
                    _ => None,
                })
                .collect();
            Geometry::MultiPolygon(polys)
        } else {
            Geometry::GeometryCollection(parts)
        }
    }

    /// Builds an explicit empty geometry of the requested dimension.
    #[must_use]
    pub fn empty_of_dimension(dim: u8) -> Geometry {
        match dim {
            0 => Geometry::MultiPoint(Vec::new()),
            1 => Geometry::MultiLineString(Vec::new()),
            _ => Geometry::MultiPolygon(Vec::new()),
        }
    }
}
