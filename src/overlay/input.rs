//! Decomposition of input geometries into labelled edges and topology
//! nodes.

use std::collections::BTreeMap;

use crate::error::GeometryError;
use crate::geometry::{Geometry, Location, Polygon};
use crate::graph::{Edge, Label};
use crate::math::{is_ccw, Coord, CoordKey};

/// One input geometry broken down for the overlay graph: labelled boundary
/// edges plus the isolated points and line endpoints that must become
/// graph nodes.
#[derive(Debug)]
pub struct InputGeometry {
    pub edges: Vec<Edge>,
    /// Topology nodes to inject, with their on location.
    pub nodes: Vec<(Coord, Location)>,
    pub dimension: u8,
}

impl InputGeometry {
    /// Extracts edges and nodes from a geometry, labelling them for input
    /// slot `geom_index`.
    pub fn extract(geometry: &Geometry, geom_index: usize) -> Result<Self, GeometryError> {
        let mut input = Self {
            edges: Vec::new(),
            nodes: Vec::new(),
            dimension: geometry.dimension(),
        };
        let mut endpoints: BTreeMap<CoordKey, usize> = BTreeMap::new();
        input.add_geometry(geometry, geom_index, &mut endpoints)?;
        // An endpoint shared by an odd number of line ends is on the
        // boundary; an even count puts it in the interior.
        for (key, count) in endpoints {
            let loc = if count % 2 == 1 {
                Location::Boundary
            } else {
                Location::Interior
            };
            input.nodes.push((key.0, loc));
        }
        Ok(input)
    }

    fn add_geometry(
        &mut self,
        geometry: &Geometry,
        geom_index: usize,
        endpoints: &mut BTreeMap<CoordKey, usize>,
    ) -> Result<(), GeometryError> {
        match geometry {
            Geometry::Point(c) => self.nodes.push((*c, Location::Interior)),
            Geometry::MultiPoint(pts) => {
                for c in pts {
                    self.nodes.push((*c, Location::Interior));
                }
            }
            Geometry::LineString(line) => self.add_line(line, geom_index, endpoints)?,
            Geometry::MultiLineString(lines) => {
                for line in lines {
                    self.add_line(line, geom_index, endpoints)?;
                }
            }
            Geometry::Polygon(poly) => self.add_polygon(poly, geom_index)?,
            Geometry::MultiPolygon(polys) => {
                for poly in polys {
                    self.add_polygon(poly, geom_index)?;
                }
            }
            Geometry::GeometryCollection(parts) => {
                for part in parts {
                    self.add_geometry(part, geom_index, endpoints)?;
                }
            }
        }
        Ok(())
    }

    fn add_line(
        &mut self,
        line: &[Coord],
        geom_index: usize,
        endpoints: &mut BTreeMap<CoordKey, usize>,
    ) -> Result<(), GeometryError> {
        if line.is_empty() {
            return Ok(());
        }
        let coords = remove_repeated(line);
        if coords.len() < 2 {
            return Err(GeometryError::TooFewCoordinates {
                min: 2,
                got: coords.len(),
            });
        }
        if coords.first() != coords.last() {
            for end in [coords[0], coords[coords.len() - 1]] {
                *endpoints.entry(CoordKey(end)).or_insert(0) += 1;
            }
        }
        self.edges
            .push(Edge::new(coords, Label::line(geom_index, Location::Interior)));
        Ok(())
    }

    fn add_polygon(&mut self, poly: &Polygon, geom_index: usize) -> Result<(), GeometryError> {
        if poly.shell.is_empty() {
            return Ok(());
        }
        self.add_ring(&poly.shell, geom_index, false)?;
        for hole in &poly.holes {
            self.add_ring(hole, geom_index, true)?;
        }
        Ok(())
    }

    /// Adds a polygon ring, labelled so the polygon interior lies on the
    /// correct side regardless of the ring's winding.
    fn add_ring(&mut self, ring: &[Coord], geom_index: usize, is_hole: bool) -> Result<(), GeometryError> {
        let mut coords = remove_repeated(ring);
        if coords.first() != coords.last() {
            if let Some(first) = coords.first().copied() {
                coords.push(first);
            }
        }
        if coords.len() < 4 {
            return Err(GeometryError::TooFewCoordinates {
                min: 4,
                got: coords.len(),
            });
        }
        // A CCW shell carries its interior on the left; a hole reverses
        // that, as does a CW winding.
        let interior_left = is_ccw(&coords) != is_hole;
        let (left, right) = if interior_left {
            (Location::Interior, Location::Exterior)
        } else {
            (Location::Exterior, Location::Interior)
        };
        self.edges.push(Edge::new(
            coords,
            Label::area(geom_index, Location::Boundary, left, right),
        ));
        Ok(())
    }
}

fn remove_repeated(coords: &[Coord]) -> Vec<Coord> {
    let mut out: Vec<Coord> = Vec::with_capacity(coords.len());
    for c in coords {
        if out.last() != Some(c) {
            out.push(*c);
        }
    }
    out
}
