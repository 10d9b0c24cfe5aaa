//! Topology labels carried by graph edges and nodes.

use crate::geometry::Location;

/// Position relative to a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    On,
    Left,
    Right,
}

/// The location of an edge or node relative to one input geometry.
///
/// A `Line` location only records where the element lies on the geometry;
/// an `Area` location additionally records the locations of the regions to
/// either side. Unknown slots are `None` until labelling fills them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyLocation {
    Line {
        on: Option<Location>,
    },
    Area {
        on: Option<Location>,
        left: Option<Location>,
        right: Option<Location>,
    },
}

impl TopologyLocation {
    #[must_use]
    pub fn line() -> Self {
        TopologyLocation::Line { on: None }
    }

    #[must_use]
    pub fn area() -> Self {
        TopologyLocation::Area {
            on: None,
            left: None,
            right: None,
        }
    }

    #[must_use]
    pub fn is_line(&self) -> bool {
        matches!(self, TopologyLocation::Line { .. })
    }

    #[must_use]
    pub fn is_area(&self) -> bool {
        matches!(self, TopologyLocation::Area { .. })
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Location> {
        match (self, pos) {
            (TopologyLocation::Line { on }, Position::On)
            | (TopologyLocation::Area { on, .. }, Position::On) => *on,
            (TopologyLocation::Area { left, .. }, Position::Left) => *left,
            (TopologyLocation::Area { right, .. }, Position::Right) => *right,
            (TopologyLocation::Line { .. }, _) => None,
        }
    }

    /// Setting a side location on a line promotes it to an area.
    pub fn set(&mut self, pos: Position, loc: Location) {
        if self.is_line() && pos != Position::On {
            self.promote_to_area();
        }
        match (self, pos) {
            (TopologyLocation::Line { on }, Position::On)
            | (TopologyLocation::Area { on, .. }, Position::On) => *on = Some(loc),
            (TopologyLocation::Area { left, .. }, Position::Left) => *left = Some(loc),
            (TopologyLocation::Area { right, .. }, Position::Right) => *right = Some(loc),
            (TopologyLocation::Line { .. }, _) => unreachable!(),
        }
    }

    fn promote_to_area(&mut self) {
        if let TopologyLocation::Line { on } = *self {
            *self = TopologyLocation::Area {
                on,
                left: None,
                right: None,
            };
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        match self {
            TopologyLocation::Line { on } => on.is_none(),
            TopologyLocation::Area { on, left, right } => {
                on.is_none() && left.is_none() && right.is_none()
            }
        }
    }

    #[must_use]
    pub fn is_any_null(&self) -> bool {
        match self {
            TopologyLocation::Line { on } => on.is_none(),
            TopologyLocation::Area { on, left, right } => {
                on.is_none() || left.is_none() || right.is_none()
            }
        }
    }

    pub fn set_all_if_null(&mut self, loc: Location) {
        match self {
            TopologyLocation::Line { on } => {
                if on.is_none() {
                    *on = Some(loc);
                }
            }
            TopologyLocation::Area { on, left, right } => {
                for slot in [on, left, right] {
                    if slot.is_none() {
                        *slot = Some(loc);
                    }
                }
            }
        }
    }

    /// Swaps the side locations, for relabelling an edge traversed in the
    /// opposite direction.
    pub fn flip(&mut self) {
        if let TopologyLocation::Area { left, right, .. } = self {
            std::mem::swap(left, right);
        }
    }

    /// Collapses an area location to a line, keeping the on location.
    pub fn to_line(&mut self) {
        if let TopologyLocation::Area { on, .. } = *self {
            *self = TopologyLocation::Line { on };
        }
    }

    /// Copies the other location's defined slots into this one's undefined
    /// slots, promoting to an area if the other is one.
    pub fn merge(&mut self, other: &TopologyLocation) {
        if other.is_area() && self.is_line() {
            self.promote_to_area();
        }
        for pos in [Position::On, Position::Left, Position::Right] {
            if self.get(pos).is_none() {
                if let Some(loc) = other.get(pos) {
                    self.set(pos, loc);
                }
            }
        }
    }
}

/// A pair of topology locations, one per input geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    locs: [TopologyLocation; 2],
}

impl Label {
    /// A fully undefined line label.
    #[must_use]
    pub fn empty_line() -> Self {
        Self {
            locs: [TopologyLocation::line(), TopologyLocation::line()],
        }
    }

    /// A line label with the on location defined for one geometry.
    #[must_use]
    pub fn line(geom: usize, on: Location) -> Self {
        let mut label = Self::empty_line();
        label.locs[geom] = TopologyLocation::Line { on: Some(on) };
        label
    }

    /// An area label with all locations defined for one geometry. Both
    /// slots become areas so side labelling can fill in the other geometry.
    #[must_use]
    pub fn area(geom: usize, on: Location, left: Location, right: Location) -> Self {
        let mut label = Self {
            locs: [TopologyLocation::area(), TopologyLocation::area()],
        };
        label.locs[geom] = TopologyLocation::Area {
            on: Some(on),
            left: Some(left),
            right: Some(right),
        };
        label
    }

    #[must_use]
    pub fn location(&self, geom: usize, pos: Position) -> Option<Location> {
        self.locs[geom].get(pos)
    }

    #[must_use]
    pub fn on_location(&self, geom: usize) -> Option<Location> {
        self.locs[geom].get(Position::On)
    }

    pub fn set_location(&mut self, geom: usize, pos: Position, loc: Location) {
        self.locs[geom].set(pos, loc);
    }

    pub fn set_on_location(&mut self, geom: usize, loc: Location) {
        self.locs[geom].set(Position::On, loc);
    }

    pub fn set_all_locations_if_null(&mut self, geom: usize, loc: Location) {
        self.locs[geom].set_all_if_null(loc);
    }

    #[must_use]
    pub fn is_null(&self, geom: usize) -> bool {
        self.locs[geom].is_null()
    }

    #[must_use]
    pub fn is_any_null(&self, geom: usize) -> bool {
        self.locs[geom].is_any_null()
    }

    #[must_use]
    pub fn is_area(&self) -> bool {
        self.locs[0].is_area() || self.locs[1].is_area()
    }

    #[must_use]
    pub fn is_area_for(&self, geom: usize) -> bool {
        self.locs[geom].is_area()
    }

    #[must_use]
    pub fn is_line_for(&self, geom: usize) -> bool {
        self.locs[geom].is_line()
    }

    pub fn flip(&mut self) {
        self.locs[0].flip();
        self.locs[1].flip();
    }

    pub fn to_line(&mut self, geom: usize) {
        self.locs[geom].to_line();
    }

    pub fn merge(&mut self, other: &Label) {
        self.locs[0].merge(&other.locs[0]);
        self.locs[1].merge(&other.locs[1]);
    }
}
