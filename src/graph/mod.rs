//! The planar graph built from fully noded edges.
//!
//! Nodes and directed edges live in slotmap arenas and refer to each other
//! by key, which keeps the densely cross-linked structure (sym edges, next
//! pointers, stars) free of reference cycles.

pub mod depth;
pub mod edge;
pub mod label;
pub mod labeling;

pub use depth::Depth;
pub use edge::{Edge, EdgeList};
pub use label::{Label, Position, TopologyLocation};

use std::cmp::Ordering;
use std::collections::BTreeMap;

use slotmap::{new_key_type, SlotMap};

use crate::error::TopologyError;
use crate::math::{orientation_index, quadrant, Coord, CoordKey};

new_key_type! {
    pub struct NodeId;
    pub struct DirId;
}

/// A graph node: a distinct coordinate where edges start or end.
#[derive(Debug)]
pub struct Node {
    pub coord: Coord,
    pub label: Label,
    /// Outgoing directed edges, sorted counter-clockwise from east once
    /// the graph is built.
    pub star: Vec<DirId>,
}

/// One direction of an undirected edge.
#[derive(Debug)]
pub struct DirectedEdge {
    pub edge: usize,
    pub forward: bool,
    pub origin: NodeId,
    pub sym: DirId,
    pub label: Label,
    pub in_result: bool,
    pub visited: bool,
    pub next: Option<DirId>,
    pub next_min: Option<DirId>,
    pub ring: Option<usize>,
    pub min_ring: Option<usize>,
    p0: Coord,
    p1: Coord,
    quadrant: u8,
}

/// The planar graph over a set of noded edges.
#[derive(Debug, Default)]
pub struct PlanarGraph {
    pub nodes: SlotMap<NodeId, Node>,
    pub dirs: SlotMap<DirId, DirectedEdge>,
    pub edges: Vec<Edge>,
    node_map: BTreeMap<CoordKey, NodeId>,
}

impl PlanarGraph {
    /// Builds the graph for a set of edges, creating both directed edges
    /// per edge and sorting every node star.
    #[must_use]
    pub fn build(edges: Vec<Edge>) -> Self {
        let mut graph = Self::default();
        for (edge_index, edge) in edges.iter().enumerate() {
            let n = edge.coords.len();
            let fwd_origin = graph.add_node(edge.coords[0]);
            let rev_origin = graph.add_node(edge.coords[n - 1]);

            let fwd_label = edge.label;
            let mut rev_label = edge.label;
            rev_label.flip();

            let fwd = graph.insert_dir(edge_index, true, fwd_origin, fwd_label, edge.coords[0], edge.coords[1]);
            let rev = graph.insert_dir(
                edge_index,
                false,
                rev_origin,
                rev_label,
                edge.coords[n - 1],
                edge.coords[n - 2],
            );
            graph.dirs[fwd].sym = rev;
            graph.dirs[rev].sym = fwd;
            graph.nodes[fwd_origin].star.push(fwd);
            graph.nodes[rev_origin].star.push(rev);
        }
        graph.edges = edges;
        graph.sort_stars();
        graph
    }

    fn insert_dir(
        &mut self,
        edge: usize,
        forward: bool,
        origin: NodeId,
        label: Label,
        p0: Coord,
        p1: Coord,
    ) -> DirId {
        self.dirs.insert(DirectedEdge {
            edge,
            forward,
            origin,
            sym: DirId::default(),
            label,
            in_result: false,
            visited: false,
            next: None,
            next_min: None,
            ring: None,
            min_ring: None,
            p0,
            p1,
            quadrant: quadrant(&p0, &p1),
        })
    }

    /// Returns the node at the coordinate, creating it if absent.
    pub fn add_node(&mut self, coord: Coord) -> NodeId {
        if let Some(&id) = self.node_map.get(&CoordKey(coord)) {
            return id;
        }
        let id = self.nodes.insert(Node {
            coord,
            label: Label::empty_line(),
            star: Vec::new(),
        });
        self.node_map.insert(CoordKey(coord), id);
        id
    }

    #[must_use]
    pub fn find_node(&self, coord: &Coord) -> Option<NodeId> {
        self.node_map.get(&CoordKey(*coord)).copied()
    }

    /// Node ids in coordinate order, for deterministic traversal.
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.node_map.values().copied().collect()
    }

    #[must_use]
    pub fn dir_ids(&self) -> Vec<DirId> {
        self.dirs.keys().collect()
    }

    /// Direction-point comparison: edges compare by quadrant first, then
    /// by a robust orientation test within the quadrant, yielding
    /// counter-clockwise angular order from the positive x axis.
    fn compare_direction(&self, a: DirId, b: DirId) -> Ordering {
        let da = &self.dirs[a];
        let db = &self.dirs[b];
        if da.p1 == db.p1 {
            return Ordering::Equal;
        }
        match da.quadrant.cmp(&db.quadrant) {
            Ordering::Equal => match orientation_index(&db.p0, &db.p1, &da.p1) {
                1 => Ordering::Greater,
                -1 => Ordering::Less,
                _ => Ordering::Equal,
            },
            ord => ord,
        }
    }

    fn sort_stars(&mut self) {
        let ids: Vec<NodeId> = self.nodes.keys().collect();
        for id in ids {
            let mut star = std::mem::take(&mut self.nodes[id].star);
            star.sort_by(|&a, &b| self.compare_direction(a, b));
            self.nodes[id].star = star;
        }
    }

    /// Star edges whose edge participates in the result area on either
    /// side, in counter-clockwise order.
    #[must_use]
    pub fn result_area_star(&self, node: NodeId) -> Vec<DirId> {
        self.nodes[node]
            .star
            .iter()
            .copied()
            .filter(|&d| self.dirs[d].in_result || self.dirs[self.dirs[d].sym].in_result)
            .collect()
    }

    /// Links each result edge entering this node to the result edge
    /// leaving it next in counter-clockwise order, forming maximal rings.
    pub fn link_result_directed_edges(&mut self, node: NodeId) -> Result<(), TopologyError> {
        let star = self.result_area_star(node);
        let mut first_out: Option<DirId> = None;
        let mut incoming: Option<DirId> = None;
        let mut scanning = true;
        for &out in &star {
            let sym = self.dirs[out].sym;
            if !self.dirs[out].label.is_area() {
                continue;
            }
            if first_out.is_none() && self.dirs[out].in_result {
                first_out = Some(out);
            }
            if scanning {
                if !self.dirs[sym].in_result {
                    continue;
                }
                incoming = Some(sym);
                scanning = false;
            } else {
                if !self.dirs[out].in_result {
                    continue;
                }
                if let Some(inc) = incoming {
                    self.dirs[inc].next = Some(out);
                }
                scanning = true;
            }
        }
        if !scanning {
            let coord = self.nodes[node].coord;
            let Some(first) = first_out else {
                return Err(TopologyError::NoOutgoingEdge {
                    x: coord.x,
                    y: coord.y,
                });
            };
            if let Some(inc) = incoming {
                self.dirs[inc].next = Some(first);
            }
        }
        Ok(())
    }

    /// Links the edges of one maximal ring at this node in clockwise
    /// order, splitting the ring into minimal rings.
    pub fn link_minimal_directed_edges(
        &mut self,
        node: NodeId,
        ring: usize,
    ) -> Result<(), TopologyError> {
        let star = self.result_area_star(node);
        let mut first_out: Option<DirId> = None;
        let mut incoming: Option<DirId> = None;
        let mut scanning = true;
        for &out in star.iter().rev() {
            let sym = self.dirs[out].sym;
            if first_out.is_none() && self.dirs[out].ring == Some(ring) {
                first_out = Some(out);
            }
            if scanning {
                if self.dirs[sym].ring != Some(ring) {
                    continue;
                }
                incoming = Some(sym);
                scanning = false;
            } else {
                if self.dirs[out].ring != Some(ring) {
                    continue;
                }
                if let Some(inc) = incoming {
                    self.dirs[inc].next_min = Some(out);
                }
                scanning = true;
            }
        }
        if !scanning {
            let coord = self.nodes[node].coord;
            let Some(first) = first_out else {
                return Err(TopologyError::NoOutgoingEdge {
                    x: coord.x,
                    y: coord.y,
                });
            };
            if let Some(inc) = incoming {
                self.dirs[inc].next_min = Some(first);
            }
        }
        Ok(())
    }

    /// Number of star edges assigned to the given maximal ring.
    #[must_use]
    pub fn outgoing_degree_in_ring(&self, node: NodeId, ring: usize) -> usize {
        self.nodes[node]
            .star
            .iter()
            .filter(|&&d| self.dirs[d].ring == Some(ring))
            .count()
    }

    #[must_use]
    pub fn dir_coord(&self, dir: DirId) -> Coord {
        self.dirs[dir].p0
    }
}
