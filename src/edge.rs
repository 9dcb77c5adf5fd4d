use std::fmt::{Debug, Display};

use crate::node::*;

/// Capacity of a link. Never negative.
pub type Bandwidth = u64;

/// Cost of traversing a link. May be negative; see [`crate::algo::Dijkstra`] for the
/// precondition of the greedy search.
pub type Weight = i64;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// A directed edge owned by its source vertex.
///
/// Endpoints are stored as dense [`Node`] indices into the owning
/// [`Substrate`](crate::repr::Substrate), so an edge never owns or borrows a vertex.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: Node,
    pub target: Node,
    pub bandwidth: Bandwidth,
    pub weight: Weight,
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{}) bw={} w={}",
            self.source, self.target, self.bandwidth, self.weight
        )
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Creates a new edge between two dense indices
    pub fn new(source: Node, target: Node, bandwidth: Bandwidth, weight: Weight) -> Self {
        Self {
            source,
            target,
            bandwidth,
            weight,
        }
    }

    /// Returns the endpoints as a tuple `(source, target)`
    pub fn endpoints(&self) -> (Node, Node) {
        (self.source, self.target)
    }
}
