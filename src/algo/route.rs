use std::fmt::Display;

use super::*;

/// Result of a path query: the vertices from source to destination (inclusive) and the total
/// distance.
///
/// If no path exists under the requested bandwidth floor, the route is *unreachable*: its path
/// is empty and its distance is [`Distance::UNREACHABLE`]. This is never conflated with the
/// zero-distance route from a vertex to itself, which contains exactly that vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<'a> {
    nodes: Vec<Node>,
    path: Vec<&'a Vertex>,
    distance: Distance,
}

impl<'a> Route<'a> {
    /// Creates the route of a failed query
    pub fn unreachable() -> Self {
        Self {
            nodes: Vec::new(),
            path: Vec::new(),
            distance: Distance::UNREACHABLE,
        }
    }

    /// Creates a route from a sequence of dense indices into `graph`
    /// ** Panics if any node is `>= n` **
    pub fn from_nodes<G>(graph: &'a G, nodes: Vec<Node>, distance: Distance) -> Self
    where
        G: VertexLookup,
    {
        debug_assert!(!nodes.is_empty() && distance.is_finite());
        let path = nodes.iter().map(|&u| graph.vertex(u)).collect_vec();
        Self {
            nodes,
            path,
            distance,
        }
    }

    /// Returns the vertices of the route in traversal order
    pub fn path(&self) -> &[&'a Vertex] {
        &self.path
    }

    /// Returns the dense indices of the route in traversal order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the identifiers of the route in traversal order
    pub fn ids(&self) -> Vec<VertexId> {
        self.path.iter().map(|v| v.id).collect_vec()
    }

    /// Returns the total weight of the route, or [`Distance::UNREACHABLE`]
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Returns *true* if a path was found
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Returns the number of edges on the route
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl Display for Route<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] ({})", self.path.iter().join(", "), self.distance)
    }
}
