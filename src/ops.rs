/*!
# Graph Operations

Read-only access traits for weighted directed graphs. Algorithms in [`crate::algo`] are written
against these traits rather than against [`Substrate`](crate::repr::Substrate) directly.

All traits use dense [`Node`] indices. Translation from and to [`VertexId`]s is provided by
[`VertexLookup`].
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, error::PathError, node::*, vertex::Vertex};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range of all vertices that does not borrow `self`
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Access to the outgoing, weighted edges of every node
pub trait WeightedAdjacencyList: GraphNodeOrder + GraphEdgeOrder {
    /// Returns an iterator over the outgoing edges of `u` in insertion order.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = &Edge> + '_;

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.edges_of(u).count() as NumNodes
    }

    /// Returns an iterator over the targets of all outgoing edges of `u`.
    /// Parallel edges yield the same target multiple times.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges_of(u).map(|e| e.target)
    }

    /// Returns an iterator over all edges. The order is stable: nodes in
    /// increasing index order, and each node's edges in insertion order.
    fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices_range().flat_map(move |u| self.edges_of(u))
    }

    /// Returns all edges `u -> v` (there may be parallel edges)
    /// ** Panics if `u >= n` **
    fn edges_between(&self, u: Node, v: Node) -> impl Iterator<Item = &Edge> + '_ {
        self.edges_of(u).filter(move |e| e.target == v)
    }

    /// Returns *true* if at least one edge `u -> v` exists
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edges_between(u, v).next().is_some()
    }

    /// Returns the minimum weight over all edges in the graph, or `None` if there are none
    fn min_weight(&self) -> Option<Weight> {
        self.edges().map(|e| e.weight).min()
    }

    /// Returns the distinct bandwidth values present in the graph in increasing order.
    /// Useful to enumerate all floors that lead to a different filtered graph.
    fn bandwidth_levels(&self) -> Vec<Bandwidth> {
        self.edges().map(|e| e.bandwidth).sorted_unstable().dedup().collect_vec()
    }
}

/// Translation between topology identifiers and dense indices
pub trait VertexLookup: GraphNodeOrder {
    /// Returns the dense index of the vertex with identifier `id`
    fn index_of(&self, id: VertexId) -> Option<Node>;

    /// Returns the vertex stored at index `u`
    /// ** Panics if `u >= n` **
    fn vertex(&self, u: Node) -> &Vertex;

    /// Returns the identifier of the vertex at index `u`
    /// ** Panics if `u >= n` **
    fn id_of(&self, u: Node) -> VertexId {
        self.vertex(u).id
    }

    /// Like [`VertexLookup::index_of`] but reports unknown identifiers as an error
    fn try_index_of(&self, id: VertexId) -> Result<Node, PathError> {
        self.index_of(id).ok_or(PathError::VertexNotFound(id))
    }
}
