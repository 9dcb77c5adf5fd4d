/*!
# Substrate Graph

A [`Substrate`] is an ordered sequence of [`Vertex`]es, each owning its outgoing [`Edge`]s.
It is assembled once through a [`SubstrateBuilder`] and immutable afterwards: no algorithm
mutates it, so a single instance can serve any number of path queries.
*/

use super::*;

/// Immutable, weighted, directed network topology.
#[derive(Debug, Clone, Default)]
pub struct Substrate {
    pub(super) vertices: Vec<Vertex>,
    pub(super) ids: IdMapper,
    pub(super) num_edges: NumEdges,
}

impl Substrate {
    /// Shorthand for [`SubstrateBuilder::new`]
    pub fn builder() -> SubstrateBuilder {
        SubstrateBuilder::new()
    }

    /// Returns an iterator over all vertices in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Returns the vertex with identifier `id`
    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.index_of(id).map(|u| self.vertex(u))
    }
}

impl<'a> IntoIterator for &'a Substrate {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl GraphNodeOrder for Substrate {
    fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }
}

impl GraphEdgeOrder for Substrate {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl WeightedAdjacencyList for Substrate {
    fn edges_of(&self, u: Node) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices[u as usize].adjacencies.iter()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.vertices[u as usize].adjacencies.len() as NumNodes
    }
}

impl VertexLookup for Substrate {
    fn index_of(&self, id: VertexId) -> Option<Node> {
        self.ids.index_of(id)
    }

    fn vertex(&self, u: Node) -> &Vertex {
        &self.vertices[u as usize]
    }
}
