use super::*;

/// Distances and predecessors computed by a single-source search.
///
/// Answers route queries from the fixed source to any target without recomputation.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'a, G> {
    graph: &'a G,
    source: Node,
    distance: Vec<Distance>,
    predecessor: Predecessors,
}

impl<'a, G> ShortestPathTree<'a, G>
where
    G: VertexLookup,
{
    pub(crate) fn new(
        graph: &'a G,
        source: Node,
        distance: Vec<Distance>,
        predecessor: Predecessors,
    ) -> Self {
        debug_assert_eq!(distance.len(), graph.len());
        debug_assert_eq!(predecessor.len(), graph.len());
        Self {
            graph,
            source,
            distance,
            predecessor,
        }
    }

    /// Returns the vertex the search started from
    pub fn source(&self) -> &'a Vertex {
        self.graph.vertex(self.source)
    }

    /// Returns the distance of every node, indexed by [`Node`]
    pub fn distances(&self) -> &[Distance] {
        &self.distance
    }

    /// Returns the distance from the source to the vertex `target`
    ///
    /// # Errors
    /// [`PathError::VertexNotFound`] if `target` is unknown
    pub fn distance_to(&self, target: VertexId) -> Result<Distance> {
        let t = self.graph.try_index_of(target)?;
        Ok(self.distance[t as usize])
    }

    /// Returns the route from the source to the vertex `target`
    ///
    /// # Errors
    /// [`PathError::VertexNotFound`] if `target` is unknown
    pub fn route_to(&self, target: VertexId) -> Result<Route<'a>> {
        let t = self.graph.try_index_of(target)?;
        Ok(self.route_to_node(t))
    }

    /// Returns an iterator over all vertices with finite distance
    pub fn reachable(&self) -> impl Iterator<Item = &'a Vertex> + '_ {
        let graph = self.graph;
        self.distance
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_finite())
            .map(move |(u, _)| graph.vertex(u as Node))
    }

    pub(crate) fn route_to_node(&self, target: Node) -> Route<'a> {
        let distance = self.distance[target as usize];
        if distance.is_unreachable() {
            tracing::debug!(
                source = self.graph.id_of(self.source),
                target = self.graph.id_of(target),
                "no path exists"
            );
            return Route::unreachable();
        }

        match path_from_predecessors(&self.predecessor, self.source, target) {
            Some(nodes) => Route::from_nodes(self.graph, nodes, distance),
            None => {
                tracing::debug!(
                    source = self.graph.id_of(self.source),
                    target = self.graph.id_of(target),
                    "predecessor chain broken"
                );
                Route::unreachable()
            }
        }
    }
}
