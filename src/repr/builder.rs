use super::*;

/// An edge as described by the topology, referencing endpoints by identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeSpec {
    from: VertexId,
    to: VertexId,
    bandwidth: Bandwidth,
    weight: Weight,
}

/// Collects vertices and edges by identifier and validates them into a [`Substrate`].
///
/// Use the Builder-Pattern to describe a topology:
/// ```
/// use bwgraphs::prelude::*;
///
/// let graph = Substrate::builder()
///     .vertex(1, 4)
///     .vertex(2, 4)
///     .edge(1, 2, 10, 5)
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.number_of_edges(), 1);
/// ```
///
/// Vertices may be declared after edges referencing them; only [`SubstrateBuilder::build`]
/// resolves identifiers.
#[derive(Debug, Clone, Default)]
pub struct SubstrateBuilder {
    vertices: Vec<(VertexId, Cpu)>,
    edges: Vec<EdgeSpec>,
}

impl SubstrateBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a vertex
    pub fn add_vertex(&mut self, id: VertexId, cpu: Cpu) -> &mut Self {
        self.vertices.push((id, cpu));
        self
    }

    /// Declares a directed edge `from -> to`
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        bandwidth: Bandwidth,
        weight: Weight,
    ) -> &mut Self {
        self.edges.push(EdgeSpec {
            from,
            to,
            bandwidth,
            weight,
        });
        self
    }

    /// Declares a physical link, i.e. the two directed edges `a -> b` and `b -> a`
    /// with identical attributes
    pub fn add_link(
        &mut self,
        a: VertexId,
        b: VertexId,
        bandwidth: Bandwidth,
        weight: Weight,
    ) -> &mut Self {
        self.add_edge(a, b, bandwidth, weight);
        self.add_edge(b, a, bandwidth, weight)
    }

    /// Declares a vertex
    pub fn vertex(mut self, id: VertexId, cpu: Cpu) -> Self {
        self.add_vertex(id, cpu);
        self
    }

    /// Declares a directed edge `from -> to`
    pub fn edge(
        mut self,
        from: VertexId,
        to: VertexId,
        bandwidth: Bandwidth,
        weight: Weight,
    ) -> Self {
        self.add_edge(from, to, bandwidth, weight);
        self
    }

    /// Declares a physical link `a <-> b`
    pub fn link(mut self, a: VertexId, b: VertexId, bandwidth: Bandwidth, weight: Weight) -> Self {
        self.add_link(a, b, bandwidth, weight);
        self
    }

    /// Resolves all identifiers and returns the finished graph.
    ///
    /// # Errors
    /// - [`TopologyError::DuplicateVertex`] if an identifier is declared twice,
    /// - [`TopologyError::DanglingEdge`] if an edge references an undeclared identifier,
    /// - [`TopologyError::TooManyVertices`] / [`TopologyError::TooManyEdges`] if the topology
    ///   does not fit into [`Node`] / [`NumEdges`].
    pub fn build(self) -> Result<Substrate, TopologyError> {
        if self.vertices.len() >= INVALID_NODE as usize {
            return Err(TopologyError::TooManyVertices);
        }
        let num_edges =
            NumEdges::try_from(self.edges.len()).map_err(|_| TopologyError::TooManyEdges)?;

        let mut ids = IdMapper::with_capacity(self.vertices.len());
        let mut vertices = Vec::with_capacity(self.vertices.len());
        for (id, cpu) in self.vertices {
            ids.push(id).ok_or(TopologyError::DuplicateVertex(id))?;
            vertices.push(Vertex::new(id, cpu));
        }

        for spec in self.edges {
            let dangling = TopologyError::DanglingEdge {
                from: spec.from,
                to: spec.to,
            };
            let source = ids.index_of(spec.from).ok_or(dangling)?;
            let target = ids.index_of(spec.to).ok_or(dangling)?;

            vertices[source as usize].adjacencies.push(Edge::new(
                source,
                target,
                spec.bandwidth,
                spec.weight,
            ));
        }

        tracing::debug!(
            vertices = vertices.len(),
            edges = num_edges,
            "substrate assembled"
        );

        Ok(Substrate {
            vertices,
            ids,
            num_edges,
        })
    }
}
