/*!
`bwgraphs` computes **b**and**w**idth-constrained shortest paths on directed network topologies.

# Representation

A network topology (the *substrate*) consists of vertices with an external identifier
([`VertexId`](crate::node::VertexId)) and a CPU capacity, connected by directed edges that carry
an available bandwidth and a signed weight (cost).

Internally, vertices are numbered `0` to `n - 1` in declaration order and represented as `u32`
([`Node`](crate::node::Node)). Identifiers are only translated at the boundary: queries take and
routes return identifiers, all algorithms operate on dense indices.

Parallel edges and self-loops are allowed. A substrate is built once via
[`SubstrateBuilder`](crate::repr::SubstrateBuilder) and never mutated afterwards.

# Bandwidth Floors

Every query carries a [`BandwidthFloor`](crate::algo::BandwidthFloor). An edge takes part in a
search only if its bandwidth is at least the floor; all other edges are ignored as if absent.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before calling them on a graph. Alternatively, the common
functionality is implemented via traits on the graph itself
(`graph.dijkstra(source, target, floor)`), making it usable without configuring anything.

Three strategies implement the common [`ShortestPath`](crate::algo::ShortestPath) contract:
- [`Dijkstra`](crate::algo::Dijkstra) for non-negative weights,
- [`BellmanFord`](crate::algo::BellmanFord) for negative weights with negative cycle detection,
- [`FloydWarshall`](crate::algo::FloydWarshall) for all-pairs queries on small substrates.

# Usage

- [`prelude`] includes definitions for nodes, edges, vertices, distances, basic graph operations
  and the [`Substrate`](crate::repr::Substrate),
- [`algo`] includes the path searches, the bandwidth filter and route reconstruction,
- [`error`] includes the topology and query errors.

In most use-cases, `use bwgraphs::{prelude::*, algo::*};` suffices for your needs.

# Logging

Searches emit [`tracing`] events and spans (`debug` for finished searches, `warn` for detected
negative cycles). Install any subscriber to see them; without one, they are free.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;
pub mod vertex;
pub mod weight;

/// `bwgraphs::prelude` includes definitions for nodes, edges, vertices and distances, all basic
/// graph operation traits as well as the [`Substrate`](crate::repr::Substrate).
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*, vertex::*, weight::*};
}
