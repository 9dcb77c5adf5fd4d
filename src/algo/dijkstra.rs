/*!
# Dijkstra

Greedy single-source search driven by a min-priority queue keyed by tentative distance.

**Precondition**: all edges admitted by the bandwidth floor have non-negative weight. The greedy
choice is wrong otherwise, so the search fails with [`PathError::NegativeWeight`] as soon as it
meets an admitted negative edge. Use [`BellmanFord`] for graphs with negative weights.

Ties in the priority queue are broken by ascending [`VertexId`], making the returned path
deterministic even when several shortest paths exist.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use super::*;

/// Queue entry; ordering is by distance, then by identifier
type QueueEntry = Reverse<(Distance, VertexId, Node)>;

/// Configurable Dijkstra search. Currently without options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new search
    pub fn new() -> Self {
        Self
    }

    /// Computes distances from `source` to every vertex reachable under `floor`.
    ///
    /// # Errors
    /// - [`PathError::VertexNotFound`] if `source` is unknown,
    /// - [`PathError::NegativeWeight`] if an admitted edge with negative weight is met.
    pub fn shortest_path_tree<'a, G>(
        &self,
        graph: &'a G,
        source: VertexId,
        floor: BandwidthFloor,
    ) -> Result<ShortestPathTree<'a, G>>
    where
        G: WeightedAdjacencyList + VertexLookup,
    {
        let s = graph.try_index_of(source)?;
        self.search(graph, s, None, floor)
    }

    fn search<'a, G>(
        &self,
        graph: &'a G,
        source: Node,
        target: Option<Node>,
        floor: BandwidthFloor,
    ) -> Result<ShortestPathTree<'a, G>>
    where
        G: WeightedAdjacencyList + VertexLookup,
    {
        let n = graph.len();
        let mut distance = vec![Distance::UNREACHABLE; n];
        let mut predecessor: Predecessors = vec![None; n];
        let mut settled = graph.vertex_bitset_unset();
        let mut heap: BinaryHeap<QueueEntry> = BinaryHeap::with_capacity(n);

        distance[source as usize] = Distance::ZERO;
        heap.push(Reverse((Distance::ZERO, graph.id_of(source), source)));

        while let Some(Reverse((dist_u, _, u))) = heap.pop() {
            // stale entry
            if settled.set_bit(u) {
                continue;
            }

            if target == Some(u) {
                break;
            }

            for edge in graph.eligible_edges_of(u, floor) {
                if edge.weight < 0 {
                    let (from, to) = (graph.id_of(edge.source), graph.id_of(edge.target));
                    tracing::warn!(from, to, weight = edge.weight, "negative edge weight");
                    return Err(PathError::NegativeWeight { from, to });
                }

                let v = edge.target;
                if settled.get_bit(v) {
                    continue;
                }

                let candidate = dist_u.extend(edge.weight);
                if candidate < distance[v as usize] {
                    tracing::trace!(u, v, %candidate, "relaxed");
                    distance[v as usize] = candidate;
                    predecessor[v as usize] = OptionalNode::new(u);
                    heap.push(Reverse((candidate, graph.id_of(v), v)));
                }
            }
        }

        Ok(ShortestPathTree::new(graph, source, distance, predecessor))
    }
}

impl ShortestPath for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    #[tracing::instrument(level = "debug", skip(self, graph, floor), fields(floor = floor.value()))]
    fn shortest_path<'a>(
        &self,
        graph: &'a Substrate,
        source: VertexId,
        target: VertexId,
        floor: BandwidthFloor,
    ) -> Result<Route<'a>> {
        let s = graph.try_index_of(source)?;
        let t = graph.try_index_of(target)?;

        let route = self.search(graph, s, Some(t), floor)?.route_to_node(t);
        tracing::debug!(distance = %route.distance(), hops = route.hops(), "search finished");
        Ok(route)
    }
}
