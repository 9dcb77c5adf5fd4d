/*!
# Bellman-Ford

Single-source search by repeated relaxation of all admitted edges. Tolerates negative weights and
detects negative cycles reachable from the source.

The search runs `n - 1` passes over all admitted edges in the stable order of
[`BandwidthFilter::eligible_edges`], followed by one checking pass. If the checking pass still
improves any distance, a negative cycle is reachable and the query fails with
[`PathError::NegativeCycle`].

Tentative distances are accumulated exactly in `i128`, so sums beyond the range of `i64` still
shrink along a negative cycle and the checking pass cannot miss it. They are narrowed to
[`Distance`] only once the search has finished.
*/

use super::*;

/// Exact tentative distance; `UNREACHED` marks nodes not yet reached
type WideDistance = i128;

const UNREACHED: WideDistance = WideDistance::MAX;

/// Configurable Bellman-Ford search
#[derive(Debug, Clone, Copy)]
pub struct BellmanFord {
    early_termination: bool,
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self {
            early_termination: true,
        }
    }
}

impl BellmanFord {
    /// Creates a new search with early termination enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// If enabled, stops as soon as a pass does not improve any distance.
    /// This never changes the result, only the number of passes.
    pub fn early_termination(mut self, enabled: bool) -> Self {
        self.early_termination = enabled;
        self
    }

    /// Computes distances from `source` to every vertex reachable under `floor`.
    ///
    /// # Errors
    /// - [`PathError::VertexNotFound`] if `source` is unknown,
    /// - [`PathError::NegativeCycle`] if a negative cycle is reachable from `source`.
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

        let n = graph.len();
        let mut distance = vec![UNREACHED; n];
        let mut predecessor: Predecessors = vec![None; n];
        distance[s as usize] = 0;

        for pass in 1..n {
            let improved = Self::relax_all(graph, floor, &mut distance, &mut predecessor);
            if !improved && self.early_termination {
                tracing::trace!(pass, "converged");
                break;
            }
        }

        if Self::relax_all(graph, floor, &mut distance, &mut predecessor) {
            tracing::warn!(source, floor = floor.value(), "graph contains a negative weight cycle");
            return Err(PathError::NegativeCycle { origin: source });
        }

        let distance = distance
            .into_iter()
            .map(|d| {
                if d == UNREACHED {
                    Distance::UNREACHABLE
                } else {
                    Distance::from_wide(d)
                }
            })
            .collect_vec();

        Ok(ShortestPathTree::new(graph, s, distance, predecessor))
    }

    /// Relaxes every admitted edge once and returns *true* if any distance improved
    fn relax_all<G>(
        graph: &G,
        floor: BandwidthFloor,
        distance: &mut [WideDistance],
        predecessor: &mut [Option<OptionalNode>],
    ) -> bool
    where
        G: WeightedAdjacencyList,
    {
        let mut improved = false;

        for edge in graph.eligible_edges(floor) {
            let (u, v) = edge.endpoints();
            let dist_u = distance[u as usize];
            if dist_u == UNREACHED {
                continue;
            }

            let candidate = dist_u.saturating_add(edge.weight as WideDistance);
            if candidate < distance[v as usize] {
                distance[v as usize] = candidate;
                predecessor[v as usize] = OptionalNode::new(u);
                improved = true;
            }
        }

        improved
    }
}

impl ShortestPath for BellmanFord {
    fn name(&self) -> &'static str {
        "bellman-ford"
    }

    #[tracing::instrument(level = "debug", skip(self, graph, floor), fields(floor = floor.value()))]
    fn shortest_path<'a>(
        &self,
        graph: &'a Substrate,
        source: VertexId,
        target: VertexId,
        floor: BandwidthFloor,
    ) -> Result<Route<'a>> {
        let t = graph.try_index_of(target)?;

        let route = self.shortest_path_tree(graph, source, floor)?.route_to_node(t);
        tracing::debug!(distance = %route.distance(), hops = route.hops(), "search finished");
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Substrate {
        Substrate::builder()
            .vertex(1, 0)
            .vertex(2, 0)
            .vertex(3, 0)
            .edge(1, 2, 10, 5)
            .edge(2, 3, 10, 5)
            .build()
            .unwrap()
    }

    #[test]
    fn chain_under_floors() {
        let graph = chain();
        let bf = BellmanFord::new();

        let route = bf.shortest_path(&graph, 1, 3, BandwidthFloor::new(5)).unwrap();
        assert_eq!(route.ids(), vec![1, 2, 3]);
        assert_eq!(route.distance(), Distance::finite(10));

        let route = bf.shortest_path(&graph, 1, 3, BandwidthFloor::new(15)).unwrap();
        assert!(!route.is_reachable());
        assert_eq!(route.distance(), Distance::UNREACHABLE);
    }

    #[test]
    fn source_is_destination() {
        let graph = chain();
        let route = BellmanFord::new()
            .shortest_path(&graph, 3, 3, BandwidthFloor::NONE)
            .unwrap();
        assert_eq!(route.ids(), vec![3]);
        assert_eq!(route.distance(), Distance::ZERO);
    }

    #[test]
    fn unknown_vertices() {
        let graph = chain();
        let bf = BellmanFord::new();
        assert_eq!(
            bf.shortest_path(&graph, 0, 3, BandwidthFloor::NONE),
            Err(PathError::VertexNotFound(0))
        );
        assert_eq!(
            bf.shortest_path(&graph, 1, 4, BandwidthFloor::NONE),
            Err(PathError::VertexNotFound(4))
        );
    }

    #[test]
    fn negative_weights_without_cycle() {
        // 1 -> 3 directly costs 4; via 2 it costs 5 - 3 = 2
        let graph = Substrate::builder()
            .vertex(1, 0)
            .vertex(2, 0)
            .vertex(3, 0)
            .edge(1, 3, 10, 4)
            .edge(1, 2, 10, 5)
            .edge(2, 3, 10, -3)
            .build()
            .unwrap();

        let route = BellmanFord::new()
            .shortest_path(&graph, 1, 3, BandwidthFloor::NONE)
            .unwrap();
        assert_eq!(route.ids(), vec![1, 2, 3]);
        assert_eq!(route.distance(), Distance::finite(2));
    }

    fn with_negative_cycle() -> Substrate {
        // 2 -> 3 -> 2 has total weight -1; the cycle uses bandwidth 5
        Substrate::builder()
            .vertex(1, 0)
            .vertex(2, 0)
            .vertex(3, 0)
            .vertex(4, 0)
            .edge(1, 2, 10, 1)
            .edge(2, 3, 5, 1)
            .edge(3, 2, 5, -2)
            .edge(2, 4, 10, 1)
            .build()
            .unwrap()
    }

    #[test]
    fn negative_cycle_is_reported() {
        let graph = with_negative_cycle();
        let bf = BellmanFord::new();

        assert_eq!(
            bf.shortest_path(&graph, 1, 4, BandwidthFloor::NONE),
            Err(PathError::NegativeCycle { origin: 1 })
        );

        // The floor removes the cycle
        let route = bf.shortest_path(&graph, 1, 4, BandwidthFloor::new(6)).unwrap();
        assert_eq!(route.ids(), vec![1, 2, 4]);
        assert_eq!(route.distance(), Distance::finite(2));
    }

    #[test]
    fn negative_cycle_beyond_i64_range() {
        let bf = BellmanFord::new();

        let graph = Substrate::builder()
            .vertex(1, 0)
            .vertex(2, 0)
            .edge(1, 2, 1, i64::MIN)
            .edge(2, 1, 1, 0)
            .build()
            .unwrap();
        assert_eq!(
            bf.shortest_path(&graph, 1, 2, BandwidthFloor::NONE),
            Err(PathError::NegativeCycle { origin: 1 })
        );

        let graph = Substrate::builder()
            .vertex(1, 0)
            .vertex(2, 0)
            .vertex(3, 0)
            .edge(1, 2, 1, -(1 << 62))
            .edge(2, 3, 1, -(1 << 62))
            .edge(3, 1, 1, -(1 << 62))
            .build()
            .unwrap();
        assert_eq!(
            bf.shortest_path(&graph, 1, 3, BandwidthFloor::NONE),
            Err(PathError::NegativeCycle { origin: 1 })
        );
        let pairs = FloydWarshall::new().all_pairs(&graph, BandwidthFloor::NONE);
        assert!(pairs.has_negative_cycle());
    }

    #[test]
    fn acyclic_sum_below_i64_saturates() {
        let graph = Substrate::builder()
            .vertex(1, 0)
            .vertex(2, 0)
            .vertex(3, 0)
            .edge(1, 2, 1, i64::MIN)
            .edge(2, 3, 1, i64::MIN)
            .build()
            .unwrap();

        let route = BellmanFord::new()
            .shortest_path(&graph, 1, 3, BandwidthFloor::NONE)
            .unwrap();
        assert_eq!(route.ids(), vec![1, 2, 3]);
        assert_eq!(route.distance(), Distance::finite(i64::MIN));
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let graph = with_negative_cycle();
        let route = BellmanFord::new()
            .shortest_path(&graph, 4, 4, BandwidthFloor::NONE)
            .unwrap();
        assert_eq!(route.ids(), vec![4]);
    }

    #[test]
    fn early_termination_does_not_change_results() {
        let graph = Substrate::builder()
            .vertex(5, 0)
            .vertex(4, 0)
            .vertex(3, 0)
            .vertex(2, 0)
            .vertex(1, 0)
            .edge(2, 1, 1, 1)
            .edge(3, 2, 1, 1)
            .edge(4, 3, 1, 1)
            .edge(5, 4, 1, 1)
            .edge(5, 1, 1, 10)
            .build()
            .unwrap();

        let fast = BellmanFord::new()
            .shortest_path(&graph, 5, 1, BandwidthFloor::NONE)
            .unwrap();
        let full = BellmanFord::new()
            .early_termination(false)
            .shortest_path(&graph, 5, 1, BandwidthFloor::NONE)
            .unwrap();

        assert_eq!(fast, full);
        assert_eq!(fast.ids(), vec![5, 4, 3, 2, 1]);
        assert_eq!(fast.distance(), Distance::finite(4));
    }
}
