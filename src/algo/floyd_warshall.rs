/*!
# Floyd-Warshall

All-pairs search over the admitted edges. [`FloydWarshall::all_pairs`] fills two `n x n`
matrices in `O(n^3)` time:
- `distance[i][j]`: best known cost from `i` to `j`,
- `via[i][j]`: the node preceding `j` on the best known `i -> j` path, or none.

Path queries are answered afterwards by [`AllPairs::path_between`] without recomputation, so a
caller issuing many queries for the same floor should keep the [`AllPairs`] around. Using
[`FloydWarshall`] through the [`ShortestPath`] interface recomputes the matrices per call.

The cubic cost restricts this to small substrates (tens of nodes).
*/

use super::*;

/// All-pairs search. Currently without options.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new search
    pub fn new() -> Self {
        Self
    }

    /// Computes distance and via matrices for all pairs of vertices under `floor`
    pub fn all_pairs<'a, G>(&self, graph: &'a G, floor: BandwidthFloor) -> AllPairs<'a, G>
    where
        G: WeightedAdjacencyList + VertexLookup,
    {
        let n = graph.len();
        let mut distance = vec![Distance::UNREACHABLE; n * n];
        let mut via: Vec<Option<OptionalNode>> = vec![None; n * n];

        for i in 0..n {
            distance[i * n + i] = Distance::ZERO;
        }

        // Parallel edges: keep the cheapest admitted one
        for edge in graph.eligible_edges(floor) {
            let (u, v) = edge.endpoints();
            let idx = u as usize * n + v as usize;
            let weight = Distance::finite(edge.weight);
            if weight < distance[idx] {
                distance[idx] = weight;
                via[idx] = OptionalNode::new(u);
            }
        }

        // `k` must be the outermost loop: after round `k`, distance[i][j] is optimal among
        // paths whose intermediate nodes are all `<= k`
        for k in 0..n {
            for i in 0..n {
                let dist_ik = distance[i * n + k];
                if dist_ik.is_unreachable() {
                    continue;
                }

                for j in 0..n {
                    let dist_kj = distance[k * n + j];
                    if dist_kj.is_unreachable() {
                        continue;
                    }

                    let candidate = dist_ik.join(dist_kj);
                    if candidate < distance[i * n + j] {
                        distance[i * n + j] = candidate;
                        via[i * n + j] = via[k * n + j];
                    }
                }
            }
        }

        let result = AllPairs {
            graph,
            distance,
            via,
        };

        if result.has_negative_cycle() {
            tracing::warn!(floor = floor.value(), "graph contains a negative weight cycle");
        }
        tracing::debug!(n, floor = floor.value(), "all-pairs matrices computed");

        result
    }
}

impl ShortestPath for FloydWarshall {
    fn name(&self) -> &'static str {
        "floyd-warshall"
    }

    #[tracing::instrument(level = "debug", skip(self, graph, floor), fields(floor = floor.value()))]
    fn shortest_path<'a>(
        &self,
        graph: &'a Substrate,
        source: VertexId,
        target: VertexId,
        floor: BandwidthFloor,
    ) -> Result<Route<'a>> {
        // Fail fast before paying the cubic cost
        graph.try_index_of(source)?;
        graph.try_index_of(target)?;

        self.all_pairs(graph, floor).path_between(source, target)
    }
}

/// Distance and via matrices computed by [`FloydWarshall::all_pairs`].
#[derive(Debug, Clone)]
pub struct AllPairs<'a, G> {
    graph: &'a G,
    distance: Vec<Distance>,
    via: Vec<Option<OptionalNode>>,
}

impl<'a, G> AllPairs<'a, G>
where
    G: VertexLookup,
{
    #[inline]
    fn index(&self, i: Node, j: Node) -> usize {
        i as usize * self.graph.len() + j as usize
    }

    /// Returns the best known distance between the nodes `i` and `j`
    /// ** Panics if `i >= n || j >= n` **
    pub fn distance(&self, i: Node, j: Node) -> Distance {
        self.distance[self.index(i, j)]
    }

    /// Returns the node preceding `j` on the best known path from `i`
    /// ** Panics if `i >= n || j >= n` **
    pub fn via(&self, i: Node, j: Node) -> Option<Node> {
        self.via[self.index(i, j)].node()
    }

    /// Returns the distance matrix as rows indexed by [`Node`]
    pub fn distance_matrix(&self) -> Vec<Vec<Distance>> {
        let n = self.graph.len().max(1);
        self.distance.chunks(n).map(|row| row.to_vec()).collect_vec()
    }

    /// Returns *true* if some vertex lies on a negative cycle
    pub fn has_negative_cycle(&self) -> bool {
        self.graph
            .vertices_range()
            .any(|k| self.distance(k, k).is_negative())
    }

    /// Returns the distance between two vertices given by identifier
    ///
    /// # Errors
    /// - [`PathError::VertexNotFound`] if either identifier is unknown,
    /// - [`PathError::NegativeCycle`] if a negative cycle lies on some `source -> target` path.
    pub fn distance_between(&self, source: VertexId, target: VertexId) -> Result<Distance> {
        let (s, t) = self.resolve(source, target)?;
        Ok(self.distance(s, t))
    }

    /// Reconstructs the best path between two vertices given by identifier.
    ///
    /// # Errors
    /// - [`PathError::VertexNotFound`] if either identifier is unknown,
    /// - [`PathError::NegativeCycle`] if a negative cycle lies on some `source -> target` path.
    pub fn path_between(&self, source: VertexId, target: VertexId) -> Result<Route<'a>> {
        let (s, t) = self.resolve(source, target)?;

        let distance = self.distance(s, t);
        if distance.is_unreachable() {
            tracing::debug!(source, target, "no path exists");
            return Ok(Route::unreachable());
        }

        let n = self.graph.number_of_nodes();
        match walk_predecessors(s, t, n, |v| self.via(s, v)) {
            Some(nodes) => Ok(Route::from_nodes(self.graph, nodes, distance)),
            None => {
                tracing::debug!(source, target, "via chain broken");
                Ok(Route::unreachable())
            }
        }
    }

    /// Maps both identifiers and rejects pairs whose distance is undefined
    fn resolve(&self, source: VertexId, target: VertexId) -> Result<(Node, Node)> {
        let s = self.graph.try_index_of(source)?;
        let t = self.graph.try_index_of(target)?;

        let on_negative_cycle = self.graph.vertices_range().any(|k| {
            self.distance(k, k).is_negative()
                && self.distance(s, k).is_finite()
                && self.distance(k, t).is_finite()
        });
        if on_negative_cycle {
            return Err(PathError::NegativeCycle { origin: source });
        }

        Ok((s, t))
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
        let fw = FloydWarshall::new();

        let pairs = fw.all_pairs(&graph, BandwidthFloor::new(5));
        let route = pairs.path_between(1, 3).unwrap();
        assert_eq!(route.ids(), vec![1, 2, 3]);
        assert_eq!(route.distance(), Distance::finite(10));
        assert_eq!(pairs.distance_between(3, 1), Ok(Distance::UNREACHABLE));

        let pairs = fw.all_pairs(&graph, BandwidthFloor::new(15));
        let route = pairs.path_between(1, 3).unwrap();
        assert!(!route.is_reachable());
        assert_eq!(route.distance(), Distance::UNREACHABLE);
    }

    #[test]
    fn uniform_clique() {
        let mut builder = Substrate::builder();
        for id in 1..=3 {
            builder.add_vertex(id, 0);
        }
        for u in 1..=3 {
            for v in 1..=3 {
                if u != v {
                    builder.add_edge(u, v, 10, 1);
                }
            }
        }
        let graph = builder.build().unwrap();

        let pairs = FloydWarshall::new().all_pairs(&graph, BandwidthFloor::NONE);
        let expected = (0..3)
            .map(|i| {
                (0..3)
                    .map(|j| Distance::finite(if i == j { 0 } else { 1 }))
                    .collect_vec()
            })
            .collect_vec();
        assert_eq!(pairs.distance_matrix(), expected);
        assert!(!pairs.has_negative_cycle());

        for (s, t) in (1..=3).cartesian_product(1..=3) {
            let route = pairs.path_between(s, t).unwrap();
            if s == t {
                assert_eq!(route.ids(), vec![s]);
            } else {
                assert_eq!(route.ids(), vec![s, t]);
            }
        }
    }

    #[test]
    fn via_points_to_predecessor() {
        let graph = chain();
        let pairs = FloydWarshall::new().all_pairs(&graph, BandwidthFloor::NONE);

        assert_eq!(pairs.via(0, 1), Some(0));
        assert_eq!(pairs.via(0, 2), Some(1));
        assert_eq!(pairs.via(2, 0), None);
        assert_eq!(pairs.via(1, 1), None);
    }

    #[test]
    fn unknown_vertices() {
        let graph = chain();
        let pairs = FloydWarshall::new().all_pairs(&graph, BandwidthFloor::NONE);
        assert_eq!(pairs.path_between(7, 1), Err(PathError::VertexNotFound(7)));
        assert_eq!(pairs.distance_between(1, 7), Err(PathError::VertexNotFound(7)));
        assert_eq!(
            FloydWarshall::new().shortest_path(&graph, 1, 7, BandwidthFloor::NONE),
            Err(PathError::VertexNotFound(7))
        );
    }

    #[test]
    fn cheapest_parallel_edge_wins() {
        let graph = Substrate::builder()
            .vertex(1, 0)
            .vertex(2, 0)
            .edge(1, 2, 10, 9)
            .edge(1, 2, 3, 2)
            .edge(1, 2, 10, 4)
            .build()
            .unwrap();

        let fw = FloydWarshall::new();
        assert_eq!(
            fw.all_pairs(&graph, BandwidthFloor::NONE).distance_between(1, 2),
            Ok(Distance::finite(2))
        );
        assert_eq!(
            fw.all_pairs(&graph, BandwidthFloor::new(5)).distance_between(1, 2),
            Ok(Distance::finite(4))
        );
    }

    #[test]
    fn negative_cycles() {
        // 2 <-> 3 forms a negative cycle; 4 is only a source into the rest
        let graph = Substrate::builder()
            .vertex(1, 0)
            .vertex(2, 0)
            .vertex(3, 0)
            .vertex(4, 0)
            .edge(1, 2, 10, 1)
            .edge(2, 3, 5, 1)
            .edge(3, 2, 5, -2)
            .edge(4, 1, 10, 1)
            .build()
            .unwrap();

        let fw = FloydWarshall::new();
        let pairs = fw.all_pairs(&graph, BandwidthFloor::NONE);
        assert!(pairs.has_negative_cycle());
        assert_eq!(
            pairs.path_between(1, 3),
            Err(PathError::NegativeCycle { origin: 1 })
        );
        assert_eq!(
            pairs.path_between(4, 2),
            Err(PathError::NegativeCycle { origin: 4 })
        );

        // Not affected by the cycle
        assert_eq!(pairs.path_between(4, 1).unwrap().ids(), vec![4, 1]);

        let pairs = fw.all_pairs(&graph, BandwidthFloor::new(6));
        assert!(!pairs.has_negative_cycle());
        assert_eq!(pairs.path_between(4, 2).unwrap().ids(), vec![4, 1, 2]);
    }

    #[test]
    fn negative_weights_without_cycle() {
        let graph = Substrate::builder()
            .vertex(1, 0)
            .vertex(2, 0)
            .vertex(3, 0)
            .edge(1, 3, 10, 4)
            .edge(1, 2, 10, 5)
            .edge(2, 3, 10, -3)
            .build()
            .unwrap();

        let route = FloydWarshall::new()
            .shortest_path(&graph, 1, 3, BandwidthFloor::NONE)
            .unwrap();
        assert_eq!(route.ids(), vec![1, 2, 3]);
        assert_eq!(route.distance(), Distance::finite(2));
    }
}
