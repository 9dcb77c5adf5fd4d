use std::{fmt::Display, str::FromStr};

use super::*;

/// Common contract of all path searches: find the cheapest path from `source` to `target`
/// using only edges admitted by `floor`.
///
/// Implemented by [`Dijkstra`], [`BellmanFord`], [`FloydWarshall`] and by the [`Algorithm`]
/// selector, so callers can pick a strategy at runtime:
/// ```
/// use bwgraphs::{prelude::*, algo::*};
///
/// let graph = Substrate::builder()
///     .vertex(1, 0)
///     .vertex(2, 0)
///     .vertex(3, 0)
///     .edge(1, 2, 10, 5)
///     .edge(2, 3, 10, 5)
///     .build()
///     .unwrap();
///
/// for algorithm in Algorithm::ALL {
///     let route = algorithm.shortest_path(&graph, 1, 3, BandwidthFloor::new(5)).unwrap();
///     assert_eq!(route.ids(), vec![1, 2, 3]);
///     assert_eq!(route.distance().value(), Some(10));
/// }
/// ```
pub trait ShortestPath {
    /// Short, lowercase name of the strategy
    fn name(&self) -> &'static str;

    /// Returns the route from `source` to `target`. An unreachable target yields an empty route
    /// with [`Distance::UNREACHABLE`].
    ///
    /// # Errors
    /// - [`PathError::VertexNotFound`] if `source` or `target` is unknown,
    /// - [`PathError::NegativeCycle`] / [`PathError::NegativeWeight`] depending on the strategy.
    fn shortest_path<'a>(
        &self,
        graph: &'a Substrate,
        source: VertexId,
        target: VertexId,
        floor: BandwidthFloor,
    ) -> Result<Route<'a>>;

    /// Returns only the total distance of [`ShortestPath::shortest_path`]
    fn total_distance(
        &self,
        graph: &Substrate,
        source: VertexId,
        target: VertexId,
        floor: BandwidthFloor,
    ) -> Result<Distance> {
        self.shortest_path(graph, source, target, floor)
            .map(|route| route.distance())
    }
}

/// Runtime selection of a path search strategy
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Greedy search, non-negative weights only
    Dijkstra,
    /// Repeated relaxation with negative cycle detection
    BellmanFord,
    /// All-pairs matrix search
    FloydWarshall,
}

impl Algorithm {
    /// All available strategies
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::FloydWarshall,
    ];

    /// Returns the strategy behind this variant with default settings
    pub fn strategy(&self) -> Box<dyn ShortestPath> {
        match self {
            Algorithm::Dijkstra => Box::new(Dijkstra::new()),
            Algorithm::BellmanFord => Box::new(BellmanFord::new()),
            Algorithm::FloydWarshall => Box::new(FloydWarshall::new()),
        }
    }
}

impl ShortestPath for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => Dijkstra::new().name(),
            Algorithm::BellmanFord => BellmanFord::new().name(),
            Algorithm::FloydWarshall => FloydWarshall::new().name(),
        }
    }

    fn shortest_path<'a>(
        &self,
        graph: &'a Substrate,
        source: VertexId,
        target: VertexId,
        floor: BandwidthFloor,
    ) -> Result<Route<'a>> {
        match self {
            Algorithm::Dijkstra => Dijkstra::new().shortest_path(graph, source, target, floor),
            Algorithm::BellmanFord => {
                BellmanFord::new().shortest_path(graph, source, target, floor)
            }
            Algorithm::FloydWarshall => {
                FloydWarshall::new().shortest_path(graph, source, target, floor)
            }
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raised when parsing an unknown [`Algorithm`] name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" | "bellmanford" => Ok(Algorithm::BellmanFord),
            "floyd-warshall" | "floydwarshall" => Ok(Algorithm::FloydWarshall),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Path searches as methods on the graph itself
pub trait PathSearch {
    /// Runs the selected strategy, see [`ShortestPath::shortest_path`]
    fn shortest_path_with(
        &self,
        algorithm: Algorithm,
        source: VertexId,
        target: VertexId,
        floor: BandwidthFloor,
    ) -> Result<Route<'_>>;

    /// Shorthand for [`Dijkstra`] with default settings
    fn dijkstra(
        &self,
        source: VertexId,
        target: VertexId,
        floor: BandwidthFloor,
    ) -> Result<Route<'_>> {
        self.shortest_path_with(Algorithm::Dijkstra, source, target, floor)
    }

    /// Shorthand for [`BellmanFord`] with default settings
    fn bellman_ford(
        &self,
        source: VertexId,
        target: VertexId,
        floor: BandwidthFloor,
    ) -> Result<Route<'_>> {
        self.shortest_path_with(Algorithm::BellmanFord, source, target, floor)
    }

    /// Computes all-pairs matrices, see [`FloydWarshall::all_pairs`]
    fn all_pairs(&self, floor: BandwidthFloor) -> AllPairs<'_, Self>
    where
        Self: Sized;
}

impl PathSearch for Substrate {
    fn shortest_path_with(
        &self,
        algorithm: Algorithm,
        source: VertexId,
        target: VertexId,
        floor: BandwidthFloor,
    ) -> Result<Route<'_>> {
        algorithm.shortest_path(self, source, target, floor)
    }

    fn all_pairs(&self, floor: BandwidthFloor) -> AllPairs<'_, Self> {
        FloydWarshall::new().all_pairs(self, floor)
    }
}
