/*!
# Bandwidth Filter

Every path search in this crate takes a [`BandwidthFloor`]. An edge participates in the search
only if its bandwidth is at least the floor; all other edges are treated as absent (not merely
as more expensive). The filter is evaluated lazily per computation and never cached, as the
floor usually changes from query to query.
*/

use std::fmt::Display;

use super::*;

/// Minimum bandwidth an edge must offer to be usable in a computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BandwidthFloor(pub Bandwidth);

impl BandwidthFloor {
    /// Floor admitting every edge
    pub const NONE: BandwidthFloor = BandwidthFloor(0);

    /// Creates a new floor
    pub const fn new(bandwidth: Bandwidth) -> Self {
        Self(bandwidth)
    }

    /// Returns the required bandwidth
    pub const fn value(&self) -> Bandwidth {
        self.0
    }

    /// Returns *true* if the edge may be used under this floor
    #[inline]
    pub const fn admits(&self, edge: &Edge) -> bool {
        edge.bandwidth >= self.0
    }
}

impl From<Bandwidth> for BandwidthFloor {
    fn from(value: Bandwidth) -> Self {
        Self(value)
    }
}

impl Display for BandwidthFloor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ">={}", self.0)
    }
}

/// Edge access restricted to edges admitted by a [`BandwidthFloor`].
///
/// Implemented for every [`WeightedAdjacencyList`], so `graph.eligible_edges(floor)` works out of
/// the box.
pub trait BandwidthFilter: WeightedAdjacencyList {
    /// Returns the outgoing edges of `u` admitted by `floor`, in insertion order.
    /// ** Panics if `u >= n` **
    fn eligible_edges_of(
        &self,
        u: Node,
        floor: BandwidthFloor,
    ) -> impl Iterator<Item = &Edge> + '_ {
        self.edges_of(u).filter(move |e| floor.admits(e))
    }

    /// Returns all edges admitted by `floor` in the stable order of
    /// [`WeightedAdjacencyList::edges`]
    fn eligible_edges(&self, floor: BandwidthFloor) -> impl Iterator<Item = &Edge> + '_ {
        self.edges().filter(move |e| floor.admits(e))
    }

    /// Returns the cheapest admitted edge `u -> v`, if any.
    /// Among equally cheap parallel edges the first inserted one is returned.
    /// ** Panics if `u >= n` **
    fn cheapest_eligible_edge(&self, u: Node, v: Node, floor: BandwidthFloor) -> Option<&Edge> {
        self.eligible_edges_of(u, floor)
            .filter(|e| e.target == v)
            .min_by_key(|e| e.weight)
    }

    /// Returns the total weight of walking `path` using the cheapest admitted edge for every hop,
    /// or `None` if `path` is empty or some hop has no admitted edge. A single-node path has
    /// weight zero.
    fn path_weight(&self, path: &[Node], floor: BandwidthFloor) -> Option<Distance> {
        if path.is_empty() {
            return None;
        }

        path.iter()
            .tuple_windows()
            .try_fold(Distance::ZERO, |dist, (&u, &v)| {
                self.cheapest_eligible_edge(u, v, floor)
                    .map(|e| dist.extend(e.weight))
            })
    }
}

impl<G> BandwidthFilter for G where G: WeightedAdjacencyList {}
