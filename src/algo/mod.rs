/*!
# Path Algorithms

Bandwidth-constrained shortest path searches on a [`Substrate`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use bwgraphs::algo::*;
```

Three interchangeable strategies implement the common [`ShortestPath`] contract:
- [`Dijkstra`]: greedy search, requires non-negative weights,
- [`BellmanFord`]: repeated relaxation, handles negative weights and detects negative cycles,
- [`FloydWarshall`]: all-pairs matrices, answers many queries from one computation via [`AllPairs`].

Every search only considers edges admitted by a [`BandwidthFloor`]. Strategies may be selected at
runtime with [`Algorithm`] or called directly on the graph via [`PathSearch`].
*/

mod bandwidth;
mod bellman_ford;
mod dijkstra;
mod floyd_warshall;
mod path;
mod route;
mod strategy;
mod tree;

use itertools::Itertools;

use crate::{error::*, prelude::*};

pub use bandwidth::*;
pub use bellman_ford::*;
pub use dijkstra::*;
pub use floyd_warshall::*;
pub use path::*;
pub use route::*;
pub use strategy::*;
pub use tree::*;
