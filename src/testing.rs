//! Random substrates for tests

use std::ops::Range;

use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};

use crate::prelude::*;

/// Creates a random substrate with `n` vertices.
///
/// Every ordered pair (including loops) receives up to two parallel edges, each with probability
/// `p`, a bandwidth in `0..100` and a weight drawn from `weights`. Identifiers are shuffled so
/// that identifier order and index order disagree.
pub(crate) fn random_substrate<R: Rng>(
    rng: &mut R,
    n: usize,
    p: f64,
    weights: Range<Weight>,
) -> Substrate {
    let mut ids = (0..n as VertexId).map(|i| 3 * i - 7).collect_vec();
    ids.shuffle(rng);

    let mut builder = Substrate::builder();
    for &id in &ids {
        builder.add_vertex(id, rng.random_range(1..16));
    }

    for (&u, &v) in ids.iter().cartesian_product(ids.iter()) {
        for _ in 0..2 {
            if rng.random_bool(p) {
                builder.add_edge(
                    u,
                    v,
                    rng.random_range(0..100),
                    rng.random_range(weights.clone()),
                );
            }
        }
    }

    builder.build().unwrap()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn random_substrate_is_well_formed() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1, 5, 20] {
            let graph = random_substrate(rng, n, 0.5, -5..5);
            assert_eq!(graph.len(), n);
            assert_eq!(
                graph.iter().map(|v| v.id).sorted().collect_vec(),
                (0..n as VertexId).map(|i| 3 * i - 7).collect_vec()
            );
            for edge in graph.edges() {
                assert!(edge.bandwidth < 100);
                assert!((-5..5).contains(&edge.weight));
            }
        }
    }
}
