/*!
# Path Reconstruction

All algorithms in this crate record, per node, *where they came from*: Dijkstra and Bellman-Ford
in a predecessor array, Floyd-Warshall in the via-row of the source. [`walk_predecessors`] turns
any such lookup into an ordered node sequence.
*/

use super::*;

/// Predecessor array as produced by the single-source searches
pub type Predecessors = Vec<Option<OptionalNode>>;

/// Walks the `pred_of` links backwards from `target` until `source` is reached and returns the
/// nodes in order `source, ..., target`.
///
/// Returns `None` if a link is missing before `source` is reached. Since a shortest path visits
/// every node at most once, the walk is aborted (also returning `None`) after `n` nodes, so
/// corrupted links can never cause an endless loop.
///
/// ```
/// use bwgraphs::algo::walk_predecessors;
///
/// let pred = [None, Some(0), Some(1), None];
/// assert_eq!(walk_predecessors(0, 2, 4, |v| pred[v as usize]), Some(vec![0, 1, 2]));
/// assert_eq!(walk_predecessors(0, 3, 4, |v| pred[v as usize]), None);
/// ```
pub fn walk_predecessors<F>(
    source: Node,
    target: Node,
    n: NumNodes,
    mut pred_of: F,
) -> Option<Vec<Node>>
where
    F: FnMut(Node) -> Option<Node>,
{
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        if path.len() >= n as usize {
            tracing::trace!(source, target, "predecessor walk exceeded node count");
            return None;
        }

        current = pred_of(current)?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

/// Shorthand for [`walk_predecessors`] on a [`Predecessors`] array
pub fn path_from_predecessors(
    predecessors: &[Option<OptionalNode>],
    source: Node,
    target: Node,
) -> Option<Vec<Node>> {
    walk_predecessors(source, target, predecessors.len() as NumNodes, |v| {
        predecessors[v as usize].node()
    })
}
