/*!
# Node Representation

Vertices of a substrate carry an arbitrary integer identifier ([`VertexId`]) chosen by whoever
describes the topology. Internally, every vertex is also assigned a dense index [`Node`] in the
range `0..n` following insertion order. All algorithms work on these indices; identifiers only
appear at the API boundary.

We choose `Node = u32` as substrate networks are small and this saves space in the
`n * n` matrices of the all-pairs search.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Dense vertex index from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` vertices in a substrate
pub type NumNodes = Node;

/// Identifier of a vertex as given by the topology description.
/// Identifiers are unique within a graph but carry no ordering semantics.
pub type VertexId = i64;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we need `Vec<Option<Node>>` for predecessor arrays and `n * n` matrices for via-pointers.
/// This instead uses the `NonZero`-Wrapper to reserve a constant value as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

/// Extension to turn a stored `Option<OptionalNode>` back into a plain `Option<Node>`
pub trait OptionalNodeExt {
    fn node(&self) -> Option<Node>;
}

impl<const N: Node> OptionalNodeExt for Option<OptionalNodeImpl<N>> {
    #[inline]
    fn node(&self) -> Option<Node> {
        self.map(|x| x.get())
    }
}
