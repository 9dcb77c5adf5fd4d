/*!
# Identifier Mapper

Maps topology identifiers ([`VertexId`]) to dense indices ([`Node`]) in `O(1)`.
The mapping is built once together with the graph and never changes afterwards.
*/

use fxhash::FxHashMap;

use crate::node::*;

/// Bijection between identifiers and the dense indices `0..n`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMapper {
    index_of: FxHashMap<VertexId, Node>,
}

impl IdMapper {
    /// Creates an empty mapper with space for `n` identifiers
    pub fn with_capacity(n: usize) -> Self {
        Self {
            index_of: FxHashMap::with_capacity_and_hasher(n, Default::default()),
        }
    }

    /// Assigns the next free index to `id` and returns it.
    /// Returns `None` without modifying the mapper if `id` is already mapped.
    pub fn push(&mut self, id: VertexId) -> Option<Node> {
        if self.index_of.contains_key(&id) {
            return None;
        }

        let next = self.index_of.len() as Node;
        self.index_of.insert(id, next);
        Some(next)
    }

    /// Returns the index of `id` if it is mapped
    #[inline]
    pub fn index_of(&self, id: VertexId) -> Option<Node> {
        self.index_of.get(&id).copied()
    }

    /// Returns the number of mapped identifiers
    pub fn len(&self) -> usize {
        self.index_of.len()
    }

    /// Returns *true* if nothing is mapped
    pub fn is_empty(&self) -> bool {
        self.index_of.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_indices_in_insertion_order() {
        let mut mapper = IdMapper::with_capacity(3);
        assert_eq!(mapper.push(42), Some(0));
        assert_eq!(mapper.push(-7), Some(1));
        assert_eq!(mapper.push(3), Some(2));

        assert_eq!(mapper.index_of(-7), Some(1));
        assert_eq!(mapper.index_of(5), None);
        assert_eq!(mapper.len(), 3);
    }

    #[test]
    fn rejects_duplicates() {
        let mut mapper = IdMapper::default();
        assert_eq!(mapper.push(1), Some(0));
        assert_eq!(mapper.push(1), None);
        assert_eq!(mapper.push(2), Some(1));
        assert_eq!(mapper.len(), 2);
    }
}
