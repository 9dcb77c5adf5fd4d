/*!
# Utilities

Helper structures that are not graph representations themselves. Currently only the
[`IdMapper`] translating external vertex identifiers into dense [`Node`](crate::node::Node)
indices.
*/

pub mod id_mapper;

pub use id_mapper::IdMapper;
