/*!
# Representations

The network topology is stored as a [`Substrate`]: a vector of vertices in declaration order, each
owning its outgoing edges, together with a lookup from external identifiers to dense [`Node`]
indices. A [`Substrate`] can only be obtained through a [`SubstrateBuilder`], which validates the
topology once so that algorithms never have to.
*/

use crate::{
    edge::*, error::TopologyError, node::*, ops::*, utils::IdMapper, vertex::*,
};

mod builder;
mod substrate;

pub use builder::*;
pub use substrate::*;
