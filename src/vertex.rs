use std::fmt::Display;

use crate::{edge::*, node::*};

/// Processing capacity of a substrate vertex
pub type Cpu = u32;

/// A substrate vertex: identifier, cpu resource and the outgoing edges it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: VertexId,
    pub cpu: Cpu,
    pub adjacencies: Vec<Edge>,
}

impl Vertex {
    /// Creates a vertex without outgoing edges
    pub fn new(id: VertexId, cpu: Cpu) -> Self {
        Self {
            id,
            cpu,
            adjacencies: Vec::new(),
        }
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
