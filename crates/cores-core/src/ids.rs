use serde::{Deserialize, Serialize};

/// Opaque handle for a vertex within a single structure instance.
///
/// A `VertexId` is a stable index into the owning structure's vertex
/// table for the lifetime of one solver attempt; it never changes
/// while a structure is being reduced. The human readable name carried
/// alongside it (see `cores_graph::VertexRecord`) is what mutates
/// under the merge-suffixation discipline, not the id itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u32 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Opaque handle for a hypergraph label (interned name + arity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LabelId(u32);

impl LabelId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u32 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A non-identity vertex assignment extracted from a solver model.
///
/// The pair `(from, to)` means "vertex `from` maps to vertex `to`";
/// vertices not mentioned map to themselves.
pub type MorphismPair = (VertexId, VertexId);

/// The list of non-identity vertex assignments that defines a proper
/// retract, as returned by a [`crate::errors::CoresError`]-fallible
/// solver attempt.
pub type Morphism = Vec<MorphismPair>;
