use std::collections::{BTreeMap, BTreeSet};

use cores_core::{CoresError, VertexId};

use crate::errctx::CoresErrorExt;
use crate::vertex::VertexTable;

/// Deterministic directed, edge-labeled multigraph.
///
/// Internally an ordered adjacency map with set-valued labels
/// (`V -> (V -> set<Label>)`), keyed on the stable [`VertexId`] handle
/// rather than a mutable string.
#[derive(Debug, Clone, Default)]
pub struct GraphStructure {
    vertices: VertexTable,
    adjacency: BTreeMap<VertexId, BTreeMap<VertexId, BTreeSet<char>>>,
}

impl GraphStructure {
    /// Starts building a new graph from scratch.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Returns the number of live vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether the graph has no live vertices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns all live vertex identifiers in ascending order.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices.ids()
    }

    /// Returns the current (possibly merge-suffixed) name of a vertex.
    pub fn vertex_name(&self, id: VertexId) -> Result<&str, CoresError> {
        self.vertices.name(id)
    }

    /// Returns the label set attached to the ordered pair `(src, tgt)`,
    /// or an empty set if no such edge exists.
    pub fn labels(&self, src: VertexId, tgt: VertexId) -> BTreeSet<char> {
        self.adjacency
            .get(&src)
            .and_then(|targets| targets.get(&tgt))
            .cloned()
            .unwrap_or_default()
    }

    /// Iterates over every `(src, tgt, labels)` edge bundle with a
    /// non-empty label set.
    pub fn edge_bundles(&self) -> impl Iterator<Item = (VertexId, VertexId, &BTreeSet<char>)> {
        self.adjacency.iter().flat_map(|(src, targets)| {
            targets
                .iter()
                .filter(|(_, labels)| !labels.is_empty())
                .map(move |(tgt, labels)| (*src, *tgt, labels))
        })
    }

    /// Dumps every vertex slot, alive or tombstoned, in table order.
    pub(crate) fn vertex_slots(&self) -> Vec<(bool, String)> {
        self.vertices
            .records
            .iter()
            .map(|record| (record.alive, record.name.clone()))
            .collect()
    }

    /// Dumps every adjacency entry, including ones touching tombstoned
    /// vertices, for lossless snapshotting.
    pub(crate) fn adjacency_entries(&self) -> Vec<(VertexId, VertexId, Vec<char>)> {
        self.adjacency
            .iter()
            .flat_map(|(src, targets)| {
                targets
                    .iter()
                    .map(move |(tgt, labels)| (*src, *tgt, labels.iter().copied().collect()))
            })
            .collect()
    }

    /// Rebuilds a structure from a raw snapshot produced by
    /// [`GraphStructure::vertex_slots`] / [`GraphStructure::adjacency_entries`].
    pub(crate) fn from_slots(
        slots: Vec<(bool, String)>,
        edges: Vec<(VertexId, VertexId, Vec<char>)>,
    ) -> Self {
        let records = slots
            .into_iter()
            .map(|(alive, name)| crate::vertex::VertexRecord { alive, name })
            .collect();
        let by_name = Default::default();
        let vertices = VertexTable { records, by_name };
        let mut adjacency: BTreeMap<VertexId, BTreeMap<VertexId, BTreeSet<char>>> = BTreeMap::new();
        for (src, tgt, labels) in edges {
            adjacency
                .entry(src)
                .or_default()
                .insert(tgt, labels.into_iter().collect());
        }
        GraphStructure { vertices, adjacency }
    }

    pub(crate) fn apply_merge(&mut self, src: VertexId, tgt: VertexId) -> Result<(), CoresError> {
        if src == tgt {
            return Ok(());
        }
        let src_name = self.vertices.name(src)?.to_string();
        self.vertices.kill(src)?;
        self.adjacency.remove(&src);
        for targets in self.adjacency.values_mut() {
            targets.remove(&src);
        }
        self.vertices.append_suffix(tgt, '-', &src_name)?;
        Ok(())
    }
}

/// Builder for [`GraphStructure`], the only supported way to construct
/// one (no text-format parser is implemented here).
#[derive(Debug, Default)]
pub struct GraphBuilder {
    vertices: VertexTable,
    adjacency: BTreeMap<VertexId, BTreeMap<VertexId, BTreeSet<char>>>,
}

impl GraphBuilder {
    /// Adds a new vertex with the given name, rejecting duplicates.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId, CoresError> {
        let id = self.vertices.add(name)?;
        self.adjacency.insert(id, BTreeMap::new());
        Ok(id)
    }

    /// Adds a labeled edge `src -> tgt`, rejecting a duplicate label on
    /// the same ordered pair and unknown endpoints.
    pub fn add_edge(&mut self, src: VertexId, tgt: VertexId, label: char) -> Result<(), CoresError> {
        if !label.is_ascii_uppercase() {
            return Err(CoresError::input(
                "invalid-label",
                "graph edge labels must be a single uppercase ASCII letter",
            )
            .with_context("label", label));
        }
        self.vertices.record(src)?;
        self.vertices.record(tgt)?;
        let targets = self.adjacency.entry(src).or_default();
        let labels = targets.entry(tgt).or_default();
        if !labels.insert(label) {
            return Err(CoresError::input(
                "duplicate-edge",
                "an edge with this label already exists between this ordered pair",
            )
            .with_context("src", src.as_raw())
            .with_context("tgt", tgt.as_raw())
            .with_context("label", label));
        }
        Ok(())
    }

    /// Consumes the builder, producing an immutable [`GraphStructure`].
    pub fn build(self) -> GraphStructure {
        GraphStructure {
            vertices: self.vertices,
            adjacency: self.adjacency,
        }
    }
}
