use std::collections::HashMap;

use cores_core::{CoresError, VertexId};

use crate::errctx::CoresErrorExt;

/// A single vertex slot. Tombstoned (`alive = false`) rather than
/// removed outright so that previously issued [`VertexId`] handles
/// stay valid for the lifetime of one solver attempt, mirroring the
/// `alive`-flag convention used throughout the host crate family's
/// hypergraph implementation.
#[derive(Debug, Clone)]
pub(crate) struct VertexRecord {
    pub(crate) alive: bool,
    pub(crate) name: String,
}

/// Shared vertex table used by both [`crate::graph::GraphStructure`]
/// and [`crate::hypergraph::HyperStructure`].
#[derive(Debug, Clone, Default)]
pub(crate) struct VertexTable {
    pub(crate) records: Vec<VertexRecord>,
    pub(crate) by_name: HashMap<String, VertexId>,
}

impl VertexTable {
    pub(crate) fn add(&mut self, name: impl Into<String>) -> Result<VertexId, CoresError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(CoresError::input(
                "duplicate-vertex",
                "vertex names must be unique within a structure",
            )
            .with_context("name", &name));
        }
        let id = VertexId::from_raw(self.records.len() as u32);
        self.records.push(VertexRecord {
            alive: true,
            name: name.clone(),
        });
        self.by_name.insert(name, id);
        Ok(id)
    }

    pub(crate) fn record(&self, id: VertexId) -> Result<&VertexRecord, CoresError> {
        self.records
            .get(id.as_raw() as usize)
            .filter(|record| record.alive)
            .ok_or_else(|| unknown_vertex(id))
    }

    pub(crate) fn record_mut(&mut self, id: VertexId) -> Result<&mut VertexRecord, CoresError> {
        match self.records.get_mut(id.as_raw() as usize) {
            Some(record) if record.alive => Ok(record),
            _ => Err(unknown_vertex(id)),
        }
    }

    pub(crate) fn name(&self, id: VertexId) -> Result<&str, CoresError> {
        Ok(self.record(id)?.name.as_str())
    }

    /// Removes the vertex from the live set. Its name is retained on
    /// the tombstoned record purely for diagnostics; no live lookup
    /// will ever reach it again.
    pub(crate) fn kill(&mut self, id: VertexId) -> Result<(), CoresError> {
        let record = self.record_mut(id)?;
        record.alive = false;
        Ok(())
    }

    /// Appends a merge-history suffix to a surviving vertex's name.
    pub(crate) fn append_suffix(&mut self, id: VertexId, sep: char, suffix: &str) -> Result<(), CoresError> {
        let record = self.record_mut(id)?;
        record.name.push(sep);
        record.name.push_str(suffix);
        Ok(())
    }

    pub(crate) fn ids(&self) -> Vec<VertexId> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.alive)
            .map(|(idx, _)| VertexId::from_raw(idx as u32))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.iter().filter(|record| record.alive).count()
    }
}

fn unknown_vertex(id: VertexId) -> CoresError {
    CoresError::input("unknown-vertex", "vertex does not exist").with_context("vertex", id.as_raw())
}
