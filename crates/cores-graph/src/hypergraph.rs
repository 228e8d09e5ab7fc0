use std::collections::{BTreeSet, HashMap};

use cores_core::{CoresError, LabelId, VertexId};

use crate::errctx::CoresErrorExt;
use crate::vertex::VertexTable;

/// A declared hyperedge label together with its fixed arity.
#[derive(Debug, Clone)]
pub(crate) struct LabelRecord {
    pub(crate) name: String,
    pub(crate) arity: usize,
}

/// One instance of a label applied to an ordered tuple of vertices.
/// Tombstoned the same way vertices are: a dead instance is one whose
/// argument list touched a vertex that has since been merged away.
#[derive(Debug, Clone)]
struct EdgeInstance {
    alive: bool,
    label: LabelId,
    args: Vec<VertexId>,
}

/// Deterministic finite relational hypergraph: a vertex set plus a
/// fixed set of labels, each with zero or more positional instances.
///
/// Mirrors [`crate::graph::GraphStructure`]'s shape but generalizes the
/// single-character edge label to an interned [`LabelId`] with an
/// arity, and an ordered pair to an arity-many argument tuple.
#[derive(Debug, Clone, Default)]
pub struct HyperStructure {
    vertices: VertexTable,
    labels: Vec<LabelRecord>,
    label_by_name: HashMap<String, LabelId>,
    instances: Vec<EdgeInstance>,
    signatures: BTreeSet<(LabelId, Vec<VertexId>)>,
}

impl HyperStructure {
    /// Starts building a new hypergraph from scratch.
    pub fn builder() -> HyperBuilder {
        HyperBuilder::default()
    }

    /// Returns the number of live vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether the hypergraph has no live vertices.
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

    /// Returns the declared arity of a label.
    pub fn arity(&self, label: LabelId) -> Result<usize, CoresError> {
        Ok(self.label_record(label)?.arity)
    }

    /// Returns the declared name of a label.
    pub fn label_name(&self, label: LabelId) -> Result<&str, CoresError> {
        Ok(self.label_record(label)?.name.as_str())
    }

    /// Iterates over every live `(label, args)` edge instance.
    pub fn instances(&self) -> impl Iterator<Item = (LabelId, &[VertexId])> {
        self.instances
            .iter()
            .filter(|inst| inst.alive)
            .map(|inst| (inst.label, inst.args.as_slice()))
    }

    /// Iterates over live instances carrying a specific label.
    pub fn instances_with_label(&self, label: LabelId) -> impl Iterator<Item = &[VertexId]> {
        self.instances
            .iter()
            .filter(move |inst| inst.alive && inst.label == label)
            .map(|inst| inst.args.as_slice())
    }

    /// Returns every declared label identifier, in declaration order.
    pub fn labels(&self) -> Vec<LabelId> {
        (0..self.labels.len() as u32).map(LabelId::from_raw).collect()
    }

    fn label_record(&self, label: LabelId) -> Result<&LabelRecord, CoresError> {
        self.labels
            .get(label.as_raw() as usize)
            .ok_or_else(|| unknown_label(label))
    }

    pub(crate) fn apply_merge(&mut self, src: VertexId, tgt: VertexId) -> Result<(), CoresError> {
        if src == tgt {
            return Ok(());
        }
        let src_name = self.vertices.name(src)?.to_string();
        self.vertices.kill(src)?;
        for inst in self.instances.iter_mut() {
            if inst.alive && inst.args.contains(&src) {
                inst.alive = false;
            }
        }
        self.vertices.append_suffix(tgt, '.', &src_name)?;
        Ok(())
    }

    /// Dumps every vertex slot, alive or tombstoned, in table order.
    pub(crate) fn vertex_slots(&self) -> Vec<(bool, String)> {
        self.vertices
            .records
            .iter()
            .map(|record| (record.alive, record.name.clone()))
            .collect()
    }

    /// Dumps every declared label in declaration order.
    pub(crate) fn label_slots(&self) -> Vec<(String, usize)> {
        self.labels
            .iter()
            .map(|record| (record.name.clone(), record.arity))
            .collect()
    }

    /// Dumps every edge instance, alive or tombstoned.
    pub(crate) fn instance_slots(&self) -> Vec<(bool, LabelId, Vec<VertexId>)> {
        self.instances
            .iter()
            .map(|inst| (inst.alive, inst.label, inst.args.clone()))
            .collect()
    }

    /// Rebuilds a structure from a raw snapshot produced by the
    /// `*_slots` accessors above.
    pub(crate) fn from_slots(
        vertex_slots: Vec<(bool, String)>,
        label_slots: Vec<(String, usize)>,
        instance_slots: Vec<(bool, LabelId, Vec<VertexId>)>,
    ) -> Self {
        let records = vertex_slots
            .into_iter()
            .map(|(alive, name)| crate::vertex::VertexRecord { alive, name })
            .collect();
        let vertices = VertexTable {
            records,
            by_name: Default::default(),
        };
        let labels: Vec<LabelRecord> = label_slots
            .into_iter()
            .map(|(name, arity)| LabelRecord { name, arity })
            .collect();
        let label_by_name = labels
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.name.clone(), LabelId::from_raw(idx as u32)))
            .collect();
        let mut signatures = BTreeSet::new();
        let instances = instance_slots
            .into_iter()
            .map(|(alive, label, args)| {
                if alive {
                    signatures.insert((label, args.clone()));
                }
                EdgeInstance { alive, label, args }
            })
            .collect();
        HyperStructure {
            vertices,
            labels,
            label_by_name,
            instances,
            signatures,
        }
    }
}

/// Builder for [`HyperStructure`]; the only supported way to construct
/// one (no text-format parser is implemented here).
#[derive(Debug, Default)]
pub struct HyperBuilder {
    vertices: VertexTable,
    labels: Vec<LabelRecord>,
    label_by_name: HashMap<String, LabelId>,
    instances: Vec<EdgeInstance>,
    signatures: BTreeSet<(LabelId, Vec<VertexId>)>,
}

impl HyperBuilder {
    /// Adds a new vertex with the given name, rejecting duplicates.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId, CoresError> {
        self.vertices.add(name)
    }

    /// Declares a new label with a fixed arity, rejecting a duplicate
    /// label name.
    pub fn declare_label(&mut self, name: impl Into<String>, arity: usize) -> Result<LabelId, CoresError> {
        let name = name.into();
        if self.label_by_name.contains_key(&name) {
            return Err(CoresError::input(
                "duplicate-label",
                "label names must be unique within a hypergraph",
            )
            .with_context("name", &name));
        }
        let id = LabelId::from_raw(self.labels.len() as u32);
        self.labels.push(LabelRecord {
            name: name.clone(),
            arity,
        });
        self.label_by_name.insert(name, id);
        Ok(id)
    }

    /// Adds an edge instance of `label` over the ordered `args` tuple,
    /// rejecting an arity mismatch, an unknown vertex, an unknown
    /// label, or a duplicate `(label, args)` signature.
    pub fn add_edge_instance(&mut self, label: LabelId, args: Vec<VertexId>) -> Result<(), CoresError> {
        let record = self
            .labels
            .get(label.as_raw() as usize)
            .ok_or_else(|| unknown_label(label))?;
        if args.len() != record.arity {
            return Err(CoresError::input(
                "arity-mismatch",
                "edge instance argument count does not match the declared label arity",
            )
            .with_context("label", &record.name)
            .with_context("expected", record.arity)
            .with_context("actual", args.len()));
        }
        for &arg in &args {
            self.vertices.record(arg)?;
        }
        let signature = (label, args.clone());
        if !self.signatures.insert(signature) {
            return Err(CoresError::input(
                "duplicate-edge-instance",
                "an edge instance with this exact label and argument tuple already exists",
            )
            .with_context("label", &record.name));
        }
        self.instances.push(EdgeInstance {
            alive: true,
            label,
            args,
        });
        Ok(())
    }

    /// Consumes the builder, producing an immutable [`HyperStructure`].
    pub fn build(self) -> HyperStructure {
        HyperStructure {
            vertices: self.vertices,
            labels: self.labels,
            label_by_name: self.label_by_name,
            instances: self.instances,
            signatures: self.signatures,
        }
    }
}

fn unknown_label(label: LabelId) -> CoresError {
    CoresError::input("unknown-label", "label does not exist").with_context("label", label.as_raw())
}
