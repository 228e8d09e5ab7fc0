//! Internal snapshot (de)serialization for [`GraphStructure`] and
//! [`HyperStructure`]. This is not a textual graph/hypergraph file
//! format for end users: it exists for the snapshot/rollback
//! machinery in `cores-engine` and for test/bench fixtures.

use cores_core::{CoresError, LabelId, VertexId};
use serde::{Deserialize, Serialize};

use crate::graph::GraphStructure;
use crate::hypergraph::HyperStructure;

/// Serializes a graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &GraphStructure) -> Result<Vec<u8>, CoresError> {
    bincode::serialize(&SerializableGraph::from_graph(graph))
        .map_err(|err| CoresError::internal("serialize-bytes", err.to_string()))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<GraphStructure, CoresError> {
    let raw: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| CoresError::internal("deserialize-bytes", err.to_string()))?;
    Ok(raw.into_graph())
}

/// Serializes a graph to a JSON string.
pub fn graph_to_json(graph: &GraphStructure) -> Result<String, CoresError> {
    serde_json::to_string_pretty(&SerializableGraph::from_graph(graph))
        .map_err(|err| CoresError::internal("serialize-json", err.to_string()))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<GraphStructure, CoresError> {
    let raw: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| CoresError::internal("deserialize-json", err.to_string()))?;
    Ok(raw.into_graph())
}

/// Serializes a hypergraph to a compact binary representation.
pub fn hyper_to_bytes(hyper: &HyperStructure) -> Result<Vec<u8>, CoresError> {
    bincode::serialize(&SerializableHyper::from_hyper(hyper))
        .map_err(|err| CoresError::internal("serialize-bytes", err.to_string()))
}

/// Restores a hypergraph from its binary representation.
pub fn hyper_from_bytes(bytes: &[u8]) -> Result<HyperStructure, CoresError> {
    let raw: SerializableHyper = bincode::deserialize(bytes)
        .map_err(|err| CoresError::internal("deserialize-bytes", err.to_string()))?;
    Ok(raw.into_hyper())
}

/// Serializes a hypergraph to a JSON string.
pub fn hyper_to_json(hyper: &HyperStructure) -> Result<String, CoresError> {
    serde_json::to_string_pretty(&SerializableHyper::from_hyper(hyper))
        .map_err(|err| CoresError::internal("serialize-json", err.to_string()))
}

/// Restores a hypergraph from a JSON string.
pub fn hyper_from_json(json: &str) -> Result<HyperStructure, CoresError> {
    let raw: SerializableHyper = serde_json::from_str(json)
        .map_err(|err| CoresError::internal("deserialize-json", err.to_string()))?;
    Ok(raw.into_hyper())
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    vertices: Vec<(bool, String)>,
    edges: Vec<SerializableEdge>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableEdge {
    src: u32,
    tgt: u32,
    labels: Vec<char>,
}

impl SerializableGraph {
    fn from_graph(graph: &GraphStructure) -> Self {
        let edges = graph
            .adjacency_entries()
            .into_iter()
            .map(|(src, tgt, labels)| SerializableEdge {
                src: src.as_raw(),
                tgt: tgt.as_raw(),
                labels,
            })
            .collect();
        Self {
            vertices: graph.vertex_slots(),
            edges,
        }
    }

    fn into_graph(self) -> GraphStructure {
        let edges = self
            .edges
            .into_iter()
            .map(|edge| {
                (
                    VertexId::from_raw(edge.src),
                    VertexId::from_raw(edge.tgt),
                    edge.labels,
                )
            })
            .collect();
        GraphStructure::from_slots(self.vertices, edges)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableHyper {
    vertices: Vec<(bool, String)>,
    labels: Vec<(String, usize)>,
    instances: Vec<SerializableInstance>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableInstance {
    alive: bool,
    label: u32,
    args: Vec<u32>,
}

impl SerializableHyper {
    fn from_hyper(hyper: &HyperStructure) -> Self {
        let instances = hyper
            .instance_slots()
            .into_iter()
            .map(|(alive, label, args)| SerializableInstance {
                alive,
                label: label.as_raw(),
                args: args.into_iter().map(|id| id.as_raw()).collect(),
            })
            .collect();
        Self {
            vertices: hyper.vertex_slots(),
            labels: hyper.label_slots(),
            instances,
        }
    }

    fn into_hyper(self) -> HyperStructure {
        let instances = self
            .instances
            .into_iter()
            .map(|inst| {
                let args = inst.args.into_iter().map(VertexId::from_raw).collect();
                (inst.alive, LabelId::from_raw(inst.label), args)
            })
            .collect();
        HyperStructure::from_slots(self.vertices, self.labels, instances)
    }
}
