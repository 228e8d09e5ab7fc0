use sha2::{Digest, Sha256};

use crate::graph::GraphStructure;
use crate::hypergraph::HyperStructure;

/// Computes a canonical structural hash of a graph: the vertex count
/// plus the sorted set of `(src, tgt, labels)` bundles, independent of
/// tombstone order or vertex numbering gaps left by prior merges.
pub fn canonical_graph_hash(graph: &GraphStructure) -> String {
    let mut hasher = Sha256::new();
    hasher.update((graph.len() as u64).to_le_bytes());

    let mut names: Vec<&str> = graph
        .vertices()
        .iter()
        .map(|&id| graph.vertex_name(id).expect("live vertex id"))
        .collect();
    names.sort_unstable();
    for name in &names {
        hasher.update(name.as_bytes());
        hasher.update(b"\0");
    }

    let mut bundles: Vec<(String, String, Vec<char>)> = graph
        .edge_bundles()
        .map(|(src, tgt, labels)| {
            let src_name = graph.vertex_name(src).expect("live vertex id").to_string();
            let tgt_name = graph.vertex_name(tgt).expect("live vertex id").to_string();
            (src_name, tgt_name, labels.iter().copied().collect())
        })
        .collect();
    bundles.sort();
    hasher.update((bundles.len() as u64).to_le_bytes());
    for (src, tgt, labels) in bundles {
        hasher.update(src.as_bytes());
        hasher.update(b"\0");
        hasher.update(tgt.as_bytes());
        hasher.update(b"\0");
        for label in labels {
            hasher.update((label as u32).to_le_bytes());
        }
        hasher.update(b";");
    }

    format!("{:x}", hasher.finalize())
}

/// Computes a canonical structural hash of a hypergraph: the vertex
/// count plus the sorted set of `(label, args)` instances, named by
/// their current vertex/label names rather than their handles so the
/// hash is stable across otherwise-equivalent vertex numberings.
pub fn canonical_hyper_hash(hyper: &HyperStructure) -> String {
    let mut hasher = Sha256::new();
    hasher.update((hyper.len() as u64).to_le_bytes());

    let mut names: Vec<&str> = hyper
        .vertices()
        .iter()
        .map(|&id| hyper.vertex_name(id).expect("live vertex id"))
        .collect();
    names.sort_unstable();
    for name in &names {
        hasher.update(name.as_bytes());
        hasher.update(b"\0");
    }

    let mut instances: Vec<(String, Vec<String>)> = hyper
        .instances()
        .map(|(label, args)| {
            let label_name = hyper.label_name(label).expect("declared label").to_string();
            let arg_names = args
                .iter()
                .map(|&id| hyper.vertex_name(id).expect("live vertex id").to_string())
                .collect();
            (label_name, arg_names)
        })
        .collect();
    instances.sort();
    hasher.update((instances.len() as u64).to_le_bytes());
    for (label, args) in instances {
        hasher.update(label.as_bytes());
        hasher.update(b"\0");
        for arg in args {
            hasher.update(arg.as_bytes());
            hasher.update(b"\0");
        }
        hasher.update(b";");
    }

    format!("{:x}", hasher.finalize())
}
