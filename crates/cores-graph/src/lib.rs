#![deny(missing_docs)]
//! Graph and hypergraph structure models, the vertex-merging reducer,
//! canonical hashing, and internal snapshot (de)serialization for the
//! CoReS retract-search engine.

mod errctx;
mod graph;
mod hash;
mod hypergraph;
mod reduce;
mod serialization;
mod vertex;

pub use graph::{GraphBuilder, GraphStructure};
pub use hash::{canonical_graph_hash, canonical_hyper_hash};
pub use hypergraph::{HyperBuilder, HyperStructure};
pub use reduce::{reduce_graph, reduce_hyper};
pub use serialization::{
    graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json, hyper_from_bytes,
    hyper_from_json, hyper_to_bytes, hyper_to_json,
};
