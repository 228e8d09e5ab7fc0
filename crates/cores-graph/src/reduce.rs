//! Applies a decoded [`Morphism`] to a structure, merging every
//! non-identity pair's source vertex into its target. One call to
//! [`reduce_graph`]/[`reduce_hyper`] corresponds to one retract found
//! by a backend; `cores-engine::solve` calls it once per iteration.

use cores_core::{CoresError, Morphism};

use crate::graph::GraphStructure;
use crate::hypergraph::HyperStructure;

/// Applies every non-identity `(src, tgt)` pair in `morphism` to
/// `graph`, merging `src` into `tgt` in list order.
///
/// Pairs are applied one at a time rather than pre-rewritten as a
/// batch: because a backend's fixed-image constraint forbids a pair's
/// target from also being a later pair's source, applying a pair can
/// never invalidate an as-yet-unapplied pair's target.
pub fn reduce_graph(graph: &mut GraphStructure, morphism: &Morphism) -> Result<(), CoresError> {
    for &(src, tgt) in morphism {
        if src != tgt {
            graph.apply_merge(src, tgt)?;
        }
    }
    Ok(())
}

/// Applies every non-identity `(src, tgt)` pair in `morphism` to
/// `hyper`, merging `src` into `tgt` in list order and dropping every
/// edge instance that referenced the removed vertex.
pub fn reduce_hyper(hyper: &mut HyperStructure, morphism: &Morphism) -> Result<(), CoresError> {
    for &(src, tgt) in morphism {
        if src != tgt {
            hyper.apply_merge(src, tgt)?;
        }
    }
    Ok(())
}
