//! The iteration driver: repeatedly ask a [`GraphBackend`] or
//! [`HyperBackend`] for a proper retract, apply it via
//! `cores_graph::reduce`, and stop on the first UNSAT verdict. A deep
//! snapshot is taken before every attempt so a backend error leaves the
//! structure exactly as it was at the start of that attempt.

use cores_core::CoresError;
use cores_graph::{
    graph_from_bytes, graph_to_bytes, hyper_from_bytes, hyper_to_bytes, reduce_graph, reduce_hyper,
    GraphStructure, HyperStructure,
};

use crate::backend::{GraphBackend, HyperBackend, Verdict};

/// Bookkeeping for one iteration of `solve`: the vertex count before
/// and after the applied reduction, and the size of the morphism that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Number of live vertices before this iteration's reduction.
    pub vertices_before: usize,
    /// Number of live vertices after this iteration's reduction.
    pub vertices_after: usize,
    /// Number of non-identity pairs in the morphism that was applied.
    pub morphism_len: usize,
}

/// The full record of a `solve` call: one [`StepReport`] per iteration
/// that consumed a SAT/satisfiable verdict. An empty report means the
/// structure was already a core (or had at most one vertex).
#[derive(Debug, Clone, Default)]
pub struct SolveReport {
    /// One entry per retract applied, in application order.
    pub steps: Vec<StepReport>,
}

impl SolveReport {
    /// Returns the number of retracts applied before reaching a core.
    pub fn iterations(&self) -> usize {
        self.steps.len()
    }

    /// Returns the vertex count the structure started with, or `None`
    /// if no iteration ran (the input was already a core).
    pub fn initial_vertex_count(&self) -> Option<usize> {
        self.steps.first().map(|step| step.vertices_before)
    }
}

/// Reduces `graph` to its core in place by repeatedly asking `backend`
/// for a proper retract:
///
/// 1. Stop once at most one vertex remains.
/// 2. Snapshot the structure.
/// 3. Ask the backend; a hard failure restores the snapshot and
///    propagates the error.
/// 4. An UNSAT verdict means `graph` is already a core; stop.
/// 5. Otherwise apply the returned morphism and go back to 1.
pub fn solve_graph(
    graph: &mut GraphStructure,
    backend: &dyn GraphBackend,
) -> Result<SolveReport, CoresError> {
    let mut report = SolveReport::default();
    loop {
        if graph.len() <= 1 {
            return Ok(report);
        }

        let snapshot = graph_to_bytes(graph)?;
        match backend.find_proper_retract(graph) {
            Ok(Verdict::Core) => return Ok(report),
            Ok(Verdict::Retract(morphism)) => {
                let before = graph.len();
                reduce_graph(graph, &morphism)?;
                let after = graph.len();
                if after >= before {
                    *graph = graph_from_bytes(&snapshot)?;
                    return Err(CoresError::internal(
                        "non-proper-retract",
                        "backend returned a morphism that did not strictly decrease the vertex count",
                    ));
                }
                report.steps.push(StepReport {
                    vertices_before: before,
                    vertices_after: after,
                    morphism_len: morphism.len(),
                });
            }
            Err(err) => {
                *graph = graph_from_bytes(&snapshot)?;
                return Err(err);
            }
        }
    }
}

/// Reduces `hyper` to its core in place; see [`solve_graph`] for the
/// iteration contract, identical here modulo the hypergraph reducer.
pub fn solve_hyper(
    hyper: &mut HyperStructure,
    backend: &dyn HyperBackend,
) -> Result<SolveReport, CoresError> {
    let mut report = SolveReport::default();
    loop {
        if hyper.len() <= 1 {
            return Ok(report);
        }

        let snapshot = hyper_to_bytes(hyper)?;
        match backend.find_proper_retract(hyper) {
            Ok(Verdict::Core) => return Ok(report),
            Ok(Verdict::Retract(morphism)) => {
                let before = hyper.len();
                reduce_hyper(hyper, &morphism)?;
                let after = hyper.len();
                if after >= before {
                    *hyper = hyper_from_bytes(&snapshot)?;
                    return Err(CoresError::internal(
                        "non-proper-retract",
                        "backend returned a morphism that did not strictly decrease the vertex count",
                    ));
                }
                report.steps.push(StepReport {
                    vertices_before: before,
                    vertices_after: after,
                    morphism_len: morphism.len(),
                });
            }
            Err(err) => {
                *hyper = hyper_from_bytes(&snapshot)?;
                return Err(err);
            }
        }
    }
}
