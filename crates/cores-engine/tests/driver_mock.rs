use std::cell::RefCell;

use cores_core::CoresError;
use cores_engine::{solve_graph, solve_hyper, GraphBackend, HyperBackend, Verdict};
use cores_graph::{canonical_graph_hash, canonical_hyper_hash, GraphStructure, HyperStructure};

/// A backend that replays a fixed, pre-scripted sequence of verdicts,
/// used to exercise the driver's loop/snapshot/restore logic without
/// depending on a real solver.
struct ScriptedBackend {
    responses: RefCell<Vec<Result<Verdict, CoresError>>>,
}

impl ScriptedBackend {
    fn new(mut responses: Vec<Result<Verdict, CoresError>>) -> Self {
        responses.reverse();
        Self {
            responses: RefCell::new(responses),
        }
    }

    fn next(&self) -> Result<Verdict, CoresError> {
        self.responses
            .borrow_mut()
            .pop()
            .expect("scripted backend ran out of responses")
    }
}

impl GraphBackend for ScriptedBackend {
    fn find_proper_retract(&self, _graph: &GraphStructure) -> Result<Verdict, CoresError> {
        self.next()
    }
}

impl HyperBackend for ScriptedBackend {
    fn find_proper_retract(&self, _hyper: &HyperStructure) -> Result<Verdict, CoresError> {
        self.next()
    }
}

#[test]
fn solve_graph_stops_immediately_on_single_vertex() {
    let mut builder = GraphStructure::builder();
    builder.add_vertex("1").unwrap();
    let mut graph = builder.build();

    let backend = ScriptedBackend::new(vec![]);
    let report = solve_graph(&mut graph, &backend).unwrap();
    assert_eq!(report.iterations(), 0);
}

#[test]
fn solve_graph_applies_successive_retracts_until_unsat() {
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    let v2 = builder.add_vertex("2").unwrap();
    let v3 = builder.add_vertex("3").unwrap();
    builder.add_edge(v1, v1, 'A').unwrap();
    builder.add_edge(v2, v1, 'A').unwrap();
    builder.add_edge(v3, v1, 'A').unwrap();
    let mut graph = builder.build();

    let backend = ScriptedBackend::new(vec![
        Ok(Verdict::Retract(vec![(v3, v1)])),
        Ok(Verdict::Retract(vec![(v2, v1)])),
    ]);

    let report = solve_graph(&mut graph, &backend).unwrap();
    assert_eq!(report.iterations(), 2);
    assert_eq!(graph.len(), 1);
    assert_eq!(report.initial_vertex_count(), Some(3));
}

#[test]
fn solve_graph_restores_snapshot_on_backend_error() {
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    let v2 = builder.add_vertex("2").unwrap();
    builder.add_edge(v1, v2, 'A').unwrap();
    let mut graph = builder.build();
    let before_hash = canonical_graph_hash(&graph);

    let backend = ScriptedBackend::new(vec![Err(CoresError::backend("solver-spawn", "boom"))]);
    let err = solve_graph(&mut graph, &backend).unwrap_err();
    assert!(matches!(err, CoresError::Backend(_)));
    assert_eq!(before_hash, canonical_graph_hash(&graph));
}

#[test]
fn solve_graph_rejects_non_proper_retract_and_restores_snapshot() {
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    let v2 = builder.add_vertex("2").unwrap();
    builder.add_edge(v1, v2, 'A').unwrap();
    let mut graph = builder.build();
    let before_hash = canonical_graph_hash(&graph);

    // The empty morphism never shrinks the vertex count, violating the
    // reducer postcondition the driver checks after every apply.
    let backend = ScriptedBackend::new(vec![Ok(Verdict::Retract(vec![]))]);
    let err = solve_graph(&mut graph, &backend).unwrap_err();
    assert!(matches!(err, CoresError::Internal(_)));
    assert_eq!(before_hash, canonical_graph_hash(&graph));
}

#[test]
fn solve_hyper_stops_on_empty_structure() {
    let builder = HyperStructure::builder();
    let mut hyper = builder.build();
    let backend = ScriptedBackend::new(vec![]);
    let report = solve_hyper(&mut hyper, &backend).unwrap();
    assert_eq!(report.iterations(), 0);
}

#[test]
fn solve_hyper_applies_retract_and_stops_on_core() {
    let mut builder = HyperStructure::builder();
    let a = builder.add_vertex("a").unwrap();
    let b = builder.add_vertex("b").unwrap();
    let r = builder.declare_label("R", 2).unwrap();
    builder.add_edge_instance(r, vec![a, a]).unwrap();
    builder.add_edge_instance(r, vec![b, a]).unwrap();
    let mut hyper = builder.build();

    let backend = ScriptedBackend::new(vec![Ok(Verdict::Retract(vec![(b, a)]))]);
    let report = solve_hyper(&mut hyper, &backend).unwrap();
    assert_eq!(report.iterations(), 1);
    assert_eq!(hyper.len(), 1);
    let _ = canonical_hyper_hash(&hyper);
}
