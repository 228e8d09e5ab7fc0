use cores_graph::GraphStructure;
use cores_sat::{SatConfig, SatGateway, SatVerdict};

/// Exercises the gateway end-to-end against a fake "solver" (a shell
/// one-liner) instead of a real limboole binary, verifying the
/// stdin-piping, exit-status, and verdict-parsing wiring.
#[test]
fn gateway_reports_core_on_fake_unsat_solver() {
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    builder.add_edge(v1, v1, 'A').unwrap();
    let graph = builder.build();

    let config = SatConfig {
        solver_path: "sh".to_string(),
        solver_args: vec!["-c".to_string(), "cat >/dev/null; printf '%% UNSATISFIABLE\\n'".to_string()],
    };
    let gateway = SatGateway::new(config);

    let verdict = gateway.find_graph_retract(&graph).unwrap();
    assert!(matches!(verdict, SatVerdict::Core));
}

#[test]
fn gateway_surfaces_backend_error_on_nonzero_exit() {
    let mut builder = GraphStructure::builder();
    builder.add_vertex("1").unwrap();
    let graph = builder.build();

    let config = SatConfig {
        solver_path: "sh".to_string(),
        solver_args: vec!["-c".to_string(), "cat >/dev/null; exit 1".to_string()],
    };
    let gateway = SatGateway::new(config);

    assert!(gateway.find_graph_retract(&graph).is_err());
}
