//! End-to-end scenarios S1-S6, driven through the full
//! `solve_graph`/`solve_hyper` loop against the in-process SMT backend
//! (no external `limboole` binary required for this suite).

use cores_engine::{solve_graph, solve_hyper};
use cores_graph::{GraphStructure, HyperStructure};
use cores_smt::SmtGateway;

#[test]
fn scenario_s1_single_vertex_is_unchanged() {
    let mut builder = GraphStructure::builder();
    builder.add_vertex("1").unwrap();
    let mut graph = builder.build();

    let backend = SmtGateway::default();
    let report = solve_graph(&mut graph, &backend).unwrap();
    assert_eq!(report.iterations(), 0);
    assert_eq!(graph.len(), 1);
}

#[test]
fn scenario_s2_two_vertices_with_identical_out_structure_collapse() {
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    let v2 = builder.add_vertex("2").unwrap();
    builder.add_edge(v1, v1, 'A').unwrap();
    builder.add_edge(v2, v1, 'A').unwrap();
    let mut graph = builder.build();

    let backend = SmtGateway::default();
    solve_graph(&mut graph, &backend).unwrap();
    assert_eq!(graph.len(), 1);
}

#[test]
fn scenario_s3_directed_three_cycle_is_already_a_core() {
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    let v2 = builder.add_vertex("2").unwrap();
    let v3 = builder.add_vertex("3").unwrap();
    builder.add_edge(v1, v2, 'A').unwrap();
    builder.add_edge(v2, v3, 'A').unwrap();
    builder.add_edge(v3, v1, 'A').unwrap();
    let mut graph = builder.build();

    let backend = SmtGateway::default();
    let report = solve_graph(&mut graph, &backend).unwrap();
    assert_eq!(report.iterations(), 0);
    assert_eq!(graph.len(), 3);
}

#[test]
fn scenario_s4_directed_path_of_length_two_is_already_a_core() {
    // The two labeled pairs (1,2) and (2,3) force vmorph(1)=1, vmorph(2)=2,
    // vmorph(3)=3 as the only common solution, so no proper retract exists
    // under directed semantics: a directed path is rigid, unlike its
    // undirected reading.
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    let v2 = builder.add_vertex("2").unwrap();
    let v3 = builder.add_vertex("3").unwrap();
    builder.add_edge(v1, v2, 'A').unwrap();
    builder.add_edge(v2, v3, 'A').unwrap();
    let mut graph = builder.build();

    let backend = SmtGateway::default();
    let report = solve_graph(&mut graph, &backend).unwrap();
    assert_eq!(report.iterations(), 0);
    assert_eq!(graph.len(), 3);
}

#[test]
fn scenario_s5_label_set_mismatch_blocks_retract() {
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    let v2 = builder.add_vertex("2").unwrap();
    builder.add_edge(v1, v1, 'A').unwrap();
    builder.add_edge(v1, v2, 'B').unwrap();
    builder.add_edge(v2, v2, 'B').unwrap();
    let mut graph = builder.build();

    let backend = SmtGateway::default();
    let report = solve_graph(&mut graph, &backend).unwrap();
    assert_eq!(report.iterations(), 0);
    assert_eq!(graph.len(), 2);
}

#[test]
fn scenario_s6_hypergraph_triangle_under_ternary_label_is_a_core() {
    let mut builder = HyperStructure::builder();
    let a = builder.add_vertex("a").unwrap();
    let b = builder.add_vertex("b").unwrap();
    let c = builder.add_vertex("c").unwrap();
    let r = builder.declare_label("R", 3).unwrap();
    builder.add_edge_instance(r, vec![a, b, c]).unwrap();
    builder.add_edge_instance(r, vec![b, c, a]).unwrap();
    builder.add_edge_instance(r, vec![c, a, b]).unwrap();
    let mut hyper = builder.build();

    let backend = SmtGateway::default();
    let report = solve_hyper(&mut hyper, &backend).unwrap();
    assert_eq!(report.iterations(), 0);
    assert_eq!(hyper.len(), 3);
}

#[test]
fn solve_is_idempotent_on_its_own_output() {
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    let v2 = builder.add_vertex("2").unwrap();
    builder.add_edge(v1, v1, 'A').unwrap();
    builder.add_edge(v2, v1, 'A').unwrap();
    let mut graph = builder.build();

    let backend = SmtGateway::default();
    let first_report = solve_graph(&mut graph, &backend).unwrap();
    assert_eq!(first_report.iterations(), 1);
    let second_report = solve_graph(&mut graph, &backend).unwrap();
    assert_eq!(second_report.iterations(), 0);
}
