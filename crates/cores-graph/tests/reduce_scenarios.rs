use cores_graph::{
    canonical_graph_hash, canonical_hyper_hash, graph_from_bytes, graph_to_bytes, hyper_from_bytes,
    hyper_to_bytes, reduce_graph, reduce_hyper, GraphStructure, HyperStructure,
};

/// Reducer half of scenario S2 — two vertices with identical
/// out-structure collapse to one under the morphism a solver would
/// return; full solver-level verification lives in cores-engine.
#[test]
fn scenario_s2_two_vertices_identical_out_structure() {
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    let v2 = builder.add_vertex("2").unwrap();
    builder.add_edge(v1, v1, 'A').unwrap();
    builder.add_edge(v2, v1, 'A').unwrap();
    let mut graph = builder.build();

    reduce_graph(&mut graph, &vec![(v2, v1)]).unwrap();

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.vertex_name(v1).unwrap(), "1-2");
}

/// A diamond (1->2, 1->3, 2->4, 3->4, all label A) applies a merge of
/// its two parallel branches, which share identical in- and
/// out-neighborhoods and so admit a proper retract.
#[test]
fn diamond_parallel_branches_collapse() {
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    let v2 = builder.add_vertex("2").unwrap();
    let v3 = builder.add_vertex("3").unwrap();
    let v4 = builder.add_vertex("4").unwrap();
    builder.add_edge(v1, v2, 'A').unwrap();
    builder.add_edge(v1, v3, 'A').unwrap();
    builder.add_edge(v2, v4, 'A').unwrap();
    builder.add_edge(v3, v4, 'A').unwrap();
    let mut graph = builder.build();

    reduce_graph(&mut graph, &vec![(v2, v3)]).unwrap();

    assert_eq!(graph.len(), 3);
    let remaining: Vec<_> = graph.vertices();
    assert!(remaining.contains(&v1));
    assert!(remaining.contains(&v3));
    assert!(remaining.contains(&v4));
}

/// Reducing with an empty morphism is a no-op; self-pairs are ignored.
#[test]
fn reduce_with_identity_morphism_is_noop() {
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    let v2 = builder.add_vertex("2").unwrap();
    builder.add_edge(v1, v2, 'A').unwrap();
    let mut graph = builder.build();

    let before = canonical_graph_hash(&graph);
    reduce_graph(&mut graph, &vec![(v1, v1)]).unwrap();
    assert_eq!(before, canonical_graph_hash(&graph));
}

/// Builder rejects a duplicate label on the same ordered pair.
#[test]
fn builder_rejects_duplicate_edge() {
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    let v2 = builder.add_vertex("2").unwrap();
    builder.add_edge(v1, v2, 'A').unwrap();
    assert!(builder.add_edge(v1, v2, 'A').is_err());
}

/// Builder rejects duplicate vertex names.
#[test]
fn builder_rejects_duplicate_vertex_name() {
    let mut builder = GraphStructure::builder();
    builder.add_vertex("1").unwrap();
    assert!(builder.add_vertex("1").is_err());
}

/// Scenario S6 — hypergraph triangle under a ternary label is already a
/// core; applying the empty morphism changes nothing observable.
#[test]
fn scenario_s6_hypergraph_triangle_unchanged_by_empty_morphism() {
    let mut builder = HyperStructure::builder();
    let a = builder.add_vertex("a").unwrap();
    let b = builder.add_vertex("b").unwrap();
    let c = builder.add_vertex("c").unwrap();
    let r = builder.declare_label("R", 3).unwrap();
    builder.add_edge_instance(r, vec![a, b, c]).unwrap();
    builder.add_edge_instance(r, vec![b, c, a]).unwrap();
    builder.add_edge_instance(r, vec![c, a, b]).unwrap();
    let mut hyper = builder.build();

    let before = canonical_hyper_hash(&hyper);
    reduce_hyper(&mut hyper, &vec![]).unwrap();
    assert_eq!(before, canonical_hyper_hash(&hyper));
    assert_eq!(hyper.len(), 3);
}

/// Merging a hypergraph vertex drops every instance that touched it.
#[test]
fn hyper_merge_drops_touching_instances() {
    let mut builder = HyperStructure::builder();
    let a = builder.add_vertex("a").unwrap();
    let b = builder.add_vertex("b").unwrap();
    let r = builder.declare_label("R", 2).unwrap();
    builder.add_edge_instance(r, vec![a, b]).unwrap();
    builder.add_edge_instance(r, vec![b, b]).unwrap();
    let mut hyper = builder.build();

    reduce_hyper(&mut hyper, &vec![(a, b)]).unwrap();

    assert_eq!(hyper.len(), 1);
    assert_eq!(hyper.instances().count(), 1);
    let (_, args) = hyper.instances().next().unwrap();
    assert_eq!(args, [b, b]);
}

#[test]
fn graph_snapshot_round_trips_through_bytes() {
    let mut builder = GraphStructure::builder();
    let v1 = builder.add_vertex("1").unwrap();
    let v2 = builder.add_vertex("2").unwrap();
    builder.add_edge(v1, v2, 'A').unwrap();
    builder.add_edge(v2, v1, 'B').unwrap();
    let graph = builder.build();

    let bytes = graph_to_bytes(&graph).unwrap();
    let restored = graph_from_bytes(&bytes).unwrap();
    assert_eq!(canonical_graph_hash(&graph), canonical_graph_hash(&restored));
}

#[test]
fn hyper_snapshot_round_trips_through_bytes() {
    let mut builder = HyperStructure::builder();
    let a = builder.add_vertex("a").unwrap();
    let b = builder.add_vertex("b").unwrap();
    let r = builder.declare_label("R", 2).unwrap();
    builder.add_edge_instance(r, vec![a, b]).unwrap();
    let hyper = builder.build();

    let bytes = hyper_to_bytes(&hyper).unwrap();
    let restored = hyper_from_bytes(&bytes).unwrap();
    assert_eq!(canonical_hyper_hash(&hyper), canonical_hyper_hash(&restored));
}
