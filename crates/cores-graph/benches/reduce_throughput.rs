use cores_core::VertexId;
use cores_graph::{reduce_graph, GraphStructure};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_chain(n: usize) -> (GraphStructure, Vec<VertexId>) {
    let mut builder = GraphStructure::builder();
    let ids: Vec<VertexId> = (0..n)
        .map(|i| builder.add_vertex(i.to_string()).unwrap())
        .collect();
    for window in ids.windows(2) {
        builder.add_edge(window[0], window[1], 'A').unwrap();
    }
    (builder.build(), ids)
}

fn reduce_chain_bench(c: &mut Criterion) {
    c.bench_function("reduce_chain_500", |b| {
        b.iter(|| {
            let (mut graph, ids) = build_chain(500);
            let morphism: Vec<_> = ids[1..].iter().map(|&id| (id, ids[0])).collect();
            reduce_graph(&mut graph, &morphism).unwrap();
            black_box(graph);
        });
    });
}

criterion_group!(benches, reduce_chain_bench);
criterion_main!(benches);
