use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_paths::graph::generators::{grid_graph, random_graph};
use dijkstra_paths::{Dijkstra, ShortestPathAlgorithm};

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph");
    let lazy = Dijkstra::new();
    let skipping = Dijkstra::new().with_skip_stale_entries(true);

    for &size in &[1_000usize, 10_000, 50_000] {
        let graph = random_graph(size, 4.0, 100, 1);

        group.bench_with_input(BenchmarkId::new("lazy", size), &graph, |b, graph| {
            b.iter(|| lazy.compute_shortest_paths(graph, black_box(0)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("skip_stale", size), &graph, |b, graph| {
            b.iter(|| skipping.compute_shortest_paths(graph, black_box(0)).unwrap())
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = grid_graph(200, 200);
    let dijkstra = Dijkstra::new();
    c.bench_function("grid_200x200", |b| {
        b.iter(|| dijkstra.compute_shortest_paths(&graph, black_box(0)).unwrap())
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid);
criterion_main!(benches);
