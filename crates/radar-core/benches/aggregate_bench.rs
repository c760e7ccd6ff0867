use radar_core::hierarchy::aggregate;
use radar_core::DataPoint;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

// Full tree with `fanout` children per parent, `depth` levels below the root.
fn gen_tree(fanout: usize, depth: usize, seed: &mut f64) -> DataPoint {
    if depth == 0 {
        *seed = (*seed * 1.37 + 11.0) % 100.0;
        return DataPoint::new("leaf", *seed);
    }
    let children = (0..fanout).map(|_| gen_tree(fanout, depth - 1, seed)).collect();
    DataPoint::new(format!("d{depth}"), 0.0).with_children(children)
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for &(fanout, depth) in &[(4usize, 6usize), (8, 4), (2, 14)] {
        let tree = gen_tree(fanout, depth, &mut 0.0);
        group.bench_with_input(BenchmarkId::from_parameter(format!("f{fanout}_d{depth}")), &tree, |b, t| {
            b.iter_batched(
                || t.clone(),
                |mut d| { let _ = black_box(aggregate(&mut d)); },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
