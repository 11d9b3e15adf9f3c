use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use knet::{DatasetGenerator, Network};
use rand::{rngs::StdRng, SeedableRng};

fn train(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345u64);
    let mut group = c.benchmark_group("train");
    for group_count in [2, 4, 8, 16, 32] {
        let property_count = group_count * 4;
        let dataset = DatasetGenerator::new(group_count)
            .generate_dataset(property_count, 256, &mut rng)
            .expect("property count is a multiple of the group count");
        let network = Network::new(property_count, group_count, &mut rng);
        group.bench_with_input(
            BenchmarkId::new("cpu", group_count),
            &group_count,
            |b, _| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(54321u64);
                    let mut network = network.clone();
                    network.train(black_box(&dataset), 10, 0.05, &mut rng);
                    network
                })
            },
        );
    }
    group.finish();
}

criterion_group!(bench_train, train);
criterion_main!(bench_train);
