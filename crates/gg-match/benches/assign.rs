use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gg_match::{DEFAULT_ASSIGNMENT_THRESHOLD, optimal_one_to_one_assignment};
use gg_store::{PropertySet, SharedProperties};

fn synthetic_records(inputs: usize, outputs: usize) -> Vec<SharedProperties> {
    let mut records = Vec::with_capacity(inputs * outputs);
    for i in 0..inputs {
        for j in 0..outputs {
            // Peaks near the diagonal, noise elsewhere.
            let similarity = if i == j {
                0.9
            } else {
                ((i * 31 + j * 17) % 10) as f64 / 20.0
            };
            records.push(SharedProperties {
                input_id: 10_000 + 1 + i as u32,
                output_id: 10_000 + 1 + j as u32,
                matching: PropertySet::empty(),
                similarity,
            });
        }
    }
    records
}

fn bench_assignment(c: &mut Criterion) {
    let records = synthetic_records(50, 50);
    c.bench_function("gg_optimal_assignment_50x50", |b| {
        b.iter(|| {
            let assignments = optimal_one_to_one_assignment(
                black_box(&records),
                DEFAULT_ASSIGNMENT_THRESHOLD,
            );
            black_box(assignments.len());
        });
    });

    let rect = synthetic_records(30, 60);
    c.bench_function("gg_optimal_assignment_30x60", |b| {
        b.iter(|| {
            let assignments =
                optimal_one_to_one_assignment(black_box(&rect), DEFAULT_ASSIGNMENT_THRESHOLD);
            black_box(assignments.len());
        });
    });
}

criterion_group!(benches, bench_assignment);
criterion_main!(benches);
