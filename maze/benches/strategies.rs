use adversarial_search::Algorithm;
use maze::{Layout, MazeEvaluation};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    let state = Layout::builtin("classic").unwrap().initial_state();

    let mut group = c.benchmark_group("classic");
    for depth in [1, 2, 3] {
        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.to_string(), depth),
                &depth,
                |b, depth| {
                    b.iter(|| {
                        algorithm.decide(black_box(&state), *depth, &MazeEvaluation::Better)
                    })
                },
            );
        }
    }
    group.finish();

    c.bench_function("classic alpha-beta depth 3 parallel", |b| {
        b.iter(|| Algorithm::AlphaBeta.par_decide(black_box(&state), 3, &MazeEvaluation::Better))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
