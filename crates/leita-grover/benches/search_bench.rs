//! Benchmarks for search circuit assembly
//!
//! Run with: cargo bench -p leita-grover

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use leita_grover::BitPattern;
use leita_grover::search::search_circuit;

/// Benchmark full search circuit assembly across data widths.
///
/// Construction cost grows with floor(pi/4 * sqrt(2^n)) rounds, so this
/// doubles in cost roughly every two qubits.
fn bench_search_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_assembly");

    for num_qubits in &[4usize, 8, 10, 12] {
        let pattern_string = "10".repeat(num_qubits / 2);
        let pattern: BitPattern = pattern_string.parse().unwrap();

        group.bench_with_input(
            BenchmarkId::new("search_circuit", num_qubits),
            &pattern,
            |b, pattern| {
                b.iter(|| search_circuit(black_box(pattern)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_search_assembly);
criterion_main!(benches);
