//! Reader throughput on in-memory libsvm and delimited data.
//!
//! ```sh
//! cargo bench --bench readers
//! ```

use std::fmt::Write as _;
use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use treemat::io::{CsvOptions, read_csv_from, read_libsvm_from};

const N_FEATURES: usize = 32;

/// Deterministic feature value; every third feature is left out / empty.
fn feature(row: usize, col: usize) -> Option<f64> {
    (col % 3 != 0).then(|| ((row * 31 + col * 17) % 1000) as f64 / 100.0)
}

fn libsvm_text(rows: usize) -> String {
    let mut out = String::new();
    for r in 0..rows {
        write!(out, "{}", r % 2).unwrap();
        for c in 0..N_FEATURES {
            if let Some(v) = feature(r, c) {
                write!(out, " {c}:{v}").unwrap();
            }
        }
        out.push('\n');
    }
    out
}

fn csv_text(rows: usize) -> String {
    let mut out = String::new();
    for r in 0..rows {
        for c in 0..N_FEATURES {
            if c > 0 {
                out.push(',');
            }
            if let Some(v) = feature(r, c) {
                write!(out, "{v}").unwrap();
            }
        }
        out.push('\n');
    }
    out
}

fn bench_readers(c: &mut Criterion) {
    let mut group = c.benchmark_group("readers");
    let options = CsvOptions::default();

    for rows in [1_000usize, 10_000, 100_000] {
        let libsvm = libsvm_text(rows);
        group.throughput(Throughput::Bytes(libsvm.len() as u64));
        group.bench_with_input(BenchmarkId::new("libsvm", rows), &libsvm, |b, text| {
            b.iter(|| read_libsvm_from(black_box(text.as_bytes())).unwrap())
        });

        let csv = csv_text(rows);
        group.throughput(Throughput::Bytes(csv.len() as u64));
        group.bench_with_input(BenchmarkId::new("csv", rows), &csv, |b, text| {
            b.iter(|| read_csv_from(black_box(text.as_bytes()), &options).unwrap())
        });
    }

    group.finish();
}

fn config() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5))
        .sample_size(10)
}

criterion_group! {
    name = benches;
    config = config();
    targets = bench_readers
}
criterion_main!(benches);
