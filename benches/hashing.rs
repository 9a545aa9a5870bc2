use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use shastate::{Algorithm, new_hash};

const SIZES: [(usize, &str); 3] = [(64, "64b"), (1024, "1kb"), (64 * 1024, "64kb")];

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashing");

    for algorithm in [Algorithm::Sha1, Algorithm::Sha256, Algorithm::Sha512] {
        for (size, label) in SIZES {
            let data = vec![0u8; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_function(format!("{algorithm}_{label}"), |b| {
                b.iter(|| {
                    let mut hash = new_hash(algorithm);
                    hash.write(black_box(&data));
                    black_box(hash.sum(&[]));
                });
            });
        }
    }

    group.finish();
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashing");

    // Sum on a hasher holding a partial block
    let mut hash = new_hash(Algorithm::Sha256);
    hash.write(&[0xA5; 100]);
    group.bench_function("sum_partial_block", |b| {
        b.iter(|| {
            black_box(hash.sum(&[]));
        });
    });

    group.finish();
}

fn bench_oneshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashing");

    let data = vec![0u8; 1024];
    group.throughput(Throughput::Bytes(1024));
    group.bench_function("oneshot_sha256_1kb", |b| {
        b.iter(|| {
            black_box(shastate::sha256(black_box(&data)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_write, bench_sum, bench_oneshot);
criterion_main!(benches);
