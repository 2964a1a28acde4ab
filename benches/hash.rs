use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use poseidon2_oracle::field::{modpow, modulus};
use poseidon2_oracle::poseidon::{hash, hash_pair, Preimage};
use poseidon2_oracle::Fr;

fn hash_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("poseidon2");

    let preimage = Preimage::parse(&["123456789", "987654321"]).unwrap();
    group.bench_function("hash_parsed", |b| b.iter(|| hash(black_box(&preimage))));
    group.bench_function("hash_numerals", |b| {
        b.iter(|| hash_pair(black_box("123456789"), black_box("987654321")))
    });

    for size in [1u64, 10, 100, 1000] {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("batch", size), &size, |b, &size| {
            b.iter(|| {
                for i in 0..size {
                    let preimage = Preimage::new(Fr::from_u64(i), Fr::from_u64(i * 2));
                    black_box(hash(&preimage));
                }
            })
        });
    }

    group.finish();
}

fn sbox_bench(c: &mut Criterion) {
    let x = Fr::from_decimal(
        "21888242871839275222246405745257275088548364400416034343698204186575808495616",
    )
    .unwrap();
    c.bench_function("modpow_x5", |b| {
        b.iter(|| modpow(black_box(x.as_biguint()), 5, modulus()))
    });
}

criterion_group!(benches, hash_bench, sbox_bench);
criterion_main!(benches);
