// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

use criterion::{criterion_group, criterion_main, Criterion};

use ristretto255::{CompressedRistretto, RistrettoPoint};

fn bench_decompress(c: &mut Criterion) {
    let compressed = ristretto255::ristretto::RISTRETTO_BASEPOINT_COMPRESSED;
    c.bench_function("RistrettoPoint decompress", |b| {
        b.iter(|| compressed.decompress().unwrap())
    });
}

fn bench_compress(c: &mut Criterion) {
    let point = ristretto255::ristretto::RISTRETTO_BASEPOINT_POINT;
    c.bench_function("RistrettoPoint compress", |b| b.iter(|| point.compress()));
}

fn bench_ct_eq(c: &mut Criterion) {
    use subtle::ConstantTimeEq;
    let a = ristretto255::ristretto::RISTRETTO_BASEPOINT_POINT;
    let b = ristretto255::ristretto::RISTRETTO_BASEPOINT_POINT;
    c.bench_function("RistrettoPoint ct_eq", |bencher| bencher.iter(|| a.ct_eq(&b)));
}

fn bench_from_uniform_bytes(c: &mut Criterion) {
    let bytes = [7u8; 64];
    c.bench_function("RistrettoPoint from_uniform_bytes", |b| {
        b.iter(|| RistrettoPoint::from_uniform_bytes(&bytes))
    });
}

fn bench_addition(c: &mut Criterion) {
    let a = ristretto255::ristretto::RISTRETTO_BASEPOINT_POINT;
    let b = &a + &a;
    c.bench_function("RistrettoPoint addition", |bencher| bencher.iter(|| &a + &b));
}

fn bench_decode_invalid(c: &mut Criterion) {
    let bad = CompressedRistretto([0xffu8; 32]);
    c.bench_function("RistrettoPoint decompress (invalid)", |b| {
        b.iter(|| bad.decompress())
    });
}

criterion_group!(
    benches,
    bench_decompress,
    bench_compress,
    bench_ct_eq,
    bench_from_uniform_bytes,
    bench_addition,
    bench_decode_invalid,
);
criterion_main!(benches);
