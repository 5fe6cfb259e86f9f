use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming_sim::channel::inject_single;
use hamming_sim::ecc::HammingCode;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_encode");
    let data = message(16 * 1024);

    for mode in [4, 11, 26, 57, 93, 120] {
        let code = HammingCode::new(mode).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(mode), &data, |b, data| {
            b.iter(|| code.encode(black_box(data)))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_decode_single_noise");
    let data = message(16 * 1024);
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for mode in [4, 11, 26, 57, 93, 120] {
        let code = HammingCode::new(mode).unwrap();
        let noisy = inject_single(&code.encode(&data), &code, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(mode), &noisy, |b, noisy| {
            b.iter(|| code.decode(black_box(noisy)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
