use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming21::hamming::{codebook, encode, encode_with_order, PackOrder};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn bench_encode(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let inputs: Vec<u16> = (0..1024).map(|_| rng.gen()).collect();

    let mut group = c.benchmark_group("hamming_encode");
    group.bench_function("single", |b| b.iter(|| encode(black_box(0xabcd))));
    for order in [PackOrder::LsbFirst, PackOrder::MsbFirst] {
        group.bench_with_input(
            BenchmarkId::new("batch_1024", format!("{:?}", order)),
            &inputs,
            |b, inputs| {
                b.iter(|| {
                    inputs
                        .iter()
                        .map(|&data| encode_with_order(u32::from(data), order))
                        .fold(0u32, |acc, codeword| acc ^ codeword)
                })
            },
        );
    }
    group.finish();
}

fn bench_codebook(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_codebook");
    group.sample_size(10);
    group.bench_function("all_65536", |b| {
        b.iter(|| codebook(black_box(PackOrder::LsbFirst)))
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_codebook);
criterion_main!(benches);
