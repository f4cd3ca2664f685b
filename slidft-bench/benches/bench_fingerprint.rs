use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use slidft::fingerprint::{nearest, DstFingerprint};
use slidft_bench::noise;

fn frozen(seed: u64, resolution: usize) -> DstFingerprint {
    let mut fp = DstFingerprint::with_resolution(resolution).unwrap();
    fp.add_samples(noise(seed, 2048)).unwrap();
    fp.freeze().unwrap();
    fp
}

fn bench_nearest(c: &mut Criterion) {
    let mut g = c.benchmark_group("nearest");
    for &count in &[16usize, 256] {
        let library: Vec<_> = (0..count as u64).map(|s| frozen(s, 128)).collect();
        let query = frozen(10_000, 128);
        g.bench_with_input(BenchmarkId::new("dst128", count), &count, |b, _| {
            b.iter(|| nearest(&query, &library).unwrap());
        });
    }
    g.finish();
}

criterion_group!(benches, bench_nearest);
criterion_main!(benches);
