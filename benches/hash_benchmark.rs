use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use peppermill::Hasher;
use peppermill::random::random_hex;

const ORIGINAL: &str = "HelloWorld1";
const PEPPERS: [&str; 5] = [
    "47278c6cd6353a278a2a5929f77752ac429acd59cbded92cdf88a68fdfb9ac2f",
    "b0aa0db641509c907459bf95445a78413dc310b2fdd2d8962562d8e3327a04e0",
    "90ffbdb56950f4be181f752d8fe2f9dad682ef22fc163429ebe288bbc0a91804",
    "189f58d27aa9e979e685acdb10e8587a09e1bcae4ec93bea05522f4e5b32f3b5",
    "e1e9c4e5bcafc552ded0c849fbc896bd6fa7c03c0410b60d1e7541832be66fa6",
];

fn generate_peppers(n: usize) -> Vec<String> {
    (0..n).map(|_| random_hex(32).expect("entropy")).collect()
}

fn generate_benchmark(c: &mut Criterion) {
    let hasher = Hasher::new(PEPPERS);

    c.bench_function("generate plain hash", |b| {
        b.iter(|| hasher.generate_hash(ORIGINAL, false, false))
    });
    c.bench_function("generate salted and peppered hash", |b| {
        b.iter(|| hasher.generate_hash(ORIGINAL, true, true))
    });
}

fn compare_benchmark(c: &mut Criterion) {
    let hasher = Hasher::new(PEPPERS);

    let (hash, salt) = hasher.generate_hash(ORIGINAL, true, false).unwrap();
    c.bench_function("compare salted hash", |b| {
        b.iter(|| hasher.compare(ORIGINAL, &salt, false, &hash))
    });

    let (hash, _) = hasher.generate_hash(ORIGINAL, false, false).unwrap();
    c.bench_function("compare plain hash", |b| {
        b.iter(|| hasher.compare(ORIGINAL, "", false, &hash))
    });
}

fn rotation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare peppered hash");

    for size in [5, 10, 100, 1000] {
        let hasher = Hasher::new(generate_peppers(size));
        let (hash, salt) = hasher.generate_hash(ORIGINAL, true, true).unwrap();
        // Worst case: the hash was issued under the oldest pepper.
        let oldest = Hasher::new(hasher.ring().all().last().cloned());
        let (old_hash, old_salt) =
            oldest.generate_hash(ORIGINAL, true, true).unwrap();

        group.bench_with_input(BenchmarkId::new("current", size), &size, |b, _| {
            b.iter(|| hasher.compare(ORIGINAL, &salt, true, &hash))
        });
        group.bench_with_input(BenchmarkId::new("oldest", size), &size, |b, _| {
            b.iter(|| hasher.compare(ORIGINAL, &old_salt, true, &old_hash))
        });
    }

    group.finish();
}

criterion_group! {
    name = basics;
    config = Criterion::default().significance_level(0.1).sample_size(500);
    targets = generate_benchmark, compare_benchmark,
}
criterion_group! {
    name = rotation;
    config = Criterion::default().significance_level(0.2).sample_size(50);
    targets = rotation_benchmark,
}
criterion_main!(basics, rotation);
