use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use markdiff::{compare, diff, normalize, CompareConfig};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [64, 512, 4096, 32768].iter() {
        let text = "word\u{00A0} lines \r\n".repeat(*size / 12);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("bytes_{size}"), |b| {
            b.iter(|| normalize(black_box(&text)))
        });
    }

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let config = CompareConfig::default();
    let mut group = c.benchmark_group("compare");

    for size in [64, 512, 4096, 32768].iter() {
        let left = "the quick brown fox jumps over the lazy dog. ".repeat(*size / 45);
        // Same text with a word swapped partway through each sentence.
        let right = left.replace("brown", "green");
        group.throughput(Throughput::Bytes(left.len() as u64));
        group.bench_function(format!("bytes_{size}"), |b| {
            b.iter(|| {
                compare(black_box(&left), black_box(&right), black_box(&config))
                    .expect("within limits")
            })
        });
    }

    group.finish();
}

fn bench_diff_identical(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_identical");

    for size in [4096, 32768].iter() {
        let text = normalize(&"repeated content line\n".repeat(*size / 22));
        group.throughput(Throughput::Bytes(text.as_str().len() as u64));
        group.bench_function(format!("bytes_{size}"), |b| {
            b.iter(|| diff(black_box(&text), black_box(&text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_compare, bench_diff_identical);
criterion_main!(benches);
