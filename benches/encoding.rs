use bmpstego::{to_hex_text, Raster};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let data = payload(1024 * 1024);
    let (_, image) = Raster::encode_alloc(&data).unwrap();
    let (_, decoded) = Raster::decode_alloc(&image).unwrap();

    c.bench_function("encode 1 MiB", |b| {
        b.iter(|| Raster::encode_alloc(black_box(&data)).unwrap())
    });
    c.bench_function("decode 1 MiB", |b| {
        b.iter(|| Raster::decode_alloc(black_box(&image)).unwrap())
    });
    c.bench_function("hex text 1 MiB", |b| {
        b.iter(|| to_hex_text(black_box(&decoded)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = criterion_benchmark
}
criterion_main!(benches);
