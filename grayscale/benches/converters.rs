//! Throughput of each converter the CPU supports on a 4-megapixel buffer.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use grayscale::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;

fn bench_converters(c: &mut Criterion) {
    let width = 2048;
    let height = 2048;

    let mut rng = StdRng::seed_from_u64(42);
    let bytes: Vec<u8> = (0..width * height * BYTES_PER_PIXEL)
        .map(|_| rng.random::<u8>())
        .collect();
    let Ok(input) = PixelBuffer::with_dimensions(width, height, bytes) else {
        return;
    };

    let mut group = c.benchmark_group("argb_to_gray");
    group.throughput(Throughput::Elements(input.pixel_count() as u64));

    for kind in ConverterKind::iter().filter(|kind| kind.is_supported()) {
        let config = ConvertConfig::default().with_converter(kind);
        let Ok(converter) = select_converter(&config) else {
            continue;
        };
        group.bench_function(kind.to_string(), |b| {
            b.iter(|| converter.convert(black_box(&input)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_converters);
criterion_main!(benches);
