//! Classification and Rendering Benchmarks
//!
//! Measures signature sniffing, locale decoding and full payload rendering
//! at clipboard-typical payload sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use clipscope::core::locale::decode_le_decimal;
use clipscope::core::{classify, Payload, Renderer};

/// PNG-signed buffer of the given size
fn png_payload(size: usize) -> Vec<u8> {
    let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
    data.resize(size.max(8), 0x42);
    data
}

/// ASCII text of the given size
fn text_payload(size: usize) -> Vec<u8> {
    b"The quick brown fox jumps over the lazy dog. "
        .iter()
        .cycle()
        .take(size)
        .copied()
        .collect()
}

/// Benchmark signature lookup (prefix comparison only, independent of size)
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let png = png_payload(64);
    let text = text_payload(64);
    let dib = [0x28, 0x00, 0x00, 0x00, 0x10, 0x00];

    group.bench_function("png", |b| b.iter(|| black_box(classify(black_box(&png)))));
    group.bench_function("dib", |b| b.iter(|| black_box(classify(black_box(&dib)))));
    group.bench_function("unknown", |b| b.iter(|| black_box(classify(black_box(&text)))));

    group.finish();
}

/// Benchmark arbitrary-precision locale decoding
fn bench_locale(c: &mut Criterion) {
    let mut group = c.benchmark_group("locale_decode");

    for len in [4usize, 16, 64, 256] {
        let buf = vec![0xA5u8; len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &buf, |b, data| {
            b.iter(|| black_box(decode_le_decimal(black_box(data))))
        });
    }

    group.finish();
}

/// Benchmark full rendering (preview, sniffing, text decode / image summary)
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let renderer = Renderer::new(false);

    let sizes = [(1024, "1KB"), (64 * 1024, "64KB"), (1024 * 1024, "1MB")];

    for (size, name) in sizes {
        group.throughput(Throughput::Bytes(size as u64));

        let text = Payload::Bytes(text_payload(size));
        group.bench_with_input(BenchmarkId::new("text", name), &text, |b, payload| {
            b.iter(|| black_box(renderer.render("text/plain", black_box(payload))))
        });

        let image = Payload::Bytes(png_payload(size));
        group.bench_with_input(BenchmarkId::new("image", name), &image, |b, payload| {
            b.iter(|| black_box(renderer.render("image/png", black_box(payload))))
        });
    }

    let markup = Payload::Bytes(b"<root><a x=\"1\"><b/><c>text</c></a><d/></root>".to_vec());
    group.bench_function("markup", |b| {
        b.iter(|| black_box(renderer.render("application/xml", black_box(&markup))))
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_locale, bench_render);
criterion_main!(benches);
