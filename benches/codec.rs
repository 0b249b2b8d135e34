//! Criterion benchmarks for the FastLZ Level 1 / Level 2 codec.
//!
//! Run with:
//!   cargo bench --bench codec

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sixpack::codec::{compress_with_level, decompress, Level};

/// A synthetic corpus mixing repeated runs and pseudo-random bytes, so
/// compression has real matches to find without being a degenerate
/// all-one-byte input.
fn synthetic_chunk(size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(size);
    let mut state: u32 = 0x1234_5678;
    while out.len() < size {
        if out.len() % 512 < 128 {
            out.extend(std::iter::repeat(b'a').take(128.min(size - out.len())));
        } else {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            out.push((state >> 24) as u8);
        }
    }
    out
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec_compress_decompress");

    for &chunk_size in &[65_536usize, 262_144] {
        let chunk = synthetic_chunk(chunk_size);

        for level in [Level::Level1, Level::Level2] {
            let label = match level {
                Level::Level1 => "level1",
                Level::Level2 => "level2",
            };

            group.throughput(Throughput::Bytes(chunk_size as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("compress_{label}"), chunk_size),
                &chunk,
                |b, chunk| b.iter(|| compress_with_level(chunk, level)),
            );

            let compressed = compress_with_level(&chunk, level);
            group.throughput(Throughput::Bytes(chunk_size as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("decompress_{label}"), chunk_size),
                &compressed,
                |b, compressed| b.iter(|| decompress(compressed, chunk_size).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
