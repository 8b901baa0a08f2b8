//! Benchmarks for chunkwire.
//!
//! Run with:
//!     cargo bench

use bytes::Bytes;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use chunkwire::{Accumulator, MessageIds, SplitConfig, Splitter, decode, encode};

fn payload(size: usize) -> Bytes {
    // Deterministic pseudo-random data
    (0..size).map(|i| (i * 7 + 13) as u8).collect::<Vec<_>>().into()
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    let ids = MessageIds::new();

    for size in [64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        let data = payload(size);
        let splitter = Splitter::with_message_ids(SplitConfig::default(), &ids);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(format!("bytes_{}kb", size / 1024), &data, |b, data| {
            b.iter(|| {
                let chunks = splitter.split(black_box(data.clone())).unwrap();
                black_box(chunks.len())
            });
        });
    }

    group.finish();
}

fn bench_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_sizes");
    let size = 1024 * 1024; // 1 MB
    let data = payload(size);
    let ids = MessageIds::new();

    group.throughput(Throughput::Bytes(size as u64));
    for chunk_size in [1200, 16 * 1024, 64 * 1024] {
        let splitter = Splitter::with_message_ids(SplitConfig::new(chunk_size).unwrap(), &ids);
        group.bench_function(format!("roundtrip_{chunk_size}"), |b| {
            b.iter(|| {
                let mut acc = Accumulator::new();
                for chunk in splitter.split_iter(black_box(data.clone())).unwrap() {
                    acc.add_chunk(decode(encode(&chunk)).unwrap()).unwrap();
                }
                black_box(acc.content_bytes().unwrap().len())
            });
        });
    }

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let ids = MessageIds::new();
    let chunks = Splitter::with_message_ids(SplitConfig::default(), &ids)
        .split(payload(1024 * 1024))
        .unwrap();
    let wire: Vec<Bytes> = chunks.iter().map(encode).collect();

    group.throughput(Throughput::Elements(chunks.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| {
            let total: usize = chunks.iter().map(|c| encode(black_box(c)).len()).sum();
            black_box(total)
        });
    });

    group.bench_function("decode", |b| {
        b.iter(|| {
            let total: usize = wire
                .iter()
                .map(|w| decode(black_box(w.clone())).unwrap().len())
                .sum();
            black_box(total)
        });
    });

    group.finish();
}

fn bench_reassembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("reassembly");
    let size = 1024 * 1024;
    let ids = MessageIds::new();
    let chunks = Splitter::with_message_ids(SplitConfig::new(1200).unwrap(), &ids)
        .split(payload(size))
        .unwrap();

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("in_order", |b| {
        b.iter(|| {
            let mut acc = Accumulator::new();
            for chunk in &chunks {
                acc.add_chunk(chunk.clone()).unwrap();
            }
            black_box(acc.content_bytes().unwrap().len())
        });
    });

    group.bench_function("reversed", |b| {
        b.iter(|| {
            let mut acc = Accumulator::new();
            for chunk in chunks.iter().rev() {
                acc.add_chunk(chunk.clone()).unwrap();
            }
            black_box(acc.content_bytes().unwrap().len())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_split,
    bench_chunk_sizes,
    bench_codec,
    bench_reassembly
);
criterion_main!(benches);
