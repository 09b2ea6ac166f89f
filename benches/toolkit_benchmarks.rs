//! Performance benchmarks for the WS2 toolkit.
//!
//! Run with: cargo bench

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use ws2_toolkit::{assembler, codec, detect, disassembler, text};

fn sample_script(instruction_count: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(instruction_count * 5 + 9);
    for i in 0..instruction_count {
        let target = ((i + 1) * 5) as u32;
        bytes.push(0x06);
        bytes.extend_from_slice(&target.to_le_bytes());
    }
    bytes.push(0xFF);
    bytes.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 0]);
    bytes
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let data = sample_script(2000);

    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("encode", |b| b.iter(|| codec::encode(&data)));
    group.bench_function("decode", |b| b.iter(|| codec::decode(&data)));
    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    let data = sample_script(2000);

    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("auto_detect", |b| b.iter(|| detect::detect(&data)));
    group.finish();
}

fn bench_disassemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("disassembly");
    let data = sample_script(2000);

    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("disassemble", |b| {
        b.iter(|| disassembler::disassemble(&data, Some(ws2_toolkit::Encryption::Decrypted)));
    });
    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");
    let data = sample_script(2000);
    let lines = disassembler::disassemble(&data, Some(ws2_toolkit::Encryption::Decrypted));
    let rendered = text::render_lines(&lines);

    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("render_and_parse", |b| {
        b.iter(|| {
            let parsed = text::parse_lines(&rendered).unwrap();
            let _ = assembler::assemble(&parsed);
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_codec,
    bench_detect,
    bench_disassemble,
    bench_round_trip
);
criterion_main!(benches);
