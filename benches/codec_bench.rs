//! Criterion benchmark untuk Coordinate Codec
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use coordwire::{CoordinateCodec, MessageReader, MessageWriter, Position, WIRE_SIZE};

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Elements(1));
    let codec = CoordinateCodec::default();

    group.bench_function("encode", |b| {
        let mut v = -60.0f32;
        b.iter(|| {
            let q = codec.encode(black_box(v), black_box(-v));
            v = if v > 60.0 { -60.0 } else { v + 0.37 };
            q
        });
    });

    group.bench_function("decode", |b| {
        let mut q = 0u16;
        b.iter(|| {
            let pos = codec.decode(black_box(q), black_box(!q));
            q = q.wrapping_add(1);
            pos
        });
    });

    group.bench_function("to_bytes_from_bytes", |b| {
        let pos = Position::new(12.5, -33.0);
        b.iter(|| codec.from_bytes(&codec.to_bytes(black_box(pos))));
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let codec = CoordinateCodec::default();

    for batch_size in [16usize, 256, 4096].iter() {
        let positions: Vec<Position> = (0..*batch_size)
            .map(|i| Position::new(i as f32 * 0.01 - 50.0, 50.0 - i as f32 * 0.01))
            .collect();
        let mut buffer = vec![0u8; 2 + batch_size * WIRE_SIZE];

        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_function(format!("write_{}", batch_size), |b| {
            b.iter(|| {
                let mut writer = MessageWriter::new(&mut buffer);
                codec.write_batch(black_box(&positions), &mut writer).unwrap();
            });
        });

        group.bench_function(format!("read_{}", batch_size), |b| {
            b.iter(|| {
                let mut reader = MessageReader::new(&buffer);
                for pos in codec.read_batch(&mut reader).unwrap() {
                    black_box(pos);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode_decode, bench_batch);
criterion_main!(benches);
