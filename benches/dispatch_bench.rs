use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use packet_registry::protocol::bootstrap::builtin_dispatcher;
use packet_registry::protocol::packets::{GameCommand, GamePacket, Ping};
use packet_registry::{encode_frame, PacketKind};

#[allow(clippy::unwrap_used)]
fn bench_dispatch_decode(c: &mut Criterion) {
    let dispatcher = builtin_dispatcher().unwrap();
    let mut group = c.benchmark_group("dispatch_decode");
    let payload_sizes = [0usize, 64, 512, 4096, 65536];

    for &size in &payload_sizes {
        let mut frame = vec![GamePacket::ID];
        frame.extend_from_slice(&vec![0xABu8; size]);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("game_packet_{size}b"), |b| {
            b.iter(|| dispatcher.decode_frame(&frame).unwrap())
        });
    }

    group.bench_function("ping_1b", |b| {
        b.iter(|| dispatcher.decode_frame(&[Ping::ID]).unwrap())
    });

    group.bench_function("unknown_id", |b| {
        b.iter(|| dispatcher.decode_frame(&[0xFF]).unwrap_err())
    });

    group.finish();
}

#[allow(clippy::unwrap_used)]
fn bench_frame_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_encode");

    group.bench_function("game_command", |b| {
        b.iter_batched(
            || GameCommand {
                command: "setblock ~ ~ ~ air".to_string(),
            },
            |packet| encode_frame(&packet),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch_decode, bench_frame_encode);
criterion_main!(benches);
