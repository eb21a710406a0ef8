use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use safeio::{read_all_limit, ByteSize};
use std::io::Cursor;

fn bench_read_all_limit(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_all_limit");
    for size in [4usize * 1024, 64 * 1024, 1024 * 1024] {
        let data = vec![0xabu8; size];
        let limit = ByteSize::from((size * 2) as u64);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{}KiB", size / 1024), |b| {
            b.iter(|| read_all_limit(&mut Cursor::new(&data[..]), limit).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_read_all_limit);
criterion_main!(benches);
