use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, thread_rng};

fn bench_emit_64k(c: &mut Criterion) {
    let mut bytes = vec![0u8; 64 * 1024];
    thread_rng().fill(&mut bytes[..]);

    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("emit_64k", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(bytes.len() * 6);
            let _ = file2c_lib::emit(&bytes[..], &mut out, "data");
            out
        })
    });
    group.finish();
}

criterion_group!(benches, bench_emit_64k);
criterion_main!(benches);
