use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use parenc::compile;

fn compile_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    let mut source = String::new();
    for _i in 0..1000 {
        source.push_str("(add 2 (subtract 4 2) (concat \"a\" \"b\"))\n");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("compile", |b| b.iter(|| compile(&source).unwrap()));
}

criterion_group!(benches, compile_program);
criterion_main!(benches);
