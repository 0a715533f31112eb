use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vk_stringify::{NameResolver, ResolveMode};

fn bench_resolve_hit(c: &mut Criterion) {
    let resolver = NameResolver::new(ResolveMode::Diagnostic);

    let mut group = c.benchmark_group("resolve_hit");

    for value in [0, 1_000_001_000, 1_000_261_000] {
        group.bench_with_input(BenchmarkId::from_parameter(value), &value, |b, &v| {
            b.iter(|| black_box(resolver.resolve(v)));
        });
    }

    group.finish();
}

fn bench_resolve_miss(c: &mut Criterion) {
    let resolver = NameResolver::new(ResolveMode::Diagnostic);

    c.bench_function("resolve_miss", |b| {
        b.iter(|| black_box(resolver.resolve(999_999)));
    });
}

fn bench_resolve_production(c: &mut Criterion) {
    let resolver = NameResolver::new(ResolveMode::Production);

    c.bench_function("resolve_production", |b| {
        b.iter(|| black_box(resolver.resolve(1_000_001_000)));
    });
}

criterion_group!(
    benches,
    bench_resolve_hit,
    bench_resolve_miss,
    bench_resolve_production
);
criterion_main!(benches);
