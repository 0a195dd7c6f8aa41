use criterion::{criterion_group, criterion_main, Criterion};
use sitenav::{active_index, builtin_site, resolve};
use std::hint::black_box;

const PATHS: &[&str] = &[
    "/",
    "/work",
    "/work/my-project",
    "/lab/bar-42",
    "/writing/2024/review",
    "/agent",
    "/does/not/exist",
];

fn bench_active_index(c: &mut Criterion) {
    let site = builtin_site();
    c.bench_function("active_index_builtin", |b| {
        b.iter(|| {
            for path in PATHS {
                black_box(active_index(black_box(path), &site.nav));
            }
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    let site = builtin_site();
    c.bench_function("resolve_builtin", |b| {
        b.iter(|| {
            for path in PATHS {
                black_box(resolve(black_box(path), &site.routes));
            }
        })
    });
}

criterion_group!(benches, bench_active_index, bench_resolve);
criterion_main!(benches);
