use bazi_base::{
    Pillar, Sex, analyze_balance, annual_pillars, derive_pillars, generate_decade_cycles,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn pillars() -> (Pillar, Pillar, Pillar) {
    (
        Pillar::from_sexagenary(1),
        Pillar::from_sexagenary(17),
        Pillar::from_sexagenary(4),
    )
}

fn chart_bench(c: &mut Criterion) {
    let (y, m, d) = pillars();

    let mut group = c.benchmark_group("chart");
    group.bench_function("derive_pillars", |b| {
        b.iter(|| derive_pillars(black_box(y), black_box(m), black_box(d), black_box(14)))
    });
    let chart = derive_pillars(y, m, d, 14).unwrap();
    group.bench_function("analyze_balance", |b| {
        b.iter(|| analyze_balance(black_box(&chart)))
    });
    group.finish();
}

fn cycle_bench(c: &mut Criterion) {
    let (y, m, d) = pillars();
    let chart = derive_pillars(y, m, d, 14).unwrap();

    let mut group = c.benchmark_group("cycles");
    group.bench_function("dayun_male", |b| {
        b.iter(|| generate_decade_cycles(black_box(&chart), Sex::Male))
    });
    group.bench_function("annual_10", |b| {
        b.iter(|| annual_pillars(black_box(1985), black_box(2024), 10).unwrap())
    });
    group.finish();
}

criterion_group!(benches, chart_bench, cycle_bench);
criterion_main!(benches);
