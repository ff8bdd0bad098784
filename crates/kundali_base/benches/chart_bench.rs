use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_base::{
    ALL_GRAHAS, ALL_RASHIS, BodyPosition, build_chart, derive_navamsa, navamsa_placement,
    which_navamsa,
};

fn sample_positions() -> Vec<BodyPosition> {
    ALL_GRAHAS
        .iter()
        .enumerate()
        .map(|(i, &g)| {
            let rashi = ALL_RASHIS[(i * 5) % 12];
            BodyPosition::new(g, rashi, "Ashwini", (i as f64 * 3.7) % 30.0, i % 4 == 3)
        })
        .collect()
}

fn navamsa_primitives_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("navamsa_primitives");
    group.bench_function("which_navamsa", |b| {
        b.iter(|| which_navamsa(black_box(17.25)))
    });
    group.bench_function("navamsa_placement", |b| {
        b.iter(|| navamsa_placement(black_box(ALL_RASHIS[7]), black_box(17.25)))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let positions = sample_positions();
    let chart = build_chart(&positions).expect("valid sample");

    let mut group = c.benchmark_group("chart");
    group.bench_function("build_chart", |b| {
        b.iter(|| build_chart(black_box(&positions)))
    });
    group.bench_function("derive_navamsa", |b| {
        b.iter(|| derive_navamsa(black_box(&chart)))
    });
    group.finish();
}

criterion_group!(benches, navamsa_primitives_bench, chart_bench);
criterion_main!(benches);
