use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ming_chart::{
    HashPlacement, ScoreWeights, five_element_distribution, four_pillars, palace_chart,
};
use ming_time::{LocalMoment, SolarConfig};

fn pillar_bench(c: &mut Criterion) {
    let local = LocalMoment {
        year: 1990,
        month: 6,
        day: 15,
        hour: 14,
        minute: 30,
    };
    let config = SolarConfig::default();

    let mut group = c.benchmark_group("pillars");
    group.bench_function("four_pillars", |b| {
        b.iter(|| four_pillars(black_box(&local), black_box(121.5), &config))
    });
    let chart = four_pillars(&local, 121.5, &config);
    group.bench_function("five_element_distribution", |b| {
        b.iter(|| five_element_distribution(black_box(&chart), &ScoreWeights::default()))
    });
    group.finish();
}

fn palace_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("palaces");
    group.bench_function("palace_chart", |b| {
        b.iter(|| {
            palace_chart(
                black_box(1990),
                black_box(6),
                black_box(15),
                black_box(14),
                &HashPlacement,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, pillar_bench, palace_bench);
criterion_main!(benches);
