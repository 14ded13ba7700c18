// ABOUTME: Criterion benchmarks for the sprint prediction and race segment engines
// ABOUTME: Measures solver, per-discipline prediction and virtual-best throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for prediction and race analysis.
//!
//! Measures the kinematic solvers, full predictions for every discipline and
//! virtual-best composition over growing race sets.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sprintlab::intelligence::algorithms::{solve_accel_constant, time_at_distance};
use sprintlab::intelligence::{
    calculate_virtual_best, DisciplineId, PredictionEngine, Race, ReferenceData,
};
use sprintlab::models::{AgeCategory, Gender, MetricsSet, SegmentMetric};

fn full_metrics() -> MetricsSet {
    MetricsSet::new()
        .with("test_30m_fly", 2.95)
        .with("test_30m_block", 4.05)
        .with("test_120m", 13.4)
        .with("pb_60m", 6.85)
        .with("step_len_avg_r", 2.15)
        .with("step_len_avg_l", 2.11)
}

/// Synthetic 100 m races with slightly different pacing
#[allow(clippy::cast_precision_loss)]
fn generate_races(count: usize) -> Vec<Race> {
    (0..count)
        .map(|index| {
            let drift = (index % 7) as f64 * 0.02;
            [(30.0, 4.0), (50.0, 5.95), (60.0, 6.85), (100.0, 10.6)]
                .into_iter()
                .try_fold(Race::new(DisciplineId::Sprint100), |race, (d, t)| {
                    race.with_split(d, t + drift * d / 100.0)
                })
                .unwrap_or_else(|_| Race::new(DisciplineId::Sprint100))
        })
        .collect()
}

fn bench_kinematics(c: &mut Criterion) {
    let mut group = c.benchmark_group("kinematics");

    group.bench_function("time_at_distance_100m", |b| {
        b.iter(|| time_at_distance(black_box(100.0), black_box(11.6), black_box(0.95)));
    });
    group.bench_function("solve_accel_constant_30m", |b| {
        b.iter(|| solve_accel_constant(black_box(30.0), black_box(3.8), black_box(10.34)));
    });

    group.finish();
}

fn bench_predictions(c: &mut Criterion) {
    let mut group = c.benchmark_group("prediction");
    let reference = ReferenceData::default();
    let engine = PredictionEngine::with_reference(&reference);
    let metrics = full_metrics();

    for discipline in DisciplineId::ALL {
        group.bench_with_input(
            BenchmarkId::new("predict", discipline),
            &discipline,
            |b, &discipline| {
                b.iter(|| {
                    engine.predict_discipline(
                        black_box(&metrics),
                        Gender::Male,
                        AgeCategory::U20,
                        discipline,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_virtual_best(c: &mut Criterion) {
    let mut group = c.benchmark_group("virtual_best");
    let reference = ReferenceData::default();
    let template = reference
        .discipline(DisciplineId::Sprint100)
        .map(|config| config.analysis_template(Gender::Male, AgeCategory::Elite))
        .unwrap_or_default();

    for count in [2_usize, 10, 50] {
        let races = generate_races(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("races", count), &races, |b, races| {
            b.iter(|| {
                calculate_virtual_best(
                    DisciplineId::Sprint100,
                    black_box(races),
                    &template,
                    SegmentMetric::Speed,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_kinematics,
    bench_predictions,
    bench_virtual_best
);
criterion_main!(benches);
