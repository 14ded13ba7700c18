// ABOUTME: Tests for athlete profile resolution from sparse metrics
// ABOUTME: Covers top-speed and time-constant cascades, indices and plausibility warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use sprintlab::intelligence::profile::{endurance_index, measured_step_length, reactivity_index};
use sprintlab::intelligence::{ProfileResolver, ReferenceData};
use sprintlab::models::{AgeCategory, AthleteProfile, Gender, MetricsSet};

fn resolve(metrics: &MetricsSet, gender: Gender, category: AgeCategory) -> AthleteProfile {
    let reference = ReferenceData::default();
    ProfileResolver::with_reference(&reference).resolve(metrics, gender, category)
}

#[test]
fn test_benchmark_fallback_for_empty_metrics() {
    let profile = resolve(&MetricsSet::new(), Gender::Male, AgeCategory::Elite);
    assert!((profile.top_speed - 11.6).abs() < 1e-12);
    assert!((profile.accel_time_constant - 0.95).abs() < 1e-12);
    assert!((profile.reaction_time - 0.15).abs() < 1e-12);
    assert_eq!(profile.endurance_index, 0.0);
    assert!(profile.sources[0].starts_with("Benchmark top speed"));
    assert!(profile.sources[1].starts_with("Benchmark acceleration"));
    assert!(profile.warnings.is_empty());
}

#[test]
fn test_fastest_fly_test_wins() {
    let metrics = MetricsSet::new()
        .with("test_30m_fly", 2.90)
        .with("test_20m_fly", 1.90);
    let profile = resolve(&metrics, Gender::Male, AgeCategory::Elite);
    assert!((profile.top_speed - 20.0 / 1.90).abs() < 1e-9);
    assert_eq!(profile.sources[0], "20m Fly");
}

#[test]
fn test_top_speed_from_personal_best() {
    let metrics = MetricsSet::new().with("pb_100m", 11.0);
    let profile = resolve(&metrics, Gender::Female, AgeCategory::U18);
    assert!((profile.top_speed - 100.0 / 11.0 * 1.16).abs() < 1e-9);
    assert_eq!(profile.sources[0], "Est. from 100m PB");
    // Youth reaction time
    assert!((profile.reaction_time - 0.16).abs() < 1e-12);
}

#[test]
fn test_time_constant_from_block_test() {
    let metrics = MetricsSet::new()
        .with("test_30m_fly", 2.90)
        .with("test_30m_block", 3.95);
    let profile = resolve(&metrics, Gender::Male, AgeCategory::Elite);
    assert_eq!(profile.sources[1], "30m Block");
    assert!((profile.accel_time_constant - 0.914).abs() < 0.005);
    let force = profile.top_speed / profile.accel_time_constant;
    assert!((profile.force_proxy - force).abs() < 1e-12);
    assert!((profile.power_proxy - force * profile.top_speed / 4.0).abs() < 1e-12);
}

#[test]
fn test_plausibility_warnings() {
    let metrics = MetricsSet::new()
        .with("test_30m_fly", 2.30)
        .with("test_30m_block", 3.00);
    let profile = resolve(&metrics, Gender::Male, AgeCategory::Elite);
    assert!(profile
        .warnings
        .iter()
        .any(|w| w.contains("near physiological ceiling")));
    assert!(profile
        .warnings
        .iter()
        .any(|w| w.contains("acceleration likely overestimated")));
}

#[test]
fn test_endurance_index_prefers_longest_test() {
    let metrics = MetricsSet::new()
        .with("test_30m_fly", 2.90)
        .with("test_60m", 7.0)
        .with("test_120m", 13.0);
    let expected = (30.0 / 2.90) / (120.0 / 13.0);
    assert!((endurance_index(&metrics) - expected).abs() < 1e-12);
    assert_eq!(endurance_index(&MetricsSet::new().with("test_30m_fly", 2.9)), 0.0);
    assert_eq!(endurance_index(&MetricsSet::new().with("test_120m", 13.0)), 0.0);
}

#[test]
fn test_reactivity_from_jumps() {
    let metrics = MetricsSet::new()
        .with("cmj_height", 45.0)
        .with("sj_height", 40.0);
    assert!((reactivity_index(&metrics).unwrap() - 12.5).abs() < 1e-12);
    let profile = resolve(&metrics, Gender::Male, AgeCategory::Elite);
    assert!((profile.reactivity - 12.5).abs() < 1e-12);
    assert!(profile.sources.iter().any(|s| s == "CMJ/SJ"));
    assert!(reactivity_index(&MetricsSet::new().with("cmj_height", 45.0)).is_none());
}

#[test]
fn test_measured_step_length() {
    let both = MetricsSet::new()
        .with("step_len_avg_r", 2.2)
        .with("step_len_avg_l", 2.0);
    assert!((measured_step_length(&both).unwrap() - 2.1).abs() < 1e-12);
    let right = MetricsSet::new().with("step_len_avg_r", 2.2);
    assert_eq!(measured_step_length(&right), Some(2.2));
    assert_eq!(measured_step_length(&MetricsSet::new()), None);
}
