// ABOUTME: Tests for discipline race-time prediction
// ABOUTME: Covers flat, long sprint and hurdle models, split profiles and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use sprintlab::errors::ErrorCode;
use sprintlab::intelligence::{PredictionEngine, ReferenceData};
use sprintlab::models::{AgeCategory, Athlete, Gender, MetricsSet, PredictionResult};

fn predict(metrics: &MetricsSet, discipline: &str) -> PredictionResult {
    predict_as(metrics, Gender::Male, AgeCategory::Elite, discipline)
}

fn predict_as(
    metrics: &MetricsSet,
    gender: Gender,
    category: AgeCategory,
    discipline: &str,
) -> PredictionResult {
    let reference = ReferenceData::default();
    PredictionEngine::with_reference(&reference)
        .predict_for(metrics, gender, category, discipline)
        .unwrap()
}

#[test]
fn test_100m_from_fly_test() {
    let result = predict(&MetricsSet::new().with("test_30m_fly", 2.90), "100m");
    // 2.90 * 3.33 + 0.92 + 0.2
    assert!((result.time - 10.78).abs() < 1e-9);
    assert_eq!(result.method_tags, vec!["Fly-to-100 (K=0.2s)".to_owned()]);
    assert!((result.uncertainty_band - 0.10).abs() < 1e-12);
    assert!((result.lower_bound() - 10.68).abs() < 1e-9);
}

#[test]
fn test_100m_accel_bonus() {
    let metrics = MetricsSet::new()
        .with("test_30m_fly", 2.90)
        .with("test_30m_block", 3.95);
    let result = predict(&metrics, "100m");
    assert!((result.time - 10.63).abs() < 1e-9);
    assert!(result.method_tags[0].ends_with("+ Accel bonus"));
}

#[test]
fn test_100m_power_law_without_fly_test() {
    let result = predict(&MetricsSet::new(), "100m");
    assert_eq!(result.method_tags, vec!["Power Law".to_owned()]);
    assert!((result.time - 9.66).abs() < 1e-9);
}

#[test]
fn test_60m_physics_model() {
    let result = predict(&MetricsSet::new(), "60m");
    assert_eq!(result.method_tags, vec!["Physics Model".to_owned()]);
    assert!((result.time - 6.27).abs() < 1e-9);
}

#[test]
fn test_personal_best_blend() {
    // Estimate 10.777, PB 10.01 is more than half a second faster
    let metrics = MetricsSet::new()
        .with("test_30m_fly", 2.90)
        .with("pb_100m", 10.01);
    let result = predict(&metrics, "100m");
    assert_eq!(
        result.method_tags,
        vec!["Average (Potential vs Achieved)".to_owned()]
    );
    assert!((result.time - 10.39).abs() < 1e-9);
}

#[test]
fn test_splits_land_on_final_time() {
    let result = predict(&MetricsSet::new().with("test_30m_fly", 2.90), "100m");
    assert_eq!(result.splits.len(), 20);
    let last = result.splits.last().unwrap();
    assert!((last.distance - 100.0).abs() < 1e-9);
    assert!((last.time - 10.777).abs() < 1e-6);
    assert!(result
        .splits
        .windows(2)
        .all(|pair| pair[1].time > pair[0].time));
    let split = result.split_at(50.0).unwrap();
    let stride = split.step_frequency.unwrap() * split.step_length.unwrap();
    assert!((stride - split.velocity).abs() < 1e-9);
}

#[test]
fn test_200m_from_personal_best() {
    let result = predict(&MetricsSet::new().with("pb_100m", 10.50), "200m");
    assert!((result.time - 20.90).abs() < 1e-9);
    assert_eq!(result.method_tags[0], "Neutral");
    let distances: Vec<f64> = result.splits.iter().map(|s| s.distance).collect();
    assert_eq!(distances, vec![50.0, 100.0, 150.0, 200.0]);
    assert!((result.splits[1].time - 10.50).abs() < 1e-9);
}

#[test]
fn test_200m_endurance_bias() {
    let endurance = MetricsSet::new()
        .with("pb_100m", 10.50)
        .with("test_30m_fly", 2.90)
        .with("test_120m", 13.0);
    let result = predict(&endurance, "200m");
    assert_eq!(result.method_tags[0], "Endurance-Biased");
    assert!((result.time - 20.70).abs() < 1e-9);

    let speed = MetricsSet::new()
        .with("pb_100m", 10.50)
        .with("test_30m_fly", 2.90)
        .with("test_60m", 7.50);
    let result = predict(&speed, "200m");
    assert_eq!(result.method_tags[0], "Speed-Biased");
    assert!((result.time - 21.20).abs() < 1e-9);
}

#[test]
fn test_400m_and_400m_hurdles() {
    let metrics = MetricsSet::new().with("pb_200m", 21.00);
    let flat = predict(&metrics, "400m");
    assert!((flat.time - 45.60).abs() < 1e-9);
    assert_eq!(flat.method_tags[0], "ASR Model");
    // First 200 m: 21.00 plus the elite pacing offset
    assert!((flat.splits[0].time - 22.50).abs() < 1e-9);

    let hurdles = predict(&metrics, "400mH");
    assert!((hurdles.time - 49.60).abs() < 1e-9);
    assert_eq!(hurdles.splits, flat.splits);

    let youth = predict_as(&metrics, Gender::Female, AgeCategory::U18, "400mH");
    // 45.60 flat, plus 4.5 and the U18 bonus
    assert!((youth.time - 51.10).abs() < 1e-9);
}

#[test]
fn test_short_hurdles_add_technique_offset() {
    let result = predict(&MetricsSet::new(), "110mH");
    assert!((result.time - 11.58).abs() < 1e-9);
    assert_eq!(result.method_tags[0], "Technique Index");
    assert_eq!(result.method_tags[1], "IE Target: +1s");

    let junior = predict_as(&MetricsSet::new(), Gender::Male, AgeCategory::U20, "110mH");
    assert_eq!(junior.method_tags[1], "IE Target: +1.4s");
}

#[test]
fn test_unsupported_discipline() {
    let reference = ReferenceData::default();
    let error = PredictionEngine::with_reference(&reference)
        .predict_for(&MetricsSet::new(), Gender::Male, AgeCategory::Elite, "300m")
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::UnsupportedDiscipline);
}

#[test]
fn test_missing_data_never_fails() {
    let reference = ReferenceData::default();
    let engine = PredictionEngine::with_reference(&reference);
    for discipline in [
        "50m", "60m", "100m", "200m", "400m", "50mH", "60mH", "100mH", "110mH", "400mH",
    ] {
        for category in AgeCategory::ALL {
            let result = engine
                .predict_for(&MetricsSet::new(), Gender::Female, category, discipline)
                .unwrap();
            assert!(result.time.is_finite() && result.time > 0.0, "{discipline}");
        }
    }
}

#[test]
fn test_prediction_is_deterministic() {
    let mut athlete = Athlete::new("Sam", 2003, Gender::Female);
    athlete.metrics = MetricsSet::new()
        .with("test_30m_fly", 3.20)
        .with("test_30m_block", 4.30);
    let reference = ReferenceData::default();
    let engine = PredictionEngine::with_reference(&reference);
    let first = engine.predict(&athlete, "100m").unwrap();
    let second = engine.predict(&athlete, "100m").unwrap();
    assert_eq!(first, second);
}
