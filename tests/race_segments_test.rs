// ABOUTME: Tests for recorded race segmentation and interval resolution
// ABOUTME: Covers primitive segments, hurdle legs, template intervals and interpolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use sprintlab::intelligence::{DisciplineId, Race, ReferenceData};
use sprintlab::models::{AgeCategory, Gender, IntervalWindow, MilestoneKind};

fn flat_race() -> Race {
    Race::new(DisciplineId::Sprint60)
        .with_split(30.0, 4.5)
        .unwrap()
        .with_split(60.0, 7.8)
        .unwrap()
}

fn hurdle_race() -> Race {
    let mut race = Race::new(DisciplineId::Hurdles110);
    race.set_milestone(11.72, 2.3, MilestoneKind::Takeoff, None)
        .unwrap();
    race.set_milestone(13.72, 2.6, MilestoneKind::Touchdown, None)
        .unwrap();
    race.set_milestone(22.86, 3.6, MilestoneKind::Touchdown, None)
        .unwrap();
    race.set_milestone(110.0, 13.5, MilestoneKind::Split, None)
        .unwrap();
    race
}

#[test]
fn test_segment_speeds_from_start_line() {
    let mut race = flat_race();
    race.set_step_count("30-60", 14);
    let segments = race.segment_speeds();
    assert_eq!(segments.len(), 2);

    assert_eq!(segments[0].id, "0-30");
    assert!((segments[0].speed - 30.0 / 4.5).abs() < 1e-9);
    assert_eq!(segments[0].steps, 0);
    assert!(segments[0].step_frequency.is_none());

    assert!((segments[1].speed - 30.0 / 3.3).abs() < 1e-9);
    assert_eq!(segments[1].steps, 14);
    assert!((segments[1].step_length.unwrap() - 30.0 / 14.0).abs() < 1e-9);
    assert!((segments[1].step_frequency.unwrap() - 14.0 / 3.3).abs() < 1e-9);

    assert_eq!(race.clear_step_count("30-60"), Some(14));
    assert_eq!(race.segment_speeds()[1].steps, 0);
}

#[test]
fn test_segments_skip_non_positive_durations() {
    let race = Race::new(DisciplineId::Sprint60)
        .with_split(30.0, 4.5)
        .unwrap()
        .with_split(60.0, 4.5)
        .unwrap();
    assert_eq!(race.segment_speeds().len(), 1);
    assert!(race.is_consistent());
}

#[test]
fn test_milestones_stay_time_ordered() {
    let mut race = flat_race();
    race.set_milestone(10.0, 1.9, MilestoneKind::Split, None)
        .unwrap();
    let times: Vec<f64> = race.milestones().iter().map(|m| m.time).collect();
    assert_eq!(times, vec![1.9, 4.5, 7.8]);
    assert!(race.remove_milestone(10.0, MilestoneKind::Split));
    assert!(!race.remove_milestone(10.0, MilestoneKind::Split));
}

#[test]
fn test_inconsistent_race_is_detected() {
    let race = Race::new(DisciplineId::Sprint60)
        .with_split(30.0, 5.0)
        .unwrap()
        .with_split(20.0, 6.0)
        .unwrap();
    assert!(!race.is_consistent());
}

#[test]
fn test_time_at_distance() {
    let race = flat_race();
    assert_eq!(race.time_at_distance(0.0), Some(0.0));
    assert_eq!(race.time_at_distance(30.0), Some(4.5));
    assert!((race.time_at_distance(45.0).unwrap() - 6.15).abs() < 1e-9);
    assert!((race.time_at_distance(15.0).unwrap() - 2.25).abs() < 1e-9);
    assert_eq!(race.time_at_distance(70.0), None);
}

#[test]
fn test_hurdle_legs() {
    let legs = hurdle_race().hurdle_analysis();
    let labels: Vec<&str> = legs.iter().map(|leg| leg.label.as_str()).collect();
    assert_eq!(labels, vec!["Start - H1", "H1 - H2", "H2 - Finish"]);
    assert!((legs[0].time - 2.6).abs() < 1e-9);
    assert!((legs[1].time - 1.0).abs() < 1e-9);
    assert!((legs[2].time - 9.9).abs() < 1e-9);

    assert!(flat_race().hurdle_analysis().is_empty());
}

#[test]
fn test_take_off_marks_are_not_segment_boundaries() {
    let segments = hurdle_race().segment_speeds();
    assert_eq!(segments.len(), 3);
    assert!((segments[0].end - 13.72).abs() < 1e-9);
}

#[test]
fn test_template_intervals() {
    let race = Race::new(DisciplineId::Sprint100)
        .with_split(30.0, 4.0)
        .unwrap()
        .with_split(60.0, 7.0)
        .unwrap()
        .with_split(100.0, 11.0)
        .unwrap();
    let reference = ReferenceData::default();
    let template = reference
        .discipline(DisciplineId::Sprint100)
        .unwrap()
        .analysis_template(Gender::Male, AgeCategory::Elite);
    let intervals = race.calculate_intervals(&template);
    assert_eq!(intervals.len(), template.len());

    // 50 m was never recorded
    let unresolved: Vec<String> = template
        .iter()
        .zip(&intervals)
        .filter(|(_, interval)| interval.is_none())
        .map(|(window, _)| window.key())
        .collect();
    assert_eq!(unresolved, vec!["50-100".to_owned()]);

    let full = intervals.last().unwrap().as_ref().unwrap();
    assert!((full.time - 11.0).abs() < 1e-9);
    assert_eq!(race.total_time(), Some(11.0));
}

#[test]
fn test_interval_tolerates_boundary_offsets() {
    let race = Race::new(DisciplineId::Sprint60)
        .with_split(30.05, 4.5)
        .unwrap()
        .with_split(60.0, 7.8)
        .unwrap();
    let interval = race.interval(&IntervalWindow::new(30.0, 60.0)).unwrap();
    assert!((interval.time - 3.3).abs() < 1e-9);
    assert!(race.interval(&IntervalWindow::new(20.0, 60.0)).is_none());
}

#[test]
fn test_interval_sums_contained_steps() {
    let mut race = flat_race();
    race.set_step_count("0-30", 17);
    race.set_step_count("30-60", 14);
    let interval = race.interval(&IntervalWindow::new(0.0, 60.0)).unwrap();
    assert_eq!(interval.steps, 31);
}

#[test]
fn test_race_json_is_normalized() {
    let json = r#"{
        "discipline": "60m",
        "milestones": [
            {"distance": 60.0, "time": 7.8, "kind": "split"},
            {"distance": 30.0, "time": 4.6, "kind": "split"},
            {"distance": 30.0, "time": 4.5, "kind": "split"}
        ]
    }"#;
    let race: Race = serde_json::from_str(json).unwrap();
    assert_eq!(race.milestones().len(), 2);
    assert_eq!(race.milestones()[0].time, 4.5);

    let round_trip: Race = serde_json::from_str(&serde_json::to_string(&race).unwrap()).unwrap();
    assert_eq!(round_trip, race);
}

#[test]
fn test_race_json_with_negative_distance_is_rejected() {
    let json = r#"{
        "discipline": "60m",
        "milestones": [
            {"distance": -5.0, "time": 0.9, "kind": "split"},
            {"distance": 60.0, "time": 7.8, "kind": "split"}
        ]
    }"#;
    let error = serde_json::from_str::<Race>(json).unwrap_err();
    assert!(error.to_string().contains("non-negative distance"));
}

#[test]
fn test_replaced_milestone_moves_to_its_time_slot() {
    let mut race = flat_race();
    race.set_milestone(30.0, 8.0, MilestoneKind::Split, None)
        .unwrap();
    let order: Vec<(f64, f64)> = race
        .milestones()
        .iter()
        .map(|m| (m.distance, m.time))
        .collect();
    assert_eq!(order, vec![(60.0, 7.8), (30.0, 8.0)]);
    assert!(!race.is_consistent());

    race.set_milestone(30.0, 4.4, MilestoneKind::Split, None)
        .unwrap();
    assert_eq!(race.milestones()[0].time, 4.4);
    assert_eq!(race.milestones().len(), 2);
}

#[test]
fn test_400m_half_differential() {
    let reference = ReferenceData::default();
    let config = reference.discipline(DisciplineId::Sprint400).unwrap();
    assert_eq!(config.differentials.len(), 1);
    let differential = &config.differentials[0];

    let race = Race::new(DisciplineId::Sprint400)
        .with_split(200.0, 22.0)
        .unwrap()
        .with_split(400.0, 47.5)
        .unwrap();
    let value = race.differential(differential).unwrap();
    assert!((value - 3.5).abs() < 1e-9);

    let half = Race::new(DisciplineId::Sprint400)
        .with_split(200.0, 22.0)
        .unwrap();
    assert!(half.differential(differential).is_none());
}
