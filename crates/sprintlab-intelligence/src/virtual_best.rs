// ABOUTME: Virtual-best reconstruction across races and projection of predictions onto windows
// ABOUTME: Atomic segmentation, best-of composites per window and split interpolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Virtual-Best Aggregator
//!
//! The composite total is the sum of per-atomic-segment minima across races.
//! Per-window bests are taken over the display windows directly. The two are
//! computed at different granularities and are not reconciled.

use serde::{Deserialize, Serialize};
use sprintlab_core::constants::intervals::EXACT_MATCH_TOLERANCE;
use sprintlab_core::errors::{AppError, AppResult};
use sprintlab_core::models::{IntervalWindow, PredictionResult, SegmentMetric, Split};
use tracing::debug;
use uuid::Uuid;

use crate::config::DisciplineId;
use crate::race::Race;

/// Best time over one atomic segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomicBest {
    /// Atomic segment
    pub window: IntervalWindow,
    /// Fastest observed time (s)
    pub time: Option<f64>,
    /// Race that produced it
    pub race_id: Option<Uuid>,
}

/// Best metric value over one display window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowBest {
    /// Display window
    pub window: IntervalWindow,
    /// Best value across races
    pub value: Option<f64>,
    /// Race that produced it
    pub race_id: Option<Uuid>,
}

/// Composite of several races of one discipline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualBest {
    /// Event
    pub discipline: DisciplineId,
    /// Metric used for `segments`
    pub metric: SegmentMetric,
    /// Sum of atomic minima, `None` if any atomic segment has no data
    pub total_time: Option<f64>,
    /// Per-atomic-segment minima
    pub atomic: Vec<AtomicBest>,
    /// Per-display-window bests, in template order
    pub segments: Vec<WindowBest>,
}

/// Predicted value over one display window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSegment {
    /// Display window
    pub window: IntervalWindow,
    /// Projected metric value, `None` beyond the predicted splits
    pub value: Option<f64>,
}

/// Minimal non-overlapping segments covering every template boundary
///
/// Boundaries past the race distance are dropped; a trailing segment to the
/// finish is added when the last boundary falls short of it.
#[must_use]
pub fn atomic_segments(
    discipline: DisciplineId,
    template: &[IntervalWindow],
) -> Vec<IntervalWindow> {
    let total = discipline.distance();
    let mut points: Vec<f64> = template
        .iter()
        .flat_map(|window| [window.start, window.end])
        .chain([0.0, total])
        .filter(|point| point.is_finite())
        .collect();
    points.sort_by(f64::total_cmp);
    points.dedup_by(|a, b| (*a - *b).abs() < 1e-9);

    let mut segments: Vec<IntervalWindow> = points
        .windows(2)
        .filter(|pair| pair[1] <= total)
        .map(|pair| IntervalWindow::labelled(pair[0], pair[1], format!("{}m", pair[1])))
        .collect();

    let last_end = segments.last().map_or(0.0, |segment| segment.end);
    if last_end < total {
        segments.push(IntervalWindow::labelled(last_end, total, format!("{total}m")));
    }
    segments
}

/// Best positive value extracted from each race, with the race that produced it
fn best_over<B, E>(races: &[Race], better: B, extract: E) -> (Option<f64>, Option<Uuid>)
where
    B: Fn(f64, f64) -> bool,
    E: Fn(&Race) -> Option<f64>,
{
    races
        .iter()
        .filter_map(|race| extract(race).filter(|v| *v > 0.0).map(|v| (v, race.id)))
        .fold((None, None), |(best, id), (value, race_id)| match best {
            Some(current) if !better(value, current) => (Some(current), id),
            _ => (Some(value), Some(race_id)),
        })
}

/// Reconstruct the virtual best of several races of one discipline
///
/// # Errors
///
/// Returns `InvalidInput` if a race belongs to another discipline
pub fn calculate_virtual_best(
    discipline: DisciplineId,
    races: &[Race],
    template: &[IntervalWindow],
    metric: SegmentMetric,
) -> AppResult<VirtualBest> {
    if let Some(other) = races.iter().find(|race| race.discipline != discipline) {
        return Err(AppError::invalid_input(format!(
            "Race {} is a {} race, expected {discipline}",
            other.id, other.discipline
        )));
    }

    let atomic: Vec<AtomicBest> = atomic_segments(discipline, template)
        .into_iter()
        .map(|window| {
            let (time, race_id) = best_over(
                races,
                |candidate, current| candidate < current,
                |race| race.interval(&window).map(|interval| interval.time),
            );
            AtomicBest {
                window,
                time,
                race_id,
            }
        })
        .collect();

    let total_time = atomic
        .iter()
        .map(|best| best.time)
        .sum::<Option<f64>>()
        .filter(|_| !atomic.is_empty());

    let segments = template
        .iter()
        .map(|window| {
            let (value, race_id) = best_over(
                races,
                |candidate, current| {
                    if metric.higher_is_better() {
                        candidate > current
                    } else {
                        candidate < current
                    }
                },
                |race| race.interval(window).and_then(|interval| metric.value_of(&interval)),
            );
            WindowBest {
                window: window.clone(),
                value,
                race_id,
            }
        })
        .collect();

    debug!(
        %discipline,
        races = races.len(),
        ?total_time,
        "virtual best calculated"
    );

    Ok(VirtualBest {
        discipline,
        metric,
        total_time,
        atomic,
        segments,
    })
}

/// Predicted elapsed time at `distance`, interpolating from the start line
#[must_use]
pub fn split_time_at(splits: &[Split], distance: f64) -> Option<f64> {
    if distance == 0.0 {
        return Some(0.0);
    }
    if let Some(exact) = splits
        .iter()
        .find(|split| (split.distance - distance).abs() < EXACT_MATCH_TOLERANCE)
    {
        return Some(exact.time);
    }
    let after = splits.iter().find(|split| split.distance > distance)?;
    let (before_distance, before_time) = splits
        .iter()
        .rev()
        .find(|split| split.distance <= distance)
        .map_or((0.0, 0.0), |split| (split.distance, split.time));
    let ratio = (distance - before_distance) / (after.distance - before_distance);
    Some(ratio.mul_add(after.time - before_time, before_time))
}

fn project_window(
    prediction: &PredictionResult,
    window: &IntervalWindow,
    metric: SegmentMetric,
) -> Option<f64> {
    match metric {
        SegmentMetric::Speed | SegmentMetric::Time => {
            let time = split_time_at(&prediction.splits, window.end)?
                - split_time_at(&prediction.splits, window.start)?;
            if time <= 0.0 {
                return None;
            }
            Some(if metric == SegmentMetric::Time {
                time
            } else {
                (window.end - window.start) / time
            })
        }
        SegmentMetric::StepFrequency | SegmentMetric::StepLength => {
            let values: Vec<f64> = prediction
                .splits
                .iter()
                .filter(|split| split.distance > window.start && split.distance <= window.end)
                .filter_map(|split| match metric {
                    SegmentMetric::StepFrequency => split.step_frequency,
                    _ => split.step_length,
                })
                .collect();
            (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
        }
    }
}

/// Project a prediction's split sequence onto display windows
#[must_use]
pub fn project_prediction_to_segments(
    prediction: &PredictionResult,
    template: &[IntervalWindow],
    metric: SegmentMetric,
) -> Vec<ProjectedSegment> {
    template
        .iter()
        .map(|window| ProjectedSegment {
            window: window.clone(),
            value: project_window(prediction, window, metric),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn race(splits: &[(f64, f64)]) -> Race {
        splits
            .iter()
            .try_fold(Race::new(DisciplineId::Sprint100), |race, &(d, t)| {
                race.with_split(d, t)
            })
            .unwrap()
    }

    fn template() -> Vec<IntervalWindow> {
        vec![
            IntervalWindow::new(0.0, 30.0),
            IntervalWindow::new(30.0, 60.0),
            IntervalWindow::new(0.0, 60.0),
        ]
    }

    #[test]
    fn test_atomic_segments_cover_race() {
        let atomic = atomic_segments(DisciplineId::Sprint100, &template());
        let bounds: Vec<(f64, f64)> = atomic.iter().map(|w| (w.start, w.end)).collect();
        assert_eq!(bounds, vec![(0.0, 30.0), (30.0, 60.0), (60.0, 100.0)]);
    }

    #[test]
    fn test_virtual_best_combines_races() {
        let a = race(&[(30.0, 4.0), (60.0, 7.0), (100.0, 11.0)]);
        let b = race(&[(30.0, 4.2), (60.0, 6.9), (100.0, 10.7)]);
        let best = calculate_virtual_best(
            DisciplineId::Sprint100,
            &[a.clone(), b.clone()],
            &template(),
            SegmentMetric::Time,
        )
        .unwrap();

        // 4.0 (a) + 2.7 (b) + 3.8 (b)
        assert!((best.total_time.unwrap() - 10.5).abs() < 1e-9);
        assert_eq!(best.atomic[0].race_id, Some(a.id));
        assert_eq!(best.atomic[1].race_id, Some(b.id));
        assert!((best.segments[2].value.unwrap() - 6.9).abs() < 1e-9);
    }

    #[test]
    fn test_incomplete_total_is_none() {
        let partial = race(&[(30.0, 4.0), (60.0, 7.0)]);
        let best =
            calculate_virtual_best(DisciplineId::Sprint100, &[partial], &template(), SegmentMetric::Speed)
                .unwrap();
        assert!(best.total_time.is_none());
        assert!(best.segments[0].value.is_some());
    }

    #[test]
    fn test_mixed_disciplines_rejected() {
        let other = Race::new(DisciplineId::Sprint60);
        assert!(calculate_virtual_best(
            DisciplineId::Sprint100,
            &[other],
            &template(),
            SegmentMetric::Speed
        )
        .is_err());
    }

    #[test]
    fn test_split_time_interpolation() {
        let splits = vec![
            Split {
                distance: 10.0,
                time: 2.0,
                segment_time: 2.0,
                velocity: 5.0,
                step_frequency: None,
                step_length: None,
            },
            Split {
                distance: 20.0,
                time: 3.0,
                segment_time: 1.0,
                velocity: 10.0,
                step_frequency: None,
                step_length: None,
            },
        ];
        assert_eq!(split_time_at(&splits, 0.0), Some(0.0));
        assert!((split_time_at(&splits, 5.0).unwrap() - 1.0).abs() < 1e-12);
        assert!((split_time_at(&splits, 15.0).unwrap() - 2.5).abs() < 1e-12);
        assert_eq!(split_time_at(&splits, 25.0), None);
    }
}
