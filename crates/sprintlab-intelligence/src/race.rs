// ABOUTME: Recorded race with timestamped milestones and per-segment step counts
// ABOUTME: Derives primitive segments, hurdle legs, custom intervals and interpolated times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Segment/Interval Engine
//!
//! A [`Race`] owns its milestones and step counts. Milestones are unique per
//! `(distance, kind)` and kept sorted by time after every mutation, including
//! deserialization. Derived intervals are recomputed on every call and never
//! cached.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sprintlab_core::constants::intervals::{
    BOUNDARY_EPSILON, EXACT_MATCH_TOLERANCE, RACE_TIME_TOLERANCE,
};
use sprintlab_core::errors::{AppError, AppResult};
use sprintlab_core::models::{Interval, IntervalWindow, Milestone, MilestoneKind};
use tracing::debug;
use uuid::Uuid;

use crate::config::{DisciplineId, WindowDifferential};

/// Two milestone distances denote the same mark
fn same_mark(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Recorded race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RaceRecord")]
pub struct Race {
    /// Stable identifier
    pub id: Uuid,
    /// Owning athlete, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub athlete_id: Option<Uuid>,
    /// Event
    pub discipline: DisciplineId,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Race day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    milestones: Vec<Milestone>,
    #[serde(default)]
    step_counts: BTreeMap<String, u32>,
}

/// Wire shape of a race before milestone normalization
#[derive(Deserialize)]
struct RaceRecord {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    #[serde(default)]
    athlete_id: Option<Uuid>,
    discipline: DisciplineId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    note: String,
    #[serde(default)]
    milestones: Vec<Milestone>,
    #[serde(default)]
    step_counts: BTreeMap<String, u32>,
}

impl TryFrom<RaceRecord> for Race {
    type Error = AppError;

    fn try_from(record: RaceRecord) -> AppResult<Self> {
        let mut race = Self {
            id: record.id,
            athlete_id: record.athlete_id,
            discipline: record.discipline,
            name: record.name,
            date: record.date,
            note: record.note,
            milestones: Vec::with_capacity(record.milestones.len()),
            step_counts: record.step_counts,
        };
        for milestone in record.milestones {
            check_milestone(milestone.distance, milestone.time)?;
            race.upsert(milestone);
        }
        Ok(race)
    }
}

fn check_milestone(distance: f64, time: f64) -> AppResult<()> {
    if !distance.is_finite() || !time.is_finite() || distance < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Milestone needs a finite non-negative distance and a finite time, got {distance} m at {time} s"
        )));
    }
    Ok(())
}

impl Race {
    /// Empty race for a discipline
    #[must_use]
    pub fn new(discipline: DisciplineId) -> Self {
        Self {
            id: Uuid::new_v4(),
            athlete_id: None,
            discipline,
            name: String::new(),
            date: None,
            note: String::new(),
            milestones: Vec::new(),
            step_counts: BTreeMap::new(),
        }
    }

    /// Milestones in time order
    #[must_use]
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    /// Recorded step counts keyed by segment id
    #[must_use]
    pub const fn step_counts(&self) -> &BTreeMap<String, u32> {
        &self.step_counts
    }

    /// Insert or replace the milestone at `(distance, kind)`
    ///
    /// The label defaults to `"{distance}m"`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative or non-finite distance or time
    pub fn set_milestone(
        &mut self,
        distance: f64,
        time: f64,
        kind: MilestoneKind,
        label: Option<String>,
    ) -> AppResult<()> {
        check_milestone(distance, time)?;
        self.upsert(Milestone {
            distance,
            time,
            kind,
            label: Some(label.unwrap_or_else(|| format!("{distance}m"))),
        });
        Ok(())
    }

    /// Builder-style split insertion
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for invalid values, as [`Race::set_milestone`]
    pub fn with_split(mut self, distance: f64, time: f64) -> AppResult<Self> {
        self.set_milestone(distance, time, MilestoneKind::Split, None)?;
        Ok(self)
    }

    /// Replace any milestone at the same `(distance, kind)`, then insert at
    /// the time-ordered position
    fn upsert(&mut self, milestone: Milestone) {
        self.milestones
            .retain(|m| !(m.kind == milestone.kind && same_mark(m.distance, milestone.distance)));
        let index = self.milestones.partition_point(|m| {
            m.time
                .total_cmp(&milestone.time)
                .then(m.distance.total_cmp(&milestone.distance))
                .is_le()
        });
        self.milestones.insert(index, milestone);
    }

    /// Remove the milestone at `(distance, kind)`, returning whether one existed
    pub fn remove_milestone(&mut self, distance: f64, kind: MilestoneKind) -> bool {
        let before = self.milestones.len();
        self.milestones
            .retain(|m| !(m.kind == kind && same_mark(m.distance, distance)));
        self.milestones.len() != before
    }

    /// Record the step count of a segment such as `"30-60"`
    pub fn set_step_count(&mut self, segment_id: impl Into<String>, steps: u32) {
        self.step_counts.insert(segment_id.into(), steps);
    }

    /// Forget a segment's step count
    pub fn clear_step_count(&mut self, segment_id: &str) -> Option<u32> {
        self.step_counts.remove(segment_id)
    }

    fn steps_for(&self, segment_id: &str) -> u32 {
        self.step_counts.get(segment_id).copied().unwrap_or(0)
    }

    /// Whether distance never decreases along the time-ordered milestones
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.milestones
            .windows(2)
            .all(|pair| pair[0].distance <= pair[1].distance)
    }

    /// Milestones sorted by distance
    fn by_distance<'m>(milestones: impl Iterator<Item = &'m Milestone>) -> Vec<&'m Milestone> {
        let mut sorted: Vec<&Milestone> = milestones.collect();
        sorted.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        sorted
    }

    /// Consecutive split/touchdown segments, from the start line
    ///
    /// Pairs with a non-positive duration are skipped.
    #[must_use]
    pub fn segment_speeds(&self) -> Vec<Interval> {
        let marks = Self::by_distance(
            self.milestones
                .iter()
                .filter(|m| m.kind.is_segment_boundary()),
        );
        let mut points: Vec<(f64, f64)> = marks.iter().map(|m| (m.distance, m.time)).collect();
        if points.first().is_some_and(|&(distance, _)| distance > 0.0) {
            points.insert(0, (0.0, 0.0));
        }

        points
            .windows(2)
            .filter_map(|pair| {
                let (start, start_time) = pair[0];
                let (end, end_time) = pair[1];
                let time = end_time - start_time;
                (time > 0.0).then(|| {
                    let steps = self.steps_for(&IntervalWindow::new(start, end).key());
                    Interval::from_bounds(start, end, time, steps)
                })
            })
            .collect()
    }

    /// Start to first hurdle, hurdle to hurdle, last hurdle to finish
    ///
    /// Empty for flat events. Hurdle positions come from touchdown milestones.
    #[must_use]
    pub fn hurdle_analysis(&self) -> Vec<Interval> {
        if !self.discipline.is_hurdles() {
            return Vec::new();
        }
        let touchdowns = Self::by_distance(
            self.milestones
                .iter()
                .filter(|m| m.kind == MilestoneKind::Touchdown),
        );
        let (Some(first), Some(last)) = (touchdowns.first(), touchdowns.last()) else {
            return Vec::new();
        };
        let start = self
            .milestones
            .iter()
            .find(|m| m.distance == 0.0)
            .map_or((0.0, 0.0), |m| (m.distance, m.time));
        let race_distance = self.discipline.distance();
        let finish = self
            .milestones
            .iter()
            .find(|m| (m.distance - race_distance).abs() < EXACT_MATCH_TOLERANCE);

        let leg = |from: (f64, f64), to: (f64, f64), label: String| {
            let time = to.1 - from.1;
            (time > 0.0).then(|| {
                let steps = self.steps_for(&IntervalWindow::new(from.0, to.0).key());
                Interval::from_bounds(from.0, to.0, time, steps).with_label(label)
            })
        };

        let mut legs = Vec::with_capacity(touchdowns.len() + 1);
        legs.extend(leg(
            start,
            (first.distance, first.time),
            "Start - H1".to_owned(),
        ));
        for (index, pair) in touchdowns.windows(2).enumerate() {
            legs.extend(leg(
                (pair[0].distance, pair[0].time),
                (pair[1].distance, pair[1].time),
                format!("H{} - H{}", index + 1, index + 2),
            ));
        }
        if let Some(finish) = finish.filter(|f| f.distance > last.distance) {
            legs.extend(leg(
                (last.distance, last.time),
                (finish.distance, finish.time),
                format!("H{} - Finish", touchdowns.len()),
            ));
        }
        legs
    }

    fn milestone_near(&self, distance: f64) -> Option<&Milestone> {
        self.milestones
            .iter()
            .find(|m| (m.distance - distance).abs() < BOUNDARY_EPSILON)
    }

    /// Resolve one analysis window against the recorded milestones
    ///
    /// `None` when a boundary has no milestone within 0.1 m (the start line
    /// defaults to time zero) or the duration is not positive. Step counts
    /// are summed over every primitive segment inside the window.
    #[must_use]
    pub fn interval(&self, window: &IntervalWindow) -> Option<Interval> {
        let start_mark = self.milestone_near(window.start);
        let start_time = match start_mark {
            Some(mark) => mark.time,
            None if window.start == 0.0 => 0.0,
            None => return None,
        };
        let end_mark = self.milestone_near(window.end)?;
        let time = end_mark.time - start_time;
        if time <= 0.0 {
            return None;
        }
        let start = start_mark.map_or(0.0, |m| m.distance);

        let steps: u32 = self
            .segment_speeds()
            .iter()
            .filter(|p| {
                p.start >= window.start - BOUNDARY_EPSILON && p.end <= window.end + BOUNDARY_EPSILON
            })
            .map(|p| p.steps)
            .sum();

        Some(
            Interval::from_bounds(start, end_mark.distance, time, steps)
                .with_label(window.display_label()),
        )
    }

    /// Resolve every window of a template, position for position
    #[must_use]
    pub fn calculate_intervals(&self, template: &[IntervalWindow]) -> Vec<Option<Interval>> {
        let resolved: Vec<Option<Interval>> =
            template.iter().map(|window| self.interval(window)).collect();
        debug!(
            race = %self.id,
            requested = template.len(),
            resolved = resolved.iter().flatten().count(),
            "intervals calculated"
        );
        resolved
    }

    /// Compared-window time minus reference-window time
    ///
    /// `None` unless both windows resolve.
    #[must_use]
    pub fn differential(&self, differential: &WindowDifferential) -> Option<f64> {
        let reference = self.interval(&differential.reference)?;
        let compared = self.interval(&differential.compared)?;
        Some(compared.time - reference.time)
    }

    /// Elapsed time at `distance`
    ///
    /// Zero at the start line, exact at recorded milestones, linear between
    /// neighbours, `None` past the last milestone.
    #[must_use]
    pub fn time_at_distance(&self, distance: f64) -> Option<f64> {
        if distance == 0.0 {
            return Some(0.0);
        }
        if distance < 0.0 {
            return None;
        }
        if let Some(exact) = self
            .milestones
            .iter()
            .find(|m| (m.distance - distance).abs() < EXACT_MATCH_TOLERANCE)
        {
            return Some(exact.time);
        }
        let sorted = Self::by_distance(self.milestones.iter());
        let after = sorted.iter().find(|m| m.distance > distance)?;
        let (before_distance, before_time) = sorted
            .iter()
            .rev()
            .find(|m| m.distance <= distance)
            .map_or((0.0, 0.0), |m| (m.distance, m.time));
        let ratio = (distance - before_distance) / (after.distance - before_distance);
        Some(ratio.mul_add(after.time - before_time, before_time))
    }

    /// Time from the start line to the finish, `None` if unresolved
    #[must_use]
    pub fn total_time(&self) -> Option<f64> {
        self.interval(&IntervalWindow::new(0.0, self.discipline.distance()))
            .map(|interval| interval.time)
    }

    /// Timer reading at the start line, zero when not recorded
    #[must_use]
    pub fn start_offset(&self) -> f64 {
        self.milestones
            .iter()
            .find(|m| m.distance == 0.0)
            .map_or(0.0, |m| m.time)
    }

    /// Convert a raw timer reading into race time
    ///
    /// `None` when the reading precedes the start by more than a millisecond.
    #[must_use]
    pub fn race_time(&self, raw_time: f64) -> Option<f64> {
        let time = raw_time - self.start_offset();
        (time >= -RACE_TIME_TOLERANCE).then_some(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_replaces_same_mark() {
        let mut race = Race::new(DisciplineId::Sprint60);
        race.set_milestone(30.0, 4.1, MilestoneKind::Split, None).unwrap();
        race.set_milestone(30.0, 4.0, MilestoneKind::Split, None).unwrap();
        assert_eq!(race.milestones().len(), 1);
        assert_eq!(race.milestones()[0].time, 4.0);
        assert_eq!(race.milestones()[0].label.as_deref(), Some("30m"));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let mut race = Race::new(DisciplineId::Sprint60);
        assert!(race
            .set_milestone(f64::NAN, 1.0, MilestoneKind::Split, None)
            .is_err());
        assert!(race
            .set_milestone(10.0, f64::INFINITY, MilestoneKind::Split, None)
            .is_err());
    }

    #[test]
    fn test_race_time_offset() {
        let race = Race::new(DisciplineId::Sprint100)
            .with_split(0.0, 0.35)
            .unwrap();
        assert!((race.start_offset() - 0.35).abs() < 1e-12);
        assert!((race.race_time(10.35).unwrap() - 10.0).abs() < 1e-9);
        assert!(race.race_time(0.3).is_none());
    }
}
