// ABOUTME: Race milestone, interval and display-window value objects
// ABOUTME: Milestone, MilestoneKind, Interval, IntervalWindow and SegmentMetric definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// What happened at a milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    /// Timing split (start line, intermediate, finish)
    Split,
    /// First foot contact after a hurdle
    Touchdown,
    /// Last foot contact before a hurdle
    Takeoff,
}

impl MilestoneKind {
    /// Whether the milestone delimits primitive speed segments
    #[must_use]
    pub const fn is_segment_boundary(&self) -> bool {
        matches!(self, Self::Split | Self::Touchdown)
    }
}

/// A timestamped event at a known distance within one race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Distance from the start line (m)
    pub distance: f64,
    /// Elapsed time (s)
    pub time: f64,
    /// Event kind
    pub kind: MilestoneKind,
    /// Optional display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Milestone {
    /// Unlabelled milestone
    #[must_use]
    pub const fn new(distance: f64, time: f64, kind: MilestoneKind) -> Self {
        Self {
            distance,
            time,
            kind,
            label: None,
        }
    }

    /// Unlabelled split
    #[must_use]
    pub const fn split(distance: f64, time: f64) -> Self {
        Self::new(distance, time, MilestoneKind::Split)
    }
}

/// A requested analysis window, not necessarily aligned with milestones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalWindow {
    /// Window start (m)
    pub start: f64,
    /// Window end (m)
    pub end: f64,
    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl IntervalWindow {
    /// Window with a generated `"{start}-{end}m"` label
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            label: None,
        }
    }

    /// Window with an explicit label
    #[must_use]
    pub fn labelled(start: f64, end: f64, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: Some(label.into()),
        }
    }

    /// Stable key used for step counts, e.g. `"30-60"`
    #[must_use]
    pub fn key(&self) -> String {
        segment_key(self.start, self.end)
    }

    /// Label, falling back to the distance range
    #[must_use]
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("{}-{}m", self.start, self.end))
    }
}

/// Segment identifier for a distance pair
#[must_use]
pub fn segment_key(start: f64, end: f64) -> String {
    format!("{start}-{end}")
}

/// Derived measurement over a distance window
///
/// Step fields are `None` when no step count covers the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Segment identifier (`"{start}-{end}"`)
    pub id: String,
    /// Display label
    pub label: String,
    /// Start distance (m)
    pub start: f64,
    /// End distance (m)
    pub end: f64,
    /// Elapsed time across the window (s)
    pub time: f64,
    /// Covered distance (m)
    pub distance: f64,
    /// Average speed (m/s)
    pub speed: f64,
    /// Step count, zero when unknown
    pub steps: u32,
    /// Steps per second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_frequency: Option<f64>,
    /// Metres per step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_length: Option<f64>,
}

impl Interval {
    /// Build an interval from its bounds, time and step count
    ///
    /// Callers guarantee `time > 0`.
    #[must_use]
    pub fn from_bounds(start: f64, end: f64, time: f64, steps: u32) -> Self {
        let distance = end - start;
        let (step_frequency, step_length) = if steps > 0 {
            let steps = f64::from(steps);
            (Some(steps / time), Some(distance / steps))
        } else {
            (None, None)
        };
        let id = segment_key(start, end);
        Self {
            label: format!("{id}m"),
            id,
            start,
            end,
            time,
            distance,
            speed: distance / time,
            steps,
            step_frequency,
            step_length,
        }
    }

    /// Replace the display label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Metric compared across races and predictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SegmentMetric {
    /// Average speed, higher is better
    #[default]
    Speed,
    /// Elapsed time, lower is better
    Time,
    /// Step frequency, higher is better
    StepFrequency,
    /// Step length, higher is better
    StepLength,
}

impl SegmentMetric {
    /// Whether larger values are better
    #[must_use]
    pub const fn higher_is_better(&self) -> bool {
        !matches!(self, Self::Time)
    }

    /// Value of this metric on an interval
    #[must_use]
    pub fn value_of(&self, interval: &Interval) -> Option<f64> {
        match self {
            Self::Speed => Some(interval.speed),
            Self::Time => Some(interval.time),
            Self::StepFrequency => interval.step_frequency,
            Self::StepLength => interval.step_length,
        }
    }

    /// Pick the better of two values
    #[must_use]
    pub fn better(&self, a: f64, b: f64) -> f64 {
        if self.higher_is_better() {
            a.max(b)
        } else {
            a.min(b)
        }
    }

    /// Identifier used on the CLI and in JSON
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Time => "time",
            Self::StepFrequency => "step_frequency",
            Self::StepLength => "step_length",
        }
    }
}

impl fmt::Display for SegmentMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SegmentMetric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "speed" => Ok(Self::Speed),
            "time" => Ok(Self::Time),
            "step_frequency" | "frequency" => Ok(Self::StepFrequency),
            "step_length" | "length" => Ok(Self::StepLength),
            other => Err(AppError::invalid_input(format!(
                "Unknown segment metric '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_step_derivations() {
        let interval = Interval::from_bounds(30.0, 60.0, 3.0, 12);
        assert_eq!(interval.id, "30-60");
        assert!((interval.speed - 10.0).abs() < 1e-9);
        assert_eq!(interval.step_frequency, Some(4.0));
        assert_eq!(interval.step_length, Some(2.5));
    }

    #[test]
    fn test_interval_without_steps() {
        let interval = Interval::from_bounds(0.0, 10.0, 1.5, 0);
        assert!(interval.step_frequency.is_none());
        assert!(interval.step_length.is_none());
    }

    #[test]
    fn test_fractional_keys() {
        assert_eq!(segment_key(13.72, 22.86), "13.72-22.86");
        assert_eq!(IntervalWindow::new(0.0, 30.0).key(), "0-30");
    }

    #[test]
    fn test_metric_direction() {
        assert_eq!(SegmentMetric::Time.better(2.0, 3.0), 2.0);
        assert_eq!(SegmentMetric::Speed.better(2.0, 3.0), 3.0);
        assert_eq!("step-length".parse::<SegmentMetric>().unwrap(), SegmentMetric::StepLength);
    }
}
