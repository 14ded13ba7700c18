// ABOUTME: Prediction output models: splits, derived athlete profile and result envelope
// ABOUTME: Split, AthleteProfile and PredictionResult definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One point of a predicted split sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Distance from the start (m)
    pub distance: f64,
    /// Cumulative time including reaction (s)
    pub time: f64,
    /// Time since the previous split (s)
    pub segment_time: f64,
    /// Average velocity over the last segment (m/s)
    pub velocity: f64,
    /// Estimated step frequency (Hz)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_frequency: Option<f64>,
    /// Estimated step length (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_length: Option<f64>,
}

/// Physiological profile derived from metrics and category
///
/// Recomputed on every prediction call; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Asymptotic maximum velocity (m/s)
    pub top_speed: f64,
    /// Acceleration time constant tau (s)
    pub accel_time_constant: f64,
    /// Fixed start latency (s)
    pub reaction_time: f64,
    /// Relative horizontal force stand-in (`top_speed / tau`)
    pub force_proxy: f64,
    /// Relative power stand-in (`force * top_speed / 4`)
    pub power_proxy: f64,
    /// Fly velocity over long-test average velocity, 0 without a fly test
    pub endurance_index: f64,
    /// Stretch-shortening reactivity (%)
    pub reactivity: f64,
    /// Provenance labels in resolution order
    pub sources: Vec<String>,
    /// Non-fatal plausibility messages
    pub warnings: Vec<String>,
}

/// Predicted race time with split profile and provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Discipline identifier
    pub discipline: String,
    /// Predicted race time (s)
    pub time: f64,
    /// Fixed per-discipline uncertainty (s)
    pub uncertainty_band: f64,
    /// Split sequence, strictly increasing distance
    pub splits: Vec<Split>,
    /// Which estimation paths produced `time`
    pub method_tags: Vec<String>,
    /// Provenance labels copied from the profile
    pub sources: Vec<String>,
    /// Plausibility warnings copied from the profile
    pub warnings: Vec<String>,
    /// Profile used for the prediction
    pub profile: AthleteProfile,
}

impl PredictionResult {
    /// Fastest plausible time
    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.time - self.uncertainty_band
    }

    /// Slowest plausible time
    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.time + self.uncertainty_band
    }

    /// Split at exactly `distance`, within one centimetre
    #[must_use]
    pub fn split_at(&self, distance: f64) -> Option<&Split> {
        self.splits
            .iter()
            .find(|split| (split.distance - distance).abs() < 0.01)
    }
}
