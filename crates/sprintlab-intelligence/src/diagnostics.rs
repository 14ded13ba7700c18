// ABOUTME: Coaching diagnostics derived from a resolved athlete profile
// ABOUTME: Quality scores, force-velocity orientation, PB consistency and training advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coaching Diagnostics
//!
//! Reads an [`AthleteProfile`] against the category benchmark and turns it
//! into coach-facing output:
//!
//! - 0-100 quality scores for the athlete and for the benchmark
//! - a force-velocity orientation
//! - benchmark target checks for tau and power
//! - prediction versus personal-best consistency notes
//! - strengths, weaknesses and advice lines

use serde::{Deserialize, Serialize};
use sprintlab_core::constants::metric_keys::{
    personal_best_key, CONTACT_TIME_L, CONTACT_TIME_R, PB_100M, PB_60M, STEP_LEN_AVG_R,
    TEST_20M_FLY, TEST_30M_BLOCK, TEST_30M_FLY,
};
use sprintlab_core::models::{AgeCategory, AthleteProfile, Gender, MetricsSet};
use tracing::debug;

use crate::config::{BenchmarkProfile, ReferenceData};
use crate::profile::{endurance_index, reactivity_index};

/// Diagnostic thresholds
pub mod thresholds {
    /// Force-velocity ratio above which a profile is force dominant
    pub const FORCE_DOMINANT_RATIO: f64 = 1.15;
    /// Force-velocity ratio below which a profile is velocity dominant
    pub const VELOCITY_DOMINANT_RATIO: f64 = 0.85;
    /// Relative force marking an explosive profile
    pub const HIGH_FORCE: f64 = 11.5;
    /// Relative force marking a force deficit
    pub const LOW_FORCE: f64 = 9.0;
    /// Top speed under which a force-dominant athlete should chase speed (m/s)
    pub const LOW_TOP_SPEED: f64 = 9.5;
    /// Velocity reserve above which top speed is under-used
    pub const HIGH_VELOCITY_RESERVE: f64 = 1.22;
    /// Velocity reserve below which top speed is well exploited
    pub const LOW_VELOCITY_RESERVE: f64 = 1.14;
    /// Reactivity under which the stretch-shortening cycle is slow (%)
    pub const LOW_REACTIVITY: f64 = 8.0;
    /// Reactivity above which the stretch-shortening cycle is fast (%)
    pub const HIGH_REACTIVITY: f64 = 15.0;
    /// Contact time above which stiffness is lacking (ms)
    pub const LONG_CONTACT_MS: f64 = 105.0;
    /// Contact time below which stiffness is elite (ms)
    pub const SHORT_CONTACT_MS: f64 = 90.0;
    /// Top speed from which long contacts are flagged (m/s)
    pub const CONTACT_CHECK_SPEED: f64 = 9.0;
    /// Endurance index above which speed decays early
    pub const HIGH_FATIGUE: f64 = 1.28;
    /// PB slower than the prediction by more than this is an opportunity (s)
    pub const OPPORTUNITY_MARGIN: f64 = 0.3;
    /// PB faster than the prediction by more than this is an anomaly (s)
    pub const ANOMALY_MARGIN: f64 = 0.2;
    /// Endurance index assumed for scoring when untested
    pub const DEFAULT_ENDURANCE: f64 = 1.25;
    /// Reactivity assumed for scoring when untested (%)
    pub const DEFAULT_REACTIVITY: f64 = 5.0;
}

use thresholds::{
    ANOMALY_MARGIN, CONTACT_CHECK_SPEED, DEFAULT_ENDURANCE, DEFAULT_REACTIVITY,
    FORCE_DOMINANT_RATIO, HIGH_FATIGUE, HIGH_FORCE, HIGH_REACTIVITY, HIGH_VELOCITY_RESERVE,
    LONG_CONTACT_MS, LOW_FORCE, LOW_REACTIVITY, LOW_TOP_SPEED, LOW_VELOCITY_RESERVE,
    OPPORTUNITY_MARGIN, SHORT_CONTACT_MS, VELOCITY_DOMINANT_RATIO,
};

/// Athletic quality shown on the radar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    /// Acceleration, scored from tau
    Explosiveness,
    /// Maximal velocity
    TopSpeed,
    /// Speed endurance, scored from the endurance index
    Endurance,
    /// Stretch-shortening reactivity
    Reactivity,
    /// Relative maximal power
    Power,
}

impl Quality {
    /// Radar order
    pub const ALL: [Self; 5] = [
        Self::Explosiveness,
        Self::TopSpeed,
        Self::Endurance,
        Self::Reactivity,
        Self::Power,
    ];

    /// Raw value mapped to 0 and to 100, in that order
    const fn scale(self) -> (f64, f64) {
        match self {
            Self::Explosiveness => (1.5, 0.70),
            Self::TopSpeed => (7.0, 12.5),
            Self::Endurance => (1.35, 1.05),
            Self::Reactivity => (5.0, 25.0),
            Self::Power => (10.0, 45.0),
        }
    }
}

/// Map a raw value onto 0-100 for a quality, clamped at both ends
#[must_use]
pub fn normalize_quality(quality: Quality, value: f64) -> f64 {
    let (zero, full) = quality.scale();
    (100.0 * (value - zero) / (full - zero)).clamp(0.0, 100.0)
}

/// One radar point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    /// Quality scored
    pub quality: Quality,
    /// Score in [0, 100]
    pub score: f64,
    /// Whether the score rests on a default rather than a measurement
    pub missing: bool,
}

/// Athlete radar next to the category benchmark radar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    /// Athlete scores in [`Quality::ALL`] order
    pub athlete: Vec<QualityScore>,
    /// Benchmark scores in [`Quality::ALL`] order
    pub benchmark: Vec<QualityScore>,
}

/// Dominant side of the force-velocity profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FvOrientation {
    /// Strong first steps, early speed plateau
    ForceDominant,
    /// High speed ceiling, slow out of the blocks
    VelocityDominant,
    /// Force and speed in proportion
    Balanced,
}

impl FvOrientation {
    /// Training priority for this orientation
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::ForceDominant => {
                "Priority: flying sprints, overspeed and stride frequency work"
            }
            Self::VelocityDominant => {
                "Priority: maximal strength, heavy sled and initial power"
            }
            Self::Balanced => "Keep developing force and speed together to raise the overall level",
        }
    }
}

/// Force-velocity reading of a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FvProfile {
    /// Relative horizontal force
    pub force: f64,
    /// Top speed (m/s)
    pub top_speed: f64,
    /// Relative maximal power
    pub power: f64,
    /// Acceleration time constant (s)
    pub tau: f64,
    /// Athlete force over top speed
    pub ratio: f64,
    /// Benchmark force over benchmark theoretical velocity
    pub category_ratio: f64,
    /// Dominant side
    pub orientation: FvOrientation,
    /// Training priority
    pub advice: String,
}

/// Outcome of a benchmark target check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    /// Beyond the target
    Excellent,
    /// Within the target
    Good,
    /// Short of the target
    Bad,
}

/// One benchmark target check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetCheck {
    /// Quality checked
    pub quality: Quality,
    /// Athlete value
    pub value: f64,
    /// Target window `(low, high)`
    pub target: (f64, f64),
    /// Outcome
    pub status: TargetStatus,
}

/// Kind of prediction versus PB note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyKind {
    /// The model sees room below the current PB
    Opportunity,
    /// The PB beats what the model explains
    Anomaly,
}

/// Prediction versus PB note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyNote {
    /// Note kind
    pub kind: ConsistencyKind,
    /// PB minus prediction (s)
    pub difference: f64,
    /// Coach-facing message
    pub message: String,
}

/// Strengths, weaknesses and advice lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingAdvice {
    /// Training advice
    pub advice: Vec<String>,
    /// Strong points
    pub strengths: Vec<String>,
    /// Weak points
    pub weaknesses: Vec<String>,
}

/// Everything the diagnostics produce for one athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Radar scores
    pub qualities: QualityScores,
    /// Force-velocity reading
    pub fv_profile: FvProfile,
    /// Benchmark target checks
    pub targets: Vec<TargetCheck>,
    /// Advice lines
    pub advice: CoachingAdvice,
}

/// Coaching diagnostics against a reference registry
#[derive(Debug, Clone, Copy)]
pub struct CoachingAnalyzer<'a> {
    reference: &'a ReferenceData,
}

impl Default for CoachingAnalyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachingAnalyzer<'static> {
    /// Analyzer backed by the global registry
    #[must_use]
    pub fn new() -> Self {
        Self::with_reference(ReferenceData::global())
    }
}

impl<'a> CoachingAnalyzer<'a> {
    /// Analyzer backed by an injected registry
    #[must_use]
    pub const fn with_reference(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    fn benchmark(&self, gender: Gender, category: AgeCategory) -> &'a BenchmarkProfile {
        self.reference.benchmarks.get(gender, category)
    }

    /// Full diagnostics for a profile
    #[must_use]
    pub fn analyze(
        &self,
        profile: &AthleteProfile,
        metrics: &MetricsSet,
        gender: Gender,
        category: AgeCategory,
    ) -> Diagnostics {
        let diagnostics = Diagnostics {
            qualities: self.quality_scores(profile, metrics, gender, category),
            fv_profile: self.fv_profile(profile, gender, category),
            targets: self.target_checks(profile, gender, category),
            advice: generate_advice(profile, metrics, gender),
        };
        debug!(
            orientation = ?diagnostics.fv_profile.orientation,
            advice = diagnostics.advice.advice.len(),
            "diagnostics generated"
        );
        diagnostics
    }

    /// Athlete and benchmark radar scores
    #[must_use]
    pub fn quality_scores(
        &self,
        profile: &AthleteProfile,
        metrics: &MetricsSet,
        gender: Gender,
        category: AgeCategory,
    ) -> QualityScores {
        let fatigue = endurance_index(metrics);
        let reactivity = reactivity_index(metrics).filter(|value| *value > 0.0);

        let athlete = Quality::ALL
            .into_iter()
            .map(|quality| {
                let (value, missing) = match quality {
                    Quality::Explosiveness => (
                        profile.accel_time_constant,
                        !metrics.contains(TEST_30M_BLOCK) && !metrics.contains(PB_60M),
                    ),
                    Quality::TopSpeed => (
                        profile.top_speed,
                        !metrics.contains(TEST_30M_FLY) && !metrics.contains(TEST_20M_FLY),
                    ),
                    Quality::Endurance => (
                        if fatigue > 0.0 { fatigue } else { DEFAULT_ENDURANCE },
                        fatigue <= 0.0,
                    ),
                    Quality::Reactivity => (
                        reactivity.unwrap_or(DEFAULT_REACTIVITY),
                        reactivity.is_none(),
                    ),
                    Quality::Power => (profile.power_proxy, profile.accel_time_constant <= 0.0),
                };
                QualityScore {
                    quality,
                    score: normalize_quality(quality, value),
                    missing,
                }
            })
            .collect();

        let bench = self.benchmark(gender, category);
        let benchmark = Quality::ALL
            .into_iter()
            .map(|quality| {
                let value = match quality {
                    Quality::Explosiveness => bench.time_constant,
                    Quality::TopSpeed => bench.top_speed,
                    Quality::Endurance => bench.endurance,
                    Quality::Reactivity => bench.reactivity,
                    Quality::Power => bench.power,
                };
                QualityScore {
                    quality,
                    score: normalize_quality(quality, value),
                    missing: false,
                }
            })
            .collect();

        QualityScores { athlete, benchmark }
    }

    /// Force-velocity orientation, with the category ratio for reference
    #[must_use]
    pub fn fv_profile(
        &self,
        profile: &AthleteProfile,
        gender: Gender,
        category: AgeCategory,
    ) -> FvProfile {
        let bench = self.benchmark(gender, category);
        let ratio = profile.force_proxy / profile.top_speed;
        let orientation = if ratio > FORCE_DOMINANT_RATIO {
            FvOrientation::ForceDominant
        } else if ratio < VELOCITY_DOMINANT_RATIO {
            FvOrientation::VelocityDominant
        } else {
            FvOrientation::Balanced
        };
        FvProfile {
            force: profile.force_proxy,
            top_speed: profile.top_speed,
            power: profile.power_proxy,
            tau: profile.accel_time_constant,
            ratio,
            category_ratio: bench.force / bench.velocity_zero,
            orientation,
            advice: orientation.advice().to_owned(),
        }
    }

    /// Tau and power against the category benchmark
    #[must_use]
    pub fn target_checks(
        &self,
        profile: &AthleteProfile,
        gender: Gender,
        category: AgeCategory,
    ) -> Vec<TargetCheck> {
        let bench = self.benchmark(gender, category);
        let tau = profile.accel_time_constant;
        let tau_status = if tau < bench.time_constant - 0.02 {
            TargetStatus::Excellent
        } else if tau > bench.time_constant + 0.05 {
            TargetStatus::Bad
        } else {
            TargetStatus::Good
        };
        let power = profile.power_proxy;
        let power_status = if power > bench.power + 1.0 {
            TargetStatus::Excellent
        } else if power < bench.power - 2.0 {
            TargetStatus::Bad
        } else {
            TargetStatus::Good
        };
        vec![
            TargetCheck {
                quality: Quality::Explosiveness,
                value: tau,
                target: (bench.time_constant - 0.05, bench.time_constant + 0.05),
                status: tau_status,
            },
            TargetCheck {
                quality: Quality::Power,
                value: power,
                target: (bench.power - 2.0, bench.power + 2.0),
                status: power_status,
            },
        ]
    }
}

/// Compare a predicted time with the discipline PB
///
/// Returns nothing when there is no PB or the two agree.
#[must_use]
pub fn analyze_consistency(
    predicted_time: f64,
    discipline: &str,
    metrics: &MetricsSet,
) -> Vec<ConsistencyNote> {
    let Some(pb) = personal_best_key(discipline).and_then(|key| metrics.get(key)) else {
        return Vec::new();
    };
    let difference = pb - predicted_time;
    if difference > OPPORTUNITY_MARGIN {
        vec![ConsistencyNote {
            kind: ConsistencyKind::Opportunity,
            difference,
            message: "Theoretical potential is faster than the current record".to_owned(),
        }]
    } else if difference < -ANOMALY_MARGIN {
        vec![ConsistencyNote {
            kind: ConsistencyKind::Anomaly,
            difference,
            message: "Current record is faster than the physical prediction".to_owned(),
        }]
    } else {
        Vec::new()
    }
}

/// Ground contact time in milliseconds, accepting seconds or milliseconds
fn contact_time_ms(metrics: &MetricsSet) -> Option<f64> {
    let raw = metrics
        .get(CONTACT_TIME_R)
        .or_else(|| metrics.get(CONTACT_TIME_L))?;
    Some(if raw > 10.0 { raw } else { raw * 1000.0 })
}

/// Strengths, weaknesses and advice from the profile and raw metrics
#[must_use]
pub fn generate_advice(
    profile: &AthleteProfile,
    metrics: &MetricsSet,
    gender: Gender,
) -> CoachingAdvice {
    let mut out = CoachingAdvice::default();
    let top_speed = profile.top_speed;
    let force = profile.force_proxy;

    if force > HIGH_FORCE {
        out.strengths
            .push("Explosive profile: excellent initial horizontal force".to_owned());
        if top_speed < LOW_TOP_SPEED {
            out.advice.push(
                "Top speed focus: the profile is force dominant, favour flying sprints".to_owned(),
            );
        }
    } else if force < LOW_FORCE {
        out.weaknesses
            .push("Initial power deficit: limited horizontal projection".to_owned());
        out.advice.push(
            "Explosive strength: combine maximal strength with resisted starts".to_owned(),
        );
    }

    if let Some(pb) = metrics.get(PB_100M) {
        let reserve = top_speed / (100.0 / pb);
        if reserve > HIGH_VELOCITY_RESERVE {
            out.weaknesses
                .push("Top speed under-used: large gap between top speed and race time".to_owned());
            out.advice.push(
                "Speed endurance priority: add high-intensity 80-120 m repetitions".to_owned(),
            );
        } else if reserve < LOW_VELOCITY_RESERVE {
            out.strengths
                .push("Time efficiency: top speed is well exploited over the distance".to_owned());
            out.advice
                .push("Raise the ceiling: progress through absolute top speed".to_owned());
        }
    }

    if let Some(reactivity) = reactivity_index(metrics).filter(|value| *value > 0.0) {
        if reactivity < LOW_REACTIVITY {
            out.weaknesses
                .push("Reactivity deficit (slow stretch-shortening cycle)".to_owned());
            out.advice
                .push("Plyometrics: emphasise low-amplitude plyometric work".to_owned());
        } else if reactivity > HIGH_REACTIVITY {
            out.strengths
                .push("Superior elastic reactivity (fast stretch-shortening cycle)".to_owned());
        }
    }

    if let Some(contact) = contact_time_ms(metrics) {
        if contact > LONG_CONTACT_MS && top_speed > CONTACT_CHECK_SPEED {
            out.weaknesses
                .push("Long ground contacts: lacking vertical stiffness".to_owned());
            out.advice
                .push("Stiffness work: add pogo jumps and bounding".to_owned());
        } else if contact < SHORT_CONTACT_MS {
            out.strengths.push("Elite vertical stiffness".to_owned());
        }
    }

    if let Some(step_length) = metrics.get(STEP_LEN_AVG_R).filter(|_| top_speed > 0.0) {
        let frequency = top_speed / step_length;
        if frequency < 3.8 && gender == Gender::Male {
            out.advice
                .push("Frequency work: limb speed drills recommended".to_owned());
        } else if frequency > 4.8 {
            out.advice
                .push("Stride length work: develop horizontal push force".to_owned());
        } else if (4.0..=4.6).contains(&frequency) {
            out.strengths
                .push("Optimal frequency and stride length balance".to_owned());
        }
    }

    if endurance_index(metrics) > HIGH_FATIGUE {
        out.weaknesses.push("Early speed decay".to_owned());
        out.advice
            .push("Buffer capacity: add lactic tolerance sessions".to_owned());
    }

    out
}
