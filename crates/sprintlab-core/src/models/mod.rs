// ABOUTME: Core data models for athletes, metrics, race milestones and predictions
// ABOUTME: Value objects shared between the algorithm crate, the CLI and persistence layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain serializable value objects. Anything derived (profiles, intervals,
//! predictions) is produced per call and owned by the caller; nothing here is
//! cached or shared.

mod athlete;
mod metrics;
mod prediction;
mod segment;

pub use athlete::{AgeCategory, Athlete, Gender};
pub use metrics::MetricsSet;
pub use prediction::{AthleteProfile, PredictionResult, Split};
pub use segment::{Interval, IntervalWindow, Milestone, MilestoneKind, SegmentMetric};
