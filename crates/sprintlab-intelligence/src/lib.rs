// ABOUTME: Sprint intelligence engine for SprintLab
// ABOUTME: Kinematic solver, profile resolution, race-time prediction and race segment analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # SprintLab Intelligence
//!
//! Numeric models on top of `sprintlab-core`:
//!
//! - **algorithms**: exponential velocity model and its Newton-Raphson solvers
//! - **config**: read-only reference-data registry
//! - **profile**: derives an athlete profile from sparse metrics
//! - **diagnostics**: coaching scores, force-velocity reading and advice
//! - **prediction**: per-discipline race-time predictors with split generation
//! - **race**: recorded races and interval resolution
//! - **`virtual_best`**: best-of composites across races and prediction projection
//!
//! Every operation is a pure function of its inputs and the registry it was
//! handed, so engines can be shared freely across threads.

/// Kinematic model and solvers
pub mod algorithms;

/// Reference-data registry
pub mod config;

/// Athlete profile resolution
pub mod profile;

/// Coaching diagnostics
pub mod diagnostics;

/// Race-time prediction
pub mod prediction;

/// Recorded race segment engine
pub mod race;

/// Virtual-best aggregation and projection
pub mod virtual_best;

pub use config::{DisciplineId, ReferenceData};
pub use diagnostics::{analyze_consistency, CoachingAnalyzer, Diagnostics};
pub use prediction::PredictionEngine;
pub use profile::ProfileResolver;
pub use race::Race;
pub use virtual_best::{
    atomic_segments, calculate_virtual_best, project_prediction_to_segments, VirtualBest,
};
