// ABOUTME: Main library entry point for SprintLab sprint analysis
// ABOUTME: Re-exports the core and intelligence crates plus logging and environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # SprintLab
//!
//! Sprint race-time prediction and race segment analysis.
//!
//! Given an athlete's sparse test metrics, gender and age category, the
//! prediction engine estimates race times and split profiles for the flat and
//! hurdle sprint events. Recorded races are broken into primitive segments,
//! hurdle legs and custom intervals, and several races of one event combine
//! into a virtual best.
//!
//! ## Example
//!
//! ```rust
//! use sprintlab::intelligence::{PredictionEngine, ReferenceData};
//! use sprintlab::models::{AgeCategory, Gender, MetricsSet};
//!
//! let reference = ReferenceData::default();
//! let engine = PredictionEngine::with_reference(&reference);
//! let metrics = MetricsSet::new().with("pb_100m", 10.50);
//! let result = engine
//!     .predict_for(&metrics, Gender::Male, AgeCategory::Elite, "200m")
//!     .unwrap();
//! assert!((result.time - 20.90).abs() < 1e-9);
//! ```

/// Unified error handling
pub use sprintlab_core::errors;

/// Metric keys and tolerances
pub use sprintlab_core::constants;

/// Athlete, metrics, race and prediction value objects
pub use sprintlab_core::models;

/// Race time formatting
pub use sprintlab_core::formatters;

/// Prediction, race segment and virtual-best engines
pub use sprintlab_intelligence as intelligence;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;
