// ABOUTME: Core types and constants for the SprintLab sprint analysis platform
// ABOUTME: Foundation crate with error handling, athlete and race value objects, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # SprintLab Core
//!
//! Foundation crate providing shared types and constants for sprint race-time
//! prediction and race segment analysis. It carries no algorithms; the numeric
//! models live in `sprintlab-intelligence`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Metric keys, interval tolerances and split resolution
//! - **models**: Athlete, metrics, milestone, interval and prediction value objects
//! - **formatters**: Human-readable race time rendering

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Athlete, `MetricsSet`, Milestone, Interval, `PredictionResult`)
pub mod models;

/// Race time formatting helpers
pub mod formatters;
