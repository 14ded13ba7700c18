// ABOUTME: Configuration for the sprint intelligence engine
// ABOUTME: Re-exports the read-only reference-data registry and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Reference tables: physics constants, benchmarks, disciplines, hurdle courses
pub mod reference;

pub use reference::{
    BenchmarkProfile, BenchmarkTable, ByCategory, ByGender, ConfigError, DisciplineConfig,
    DisciplineId, DisciplineKind, FlatLongParams, FlatParams, FlyModel, HurdleCourse, HurdleParams,
    HurdleSpec, HurdlesLongParams, IeTargets, LongSprintParams, PhysicsConfig, PlausibilityLimits,
    ReferenceData, WindowDifferential,
};
