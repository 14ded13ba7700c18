// ABOUTME: Application configuration for the SprintLab binaries
// ABOUTME: Environment-driven settings layered over the reference-data registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing
pub mod environment;

pub use environment::{AppConfig, OutputFormat};
