// ABOUTME: Configuration error types for reference-data validation
// ABOUTME: Defines error variants for invalid ranges, parse failures and env access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for reference-data validation.

use std::env;

use sprintlab_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Bounds that must be ordered are not
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A table entry the engine depends on is absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                ErrorCode::ConfigInvalid
            }
            _ => ErrorCode::ConfigError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
