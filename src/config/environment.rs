// ABOUTME: Environment configuration for SprintLab runs
// ABOUTME: Parses output format and reference season year from SPRINTLAB_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sprintlab_core::errors::AppError;
use sprintlab_core::models::{AgeCategory, Athlete};
use tracing::debug;

use crate::logging::LoggingConfig;

/// Environment variable fixing the season used for age categories
pub const REFERENCE_YEAR_VAR: &str = "SPRINTLAB_REFERENCE_YEAR";

/// Environment variable selecting the output format
pub const OUTPUT_VAR: &str = "SPRINTLAB_OUTPUT";

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Serialize a value in this format
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized
    pub fn render<T: Serialize>(self, value: &T) -> serde_json::Result<String> {
        match self {
            Self::Json => serde_json::to_string(value),
            Self::Pretty => serde_json::to_string_pretty(value),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format '{other}', expected json or pretty"
            ))),
        }
    }
}

/// Settings read once at startup
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Logging setup
    pub logging: LoggingConfig,
    /// Season used to derive age categories, current year when unset
    pub reference_year: Option<i32>,
    /// Output format for command results
    pub output: OutputFormat,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `SPRINTLAB_REFERENCE_YEAR` or `SPRINTLAB_OUTPUT` is malformed
    pub fn from_env() -> Result<Self> {
        let reference_year = env::var(REFERENCE_YEAR_VAR)
            .ok()
            .map(|year| {
                year.trim()
                    .parse::<i32>()
                    .with_context(|| format!("Invalid {REFERENCE_YEAR_VAR}: {year}"))
            })
            .transpose()?;

        let output = env::var(OUTPUT_VAR)
            .ok()
            .map(|value| value.parse::<OutputFormat>())
            .transpose()
            .with_context(|| format!("Invalid {OUTPUT_VAR}"))?
            .unwrap_or_default();

        let config = Self {
            logging: LoggingConfig::from_env(),
            reference_year,
            output,
        };
        debug!(?config.reference_year, %config.output, "application config loaded");
        Ok(config)
    }

    /// Age category of an athlete in the configured season
    #[must_use]
    pub fn category_of(&self, athlete: &Athlete) -> AgeCategory {
        self.reference_year
            .map_or_else(|| athlete.category(), |year| athlete.category_in(year))
    }
}
