// ABOUTME: Command implementations for the SprintLab CLI
// ABOUTME: Shared input loading, metric parsing and athlete selection helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod disciplines;
pub mod predict;
pub mod race;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use sprintlab::config::AppConfig;
use sprintlab::models::{AgeCategory, Athlete, Gender, MetricsSet};
use tracing::debug;

use crate::AthleteArgs;

/// Parse a `key=value` metric argument
pub fn parse_metric(raw: &str) -> Result<(String, f64), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid number in '{raw}'"))?;
    Ok((key.trim().to_owned(), value))
}

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Gender, category and metrics chosen on the command line
pub struct Selection {
    pub gender: Gender,
    pub category: AgeCategory,
    pub metrics: MetricsSet,
}

impl Selection {
    /// Resolve the selection, `None` when no gender can be determined
    ///
    /// Explicit flags win over the athlete file. The category comes from
    /// `--category`, else the birth year in the reference season, else ELITE.
    pub fn resolve(config: &AppConfig, args: &AthleteArgs) -> Result<Option<Self>> {
        let athlete = args
            .athlete
            .as_deref()
            .map(read_json::<Athlete>)
            .transpose()?;
        let Some(gender) = args.gender.or_else(|| athlete.as_ref().map(|a| a.gender)) else {
            return Ok(None);
        };
        let birth_year = args
            .birth_year
            .or_else(|| athlete.as_ref().map(|a| a.birth_year));
        let category = args
            .category
            .or_else(|| birth_year.map(|year| config.category_of(&Athlete::new("", year, gender))))
            .unwrap_or(AgeCategory::Elite);
        let metrics = athlete.map(|a| a.metrics).unwrap_or_default();
        debug!(%gender, %category, metrics = metrics.len(), "athlete selection resolved");
        Ok(Some(Self {
            gender,
            category,
            metrics,
        }))
    }

    /// Resolve the selection, failing when no gender is given
    pub fn require(config: &AppConfig, args: &AthleteArgs) -> Result<Self> {
        match Self::resolve(config, args)? {
            Some(selection) => Ok(selection),
            None => bail!("Provide --gender or an --athlete file"),
        }
    }

    /// Resolve the selection, defaulting to an elite male
    pub fn or_default(config: &AppConfig, args: &AthleteArgs) -> Result<Self> {
        Ok(Self::resolve(config, args)?.unwrap_or(Self {
            gender: Gender::Male,
            category: AgeCategory::Elite,
            metrics: MetricsSet::new(),
        }))
    }
}
