// ABOUTME: Read-only reference-data registry for the sprint intelligence engine
// ABOUTME: Orchestrates physics, benchmark and discipline tables with env overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference Data Module
//!
//! Static tables consumed by the profile resolver, the predictors and the race
//! engine. The registry is resolved once and passed by reference to every
//! engine; nothing mutates it after construction.
//!
//! # Module Structure
//!
//! - `physics` - reaction times, top-speed coefficients, split resolution, pacing
//! - `benchmarks` - fallback athlete profiles per gender and age category
//! - `disciplines` - discipline table with per-type tuning parameters
//! - `hurdles` - hurdle course geometry
//! - `tables` - category and gender keyed containers

pub mod benchmarks;
pub mod disciplines;
pub mod error;
pub mod hurdles;
pub mod physics;
pub mod tables;

pub use benchmarks::{BenchmarkProfile, BenchmarkTable};
pub use disciplines::{
    default_disciplines, DisciplineConfig, DisciplineId, DisciplineKind, FlatLongParams,
    FlatParams, FlyModel, HurdleParams, HurdlesLongParams, IeTargets, LongSprintParams,
    WindowDifferential,
};
pub use error::ConfigError;
pub use hurdles::{HurdleCourse, HurdleSpec};
pub use physics::{PhysicsConfig, PlausibilityLimits};
pub use tables::{ByCategory, ByGender};

use std::collections::BTreeMap;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use sprintlab_core::errors::{AppError, AppResult};
use sprintlab_core::models::AgeCategory;
use tracing::{debug, warn};

/// Global registry singleton
static REFERENCE_DATA: OnceLock<ReferenceData> = OnceLock::new();

/// Main reference-data container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Physics constants
    pub physics: PhysicsConfig,
    /// Fallback athlete profiles
    pub benchmarks: BenchmarkTable,
    /// Discipline table
    pub disciplines: BTreeMap<DisciplineId, DisciplineConfig>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            benchmarks: BenchmarkTable::default(),
            disciplines: default_disciplines()
                .into_iter()
                .map(|config| (config.id, config))
                .collect(),
        }
    }
}

impl ReferenceData {
    /// Get the process-wide registry, loading it on first use
    ///
    /// Falls back to the built-in tables when the environment holds invalid
    /// overrides.
    pub fn global() -> &'static Self {
        REFERENCE_DATA.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load reference data: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Built-in tables with environment overrides applied, then validated
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            disciplines = config.disciplines.len(),
            "reference data loaded"
        );
        Ok(config)
    }

    /// Parse a full registry from JSON and validate it
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the tables are inconsistent
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration of a discipline
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDiscipline` if the registry has no entry for `id`
    pub fn discipline(&self, id: DisciplineId) -> AppResult<&DisciplineConfig> {
        self.disciplines
            .get(&id)
            .ok_or_else(|| AppError::unsupported_discipline(id.as_str()))
    }

    /// Configuration of a discipline given its identifier string
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDiscipline` for unknown identifiers
    pub fn discipline_by_name(&self, name: &str) -> AppResult<&DisciplineConfig> {
        self.discipline(name.parse()?)
    }

    /// Validate table consistency
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_physics()?;
        self.validate_benchmarks()?;
        self.validate_disciplines()
    }

    fn validate_physics(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        for reaction in [physics.reaction_time_official, physics.reaction_time_youth] {
            if !(0.0..0.5).contains(&reaction) {
                return Err(ConfigError::ValueOutOfRange(
                    "Reaction times must be within [0, 0.5) seconds",
                ));
            }
        }
        if physics.split_resolution_short <= 0.0 || physics.split_resolution_long <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Split resolutions must be positive",
            ));
        }
        if physics.split_resolution_short > physics.split_resolution_long {
            return Err(ConfigError::InvalidRange(
                "Short split resolution must not exceed the long resolution",
            ));
        }
        if physics.default_step_length <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default step length must be positive",
            ));
        }
        if physics.top_speed_from_pb.iter().any(|(_, c)| *c <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Top-speed coefficients must be positive",
            ));
        }
        Ok(())
    }

    fn validate_benchmarks(&self) -> Result<(), ConfigError> {
        let tables = [&self.benchmarks.0.male, &self.benchmarks.0.female];
        for (_, profile) in tables.into_iter().flat_map(ByCategory::iter) {
            if profile.top_speed <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Benchmark top speeds must be positive",
                ));
            }
            if !(0.5..=2.5).contains(&profile.time_constant) {
                return Err(ConfigError::ValueOutOfRange(
                    "Benchmark time constants must be within [0.5, 2.5]",
                ));
            }
        }
        Ok(())
    }

    fn validate_disciplines(&self) -> Result<(), ConfigError> {
        for config in self.disciplines.values() {
            if config.distance <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Discipline distances must be positive",
                ));
            }
            match &config.kind {
                DisciplineKind::Flat(params) => {
                    if !(0.0..=1.0).contains(&params.fly_blend_weight) {
                        return Err(ConfigError::ValueOutOfRange(
                            "Fly blend weight must be within [0, 1]",
                        ));
                    }
                }
                DisciplineKind::FlatLong(params) => {
                    if params.endurance_threshold > params.speed_threshold {
                        return Err(ConfigError::InvalidRange(
                            "200m endurance threshold must not exceed the speed threshold",
                        ));
                    }
                    self.require(DisciplineId::Sprint100, "flat", "200m model needs a flat 100m discipline")?;
                }
                DisciplineKind::LongSprint(params) => {
                    if params.resistant_threshold > params.sprinter_threshold {
                        return Err(ConfigError::InvalidRange(
                            "400m resistant threshold must not exceed the sprinter threshold",
                        ));
                    }
                    self.require(
                        DisciplineId::Sprint200,
                        "flat_long",
                        "400m model needs a flat_long 200m discipline",
                    )?;
                }
                DisciplineKind::Hurdles(params) => {
                    if params.hurdle_count == 0 {
                        return Err(ConfigError::ValueOutOfRange(
                            "Hurdle events need at least one hurdle",
                        ));
                    }
                }
                DisciplineKind::HurdlesLong(_) => {
                    self.require(
                        DisciplineId::Sprint400,
                        "long_sprint",
                        "400mH model needs a long_sprint 400m discipline",
                    )?;
                }
            }
        }
        Ok(())
    }

    /// A model builds on `id`, which must exist with the `kind` it recurses into
    fn require(
        &self,
        id: DisciplineId,
        kind: &str,
        message: &'static str,
    ) -> Result<(), ConfigError> {
        match self.disciplines.get(&id) {
            Some(config) if config.kind.name() == kind => Ok(()),
            Some(_) => Err(ConfigError::InvalidRange(message)),
            None => Err(ConfigError::MissingField(message)),
        }
    }

    /// Parse an environment variable into `target` when it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply `SPRINTLAB_*` environment overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let physics = &mut self.physics;
        Self::apply_env_var(
            "SPRINTLAB_REACTION_TIME_OFFICIAL",
            &mut physics.reaction_time_official,
        )?;
        Self::apply_env_var(
            "SPRINTLAB_REACTION_TIME_YOUTH",
            &mut physics.reaction_time_youth,
        )?;
        Self::apply_env_var("SPRINTLAB_ACCEL_BONUS", &mut physics.accel_bonus)?;
        Self::apply_env_var(
            "SPRINTLAB_DEFAULT_STEP_LENGTH",
            &mut physics.default_step_length,
        )?;
        Self::apply_env_var(
            "SPRINTLAB_SPLIT_RESOLUTION_SHORT",
            &mut physics.split_resolution_short,
        )?;
        Self::apply_env_var(
            "SPRINTLAB_SPLIT_RESOLUTION_LONG",
            &mut physics.split_resolution_long,
        )?;
        Ok(self)
    }

    /// Reaction time for a category
    #[must_use]
    pub const fn reaction_time(&self, category: AgeCategory) -> f64 {
        self.physics.reaction_time(category)
    }
}
