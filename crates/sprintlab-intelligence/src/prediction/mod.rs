// ABOUTME: Discipline predictor dispatching on the discipline type
// ABOUTME: PredictionEngine turns metrics and category into a time, splits and provenance tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Discipline Predictor
//!
//! One predictor per [`DisciplineKind`] variant, selected by pattern match:
//!
//! - `flat` (50/60/100 m): physics, fly-to-target and power-law blend
//! - `flat_long` (200 m): twice the 100 m time plus an endurance delta
//! - `long_sprint` (400 m): twice the 200 m time plus an endurance margin
//! - `hurdles`: flat physics plus an index-of-efficiency offset
//! - `hurdles_long` (400 mH): flat 400 m plus a gender differential
//!
//! Missing metrics never fail a prediction; the chosen path is recorded in
//! `method_tags`. Only an unknown discipline is an error.
//!
//! # Example
//!
//! ```rust
//! use sprintlab_core::models::{AgeCategory, Gender, MetricsSet};
//! use sprintlab_intelligence::config::ReferenceData;
//! use sprintlab_intelligence::prediction::PredictionEngine;
//!
//! let reference = ReferenceData::default();
//! let engine = PredictionEngine::with_reference(&reference);
//! let metrics = MetricsSet::new().with("test_30m_fly", 2.90);
//! let result = engine
//!     .predict_for(&metrics, Gender::Male, AgeCategory::Elite, "100m")
//!     .unwrap();
//! assert!((result.time - 10.78).abs() < 0.01);
//! ```

mod flat;
mod hurdles;
mod long_sprint;
mod splits;

pub use splits::generate_splits;

use sprintlab_core::constants::metric_keys::{personal_best_key, PB_100M, PB_200M};
use sprintlab_core::errors::{AppError, AppResult};
use sprintlab_core::models::{
    AgeCategory, Athlete, AthleteProfile, Gender, MetricsSet, PredictionResult, Split,
};
use tracing::debug;

use crate::config::{DisciplineId, DisciplineKind, ReferenceData};
use crate::profile::{measured_step_length, ProfileResolver};

/// Round to centiseconds, the precision results are published with
#[must_use]
pub fn round_centis(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

/// Inputs shared by every predictor for one call
pub(crate) struct PredictionContext<'m> {
    pub(crate) metrics: &'m MetricsSet,
    pub(crate) gender: Gender,
    pub(crate) category: AgeCategory,
    pub(crate) profile: &'m AthleteProfile,
    pub(crate) step_length: f64,
}

/// Output of one discipline model
pub(crate) struct ModelOutput {
    pub(crate) time: f64,
    pub(crate) uncertainty_band: f64,
    pub(crate) splits: Vec<Split>,
    pub(crate) method_tags: Vec<String>,
}

/// Race-time prediction engine
#[derive(Debug, Clone, Copy)]
pub struct PredictionEngine<'a> {
    reference: &'a ReferenceData,
    resolver: ProfileResolver<'a>,
}

impl Default for PredictionEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionEngine<'static> {
    /// Engine backed by the global registry
    #[must_use]
    pub fn new() -> Self {
        Self::with_reference(ReferenceData::global())
    }
}

impl<'a> PredictionEngine<'a> {
    /// Engine backed by an injected registry
    #[must_use]
    pub const fn with_reference(reference: &'a ReferenceData) -> Self {
        Self {
            reference,
            resolver: ProfileResolver::with_reference(reference),
        }
    }

    /// Registry this engine reads
    #[must_use]
    pub const fn reference(&self) -> &'a ReferenceData {
        self.reference
    }

    /// Predict for an athlete in the current season
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDiscipline` if `discipline` is not a known event
    pub fn predict(&self, athlete: &Athlete, discipline: &str) -> AppResult<PredictionResult> {
        self.predict_for(
            &athlete.metrics,
            athlete.gender,
            athlete.category(),
            discipline,
        )
    }

    /// Predict from raw inputs with the discipline given as a string
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDiscipline` if `discipline` is not a known event
    pub fn predict_for(
        &self,
        metrics: &MetricsSet,
        gender: Gender,
        category: AgeCategory,
        discipline: &str,
    ) -> AppResult<PredictionResult> {
        self.predict_discipline(metrics, gender, category, discipline.parse()?)
    }

    /// Predict from raw inputs
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDiscipline` if the registry has no entry for `discipline`
    /// or for an event its model builds on, and a config error if that event has
    /// the wrong discipline type
    pub fn predict_discipline(
        &self,
        metrics: &MetricsSet,
        gender: Gender,
        category: AgeCategory,
        discipline: DisciplineId,
    ) -> AppResult<PredictionResult> {
        let profile = self.resolver.resolve(metrics, gender, category);
        let ctx = PredictionContext {
            metrics,
            gender,
            category,
            profile: &profile,
            step_length: measured_step_length(metrics)
                .unwrap_or(self.reference.physics.default_step_length),
        };
        let output = self.run_model(discipline, &ctx)?;
        debug!(
            %discipline,
            time = output.time,
            tags = ?output.method_tags,
            "prediction complete"
        );

        Ok(PredictionResult {
            discipline: discipline.as_str().to_owned(),
            time: output.time,
            uncertainty_band: output.uncertainty_band,
            splits: output.splits,
            method_tags: output.method_tags,
            sources: profile.sources.clone(),
            warnings: profile.warnings.clone(),
            profile,
        })
    }

    fn run_model(&self, id: DisciplineId, ctx: &PredictionContext<'_>) -> AppResult<ModelOutput> {
        let config = self.reference.discipline(id)?;
        let physics = &self.reference.physics;
        let output = match &config.kind {
            DisciplineKind::Flat(params) => {
                let personal_best =
                    personal_best_key(id.as_str()).and_then(|key| ctx.metrics.get(key));
                flat::predict(physics, params, config.distance, personal_best, ctx)
            }
            DisciplineKind::FlatLong(params) => {
                let model_100m = self.run_base_model(DisciplineId::Sprint100, "flat", ctx)?;
                let t100 = ctx.metrics.get(PB_100M).unwrap_or(model_100m.time);
                long_sprint::predict_200m(params, t100, &model_100m, ctx)
            }
            DisciplineKind::LongSprint(params) => {
                let t200 = match ctx.metrics.get(PB_200M) {
                    Some(pb) => pb,
                    None => {
                        self.run_base_model(DisciplineId::Sprint200, "flat_long", ctx)?
                            .time
                    }
                };
                long_sprint::predict_400m(physics, params, t200, ctx)
            }
            DisciplineKind::Hurdles(params) => {
                hurdles::predict_short(physics, params, config.distance, ctx)
            }
            DisciplineKind::HurdlesLong(params) => {
                let flat_400m = self.run_base_model(DisciplineId::Sprint400, "long_sprint", ctx)?;
                hurdles::predict_long(params, flat_400m, ctx)
            }
        };
        Ok(output)
    }

    /// Run the model another discipline builds on
    ///
    /// Fails with a config error when `id` is not configured as `kind`.
    fn run_base_model(
        &self,
        id: DisciplineId,
        kind: &str,
        ctx: &PredictionContext<'_>,
    ) -> AppResult<ModelOutput> {
        let actual = self.reference.discipline(id)?.kind.name();
        if actual != kind {
            return Err(AppError::config(format!(
                "{id} is configured as {actual}, expected {kind}"
            )));
        }
        self.run_model(id, ctx)
    }
}
