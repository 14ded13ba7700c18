// ABOUTME: Hurdle predictors: short hurdles via technique index, 400 m hurdles via differential
// ABOUTME: Both reuse the flat-event models and copy their split profiles unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use sprintlab_core::models::{AgeCategory, Split};
use tracing::debug;

use super::flat::physics_time;
use super::splits::generate_splits;
use super::{round_centis, ModelOutput, PredictionContext};
use crate::config::{HurdleParams, HurdlesLongParams, PhysicsConfig};

/// Flat physics time at the hurdle distance plus the index-of-efficiency offset
pub(super) fn predict_short(
    physics: &PhysicsConfig,
    params: &HurdleParams,
    distance: f64,
    ctx: &PredictionContext<'_>,
) -> ModelOutput {
    let flat_time = physics_time(ctx, distance);
    let splits: Vec<Split> = generate_splits(
        physics,
        ctx.profile,
        distance,
        flat_time,
        flat_time,
        ctx.step_length,
    );
    let ie = params.ie_target.select(ctx.gender, ctx.category);
    let time = round_centis(flat_time) + ie;

    debug!(distance, flat_time, ie, "short hurdles prediction");

    ModelOutput {
        time: round_centis(time),
        uncertainty_band: params.uncertainty_band,
        splits,
        method_tags: vec!["Technique Index".to_owned(), format!("IE Target: +{ie}s")],
    }
}

/// Flat 400 m prediction plus the gender differential
pub(super) fn predict_long(
    params: &HurdlesLongParams,
    flat_400m: ModelOutput,
    ctx: &PredictionContext<'_>,
) -> ModelOutput {
    let mut differential = *params.differential.get(ctx.gender);
    if ctx.category == AgeCategory::U18 {
        differential += params.u18_bonus;
    }
    let time = flat_400m.time + differential;

    debug!(t400 = flat_400m.time, differential, "400m hurdles prediction");

    ModelOutput {
        time: round_centis(time),
        uncertainty_band: params.uncertainty_band,
        splits: flat_400m.splits,
        method_tags: vec![
            "400mH Differential".to_owned(),
            format!("T400 + {differential}s"),
        ],
    }
}
