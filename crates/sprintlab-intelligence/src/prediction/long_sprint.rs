// ABOUTME: 200 m and 400 m predictors built on the shorter event's time
// ABOUTME: Endurance-index pacing deltas, 400 m margins and synthetic split profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use sprintlab_core::models::{AgeCategory, Split};
use tracing::debug;

use super::{round_centis, ModelOutput, PredictionContext};
use crate::config::{FlatLongParams, LongSprintParams, PhysicsConfig};

/// Split with a derived average velocity and no stride estimate
fn synthetic_split(distance: f64, time: f64, segment_time: f64, segment_length: f64) -> Split {
    Split {
        distance,
        time,
        segment_time,
        velocity: segment_length / segment_time,
        step_frequency: None,
        step_length: None,
    }
}

/// Predict a 200 m from a 100 m baseline
///
/// `model_100m` supplies the modelled 100 m result whose 50 m split seeds
/// the first synthetic split.
pub(super) fn predict_200m(
    params: &FlatLongParams,
    t100: f64,
    model_100m: &ModelOutput,
    ctx: &PredictionContext<'_>,
) -> ModelOutput {
    let index = ctx.profile.endurance_index;
    let (delta, bias) = if index > params.speed_threshold {
        (params.speed_delta, "Speed-Biased")
    } else if index < params.endurance_threshold && index > 0.0 {
        (params.endurance_delta, "Endurance-Biased")
    } else {
        (params.neutral_delta, "Neutral")
    };
    let predicted = t100.mul_add(2.0, delta);

    let first_50 = model_100m
        .splits
        .iter()
        .find(|split| (split.distance - 50.0).abs() < 1e-6)
        .map_or_else(
            || {
                let time = t100 * params.first_quarter_share;
                synthetic_split(50.0, time, time, 50.0)
            },
            |split| Split {
                distance: 50.0,
                time: split.time,
                segment_time: split.time,
                velocity: split.velocity,
                step_frequency: None,
                step_length: None,
            },
        );
    let t50 = first_50.time;
    let third_quarter = (predicted - t100) * params.third_quarter_share;
    let t150 = t100 + third_quarter;

    let splits = vec![
        first_50,
        synthetic_split(100.0, t100, t100 - t50, 50.0),
        synthetic_split(150.0, t150, third_quarter, 50.0),
        synthetic_split(200.0, predicted, predicted - t150, 50.0),
    ];

    debug!(t100, delta, bias, predicted, "200m prediction");

    ModelOutput {
        time: round_centis(predicted),
        uncertainty_band: params.uncertainty_band,
        splits,
        method_tags: vec![bias.to_owned(), format!("Base 100m + Delta {delta}s")],
    }
}

/// Predict a 400 m from a 200 m baseline
pub(super) fn predict_400m(
    physics: &PhysicsConfig,
    params: &LongSprintParams,
    t200: f64,
    ctx: &PredictionContext<'_>,
) -> ModelOutput {
    let index = ctx.profile.endurance_index;
    let sprinter = index > params.sprinter_threshold;
    let margin = if sprinter {
        if ctx.category == AgeCategory::U16 {
            params.youth_sprinter_margin
        } else {
            params.sprinter_margin
        }
    } else if index < params.resistant_threshold && index > 0.0 {
        params.resistant_margin
    } else {
        params.default_margin
    };
    let predicted = t200.mul_add(2.0, margin);

    let mut pacing = physics.pacing_400m.value(ctx.category);
    if sprinter {
        pacing += physics.pacing_speed_bias;
    }
    let first_half = t200 + pacing;

    let splits = vec![
        synthetic_split(200.0, first_half, first_half, 200.0),
        synthetic_split(400.0, predicted, predicted - first_half, 200.0),
    ];

    debug!(t200, margin, first_half, predicted, "400m prediction");

    ModelOutput {
        time: round_centis(predicted),
        uncertainty_band: params.uncertainty_band,
        splits,
        method_tags: vec!["ASR Model".to_owned(), format!("Margin +{margin}s")],
    }
}
