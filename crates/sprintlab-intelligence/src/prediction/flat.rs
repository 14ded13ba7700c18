// ABOUTME: Short flat sprint predictor (50, 60 and 100 m)
// ABOUTME: Blends physics, fly-to-target and power-law estimates with a PB sanity check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use sprintlab_core::constants::metric_keys::{PB_60M, TEST_20M_FLY, TEST_30M_BLOCK, TEST_30M_FLY};
use tracing::debug;

use super::splits::generate_splits;
use super::{round_centis, ModelOutput, PredictionContext};
use crate::algorithms::time_at_distance;
use crate::config::{FlatParams, PhysicsConfig};

/// Race time from the kinematic model, reaction included
pub(super) fn physics_time(ctx: &PredictionContext<'_>, distance: f64) -> f64 {
    let profile = ctx.profile;
    time_at_distance(distance, profile.top_speed, profile.accel_time_constant)
        + profile.reaction_time
}

fn fly_estimate(
    ctx: &PredictionContext<'_>,
    params: &FlatParams,
    distance: f64,
) -> Option<(f64, String)> {
    let model = params.fly_model.as_ref()?;
    let k = model.k_factor(ctx.gender, ctx.category);
    if let Some(fly) = ctx.metrics.get(TEST_30M_FLY) {
        return Some((
            fly.mul_add(model.fly30_ratio, model.base_start_cost + k),
            format!("Fly-to-{distance} (K={k}s)"),
        ));
    }
    ctx.metrics.get(TEST_20M_FLY).map(|fly| {
        (
            fly.mul_add(model.fly20_ratio, model.base_start_cost + k),
            format!("Fly-to-{distance} (20m)"),
        )
    })
}

fn power_law_estimate(ctx: &PredictionContext<'_>, params: &FlatParams) -> Option<f64> {
    let ratio = params.power_law_ratio?;
    let t60 = ctx
        .metrics
        .get(PB_60M)
        .unwrap_or_else(|| physics_time(ctx, 60.0));
    Some(t60 * ratio)
}

/// Predict a short flat sprint
///
/// Precedence: fly estimate (optionally blended with the power law and
/// reduced by the accel bonus), else power law, else physics. A personal
/// best more than `pb_blend_margin` faster than the result is averaged in.
pub(super) fn predict(
    physics: &PhysicsConfig,
    params: &FlatParams,
    distance: f64,
    personal_best: Option<f64>,
    ctx: &PredictionContext<'_>,
) -> ModelOutput {
    let physics_estimate = physics_time(ctx, distance);
    let power_law = power_law_estimate(ctx, params);

    let fly = fly_estimate(ctx, params, distance);
    let (mut time, mut method) = if let Some((fly, mut method)) = fly {
        let mut time = fly;
        if let Some(power) = power_law.filter(|power| power - fly > params.power_law_blend_gap) {
            time = fly.mul_add(
                params.fly_blend_weight,
                power * (1.0 - params.fly_blend_weight),
            );
            method.push_str(" + Power-law correction");
        }
        let bonus_applies = params
            .accel_bonus_threshold
            .zip(ctx.metrics.get(TEST_30M_BLOCK))
            .is_some_and(|(threshold, block)| block < threshold);
        if bonus_applies {
            time -= physics.accel_bonus;
            method.push_str(" + Accel bonus");
        }
        (time, method)
    } else if let Some(power) = power_law {
        (power, "Power Law".to_owned())
    } else {
        (physics_estimate, "Physics Model".to_owned())
    };

    if let Some(pb) = personal_best.filter(|pb| time - pb > params.pb_blend_margin) {
        debug!(pb, estimate = time, "personal best averaged into estimate");
        time = (time + pb) / 2.0;
        method = "Average (Potential vs Achieved)".to_owned();
    }

    debug!(distance, time, physics_estimate, %method, "flat prediction");

    let splits = generate_splits(
        physics,
        ctx.profile,
        distance,
        time,
        physics_estimate,
        ctx.step_length,
    );

    ModelOutput {
        time: round_centis(time),
        uncertainty_band: params.uncertainty_band,
        splits,
        method_tags: vec![method],
    }
}
