// ABOUTME: Fixed-resolution split generation from the kinematic model
// ABOUTME: Scales model split times to a final prediction and estimates stride mechanics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use sprintlab_core::models::{AthleteProfile, Split};

use crate::algorithms::time_at_distance;
use crate::config::PhysicsConfig;

/// Splits every `resolution` metres up to `distance`
///
/// Model times (reaction included) are multiplied by `final_time / physics_time`
/// so the last split lands on the final prediction.
#[must_use]
pub fn generate_splits(
    physics: &PhysicsConfig,
    profile: &AthleteProfile,
    distance: f64,
    final_time: f64,
    physics_time: f64,
    base_step_length: f64,
) -> Vec<Split> {
    let scale = final_time / physics_time;
    let resolution = physics.split_resolution(distance);
    let count = (distance / resolution + 1e-9).floor() as u32;
    let mut previous = profile.reaction_time * scale;
    let mut splits = Vec::with_capacity(count as usize);

    for index in 1..=count {
        let split_distance = f64::from(index) * resolution;
        let time = (time_at_distance(
            split_distance,
            profile.top_speed,
            profile.accel_time_constant,
        ) + profile.reaction_time)
            * scale;
        let segment_time = time - previous;
        let velocity = resolution / segment_time;
        let step_length = physics.step_length(base_step_length, velocity, profile.top_speed);
        splits.push(Split {
            distance: split_distance,
            time,
            segment_time,
            velocity,
            step_frequency: Some(velocity / step_length),
            step_length: Some(step_length),
        });
        previous = time;
    }
    splits
}
