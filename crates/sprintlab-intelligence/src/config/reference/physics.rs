// ABOUTME: Physics constants for the sprint-velocity model and split generation
// ABOUTME: Reaction times, top-speed estimation coefficients, pacing and plausibility limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physics constants for the sprint-velocity model

use serde::{Deserialize, Serialize};
use sprintlab_core::models::AgeCategory;

use super::ByCategory;

/// Reaction time defaults (s)
mod reaction_defaults {
    /// Senior and junior start latency
    pub const OFFICIAL: f64 = 0.15;
    /// U16 and U18 start latency
    pub const YOUTH: f64 = 0.16;
}

/// Stride model defaults
mod stride_defaults {
    /// Step length used when no measurement exists (m)
    pub const DEFAULT_STEP_LENGTH: f64 = 2.0;
    /// Share of the step length independent of speed
    pub const BASE_SHARE: f64 = 0.85;
    /// Share of the step length that scales with relative speed
    pub const SPEED_SHARE: f64 = 0.15;
}

/// Split sequence resolution
mod split_defaults {
    /// Spacing for events up to the cutoff (m)
    pub const RESOLUTION_SHORT: f64 = 5.0;
    /// Spacing for longer events (m)
    pub const RESOLUTION_LONG: f64 = 10.0;
    /// Longest event using the short spacing (m)
    pub const RESOLUTION_CUTOFF: f64 = 110.0;
}

/// Physics constants consumed by the profile resolver and predictors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Start latency for U20 and older (s)
    pub reaction_time_official: f64,
    /// Start latency for U16 and U18 (s)
    pub reaction_time_youth: f64,
    /// 100 m PB speed multiplier estimating top speed
    pub top_speed_from_pb: ByCategory<f64>,
    /// Time removed when a 30 m block test beats the discipline threshold (s)
    pub accel_bonus: f64,
    /// Step length without measurement (m)
    pub default_step_length: f64,
    /// Speed-independent share of the modelled step length
    pub stride_base_share: f64,
    /// Speed-dependent share of the modelled step length
    pub stride_speed_share: f64,
    /// Split spacing up to `split_resolution_cutoff` (m)
    pub split_resolution_short: f64,
    /// Split spacing beyond `split_resolution_cutoff` (m)
    pub split_resolution_long: f64,
    /// Longest distance using the short spacing (m)
    pub split_resolution_cutoff: f64,
    /// 400 m first-half pacing cost over the 200 m time (s)
    pub pacing_400m: ByCategory<f64>,
    /// Extra first-half pacing for strongly speed-biased profiles (s)
    pub pacing_speed_bias: f64,
    /// Thresholds for profile warnings
    pub plausibility: PlausibilityLimits,
}

impl PhysicsConfig {
    /// Fixed reaction time for a category
    #[must_use]
    pub const fn reaction_time(&self, category: AgeCategory) -> f64 {
        if category.is_youth() {
            self.reaction_time_youth
        } else {
            self.reaction_time_official
        }
    }

    /// Split spacing for an event distance
    #[must_use]
    pub fn split_resolution(&self, distance: f64) -> f64 {
        if distance <= self.split_resolution_cutoff {
            self.split_resolution_short
        } else {
            self.split_resolution_long
        }
    }

    /// Modelled step length at `velocity`
    #[must_use]
    pub fn step_length(&self, base_step_length: f64, velocity: f64, top_speed: f64) -> f64 {
        base_step_length * self.stride_speed_share.mul_add(velocity / top_speed, self.stride_base_share)
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            reaction_time_official: reaction_defaults::OFFICIAL,
            reaction_time_youth: reaction_defaults::YOUTH,
            top_speed_from_pb: ByCategory {
                u16: 1.18,
                u18: 1.16,
                u20: 1.16,
                u23: 1.14,
                elite: 1.14,
            },
            accel_bonus: 0.15,
            default_step_length: stride_defaults::DEFAULT_STEP_LENGTH,
            stride_base_share: stride_defaults::BASE_SHARE,
            stride_speed_share: stride_defaults::SPEED_SHARE,
            split_resolution_short: split_defaults::RESOLUTION_SHORT,
            split_resolution_long: split_defaults::RESOLUTION_LONG,
            split_resolution_cutoff: split_defaults::RESOLUTION_CUTOFF,
            pacing_400m: ByCategory {
                u16: 3.0,
                u18: 2.0,
                u20: 1.5,
                u23: 1.5,
                elite: 1.5,
            },
            pacing_speed_bias: 0.3,
            plausibility: PlausibilityLimits::default(),
        }
    }
}

/// Limits beyond which a profile gets a warning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlausibilityLimits {
    /// Top speed near the human ceiling (m/s)
    pub top_speed_ceiling: f64,
    /// Smallest believable time constant (s)
    pub min_time_constant: f64,
    /// Force proxy considered high
    pub high_force: f64,
    /// Top speed considered low for a high force proxy (m/s)
    pub low_top_speed: f64,
}

impl Default for PlausibilityLimits {
    fn default() -> Self {
        Self {
            top_speed_ceiling: 12.6,
            min_time_constant: 0.70,
            high_force: 13.5,
            low_top_speed: 9.5,
        }
    }
}
