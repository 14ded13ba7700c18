// ABOUTME: Exponential sprint-velocity model with Newton-Raphson root finding
// ABOUTME: Time at a distance (forward) and acceleration time constant (inverse) solvers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Kinematic Solver
//!
//! Velocity follows `v(t) = v_max * (1 - exp(-t / tau))`, so covered distance is
//! `d(t) = v_max * (t + tau * exp(-t / tau) - tau)`.
//!
//! Both solvers run a capped Newton-Raphson iteration. The public helpers
//! return the last iterate even when the cap is reached; the `RootSolution`
//! variants expose the convergence flag for tests and diagnostics.

use serde::{Deserialize, Serialize};
use sprintlab_core::constants::solver::{
    ACCEL_UPDATE_TOLERANCE, INITIAL_SPEED_FRACTION, INITIAL_TIME_CONSTANT, MAX_ITERATIONS,
    MAX_TIME_CONSTANT, MIN_TIME_CONSTANT, TIME_RESIDUAL_TOLERANCE,
};
use tracing::trace;

/// Newton-Raphson stopping rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Residual (forward) or update (inverse) tolerance
    pub tolerance: f64,
    /// Hard iteration cap
    pub max_iterations: u32,
}

impl SolverSettings {
    /// Settings for the forward time solve
    #[must_use]
    pub const fn time_solve() -> Self {
        Self {
            tolerance: TIME_RESIDUAL_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }

    /// Settings for the inverse time-constant solve
    #[must_use]
    pub const fn accel_solve() -> Self {
        Self {
            tolerance: ACCEL_UPDATE_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

/// Result of a capped root search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootSolution {
    /// Last iterate (clamped for the inverse solve)
    pub value: f64,
    /// Iterations performed
    pub iterations: u32,
    /// Whether the stopping rule was met before the cap
    pub converged: bool,
}

/// Instantaneous velocity at time `t`
#[must_use]
pub fn velocity_at(t: f64, top_speed: f64, tau: f64) -> f64 {
    top_speed * (1.0 - (-t / tau).exp())
}

/// Distance covered after `t` seconds of running
#[must_use]
pub fn distance_at(t: f64, top_speed: f64, tau: f64) -> f64 {
    top_speed * (t + tau.mul_add((-t / tau).exp(), -tau))
}

/// Solve `distance_at(t) = distance` for `t`, reporting convergence
#[must_use]
pub fn solve_time_at_distance(
    distance: f64,
    top_speed: f64,
    tau: f64,
    settings: SolverSettings,
) -> RootSolution {
    let mut t = distance / (top_speed * INITIAL_SPEED_FRACTION);
    for iteration in 0..settings.max_iterations {
        let decay = (-t / tau).exp();
        let residual = top_speed * (t + tau.mul_add(decay, -tau)) - distance;
        if residual.abs() < settings.tolerance {
            return RootSolution {
                value: t,
                iterations: iteration,
                converged: true,
            };
        }
        let slope = top_speed * (1.0 - decay);
        t -= residual / slope;
        trace!(iteration, t, residual, "time solve step");
    }
    RootSolution {
        value: t,
        iterations: settings.max_iterations,
        converged: false,
    }
}

/// Time needed to cover `distance` from a standing start (no reaction time)
///
/// Returns the last iterate when the solver hits its cap.
#[must_use]
pub fn time_at_distance(distance: f64, top_speed: f64, tau: f64) -> f64 {
    solve_time_at_distance(distance, top_speed, tau, SolverSettings::time_solve()).value
}

/// Solve for `tau` given an observed running time over `distance`
///
/// The result is always clamped to `[0.5, 2.5]`.
#[must_use]
pub fn solve_accel_constant_with(
    distance: f64,
    time: f64,
    top_speed: f64,
    settings: SolverSettings,
) -> RootSolution {
    let mut tau = INITIAL_TIME_CONSTANT;
    for iteration in 0..settings.max_iterations {
        let ratio = time / tau;
        let decay = (-ratio).exp();
        let residual = top_speed * (time + tau.mul_add(decay, -tau)) - distance;
        let slope = top_speed * decay.mul_add(1.0 + ratio, -1.0);
        if slope.abs() < settings.tolerance {
            trace!(iteration, tau, "flat derivative, stopping");
            return RootSolution {
                value: clamp_time_constant(tau),
                iterations: iteration,
                converged: false,
            };
        }
        let next = tau - residual / slope;
        if (next - tau).abs() < settings.tolerance {
            return RootSolution {
                value: clamp_time_constant(next),
                iterations: iteration + 1,
                converged: true,
            };
        }
        tau = next;
        trace!(iteration, tau, residual, "time constant solve step");
    }
    RootSolution {
        value: clamp_time_constant(tau),
        iterations: settings.max_iterations,
        converged: false,
    }
}

/// Diverged iterates (NaN) collapse to the lower bound
fn clamp_time_constant(tau: f64) -> f64 {
    if tau.is_nan() {
        MIN_TIME_CONSTANT
    } else {
        tau.clamp(MIN_TIME_CONSTANT, MAX_TIME_CONSTANT)
    }
}

/// Acceleration time constant reproducing `time` over `distance` at `top_speed`
#[must_use]
pub fn solve_accel_constant(distance: f64, time: f64, top_speed: f64) -> f64 {
    solve_accel_constant_with(distance, time, top_speed, SolverSettings::accel_solve()).value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_starts_at_zero() {
        assert!(distance_at(0.0, 11.0, 1.0).abs() < 1e-12);
        assert!(velocity_at(0.0, 11.0, 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_time_solve_converges_for_sprint_distances() {
        let solution = solve_time_at_distance(100.0, 11.5, 1.0, SolverSettings::time_solve());
        assert!(solution.converged);
        assert!(solution.iterations < MAX_ITERATIONS);
        assert!((distance_at(solution.value, 11.5, 1.0) - 100.0).abs() <= 1e-3);
    }

    #[test]
    fn test_accel_constant_clamped() {
        // Impossibly fast time for the given top speed pushes tau below the floor
        let tau = solve_accel_constant(30.0, 2.4, 12.0);
        assert!((MIN_TIME_CONSTANT..=MAX_TIME_CONSTANT).contains(&tau));
    }
}
