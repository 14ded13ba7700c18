// ABOUTME: Numeric algorithms used by the sprint prediction engine
// ABOUTME: Hosts the exponential sprint-velocity model and its Newton-Raphson solvers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Exponential sprint-velocity model: forward and inverse solves
pub mod kinematics;

pub use kinematics::{
    distance_at, solve_accel_constant, solve_accel_constant_with, solve_time_at_distance,
    time_at_distance, velocity_at, RootSolution, SolverSettings,
};
