// ABOUTME: Tests for the exponential sprint-velocity model and its solvers
// ABOUTME: Validates forward distance, inverse time solve and time-constant recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use sprintlab::intelligence::algorithms::{
    distance_at, solve_accel_constant, solve_time_at_distance, time_at_distance, velocity_at,
    SolverSettings,
};

#[test]
fn test_velocity_approaches_top_speed() {
    assert!(velocity_at(0.0, 11.0, 1.0).abs() < 1e-12);
    assert!((velocity_at(10.0, 11.0, 1.0) - 11.0).abs() < 1e-3);
    assert!(velocity_at(1.0, 11.0, 1.0) < velocity_at(2.0, 11.0, 1.0));
}

#[test]
fn test_time_solve_inverts_distance() {
    for distance in [10.0, 30.0, 60.0, 100.0] {
        let t = time_at_distance(distance, 11.0, 1.0);
        assert!(
            (distance_at(t, 11.0, 1.0) - distance).abs() < 1e-3,
            "distance {distance} not recovered at t={t}"
        );
    }
}

#[test]
fn test_time_solve_monotonic_across_profiles() {
    let distances = [
        0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 30.0, 45.0, 60.0, 80.0, 100.0, 150.0, 200.0, 300.0, 400.0,
    ];
    for top_speed in [5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0] {
        for tau in [0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5] {
            let mut previous = 0.0;
            for distance in distances {
                let t = time_at_distance(distance, top_speed, tau);
                let residual = (distance_at(t, top_speed, tau) - distance).abs();
                assert!(
                    residual <= 1e-3,
                    "residual {residual} at d={distance} v={top_speed} tau={tau}"
                );
                assert!(
                    t > previous,
                    "time not increasing at d={distance} v={top_speed} tau={tau}"
                );
                previous = t;
            }
        }
    }
}

#[test]
fn test_time_constant_round_trip_realistic() {
    // (distance, running time, top speed)
    let observed = [
        (30.0, 3.80, 11.6),
        (30.0, 4.30, 10.2),
        (60.0, 6.70, 11.2),
        (60.0, 7.60, 9.6),
        (30.0, 4.60, 8.8),
    ];
    for (distance, time, top_speed) in observed {
        let tau = solve_accel_constant(distance, time, top_speed);
        let recovered = time_at_distance(distance, top_speed, tau);
        assert!(
            (recovered - time).abs() < 1e-2,
            "{distance} m in {time} s at {top_speed} m/s came back as {recovered}"
        );
    }
}

#[test]
fn test_time_solve_reports_convergence() {
    let solution = solve_time_at_distance(100.0, 11.6, 0.95, SolverSettings::time_solve());
    assert!(solution.converged);
    assert!(solution.iterations < SolverSettings::time_solve().max_iterations);
    assert!((solution.value - 9.5707).abs() < 0.01);
}

#[test]
fn test_time_solve_returns_last_iterate_at_cap() {
    let settings = SolverSettings {
        tolerance: 1e-3,
        max_iterations: 1,
    };
    let solution = solve_time_at_distance(100.0, 11.0, 1.0, settings);
    assert!(!solution.converged);
    assert!(solution.value.is_finite());
    assert!(solution.value > 0.0);
}

#[test]
fn test_time_constant_round_trip() {
    let running_time = time_at_distance(30.0, 11.0, 1.0);
    let tau = solve_accel_constant(30.0, running_time, 11.0);
    assert!((tau - 1.0).abs() < 1e-3, "recovered tau {tau}");
}

#[test]
fn test_time_constant_is_clamped() {
    // Faster than top speed allows
    assert_eq!(solve_accel_constant(30.0, 2.0, 11.0), 0.5);
    // Far slower than the model can reach
    assert_eq!(solve_accel_constant(30.0, 8.0, 11.0), 2.5);
}
