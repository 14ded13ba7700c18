// ABOUTME: Derives an athlete's physiological sprint profile from sparse metrics
// ABOUTME: Top speed, acceleration constant, force and power proxies with benchmark fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile Resolver
//!
//! Resolution cascades from measured tests to personal-best estimates to the
//! category benchmark. Every chosen path is recorded in `sources` so reports
//! can show where a number came from. Missing data never fails a resolution.

use sprintlab_core::constants::metric_keys::{
    CMJ_HEIGHT, PB_100M, PB_60M, SJ_HEIGHT, STEP_LEN_AVG_L, STEP_LEN_AVG_R, TEST_120M,
    TEST_20M_FLY, TEST_30M_BLOCK, TEST_30M_FLY, TEST_60M, TEST_80M,
};
use sprintlab_core::models::{AgeCategory, AthleteProfile, Gender, MetricsSet};
use tracing::{debug, warn};

use crate::algorithms::solve_accel_constant;
use crate::config::ReferenceData;

/// Resolves `AthleteProfile`s against a reference registry
#[derive(Debug, Clone, Copy)]
pub struct ProfileResolver<'a> {
    reference: &'a ReferenceData,
}

impl Default for ProfileResolver<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileResolver<'static> {
    /// Resolver backed by the global registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            reference: ReferenceData::global(),
        }
    }
}

impl<'a> ProfileResolver<'a> {
    /// Resolver backed by an injected registry
    #[must_use]
    pub const fn with_reference(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    /// Build the profile for a metrics set, gender and age category
    #[must_use]
    pub fn resolve(
        &self,
        metrics: &MetricsSet,
        gender: Gender,
        category: AgeCategory,
    ) -> AthleteProfile {
        let benchmark = self.reference.benchmarks.get(gender, category);
        let reaction_time = self.reference.reaction_time(category);
        let mut sources = Vec::new();

        let (top_speed, speed_source) = self
            .resolve_top_speed(metrics, category)
            .map(|(speed, source)| (speed, source.to_owned()))
            .unwrap_or_else(|| {
                (
                    benchmark.top_speed,
                    format!("Benchmark top speed ({gender} {category})"),
                )
            });
        sources.push(speed_source);

        let (accel_time_constant, tau_source) =
            Self::resolve_time_constant(metrics, top_speed, reaction_time)
                .map(|(tau, source)| (tau, source.to_owned()))
                .unwrap_or_else(|| {
                    (
                        benchmark.time_constant,
                        format!("Benchmark acceleration ({gender} {category})"),
                    )
                });
        sources.push(tau_source);

        let force_proxy = top_speed / accel_time_constant;
        let power_proxy = force_proxy * top_speed / 4.0;
        let endurance_index = endurance_index(metrics);

        let measured_reactivity = reactivity_index(metrics);
        if measured_reactivity.is_some() {
            sources.push("CMJ/SJ".to_owned());
        }
        let reactivity = measured_reactivity.unwrap_or(benchmark.reactivity);

        let warnings = self.plausibility_warnings(top_speed, accel_time_constant, force_proxy);
        for message in &warnings {
            warn!(top_speed, tau = accel_time_constant, "{message}");
        }
        debug!(
            top_speed,
            tau = accel_time_constant,
            endurance_index,
            ?sources,
            "profile resolved"
        );

        AthleteProfile {
            top_speed,
            accel_time_constant,
            reaction_time,
            force_proxy,
            power_proxy,
            endurance_index,
            reactivity,
            sources,
            warnings,
        }
    }

    /// Fastest fly test, else 100 m PB speed times the category coefficient
    fn resolve_top_speed(
        &self,
        metrics: &MetricsSet,
        category: AgeCategory,
    ) -> Option<(f64, &'static str)> {
        let fly30 = metrics.get(TEST_30M_FLY).map(|t| (30.0 / t, "30m Fly"));
        let fly20 = metrics.get(TEST_20M_FLY).map(|t| (20.0 / t, "20m Fly"));
        let fastest_fly = match (fly30, fly20) {
            (Some(a), Some(b)) => Some(if b.0 > a.0 { b } else { a }),
            (a, b) => a.or(b),
        };
        fastest_fly.or_else(|| {
            let coefficient = self.reference.physics.top_speed_from_pb.value(category);
            metrics
                .get(PB_100M)
                .map(|pb| (100.0 / pb * coefficient, "Est. from 100m PB"))
        })
    }

    /// 30 m block test, else 60 m PB, each net of reaction time
    fn resolve_time_constant(
        metrics: &MetricsSet,
        top_speed: f64,
        reaction_time: f64,
    ) -> Option<(f64, &'static str)> {
        let candidates = [(TEST_30M_BLOCK, 30.0, "30m Block"), (PB_60M, 60.0, "60m PB")];
        candidates.into_iter().find_map(|(key, distance, source)| {
            let running_time = metrics.get(key)? - reaction_time;
            (running_time > 0.0)
                .then(|| (solve_accel_constant(distance, running_time, top_speed), source))
        })
    }

    fn plausibility_warnings(&self, top_speed: f64, tau: f64, force_proxy: f64) -> Vec<String> {
        let limits = &self.reference.physics.plausibility;
        let mut warnings = Vec::new();
        if top_speed > limits.top_speed_ceiling {
            warnings.push(format!(
                "Top speed {top_speed:.2} m/s is near physiological ceiling"
            ));
        }
        if tau < limits.min_time_constant {
            warnings.push(format!(
                "Time constant {tau:.2} s: acceleration likely overestimated"
            ));
        }
        if force_proxy > limits.high_force && top_speed < limits.low_top_speed {
            warnings.push(
                "Atypical force/speed combination, possible measurement error".to_owned(),
            );
        }
        warnings
    }
}

/// 30 m fly velocity over the average velocity of the longest timed test
///
/// Zero when the fly test or every long test is missing.
#[must_use]
pub fn endurance_index(metrics: &MetricsSet) -> f64 {
    let Some(fly) = metrics.get(TEST_30M_FLY) else {
        return 0.0;
    };
    [(TEST_120M, 120.0), (TEST_80M, 80.0), (TEST_60M, 60.0)]
        .into_iter()
        .find_map(|(key, distance)| metrics.get(key).map(|time| distance / time))
        .map_or(0.0, |long_velocity| (30.0 / fly) / long_velocity)
}

/// Stretch-shortening gain of the countermovement jump over the squat jump (%)
#[must_use]
pub fn reactivity_index(metrics: &MetricsSet) -> Option<f64> {
    let cmj = metrics.get(CMJ_HEIGHT)?;
    let sj = metrics.get(SJ_HEIGHT)?;
    Some((cmj - sj) / sj * 100.0)
}

/// Mean of the measured left and right step lengths
#[must_use]
pub fn measured_step_length(metrics: &MetricsSet) -> Option<f64> {
    match (metrics.get(STEP_LEN_AVG_R), metrics.get(STEP_LEN_AVG_L)) {
        (Some(right), Some(left)) => Some((right + left) / 2.0),
        (right, left) => right.or(left),
    }
}
