// ABOUTME: Benchmark athlete profiles per gender and age category
// ABOUTME: Fallback values used when the athlete has no usable measurement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use sprintlab_core::models::{AgeCategory, Gender};

use super::{ByCategory, ByGender};

/// Typical qualified-athlete profile for one gender and category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkProfile {
    /// Acceleration time constant (s)
    pub time_constant: f64,
    /// Top speed (m/s)
    pub top_speed: f64,
    /// Relative horizontal force
    pub force: f64,
    /// Theoretical maximal velocity of the force-velocity profile (m/s)
    pub velocity_zero: f64,
    /// Relative maximal power
    pub power: f64,
    /// Endurance index
    pub endurance: f64,
    /// Stretch-shortening reactivity (%)
    pub reactivity: f64,
}

const fn bench(
    time_constant: f64,
    top_speed: f64,
    force: f64,
    velocity_zero: f64,
    power: f64,
    endurance: f64,
    reactivity: f64,
) -> BenchmarkProfile {
    BenchmarkProfile {
        time_constant,
        top_speed,
        force,
        velocity_zero,
        power,
        endurance,
        reactivity,
    }
}

/// Benchmarks for every gender and category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkTable(pub ByGender<ByCategory<BenchmarkProfile>>);

impl BenchmarkTable {
    /// Benchmark for a gender and category
    #[must_use]
    pub const fn get(&self, gender: Gender, category: AgeCategory) -> &BenchmarkProfile {
        self.0.get(gender).get(category)
    }
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self(ByGender {
            male: ByCategory {
                u16: bench(1.20, 9.2, 8.0, 9.8, 15.0, 1.22, 8.0),
                u18: bench(1.10, 10.2, 9.7, 10.8, 19.0, 1.18, 10.0),
                u20: bench(1.02, 10.8, 11.0, 11.4, 22.0, 1.14, 12.0),
                u23: bench(0.98, 11.2, 11.9, 11.8, 25.0, 1.12, 14.0),
                elite: bench(0.95, 11.6, 12.9, 12.2, 28.0, 1.10, 15.0),
            },
            female: ByCategory {
                u16: bench(1.28, 8.4, 7.0, 9.0, 12.0, 1.24, 7.0),
                u18: bench(1.18, 9.2, 8.4, 9.8, 15.0, 1.20, 9.0),
                u20: bench(1.12, 9.8, 9.3, 10.4, 18.0, 1.16, 11.0),
                u23: bench(1.06, 10.2, 10.2, 10.8, 20.0, 1.14, 12.0),
                elite: bench(1.02, 10.6, 11.0, 11.2, 23.0, 1.12, 13.0),
            },
        })
    }
}
