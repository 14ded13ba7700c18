// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Metric keys, interval tolerances and solver limits for SprintLab
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace. Tunable model parameters are not here; they belong to the
//! reference-data registry in `sprintlab-intelligence`.

/// Metric identifiers used as `MetricsSet` keys
pub mod metric_keys {
    /// 50 m personal best (s)
    pub const PB_50M: &str = "pb_50m";
    /// 60 m personal best (s)
    pub const PB_60M: &str = "pb_60m";
    /// 100 m personal best (s)
    pub const PB_100M: &str = "pb_100m";
    /// 200 m personal best (s)
    pub const PB_200M: &str = "pb_200m";
    /// 400 m personal best (s)
    pub const PB_400M: &str = "pb_400m";
    /// 50 m hurdles personal best (s)
    pub const PB_50MH: &str = "pb_50mh";
    /// 60 m hurdles personal best (s)
    pub const PB_60MH: &str = "pb_60mh";
    /// 100 m hurdles personal best (s)
    pub const PB_100MH: &str = "pb_100mh";
    /// 110 m hurdles personal best (s)
    pub const PB_110MH: &str = "pb_110mh";
    /// 400 m hurdles personal best (s)
    pub const PB_400MH: &str = "pb_400mh";

    /// 20 m from blocks (s)
    pub const TEST_20M_BLOCK: &str = "test_20m_block";
    /// 30 m from blocks (s)
    pub const TEST_30M_BLOCK: &str = "test_30m_block";
    /// 20 m flying (s)
    pub const TEST_20M_FLY: &str = "test_20m_fly";
    /// 30 m flying (s)
    pub const TEST_30M_FLY: &str = "test_30m_fly";
    /// 60 m timed test (s)
    pub const TEST_60M: &str = "test_60m";
    /// 80 m timed test (s)
    pub const TEST_80M: &str = "test_80m";
    /// 120 m timed test (s)
    pub const TEST_120M: &str = "test_120m";

    /// Average right step length (m)
    pub const STEP_LEN_AVG_R: &str = "step_len_avg_r";
    /// Average left step length (m)
    pub const STEP_LEN_AVG_L: &str = "step_len_avg_l";
    /// Right ground contact time (s)
    pub const CONTACT_TIME_R: &str = "contact_time_r";
    /// Left ground contact time (s)
    pub const CONTACT_TIME_L: &str = "contact_time_l";
    /// Countermovement jump height (cm)
    pub const CMJ_HEIGHT: &str = "cmj_height";
    /// Squat jump height (cm)
    pub const SJ_HEIGHT: &str = "sj_height";

    /// Personal-best key for a discipline id, `None` for unknown ids
    #[must_use]
    pub fn personal_best_key(discipline: &str) -> Option<&'static str> {
        match discipline {
            "50m" => Some(PB_50M),
            "60m" => Some(PB_60M),
            "100m" => Some(PB_100M),
            "200m" => Some(PB_200M),
            "400m" => Some(PB_400M),
            "50mH" => Some(PB_50MH),
            "60mH" => Some(PB_60MH),
            "100mH" => Some(PB_100MH),
            "110mH" => Some(PB_110MH),
            "400mH" => Some(PB_400MH),
            _ => None,
        }
    }
}

/// Race segment matching tolerances
pub mod intervals {
    /// Distance tolerance when matching a window boundary to a milestone (m)
    pub const BOUNDARY_EPSILON: f64 = 0.1;
    /// Distance tolerance for an exact milestone hit in time lookups (m)
    pub const EXACT_MATCH_TOLERANCE: f64 = 0.01;
    /// Negative slack accepted when offsetting raw timer readings (s)
    pub const RACE_TIME_TOLERANCE: f64 = 0.001;
}

/// Newton-Raphson limits for the kinematic solver
pub mod solver {
    /// Residual tolerance for the forward time solve (m)
    pub const TIME_RESIDUAL_TOLERANCE: f64 = 1e-3;
    /// Update tolerance for the inverse time-constant solve (s)
    pub const ACCEL_UPDATE_TOLERANCE: f64 = 1e-4;
    /// Hard iteration cap for both solves
    pub const MAX_ITERATIONS: u32 = 15;
    /// Initial time guess as a fraction of top speed
    pub const INITIAL_SPEED_FRACTION: f64 = 0.7;
    /// Initial time-constant guess (s)
    pub const INITIAL_TIME_CONSTANT: f64 = 1.0;
    /// Lower clamp for the acceleration time constant (s)
    pub const MIN_TIME_CONSTANT: f64 = 0.5;
    /// Upper clamp for the acceleration time constant (s)
    pub const MAX_TIME_CONSTANT: f64 = 2.5;
}
