// ABOUTME: Hurdle course specifications per discipline, gender and age category
// ABOUTME: First-hurdle distance, spacing and height with senior fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sprintlab_core::models::{AgeCategory, Gender};

/// Course geometry for one gender and category
///
/// Missing distances are filled from the senior course.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HurdleSpec {
    /// Distance from the start line to the first hurdle (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_hurdle: Option<f64>,
    /// Distance between consecutive hurdles (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    /// Hurdle height (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl HurdleSpec {
    /// Fully specified course
    #[must_use]
    pub const fn new(first_hurdle: f64, spacing: f64, height: f64) -> Self {
        Self {
            first_hurdle: Some(first_hurdle),
            spacing: Some(spacing),
            height: Some(height),
        }
    }

    /// Distance of the hurdle at zero-based `index`
    #[must_use]
    pub fn hurdle_position(&self, index: u32) -> Option<f64> {
        let first = self.first_hurdle?;
        let spacing = self.spacing?;
        Some(f64::from(index).mul_add(spacing, first))
    }

    /// Whether hurdle positions can be generated
    #[must_use]
    pub const fn has_layout(&self) -> bool {
        self.first_hurdle.is_some() && self.spacing.is_some()
    }
}

/// Course specifications of one hurdle discipline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HurdleCourse(pub BTreeMap<Gender, BTreeMap<AgeCategory, HurdleSpec>>);

impl HurdleCourse {
    /// Register one gender's course with per-category heights
    fn with_heights(
        mut self,
        gender: Gender,
        first_hurdle: f64,
        spacing: f64,
        heights: &[(AgeCategory, f64)],
    ) -> Self {
        let table = self.0.entry(gender).or_default();
        for &(category, height) in heights {
            table.insert(category, HurdleSpec::new(first_hurdle, spacing, height));
        }
        self
    }

    /// Men's short-hurdle course
    #[must_use]
    pub fn men_short() -> Self {
        Self::default().with_heights(
            Gender::Male,
            13.72,
            9.14,
            &[
                (AgeCategory::U18, 0.91),
                (AgeCategory::U20, 0.99),
                (AgeCategory::Elite, 1.06),
            ],
        )
    }

    /// Women's short-hurdle course
    #[must_use]
    pub fn women_short() -> Self {
        Self::default().with_heights(
            Gender::Female,
            13.0,
            8.5,
            &[
                (AgeCategory::U18, 0.76),
                (AgeCategory::U20, 0.84),
                (AgeCategory::Elite, 0.84),
            ],
        )
    }

    /// Both short-hurdle courses
    #[must_use]
    pub fn mixed_short() -> Self {
        let mut course = Self::men_short();
        course.0.extend(Self::women_short().0);
        course
    }

    /// Resolve the spec for a gender and category
    ///
    /// Falls back to the other gender when the requested one is not raced,
    /// then to the senior entry, then fills missing distances from it.
    #[must_use]
    pub fn resolve(&self, gender: Gender, category: AgeCategory) -> Option<HurdleSpec> {
        let table = self.0.get(&gender).or_else(|| self.0.values().next())?;
        let elite = table.get(&AgeCategory::Elite).copied();
        let Some(mut spec) = table.get(&category).copied() else {
            return elite;
        };
        if let Some(elite) = elite {
            spec.first_hurdle = spec.first_hurdle.or(elite.first_hurdle);
            spec.spacing = spec.spacing.or(elite.spacing);
        }
        Some(spec)
    }
}
