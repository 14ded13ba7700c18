// ABOUTME: Small lookup containers keyed by age category and gender
// ABOUTME: ByCategory and ByGender used throughout the reference tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use sprintlab_core::models::{AgeCategory, Gender};

/// One value per age category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ByCategory<T> {
    /// Under 16
    pub u16: T,
    /// Under 18
    pub u18: T,
    /// Under 20
    pub u20: T,
    /// Under 23
    pub u23: T,
    /// Senior
    pub elite: T,
}

impl<T> ByCategory<T> {
    /// Value for a category
    #[must_use]
    pub const fn get(&self, category: AgeCategory) -> &T {
        match category {
            AgeCategory::U16 => &self.u16,
            AgeCategory::U18 => &self.u18,
            AgeCategory::U20 => &self.u20,
            AgeCategory::U23 => &self.u23,
            AgeCategory::Elite => &self.elite,
        }
    }

    /// Iterate in youngest-first order
    pub fn iter(&self) -> impl Iterator<Item = (AgeCategory, &T)> {
        AgeCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl<T: Copy> ByCategory<T> {
    /// Value for a category, by copy
    #[must_use]
    pub const fn value(&self, category: AgeCategory) -> T {
        *self.get(category)
    }
}

/// One value per gender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ByGender<T> {
    /// Men
    #[serde(rename = "M")]
    pub male: T,
    /// Women
    #[serde(rename = "F")]
    pub female: T,
}

impl<T> ByGender<T> {
    /// Value for a gender
    #[must_use]
    pub const fn get(&self, gender: Gender) -> &T {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}
