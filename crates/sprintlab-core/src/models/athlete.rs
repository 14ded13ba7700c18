// ABOUTME: Athlete descriptor with gender and age-category derivation
// ABOUTME: Gender, AgeCategory and Athlete definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MetricsSet;
use crate::errors::AppError;

/// Competition gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    /// Men
    #[serde(rename = "M")]
    Male,
    /// Women
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Single-letter code used in reference tables
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" | "MALE" => Ok(Self::Male),
            "F" | "FEMALE" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}', expected M or F"
            ))),
        }
    }
}

/// Age category derived from the athlete's age in the season year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgeCategory {
    /// Under 16
    U16,
    /// 16 and 17
    U18,
    /// 18 and 19
    U20,
    /// 20 to 22
    U23,
    /// 23 and over
    Elite,
}

impl AgeCategory {
    /// All categories, youngest first
    pub const ALL: [Self; 5] = [Self::U16, Self::U18, Self::U20, Self::U23, Self::Elite];

    /// Category for an age in whole years
    #[must_use]
    pub const fn from_age(age: i32) -> Self {
        match age {
            i32::MIN..=15 => Self::U16,
            16..=17 => Self::U18,
            18..=19 => Self::U20,
            20..=22 => Self::U23,
            _ => Self::Elite,
        }
    }

    /// Table label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::U16 => "U16",
            Self::U18 => "U18",
            Self::U20 => "U20",
            Self::U23 => "U23",
            Self::Elite => "ELITE",
        }
    }

    /// Youth categories race with the training reaction-time constant
    #[must_use]
    pub const fn is_youth(&self) -> bool {
        matches!(self, Self::U16 | Self::U18)
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "U16" => Ok(Self::U16),
            "U18" => Ok(Self::U18),
            "U20" => Ok(Self::U20),
            "U23" => Ok(Self::U23),
            "ELITE" | "SENIOR" => Ok(Self::Elite),
            other => Err(AppError::invalid_input(format!(
                "Unknown age category '{other}'"
            ))),
        }
    }
}

/// Athlete descriptor consumed by the prediction engine
///
/// # Examples
///
/// ```rust
/// use sprintlab_core::models::{AgeCategory, Athlete, Gender};
///
/// let athlete = Athlete::new("Ada Runner", 2008, Gender::Female);
/// assert_eq!(athlete.category_in(2025), AgeCategory::U18);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
    /// Stable identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Year of birth
    pub birth_year: i32,
    /// Competition gender
    pub gender: Gender,
    /// Personal bests and field tests
    #[serde(default)]
    pub metrics: MetricsSet,
}

impl Athlete {
    /// Create an athlete with an empty metrics set
    #[must_use]
    pub fn new(name: impl Into<String>, birth_year: i32, gender: Gender) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            birth_year,
            gender,
            metrics: MetricsSet::new(),
        }
    }

    /// Age reached during the given season year
    #[must_use]
    pub const fn age_in(&self, year: i32) -> i32 {
        year - self.birth_year
    }

    /// Age category for the given season year
    #[must_use]
    pub const fn category_in(&self, year: i32) -> AgeCategory {
        AgeCategory::from_age(self.age_in(year))
    }

    /// Age category for the current calendar year
    #[must_use]
    pub fn category(&self) -> AgeCategory {
        self.category_in(Utc::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(AgeCategory::from_age(15), AgeCategory::U16);
        assert_eq!(AgeCategory::from_age(16), AgeCategory::U18);
        assert_eq!(AgeCategory::from_age(17), AgeCategory::U18);
        assert_eq!(AgeCategory::from_age(18), AgeCategory::U20);
        assert_eq!(AgeCategory::from_age(20), AgeCategory::U23);
        assert_eq!(AgeCategory::from_age(22), AgeCategory::U23);
        assert_eq!(AgeCategory::from_age(23), AgeCategory::Elite);
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&AgeCategory::Elite).unwrap();
        assert_eq!(json, "\"ELITE\"");
        let gender: Gender = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(gender, Gender::Female);
    }

    #[test]
    fn test_parse_round_trip_labels() {
        for category in AgeCategory::ALL {
            assert_eq!(category.label().parse::<AgeCategory>().unwrap(), category);
        }
        assert!("U21".parse::<AgeCategory>().is_err());
        assert!("X".parse::<Gender>().is_err());
    }
}
