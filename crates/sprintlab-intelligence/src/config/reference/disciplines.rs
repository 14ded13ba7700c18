// ABOUTME: Discipline registry with per-type tuning parameters
// ABOUTME: DisciplineId, DisciplineKind tagged union, capture milestones and analysis templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Discipline Configuration
//!
//! Each discipline carries the tuning parameters of exactly one predictor,
//! selected by [`DisciplineKind`]. The capture list and analysis template are
//! what timing tools record and what reports display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sprintlab_core::errors::AppError;
use sprintlab_core::models::{AgeCategory, Gender, IntervalWindow, Milestone, MilestoneKind};

use super::{ByGender, HurdleCourse, HurdleSpec};

/// Supported event identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DisciplineId {
    /// 50 m
    #[serde(rename = "50m")]
    Sprint50,
    /// 60 m
    #[serde(rename = "60m")]
    Sprint60,
    /// 100 m
    #[serde(rename = "100m")]
    Sprint100,
    /// 200 m
    #[serde(rename = "200m")]
    Sprint200,
    /// 400 m
    #[serde(rename = "400m")]
    Sprint400,
    /// 50 m hurdles
    #[serde(rename = "50mH")]
    Hurdles50,
    /// 60 m hurdles
    #[serde(rename = "60mH")]
    Hurdles60,
    /// 100 m hurdles
    #[serde(rename = "100mH")]
    Hurdles100,
    /// 110 m hurdles
    #[serde(rename = "110mH")]
    Hurdles110,
    /// 400 m hurdles
    #[serde(rename = "400mH")]
    Hurdles400,
}

impl DisciplineId {
    /// Every supported discipline, flat events first
    pub const ALL: [Self; 10] = [
        Self::Sprint50,
        Self::Sprint60,
        Self::Sprint100,
        Self::Sprint200,
        Self::Sprint400,
        Self::Hurdles50,
        Self::Hurdles60,
        Self::Hurdles100,
        Self::Hurdles110,
        Self::Hurdles400,
    ];

    /// Identifier string, e.g. `"110mH"`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sprint50 => "50m",
            Self::Sprint60 => "60m",
            Self::Sprint100 => "100m",
            Self::Sprint200 => "200m",
            Self::Sprint400 => "400m",
            Self::Hurdles50 => "50mH",
            Self::Hurdles60 => "60mH",
            Self::Hurdles100 => "100mH",
            Self::Hurdles110 => "110mH",
            Self::Hurdles400 => "400mH",
        }
    }

    /// Race distance (m)
    #[must_use]
    pub const fn distance(&self) -> f64 {
        match self {
            Self::Sprint50 | Self::Hurdles50 => 50.0,
            Self::Sprint60 | Self::Hurdles60 => 60.0,
            Self::Sprint100 | Self::Hurdles100 => 100.0,
            Self::Hurdles110 => 110.0,
            Self::Sprint200 => 200.0,
            Self::Sprint400 | Self::Hurdles400 => 400.0,
        }
    }

    /// Whether the event is run over hurdles
    #[must_use]
    pub const fn is_hurdles(&self) -> bool {
        matches!(
            self,
            Self::Hurdles50 | Self::Hurdles60 | Self::Hurdles100 | Self::Hurdles110 | Self::Hurdles400
        )
    }
}

impl fmt::Display for DisciplineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisciplineId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AppError::unsupported_discipline(trimmed))
    }
}

/// Fly-to-target estimation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyModel {
    /// Fixed cost of the start and acceleration phase (s)
    pub base_start_cost: f64,
    /// Target time per second of 30 m fly
    pub fly30_ratio: f64,
    /// Target time per second of 20 m fly
    pub fly20_ratio: f64,
    /// Category correction for U16 (s)
    pub k_u16: f64,
    /// Category correction for U18, U20 and all women (s)
    pub k_junior: f64,
    /// Category correction otherwise (s)
    pub k_default: f64,
}

impl FlyModel {
    /// Category correction applied to the fly estimate
    #[must_use]
    pub const fn k_factor(&self, gender: Gender, category: AgeCategory) -> f64 {
        match (category, gender) {
            (AgeCategory::U16, _) => self.k_u16,
            (AgeCategory::U18 | AgeCategory::U20, _) | (_, Gender::Female) => self.k_junior,
            _ => self.k_default,
        }
    }
}

/// Short flat sprint (50/60/100 m)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatParams {
    /// Fly-to-target model, when the event uses one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fly_model: Option<FlyModel>,
    /// Multiplier applied to the 60 m time, when the event uses the power law
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_law_ratio: Option<f64>,
    /// Power-law gap over the fly estimate that triggers a blend (s)
    pub power_law_blend_gap: f64,
    /// Fly share of the blended estimate
    pub fly_blend_weight: f64,
    /// 30 m block time under which the accel bonus applies (s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accel_bonus_threshold: Option<f64>,
    /// How much faster the PB must be before it is averaged in (s)
    pub pb_blend_margin: f64,
    /// Fixed uncertainty (s)
    pub uncertainty_band: f64,
}

impl FlatParams {
    fn physics_only() -> Self {
        Self {
            fly_model: None,
            power_law_ratio: None,
            power_law_blend_gap: 0.15,
            fly_blend_weight: 0.7,
            accel_bonus_threshold: None,
            pb_blend_margin: 0.5,
            uncertainty_band: 0.10,
        }
    }
}

/// 200 m model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatLongParams {
    /// Endurance index above which the profile is speed-biased
    pub speed_threshold: f64,
    /// Endurance index below which the profile is endurance-biased
    pub endurance_threshold: f64,
    /// Delta for speed-biased profiles (s)
    pub speed_delta: f64,
    /// Delta for endurance-biased profiles (s)
    pub endurance_delta: f64,
    /// Delta otherwise (s)
    pub neutral_delta: f64,
    /// Share of the second 100 m spent between 100 and 150 m
    pub third_quarter_share: f64,
    /// 50 m split as a share of the 100 m time when no model split exists
    pub first_quarter_share: f64,
    /// Fixed uncertainty (s)
    pub uncertainty_band: f64,
}

/// 400 m model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongSprintParams {
    /// Endurance index above which the profile is a sprinter
    pub sprinter_threshold: f64,
    /// Endurance index below which the profile is speed-resistant
    pub resistant_threshold: f64,
    /// Margin for sprinters (s)
    pub sprinter_margin: f64,
    /// Margin for U16 sprinters (s)
    pub youth_sprinter_margin: f64,
    /// Margin for resistant profiles (s)
    pub resistant_margin: f64,
    /// Margin otherwise (s)
    pub default_margin: f64,
    /// Fixed uncertainty (s)
    pub uncertainty_band: f64,
}

/// Index-of-efficiency table for short hurdles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IeTargets {
    /// U16 offset (s)
    pub u16: f64,
    /// U18 and U20 offset (s)
    pub junior: f64,
    /// Senior men offset (s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub male: Option<f64>,
    /// Senior women offset (s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub female: Option<f64>,
    /// Offset when no gender entry exists (s)
    pub default: f64,
}

impl IeTargets {
    /// Offset for a gender and category
    #[must_use]
    pub fn select(&self, gender: Gender, category: AgeCategory) -> f64 {
        let senior = match gender {
            Gender::Female => self.female,
            Gender::Male => self.male,
        };
        match category {
            AgeCategory::U16 => self.u16,
            AgeCategory::U18 | AgeCategory::U20 => self.junior,
            AgeCategory::U23 | AgeCategory::Elite => senior.unwrap_or(self.default),
        }
    }
}

/// Short hurdles (50/60/100/110 m)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HurdleParams {
    /// Number of hurdles
    pub hurdle_count: u32,
    /// Technique offsets
    pub ie_target: IeTargets,
    /// Course geometry
    pub course: HurdleCourse,
    /// Fixed uncertainty (s)
    pub uncertainty_band: f64,
}

/// 400 m hurdles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HurdlesLongParams {
    /// Number of hurdles
    pub hurdle_count: u32,
    /// First hurdle (m)
    pub first_hurdle: f64,
    /// Hurdle spacing (m)
    pub spacing: f64,
    /// Time over the flat 400 m (s)
    pub differential: ByGender<f64>,
    /// Extra time for U18 athletes (s)
    pub u18_bonus: f64,
    /// Fixed uncertainty (s)
    pub uncertainty_band: f64,
}

/// Predictor selection with its tuning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisciplineKind {
    /// 50/60/100 m
    Flat(FlatParams),
    /// 200 m
    FlatLong(FlatLongParams),
    /// 400 m
    LongSprint(LongSprintParams),
    /// Short hurdles
    Hurdles(HurdleParams),
    /// 400 m hurdles
    HurdlesLong(HurdlesLongParams),
}

impl DisciplineKind {
    /// Type label used in reports
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Flat(_) => "flat",
            Self::FlatLong(_) => "flat_long",
            Self::LongSprint(_) => "long_sprint",
            Self::Hurdles(_) => "hurdles",
            Self::HurdlesLong(_) => "hurdles_long",
        }
    }
}

/// One discipline's static configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineConfig {
    /// Identifier
    pub id: DisciplineId,
    /// Display name
    pub name: String,
    /// Race distance (m)
    pub distance: f64,
    /// Predictor and parameters
    pub kind: DisciplineKind,
    /// Milestones a timing tool records, for events without generated layouts
    #[serde(default)]
    pub capture: Vec<Milestone>,
    /// Display windows, for events without generated layouts
    #[serde(default)]
    pub analysis: Vec<IntervalWindow>,
    /// Window-against-window comparisons shown next to the analysis
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub differentials: Vec<WindowDifferential>,
}

/// Time of `compared` minus time of `reference`, such as the second 200 m of
/// a 400 m against the first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowDifferential {
    /// Display label
    pub label: String,
    /// Baseline window
    pub reference: IntervalWindow,
    /// Window compared against the baseline
    pub compared: IntervalWindow,
}

fn labelled(distance: f64, kind: MilestoneKind, label: impl Into<String>) -> Milestone {
    Milestone {
        label: Some(label.into()),
        ..Milestone::new(distance, 0.0, kind)
    }
}

fn start_milestone() -> Milestone {
    labelled(0.0, MilestoneKind::Split, "Start (0m)")
}

fn finish_milestone(distance: f64) -> Milestone {
    labelled(distance, MilestoneKind::Split, format!("Finish ({distance}m)"))
}

fn split_list(distance: f64, intermediates: &[f64]) -> Vec<Milestone> {
    let mut list = vec![start_milestone()];
    list.extend(
        intermediates
            .iter()
            .map(|&d| labelled(d, MilestoneKind::Split, format!("{d}m"))),
    );
    list.push(finish_milestone(distance));
    list
}

impl DisciplineConfig {
    /// Course layout as (first hurdle, spacing, count), when the event has one
    #[must_use]
    pub fn hurdle_layout(&self, gender: Gender, category: AgeCategory) -> Option<(f64, f64, u32)> {
        match &self.kind {
            DisciplineKind::Hurdles(params) => {
                let spec: HurdleSpec = params.course.resolve(gender, category)?;
                Some((spec.first_hurdle?, spec.spacing?, params.hurdle_count))
            }
            DisciplineKind::HurdlesLong(params) => {
                Some((params.first_hurdle, params.spacing, params.hurdle_count))
            }
            _ => None,
        }
    }

    /// Hurdle height for a gender and category
    #[must_use]
    pub fn hurdle_height(&self, gender: Gender, category: AgeCategory) -> Option<f64> {
        match &self.kind {
            DisciplineKind::Hurdles(params) => params.course.resolve(gender, category)?.height,
            _ => None,
        }
    }

    /// Milestones to record for this event
    ///
    /// Short hurdles generate a take-off two metres before and a touchdown at
    /// every hurdle; 400 m hurdles record touchdowns only.
    #[must_use]
    pub fn capture_milestones(&self, gender: Gender, category: AgeCategory) -> Vec<Milestone> {
        let Some((first, spacing, count)) = self.hurdle_layout(gender, category) else {
            if self.capture.is_empty() && self.id.is_hurdles() {
                return vec![start_milestone(), finish_milestone(self.distance)];
            }
            return self.capture.clone();
        };
        let with_takeoff = matches!(self.kind, DisciplineKind::Hurdles(_));
        let mut list = vec![start_milestone()];
        for index in 0..count {
            let position = f64::from(index).mul_add(spacing, first);
            let number = index + 1;
            if with_takeoff {
                list.push(labelled(
                    position - 2.0,
                    MilestoneKind::Takeoff,
                    format!("H{number} Take-off"),
                ));
            }
            list.push(labelled(
                position,
                MilestoneKind::Touchdown,
                format!("H{number} Touchdown"),
            ));
        }
        list.push(finish_milestone(self.distance));
        list
    }

    /// Display windows for reports
    ///
    /// Hurdle events get start to first hurdle, every hurdle-to-hurdle leg,
    /// last hurdle to finish and the full race.
    #[must_use]
    pub fn analysis_template(&self, gender: Gender, category: AgeCategory) -> Vec<IntervalWindow> {
        let Some((first, spacing, count)) = self.hurdle_layout(gender, category) else {
            return self.analysis.clone();
        };
        let mut template = vec![IntervalWindow::labelled(0.0, first, "Start-H1")];
        for index in 1..count {
            let start = f64::from(index - 1).mul_add(spacing, first);
            let end = f64::from(index).mul_add(spacing, first);
            template.push(IntervalWindow::labelled(
                start,
                end,
                format!("H{index}-H{}", index + 1),
            ));
        }
        let last = f64::from(count.saturating_sub(1)).mul_add(spacing, first);
        template.push(IntervalWindow::labelled(last, self.distance, "Final"));
        template.push(IntervalWindow::labelled(0.0, self.distance, self.name.clone()));
        template
    }
}

fn flat(
    id: DisciplineId,
    params: FlatParams,
    intermediates: &[f64],
    analysis: Vec<IntervalWindow>,
) -> DisciplineConfig {
    let distance = id.distance();
    DisciplineConfig {
        id,
        name: id.as_str().to_owned(),
        distance,
        kind: DisciplineKind::Flat(params),
        capture: split_list(distance, intermediates),
        analysis,
        differentials: Vec::new(),
    }
}

fn short_hurdles(
    id: DisciplineId,
    name: &str,
    hurdle_count: u32,
    ie_target: IeTargets,
    course: HurdleCourse,
) -> DisciplineConfig {
    DisciplineConfig {
        id,
        name: name.to_owned(),
        distance: id.distance(),
        kind: DisciplineKind::Hurdles(HurdleParams {
            hurdle_count,
            ie_target,
            course,
            uncertainty_band: 0.3,
        }),
        capture: Vec::new(),
        analysis: Vec::new(),
        differentials: Vec::new(),
    }
}

const fn ie(male: Option<f64>, female: Option<f64>) -> IeTargets {
    IeTargets {
        u16: 1.8,
        junior: 1.4,
        male,
        female,
        default: 1.0,
    }
}

/// Built-in discipline table
#[must_use]
pub fn default_disciplines() -> Vec<DisciplineConfig> {
    let w = IntervalWindow::labelled;
    vec![
        flat(
            DisciplineId::Sprint50,
            FlatParams::physics_only(),
            &[20.0, 30.0],
            vec![w(0.0, 20.0, "Start (0-20)"), w(20.0, 50.0, "Speed (20-50)")],
        ),
        flat(
            DisciplineId::Sprint60,
            FlatParams::physics_only(),
            &[30.0],
            vec![
                w(0.0, 30.0, "Start (0-30)"),
                w(30.0, 60.0, "Transition (30-60)"),
                w(0.0, 60.0, "60m"),
            ],
        ),
        flat(
            DisciplineId::Sprint100,
            FlatParams {
                fly_model: Some(FlyModel {
                    base_start_cost: 0.92,
                    fly30_ratio: 3.33,
                    fly20_ratio: 5.0,
                    k_u16: 0.7,
                    k_junior: 0.37,
                    k_default: 0.2,
                }),
                power_law_ratio: Some(1.54),
                accel_bonus_threshold: Some(4.25),
                ..FlatParams::physics_only()
            },
            &[30.0, 50.0, 60.0],
            vec![
                w(0.0, 30.0, "Start (0-30)"),
                w(30.0, 60.0, "Transition / Top speed (30-60)"),
                w(60.0, 100.0, "Speed maintenance (60-100)"),
                w(0.0, 60.0, "60m"),
                w(50.0, 100.0, "Speed endurance (50-100)"),
                w(0.0, 100.0, "100m"),
            ],
        ),
        DisciplineConfig {
            id: DisciplineId::Sprint200,
            name: "200m".to_owned(),
            distance: 200.0,
            kind: DisciplineKind::FlatLong(FlatLongParams {
                speed_threshold: 1.25,
                endurance_threshold: 1.15,
                speed_delta: 0.2,
                endurance_delta: -0.3,
                neutral_delta: -0.1,
                third_quarter_share: 0.49,
                first_quarter_share: 0.6,
                uncertainty_band: 0.25,
            }),
            capture: split_list(200.0, &[30.0, 100.0]),
            analysis: vec![
                w(0.0, 100.0, "Bend"),
                w(100.0, 200.0, "Straight"),
                w(0.0, 200.0, "200m"),
            ],
            differentials: Vec::new(),
        },
        DisciplineConfig {
            id: DisciplineId::Sprint400,
            name: "400m".to_owned(),
            distance: 400.0,
            kind: DisciplineKind::LongSprint(LongSprintParams {
                sprinter_threshold: 1.2,
                resistant_threshold: 1.1,
                sprinter_margin: 5.0,
                youth_sprinter_margin: 5.5,
                resistant_margin: 2.8,
                default_margin: 3.6,
                uncertainty_band: 0.8,
            }),
            capture: split_list(400.0, &[100.0, 200.0, 300.0]),
            analysis: vec![
                w(0.0, 200.0, "First 200m"),
                w(200.0, 400.0, "Second 200m"),
                w(0.0, 400.0, "400m"),
            ],
            differentials: vec![WindowDifferential {
                label: "Differential (2-1)".to_owned(),
                reference: w(0.0, 200.0, "First 200m"),
                compared: w(200.0, 400.0, "Second 200m"),
            }],
        },
        short_hurdles(
            DisciplineId::Hurdles50,
            "50m Hurdles",
            4,
            ie(Some(1.0), Some(0.95)),
            HurdleCourse::mixed_short(),
        ),
        short_hurdles(
            DisciplineId::Hurdles60,
            "60m Hurdles",
            5,
            ie(Some(1.0), Some(0.95)),
            HurdleCourse::mixed_short(),
        ),
        short_hurdles(
            DisciplineId::Hurdles100,
            "100m Hurdles (W)",
            10,
            ie(None, Some(0.95)),
            HurdleCourse::women_short(),
        ),
        short_hurdles(
            DisciplineId::Hurdles110,
            "110m Hurdles (M)",
            10,
            ie(Some(1.0), None),
            HurdleCourse::men_short(),
        ),
        DisciplineConfig {
            id: DisciplineId::Hurdles400,
            name: "400m Hurdles".to_owned(),
            distance: 400.0,
            kind: DisciplineKind::HurdlesLong(HurdlesLongParams {
                hurdle_count: 10,
                first_hurdle: 45.0,
                spacing: 35.0,
                differential: ByGender {
                    male: 4.0,
                    female: 4.5,
                },
                u18_bonus: 1.0,
                uncertainty_band: 1.0,
            }),
            capture: Vec::new(),
            analysis: Vec::new(),
            differentials: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("110mh".parse::<DisciplineId>().unwrap(), DisciplineId::Hurdles110);
        assert!("800m".parse::<DisciplineId>().is_err());
    }

    #[test]
    fn test_k_factor_selection() {
        let model = FlyModel {
            base_start_cost: 0.92,
            fly30_ratio: 3.33,
            fly20_ratio: 5.0,
            k_u16: 0.7,
            k_junior: 0.37,
            k_default: 0.2,
        };
        assert_eq!(model.k_factor(Gender::Male, AgeCategory::Elite), 0.2);
        assert_eq!(model.k_factor(Gender::Female, AgeCategory::Elite), 0.37);
        assert_eq!(model.k_factor(Gender::Male, AgeCategory::U20), 0.37);
        assert_eq!(model.k_factor(Gender::Female, AgeCategory::U16), 0.7);
    }

    #[test]
    fn test_ie_falls_back_to_default_for_missing_gender() {
        let targets = ie(Some(1.0), None);
        assert_eq!(targets.select(Gender::Female, AgeCategory::Elite), 1.0);
        assert_eq!(targets.select(Gender::Female, AgeCategory::U18), 1.4);
    }
}
