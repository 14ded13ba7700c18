// ABOUTME: Race commands for segment analysis and virtual-best composition
// ABOUTME: Loads race JSON files and reports segments, hurdle legs, differentials and window bests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::{json, Value};
use sprintlab::config::AppConfig;
use sprintlab::intelligence::{
    calculate_virtual_best, project_prediction_to_segments, DisciplineId, PredictionEngine, Race,
    ReferenceData,
};
use sprintlab::models::SegmentMetric;
use tracing::info;

use super::{read_json, Selection};
use crate::AthleteArgs;

pub fn analyze(config: &AppConfig, path: &Path, athlete: &AthleteArgs) -> Result<Value> {
    let race: Race = read_json(path)?;
    let selection = Selection::or_default(config, athlete)?;
    let discipline = ReferenceData::global().discipline(race.discipline)?;
    let template = discipline.analysis_template(selection.gender, selection.category);

    let hurdle_legs = if race.discipline.is_hurdles() {
        race.hurdle_analysis()
    } else {
        Vec::new()
    };

    Ok(json!({
        "race_id": race.id,
        "discipline": race.discipline,
        "consistent": race.is_consistent(),
        "total_time": race.total_time(),
        "segments": race.segment_speeds(),
        "hurdle_legs": hurdle_legs,
        "intervals": template
            .iter()
            .zip(race.calculate_intervals(&template))
            .map(|(window, interval)| json!({ "window": window, "interval": interval }))
            .collect::<Vec<_>>(),
        "differentials": discipline
            .differentials
            .iter()
            .map(|diff| json!({ "label": diff.label, "value": race.differential(diff) }))
            .collect::<Vec<_>>(),
    }))
}

pub fn virtual_best(
    config: &AppConfig,
    discipline: DisciplineId,
    paths: &[PathBuf],
    metric: SegmentMetric,
    athlete: &AthleteArgs,
    project: bool,
) -> Result<Value> {
    let races = paths
        .iter()
        .map(|path| read_json::<Race>(path))
        .collect::<Result<Vec<_>>>()?;
    let reference = ReferenceData::global();
    let selection = if project {
        Selection::require(config, athlete)?
    } else {
        Selection::or_default(config, athlete)?
    };
    let template = reference
        .discipline(discipline)?
        .analysis_template(selection.gender, selection.category);

    let best = calculate_virtual_best(discipline, &races, &template, metric)?;
    info!(
        %discipline,
        races = races.len(),
        total = ?best.total_time,
        "virtual best ready"
    );

    let projection = if project {
        let prediction = PredictionEngine::with_reference(reference).predict_discipline(
            &selection.metrics,
            selection.gender,
            selection.category,
            discipline,
        )?;
        Some(project_prediction_to_segments(&prediction, &template, metric))
    } else {
        None
    };

    Ok(json!({
        "virtual_best": best,
        "projection": projection,
    }))
}
