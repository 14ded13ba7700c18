// ABOUTME: Predict command turning athlete metrics into a race-time prediction
// ABOUTME: Merges metric sources, adds coaching diagnostics and optionally projects onto analysis windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use serde_json::{json, Value};
use sprintlab::config::AppConfig;
use sprintlab::formatters::format_race_time;
use sprintlab::intelligence::{
    analyze_consistency, project_prediction_to_segments, CoachingAnalyzer, DisciplineId,
    PredictionEngine, ReferenceData,
};
use sprintlab::models::SegmentMetric;
use tracing::info;

use super::{read_json, Selection};
use crate::AthleteArgs;

pub fn run(
    config: &AppConfig,
    discipline: DisciplineId,
    athlete: &AthleteArgs,
    metric_args: Vec<(String, f64)>,
    metrics_file: Option<&Path>,
    segments: bool,
) -> Result<Value> {
    let mut selection = Selection::require(config, athlete)?;
    if let Some(path) = metrics_file {
        let extra: BTreeMap<String, f64> = read_json(path)?;
        for (key, value) in extra {
            selection.metrics.set(key, Some(value));
        }
    }
    for (key, value) in metric_args {
        selection.metrics.set(key, Some(value));
    }

    let reference = ReferenceData::global();
    let engine = PredictionEngine::with_reference(reference);
    let prediction = engine.predict_discipline(
        &selection.metrics,
        selection.gender,
        selection.category,
        discipline,
    )?;
    info!(
        %discipline,
        time = %format_race_time(prediction.time),
        "prediction ready"
    );

    let diagnostics = CoachingAnalyzer::with_reference(reference).analyze(
        &prediction.profile,
        &selection.metrics,
        selection.gender,
        selection.category,
    );
    let consistency =
        analyze_consistency(prediction.time, discipline.as_str(), &selection.metrics);

    let projection = if segments {
        let template = reference
            .discipline(discipline)?
            .analysis_template(selection.gender, selection.category);
        Some(project_prediction_to_segments(
            &prediction,
            &template,
            SegmentMetric::Speed,
        ))
    } else {
        None
    };

    Ok(json!({
        "gender": selection.gender,
        "category": selection.category,
        "formatted_time": format_race_time(prediction.time),
        "prediction": prediction,
        "diagnostics": diagnostics,
        "consistency": consistency,
        "segments": projection,
    }))
}
