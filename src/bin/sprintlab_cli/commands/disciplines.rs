// ABOUTME: Disciplines command listing the reference registry
// ABOUTME: Reports identifier, name, distance and predictor type per discipline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{json, Value};
use sprintlab::intelligence::ReferenceData;

pub fn list() -> Value {
    let disciplines: Vec<Value> = ReferenceData::global()
        .disciplines
        .values()
        .map(|config| {
            json!({
                "id": config.id,
                "name": config.name,
                "distance": config.distance,
                "type": config.kind.name(),
            })
        })
        .collect();
    json!({ "disciplines": disciplines })
}
