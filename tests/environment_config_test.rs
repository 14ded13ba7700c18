// ABOUTME: Tests for environment-driven application and logging configuration
// ABOUTME: Validates SPRINTLAB_* parsing, output rendering and season-based categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;
use sprintlab::config::{AppConfig, OutputFormat};
use sprintlab::logging::{LogFormat, LoggingConfig};
use sprintlab::models::{AgeCategory, Athlete, Gender};

fn clear_env() {
    for key in ["SPRINTLAB_REFERENCE_YEAR", "SPRINTLAB_OUTPUT", "LOG_FORMAT"] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.reference_year, None);
    assert_eq!(config.output, OutputFormat::Pretty);
}

#[test]
#[serial]
fn test_reference_year_fixes_category() {
    clear_env();
    env::set_var("SPRINTLAB_REFERENCE_YEAR", "2024");
    env::set_var("SPRINTLAB_OUTPUT", "json");
    let config = AppConfig::from_env();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.reference_year, Some(2024));
    assert_eq!(config.output, OutputFormat::Json);
    let athlete = Athlete::new("Kai", 2007, Gender::Male);
    assert_eq!(config.category_of(&athlete), AgeCategory::U18);
}

#[test]
#[serial]
fn test_invalid_environment_is_rejected() {
    clear_env();
    env::set_var("SPRINTLAB_REFERENCE_YEAR", "next year");
    assert!(AppConfig::from_env().is_err());
    clear_env();

    env::set_var("SPRINTLAB_OUTPUT", "xml");
    assert!(AppConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_log_format_from_environment() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    let logging = LoggingConfig::from_env();
    clear_env();
    assert_eq!(logging.format, LogFormat::Json);
    assert_eq!(logging.service_name, "sprintlab");
}

#[test]
fn test_output_rendering() {
    let value = serde_json::json!({ "time": 10.78 });
    assert_eq!(OutputFormat::Json.render(&value).unwrap(), r#"{"time":10.78}"#);
    assert!(OutputFormat::Pretty.render(&value).unwrap().contains('\n'));
}
