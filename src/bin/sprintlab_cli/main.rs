// ABOUTME: SprintLab CLI - command-line front end for prediction and race analysis
// ABOUTME: Predicts race times, analyzes recorded races and builds virtual bests as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Predict a 100m from a 30m fly test
//! sprintlab-cli predict 100m --gender M --category ELITE --metric test_30m_fly=2.90
//!
//! # Predict from an athlete file, projecting onto the analysis windows
//! sprintlab-cli predict 200m --athlete athlete.json --segments
//!
//! # Break a recorded race into segments and analysis intervals
//! sprintlab-cli analyze race.json --gender F --category U20
//!
//! # Combine several races of one event
//! sprintlab-cli virtual-best 100m heat.json final.json --metric time
//!
//! # List the configured disciplines
//! sprintlab-cli disciplines
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sprintlab::config::{AppConfig, OutputFormat};
use sprintlab::intelligence::DisciplineId;
use sprintlab::models::{AgeCategory, Gender, SegmentMetric};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "sprintlab-cli",
    about = "SprintLab sprint prediction and race analysis CLI",
    long_about = "Predicts sprint race times from test metrics, analyzes recorded races and combines them into virtual bests."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format override (json, pretty)
    #[arg(long, global = true)]
    output: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Athlete selection shared by commands that need gender and category
#[derive(clap::Args)]
struct AthleteArgs {
    /// Athlete JSON file (gender, birth year and metrics)
    #[arg(long)]
    athlete: Option<PathBuf>,

    /// Gender (M or F)
    #[arg(long)]
    gender: Option<Gender>,

    /// Age category (U16, U18, U20, U23, ELITE)
    #[arg(long, conflicts_with = "birth_year")]
    category: Option<AgeCategory>,

    /// Birth year, category derived for the reference season
    #[arg(long)]
    birth_year: Option<i32>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Predict a race time and split profile
    Predict {
        /// Discipline (50m, 60m, 100m, 200m, 400m, 50mH, 60mH, 100mH, 110mH, 400mH)
        discipline: DisciplineId,

        #[command(flatten)]
        athlete: AthleteArgs,

        /// Metric as key=value, repeatable (e.g. test_30m_fly=2.90)
        #[arg(long = "metric", value_parser = commands::parse_metric)]
        metrics: Vec<(String, f64)>,

        /// Metrics JSON file (object of key to value)
        #[arg(long)]
        metrics_file: Option<PathBuf>,

        /// Project the prediction onto the discipline's analysis windows
        #[arg(long)]
        segments: bool,
    },

    /// Analyze a recorded race
    Analyze {
        /// Race JSON file
        race: PathBuf,

        #[command(flatten)]
        athlete: AthleteArgs,
    },

    /// Combine several races of one discipline into a virtual best
    VirtualBest {
        /// Discipline every race must belong to
        discipline: DisciplineId,

        /// Race JSON files
        #[arg(required = true)]
        races: Vec<PathBuf>,

        /// Metric compared per window (speed, time, step_frequency, step_length)
        #[arg(long, default_value = "speed")]
        metric: SegmentMetric,

        #[command(flatten)]
        athlete: AthleteArgs,

        /// Also project a prediction for this athlete onto the windows
        #[arg(long)]
        project: bool,
    },

    /// List the configured disciplines
    Disciplines,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if cli.verbose {
        config.logging = config.logging.with_level("debug");
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    config.logging.init()?;
    debug!(output = %config.output, "SprintLab CLI");

    let report = match cli.command {
        Command::Predict {
            discipline,
            athlete,
            metrics,
            metrics_file,
            segments,
        } => commands::predict::run(
            &config,
            discipline,
            &athlete,
            metrics,
            metrics_file.as_deref(),
            segments,
        )?,
        Command::Analyze { race, athlete } => commands::race::analyze(&config, &race, &athlete)?,
        Command::VirtualBest {
            discipline,
            races,
            metric,
            athlete,
            project,
        } => commands::race::virtual_best(&config, discipline, &races, metric, &athlete, project)?,
        Command::Disciplines => commands::disciplines::list(),
    };

    println!("{}", config.output.render(&report)?);
    Ok(())
}
