// ABOUTME: Bodycheck CLI - runs one health self-assessment from command-line form fields
// ABOUTME: Prints result summaries and the exercise plan as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodycheck Contributors
//!
//! Usage:
//! ```bash
//! # Full assessment with optional measurements
//! bodycheck-cli --gender male --age 32 --height-cm 175 --weight-kg 70 \
//!     --waist-cm 80 --hip-cm 95 --exercise-level active
//!
//! # Minimal assessment, JSON output
//! bodycheck-cli --gender female --age 29 --height-cm 165 --weight-kg 58 --format json
//!
//! # Injury history with marked body parts
//! bodycheck-cli --gender male --age 45 --height-cm 180 --weight-kg 92 \
//!     --injury yes --injured-part knee --injured-part shoulder
//! ```

use bodycheck::engine::AssessmentEngine;
use bodycheck::errors::AppResult;
use bodycheck::form::RawAssessmentForm;
use bodycheck::logging::{init_logging, LogFormat, LoggingConfig};
use bodycheck::report;
use clap::{Parser, ValueEnum};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "bodycheck-cli",
    about = "Health self-assessment: BMI, waist-hip ratio, and exercise plan",
    long_about = "Runs one assessment from form-style fields and prints the computed metrics, \
                  health categories, and a personalized exercise plan."
)]
struct Cli {
    /// Display name for the plan greeting
    #[arg(long)]
    nickname: Option<String>,

    /// Gender (male, female, or anything else for other)
    #[arg(long)]
    gender: String,

    /// Age in years
    #[arg(long)]
    age: String,

    /// Height in centimeters
    #[arg(long)]
    height_cm: String,

    /// Weight in kilograms
    #[arg(long)]
    weight_kg: String,

    /// Waist circumference in centimeters
    #[arg(long)]
    waist_cm: Option<String>,

    /// Hip circumference in centimeters
    #[arg(long)]
    hip_cm: Option<String>,

    /// Exercise level (sedentary, light, moderate, active, very-active)
    #[arg(long)]
    exercise_level: Option<String>,

    /// Injury history (yes or no)
    #[arg(long)]
    injury: Option<String>,

    /// Injured body part, repeatable
    #[arg(long = "injured-part")]
    injured_parts: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable summaries and plan text
    Text,
    /// The full assessment result as JSON
    Json,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: if cli.verbose { "debug".into() } else { "info".into() },
        format: LogFormat::Compact,
    };
    init_logging(&logging)?;

    let form = RawAssessmentForm {
        nickname: cli.nickname,
        gender: Some(cli.gender),
        age: Some(cli.age),
        height_cm: Some(cli.height_cm),
        weight_kg: Some(cli.weight_kg),
        waist_cm: cli.waist_cm,
        hip_cm: cli.hip_cm,
        exercise_level: cli.exercise_level,
        injury_status: cli.injury,
        injured_parts: cli.injured_parts,
    };

    let input = form.parse()?;
    info!(gender = input.gender.label(), age = input.age_years, "running assessment");

    let height_cm = input.height_cm;
    let result = AssessmentEngine::new().evaluate(&input);

    match cli.format {
        OutputFormat::Text => {
            println!("{}", report::bmi_summary(&result));
            println!("{}", report::whr_summary(&result));
            println!("{}", report::weight_range_summary(height_cm, &result));
            println!();
            println!("{}", result.plan_text);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
