// ABOUTME: Raw form field validation - the boundary between user input and the engine
// ABOUTME: Checks required-field presence, numeric parseability, and positivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodycheck Contributors

//! Form input parsing
//!
//! Converts raw string form fields into a validated [`AssessmentInput`].
//! This is the only fallible boundary in the crate: required fields must be
//! present, numeric, and positive, while optional measurements may be left
//! blank. Unrecognized gender and exercise-level values fall back to the
//! explicit unknown members rather than failing, so the engine's generic
//! branches stay reachable from real form data.

use crate::errors::{AppError, AppResult};
use crate::models::{AssessmentInput, ExerciseLevel, Gender, InjuryStatus};
use serde::{Deserialize, Serialize};

/// Raw assessment form fields, as submitted
///
/// Every scalar arrives as an optional string; the injured-parts list comes
/// from the body map collector, which owns and mutates its own marking state
/// and hands the result over explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAssessmentForm {
    /// Optional display name
    pub nickname: Option<String>,
    /// Gender selection ("male", "female", anything else maps to other)
    pub gender: Option<String>,
    /// Age in years
    pub age: Option<String>,
    /// Height in centimeters
    pub height_cm: Option<String>,
    /// Weight in kilograms
    pub weight_kg: Option<String>,
    /// Waist circumference in centimeters (optional)
    pub waist_cm: Option<String>,
    /// Hip circumference in centimeters (optional)
    pub hip_cm: Option<String>,
    /// Exercise level selection (blank means unselected)
    pub exercise_level: Option<String>,
    /// Injury history radio value ("yes"/"no", absent means no)
    pub injury_status: Option<String>,
    /// Body parts marked on the body map
    #[serde(default)]
    pub injured_parts: Vec<String>,
}

impl RawAssessmentForm {
    /// Validate the form and produce an [`AssessmentInput`]
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] when a required field is missing or blank,
    /// when a numeric field does not parse, or when a required measurement
    /// is not positive. Optional measurements may be absent, but garbled
    /// values are rejected rather than silently dropped.
    pub fn parse(&self) -> AppResult<AssessmentInput> {
        let gender = parse_gender(required_str(self.gender.as_deref(), "gender")?);

        let age_years = parse_required_u32(self.age.as_deref(), "age")?;
        if age_years == 0 {
            return Err(AppError::value_out_of_range("age must be positive"));
        }

        let height_cm = parse_required_positive_f64(self.height_cm.as_deref(), "height_cm")?;
        let weight_kg = parse_required_positive_f64(self.weight_kg.as_deref(), "weight_kg")?;

        let waist_cm = parse_optional_f64(self.waist_cm.as_deref(), "waist_cm")?;
        let hip_cm = parse_optional_f64(self.hip_cm.as_deref(), "hip_cm")?;

        let exercise_level = self
            .exercise_level
            .as_deref()
            .map_or(ExerciseLevel::Unselected, parse_exercise_level);
        let injury_status = self
            .injury_status
            .as_deref()
            .map_or(InjuryStatus::No, parse_injury_status);

        let nickname = self
            .nickname
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        Ok(AssessmentInput {
            nickname,
            gender,
            age_years,
            height_cm,
            weight_kg,
            waist_cm,
            hip_cm,
            exercise_level,
            injury_status,
            injured_parts: self.injured_parts.clone(),
        })
    }
}

/// Require a non-blank string field
fn required_str<'a>(value: Option<&'a str>, field: &str) -> AppResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::missing_required_field(field)),
    }
}

fn parse_required_u32(value: Option<&str>, field: &str) -> AppResult<u32> {
    let raw = required_str(value, field)?;
    raw.parse::<u32>()
        .map_err(|_| AppError::invalid_format(format!("{field} is not a whole number: {raw:?}")))
}

fn parse_required_positive_f64(value: Option<&str>, field: &str) -> AppResult<f64> {
    let raw = required_str(value, field)?;
    let parsed = raw
        .parse::<f64>()
        .map_err(|_| AppError::invalid_format(format!("{field} is not a number: {raw:?}")))?;
    if parsed <= 0.0 {
        return Err(AppError::value_out_of_range(format!(
            "{field} must be positive, got {parsed}"
        )));
    }
    Ok(parsed)
}

/// Parse an optional measurement: absent or blank is fine, garbage is not
fn parse_optional_f64(value: Option<&str>, field: &str) -> AppResult<Option<f64>> {
    match value.map(str::trim) {
        None => Ok(None),
        Some("") => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| AppError::invalid_format(format!("{field} is not a number: {raw:?}"))),
    }
}

/// Map the gender selection; anything unrecognized is the explicit other/unknown member
fn parse_gender(value: &str) -> Gender {
    match value.to_ascii_lowercase().as_str() {
        "male" | "m" => Gender::Male,
        "female" | "f" => Gender::Female,
        _ => Gender::Other,
    }
}

/// Map the exercise-level selection; unrecognized values stay unselected
fn parse_exercise_level(value: &str) -> ExerciseLevel {
    match value.to_ascii_lowercase().as_str() {
        "sedentary" => ExerciseLevel::Sedentary,
        "light" => ExerciseLevel::Light,
        "moderate" => ExerciseLevel::Moderate,
        "active" => ExerciseLevel::Active,
        "very-active" | "very_active" => ExerciseLevel::VeryActive,
        _ => ExerciseLevel::Unselected,
    }
}

/// Map the injury radio value; anything but an explicit yes means no
fn parse_injury_status(value: &str) -> InjuryStatus {
    if value.eq_ignore_ascii_case("yes") {
        InjuryStatus::Yes
    } else {
        InjuryStatus::No
    }
}
