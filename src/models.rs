// ABOUTME: Core data models for health self-assessment
// ABOUTME: Defines AssessmentInput, AssessmentResult, and the closed input enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodycheck Contributors

//! # Data Models
//!
//! Input and output records for one assessment evaluation. Every evaluation is
//! a fresh, independent computation: inputs are immutable per call and results
//! carry no lifecycle beyond the call that produced them.
//!
//! Gender, exercise level, and injury status are closed enumerations with an
//! explicit unknown/unselected member rather than free-form strings, so branch
//! exhaustiveness is checked by the compiler.

use crate::categories::{BmiCategory, WhrRisk};
use serde::{Deserialize, Serialize};

/// Gender as reported on the assessment form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (WHR risk threshold 0.9)
    Male,
    /// Female (WHR risk threshold 0.85)
    Female,
    /// Other or undisclosed — WHR risk classification is not applicable
    Other,
}

impl Gender {
    /// Fixed-locale label used in report text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

/// Self-reported weekly exercise level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseLevel {
    /// Little or no daily activity
    Sedentary,
    /// Occasional, unstructured exercise
    Light,
    /// 1-3 sessions per week
    Moderate,
    /// 3-5 sessions per week
    Active,
    /// 5+ sessions per week
    VeryActive,
    /// Field left blank on the form
    #[default]
    Unselected,
}

impl ExerciseLevel {
    /// Fixed-locale label used in report text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "occasional exercise",
            Self::Moderate => "1-3 sessions per week",
            Self::Active => "3-5 sessions per week",
            Self::VeryActive => "5+ sessions per week",
            Self::Unselected => "not selected",
        }
    }
}

/// Whether the user reports a history of injury
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InjuryStatus {
    /// Injury history reported
    Yes,
    /// No injury history
    #[default]
    No,
}

/// Recommended healthy-weight range derived from height at normal-BMI bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightRange {
    /// Lower bound in kilograms (BMI 18.5), rounded to 1 decimal
    pub min_kg: f64,
    /// Upper bound in kilograms (BMI 24.9), rounded to 1 decimal
    pub max_kg: f64,
}

/// Validated biometric input for one assessment evaluation
///
/// Required fields are assumed well-formed by the caller (the form layer in
/// [`crate::form`] enforces that); optional measurements are `None` when the
/// user left them blank. Degenerate values such as a zero height are tolerated
/// and surface as sentinel results, never as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Display name for the plan greeting, if supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Gender as reported on the form
    pub gender: Gender,
    /// Age in whole years
    pub age_years: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Waist circumference in centimeters, if measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    /// Hip circumference in centimeters, if measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
    /// Self-reported weekly exercise level
    pub exercise_level: ExerciseLevel,
    /// Whether the user reports an injury history
    pub injury_status: InjuryStatus,
    /// Body parts marked on the body map, in marking order
    #[serde(default)]
    pub injured_parts: Vec<String>,
}

impl Default for AssessmentInput {
    fn default() -> Self {
        Self {
            nickname: None,
            gender: Gender::Other,
            age_years: 0,
            height_cm: 0.0,
            weight_kg: 0.0,
            waist_cm: None,
            hip_cm: None,
            exercise_level: ExerciseLevel::Unselected,
            injury_status: InjuryStatus::No,
            injured_parts: Vec::new(),
        }
    }
}

/// Computed assessment for one evaluation call
///
/// `None` metrics mean the corresponding measurement was missing or
/// mathematically unusable; the value is never coerced to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Body Mass Index, unrounded; `None` when height is non-positive
    pub bmi: Option<f64>,
    /// BMI health category
    pub bmi_category: BmiCategory,
    /// Waist-hip ratio, unrounded; `None` when waist/hip missing or hip non-positive
    pub whr: Option<f64>,
    /// Cardiovascular risk category from WHR and gender
    pub whr_risk: WhrRisk,
    /// Healthy-weight range for the given height; `None` when height is non-positive
    pub recommended_weight_range: Option<WeightRange>,
    /// Generated multi-section exercise plan narrative
    pub plan_text: String,
}
