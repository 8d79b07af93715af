// ABOUTME: Assessment engine combining metric calculation, categorization, and plan generation
// ABOUTME: One pure, infallible evaluate call per assessment; no shared state between calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodycheck Contributors

//! Assessment engine
//!
//! The engine is the crate's single call contract: a validated
//! [`AssessmentInput`] in, an [`AssessmentResult`] out. Evaluation is
//! synchronous, side-effect free, and runs to completion in one invocation;
//! there is no state carried between calls.

use crate::categories::{BmiCategory, WhrRisk};
use crate::metrics;
use crate::models::{AssessmentInput, AssessmentResult};
use crate::plan;
use tracing::debug;

/// Pure assessment engine
///
/// Stateless by design: thresholds are fixed literals, so there is nothing
/// to configure and every evaluation is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentEngine;

impl AssessmentEngine {
    /// Create a new engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluate one assessment
    ///
    /// Computes BMI, WHR, and the healthy-weight range, classifies them,
    /// and generates the exercise-plan narrative. Never fails: degenerate
    /// measurements surface as `None` metrics, `Unknown` categories, and
    /// prompt lines inside the plan.
    #[must_use]
    pub fn evaluate(&self, input: &AssessmentInput) -> AssessmentResult {
        let bmi = metrics::bmi(input.weight_kg, input.height_cm);
        let whr = metrics::waist_hip_ratio(input.waist_cm, input.hip_cm);
        let recommended_weight_range = metrics::recommended_weight_range(input.height_cm);

        let bmi_category = BmiCategory::classify(bmi);
        let whr_risk = WhrRisk::classify(whr, input.gender);

        debug!(
            ?bmi,
            ?bmi_category,
            ?whr,
            ?whr_risk,
            gender = input.gender.label(),
            "assessment metrics computed"
        );

        let plan_text = plan::generate_exercise_plan(input);

        AssessmentResult {
            bmi,
            bmi_category,
            whr,
            whr_risk,
            recommended_weight_range,
            plan_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    #[test]
    fn test_evaluate_is_deterministic() {
        let input = AssessmentInput {
            gender: Gender::Female,
            age_years: 29,
            height_cm: 165.0,
            weight_kg: 58.0,
            waist_cm: Some(70.0),
            hip_cm: Some(94.0),
            ..AssessmentInput::default()
        };
        let engine = AssessmentEngine::new();
        let first = engine.evaluate(&input);
        let second = engine.evaluate(&input);
        assert_eq!(first.bmi, second.bmi);
        assert_eq!(first.whr, second.whr);
        assert_eq!(first.plan_text, second.plan_text);
    }

    #[test]
    fn test_degenerate_height_propagates_to_all_consumers() {
        let input = AssessmentInput {
            gender: Gender::Male,
            age_years: 30,
            height_cm: 0.0,
            weight_kg: 70.0,
            ..AssessmentInput::default()
        };
        let result = AssessmentEngine::new().evaluate(&input);
        assert!(result.bmi.is_none());
        assert_eq!(result.bmi_category, BmiCategory::Unknown);
        assert!(result.recommended_weight_range.is_none());
    }
}
