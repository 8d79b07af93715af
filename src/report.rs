// ABOUTME: One-line textual result summaries shown next to the charts
// ABOUTME: BMI, WHR, and recommended-weight lines with invalid-input notices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodycheck Contributors

//! Result summary lines
//!
//! The short human-readable lines a display layer renders beside the charts.
//! BMI is presented to 1 decimal place, WHR to 2. Invalid metrics produce a
//! fixed notice instead of a number — presentation never invents a value the
//! engine did not compute.

use crate::models::AssessmentResult;

/// One-line BMI summary with category suffix
#[must_use]
pub fn bmi_summary(result: &AssessmentResult) -> String {
    match result.bmi {
        Some(value) => {
            let label = result.bmi_category.label();
            if label.is_empty() {
                format!("Your BMI is {value:.1}.")
            } else {
                format!("Your BMI is {value:.1} ({label}).")
            }
        }
        None => "Height is invalid; BMI cannot be computed.".to_owned(),
    }
}

/// One-line WHR summary with risk suffix
#[must_use]
pub fn whr_summary(result: &AssessmentResult) -> String {
    match result.whr {
        Some(value) => {
            let label = result.whr_risk.label();
            if label.is_empty() {
                format!("Your waist-hip ratio is {value:.2}.")
            } else {
                format!("Your waist-hip ratio is {value:.2} ({label}).")
            }
        }
        None => "Waist or hip measurement not provided or invalid.".to_owned(),
    }
}

/// One-line recommended-weight summary for the given height
#[must_use]
pub fn weight_range_summary(height_cm: f64, result: &AssessmentResult) -> String {
    match result.recommended_weight_range {
        Some(range) => format!(
            "For your height ({height_cm} cm), the recommended weight range is {} kg - {} kg.",
            range.min_kg, range.max_kg
        ),
        None => "Height is invalid; the recommended weight range cannot be computed.".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AssessmentEngine;
    use crate::models::{AssessmentInput, Gender};

    fn evaluate(input: &AssessmentInput) -> AssessmentResult {
        AssessmentEngine::new().evaluate(input)
    }

    #[test]
    fn test_summaries_for_valid_measurements() {
        let input = AssessmentInput {
            gender: Gender::Male,
            age_years: 32,
            height_cm: 175.0,
            weight_kg: 70.0,
            waist_cm: Some(80.0),
            hip_cm: Some(95.0),
            ..AssessmentInput::default()
        };
        let result = evaluate(&input);
        assert_eq!(bmi_summary(&result), "Your BMI is 22.9 (normal).");
        assert_eq!(
            whr_summary(&result),
            "Your waist-hip ratio is 0.84 (lower cardiovascular risk)."
        );
        assert_eq!(
            weight_range_summary(input.height_cm, &result),
            "For your height (175 cm), the recommended weight range is 56.7 kg - 76.3 kg."
        );
    }

    #[test]
    fn test_summaries_for_invalid_measurements() {
        let input = AssessmentInput {
            gender: Gender::Male,
            age_years: 32,
            height_cm: 0.0,
            weight_kg: 70.0,
            ..AssessmentInput::default()
        };
        let result = evaluate(&input);
        assert!(bmi_summary(&result).contains("invalid"));
        assert!(whr_summary(&result).contains("not provided or invalid"));
        assert!(weight_range_summary(input.height_cm, &result).contains("invalid"));
    }

    #[test]
    fn test_whr_summary_without_risk_for_other_gender() {
        let input = AssessmentInput {
            gender: Gender::Other,
            age_years: 32,
            height_cm: 175.0,
            weight_kg: 70.0,
            waist_cm: Some(80.0),
            hip_cm: Some(95.0),
            ..AssessmentInput::default()
        };
        let result = evaluate(&input);
        assert_eq!(whr_summary(&result), "Your waist-hip ratio is 0.84.");
    }
}
