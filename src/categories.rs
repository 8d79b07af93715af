// ABOUTME: Health category classification for BMI and waist-hip ratio
// ABOUTME: Half-open fixed-threshold bands plus presentation color and label lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodycheck Contributors

//! Categorization
//!
//! Maps continuous metrics to discrete health categories using the fixed
//! thresholds in [`crate::anthropometric_constants`]. Bands are half-open and
//! lower-inclusive, so every valid metric value lands in exactly one
//! category. The color lookups exist for chart renderers; they are pure so
//! presentation stays reproducible without this crate owning any drawing.

use crate::anthropometric_constants::{bmi, whr};
use crate::models::Gender;
use serde::{Deserialize, Serialize};

/// Neutral color for unknown categories
const NEUTRAL_COLOR: &str = "#ccc";

/// BMI health category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 24.9)
    Normal,
    /// BMI in [24.9, 29.9)
    Overweight,
    /// BMI at or above 29.9
    Obese,
    /// BMI could not be computed
    Unknown,
}

impl BmiCategory {
    /// Classify a BMI value; `None` maps to [`Self::Unknown`]
    #[must_use]
    pub fn classify(value: Option<f64>) -> Self {
        let Some(v) = value else {
            return Self::Unknown;
        };
        if v < bmi::UNDERWEIGHT_LIMIT {
            Self::Underweight
        } else if v < bmi::NORMAL_LIMIT {
            Self::Normal
        } else if v < bmi::OVERWEIGHT_LIMIT {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Fixed-locale category label; empty for [`Self::Unknown`]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
            Self::Unknown => "",
        }
    }

    /// Presentation color for chart renderers
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Underweight => "#0dcaf0",
            Self::Normal => "#28a745",
            Self::Overweight => "#ffc107",
            Self::Obese => "#dc3545",
            Self::Unknown => NEUTRAL_COLOR,
        }
    }
}

/// Cardiovascular risk category from waist-hip ratio
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WhrRisk {
    /// At or below the gender-specific threshold
    LowRisk,
    /// Strictly above the gender-specific threshold
    HighRisk,
    /// WHR missing, or no threshold defined for the reported gender
    Unknown,
}

impl WhrRisk {
    /// Classify a WHR value against the gender-specific threshold
    ///
    /// The boundary value itself is low-risk; only values strictly above the
    /// threshold are high-risk. For [`Gender::Other`] no threshold is
    /// defined and the category is [`Self::Unknown`] regardless of value —
    /// an explicit not-applicable surface rather than a silent default to
    /// either gendered threshold.
    #[must_use]
    pub fn classify(value: Option<f64>, gender: Gender) -> Self {
        let Some(v) = value else {
            return Self::Unknown;
        };
        let threshold = match gender {
            Gender::Male => whr::MALE_RISK_THRESHOLD,
            Gender::Female => whr::FEMALE_RISK_THRESHOLD,
            Gender::Other => return Self::Unknown,
        };
        if v > threshold {
            Self::HighRisk
        } else {
            Self::LowRisk
        }
    }

    /// Fixed-locale category label; empty for [`Self::Unknown`]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LowRisk => "lower cardiovascular risk",
            Self::HighRisk => "increased cardiovascular risk",
            Self::Unknown => "",
        }
    }

    /// Presentation color for chart renderers
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::LowRisk => "#28a745",
            Self::HighRisk => "#dc3545",
            Self::Unknown => NEUTRAL_COLOR,
        }
    }
}
