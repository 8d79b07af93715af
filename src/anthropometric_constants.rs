// ABOUTME: Anthropometric threshold constants for BMI, WHR, and age-band classification
// ABOUTME: Fixed published values; no configuration or locale variance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodycheck Contributors

//! Anthropometric constants based on published health guidelines
//!
//! Every threshold in this crate lives here as a named literal. Category
//! boundaries are half-open and lower-inclusive; see [`crate::categories`]
//! for how they are applied.

/// Body Mass Index category boundaries (kg/m²)
///
/// Reference: WHO Technical Report Series 894, "Obesity: preventing and
/// managing the global epidemic" (2000)
pub mod bmi {
    /// Below this value: underweight. This is also the lower bound of the
    /// recommended-weight calculation.
    pub const UNDERWEIGHT_LIMIT: f64 = 18.5;

    /// Upper bound of the normal band and of the recommended-weight
    /// calculation; at or above this value: overweight
    pub const NORMAL_LIMIT: f64 = 24.9;

    /// At or above this value: obese
    pub const OVERWEIGHT_LIMIT: f64 = 29.9;
}

/// Waist-hip ratio cardiovascular risk thresholds, gender-specific
///
/// Reference: WHO, "Waist circumference and waist-hip ratio: report of a WHO
/// expert consultation" (2008). Values strictly above the threshold indicate
/// substantially increased metabolic risk; the boundary value itself is
/// low-risk.
pub mod whr {
    /// Male risk threshold
    pub const MALE_RISK_THRESHOLD: f64 = 0.9;

    /// Female risk threshold
    pub const FEMALE_RISK_THRESHOLD: f64 = 0.85;
}

/// Age bands for supplemental guidance (years, lower-inclusive)
pub mod age_bands {
    /// Minimum age for adult guidance; below this the plan asks for a valid
    /// adult age instead of prescribing
    pub const ADULT_MIN: u32 = 18;

    /// Start of the band that adds warm-up and bone-health emphasis
    pub const MIDLIFE_MIN: u32 = 40;
}

/// Weekly aerobic exercise minimums for elevated cardiovascular risk
///
/// Reference: WHO guidelines on physical activity and sedentary behaviour
/// (2020): 150 minutes of moderate or 75 minutes of vigorous aerobic
/// activity per week
pub mod aerobic_targets {
    /// Minimum weekly minutes at moderate intensity
    pub const MODERATE_MINUTES_PER_WEEK: u32 = 150;

    /// Minimum weekly minutes at vigorous intensity
    pub const VIGOROUS_MINUTES_PER_WEEK: u32 = 75;
}
