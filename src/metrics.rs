// ABOUTME: Pure metric calculations - BMI, waist-hip ratio, recommended weight range
// ABOUTME: Degenerate measurements produce None sentinels, never errors or clamped zeros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodycheck Contributors

//! Metric calculation
//!
//! All division is guarded against non-positive denominators. An unusable
//! measurement yields `None`, and that sentinel propagates visibly to every
//! consumer — it is never coerced to `0.0` or dropped.

use crate::anthropometric_constants::bmi::{NORMAL_LIMIT, UNDERWEIGHT_LIMIT};
use crate::models::WeightRange;

/// Centimeters per meter, for height conversion
const CM_PER_M: f64 = 100.0;

/// Calculate Body Mass Index
///
/// Formula: `BMI = weight_kg / (height_cm / 100)²`
///
/// Returns `None` when the height converts to a non-positive number of
/// meters. The result is unrounded; presentation rounds to 1 decimal.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    let height_m = height_cm / CM_PER_M;
    if height_m <= 0.0 {
        return None;
    }
    Some(weight_kg / (height_m * height_m))
}

/// Calculate waist-hip ratio
///
/// Formula: `WHR = waist_cm / hip_cm`
///
/// Returns `None` when either measurement is absent or the hip circumference
/// is non-positive, regardless of the waist value. Unrounded; presentation
/// rounds to 2 decimals.
#[must_use]
pub fn waist_hip_ratio(waist_cm: Option<f64>, hip_cm: Option<f64>) -> Option<f64> {
    let waist = waist_cm?;
    let hip = hip_cm?;
    if hip <= 0.0 {
        return None;
    }
    Some(waist / hip)
}

/// Calculate the healthy-weight range for a height
///
/// Bounds are the normal-BMI limits 18.5 and 24.9 applied to the squared
/// height in meters, each rounded to 1 decimal place. Returns `None` when
/// the height is non-positive; both bounds are then unavailable together.
#[must_use]
pub fn recommended_weight_range(height_cm: f64) -> Option<WeightRange> {
    let height_m = height_cm / CM_PER_M;
    if height_m <= 0.0 {
        return None;
    }
    let height_sq = height_m * height_m;
    Some(WeightRange {
        min_kg: round1(UNDERWEIGHT_LIMIT * height_sq),
        max_kg: round1(NORMAL_LIMIT * height_sq),
    })
}

/// Round to 1 decimal place, half away from zero
///
/// This is the pinned rounding rule for weight-range bounds: 56.65625
/// rounds to 56.7 and 76.25625 to 76.3.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
