// ABOUTME: Main library entry point for the bodycheck health self-assessment engine
// ABOUTME: Computes BMI and WHR, classifies them, and generates exercise-plan narratives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodycheck Contributors

#![deny(unsafe_code)]

//! # Bodycheck
//!
//! A pure health self-assessment engine: validated biometric inputs in,
//! computed metrics, health categories, and a templated exercise-plan
//! narrative out. No I/O, no persistence, no shared state between
//! evaluations — rendering, charting, and input collection belong to
//! embedding applications.
//!
//! ## Architecture
//!
//! - **Models**: closed input enums and the input/result records
//! - **Metrics**: BMI, waist-hip ratio, and healthy-weight range with
//!   sentinel semantics for degenerate measurements
//! - **Categories**: fixed-threshold classification plus presentation
//!   color lookups for chart renderers
//! - **Plan**: the seven-section exercise-plan generator
//! - **Engine**: the single `evaluate` call tying the above together
//! - **Form**: the fallible boundary turning raw form strings into input
//!
//! ## Example
//!
//! ```rust
//! use bodycheck::engine::AssessmentEngine;
//! use bodycheck::models::{AssessmentInput, Gender};
//!
//! let input = AssessmentInput {
//!     gender: Gender::Male,
//!     age_years: 32,
//!     height_cm: 175.0,
//!     weight_kg: 70.0,
//!     ..AssessmentInput::default()
//! };
//! let result = AssessmentEngine::new().evaluate(&input);
//! assert!(result.bmi.is_some());
//! assert!(!result.plan_text.is_empty());
//! ```

/// Fixed anthropometric thresholds with references
pub mod anthropometric_constants;

/// BMI and WHR category classification and presentation lookups
pub mod categories;

/// The assessment engine: one pure evaluate call per assessment
pub mod engine;

/// Error codes and the boundary error type
pub mod errors;

/// Raw form field validation
pub mod form;

/// Logging configuration for embedding binaries
pub mod logging;

/// Pure metric calculations
pub mod metrics;

/// Input and output records
pub mod models;

/// Exercise-plan text generation
pub mod plan;

/// One-line result summaries for display layers
pub mod report;

pub use categories::{BmiCategory, WhrRisk};
pub use engine::AssessmentEngine;
pub use errors::{AppError, AppResult, ErrorCode};
pub use form::RawAssessmentForm;
pub use models::{
    AssessmentInput, AssessmentResult, ExerciseLevel, Gender, InjuryStatus, WeightRange,
};
