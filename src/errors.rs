// ABOUTME: Unified error handling for the assessment boundary (form parsing, CLI output)
// ABOUTME: Defines error codes, the AppError type, and constructor helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodycheck Contributors

//! # Unified Error Handling
//!
//! Errors exist only at the edges of this crate: parsing raw form fields and
//! serializing CLI output. Engine evaluation itself is infallible — degenerate
//! measurements surface as sentinel values ([`None`] metrics and `Unknown`
//! categories), never as errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used at the assessment boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// A required form field was absent or blank
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField,
    /// A field was present but not in a parseable format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat,
    /// A numeric field was outside its allowed range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange,
    /// Result serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Runtime configuration problem (logging setup)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
}

/// Application error with structured code and message
#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Input failed validation
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A required form field was absent or blank
    pub fn missing_required_field(field: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Required field missing: {}", field.into()),
        )
    }

    /// A field was present but not parseable
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// A numeric field was outside its allowed range
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Runtime configuration problem
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, err.to_string())
    }
}

/// Result type alias using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_codes() {
        assert_eq!(AppError::invalid_input("bad").code, ErrorCode::InvalidInput);
        assert_eq!(
            AppError::missing_required_field("age").code,
            ErrorCode::MissingRequiredField
        );
        assert_eq!(
            AppError::value_out_of_range("height").code,
            ErrorCode::ValueOutOfRange
        );
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = AppError::missing_required_field("height");
        assert!(err.message.contains("height"));
    }
}
