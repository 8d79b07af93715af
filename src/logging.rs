// ABOUTME: Logging configuration and tracing-subscriber initialization
// ABOUTME: Env-filtered structured output with selectable format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodycheck Contributors

//! Logging setup for binaries embedding the engine
//!
//! The library itself only emits `tracing` events; initializing a subscriber
//! is the embedding binary's job. `RUST_LOG` overrides the configured level
//! when set.

use crate::errors::{AppError, AppResult};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for machine consumption
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
        }
    }
}

/// Initialize the global tracing subscriber
///
/// # Errors
///
/// Returns a config error when a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(false))
            .try_init(),
    };
    result.map_err(|err| AppError::config(err.to_string()))
}
