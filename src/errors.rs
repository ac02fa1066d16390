// ABOUTME: Unified error handling for the workout calculator
// ABOUTME: Defines error codes, AppError, and the AppResult alias used across modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! # Unified Error Handling System
//!
//! This module provides the centralized error handling for fittrack. It
//! defines standard error codes and a single error type so every module
//! reports failures the same way.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Workout kind tag is not one of the supported codes
    #[serde(rename = "UNKNOWN_WORKOUT_KIND")]
    UnknownWorkoutKind,
    /// Parameter count does not match the kind's expected field count
    #[serde(rename = "ARITY_MISMATCH")]
    ArityMismatch,
    /// Duration is zero or negative, mean speed is undefined
    #[serde(rename = "INVALID_DURATION")]
    InvalidDuration,
    /// A workout kind exists without a calorie formula
    #[serde(rename = "NOT_IMPLEMENTED")]
    NotImplemented,
    /// Data serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnknownWorkoutKind => "The workout kind tag is not recognized",
            Self::ArityMismatch => "The parameter count does not match the workout kind",
            Self::InvalidDuration => "The workout duration must be positive",
            Self::NotImplemented => "No calorie formula is defined for this workout kind",
            Self::SerializationError => "Data serialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Clone, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Unknown workout kind tag
    pub fn unknown_workout_kind(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self::new(
            ErrorCode::UnknownWorkoutKind,
            format!("Unknown workout kind: '{tag}'. Valid options: SWM, RUN, WLK"),
        )
    }

    /// Parameter arity mismatch for a workout kind
    #[must_use]
    pub fn arity_mismatch(kind: &str, expected: usize, actual: usize) -> Self {
        Self::new(
            ErrorCode::ArityMismatch,
            format!("{kind} expects {expected} parameters, got {actual}"),
        )
    }

    /// Non-positive duration
    #[must_use]
    pub fn invalid_duration(duration_hours: f64) -> Self {
        Self::new(
            ErrorCode::InvalidDuration,
            format!("Duration {duration_hours} h is not positive, mean speed is undefined"),
        )
    }

    /// Missing calorie formula for a kind.
    ///
    /// Unreachable while the kind enumeration stays closed; kept so an added
    /// kind without a formula fails loudly instead of returning garbage.
    pub fn not_implemented(kind: impl Into<String>) -> Self {
        let kind = kind.into();
        Self::new(
            ErrorCode::NotImplemented,
            format!("No calorie formula defined for workout kind '{kind}'"),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Conversion from `serde_json` errors for the JSON formatter path
impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
