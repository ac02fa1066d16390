// ABOUTME: Output format abstraction for rendering workout summaries
// ABOUTME: Supports the classic report line (default) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Output Format Abstraction Layer
//!
//! Summaries render either as the classic one-line report or as JSON for
//! machine consumers. The field set and three-decimal text precision are
//! the external contract; the selector only changes the envelope.

use crate::errors::AppResult;
use crate::models::Summary;
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Classic one-line report (default)
    #[default]
    Text,
    /// JSON object per summary
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive).
    /// Returns `Text` for unrecognized values (backwards compatible)
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render a summary in the requested format.
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` when JSON serialization fails.
pub fn format_summary(summary: &Summary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(summary.message()),
        OutputFormat::Json => Ok(serde_json::to_string(summary)?),
    }
}
