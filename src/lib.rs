// ABOUTME: Main library entry point for the fittrack workout calculator
// ABOUTME: Computes distance, mean speed, and calories for recorded workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

#![deny(unsafe_code)]

//! # Fittrack
//!
//! A calculator for fitness-tracker sensor packets. Each packet carries a
//! workout kind tag plus positional readings (action count, duration, weight,
//! and kind-specific extras); the library decodes the packet, computes the
//! derived metrics, and renders a one-line summary.
//!
//! ## Features
//!
//! - **Three workout kinds**: running, sports walking, and swimming, each
//!   with its own step length and calorie formula
//! - **Strict decoding**: unknown kind tags and wrong parameter counts are
//!   rejected up front instead of surfacing as low-level argument errors
//! - **Pure computation**: every metric is a function of the decoded packet,
//!   safe to recompute and safe to share across threads
//! - **Pluggable output**: summaries render as the classic report line or as
//!   JSON
//!
//! ## Example
//!
//! ```rust
//! use fittrack::models::Workout;
//!
//! # fn example() -> fittrack::errors::AppResult<()> {
//! let workout = Workout::from_raw("RUN", &[15_000.0, 1.0, 75.0])?;
//! let summary = workout.summary()?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

/// Metric computations: distance, mean speed, calories, summary assembly
pub mod calculator;

/// Unit-conversion and calorie-formula coefficients
pub mod constants;

/// Unified error handling: error codes, `AppError`, `AppResult`
pub mod errors;

/// Output format abstraction for rendering summaries
pub mod formatters;

/// Structured logging setup for binaries
pub mod logging;

/// Workout kinds, decoded workout records, and summaries
pub mod models;
