// ABOUTME: Unit-conversion and calorie-formula coefficients for workout calculations
// ABOUTME: Single source of truth so formulas and tests never drift apart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Shared numeric constants for the workout calculator.

/// Unit conversions between sensor readings and report units
pub mod units {
    /// Meters in a kilometer.
    pub const M_IN_KM: f64 = 1000.0;

    /// Minutes in an hour.
    pub const MIN_IN_HOUR: f64 = 60.0;

    /// Distance covered by one step, meters (running and walking).
    pub const STEP_LENGTH_M: f64 = 0.65;

    /// Distance covered by one stroke, meters (swimming).
    pub const STROKE_LENGTH_M: f64 = 1.38;
}

/// Coefficients of the per-kind calorie formulas
pub mod calories {
    /// Running: multiplier applied to mean speed.
    pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;

    /// Running: shift subtracted from the scaled mean speed.
    pub const RUN_SPEED_SHIFT: f64 = 20.0;

    /// Walking: multiplier applied to body weight.
    pub const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Walking: multiplier applied to the speed²/height term.
    pub const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    /// Swimming: shift added to mean speed.
    pub const SWM_SPEED_SHIFT: f64 = 1.1;

    /// Swimming: multiplier applied to body weight.
    pub const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;
}
