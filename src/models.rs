// ABOUTME: Workout kind enumeration, decoded workout records, and summary values
// ABOUTME: Decodes raw sensor packets into typed records with strict validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

use crate::constants::units::{STEP_LENGTH_M, STROKE_LENGTH_M};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumeration of supported workout kinds
///
/// A closed set: each kind fixes its step length and its calorie formula.
/// Adding a kind means supplying both, which the compiler enforces through
/// the exhaustive dispatch in the calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Running workout
    Running,
    /// Sports (race) walking workout
    SportsWalking,
    /// Pool swimming workout
    Swimming,
}

impl WorkoutKind {
    /// Wire tag used by tracker sensor packets
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Display name used in the summary line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Distance covered by one recorded action (stride or stroke), meters
    #[must_use]
    pub const fn step_length_m(self) -> f64 {
        match self {
            Self::Running | Self::SportsWalking => STEP_LENGTH_M,
            Self::Swimming => STROKE_LENGTH_M,
        }
    }

    /// Number of positional parameters a sensor packet carries for this kind
    #[must_use]
    pub const fn param_count(self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }

    /// Get the calorie formula as a string
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Running => "calories = (18 x speed - 20) x weight / 1000 x duration x 60",
            Self::SportsWalking => {
                "calories = (0.035 x weight + floor(speed^2 / height) x 0.029 x weight) x duration x 60"
            }
            Self::Swimming => "calories = (speed + 1.1) x 2 x weight",
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            "SWM" => Ok(Self::Swimming),
            other => Err(AppError::unknown_workout_kind(other)),
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single decoded workout record
///
/// Immutable after construction. Every variant carries the common sensor
/// readings (action count, duration in hours, body weight in kilograms);
/// walking adds the athlete's height and swimming adds the pool geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Workout {
    /// Running: common readings only
    Running {
        /// Steps taken
        action: u64,
        /// Workout duration, hours
        duration_hours: f64,
        /// Body weight, kilograms
        weight_kg: f64,
    },
    /// Sports walking: common readings plus athlete height
    SportsWalking {
        /// Steps taken
        action: u64,
        /// Workout duration, hours
        duration_hours: f64,
        /// Body weight, kilograms
        weight_kg: f64,
        /// Athlete height, centimeters
        height_cm: f64,
    },
    /// Swimming: common readings plus pool geometry
    Swimming {
        /// Strokes taken
        action: u64,
        /// Workout duration, hours
        duration_hours: f64,
        /// Body weight, kilograms
        weight_kg: f64,
        /// Pool length, meters
        length_pool_m: f64,
        /// Number of pool lengths swum
        count_pool: u64,
    },
}

impl Workout {
    /// Decode a raw sensor packet into a typed workout record.
    ///
    /// `code` is the kind tag (`"RUN"`, `"WLK"`, `"SWM"`); `params` are the
    /// positional readings in the fixed per-kind order:
    ///
    /// - RUN: `[action, duration, weight]`
    /// - WLK: `[action, duration, weight, height]`
    /// - SWM: `[action, duration, weight, length_pool, count_pool]`
    ///
    /// # Errors
    ///
    /// - `ErrorCode::UnknownWorkoutKind` when the tag is not recognized
    /// - `ErrorCode::ArityMismatch` when `params` has the wrong length
    /// - `ErrorCode::InvalidDuration` when the duration reading is not
    ///   positive
    pub fn from_raw(code: &str, params: &[f64]) -> AppResult<Self> {
        let kind = code.parse::<WorkoutKind>()?;
        if params.len() != kind.param_count() {
            return Err(AppError::arity_mismatch(
                kind.name(),
                kind.param_count(),
                params.len(),
            ));
        }

        let duration_hours = params[1];
        if duration_hours <= 0.0 {
            return Err(AppError::invalid_duration(duration_hours));
        }

        let action = params[0] as u64;
        let weight_kg = params[2];
        let workout = match kind {
            WorkoutKind::Running => Self::Running {
                action,
                duration_hours,
                weight_kg,
            },
            WorkoutKind::SportsWalking => Self::SportsWalking {
                action,
                duration_hours,
                weight_kg,
                height_cm: params[3],
            },
            WorkoutKind::Swimming => Self::Swimming {
                action,
                duration_hours,
                weight_kg,
                length_pool_m: params[3],
                count_pool: params[4] as u64,
            },
        };
        Ok(workout)
    }

    /// The workout kind of this record
    #[must_use]
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running { .. } => WorkoutKind::Running,
            Self::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Self::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    /// Recorded action count (steps or strokes)
    #[must_use]
    pub const fn action(&self) -> u64 {
        match self {
            Self::Running { action, .. }
            | Self::SportsWalking { action, .. }
            | Self::Swimming { action, .. } => *action,
        }
    }

    /// Workout duration, hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        match self {
            Self::Running { duration_hours, .. }
            | Self::SportsWalking { duration_hours, .. }
            | Self::Swimming { duration_hours, .. } => *duration_hours,
        }
    }

    /// Body weight, kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        match self {
            Self::Running { weight_kg, .. }
            | Self::SportsWalking { weight_kg, .. }
            | Self::Swimming { weight_kg, .. } => *weight_kg,
        }
    }
}

/// Derived, read-only summary of one workout
///
/// Recomputed on demand from a [`Workout`]; has no identity of its own.
/// The text rendering formats every numeric field to exactly three decimal
/// places.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// Display name of the workout kind
    pub kind_name: String,
    /// Workout duration, hours
    pub duration_hours: f64,
    /// Distance covered, kilometers
    pub distance_km: f64,
    /// Mean speed, km/h
    pub mean_speed_kmh: f64,
    /// Calories burned
    pub calories: f64,
}

impl Summary {
    /// Render the classic one-line report for this summary
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.kind_name, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
