// ABOUTME: Metric computations for decoded workout records
// ABOUTME: Distance, mean speed, per-kind calorie dispatch, and summary assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Workout metric calculations.
//!
//! Every operation here is a pure function of the decoded record: no shared
//! state, no suspension points, safe to recompute and to call from multiple
//! threads.

use crate::constants::calories::{
    RUN_SPEED_MULTIPLIER, RUN_SPEED_SHIFT, SWM_SPEED_SHIFT, SWM_WEIGHT_MULTIPLIER,
    WLK_SPEED_HEIGHT_MULTIPLIER, WLK_WEIGHT_MULTIPLIER,
};
use crate::constants::units::{M_IN_KM, MIN_IN_HOUR};
use crate::errors::{AppError, AppResult};
use crate::models::{Summary, Workout};
use tracing::debug;

impl Workout {
    /// Distance covered during the workout, kilometers.
    ///
    /// `distance = action x step_length / 1000`, with the step length fixed
    /// by the workout kind (0.65 m per stride, 1.38 m per stroke).
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.action() as f64 * self.kind().step_length_m() / M_IN_KM
    }

    /// Mean speed over the whole workout, km/h.
    ///
    /// Running and walking derive speed from the step distance; swimming
    /// measures it from pool geometry instead, `length_pool x count_pool /
    /// 1000 / duration`, independent of the stroke count.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidDuration` when the duration is zero or
    /// negative, keeping the division total.
    pub fn mean_speed_kmh(&self) -> AppResult<f64> {
        let duration_hours = self.duration_hours();
        if duration_hours <= 0.0 {
            return Err(AppError::invalid_duration(duration_hours));
        }

        let speed = match self {
            Self::Swimming {
                length_pool_m,
                count_pool,
                ..
            } => *length_pool_m * (*count_pool as f64) / M_IN_KM / duration_hours,
            Self::Running { .. } | Self::SportsWalking { .. } => {
                self.distance_km() / duration_hours
            }
        };
        Ok(speed)
    }

    /// Calories burned during the workout, dispatched per kind.
    ///
    /// The walking formula floor-divides speed² by height; the truncation is
    /// part of the calorie contract and must not be replaced with ordinary
    /// division.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidDuration` when the duration is zero or
    /// negative.
    pub fn spent_calories(&self) -> AppResult<f64> {
        let mean_speed_kmh = self.mean_speed_kmh()?;

        let calories = match self {
            Self::Running {
                duration_hours,
                weight_kg,
                ..
            } => {
                (RUN_SPEED_MULTIPLIER * mean_speed_kmh - RUN_SPEED_SHIFT) * *weight_kg / M_IN_KM
                    * *duration_hours
                    * MIN_IN_HOUR
            }
            Self::SportsWalking {
                duration_hours,
                weight_kg,
                height_cm,
                ..
            } => {
                (WLK_WEIGHT_MULTIPLIER * *weight_kg
                    + (mean_speed_kmh * mean_speed_kmh / *height_cm).floor()
                        * WLK_SPEED_HEIGHT_MULTIPLIER
                        * *weight_kg)
                    * *duration_hours
                    * MIN_IN_HOUR
            }
            Self::Swimming { weight_kg, .. } => {
                (mean_speed_kmh + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * *weight_kg
            }
        };

        debug!(
            kind = self.kind().name(),
            mean_speed_kmh, calories, "computed calories"
        );
        Ok(calories)
    }

    /// Assemble the derived summary for this workout.
    ///
    /// Pure and idempotent: two calls on the same record yield identical
    /// summaries.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidDuration` when the duration is zero or
    /// negative.
    pub fn summary(&self) -> AppResult<Summary> {
        Ok(Summary {
            kind_name: self.kind().name().to_owned(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh()?,
            calories: self.spent_calories()?,
        })
    }
}
