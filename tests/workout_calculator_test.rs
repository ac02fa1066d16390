// ABOUTME: Integration tests for the workout calculator through public interfaces
// ABOUTME: Covers the reference packets, formula edge cases, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::errors::ErrorCode;
use fittrack::formatters::{format_summary, OutputFormat};
use fittrack::models::{Summary, Workout, WorkoutKind};

const EPSILON: f64 = 1e-9;

// === Reference packets ===

#[test]
fn test_swimming_reference_packet() {
    let workout = Workout::from_raw("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let summary = workout.summary().unwrap();

    assert!((summary.distance_km - 0.9936).abs() < EPSILON);
    assert!((summary.mean_speed_kmh - 1.0).abs() < EPSILON);
    assert!((summary.calories - 336.0).abs() < EPSILON);
    assert_eq!(
        summary.message(),
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
}

#[test]
fn test_running_reference_packet() {
    let workout = Workout::from_raw("RUN", &[15_000.0, 1.0, 75.0]).unwrap();
    let summary = workout.summary().unwrap();

    // distance = 15000 x 0.65 / 1000, speed = distance / 1,
    // calories = (18 x 9.75 - 20) x 75 / 1000 x 1 x 60
    assert!((summary.distance_km - 9.75).abs() < EPSILON);
    assert!((summary.mean_speed_kmh - 9.75).abs() < EPSILON);
    assert!((summary.calories - 699.75).abs() < EPSILON);
    assert_eq!(
        summary.message(),
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
    );
}

#[test]
fn test_walking_reference_packet() {
    let workout = Workout::from_raw("WLK", &[9_000.0, 1.0, 75.0, 180.0]).unwrap();
    let summary = workout.summary().unwrap();

    // speed² = 34.2225, floor(34.2225 / 180) = 0, so only the weight term
    // contributes: 0.035 x 75 x 60 = 157.5
    assert!((summary.distance_km - 5.85).abs() < EPSILON);
    assert!((summary.mean_speed_kmh - 5.85).abs() < EPSILON);
    assert!((summary.calories - 157.5).abs() < EPSILON);
    assert_eq!(
        summary.message(),
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
         Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
    );
}

// === Formula properties ===

#[test]
fn test_swimming_speed_independent_of_stroke_count() {
    let few_strokes = Workout::from_raw("SWM", &[10.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let many_strokes = Workout::from_raw("SWM", &[5_000.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

    let a = few_strokes.mean_speed_kmh().unwrap();
    let b = many_strokes.mean_speed_kmh().unwrap();
    assert!((a - b).abs() < EPSILON, "pool speed should ignore strokes");
    assert!((a - 1.0).abs() < EPSILON);
}

#[test]
fn test_walking_calories_use_floor_division() {
    // speed = 2.5 km/h, speed² = 6.25, floor(6.25 / 4) = 1 rather than 1.5625
    let workout = Workout::from_raw("WLK", &[2_500.0, 0.65, 75.0, 4.0]).unwrap();
    let calories = workout.spent_calories().unwrap();

    let with_floor = (0.035 * 75.0 + 1.0 * 0.029 * 75.0) * 0.65 * 60.0;
    let without_floor = (0.035 * 75.0 + 1.5625 * 0.029 * 75.0) * 0.65 * 60.0;
    assert!((calories - with_floor).abs() < EPSILON);
    assert!(
        (calories - without_floor).abs() > 1.0,
        "truncation must be preserved, got {calories}"
    );
}

#[test]
fn test_summary_is_idempotent() {
    let workout = Workout::from_raw("RUN", &[15_000.0, 1.0, 75.0]).unwrap();
    let first = workout.summary().unwrap();
    let second = workout.summary().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.message(), second.message());
}

// === Error handling ===

#[test]
fn test_unknown_kind_tag_rejected() {
    let error = Workout::from_raw("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
    assert_eq!(error.code, ErrorCode::UnknownWorkoutKind);
    assert!(error.to_string().contains("XYZ"));
}

#[test]
fn test_arity_mismatch_rejected() {
    let error = Workout::from_raw("SWM", &[720.0, 1.0, 80.0]).unwrap_err();
    assert_eq!(error.code, ErrorCode::ArityMismatch);
    assert!(error.message.contains("expects 5"));
    assert!(error.message.contains("got 3"));
}

#[test]
fn test_zero_duration_rejected_at_decode() {
    let error = Workout::from_raw("RUN", &[15_000.0, 0.0, 75.0]).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidDuration);
}

#[test]
fn test_zero_duration_rejected_at_computation() {
    // Directly constructed records are guarded too
    let workout = Workout::Running {
        action: 15_000,
        duration_hours: 0.0,
        weight_kg: 75.0,
    };
    let error = workout.mean_speed_kmh().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidDuration);
}

// === Kind metadata ===

#[test]
fn test_kind_codes_and_names() {
    assert_eq!("RUN".parse::<WorkoutKind>().unwrap().name(), "Running");
    assert_eq!("WLK".parse::<WorkoutKind>().unwrap().name(), "SportsWalking");
    assert_eq!("SWM".parse::<WorkoutKind>().unwrap().name(), "Swimming");

    assert_eq!(WorkoutKind::Running.param_count(), 3);
    assert_eq!(WorkoutKind::SportsWalking.param_count(), 4);
    assert_eq!(WorkoutKind::Swimming.param_count(), 5);
}

#[test]
fn test_every_kind_documents_its_calorie_formula() {
    for kind in [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ] {
        assert!(kind.formula().contains("calories"));
        assert!(kind.formula().contains("weight"));
    }
}

#[test]
fn test_step_length_varies_by_kind() {
    assert!((WorkoutKind::Running.step_length_m() - 0.65).abs() < EPSILON);
    assert!((WorkoutKind::SportsWalking.step_length_m() - 0.65).abs() < EPSILON);
    assert!((WorkoutKind::Swimming.step_length_m() - 1.38).abs() < EPSILON);
}

// === Formatting ===

#[test]
fn test_summary_json_round_trip() {
    let workout = Workout::from_raw("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let summary = workout.summary().unwrap();

    let json = format_summary(&summary, OutputFormat::Json).unwrap();
    let decoded: Summary = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, summary);
}

#[test]
fn test_text_format_matches_display() {
    let workout = Workout::from_raw("RUN", &[15_000.0, 1.0, 75.0]).unwrap();
    let summary = workout.summary().unwrap();

    let line = format_summary(&summary, OutputFormat::Text).unwrap();
    assert_eq!(line, summary.to_string());
}
