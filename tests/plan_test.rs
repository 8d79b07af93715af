// ABOUTME: Integration tests for exercise-plan structure and section ordering
// ABOUTME: Asserts the fixed seven-section order and per-section skip/prompt behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodycheck Contributors

use bodycheck::plan::generate_exercise_plan;
use bodycheck::{AssessmentInput, ExerciseLevel, Gender, InjuryStatus};

fn full_input() -> AssessmentInput {
    AssessmentInput {
        nickname: Some("Alex".to_owned()),
        gender: Gender::Female,
        age_years: 45,
        height_cm: 165.0,
        weight_kg: 75.0,
        waist_cm: Some(85.0),
        hip_cm: Some(96.0),
        exercise_level: ExerciseLevel::Light,
        injury_status: InjuryStatus::Yes,
        injured_parts: vec!["knee".to_owned()],
    }
}

/// Byte offset of a marker that must be present exactly where expected
fn position(plan: &str, marker: &str) -> usize {
    plan.find(marker)
        .unwrap_or_else(|| panic!("marker {marker:?} missing from plan:\n{plan}"))
}

#[test]
fn test_all_seven_sections_in_order_for_full_input() {
    let plan = generate_exercise_plan(&full_input());

    let markers = [
        "Assessment summary:",
        "Recommendations for your BMI:",
        "Your waist-hip ratio (",
        "Based on your exercise level",
        "Supplemental guidance for your age",
        "Considering the injured areas you marked",
        "--- Disclaimer ---",
    ];
    let mut last = 0;
    for marker in markers {
        let at = position(&plan, marker);
        assert!(at >= last, "section {marker:?} out of order");
        last = at;
    }
}

#[test]
fn test_optional_sections_absent_for_minimal_input() {
    let input = AssessmentInput {
        gender: Gender::Male,
        age_years: 25,
        height_cm: 180.0,
        weight_kg: 75.0,
        ..AssessmentInput::default()
    };
    let plan = generate_exercise_plan(&input);

    // Still a complete plan: summary, BMI guidance, exercise level, age,
    // disclaimer all present.
    position(&plan, "Assessment summary:");
    position(&plan, "Recommendations for your BMI:");
    position(&plan, "Based on your exercise level");
    position(&plan, "Supplemental guidance for your age");
    position(&plan, "--- Disclaimer ---");

    // WHR and injury sections skipped, not prompted.
    assert!(!plan.contains("waist-hip ratio"));
    assert!(!plan.contains("body map"));
}

#[test]
fn test_summary_reflects_all_supplied_fields() {
    let plan = generate_exercise_plan(&full_input());

    assert!(plan.starts_with("--- Personalized Exercise Plan for Alex ---"));
    assert!(plan.contains("- Gender: female"));
    assert!(plan.contains("- Age: 45 years"));
    assert!(plan.contains("- BMI: 27.5 (overweight)"));
    assert!(plan.contains("- Waist-hip ratio (WHR): 0.89 (increased cardiovascular risk)"));
    assert!(plan.contains("- Exercise level: occasional exercise"));
    assert!(plan.contains("- Injury history: yes"));
}

#[test]
fn test_high_risk_whr_emits_aerobic_minimums() {
    let plan = generate_exercise_plan(&full_input());
    assert!(plan.contains("at least 150 minutes of moderate-intensity"));
    assert!(plan.contains("75 minutes of vigorous-intensity"));
}

#[test]
fn test_low_risk_whr_emits_maintenance_note_only() {
    let mut input = full_input();
    input.waist_cm = Some(70.0); // 70 / 96 well below 0.85
    let plan = generate_exercise_plan(&input);
    assert!(plan.contains("lower cardiovascular risk category"));
    assert!(plan.contains("maintain your cardiovascular health"));
    assert!(!plan.contains("non-negotiable"));
}

#[test]
fn test_each_bmi_category_selects_its_block() {
    let cases = [
        (45.0, "gain weight, primarily lean muscle mass"),
        (65.0, "maintain a healthy weight"),
        (75.0, "reduce body weight and body fat"),
        (95.0, "achieve significant weight loss"),
    ];
    for (weight_kg, expected) in cases {
        let input = AssessmentInput {
            gender: Gender::Male,
            age_years: 30,
            height_cm: 170.0,
            weight_kg,
            ..AssessmentInput::default()
        };
        let plan = generate_exercise_plan(&input);
        assert!(plan.contains(expected), "weight {weight_kg}: {expected:?}");
    }
}

#[test]
fn test_unselected_level_prompts_for_selection() {
    let mut input = full_input();
    input.exercise_level = ExerciseLevel::Unselected;
    let plan = generate_exercise_plan(&input);
    assert!(plan.contains("Select an exercise level"));
}
