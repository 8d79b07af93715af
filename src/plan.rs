// ABOUTME: Exercise plan text generation from assessment input and derived metrics
// ABOUTME: Seven fixed-order sections, each tolerating missing input with a prompt line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodycheck Contributors

//! Plan-text generation
//!
//! Combines several independent decision trees into one fixed-order
//! narrative: summary, BMI guidance, WHR guidance, exercise-level guidance,
//! age/gender guidance, injury guidance, disclaimer. Generation is total —
//! a section whose metric is missing or degenerate degrades to a one-line
//! prompt, and the function returns a complete plan for every well-typed
//! input.

use crate::anthropometric_constants::{aerobic_targets, age_bands};
use crate::categories::{BmiCategory, WhrRisk};
use crate::metrics;
use crate::models::{AssessmentInput, ExerciseLevel, Gender, InjuryStatus};
use std::fmt::Write as _;

/// Generate the full exercise-plan narrative for one assessment
///
/// Sections appear in fixed order. The WHR section is omitted entirely when
/// waist or hip was not supplied, and the injury section when no injury
/// history was reported; every other section is always present.
#[must_use]
pub fn generate_exercise_plan(input: &AssessmentInput) -> String {
    let bmi = metrics::bmi(input.weight_kg, input.height_cm);
    let whr = metrics::waist_hip_ratio(input.waist_cm, input.hip_cm);

    let mut sections = vec![summary_section(input, bmi, whr)];
    sections.push(bmi_guidance_section(bmi));
    if let Some(section) = whr_guidance_section(input, whr) {
        sections.push(section);
    }
    sections.push(exercise_level_section(input.exercise_level));
    sections.push(age_gender_section(input.age_years, input.gender));
    if let Some(section) = injury_section(input) {
        sections.push(section);
    }
    sections.push(disclaimer_section());

    sections.join("\n\n")
}

/// Section 1: header and assessment summary
fn summary_section(input: &AssessmentInput, bmi: Option<f64>, whr: Option<f64>) -> String {
    let mut text = match input.nickname.as_deref() {
        Some(name) => format!("--- Personalized Exercise Plan for {name} ---\n\n"),
        None => "--- Your Personalized Exercise Plan ---\n\n".to_owned(),
    };

    text.push_str("Assessment summary:\n");
    let _ = writeln!(text, "- Gender: {}", input.gender.label());
    let _ = writeln!(text, "- Age: {} years", input.age_years);

    match bmi {
        Some(value) => {
            let category = BmiCategory::classify(Some(value));
            let _ = writeln!(text, "- BMI: {:.1}{}", value, category_suffix(category.label()));
        }
        None => text.push_str("- BMI: invalid\n"),
    }

    // The WHR line only appears when both measurements were supplied.
    if input.waist_cm.is_some() && input.hip_cm.is_some() {
        match whr {
            Some(value) => {
                let risk = WhrRisk::classify(Some(value), input.gender);
                let _ = writeln!(
                    text,
                    "- Waist-hip ratio (WHR): {:.2}{}",
                    value,
                    category_suffix(risk.label())
                );
            }
            None => text.push_str("- Waist-hip ratio (WHR): invalid\n"),
        }
    }

    let _ = writeln!(text, "- Exercise level: {}", input.exercise_level.label());
    let _ = write!(
        text,
        "- Injury history: {}",
        match input.injury_status {
            InjuryStatus::Yes => "yes",
            InjuryStatus::No => "no",
        }
    );

    text.push_str("\n\n--- Exercise Recommendations ---");
    text
}

/// Parenthesized category suffix, or nothing when the label is empty
fn category_suffix(label: &str) -> String {
    if label.is_empty() {
        String::new()
    } else {
        format!(" ({label})")
    }
}

/// Section 2: guidance keyed by BMI category
fn bmi_guidance_section(bmi: Option<f64>) -> String {
    let Some(value) = bmi else {
        return "Enter a valid height and weight to receive BMI-based training recommendations."
            .to_owned();
    };

    let category = BmiCategory::classify(Some(value));
    let mut text = format!(
        "Your BMI ({:.1}) falls in the {} category. Recommendations for your BMI:\n",
        value,
        category.label()
    );

    let block = match category {
        BmiCategory::Underweight => {
            "- Goal: gain weight, primarily lean muscle mass.\n\
             - Training types:\n\
             \x20 - Strength training: 2-3 full-body sessions per week focused on compound lifts (squat, deadlift, bench press, row), at a weight you can move for 8-12 reps, 3-4 sets each.\n\
             \x20 - Aerobic exercise: 1-2 low-to-moderate intensity sessions per week (brisk walking, easy jogging, cycling) of 20-30 minutes; keep the volume modest to avoid burning the calories you need.\n\
             - Notes: eat a high-protein, calorie-dense diet, especially after training."
        }
        BmiCategory::Normal => {
            "- Goal: maintain a healthy weight and overall fitness.\n\
             - Training types:\n\
             \x20 - Combined training: mix aerobic exercise with strength work.\n\
             \x20 - Aerobic exercise: 3-5 moderate-intensity sessions per week of 30-60 minutes (running, swimming, ball sports), or 3 high-intensity interval (HIIT) sessions per week.\n\
             \x20 - Strength training: 2-3 full-body or split sessions per week, in whatever style you prefer (bodyweight, machines, free weights).\n\
             - Notes: keep your diet balanced and adjust energy intake to your training volume."
        }
        BmiCategory::Overweight => {
            "- Goal: reduce body weight and body fat.\n\
             - Training types:\n\
             \x20 - Aerobic exercise: prioritize low-to-moderate intensity work, at least 150 minutes per week (brisk walking, elliptical, swimming), building up duration and frequency gradually. High-intensity intervals can help raise fat-burning efficiency.\n\
             \x20 - Strength training: 2-3 full-body sessions per week to preserve muscle and metabolic rate; higher repetition ranges work well.\n\
             - Notes: warm up thoroughly and favor joint-friendly activities. Keep total calorie intake under control, cutting back on high-sugar and high-fat foods."
        }
        BmiCategory::Obese => {
            "- Goal: achieve significant weight loss and improve overall health.\n\
             - Training types:\n\
             \x20 - Aerobic exercise: the priority. Start with low-intensity activities (brisk walking, walking in water, slow elliptical) several times per week, working toward 30-60 minutes per session. Raise intensity step by step and avoid high-impact work early on to protect the joints.\n\
             \x20 - Strength training: 2-3 full-body sessions per week to improve body composition and metabolism; begin with bodyweight movements or light machine loads.\n\
             - Notes: start this program under the guidance of a doctor or qualified trainer. Treat warm-ups and post-exercise stretching as mandatory, choose activities that are gentle on the joints, and pair training with strict dietary control."
        }
        BmiCategory::Unknown => {
            return "Enter a valid height and weight to receive BMI-based training recommendations."
                .to_owned();
        }
    };

    text.push_str(block);
    text
}

/// Section 3: cardiovascular guidance from WHR, only when waist and hip were supplied
fn whr_guidance_section(input: &AssessmentInput, whr: Option<f64>) -> Option<String> {
    if input.waist_cm.is_none() || input.hip_cm.is_none() {
        return None;
    }

    let Some(value) = whr else {
        // Measurements were supplied but unusable (non-positive hip).
        return Some(
            "Enter a valid waist and hip measurement to receive WHR-based recommendations."
                .to_owned(),
        );
    };

    let risk = WhrRisk::classify(Some(value), input.gender);
    let section = match risk {
        WhrRisk::HighRisk => format!(
            "Your waist-hip ratio ({:.2}) falls in the {} category.\n\
             - Priority: given the elevated cardiovascular risk, make regular aerobic exercise non-negotiable. Target at least {} minutes of moderate-intensity or {} minutes of vigorous-intensity aerobic work per week, building duration up over time.\n\
             - Good options: brisk walking, jogging, swimming, cycling, dancing.",
            value,
            risk.label(),
            aerobic_targets::MODERATE_MINUTES_PER_WEEK,
            aerobic_targets::VIGOROUS_MINUTES_PER_WEEK,
        ),
        WhrRisk::LowRisk => format!(
            "Your waist-hip ratio ({:.2}) falls in the {} category.\n\
             - Keeping up regular aerobic exercise will help maintain your cardiovascular health.",
            value,
            risk.label(),
        ),
        // No threshold defined for this gender; report the value with the
        // maintenance note and no risk claim.
        WhrRisk::Unknown => format!(
            "Your waist-hip ratio is {value:.2}.\n\
             - Keeping up regular aerobic exercise will help maintain your cardiovascular health.",
        ),
    };
    Some(section)
}

/// Section 4: guidance keyed by self-reported exercise level
fn exercise_level_section(level: ExerciseLevel) -> String {
    let mut text = format!(
        "Based on your exercise level ({}), further suggestions:\n",
        level.label()
    );

    let block = match level {
        ExerciseLevel::Sedentary => {
            "- Getting started: begin by adding everyday activity, such as more walking, and try short low-intensity sessions.\n\
             - Target: adapt gradually, then increase exercise frequency and duration."
        }
        ExerciseLevel::Light => {
            "- Getting started: establish fixed training days each week, for example 2-3 of them.\n\
             - Target: gradually extend the duration and intensity of each session."
        }
        ExerciseLevel::Moderate => {
            "- Keep it up: maintain your habit of 1-3 sessions per week.\n\
             - Step up: try raising the intensity, or take on a new sport."
        }
        ExerciseLevel::Active => {
            "- Keep it up: your exercise habits are solid; stay the course.\n\
             - Step up: consider a more structured training plan, or enter a recreational event."
        }
        ExerciseLevel::VeryActive => {
            "- Keep it up: you train a lot. Make sure recovery and nutrition keep pace, and guard against overtraining and injury.\n\
             - Step up: focus on improving performance in your main sport."
        }
        ExerciseLevel::Unselected => {
            "- Select an exercise level to receive more personalized suggestions."
        }
    };

    text.push_str(block);
    text
}

/// Section 5: supplemental guidance by age band, with a female-specific note
/// in the 40+ band
fn age_gender_section(age_years: u32, gender: Gender) -> String {
    let mut text = format!(
        "Supplemental guidance for your age ({age_years} years) and gender:\n"
    );

    if age_years >= age_bands::MIDLIFE_MIN {
        text.push_str(
            "- Caution: warm up more thoroughly before exercise, watch how your body responds during sessions, and stretch afterwards.\n\
             - Suggestion: include bone-strengthening activity such as walking, jogging, or resistance training.",
        );
        if gender == Gender::Female {
            text.push_str(
                "\n- For women: pay attention to bone density and make strength training a priority.",
            );
        }
    } else if age_years >= age_bands::ADULT_MIN {
        text.push_str(
            "- Suggestion: these are peak years for building fitness; take on a wide range of training challenges.",
        );
    } else {
        text.push_str("- Enter a valid age to receive age-specific guidance.");
    }

    text
}

/// Section 6: injury guidance, only when an injury history was reported
fn injury_section(input: &AssessmentInput) -> Option<String> {
    if input.injury_status != InjuryStatus::Yes {
        return None;
    }

    let section = if input.injured_parts.is_empty() {
        "You reported an injury history. Mark the affected areas on the body map to receive more specific recommendations."
            .to_owned()
    } else {
        format!(
            "Considering the injured areas you marked ({}):\n\
             - Important: consult a doctor or a qualified physiotherapist or trainer before starting any exercise.\n\
             - Choose activities that put little load on the affected areas, and avoid anything that aggravates the injury.",
            input.injured_parts.join(", ")
        )
    };
    Some(section)
}

/// Section 7: fixed closing disclaimer
fn disclaimer_section() -> String {
    "--- Disclaimer ---\n\
     This plan is a preliminary suggestion generated from the information you provided and is not a substitute for professional medical or fitness advice. Consult a doctor or certified trainer before starting any new exercise program, especially with a history of injury or chronic illness. Adjust intensity and activity choice to how you feel, and stop if anything causes discomfort."
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> AssessmentInput {
        AssessmentInput {
            gender: Gender::Male,
            age_years: 32,
            height_cm: 175.0,
            weight_kg: 70.0,
            ..AssessmentInput::default()
        }
    }

    #[test]
    fn test_plan_always_ends_with_disclaimer() {
        let plan = generate_exercise_plan(&base_input());
        assert!(plan.contains("--- Disclaimer ---"));
        assert!(plan.ends_with("discomfort."));
    }

    #[test]
    fn test_whr_section_skipped_without_measurements() {
        let plan = generate_exercise_plan(&base_input());
        assert!(!plan.contains("waist-hip ratio ("));
        assert!(!plan.contains("waist and hip measurement"));
    }

    #[test]
    fn test_whr_prompt_when_supplied_but_unusable() {
        let mut input = base_input();
        input.waist_cm = Some(80.0);
        input.hip_cm = Some(0.0);
        let plan = generate_exercise_plan(&input);
        assert!(plan.contains("Enter a valid waist and hip measurement"));
    }

    #[test]
    fn test_unknown_gender_whr_reports_value_without_risk_claim() {
        let mut input = base_input();
        input.gender = Gender::Other;
        input.waist_cm = Some(90.0);
        input.hip_cm = Some(95.0);
        let plan = generate_exercise_plan(&input);
        assert!(plan.contains("Your waist-hip ratio is 0.95."));
        assert!(!plan.contains("cardiovascular risk category"));
    }

    #[test]
    fn test_bmi_prompt_for_degenerate_height() {
        let mut input = base_input();
        input.height_cm = 0.0;
        let plan = generate_exercise_plan(&input);
        assert!(plan.contains("Enter a valid height and weight"));
        assert!(plan.contains("- BMI: invalid"));
    }

    #[test]
    fn test_injury_section_lists_marked_parts() {
        let mut input = base_input();
        input.injury_status = InjuryStatus::Yes;
        input.injured_parts = vec!["knee".to_owned(), "shoulder".to_owned()];
        let plan = generate_exercise_plan(&input);
        assert!(plan.contains("(knee, shoulder)"));
        assert!(plan.contains("consult a doctor"));
    }

    #[test]
    fn test_injury_section_prompts_when_no_parts_marked() {
        let mut input = base_input();
        input.injury_status = InjuryStatus::Yes;
        let plan = generate_exercise_plan(&input);
        assert!(plan.contains("Mark the affected areas on the body map"));
        assert!(!plan.contains("Considering the injured areas"));
    }

    #[test]
    fn test_female_over_forty_gets_bone_density_note() {
        let mut input = base_input();
        input.gender = Gender::Female;
        input.age_years = 45;
        let plan = generate_exercise_plan(&input);
        assert!(plan.contains("bone density"));
    }

    #[test]
    fn test_male_over_forty_gets_no_female_note() {
        let mut input = base_input();
        input.age_years = 45;
        let plan = generate_exercise_plan(&input);
        assert!(plan.contains("warm up more thoroughly"));
        assert!(!plan.contains("For women"));
    }

    #[test]
    fn test_under_eighteen_gets_age_prompt() {
        let mut input = base_input();
        input.age_years = 15;
        let plan = generate_exercise_plan(&input);
        assert!(plan.contains("Enter a valid age"));
    }

    #[test]
    fn test_nickname_appears_in_header() {
        let mut input = base_input();
        input.nickname = Some("Alex".to_owned());
        let plan = generate_exercise_plan(&input);
        assert!(plan.starts_with("--- Personalized Exercise Plan for Alex ---"));
    }

    #[test]
    fn test_every_exercise_level_has_a_block() {
        for level in [
            ExerciseLevel::Sedentary,
            ExerciseLevel::Light,
            ExerciseLevel::Moderate,
            ExerciseLevel::Active,
            ExerciseLevel::VeryActive,
            ExerciseLevel::Unselected,
        ] {
            let section = exercise_level_section(level);
            assert!(
                section.starts_with("Based on your exercise level"),
                "{level:?}"
            );
            assert!(section.lines().count() >= 2 || level == ExerciseLevel::Unselected);
        }
    }
}
