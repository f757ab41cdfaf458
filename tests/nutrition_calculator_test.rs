// ABOUTME: Algorithm tests for the nutrition target calculator
// ABOUTME: Covers BMR, TDEE, protein, daily targets, sentinel, and rounding behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! Algorithm tests for the nutrition targeting pipeline:
//! - Mifflin-St Jeor BMR (male/female/unspecified mean)
//! - TDEE with table lookup and unknown-key fallback
//! - Standalone protein recommendation
//! - Composite daily targets: goal adjustments, macro splits, rounding
//! - Insufficient-data sentinel for each missing profile field
//! - Purity/idempotence and substituted lookup tables

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use nutriplan_intelligence::config::{ActivityLevel, NutritionConfig};
use nutriplan_intelligence::models::{DietGoal, Gender, ProfileSnapshot};
use nutriplan_intelligence::nutrition_calculator::{
    compute_bmr, compute_daily_targets, compute_recommended_protein, compute_tdee,
};

/// A fully populated profile used as the baseline across tests
fn complete_profile() -> ProfileSnapshot {
    ProfileSnapshot {
        gender: Some(Gender::Male),
        weight_kg: Some(70.0),
        height_cm: Some(175.0),
        age_years: Some(30.0),
        activity_key: Some("moderately_active".to_owned()),
        diet_goal: Some(DietGoal::FatLoss),
    }
}

// ============================================================================
// BMR - Mifflin-St Jeor
// ============================================================================

#[test]
fn bmr_male_reference_values() {
    let config = NutritionConfig::default();

    let bmr = compute_bmr(Gender::Male, 70.0, 175.0, 30.0, &config.bmr);

    // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
    assert_eq!(bmr, 1648.75, "male BMR must match the published formula");
}

#[test]
fn bmr_female_reference_values() {
    let config = NutritionConfig::default();

    let bmr = compute_bmr(Gender::Female, 70.0, 175.0, 30.0, &config.bmr);

    // 10*70 + 6.25*175 - 5*30 - 161 = 1482.75
    assert_eq!(bmr, 1482.75, "female BMR must match the published formula");
}

#[test]
fn bmr_unspecified_gender_is_exact_mean() {
    let config = NutritionConfig::default();

    let bmr = compute_bmr(Gender::Unspecified, 70.0, 175.0, 30.0, &config.bmr);

    // Mean of 1648.75 and 1482.75
    assert_eq!(bmr, 1565.75, "unspecified gender averages the two formulas");
}

#[test]
fn bmr_fractional_age_flows_through() {
    let config = NutritionConfig::default();

    let bmr = compute_bmr(Gender::Male, 70.0, 175.0, 30.5, &config.bmr);

    assert_eq!(bmr, 1648.75 - 2.5, "fractional ages are not truncated");
}

#[test]
fn bmr_out_of_domain_inputs_propagate() {
    let config = NutritionConfig::default();

    // Negative weight is nonsense but must not panic or clamp; upstream
    // forms own validation.
    let bmr = compute_bmr(Gender::Male, -70.0, 175.0, 30.0, &config.bmr);

    assert_eq!(bmr, -700.0 + 1093.75 - 150.0 + 5.0);
}

// ============================================================================
// TDEE - activity factor lookup
// ============================================================================

#[test]
fn tdee_sedentary_factor() {
    let config = NutritionConfig::default();

    let tdee = compute_tdee(1673.75, "sedentary", &config.activity_levels);

    assert!(
        (tdee - 2008.5).abs() < 1e-9,
        "sedentary TDEE should be BMR * 1.2"
    );
}

#[test]
fn tdee_unknown_key_matches_sedentary() {
    let config = NutritionConfig::default();

    let known = compute_tdee(1673.75, "sedentary", &config.activity_levels);
    let unknown = compute_tdee(1673.75, "couch_surfing", &config.activity_levels);
    let empty = compute_tdee(1673.75, "", &config.activity_levels);

    assert_eq!(unknown, known, "unknown keys fall back to the 1.2 default");
    assert_eq!(empty, known, "empty keys fall back to the 1.2 default");
}

#[test]
fn tdee_uses_each_table_row() {
    let config = NutritionConfig::default();
    let bmr = 1500.0;

    for level in &config.activity_levels.levels {
        let tdee = compute_tdee(bmr, &level.key, &config.activity_levels);
        assert!(
            (tdee - bmr * level.activity_factor).abs() < 1e-9,
            "TDEE for {} should use factor {}",
            level.key,
            level.activity_factor
        );
    }
}

// ============================================================================
// Protein recommendation - independently callable
// ============================================================================

#[test]
fn protein_recommendation_sedentary() {
    let config = NutritionConfig::default();

    let protein = compute_recommended_protein(70.0, "sedentary", &config.activity_levels);

    assert!(
        (protein - 56.0).abs() < 1e-9,
        "sedentary protein should be 0.8 g/kg * 70 kg"
    );
}

#[test]
fn protein_recommendation_unknown_key_uses_dri_minimum() {
    let config = NutritionConfig::default();

    let protein = compute_recommended_protein(90.0, "astronaut", &config.activity_levels);

    assert!(
        (protein - 72.0).abs() < 1e-9,
        "unknown keys fall back to 0.8 g/kg"
    );
}

// ============================================================================
// Daily targets - precondition gate
// ============================================================================

#[test]
fn daily_targets_complete_profile_succeeds() {
    let config = NutritionConfig::default();

    assert!(compute_daily_targets(&complete_profile(), &config).is_some());
}

#[test]
fn daily_targets_missing_any_field_yields_sentinel() {
    let config = NutritionConfig::default();

    let without: [Box<dyn Fn(&mut ProfileSnapshot)>; 6] = [
        Box::new(|p| p.gender = None),
        Box::new(|p| p.weight_kg = None),
        Box::new(|p| p.height_cm = None),
        Box::new(|p| p.age_years = None),
        Box::new(|p| p.activity_key = None),
        Box::new(|p| p.diet_goal = None),
    ];

    for clear in &without {
        let mut profile = complete_profile();
        clear(&mut profile);
        assert!(
            compute_daily_targets(&profile, &config).is_none(),
            "any missing field must yield the insufficient-data sentinel"
        );
    }
}

#[test]
fn daily_targets_empty_activity_key_counts_as_absent() {
    let config = NutritionConfig::default();

    let mut profile = complete_profile();
    profile.activity_key = Some(String::new());

    assert!(compute_daily_targets(&profile, &config).is_none());
}

#[test]
fn missing_fields_reports_document_names() {
    let mut profile = complete_profile();
    profile.weight_kg = None;
    profile.activity_key = Some(String::new());

    assert_eq!(profile.missing_fields(), vec!["currentWeight", "activityLevel"]);
    assert!(!profile.is_complete());
    assert!(complete_profile().is_complete());
}

// ============================================================================
// Daily targets - goal adjustments and macro splits
// ============================================================================

#[test]
fn fat_loss_applies_500_deficit_and_split() {
    let config = NutritionConfig::default();

    let result = compute_daily_targets(&complete_profile(), &config).unwrap();

    assert_eq!(result.bmr, 1648.75);
    assert!((result.tdee - 1648.75 * 1.55).abs() < 1e-9);
    assert_eq!(
        result.final_target_calories,
        result.tdee - 500.0,
        "fat loss target is exactly TDEE - 500, unrounded"
    );
    assert_eq!(
        result.protein_grams,
        (result.final_target_calories * 0.35 / 4.0).round()
    );
    assert_eq!(
        result.carb_grams,
        (result.final_target_calories * 0.35 / 4.0).round()
    );
    assert_eq!(
        result.fat_grams,
        (result.final_target_calories * 0.30 / 9.0).round()
    );
}

#[test]
fn goal_adjustments_match_table() {
    let config = NutritionConfig::default();
    let cases = [
        (DietGoal::FatLoss, -500.0),
        (DietGoal::MuscleGain, 300.0),
        (DietGoal::Recomp, -200.0),
        (DietGoal::Maintain, 0.0),
    ];

    for (goal, adjustment) in cases {
        let mut profile = complete_profile();
        profile.diet_goal = Some(goal);

        let result = compute_daily_targets(&profile, &config).unwrap();
        assert_eq!(
            result.final_target_calories,
            result.tdee + adjustment,
            "{goal:?} adjustment should be {adjustment} kcal"
        );
    }
}

#[test]
fn macro_splits_match_goal_table() {
    let config = NutritionConfig::default();
    let cases = [
        (DietGoal::FatLoss, 0.35, 0.35, 0.30),
        (DietGoal::MuscleGain, 0.30, 0.50, 0.20),
        (DietGoal::Recomp, 0.40, 0.35, 0.25),
        (DietGoal::Maintain, 0.25, 0.50, 0.25),
    ];

    for (goal, protein_pct, carb_pct, fat_pct) in cases {
        let mut profile = complete_profile();
        profile.diet_goal = Some(goal);

        let result = compute_daily_targets(&profile, &config).unwrap();
        let calories = result.final_target_calories;

        assert_eq!(result.protein_grams, (calories * protein_pct / 4.0).round());
        assert_eq!(result.carb_grams, (calories * carb_pct / 4.0).round());
        assert_eq!(result.fat_grams, (calories * fat_pct / 9.0).round());
    }
}

#[test]
fn reconstructed_calories_stay_within_rounding_slack() {
    let config = NutritionConfig::default();

    // Independent per-macro rounding can move each gram value by at most
    // 0.5, so the reconstructed kcal sum drifts by at most
    // 0.5*4 + 0.5*4 + 0.5*9 = 8.5 kcal and is never corrected.
    for goal in [
        DietGoal::FatLoss,
        DietGoal::MuscleGain,
        DietGoal::Recomp,
        DietGoal::Maintain,
    ] {
        let mut profile = complete_profile();
        profile.diet_goal = Some(goal);

        let result = compute_daily_targets(&profile, &config).unwrap();
        let reconstructed =
            result.protein_grams * 4.0 + result.carb_grams * 4.0 + result.fat_grams * 9.0;

        assert!(
            (reconstructed - result.final_target_calories).abs() < 8.5,
            "{goal:?}: reconstructed {reconstructed} vs target {}",
            result.final_target_calories
        );
    }
}

#[test]
fn fat_loss_reference_profile_drift_under_two_kcal() {
    let config = NutritionConfig::default();

    let result = compute_daily_targets(&complete_profile(), &config).unwrap();
    let reconstructed =
        result.protein_grams * 4.0 + result.carb_grams * 4.0 + result.fat_grams * 9.0;

    assert!(
        (reconstructed - result.final_target_calories).abs() < 2.0,
        "reference fat-loss profile reconstructs within 2 kcal"
    );
}

// ============================================================================
// Purity and substituted tables
// ============================================================================

#[test]
fn daily_targets_idempotent() {
    let config = NutritionConfig::default();
    let profile = complete_profile();

    let first = compute_daily_targets(&profile, &config).unwrap();
    let second = compute_daily_targets(&profile, &config).unwrap();

    assert_eq!(first, second, "identical inputs give bit-identical results");
}

#[test]
fn substituted_activity_table_is_honored() {
    let mut config = NutritionConfig::default();
    config.activity_levels.levels = vec![ActivityLevel {
        key: "test_level".to_owned(),
        activity_factor: 2.0,
        protein_factor_per_kg: 3.0,
    }];

    let mut profile = complete_profile();
    profile.activity_key = Some("test_level".to_owned());

    let result = compute_daily_targets(&profile, &config).unwrap();
    assert_eq!(result.tdee, result.bmr * 2.0);
    assert_eq!(
        compute_recommended_protein(70.0, "test_level", &config.activity_levels),
        210.0
    );
}

// ============================================================================
// Parsing helpers
// ============================================================================

#[test]
fn gender_parsing_is_case_insensitive_with_unspecified_catch_all() {
    assert_eq!(Gender::from_key("Male"), Gender::Male);
    assert_eq!(Gender::from_key("FEMALE"), Gender::Female);
    assert_eq!(Gender::from_key("nonbinary"), Gender::Unspecified);
    assert_eq!(Gender::from_key(""), Gender::Unspecified);
}

#[test]
fn diet_goal_parsing_defaults_to_maintain() {
    assert_eq!(DietGoal::from_key("fat_loss"), DietGoal::FatLoss);
    assert_eq!(DietGoal::from_key("Muscle_Gain"), DietGoal::MuscleGain);
    assert_eq!(DietGoal::from_key("recomp"), DietGoal::Recomp);
    assert_eq!(DietGoal::from_key("bulk"), DietGoal::Maintain);
}
