// ABOUTME: Nutrition target calculations: BMR, TDEE, protein, daily targets
// ABOUTME: Pure functions over injected config tables; never fails by contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! # Nutrition Target Calculator
//!
//! Deterministic pipeline from a profile snapshot to daily calorie and
//! macronutrient targets. Every function here is pure: no I/O, no shared
//! state, and identical inputs produce bit-identical outputs, so calls are
//! safe from any number of threads without coordination.
//!
//! This module deliberately performs NO range validation. Out-of-domain
//! numeric inputs (negative weight, zero height) propagate into
//! arithmetically valid but physiologically meaningless outputs; the
//! onboarding forms constrain inputs upstream. The two degenerate outcomes
//! are an insufficient-data sentinel (`None` from
//! [`compute_daily_targets`]) and silent fallback factors for unknown
//! activity keys.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. DOI: 10.1093/ajcn/51.2.241
//! - Atwater general factors for macronutrient energy density
//!   (protein/carbohydrate 4 kcal/g, fat 9 kcal/g)

use crate::config::{ActivityLevelsConfig, BmrConfig, NutritionConfig};
use crate::models::{Gender, ProfileSnapshot, TargetResult};

/// Energy density of protein (Atwater general factor)
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
/// Energy density of carbohydrate (Atwater general factor)
pub const CARB_KCAL_PER_G: f64 = 4.0;
/// Energy density of fat (Atwater general factor)
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + constant
/// - Male: +5
/// - Female: -161
/// - Unspecified: arithmetic mean of the male and female results on the
///   same inputs
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn compute_bmr(
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    config: &BmrConfig,
) -> f64 {
    let base = config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * age_years;

    // The formulas differ only in the gender constant, so the unspecified
    // mean reduces to the midpoint of the two constants.
    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
        Gender::Unspecified => (config.msj_male_constant + config.msj_female_constant) / 2.0,
    };

    base + gender_constant
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity factor. The factor comes from the
/// activity table; unknown or empty keys silently use the configured
/// default (1.2, sedentary).
#[must_use]
pub fn compute_tdee(bmr: f64, activity_key: &str, config: &ActivityLevelsConfig) -> f64 {
    bmr * config.activity_factor_or_default(activity_key)
}

/// Recommended daily protein intake in grams
///
/// Formula: `weight_kg` x per-level protein factor (g/kg), with the
/// configured default (0.8 g/kg) for unknown keys. Callable on its own:
/// the coaching screens show a protein recommendation before the user has
/// picked a diet goal.
#[must_use]
pub fn compute_recommended_protein(
    weight_kg: f64,
    activity_key: &str,
    config: &ActivityLevelsConfig,
) -> f64 {
    weight_kg * config.protein_factor_or_default(activity_key)
}

/// Convert a calorie share to grams, rounded to the nearest gram
fn macro_grams(target_calories: f64, fraction: f64, kcal_per_g: f64) -> f64 {
    (target_calories * fraction / kcal_per_g).round()
}

/// Calculate complete daily targets for a profile snapshot
///
/// The composite entry point used by the rest of the platform:
///
/// 1. Gate on profile completeness - `None` means "not enough information",
///    not an error. An empty activity key counts as missing.
/// 2. BMR, then TDEE via the activity table.
/// 3. Goal adjustment on TDEE (e.g. fat loss: -500 kcal).
/// 4. Macro split percentages by goal, converted to grams and rounded to
///    the nearest gram, each macro independently.
///
/// `bmr`, `tdee`, and `final_target_calories` stay unrounded in the result
/// while the gram fields are rounded; display code and derived
/// recomputations depend on exactly this shape. Because the grams round
/// independently, the kcal sum reconstructed from them may drift a few kcal
/// from `final_target_calories`.
#[must_use]
pub fn compute_daily_targets(
    profile: &ProfileSnapshot,
    config: &NutritionConfig,
) -> Option<TargetResult> {
    let gender = profile.gender?;
    let weight_kg = profile.weight_kg?;
    let height_cm = profile.height_cm?;
    let age_years = profile.age_years?;
    let activity_key = profile.activity_key.as_deref().filter(|k| !k.is_empty())?;
    let diet_goal = profile.diet_goal?;

    let bmr = compute_bmr(gender, weight_kg, height_cm, age_years, &config.bmr);
    let tdee = compute_tdee(bmr, activity_key, &config.activity_levels);

    let goal = config.goal_targets.for_goal(diet_goal);
    let final_target_calories = tdee + goal.calorie_adjustment;

    Some(TargetResult {
        bmr,
        tdee,
        final_target_calories,
        protein_grams: macro_grams(final_target_calories, goal.protein_pct, PROTEIN_KCAL_PER_G),
        carb_grams: macro_grams(final_target_calories, goal.carb_pct, CARB_KCAL_PER_G),
        fat_grams: macro_grams(final_target_calories, goal.fat_pct, FAT_KCAL_PER_G),
    })
}
