// ABOUTME: Data models for nutrition targeting: profile snapshot, goals, results
// ABOUTME: Serde wire names match the NutriPlan profile document schema (camelCase)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! # Nutrition Models
//!
//! Caller-facing types for the targeting pipeline. `ProfileSnapshot` mirrors
//! the onboarding profile document: fields are individually optional because
//! the onboarding flow fills them incrementally, and downstream consumers
//! (meal distribution, AI prompt construction) read the result fields by
//! their JSON names. Wire names are therefore part of the contract:
//! `finalTargetCalories`, `proteinGrams`, `carbGrams`, `fatGrams`.

use serde::{Deserialize, Serialize};

/// Gender for BMR calculations
///
/// `Unspecified` covers every value outside male/female; the BMR formula
/// then averages the male and female equations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (Mifflin-St Jeor constant +5)
    Male,
    /// Female (Mifflin-St Jeor constant -161)
    Female,
    /// Any other or undisclosed value
    #[serde(other)]
    Unspecified,
}

impl Gender {
    /// Parse a raw form value, case-insensitively.
    ///
    /// Anything that is not `male` or `female` maps to [`Gender::Unspecified`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Unspecified,
        }
    }
}

/// Diet goal selecting both a calorie adjustment and a macro-split profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DietGoal {
    /// Fat loss (caloric deficit, protein-forward split)
    FatLoss,
    /// Muscle gain (caloric surplus, carb-forward split)
    MuscleGain,
    /// Body recomposition (mild deficit, high protein)
    Recomp,
    /// Maintain current weight; also the catch-all for unknown goals
    #[serde(other)]
    Maintain,
}

impl DietGoal {
    /// Parse a raw form value, case-insensitively.
    ///
    /// Unknown goals map to [`DietGoal::Maintain`], matching the calorie
    /// adjustment and macro-split fallback rows.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.to_lowercase().as_str() {
            "fat_loss" => Self::FatLoss,
            "muscle_gain" => Self::MuscleGain,
            "recomp" => Self::Recomp,
            _ => Self::Maintain,
        }
    }
}

/// Snapshot of a user profile at calculation time
///
/// Field names follow the profile document schema. All fields are optional:
/// the onboarding flow saves the document after every step, and targets are
/// only computable once the six required fields are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSnapshot {
    /// Gender used by the BMR formula
    pub gender: Option<Gender>,
    /// Current body weight in kilograms
    #[serde(rename = "currentWeight")]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: Option<f64>,
    /// Age in years
    #[serde(rename = "age")]
    pub age_years: Option<f64>,
    /// Activity level key, matched exactly against the activity table
    #[serde(rename = "activityLevel")]
    pub activity_key: Option<String>,
    /// Diet goal
    pub diet_goal: Option<DietGoal>,
}

impl ProfileSnapshot {
    /// Document field names of required values that are still absent.
    ///
    /// An empty-string activity level counts as absent, mirroring how the
    /// onboarding form persists untouched select inputs. The onboarding UI
    /// uses these names directly to highlight incomplete steps.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.weight_kg.is_none() {
            missing.push("currentWeight");
        }
        if self.height_cm.is_none() {
            missing.push("height");
        }
        if self.age_years.is_none() {
            missing.push("age");
        }
        if self.activity_key.as_deref().unwrap_or("").is_empty() {
            missing.push("activityLevel");
        }
        if self.diet_goal.is_none() {
            missing.push("dietGoal");
        }
        missing
    }

    /// Whether every field required for target computation is present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Daily calorie and macronutrient targets
///
/// `bmr`, `tdee`, and `final_target_calories` are unrounded; the gram fields
/// are each independently rounded to the nearest whole gram. The kcal sum
/// reconstructed from the rounded grams may drift a few kcal from
/// `final_target_calories`; that drift is accepted, not corrected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetResult {
    /// Basal Metabolic Rate (kcal/day, unrounded)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day, unrounded)
    pub tdee: f64,
    /// Goal-adjusted daily calorie target (kcal/day, unrounded)
    pub final_target_calories: f64,
    /// Daily protein target (grams, rounded)
    pub protein_grams: f64,
    /// Daily carbohydrate target (grams, rounded)
    pub carb_grams: f64,
    /// Daily fat target (grams, rounded)
    pub fat_grams: f64,
}

impl TargetResult {
    /// Copy of the targets with energy values rounded to whole kcal.
    ///
    /// Display surfaces round `bmr`/`tdee`/`finalTargetCalories` themselves;
    /// this helper keeps that rounding in one place without disturbing the
    /// stored unrounded values other consumers recompute from.
    #[must_use]
    pub fn rounded_for_display(&self) -> Self {
        Self {
            bmr: self.bmr.round(),
            tdee: self.tdee.round(),
            final_target_calories: self.final_target_calories.round(),
            protein_grams: self.protein_grams,
            carb_grams: self.carb_grams,
            fat_grams: self.fat_grams,
        }
    }
}
