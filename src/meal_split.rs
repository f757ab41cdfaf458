// ABOUTME: Splits a day's calorie and macro targets across configured meal slots
// ABOUTME: Per-meal grams round independently, same rule as the daily targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! # Meal Distribution
//!
//! The meal-plan generator is prompted one meal at a time, so the daily
//! [`TargetResult`] is split into per-meal targets first. Each slot takes a
//! configured fraction of the day's calories; macro grams are recomputed
//! from the slot's calories and the day's macro fractions, then rounded
//! per meal. Rounding drift across slots is accepted for the same reason it
//! is accepted at the daily level.

use serde::{Deserialize, Serialize};

use crate::config::MealSplitConfig;
use crate::models::TargetResult;
use crate::nutrition_calculator::{CARB_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};

/// Calorie and macro targets for a single meal slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealTarget {
    /// Slot name from the meal split configuration (e.g. `lunch`)
    pub slot: String,
    /// Calories assigned to this slot (unrounded)
    pub calories: f64,
    /// Protein target for this slot (grams, rounded)
    pub protein_grams: f64,
    /// Carbohydrate target for this slot (grams, rounded)
    pub carb_grams: f64,
    /// Fat target for this slot (grams, rounded)
    pub fat_grams: f64,
}

/// Split daily targets across the configured meal slots
///
/// Slot calories are `final_target_calories` x slot proportion. The macro
/// fractions implied by the day's rounded gram targets are reapplied per
/// slot so each meal keeps the day's macro balance. Returns slots in
/// configuration order.
#[must_use]
pub fn split_daily_targets(targets: &TargetResult, config: &MealSplitConfig) -> Vec<MealTarget> {
    let daily_calories = targets.final_target_calories;

    // Macro calorie fractions reconstructed from the day's gram targets.
    // Guard the degenerate zero-calorie day rather than dividing by it.
    let (protein_frac, carb_frac, fat_frac) = if daily_calories.abs() < f64::EPSILON {
        (0.0, 0.0, 0.0)
    } else {
        (
            targets.protein_grams * PROTEIN_KCAL_PER_G / daily_calories,
            targets.carb_grams * CARB_KCAL_PER_G / daily_calories,
            targets.fat_grams * FAT_KCAL_PER_G / daily_calories,
        )
    };

    config
        .slots
        .iter()
        .map(|slot| {
            let calories = daily_calories * slot.proportion;
            MealTarget {
                slot: slot.key.clone(),
                calories,
                protein_grams: (calories * protein_frac / PROTEIN_KCAL_PER_G).round(),
                carb_grams: (calories * carb_frac / CARB_KCAL_PER_G).round(),
                fat_grams: (calories * fat_frac / FAT_KCAL_PER_G).round(),
            }
        })
        .collect()
}
