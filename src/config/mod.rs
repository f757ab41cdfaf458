// ABOUTME: Configuration module for the nutrition targeting engine
// ABOUTME: Immutable lookup tables injected into every calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! # Configuration Module
//!
//! All lookup tables the calculators consume (BMR coefficients, activity
//! factors, goal adjustments, macro splits, meal proportions) live here as
//! plain serde structs with canonical defaults. Nothing in the engine reads
//! mutable global state: callers either pass a [`NutritionConfig`] they own
//! (tests substitute tables this way) or borrow the process-wide instance
//! from [`NutritionConfig::global`].

pub mod nutrition;

pub use nutrition::{
    ActivityLevel, ActivityLevelsConfig, BmrConfig, GoalTargets, GoalTargetsConfig, MealSlot,
    MealSplitConfig, NutritionConfig,
};
