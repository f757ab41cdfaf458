// ABOUTME: Main library entry point for the NutriPlan nutrition targeting engine
// ABOUTME: Computes BMR, TDEE, goal-adjusted calorie targets, and macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

#![deny(unsafe_code)]

//! # NutriPlan Intelligence
//!
//! Pure calculation engine behind the NutriPlan meal-planning platform.
//! Maps a user profile snapshot (demographics, activity level, diet goal)
//! to daily calorie and macronutrient targets, and splits those targets
//! across the day's meals.
//!
//! The pipeline is fully deterministic and side-effect free:
//!
//! profile → BMR → TDEE → goal-adjusted calories → macro grams → meal split
//!
//! Lookup tables (activity factors, goal adjustments, macro splits) are
//! immutable injected configuration, so every computation can be exercised
//! against substituted tables in tests. A process-wide default instance is
//! available via [`config::NutritionConfig::global`].
//!
//! ## Example
//!
//! ```rust
//! use nutriplan_intelligence::config::NutritionConfig;
//! use nutriplan_intelligence::models::{DietGoal, Gender, ProfileSnapshot};
//! use nutriplan_intelligence::nutrition_calculator::compute_daily_targets;
//!
//! let config = NutritionConfig::default();
//! let profile = ProfileSnapshot {
//!     gender: Some(Gender::Female),
//!     weight_kg: Some(62.0),
//!     height_cm: Some(168.0),
//!     age_years: Some(29.0),
//!     activity_key: Some("moderately_active".to_owned()),
//!     diet_goal: Some(DietGoal::FatLoss),
//! };
//!
//! let targets = compute_daily_targets(&profile, &config);
//! assert!(targets.is_some());
//! ```

/// Configuration for lookup tables and default factors
pub mod config;

/// Configuration error taxonomy
pub mod errors;

/// Meal-level distribution of daily targets
pub mod meal_split;

/// Profile, goal, and target result models
pub mod models;

/// BMR, TDEE, and daily target calculations
pub mod nutrition_calculator;

pub use config::NutritionConfig;
pub use meal_split::{split_daily_targets, MealTarget};
pub use models::{DietGoal, Gender, ProfileSnapshot, TargetResult};
pub use nutrition_calculator::{
    compute_bmr, compute_daily_targets, compute_recommended_protein, compute_tdee,
};
