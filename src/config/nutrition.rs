// ABOUTME: Nutrition lookup tables: BMR coefficients, activity factors, goal targets
// ABOUTME: Canonical defaults plus env overrides, validation, and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

//! # Nutrition Configuration
//!
//! Reference tables for the targeting pipeline.
//!
//! # Scientific References
//!
//! - BMR: Mifflin, M.D., et al. (1990). A new predictive equation for
//!   resting energy expenditure. *American Journal of Clinical Nutrition*,
//!   51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010).
//!   Exercise Physiology
//! - Protein factors: Phillips, S.M., & Van Loon, L.J. (2011). Dietary
//!   protein for athletes. DOI: 10.1080/02640414.2011.619204

use crate::errors::ConfigError;
use crate::models::DietGoal;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Tolerance when checking that percentage triples sum to 1.0
const SPLIT_SUM_TOLERANCE: f64 = 1e-6;

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Mifflin-St Jeor coefficients. Reference: Mifflin et al. (1990),
/// DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// One activity level record in the reference table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLevel {
    /// Lookup key, matched exactly against the profile's activity level
    pub key: String,
    /// TDEE multiplier applied to BMR
    pub activity_factor: f64,
    /// Recommended protein intake (g per kg bodyweight)
    pub protein_factor_per_kg: f64,
}

impl ActivityLevel {
    fn new(key: &str, activity_factor: f64, protein_factor_per_kg: f64) -> Self {
        Self {
            key: key.to_owned(),
            activity_factor,
            protein_factor_per_kg,
        }
    }
}

/// Activity level reference table with fallback factors
///
/// The table is an ordered list so the onboarding form can render options
/// in a stable order. Lookups that miss fall back silently to the
/// sedentary-grade defaults below; legacy profiles carry activity keys
/// that predate the current table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLevelsConfig {
    /// Ordered activity level records
    pub levels: Vec<ActivityLevel>,
    /// Fallback TDEE multiplier for unknown keys (1.2, sedentary)
    pub default_activity_factor: f64,
    /// Fallback protein factor for unknown keys (0.8 g/kg, DRI minimum)
    pub default_protein_factor_per_kg: f64,
}

impl Default for ActivityLevelsConfig {
    fn default() -> Self {
        Self {
            levels: vec![
                ActivityLevel::new("sedentary", 1.2, 0.8),
                ActivityLevel::new("lightly_active", 1.375, 1.2),
                ActivityLevel::new("moderately_active", 1.55, 1.4),
                ActivityLevel::new("very_active", 1.725, 1.8),
                ActivityLevel::new("extra_active", 1.9, 2.0),
            ],
            default_activity_factor: 1.2,
            default_protein_factor_per_kg: 0.8,
        }
    }
}

impl ActivityLevelsConfig {
    /// Exact-match lookup by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ActivityLevel> {
        self.levels.iter().find(|level| level.key == key)
    }

    /// TDEE multiplier for `key`, or the default factor when the key is
    /// unknown or empty
    #[must_use]
    pub fn activity_factor_or_default(&self, key: &str) -> f64 {
        self.get(key).map_or_else(
            || {
                tracing::debug!(
                    activity_key = key,
                    fallback = self.default_activity_factor,
                    "unknown activity level key, using default activity factor"
                );
                self.default_activity_factor
            },
            |level| level.activity_factor,
        )
    }

    /// Protein factor (g/kg) for `key`, or the default factor when the key
    /// is unknown or empty
    #[must_use]
    pub fn protein_factor_or_default(&self, key: &str) -> f64 {
        self.get(key).map_or_else(
            || {
                tracing::debug!(
                    activity_key = key,
                    fallback = self.default_protein_factor_per_kg,
                    "unknown activity level key, using default protein factor"
                );
                self.default_protein_factor_per_kg
            },
            |level| level.protein_factor_per_kg,
        )
    }
}

/// Calorie adjustment and macro split for one diet goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalTargets {
    /// Signed kcal offset applied to TDEE (deficit negative, surplus positive)
    pub calorie_adjustment: f64,
    /// Protein fraction of target calories (0.0-1.0)
    pub protein_pct: f64,
    /// Carbohydrate fraction of target calories (0.0-1.0)
    pub carb_pct: f64,
    /// Fat fraction of target calories (0.0-1.0)
    pub fat_pct: f64,
}

impl GoalTargets {
    const fn new(calorie_adjustment: f64, protein_pct: f64, carb_pct: f64, fat_pct: f64) -> Self {
        Self {
            calorie_adjustment,
            protein_pct,
            carb_pct,
            fat_pct,
        }
    }
}

/// Per-goal calorie adjustments and macro splits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTargetsConfig {
    /// Fat loss: 500 kcal deficit, protein-forward split
    pub fat_loss: GoalTargets,
    /// Muscle gain: 300 kcal surplus, carb-forward split
    pub muscle_gain: GoalTargets,
    /// Recomposition: 200 kcal deficit, high protein
    pub recomp: GoalTargets,
    /// Maintain and any unrecognized goal: no adjustment, balanced split
    pub maintain: GoalTargets,
}

impl Default for GoalTargetsConfig {
    fn default() -> Self {
        Self {
            fat_loss: GoalTargets::new(-500.0, 0.35, 0.35, 0.30),
            muscle_gain: GoalTargets::new(300.0, 0.30, 0.50, 0.20),
            recomp: GoalTargets::new(-200.0, 0.40, 0.35, 0.25),
            maintain: GoalTargets::new(0.0, 0.25, 0.50, 0.25),
        }
    }
}

impl GoalTargetsConfig {
    /// Targets row for a diet goal
    #[must_use]
    pub const fn for_goal(&self, goal: DietGoal) -> &GoalTargets {
        match goal {
            DietGoal::FatLoss => &self.fat_loss,
            DietGoal::MuscleGain => &self.muscle_gain,
            DietGoal::Recomp => &self.recomp,
            DietGoal::Maintain => &self.maintain,
        }
    }

    fn rows(&self) -> [(&'static str, &GoalTargets); 4] {
        [
            ("fat_loss", &self.fat_loss),
            ("muscle_gain", &self.muscle_gain),
            ("recomp", &self.recomp),
            ("maintain", &self.maintain),
        ]
    }
}

/// One meal slot in the daily distribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSlot {
    /// Slot name surfaced to the meal-plan generator (e.g. `breakfast`)
    pub key: String,
    /// Fraction of the daily target assigned to this slot (0.0-1.0)
    pub proportion: f64,
}

impl MealSlot {
    fn new(key: &str, proportion: f64) -> Self {
        Self {
            key: key.to_owned(),
            proportion,
        }
    }
}

/// Daily meal distribution configuration
///
/// Proportions must sum to 1.0 so the per-meal calories re-add to the daily
/// target (before per-meal gram rounding).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSplitConfig {
    /// Ordered meal slots
    pub slots: Vec<MealSlot>,
}

impl Default for MealSplitConfig {
    fn default() -> Self {
        Self {
            slots: vec![
                MealSlot::new("breakfast", 0.25),
                MealSlot::new("lunch", 0.35),
                MealSlot::new("dinner", 0.30),
                MealSlot::new("snack", 0.10),
            ],
        }
    }
}

/// Complete nutrition configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity level reference table
    pub activity_levels: ActivityLevelsConfig,
    /// Per-goal calorie adjustments and macro splits
    pub goal_targets: GoalTargetsConfig,
    /// Meal distribution proportions
    pub meal_split: MealSplitConfig,
}

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load nutrition config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override cannot be parsed or the
    /// resulting tables fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = std::env::var("NUTRIPLAN_DEFAULT_ACTIVITY_FACTOR") {
            self.activity_levels.default_activity_factor = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid NUTRIPLAN_DEFAULT_ACTIVITY_FACTOR".into()))?;
        }

        if let Ok(val) = std::env::var("NUTRIPLAN_DEFAULT_PROTEIN_FACTOR") {
            self.activity_levels.default_protein_factor_per_kg = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid NUTRIPLAN_DEFAULT_PROTEIN_FACTOR".into()))?;
        }

        if let Ok(val) = std::env::var("NUTRIPLAN_FAT_LOSS_ADJUSTMENT") {
            self.goal_targets.fat_loss.calorie_adjustment = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid NUTRIPLAN_FAT_LOSS_ADJUSTMENT".into()))?;
        }

        if let Ok(val) = std::env::var("NUTRIPLAN_MUSCLE_GAIN_ADJUSTMENT") {
            self.goal_targets.muscle_gain.calorie_adjustment = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid NUTRIPLAN_MUSCLE_GAIN_ADJUSTMENT".into()))?;
        }

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any table entry is out of range, a lookup key is
    /// duplicated, or a percentage set does not sum to 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for level in &self.activity_levels.levels {
            if level.activity_factor <= 1.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "activity_factor must be > 1.0",
                ));
            }
            if level.protein_factor_per_kg < 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "protein_factor_per_kg must be >= 0",
                ));
            }
        }

        for (i, level) in self.activity_levels.levels.iter().enumerate() {
            if self.activity_levels.levels[..i]
                .iter()
                .any(|other| other.key == level.key)
            {
                return Err(ConfigError::DuplicateKey(level.key.clone()));
            }
        }

        if self.activity_levels.default_activity_factor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_activity_factor must be positive",
            ));
        }
        if self.activity_levels.default_protein_factor_per_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_protein_factor_per_kg must be >= 0",
            ));
        }

        for (name, targets) in self.goal_targets.rows() {
            let sum = targets.protein_pct + targets.carb_pct + targets.fat_pct;
            if (sum - 1.0).abs() > SPLIT_SUM_TOLERANCE {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro split must sum to 1.0, got {sum}"
                )));
            }
        }

        if self.meal_split.slots.is_empty() {
            return Err(ConfigError::ValueOutOfRange(
                "meal_split must define at least one slot",
            ));
        }
        let slot_sum: f64 = self.meal_split.slots.iter().map(|s| s.proportion).sum();
        if (slot_sum - 1.0).abs() > SPLIT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(format!(
                "meal slot proportions must sum to 1.0, got {slot_sum}"
            )));
        }
        for slot in &self.meal_split.slots {
            if !(0.0..=1.0).contains(&slot.proportion) {
                return Err(ConfigError::ValueOutOfRange(
                    "meal slot proportion must be between 0.0 and 1.0",
                ));
            }
        }

        Ok(())
    }
}
