use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::profile::model::DailyGoals;
use crate::tracker::model::{MealType, TrackedFood};

/// Summed nutrients of every entry logged under one meal type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealNutrients {
    pub meal_type: MealType,
    pub calories: u64,
    pub carbs: u64,
    pub protein: u64,
    pub fat: u64,
}

impl MealNutrients {
    pub fn empty(meal_type: MealType) -> Self {
        Self {
            meal_type,
            calories: 0,
            carbs: 0,
            protein: 0,
            fat: 0,
        }
    }

    /// Folds one entry into the group. Entries of a different meal type
    /// are the caller's mistake, so this only checks in debug builds.
    pub fn add(&mut self, food: &TrackedFood) {
        debug_assert_eq!(food.meal_type, self.meal_type);
        self.calories += u64::from(food.calories);
        self.carbs += u64::from(food.carbs);
        self.protein += u64::from(food.protein);
        self.fat += u64::from(food.fat);
    }
}

/// Grand totals across all meal types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub calories: u64,
    pub carbs: u64,
    pub protein: u64,
    pub fat: u64,
}

/// Per-meal breakdown plus grand totals for a list of entries.
///
/// Every meal type has a group, zeroed when nothing was logged for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub meal_nutrients: BTreeMap<MealType, MealNutrients>,
    pub total_calories: u64,
    pub total_carbs: u64,
    pub total_protein: u64,
    pub total_fat: u64,
}

impl AggregateResult {
    pub fn get(&self, meal_type: MealType) -> MealNutrients {
        self.meal_nutrients
            .get(&meal_type)
            .copied()
            .unwrap_or_else(|| MealNutrients::empty(meal_type))
    }

    pub fn iter(&self) -> impl Iterator<Item = &MealNutrients> {
        self.meal_nutrients.values()
    }

    pub fn totals(&self) -> Totals {
        Totals {
            calories: self.total_calories,
            carbs: self.total_carbs,
            protein: self.total_protein,
            fat: self.total_fat,
        }
    }
}

/// What the tracker overview shows: today's intake next to the targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealNutrientsReport {
    pub goals: DailyGoals,
    pub nutrients: AggregateResult,
}
