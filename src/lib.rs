//! Food-log tracking core: per-meal nutrient sums and daily goals.

pub mod config;
pub mod profile;
pub mod telemetry;
pub mod tracker;

pub use config::{AppConfig, LogConfig};
pub use profile::{DailyGoals, InMemoryPreferences, Preferences, UserInfo};
pub use tracker::{
    aggregate, AggregateResult, CalculateMealNutrients, MealNutrients, MealNutrientsReport,
    MealType, TrackedFood,
};
