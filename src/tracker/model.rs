use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Meal slot a food entry is logged under.
///
/// Ordered by time of day, so maps keyed by it iterate breakfast first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    /// Parses a free-form name. Matching ignores case and surrounding
    /// whitespace; anything unknown becomes `Breakfast`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            "snack" => MealType::Snack,
            _ => MealType::Breakfast,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl From<&str> for MealType {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for MealType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<MealType> for &'static str {
    fn from(meal_type: MealType) -> Self {
        meal_type.name()
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One logged food item. Entries are never edited in place; an edit
/// replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedFood {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub calories: u32,
    pub carbs: u32,
    pub protein: u32,
    pub fat: u32,
    pub amount: u32,
    pub meal_type: MealType,
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(default)]
    pub image_url: Option<String>,
}
