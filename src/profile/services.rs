use tracing::debug;

use crate::profile::model::{DailyGoals, Gender, UserInfo};

const KCAL_PER_GRAM_CARBS: f32 = 4.0;
const KCAL_PER_GRAM_PROTEIN: f32 = 4.0;
const KCAL_PER_GRAM_FAT: f32 = 9.0;

/// Basal metabolic rate (revised Harris-Benedict), in kcal/day.
pub fn bmr(info: &UserInfo) -> i32 {
    let weight = info.weight;
    let height = info.height as f32;
    let age = info.age as f32;
    let kcal = match info.gender {
        Gender::Male => 66.47 + 13.75 * weight + 5.0 * height - 6.75 * age,
        Gender::Female => 665.09 + 9.56 * weight + 1.84 * height - 4.67 * age,
    };
    kcal.round() as i32
}

pub fn daily_calorie_requirement(info: &UserInfo) -> i32 {
    let maintenance = bmr(info) as f32 * info.activity_level.factor();
    (maintenance + info.goal_type.calorie_offset() as f32).round() as i32
}

pub fn daily_goals(info: &UserInfo) -> DailyGoals {
    let calories = daily_calorie_requirement(info);
    let grams = |ratio: f32, kcal_per_gram: f32| (calories as f32 * ratio / kcal_per_gram).round() as i32;
    let goals = DailyGoals {
        calories,
        carbs: grams(info.carb_ratio, KCAL_PER_GRAM_CARBS),
        protein: grams(info.protein_ratio, KCAL_PER_GRAM_PROTEIN),
        fat: grams(info.fat_ratio, KCAL_PER_GRAM_FAT),
    };
    debug!(?goals, gender = info.gender.name(), "daily goals computed");
    goals
}
