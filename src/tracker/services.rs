use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use time::Date;
use tracing::{debug, instrument};

use crate::profile::{daily_goals, Preferences};
use crate::tracker::dto::{AggregateResult, MealNutrients, MealNutrientsReport};
use crate::tracker::model::{MealType, TrackedFood};

/// Groups entries by meal type and sums their nutrients.
///
/// Every meal type gets a group, so an empty slice yields four zeroed
/// groups and zero totals.
pub fn aggregate(foods: &[TrackedFood]) -> AggregateResult {
    let mut meal_nutrients: BTreeMap<MealType, MealNutrients> = MealType::ALL
        .into_iter()
        .map(|t| (t, MealNutrients::empty(t)))
        .collect();

    for food in foods {
        meal_nutrients
            .entry(food.meal_type)
            .or_insert_with(|| MealNutrients::empty(food.meal_type))
            .add(food);
    }

    let sum = |f: fn(&MealNutrients) -> u64| meal_nutrients.values().map(f).sum::<u64>();
    let result = AggregateResult {
        total_calories: sum(|n| n.calories),
        total_carbs: sum(|n| n.carbs),
        total_protein: sum(|n| n.protein),
        total_fat: sum(|n| n.fat),
        meal_nutrients,
    };

    debug!(
        entries = foods.len(),
        total_calories = result.total_calories,
        "meal nutrients aggregated"
    );
    result
}

/// Entries logged on `date`, in their original order.
pub fn foods_on(foods: &[TrackedFood], date: Date) -> Vec<TrackedFood> {
    foods.iter().filter(|f| f.date == date).cloned().collect()
}

/// Tracker overview use case: the day's intake next to the user's targets.
#[derive(Clone)]
pub struct CalculateMealNutrients {
    preferences: Arc<dyn Preferences>,
}

impl fmt::Debug for CalculateMealNutrients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculateMealNutrients").finish_non_exhaustive()
    }
}

impl CalculateMealNutrients {
    pub fn new(preferences: Arc<dyn Preferences>) -> Self {
        Self { preferences }
    }

    #[instrument(skip(self, foods), fields(entries = foods.len()))]
    pub fn calculate(&self, foods: &[TrackedFood]) -> MealNutrientsReport {
        let user_info = self.preferences.load_user_info();
        let goals = daily_goals(&user_info);
        let nutrients = aggregate(foods);
        debug!(
            calorie_goal = goals.calories,
            calories = nutrients.total_calories,
            "meal nutrients report ready"
        );
        MealNutrientsReport { goals, nutrients }
    }
}
