pub mod dto;
pub mod model;
pub mod services;

pub use dto::{AggregateResult, MealNutrients, MealNutrientsReport, Totals};
pub use model::{MealType, TrackedFood};
pub use services::{aggregate, foods_on, CalculateMealNutrients};
