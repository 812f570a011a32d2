pub mod model;
pub mod preferences;
pub mod services;

pub use model::{ActivityLevel, DailyGoals, Gender, GoalType, ProfileError, UserInfo};
pub use preferences::{InMemoryPreferences, Preferences};
pub use services::{bmr, daily_calorie_requirement, daily_goals};
