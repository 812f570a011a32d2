use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "male" => Gender::Male,
            _ => Gender::Female,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "low" => ActivityLevel::Low,
            "high" => ActivityLevel::High,
            _ => ActivityLevel::Medium,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Medium => "medium",
            ActivityLevel::High => "high",
        }
    }

    /// Multiplier applied to the basal metabolic rate.
    pub fn factor(self) -> f32 {
        match self {
            ActivityLevel::Low => 1.2,
            ActivityLevel::Medium => 1.3,
            ActivityLevel::High => 1.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum GoalType {
    LoseWeight,
    KeepWeight,
    GainWeight,
}

impl GoalType {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "lose_weight" => GoalType::LoseWeight,
            "gain_weight" => GoalType::GainWeight,
            _ => GoalType::KeepWeight,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GoalType::LoseWeight => "lose_weight",
            GoalType::KeepWeight => "keep_weight",
            GoalType::GainWeight => "gain_weight",
        }
    }

    /// Daily kcal added on top of maintenance.
    pub fn calorie_offset(self) -> i32 {
        match self {
            GoalType::LoseWeight => -500,
            GoalType::KeepWeight => 0,
            GoalType::GainWeight => 500,
        }
    }
}

macro_rules! named_enum_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<String> for $ty {
                fn from(name: String) -> Self {
                    Self::from_name(&name)
                }
            }

            impl From<$ty> for &'static str {
                fn from(value: $ty) -> Self {
                    value.name()
                }
            }
        )*
    };
}

named_enum_conversions!(Gender, ActivityLevel, GoalType);

/// Profile collected during onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub gender: Gender,
    pub age: u32,
    /// kg
    pub weight: f32,
    /// cm
    pub height: u32,
    pub activity_level: ActivityLevel,
    pub goal_type: GoalType,
    pub carb_ratio: f32,
    pub protein_ratio: f32,
    pub fat_ratio: f32,
}

impl Default for UserInfo {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age: 20,
            weight: 80.0,
            height: 180,
            activity_level: ActivityLevel::Medium,
            goal_type: GoalType::KeepWeight,
            carb_ratio: 0.4,
            protein_ratio: 0.3,
            fat_ratio: 0.3,
        }
    }
}

const RATIO_TOLERANCE: f32 = 0.01;

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("age must be greater than zero")]
    InvalidAge,
    #[error("weight must be positive, got {0}")]
    InvalidWeight(f32),
    #[error("height must be greater than zero")]
    InvalidHeight,
    #[error("{name} ratio must not be negative, got {value}")]
    NegativeRatio { name: &'static str, value: f32 },
    #[error("macro ratios must add up to 1.0, got {0}")]
    RatiosDoNotSum(f32),
}

impl UserInfo {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.age == 0 {
            return Err(ProfileError::InvalidAge);
        }
        if self.weight.is_nan() || self.weight <= 0.0 {
            return Err(ProfileError::InvalidWeight(self.weight));
        }
        if self.height == 0 {
            return Err(ProfileError::InvalidHeight);
        }
        for (name, value) in [
            ("carb", self.carb_ratio),
            ("protein", self.protein_ratio),
            ("fat", self.fat_ratio),
        ] {
            if value < 0.0 {
                return Err(ProfileError::NegativeRatio { name, value });
            }
        }
        let sum = self.carb_ratio + self.protein_ratio + self.fat_ratio;
        if (sum - 1.0).abs() > RATIO_TOLERANCE {
            return Err(ProfileError::RatiosDoNotSum(sum));
        }
        Ok(())
    }
}

/// Per-day targets derived from a [`UserInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGoals {
    pub calories: i32,
    pub carbs: i32,
    pub protein: i32,
    pub fat: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_names_fall_back_to_defaults() {
        assert_eq!(Gender::from_name("MALE"), Gender::Male);
        assert_eq!(Gender::from_name("other"), Gender::Female);
        assert_eq!(ActivityLevel::from_name("High"), ActivityLevel::High);
        assert_eq!(ActivityLevel::from_name("couch"), ActivityLevel::Medium);
        assert_eq!(GoalType::from_name("lose_weight"), GoalType::LoseWeight);
        assert_eq!(GoalType::from_name("bulk"), GoalType::KeepWeight);
    }

    #[test]
    fn default_profile_is_valid() {
        assert_eq!(UserInfo::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_ratios() {
        let info = UserInfo {
            carb_ratio: 0.5,
            protein_ratio: 0.5,
            fat_ratio: 0.5,
            ..UserInfo::default()
        };
        assert!(matches!(info.validate(), Err(ProfileError::RatiosDoNotSum(_))));

        let info = UserInfo {
            carb_ratio: 1.2,
            protein_ratio: -0.2,
            fat_ratio: 0.0,
            ..UserInfo::default()
        };
        assert_eq!(
            info.validate(),
            Err(ProfileError::NegativeRatio { name: "protein", value: -0.2 })
        );
    }

    #[test]
    fn validate_rejects_missing_body_measurements() {
        let no_age = UserInfo { age: 0, ..UserInfo::default() };
        assert_eq!(no_age.validate(), Err(ProfileError::InvalidAge));

        let no_weight = UserInfo { weight: 0.0, ..UserInfo::default() };
        assert_eq!(no_weight.validate(), Err(ProfileError::InvalidWeight(0.0)));

        let no_height = UserInfo { height: 0, ..UserInfo::default() };
        assert_eq!(no_height.validate(), Err(ProfileError::InvalidHeight));
    }

    #[test]
    fn user_info_serializes_wire_names() {
        let json = serde_json::to_value(UserInfo::default()).unwrap();
        assert_eq!(json["gender"], "male");
        assert_eq!(json["activity_level"], "medium");
        assert_eq!(json["goal_type"], "keep_weight");
    }
}
