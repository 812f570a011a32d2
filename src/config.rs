use std::str::FromStr;

use anyhow::Context;

use crate::profile::{ActivityLevel, Gender, GoalType, UserInfo};

#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "meal_tracker=debug".into(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log: LogConfig,
    /// Profile used until the user finishes onboarding.
    pub profile: UserInfo,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Unset keys keep their
    /// defaults, malformed numbers are errors.
    pub fn from_lookup<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = UserInfo::default();
        let log = LogConfig {
            filter: var("RUST_LOG").unwrap_or_else(|| LogConfig::default().filter),
            json: var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false),
        };

        let profile = UserInfo {
            gender: var("PROFILE_GENDER")
                .map(|v| Gender::from_name(&v))
                .unwrap_or(defaults.gender),
            age: parsed(&var, "PROFILE_AGE", defaults.age)?,
            weight: parsed(&var, "PROFILE_WEIGHT_KG", defaults.weight)?,
            height: parsed(&var, "PROFILE_HEIGHT_CM", defaults.height)?,
            activity_level: var("PROFILE_ACTIVITY_LEVEL")
                .map(|v| ActivityLevel::from_name(&v))
                .unwrap_or(defaults.activity_level),
            goal_type: var("PROFILE_GOAL_TYPE")
                .map(|v| GoalType::from_name(&v))
                .unwrap_or(defaults.goal_type),
            carb_ratio: parsed(&var, "PROFILE_CARB_RATIO", defaults.carb_ratio)?,
            protein_ratio: parsed(&var, "PROFILE_PROTEIN_RATIO", defaults.protein_ratio)?,
            fat_ratio: parsed(&var, "PROFILE_FAT_RATIO", defaults.fat_ratio)?,
        };
        profile.validate().context("invalid default profile")?;

        Ok(Self { log, profile })
    }
}

fn parsed<F, T>(var: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} is not a valid number: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.log, LogConfig::default());
        assert_eq!(config.profile, UserInfo::default());
    }

    #[test]
    fn reads_log_and_profile_settings() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RUST_LOG", "meal_tracker=info"),
            ("LOG_FORMAT", "json"),
            ("PROFILE_GENDER", "female"),
            ("PROFILE_AGE", "31"),
            ("PROFILE_WEIGHT_KG", "62.5"),
            ("PROFILE_HEIGHT_CM", "170"),
            ("PROFILE_ACTIVITY_LEVEL", "high"),
            ("PROFILE_GOAL_TYPE", "lose_weight"),
            ("PROFILE_CARB_RATIO", "0.5"),
            ("PROFILE_PROTEIN_RATIO", "0.25"),
            ("PROFILE_FAT_RATIO", "0.25"),
        ]))
        .unwrap();

        assert_eq!(config.log.filter, "meal_tracker=info");
        assert!(config.log.json);
        assert_eq!(config.profile.gender, Gender::Female);
        assert_eq!(config.profile.age, 31);
        assert_eq!(config.profile.weight, 62.5);
        assert_eq!(config.profile.activity_level, ActivityLevel::High);
        assert_eq!(config.profile.goal_type, GoalType::LoseWeight);
        assert_eq!(config.profile.carb_ratio, 0.5);
    }

    #[test]
    fn malformed_number_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[("PROFILE_AGE", "twenty")])).unwrap_err();
        assert!(err.to_string().contains("PROFILE_AGE"));
    }

    #[test]
    fn invalid_profile_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("PROFILE_FAT_RATIO", "0.9")])).unwrap_err();
        assert!(err.to_string().contains("invalid default profile"));
    }
}
