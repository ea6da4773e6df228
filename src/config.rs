//! # Configuration Module
//!
//! This module defines configuration structures for shopping list generation
//! and the command line entry point, loaded from environment variables (and
//! an optional `.env` file).

use crate::duplicate_detector::DEFAULT_SIMILARITY_THRESHOLD;
use crate::errors::{Result, ShoppingListError};
use std::path::PathBuf;

// Environment variable names
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_PLAN_ID: &str = "PLAN_ID";
pub const ENV_RECIPES_PATH: &str = "RECIPES_PATH";
pub const ENV_EXCLUDE_PANTRY: &str = "EXCLUDE_PANTRY";
pub const ENV_GROUP_BY_RECIPE: &str = "GROUP_BY_RECIPE";
pub const ENV_FUZZY_MATCHING: &str = "FUZZY_MATCHING";
pub const ENV_FUZZY_THRESHOLD: &str = "FUZZY_THRESHOLD";

/// Options for a single shopping list generation
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListConfig {
    /// Drop pantry staples before consolidation
    pub exclude_pantry_items: bool,
    /// Export text grouped by recipe instead of by category
    pub group_by_recipe: bool,
    /// Merge near-identical item names ("tomato" / "tomatoes")
    pub fuzzy_matching: bool,
    /// Similarity required for a fuzzy merge, `0.0..=1.0`
    pub fuzzy_threshold: f64,
}

impl Default for ShoppingListConfig {
    fn default() -> Self {
        Self {
            exclude_pantry_items: false,
            group_by_recipe: false,
            fuzzy_matching: false,
            fuzzy_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// Configuration for the command line tool
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// PostgreSQL connection string for plan storage
    pub database_url: Option<String>,
    /// Plan the generated list is saved under
    pub plan_id: Option<String>,
    /// JSON file holding the recipes
    pub recipes_path: Option<PathBuf>,
    pub shopping: ShoppingListConfig,
}

impl AppConfig {
    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let defaults = ShoppingListConfig::default();
        let fuzzy_threshold = match non_empty(ENV_FUZZY_THRESHOLD) {
            Some(raw) => parse_threshold(&raw)?,
            None => defaults.fuzzy_threshold,
        };

        let shopping = ShoppingListConfig {
            exclude_pantry_items: parse_flag(ENV_EXCLUDE_PANTRY, non_empty(ENV_EXCLUDE_PANTRY))?
                .unwrap_or(defaults.exclude_pantry_items),
            group_by_recipe: parse_flag(ENV_GROUP_BY_RECIPE, non_empty(ENV_GROUP_BY_RECIPE))?
                .unwrap_or(defaults.group_by_recipe),
            fuzzy_matching: parse_flag(ENV_FUZZY_MATCHING, non_empty(ENV_FUZZY_MATCHING))?
                .unwrap_or(defaults.fuzzy_matching),
            fuzzy_threshold,
        };

        Ok(Self {
            database_url: non_empty(ENV_DATABASE_URL),
            plan_id: non_empty(ENV_PLAN_ID),
            recipes_path: non_empty(ENV_RECIPES_PATH).map(PathBuf::from),
            shopping,
        })
    }
}

fn parse_flag(key: &str, raw: Option<String>) -> Result<Option<bool>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        other => Err(ShoppingListError::Config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

fn parse_threshold(raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        ShoppingListError::Config(format!("{ENV_FUZZY_THRESHOLD} must be a number, got '{raw}'"))
    })?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ShoppingListError::Config(format!(
            "{ENV_FUZZY_THRESHOLD} must be between 0 and 1, got {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.shopping.fuzzy_threshold, DEFAULT_SIMILARITY_THRESHOLD);
    }

    #[test]
    fn test_full_configuration() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_DATABASE_URL, "postgres://localhost/meals"),
            (ENV_PLAN_ID, "week-42"),
            (ENV_RECIPES_PATH, "recipes.json"),
            (ENV_EXCLUDE_PANTRY, "Yes"),
            (ENV_GROUP_BY_RECIPE, "1"),
            (ENV_FUZZY_MATCHING, "on"),
            (ENV_FUZZY_THRESHOLD, "0.9"),
        ]))
        .unwrap();

        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/meals"));
        assert_eq!(config.plan_id.as_deref(), Some("week-42"));
        assert_eq!(config.recipes_path, Some(PathBuf::from("recipes.json")));
        assert!(config.shopping.exclude_pantry_items);
        assert!(config.shopping.group_by_recipe);
        assert!(config.shopping.fuzzy_matching);
        assert_eq!(config.shopping.fuzzy_threshold, 0.9);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config =
            AppConfig::from_lookup(lookup_from(&[(ENV_PLAN_ID, "  "), (ENV_EXCLUDE_PANTRY, "")]))
                .unwrap();
        assert_eq!(config.plan_id, None);
        assert!(!config.shopping.exclude_pantry_items);
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_EXCLUDE_PANTRY, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ShoppingListError::Config(_)));

        let err = AppConfig::from_lookup(lookup_from(&[(ENV_FUZZY_THRESHOLD, "1.5")]))
            .unwrap_err();
        assert!(err.to_string().contains("between 0 and 1"));

        let err = AppConfig::from_lookup(lookup_from(&[(ENV_FUZZY_THRESHOLD, "high")]))
            .unwrap_err();
        assert!(err.to_string().contains("must be a number"));
    }
}
