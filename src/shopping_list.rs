//! # Shopping List Generation
//!
//! Runs the full pipeline for a set of recipes: parse every ingredient line,
//! optionally drop pantry staples, consolidate by item and group the result
//! by grocery category.
//!
//! ## Usage
//!
//! ```rust
//! use meal_planner::categorizer::Category;
//! use meal_planner::ingredient_model::Recipe;
//! use meal_planner::shopping_list::generate;
//!
//! let recipes = vec![
//!     Recipe::new("A", vec!["2 cups flour".to_string(), "1 tsp salt".to_string()]),
//!     Recipe::new("B", vec!["1 cup flour".to_string()]),
//! ];
//! let list = generate(&recipes, true);
//!
//! let flour = list.find("flour").unwrap();
//! assert_eq!(flour.quantity, Some(3.0));
//! assert_eq!(flour.category, Category::Pantry);
//! assert!(list.find("salt").is_none());
//! ```

use crate::config::ShoppingListConfig;
use crate::consolidator::consolidate_with;
use crate::duplicate_detector::{ExactMatcher, FuzzyMatcher};
use crate::errors::{Result, ShoppingListError};
use crate::formatter::to_copy_text;
use crate::ingredient_model::{ParsedIngredient, Recipe, ShoppingList};
use crate::ingredient_parser::parse_recipe;
use crate::pantry::is_pantry_item;
use crate::plan_store::PlanStore;
use std::path::Path;
use tracing::{debug, error, info};

/// Generate a shopping list with exact item matching
pub fn generate(recipes: &[Recipe], exclude_pantry: bool) -> ShoppingList {
    let config = ShoppingListConfig {
        exclude_pantry_items: exclude_pantry,
        ..Default::default()
    };
    ShoppingListService::new(config).generate(recipes)
}

/// Outcome of generating a list for a meal plan.
///
/// The list is always present; a failed save only shows up in `save_error`.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub list: ShoppingList,
    pub save_error: Option<ShoppingListError>,
}

impl GenerationReport {
    pub fn saved(&self) -> bool {
        self.save_error.is_none()
    }
}

/// Shopping list generator bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct ShoppingListService {
    config: ShoppingListConfig,
}

impl ShoppingListService {
    pub fn new(config: ShoppingListConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShoppingListConfig {
        &self.config
    }

    /// Parse, filter and scale every ingredient line of the recipes
    pub fn collect_ingredients(&self, recipes: &[Recipe]) -> Vec<ParsedIngredient> {
        let mut collected = Vec::new();

        for recipe in recipes {
            if recipe.ingredients.is_empty() {
                debug!(recipe = %recipe.name, "Recipe has no ingredients, skipping");
                continue;
            }

            for ingredient in parse_recipe(recipe) {
                if self.config.exclude_pantry_items && is_pantry_item(&ingredient.item) {
                    debug!(
                        recipe = %recipe.name,
                        item = %ingredient.item,
                        "Dropping pantry staple"
                    );
                    continue;
                }
                collected.push(ingredient);
            }
        }

        collected
    }

    /// Run the whole pipeline in memory
    pub fn generate(&self, recipes: &[Recipe]) -> ShoppingList {
        let ingredients = self.collect_ingredients(recipes);

        let consolidated = if self.config.fuzzy_matching {
            consolidate_with(&ingredients, &FuzzyMatcher::new(self.config.fuzzy_threshold))
        } else {
            consolidate_with(&ingredients, &ExactMatcher)
        };

        let list = ShoppingList::from_items(consolidated);
        info!(
            recipes = recipes.len(),
            lines = ingredients.len(),
            items = list.item_count(),
            categories = list.groups().len(),
            "Generated shopping list"
        );
        list
    }

    /// Generate a list and store it under a plan id.
    ///
    /// A storage failure is logged and reported in the returned
    /// [`GenerationReport`]; it never prevents the list from being returned.
    pub async fn generate_for_plan<S: PlanStore>(
        &self,
        store: &S,
        plan_id: &str,
        recipes: &[Recipe],
    ) -> GenerationReport {
        let list = self.generate(recipes);

        let save_error = match store.save_shopping_list(plan_id, &list).await {
            Ok(()) => {
                info!(plan_id = %plan_id, "Saved shopping list to plan");
                None
            }
            Err(e) => {
                error!(plan_id = %plan_id, error = %e, "Failed to save shopping list to plan");
                Some(e)
            }
        };

        GenerationReport { list, save_error }
    }

    /// Export text using the configured grouping
    pub fn copy_text(&self, list: &ShoppingList) -> String {
        to_copy_text(list, self.config.group_by_recipe)
    }
}

/// Read a JSON array of recipes from disk
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ShoppingListError::Input(format!("failed to read {}: {}", path.display(), e))
    })?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), recipes = recipes.len(), "Loaded recipes");
    Ok(recipes)
}
