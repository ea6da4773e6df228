//! # Shopping List Data Model
//!
//! This module defines the data structures that flow through the shopping list
//! pipeline, from recipe input to the grouped list handed to the export and
//! persistence layers.
//!
//! ## Core Concepts
//!
//! - **Recipe**: a recipe name with its free-text ingredient lines
//! - **ParsedIngredient**: one ingredient line split into quantity, unit and item
//! - **ConsolidatedIngredient**: all mentions of one item merged across recipes
//! - **IngredientSource**: the provenance of one contributing ingredient line
//! - **ShoppingList**: consolidated items grouped by grocery category
//!
//! ## Usage
//!
//! ```rust
//! use meal_planner::ingredient_model::Recipe;
//!
//! let recipe = Recipe::new("Pancakes", vec!["2 cups flour".to_string()])
//!     .with_servings_multiplier(2.0);
//! assert_eq!(recipe.scale(), 2.0);
//! ```

use crate::categorizer::Category;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A recipe as supplied by the recipe source collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name of the recipe (scrapers emit it as `title`)
    #[serde(alias = "title")]
    pub name: String,

    /// Free-text ingredient lines, e.g. "2 cups flour"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ingredients: Vec<String>,

    /// Factor applied to every parsed quantity of this recipe
    #[serde(default = "default_multiplier")]
    pub servings_multiplier: f64,
}

fn default_multiplier() -> f64 {
    1.0
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Recipe {
    /// Create a recipe with a neutral servings multiplier
    pub fn new(name: &str, ingredients: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            ingredients,
            servings_multiplier: default_multiplier(),
        }
    }

    /// Set the servings multiplier
    pub fn with_servings_multiplier(mut self, multiplier: f64) -> Self {
        self.servings_multiplier = multiplier;
        self
    }

    /// The multiplier actually applied to quantities.
    ///
    /// Non-finite and non-positive multipliers fall back to `1.0`.
    pub fn scale(&self) -> f64 {
        if self.servings_multiplier.is_finite() && self.servings_multiplier > 0.0 {
            self.servings_multiplier
        } else {
            1.0
        }
    }
}

/// One ingredient line split into its structured parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// The verbatim input line
    pub original: String,

    /// Parsed amount, `None` when absent or unparseable
    pub quantity: Option<f64>,

    /// Lowercase unit token as written, empty when no unit was detected
    pub unit: String,

    /// Lowercase, trimmed ingredient name used as the consolidation key
    pub item: String,

    /// Name of the recipe the line came from, empty until attached
    pub recipe: String,

    /// Servings multiplier already applied to `quantity`
    pub scale: f64,
}

impl ParsedIngredient {
    /// Attach the recipe this line belongs to
    pub fn with_recipe(mut self, recipe: &str) -> Self {
        self.recipe = recipe.to_string();
        self
    }

    /// Multiply the quantity by a servings factor and remember the factor
    pub fn scaled(mut self, factor: f64) -> Self {
        self.quantity = self.quantity.map(|q| q * factor);
        self.scale = factor;
        self
    }

    /// Provenance record for this line
    pub fn to_source(&self) -> IngredientSource {
        IngredientSource {
            recipe: self.recipe.clone(),
            original: self.original.clone(),
            quantity: self.quantity,
            unit: self.unit.clone(),
            scale: self.scale,
        }
    }
}

/// Provenance of one ingredient line contributing to a consolidated entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSource {
    pub recipe: String,
    pub original: String,
    pub quantity: Option<f64>,
    pub unit: String,
    /// Servings multiplier of the source recipe
    pub scale: f64,
}

/// All mentions of one item merged into a single shopping list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedIngredient {
    /// Canonical item name (the consolidation key)
    pub item: String,

    /// Sum over the sources whose unit is compatible with `unit`
    pub quantity: Option<f64>,

    /// Canonical unit of the first source encountered
    pub unit: String,

    /// Grocery store section
    pub category: Category,

    /// Every contributing line in encounter order, never deduplicated
    pub sources: Vec<IngredientSource>,
}

impl ConsolidatedIngredient {
    /// Distinct recipe names in source order
    pub fn recipes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for source in &self.sources {
            if !names.contains(&source.recipe.as_str()) {
                names.push(&source.recipe);
            }
        }
        names
    }
}

impl fmt::Display for ConsolidatedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = crate::formatter::format_quantity(self.quantity, &self.unit);
        if amount.is_empty() {
            write!(f, "{}", self.item)
        } else {
            write!(f, "{} {}", amount, self.item)
        }
    }
}

/// Items of one grocery category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<ConsolidatedIngredient>,
}

/// Consolidated items grouped by category.
///
/// Groups follow the fixed category order, empty categories are never
/// present, and items inside a group are sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    groups: Vec<CategoryGroup>,
}

impl ShoppingList {
    /// Build a list from consolidated items, enforcing group and item order
    pub fn from_items(items: Vec<ConsolidatedIngredient>) -> Self {
        let mut groups: Vec<CategoryGroup> = Vec::new();

        for category in Category::ALL {
            let mut members: Vec<ConsolidatedIngredient> = items
                .iter()
                .filter(|item| item.category == category)
                .cloned()
                .collect();
            if members.is_empty() {
                continue;
            }
            members.sort_by(|a, b| a.item.cmp(&b.item));
            groups.push(CategoryGroup {
                category,
                items: members,
            });
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Categories present in the list, in display order
    pub fn categories(&self) -> Vec<Category> {
        self.groups.iter().map(|g| g.category).collect()
    }

    /// Items of a category, `None` when the category has no items
    pub fn get(&self, category: Category) -> Option<&[ConsolidatedIngredient]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.items.as_slice())
    }

    /// Look up an item by its consolidated name in any category
    pub fn find(&self, item: &str) -> Option<&ConsolidatedIngredient> {
        self.iter().find(|entry| entry.item == item)
    }

    /// Iterate all items in display order
    pub fn iter(&self) -> impl Iterator<Item = &ConsolidatedIngredient> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
