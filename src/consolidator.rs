//! # Ingredient Consolidation
//!
//! Merges parsed ingredient lines that name the same item into one
//! [`ConsolidatedIngredient`]. The first line seen for an item fixes the
//! entry's unit; later lines with a compatible unit are converted into it and
//! added to the running total. Lines with an incompatible unit only add a
//! source record.

use crate::categorizer::categorize;
use crate::duplicate_detector::{ExactMatcher, ItemMatcher};
use crate::ingredient_model::{ConsolidatedIngredient, ParsedIngredient};
use crate::unit_converter::{are_compatible, canonical_unit, convert};
use std::collections::HashMap;
use tracing::debug;

/// Consolidate by exact item name
pub fn consolidate(parsed: &[ParsedIngredient]) -> Vec<ConsolidatedIngredient> {
    consolidate_with(parsed, &ExactMatcher)
}

/// Consolidate using a custom item matcher.
///
/// Entries are returned in the order their first line was encountered.
pub fn consolidate_with<M: ItemMatcher + ?Sized>(
    parsed: &[ParsedIngredient],
    matcher: &M,
) -> Vec<ConsolidatedIngredient> {
    let mut entries: Vec<ConsolidatedIngredient> = Vec::new();
    // Entry names in entry order, plus an index keyed by name
    let mut names: Vec<String> = Vec::new();
    let mut by_item: HashMap<String, usize> = HashMap::new();

    for ingredient in parsed {
        let existing = match by_item.get(&ingredient.item) {
            Some(&index) => Some(index),
            None if matcher.exact_only() => None,
            None => matcher.find_match(&ingredient.item, &names),
        };

        match existing {
            Some(index) => merge_into(&mut entries[index], ingredient),
            None => {
                by_item.insert(ingredient.item.clone(), entries.len());
                names.push(ingredient.item.clone());
                entries.push(ConsolidatedIngredient {
                    item: ingredient.item.clone(),
                    quantity: ingredient.quantity,
                    unit: canonical_unit(&ingredient.unit),
                    category: categorize(&ingredient.item),
                    sources: vec![ingredient.to_source()],
                });
            }
        }
    }

    entries
}

fn merge_into(entry: &mut ConsolidatedIngredient, ingredient: &ParsedIngredient) {
    entry.sources.push(ingredient.to_source());

    if !are_compatible(&entry.unit, &ingredient.unit) {
        debug!(
            item = %entry.item,
            unit = %entry.unit,
            incoming_unit = %ingredient.unit,
            "Incompatible units, keeping quantity unchanged"
        );
        return;
    }

    let incoming = ingredient
        .quantity
        .map(|q| convert(q, &ingredient.unit, &entry.unit));

    entry.quantity = match (entry.quantity, incoming) {
        (Some(total), Some(add)) => Some(total + add),
        (None, Some(add)) => Some(add),
        (total, None) => total,
    };
}
