//! # Shopping List Formatting
//!
//! Renders quantities as cooking-friendly strings and turns a
//! [`ShoppingList`] into plain text for clipboard export.
//!
//! ```rust
//! use meal_planner::formatter::format_quantity;
//!
//! assert_eq!(format_quantity(Some(0.5), "cup"), "1/2 cup");
//! assert_eq!(format_quantity(Some(1.5), "cup"), "1 1/2 cup");
//! assert_eq!(format_quantity(Some(2.0), "oz"), "2 oz");
//! assert_eq!(format_quantity(None, "cup"), "");
//! ```

use crate::ingredient_model::ShoppingList;

/// Tolerance when matching a decimal against the fraction table
const FRACTION_EPSILON: f64 = 0.01;

/// Common cooking fractions and their decimal approximations
const FRACTIONS: &[(f64, &str)] = &[
    (0.25, "1/4"),
    (0.33, "1/3"),
    (0.5, "1/2"),
    (0.67, "2/3"),
    (0.75, "3/4"),
];

fn fraction_for(value: f64) -> Option<&'static str> {
    FRACTIONS
        .iter()
        .find(|(decimal, _)| (value - decimal).abs() < FRACTION_EPSILON)
        .map(|(_, text)| *text)
}

/// Render a quantity without its unit.
///
/// Returns an empty string for missing or zero quantities.
pub fn format_amount(quantity: Option<f64>) -> String {
    let quantity = match quantity {
        Some(q) if q != 0.0 && q.is_finite() => q,
        _ => return String::new(),
    };

    if let Some(fraction) = fraction_for(quantity) {
        return fraction.to_string();
    }

    let whole = quantity.trunc();
    let remainder = quantity - whole;
    if whole != 0.0 {
        if remainder.abs() < FRACTION_EPSILON {
            return format!("{}", whole);
        }
        if let Some(fraction) = fraction_for(remainder) {
            return format!("{} {}", whole, fraction);
        }
    }

    let rounded = (quantity * 100.0).round() / 100.0;
    format!("{}", rounded)
}

/// Render a quantity with its unit, e.g. "1 1/2 cup" or "1.33 cup"
pub fn format_quantity(quantity: Option<f64>, unit: &str) -> String {
    let amount = format_amount(quantity);
    if amount.is_empty() || unit.is_empty() {
        return amount;
    }
    format!("{} {}", amount, unit)
}

/// Build the plain-text export of a shopping list.
///
/// By category, each item line reads `- <quantity> <item> (<originals>)`.
/// By recipe, every source line is listed verbatim under its recipe.
pub fn to_copy_text(list: &ShoppingList, group_by_recipe: bool) -> String {
    let sections = if group_by_recipe {
        recipe_sections(list)
    } else {
        category_sections(list)
    };

    sections
        .iter()
        .map(|(header, lines)| {
            let mut block = format!("{}:", header);
            for line in lines {
                block.push_str("\n- ");
                block.push_str(line);
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn category_sections(list: &ShoppingList) -> Vec<(String, Vec<String>)> {
    list.groups()
        .iter()
        .map(|group| {
            let lines = group
                .items
                .iter()
                .map(|item| {
                    let originals: Vec<&str> =
                        item.sources.iter().map(|s| s.original.as_str()).collect();
                    let amount = format_quantity(item.quantity, &item.unit);
                    let label = if amount.is_empty() {
                        item.item.clone()
                    } else {
                        format!("{} {}", amount, item.item)
                    };
                    format!("{} ({})", label, originals.join(", "))
                })
                .collect();
            (group.category.to_string(), lines)
        })
        .collect()
}

fn recipe_sections(list: &ShoppingList) -> Vec<(String, Vec<String>)> {
    let mut sections: Vec<(String, Vec<String>)> = Vec::new();

    for source in list.iter().flat_map(|item| item.sources.iter()) {
        let line = source.original.clone();
        match sections.iter_mut().find(|(recipe, _)| *recipe == source.recipe) {
            Some((_, lines)) => lines.push(line),
            None => sections.push((source.recipe.clone(), vec![line])),
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consolidator::consolidate;
    use crate::ingredient_parser::parse_ingredient_line;

    fn sample_list() -> ShoppingList {
        let parsed = vec![
            parse_ingredient_line("2 cups flour").with_recipe("Bread"),
            parse_ingredient_line("3 tomatoes").with_recipe("Salad"),
            parse_ingredient_line("1 cup flour").with_recipe("Cake"),
        ];
        ShoppingList::from_items(consolidate(&parsed))
    }

    #[test]
    fn test_format_null_and_zero() {
        assert_eq!(format_quantity(None, "cup"), "");
        assert_eq!(format_quantity(Some(0.0), "cup"), "");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_quantity(Some(0.25), "tsp"), "1/4 tsp");
        assert_eq!(format_quantity(Some(1.0 / 3.0), "cup"), "1/3 cup");
        assert_eq!(format_quantity(Some(2.0 / 3.0), "cup"), "2/3 cup");
        assert_eq!(format_quantity(Some(0.75), "cup"), "3/4 cup");
        assert_eq!(format_quantity(Some(2.75), "lb"), "2 3/4 lb");
    }

    #[test]
    fn test_format_whole_and_decimal() {
        assert_eq!(format_quantity(Some(2.0), "oz"), "2 oz");
        assert_eq!(format_quantity(Some(3.0), ""), "3");
        assert_eq!(format_quantity(Some(1.0 + 1.0 / 3.0), "cup"), "1 1/3 cup");
        assert_eq!(format_quantity(Some(1.1), "cup"), "1.1 cup");
        assert_eq!(format_quantity(Some(0.125), "cup"), "0.13 cup");
    }

    #[test]
    fn test_copy_text_by_category() {
        let text = to_copy_text(&sample_list(), false);
        assert_eq!(
            text,
            "Produce:\n- 3 tomatoes (3 tomatoes)\n\n\
             Pantry & Dry Goods:\n- 3 cup flour (2 cups flour, 1 cup flour)"
        );
    }

    #[test]
    fn test_copy_text_by_recipe() {
        let text = to_copy_text(&sample_list(), true);
        assert_eq!(
            text,
            "Salad:\n- 3 tomatoes\n\nBread:\n- 2 cups flour\n\nCake:\n- 1 cup flour"
        );
    }

    #[test]
    fn test_copy_text_by_recipe_keeps_original_text() {
        let parsed = vec![parse_ingredient_line("  2 Large Eggs ").with_recipe("Omelette")];
        let list = ShoppingList::from_items(consolidate(&parsed));
        assert_eq!(to_copy_text(&list, true), "Omelette:\n-   2 Large Eggs ");
    }

    #[test]
    fn test_copy_text_empty_list() {
        assert_eq!(to_copy_text(&ShoppingList::default(), false), "");
        assert_eq!(to_copy_text(&ShoppingList::default(), true), "");
    }
}
