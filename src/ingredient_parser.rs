//! # Ingredient Parser
//!
//! This module turns one free-text ingredient line into a [`ParsedIngredient`]
//! with a quantity, a unit token and an item name.
//!
//! ## Features
//!
//! - Quantities as integers, decimals, simple fractions (1/2) and vulgar
//!   fractions (½)
//! - Unit detection against a known unit vocabulary ("2 cups flour")
//! - Count-only lines with no unit ("4 chicken thighs")
//! - Catch-all for lines without a leading quantity ("a pinch of nutmeg")
//!
//! Parsing never fails. A line that matches no structured pattern becomes an
//! item with no quantity and no unit.
//!
//! A mixed number such as "1 1/2 cups flour" only yields the leading `1`; the
//! rest of the line is kept as the item.
//!
//! ## Usage
//!
//! ```rust
//! use meal_planner::ingredient_parser::parse_ingredient_line;
//!
//! let parsed = parse_ingredient_line("1/2 tsp salt");
//! assert_eq!(parsed.quantity, Some(0.5));
//! assert_eq!(parsed.unit, "tsp");
//! assert_eq!(parsed.item, "salt");
//! ```

use crate::ingredient_model::{ParsedIngredient, Recipe};
use crate::measurement_patterns::{
    FRACTION_REGEX, NUMBER_EXPLICIT_UNIT_REGEX, NUMBER_REST_REGEX, NUMBER_WORD_REST_REGEX,
};
use crate::unit_converter::is_known_unit;
use tracing::trace;

/// Parse a single ingredient line.
///
/// The line is expected to hold some non-whitespace text, which guarantees a
/// non-empty `item`. Use [`parse_line`] for input that may be blank.
pub fn parse_ingredient_line(line: &str) -> ParsedIngredient {
    let trimmed = line.trim();

    // "<number> <unit> <rest>", with the middle word checked against the vocabulary
    if let Some(captures) = NUMBER_WORD_REST_REGEX.captures(trimmed) {
        let unit = captures["unit"].to_lowercase();
        if is_known_unit(&unit) {
            return build(line, Some(&captures["qty"]), &unit, &captures["item"]);
        }
        trace!(line = %trimmed, word = %unit, "Middle word is not a unit");
    }

    // "<number> <explicit unit> <rest>"
    if let Some(captures) = NUMBER_EXPLICIT_UNIT_REGEX.captures(trimmed) {
        let unit = captures["unit"].to_lowercase();
        return build(line, Some(&captures["qty"]), &unit, &captures["item"]);
    }

    // "<number> <rest>"
    if let Some(captures) = NUMBER_REST_REGEX.captures(trimmed) {
        return build(line, Some(&captures["qty"]), "", &captures["item"]);
    }

    trace!(line = %trimmed, "No quantity detected, using whole line as item");
    build(line, None, "", trimmed)
}

/// Parse a line that may be blank; blank lines yield `None`
pub fn parse_line(line: &str) -> Option<ParsedIngredient> {
    if line.trim().is_empty() {
        trace!("Skipping blank ingredient line");
        return None;
    }
    Some(parse_ingredient_line(line))
}

fn build(original: &str, quantity: Option<&str>, unit: &str, item: &str) -> ParsedIngredient {
    ParsedIngredient {
        original: original.to_string(),
        quantity: quantity.and_then(parse_quantity),
        unit: unit.to_string(),
        item: item.trim().to_lowercase(),
        recipe: String::new(),
        scale: 1.0,
    }
}

/// Parse a quantity token.
///
/// Accepts decimals, two-part fractions and vulgar fractions. Returns `None`
/// for anything else, including fractions with a zero denominator.
pub fn parse_quantity(token: &str) -> Option<f64> {
    let token = token.trim();

    if let Some(captures) = FRACTION_REGEX.captures(token) {
        let numerator: f64 = captures[1].parse().ok()?;
        let denominator: f64 = captures[2].parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator);
    }

    if let Some(value) = vulgar_fraction(token) {
        return Some(value);
    }

    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn vulgar_fraction(token: &str) -> Option<f64> {
    let value = match token {
        "½" => 1.0 / 2.0,
        "⅓" => 1.0 / 3.0,
        "⅔" => 2.0 / 3.0,
        "¼" => 1.0 / 4.0,
        "¾" => 3.0 / 4.0,
        "⅕" => 1.0 / 5.0,
        "⅖" => 2.0 / 5.0,
        "⅗" => 3.0 / 5.0,
        "⅘" => 4.0 / 5.0,
        "⅙" => 1.0 / 6.0,
        "⅚" => 5.0 / 6.0,
        "⅛" => 1.0 / 8.0,
        "⅜" => 3.0 / 8.0,
        "⅝" => 5.0 / 8.0,
        "⅞" => 7.0 / 8.0,
        _ => return None,
    };
    Some(value)
}

/// Parse every non-blank ingredient line of a recipe.
///
/// Each record carries the recipe name, and its quantity is scaled by the
/// recipe's servings multiplier.
pub fn parse_recipe(recipe: &Recipe) -> Vec<ParsedIngredient> {
    let scale = recipe.scale();
    recipe
        .ingredients
        .iter()
        .filter_map(|line| parse_line(line))
        .map(|parsed| parsed.with_recipe(&recipe.name).scaled(scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_ingredient() {
        let result = parse_ingredient_line("2 cups flour");
        assert_eq!(result.quantity, Some(2.0));
        assert_eq!(result.unit, "cups");
        assert_eq!(result.item, "flour");
        assert_eq!(result.original, "2 cups flour");
    }

    #[test]
    fn test_parse_fraction_ingredient() {
        let result = parse_ingredient_line("1/2 tsp salt");
        assert_eq!(result.quantity, Some(0.5));
        assert_eq!(result.unit, "tsp");
        assert_eq!(result.item, "salt");
    }

    #[test]
    fn test_parse_count_only() {
        let result = parse_ingredient_line("4 chicken thighs");
        assert_eq!(result.quantity, Some(4.0));
        assert_eq!(result.unit, "");
        assert_eq!(result.item, "chicken thighs");
    }

    #[test]
    fn test_parse_no_quantity() {
        let result = parse_ingredient_line("A pinch of Nutmeg");
        assert_eq!(result.quantity, None);
        assert_eq!(result.unit, "");
        assert_eq!(result.item, "a pinch of nutmeg");
        assert_eq!(result.original, "A pinch of Nutmeg");
    }

    #[test]
    fn test_parse_mixed_number_keeps_leading_digit() {
        let result = parse_ingredient_line("1 1/2 cups flour");
        assert_eq!(result.quantity, Some(1.0));
        assert_eq!(result.unit, "");
        assert_eq!(result.item, "1/2 cups flour");
    }

    #[test]
    fn test_parse_unit_case_and_period() {
        let result = parse_ingredient_line("2 Tbsp. Olive Oil");
        assert_eq!(result.quantity, Some(2.0));
        assert_eq!(result.unit, "tbsp");
        assert_eq!(result.item, "olive oil");
    }

    #[test]
    fn test_parse_vulgar_fraction() {
        let result = parse_ingredient_line("½ cup sugar");
        assert_eq!(result.quantity, Some(0.5));
        assert_eq!(result.unit, "cup");
        assert_eq!(result.item, "sugar");
    }

    #[test]
    fn test_parse_zero_denominator() {
        let result = parse_ingredient_line("1/0 cup milk");
        assert_eq!(result.quantity, None);
        assert_eq!(result.unit, "cup");
        assert_eq!(result.item, "milk");
    }

    #[test]
    fn test_parse_line_skips_blank_input() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("\t\n"), None);

        let parsed = parse_line(" 2 eggs").unwrap();
        assert_eq!(parsed.item, "eggs");
        assert_eq!(parsed.original, " 2 eggs");
    }

    #[test]
    fn test_quantity_parsing() {
        assert_eq!(parse_quantity("2.5"), Some(2.5));
        assert_eq!(parse_quantity(".5"), Some(0.5));
        assert_eq!(parse_quantity("3/4"), Some(0.75));
        assert_eq!(parse_quantity("¼"), Some(0.25));
        assert_eq!(parse_quantity("some"), None);
        assert_eq!(parse_quantity(""), None);
    }

    #[test]
    fn test_parse_recipe_attaches_name_and_scale() {
        let recipe = Recipe::new(
            "Pancakes",
            vec!["2 cups flour".to_string(), "  ".to_string(), "salt".to_string()],
        )
        .with_servings_multiplier(1.5);

        let parsed = parse_recipe(&recipe);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].recipe, "Pancakes");
        assert_eq!(parsed[0].quantity, Some(3.0));
        assert_eq!(parsed[0].scale, 1.5);
        assert_eq!(parsed[1].quantity, None);
    }
}
