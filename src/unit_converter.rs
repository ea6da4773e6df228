//! # Unit Converter Module
//!
//! This module classifies unit tokens into compatibility families and converts
//! quantities between units of the same family.
//!
//! ## Families
//!
//! - **Volume**: teaspoon, tablespoon, cup, ml, liter (factors relative to
//!   one cup)
//! - **Weight**: ounce, pound (factors relative to one ounce)
//! - **Count**: no unit, piece, clove, slice (summed without conversion)
//!
//! Every other unit (grams, pints, cans, ...) belongs to no family and is only
//! compatible with its own spelling variants.
//!
//! Conversion never fails: an unknown pair passes the quantity through.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Milliliters in one US cup
const ML_PER_CUP: f64 = 236.588;

lazy_static! {
    /// Unit spellings and their canonical token
    static ref UNIT_ALIASES: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();

        // Volume units
        map.insert("tsp", "tsp");
        map.insert("teaspoon", "tsp");
        map.insert("teaspoons", "tsp");
        map.insert("tbsp", "tbsp");
        map.insert("tbs", "tbsp");
        map.insert("tablespoon", "tbsp");
        map.insert("tablespoons", "tbsp");
        map.insert("cup", "cup");
        map.insert("cups", "cup");
        map.insert("pint", "pint");
        map.insert("pints", "pint");
        map.insert("quart", "quart");
        map.insert("quarts", "quart");
        map.insert("gallon", "gallon");
        map.insert("gallons", "gallon");
        map.insert("ml", "ml");
        map.insert("milliliter", "ml");
        map.insert("milliliters", "ml");
        map.insert("millilitre", "ml");
        map.insert("millilitres", "ml");
        map.insert("l", "liter");
        map.insert("liter", "liter");
        map.insert("liters", "liter");
        map.insert("litre", "liter");
        map.insert("litres", "liter");

        // Weight units
        map.insert("oz", "oz");
        map.insert("ounce", "oz");
        map.insert("ounces", "oz");
        map.insert("lb", "lb");
        map.insert("lbs", "lb");
        map.insert("pound", "lb");
        map.insert("pounds", "lb");
        map.insert("g", "g");
        map.insert("gram", "g");
        map.insert("grams", "g");
        map.insert("kg", "kg");
        map.insert("kilogram", "kg");
        map.insert("kilograms", "kg");
        map.insert("mg", "mg");

        // Count units
        map.insert("piece", "piece");
        map.insert("pieces", "piece");
        map.insert("clove", "clove");
        map.insert("cloves", "clove");
        map.insert("slice", "slice");
        map.insert("slices", "slice");

        // Package and specialized units
        map.insert("can", "can");
        map.insert("cans", "can");
        map.insert("jar", "jar");
        map.insert("jars", "jar");
        map.insert("bottle", "bottle");
        map.insert("bottles", "bottle");
        map.insert("box", "box");
        map.insert("boxes", "box");
        map.insert("bag", "bag");
        map.insert("bags", "bag");
        map.insert("package", "package");
        map.insert("packages", "package");
        map.insert("pkg", "package");
        map.insert("packet", "packet");
        map.insert("packets", "packet");
        map.insert("stick", "stick");
        map.insert("sticks", "stick");
        map.insert("bunch", "bunch");
        map.insert("bunches", "bunch");
        map.insert("head", "head");
        map.insert("heads", "head");
        map.insert("sprig", "sprig");
        map.insert("sprigs", "sprig");
        map.insert("handful", "handful");
        map.insert("handfuls", "handful");
        map.insert("pinch", "pinch");
        map.insert("pinches", "pinch");
        map.insert("dash", "dash");
        map.insert("dashes", "dash");
        map.insert("drop", "drop");
        map.insert("drops", "drop");
        map.insert("cube", "cube");
        map.insert("cubes", "cube");

        map
    };
}

/// Compatibility family of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitFamily {
    Volume,
    Weight,
    Count,
}

/// Whether a token belongs to the recognized unit vocabulary
pub fn is_known_unit(token: &str) -> bool {
    UNIT_ALIASES.contains_key(token.trim().to_lowercase().as_str())
}

/// Canonical spelling of a unit token.
///
/// Unrecognized tokens come back lowercased and trimmed.
pub fn canonical_unit(token: &str) -> String {
    let lower = token.trim().trim_end_matches('.').to_lowercase();
    match UNIT_ALIASES.get(lower.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => lower,
    }
}

/// Family of a unit, `None` for units outside the three families
pub fn classify(unit: &str) -> Option<UnitFamily> {
    match canonical_unit(unit).as_str() {
        "tsp" | "tbsp" | "cup" | "ml" | "liter" => Some(UnitFamily::Volume),
        "oz" | "lb" => Some(UnitFamily::Weight),
        "" | "piece" | "clove" | "slice" => Some(UnitFamily::Count),
        _ => None,
    }
}

/// Factor to the family base unit (cup for volume, ounce for weight)
fn conversion_factor(unit: &str) -> Option<f64> {
    let factor = match canonical_unit(unit).as_str() {
        "tsp" => 1.0 / 48.0,
        "tbsp" => 1.0 / 16.0,
        "cup" => 1.0,
        "ml" => 1.0 / ML_PER_CUP,
        "liter" => 1000.0 / ML_PER_CUP,
        "oz" => 1.0,
        "lb" => 16.0,
        _ => return None,
    };
    Some(factor)
}

/// Two units are compatible when they share a family or are the same unit
pub fn are_compatible(unit_a: &str, unit_b: &str) -> bool {
    if canonical_unit(unit_a) == canonical_unit(unit_b) {
        return true;
    }
    match (classify(unit_a), classify(unit_b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Convert when both units have a factor in the same family.
///
/// Identical units convert to themselves; any other pair without factors
/// yields `None`.
pub fn try_convert(quantity: f64, from_unit: &str, to_unit: &str) -> Option<f64> {
    if canonical_unit(from_unit) == canonical_unit(to_unit) {
        return Some(quantity);
    }
    if classify(from_unit) != classify(to_unit) {
        return None;
    }
    let from = conversion_factor(from_unit)?;
    let to = conversion_factor(to_unit)?;
    Some(quantity * from / to)
}

/// Convert a quantity, passing it through unchanged when no conversion exists
pub fn convert(quantity: f64, from_unit: &str, to_unit: &str) -> f64 {
    try_convert(quantity, from_unit, to_unit).unwrap_or(quantity)
}
