//! # Measurement Patterns Module
//!
//! This module contains the regex patterns used to split an ingredient line
//! into quantity, unit and item. Patterns are tried in the order they are
//! declared here; the first match wins.

use lazy_static::lazy_static;
use regex::Regex;

/// A quantity token: simple fraction, decimal, integer or vulgar fraction
pub const QUANTITY_PATTERN: &str = r"\d+/\d+|\d*\.\d+|\d+|[½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞]";

// "<number> <word> <rest>"; the caller checks the word against the unit vocabulary
pub const NUMBER_WORD_REST_PATTERN: &str =
    r"^(?P<qty>\d+/\d+|\d*\.\d+|\d+|[½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])\s+(?P<unit>[A-Za-z]+)\.?\s+(?P<item>.+)$";

// "<number> <explicit unit> <rest>" restricted to the common cooking units
pub const NUMBER_EXPLICIT_UNIT_PATTERN: &str = r"(?i)^(?P<qty>\d+/\d+|\d*\.\d+|\d+|[½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])\s+(?P<unit>tablespoons?|tbsp|teaspoons?|tsp|cups?|lbs?|pounds?|ounces?|oz|cloves?|slices?)\.?\s+(?P<item>.+)$";

// "<number> <rest>" with no unit
pub const NUMBER_REST_PATTERN: &str =
    r"^(?P<qty>\d+/\d+|\d*\.\d+|\d+|[½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])\s+(?P<item>.+)$";

/// Two-part fraction such as "1/2"
pub const FRACTION_PATTERN: &str = r"^(\d+)/(\d+)$";

lazy_static! {
    pub static ref NUMBER_WORD_REST_REGEX: Regex = Regex::new(NUMBER_WORD_REST_PATTERN)
        .expect("Number-word-rest pattern should be valid");
    pub static ref NUMBER_EXPLICIT_UNIT_REGEX: Regex = Regex::new(NUMBER_EXPLICIT_UNIT_PATTERN)
        .expect("Explicit unit pattern should be valid");
    pub static ref NUMBER_REST_REGEX: Regex =
        Regex::new(NUMBER_REST_PATTERN).expect("Number-rest pattern should be valid");
    pub static ref FRACTION_REGEX: Regex =
        Regex::new(FRACTION_PATTERN).expect("Fraction pattern should be valid");
}
