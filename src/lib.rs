//! # Meal Planner Shopping Lists
//!
//! Turns the ingredient lines of planned recipes into a consolidated shopping
//! list: lines are parsed into quantity, unit and item, pantry staples can be
//! dropped, matching items are merged across recipes with unit conversion,
//! and the result is grouped by grocery category for display or export.

pub mod categorizer;
pub mod config;
pub mod consolidator;
pub mod db;
pub mod duplicate_detector;
pub mod errors;
pub mod formatter;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod measurement_patterns;
pub mod pantry;
pub mod plan_store;
pub mod shopping_list;
pub mod taxonomy;
pub mod unit_converter;
