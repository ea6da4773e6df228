//! Pantry staple detection.
//!
//! Staples are ingredients assumed to be on hand already. When a shopping
//! list is generated with pantry exclusion, matching lines are dropped before
//! consolidation and leave no trace in the output.

/// Common household staples
pub const PANTRY_STAPLES: &[&str] = &[
    "salt",
    "pepper",
    "black pepper",
    "kosher salt",
    "sea salt",
    "olive oil",
    "vegetable oil",
    "canola oil",
    "cooking oil",
    "cooking spray",
    "oil",
    "sugar",
    "brown sugar",
    "baking powder",
    "baking soda",
    "vanilla",
    "vanilla extract",
    "water",
];

/// Whether an item is a pantry staple.
///
/// Containment is checked both ways: "extra virgin olive oil" matches the
/// staple "olive oil", and "oil" matches it as well.
pub fn is_pantry_item(item: &str) -> bool {
    let lower = item.trim().to_lowercase();
    if lower.is_empty() {
        return false;
    }

    PANTRY_STAPLES
        .iter()
        .any(|staple| lower.contains(staple) || staple.contains(lower.as_str()))
}
