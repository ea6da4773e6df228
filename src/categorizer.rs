//! Ingredient categorization for shopping list grouping.
//!
//! Maps ingredient names to grocery store sections by keyword containment.
//! Categories are checked in display order, so an item matching keywords of
//! several categories lands in the first one ("frozen chicken" is meat).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grocery store section, declared in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Produce")]
    Produce,
    #[serde(rename = "Meat & Seafood")]
    MeatSeafood,
    #[serde(rename = "Dairy & Eggs")]
    Dairy,
    #[serde(rename = "Pantry & Dry Goods")]
    Pantry,
    #[serde(rename = "Canned & Jarred")]
    Canned,
    #[serde(rename = "Frozen")]
    Frozen,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Category; 7] = [
        Category::Produce,
        Category::MeatSeafood,
        Category::Dairy,
        Category::Pantry,
        Category::Canned,
        Category::Frozen,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::MeatSeafood => "Meat & Seafood",
            Category::Dairy => "Dairy & Eggs",
            Category::Pantry => "Pantry & Dry Goods",
            Category::Canned => "Canned & Jarred",
            Category::Frozen => "Frozen",
            Category::Other => "Other",
        }
    }

    /// Parse a display name back into a category
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Keywords matched against lowercase item names. `Other` has none.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Produce => PRODUCE,
            Category::MeatSeafood => MEAT_SEAFOOD,
            Category::Dairy => DAIRY_EGGS,
            Category::Pantry => PANTRY_DRY_GOODS,
            Category::Canned => CANNED_JARRED,
            Category::Frozen => FROZEN,
            Category::Other => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const PRODUCE: &[&str] = &[
    "apple", "banana", "lemon", "lime", "orange", "tomato", "potato", "onion", "garlic",
    "carrot", "celery", "lettuce", "spinach", "kale", "broccoli", "cauliflower", "cucumber",
    "zucchini", "squash", "bell pepper", "jalapeno", "mushroom", "avocado", "cilantro",
    "parsley", "basil", "mint", "ginger", "scallion", "green onion", "shallot", "cabbage",
    "berries", "strawberr", "blueberr", "raspberr", "grape", "mango", "pineapple", "peach",
    "pear", "sweet corn", "green bean", "asparagus", "eggplant", "beet", "radish", "leek",
    "arugula", "fresh herb", "fruit", "vegetable",
];

const MEAT_SEAFOOD: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "turkey", "bacon", "sausage", "ham", "steak",
    "ground meat", "veal", "duck", "salmon", "tuna", "shrimp", "fish", "cod", "tilapia",
    "crab", "lobster", "scallop", "prosciutto", "chorizo", "salami", "anchov",
];

const DAIRY_EGGS: &[&str] = &[
    "milk", "cheese", "butter", "cream", "yogurt", "egg", "parmesan", "mozzarella",
    "cheddar", "ricotta", "feta", "half and half", "buttermilk", "ghee",
];

const PANTRY_DRY_GOODS: &[&str] = &[
    "flour", "sugar", "salt", "pepper", "rice", "pasta", "spaghetti", "noodle", "oats",
    "oil", "vinegar", "baking powder", "baking soda", "yeast", "cornstarch", "honey",
    "syrup", "vanilla", "cinnamon", "cumin", "paprika", "oregano", "thyme", "spice",
    "breadcrumb", "bread crumb", "quinoa", "lentil", "cereal", "almond", "walnut", "pecan",
    "soy sauce", "cocoa", "chocolate", "broth", "stock",
];

const CANNED_JARRED: &[&str] = &[
    "canned", "can of", "jar", "marinara", "beans", "chickpea", "olives", "pickle",
    "salsa", "jam", "pesto", "mustard", "ketchup", "mayonnaise",
];

const FROZEN: &[&str] = &["frozen", "sorbet", "gelato", "popsicle"];

/// Categorize an ingredient by name.
///
/// Returns the first category whose keyword list has a keyword contained in
/// the lowercased item, or `Other` when nothing matches.
pub fn categorize(item: &str) -> Category {
    let lower = item.to_lowercase();

    Category::ALL
        .into_iter()
        .filter(|category| *category != Category::Other)
        .find(|category| category.keywords().iter().any(|kw| lower.contains(kw)))
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produce() {
        assert_eq!(categorize("tomatoes"), Category::Produce);
        assert_eq!(categorize("Fresh Basil"), Category::Produce);
        assert_eq!(categorize("red bell pepper"), Category::Produce);
    }

    #[test]
    fn test_meat_and_dairy() {
        assert_eq!(categorize("chicken thighs"), Category::MeatSeafood);
        assert_eq!(categorize("butter"), Category::Dairy);
        assert_eq!(categorize("eggs"), Category::Dairy);
    }

    #[test]
    fn test_pantry() {
        assert_eq!(categorize("flour"), Category::Pantry);
        assert_eq!(categorize("salt"), Category::Pantry);
        assert_eq!(categorize("olive oil"), Category::Pantry);
    }

    #[test]
    fn test_category_priority() {
        // Meat is checked before Frozen
        assert_eq!(categorize("frozen chicken"), Category::MeatSeafood);
        assert_eq!(categorize("frozen peas"), Category::Frozen);
        // Produce is checked before Dairy, so eggplant is not an egg
        assert_eq!(categorize("eggplant"), Category::Produce);
    }

    #[test]
    fn test_every_keyword_reaches_its_category() {
        for category in Category::ALL {
            for keyword in category.keywords() {
                assert_eq!(
                    categorize(keyword),
                    category,
                    "keyword '{keyword}' is shadowed by an earlier category"
                );
            }
        }
    }

    #[test]
    fn test_unknown() {
        assert_eq!(categorize("xyzfoobar123"), Category::Other);
        assert_eq!(categorize(""), Category::Other);
    }

    #[test]
    fn test_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("Bakery"), None);
        assert!(Category::Other.keywords().is_empty());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Category::MeatSeafood).unwrap();
        assert_eq!(json, "\"Meat & Seafood\"");
    }
}
