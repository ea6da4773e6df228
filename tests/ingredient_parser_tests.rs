#[cfg(test)]
mod tests {
    use meal_planner::ingredient_parser::{parse_ingredient_line, parse_quantity};
    use meal_planner::unit_converter::canonical_unit;

    #[test]
    fn test_number_unit_item_lines() {
        let cases = [
            ("2 cups flour", 2.0, "cups", "flour"),
            ("1 tablespoon sugar", 1.0, "tablespoon", "sugar"),
            ("3 Teaspoons baking powder", 3.0, "teaspoons", "baking powder"),
            ("1 lb ground beef", 1.0, "lb", "ground beef"),
            ("8 oz cream cheese", 8.0, "oz", "cream cheese"),
            ("2.5 cups whole milk", 2.5, "cups", "whole milk"),
            ("250 ml water", 250.0, "ml", "water"),
            ("2 slices bread", 2.0, "slices", "bread"),
        ];

        for (line, quantity, unit, item) in cases {
            let parsed = parse_ingredient_line(line);
            assert_eq!(parsed.quantity, Some(quantity), "quantity of '{line}'");
            assert_eq!(parsed.unit, unit, "unit of '{line}'");
            assert_eq!(parsed.item, item, "item of '{line}'");
        }
    }

    #[test]
    fn test_lines_without_leading_number() {
        for line in ["Salt to taste", "a pinch of nutmeg", "  Fresh Parsley  ", "eggs"] {
            let parsed = parse_ingredient_line(line);
            assert_eq!(parsed.quantity, None);
            assert_eq!(parsed.unit, "");
            assert_eq!(parsed.item, line.trim().to_lowercase());
            assert_eq!(parsed.original, line);
        }
    }

    #[test]
    fn test_count_only_lines() {
        let parsed = parse_ingredient_line("2 large eggs");
        assert_eq!(parsed.quantity, Some(2.0));
        assert_eq!(parsed.unit, "");
        assert_eq!(parsed.item, "large eggs");

        let parsed = parse_ingredient_line("6 eggs");
        assert_eq!(parsed.quantity, Some(6.0));
        assert_eq!(parsed.item, "eggs");
    }

    #[test]
    fn test_item_is_never_empty() {
        for line in ["2 cups", "3", "x", "1/2 cup sugar", "½"] {
            let parsed = parse_ingredient_line(line);
            assert!(!parsed.item.is_empty(), "empty item for '{line}'");
        }
    }

    #[test]
    fn test_quantity_formats() {
        assert_eq!(parse_quantity("1/2"), Some(0.5));
        assert_eq!(parse_quantity("3/4"), Some(0.75));
        assert_eq!(parse_quantity("0.25"), Some(0.25));
        assert_eq!(parse_quantity("⅓"), Some(1.0 / 3.0));
        assert_eq!(parse_quantity("2/0"), None);
        assert_eq!(parse_quantity("two"), None);
    }

    #[test]
    fn test_raw_unit_token_is_kept() {
        let parsed = parse_ingredient_line("2 Cups sugar");
        assert_eq!(parsed.unit, "cups");
        assert_eq!(canonical_unit(&parsed.unit), "cup");
    }
}
