use std::collections::BTreeMap;

use crate::domain::recipe::value_objects::IngredientLine;

/// Total amount of one ingredient in one unit across every recipe in a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedLine {
    pub ingredient_name: String,
    pub measurement_unit: String,
    pub total_amount: u64,
}

/// Aggregated shopping list, ordered by ingredient name then unit.
///
/// Ordering is byte-wise and case-sensitive, so `"Zucchini"` sorts before
/// `"apple"`. No unit conversion happens: `milk/ml` and `milk/cup` are two rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    lines: Vec<AggregatedLine>,
}

impl ShoppingList {
    pub fn aggregate<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = IngredientLine>,
    {
        let mut totals: BTreeMap<(String, String), u64> = BTreeMap::new();
        for line in lines {
            *totals
                .entry((line.ingredient_name, line.measurement_unit))
                .or_default() += u64::from(line.amount);
        }

        let lines = totals
            .into_iter()
            .map(
                |((ingredient_name, measurement_unit), total_amount)| AggregatedLine {
                    ingredient_name,
                    measurement_unit,
                    total_amount,
                },
            )
            .collect();

        Self { lines }
    }

    pub fn lines(&self) -> &[AggregatedLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_amount(&self) -> u64 {
        self.lines.iter().map(|line| line.total_amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn line(name: &str, unit: &str, amount: u32) -> IngredientLine {
        IngredientLine {
            ingredient_name: name.to_string(),
            measurement_unit: unit.to_string(),
            amount,
        }
    }

    fn row(name: &str, unit: &str, total_amount: u64) -> AggregatedLine {
        AggregatedLine {
            ingredient_name: name.to_string(),
            measurement_unit: unit.to_string(),
            total_amount,
        }
    }

    #[test]
    fn should_merge_lines_from_two_recipes() {
        let recipe_a = vec![line("flour", "g", 200), line("sugar", "g", 50)];
        let recipe_b = vec![line("flour", "g", 300), line("egg", "pcs", 2)];

        let list = ShoppingList::aggregate(recipe_a.into_iter().chain(recipe_b));

        assert_eq!(
            list.lines(),
            &[
                row("egg", "pcs", 2),
                row("flour", "g", 500),
                row("sugar", "g", 50),
            ]
        );
    }

    #[test]
    fn should_keep_same_name_with_different_units_apart() {
        let list = ShoppingList::aggregate(vec![
            line("milk", "ml", 250),
            line("milk", "cup", 1),
            line("milk", "ml", 250),
        ]);

        assert_eq!(
            list.lines(),
            &[row("milk", "cup", 1), row("milk", "ml", 500)]
        );
    }

    #[test]
    fn should_sort_case_sensitively() {
        let list = ShoppingList::aggregate(vec![
            line("apple", "pcs", 1),
            line("Zucchini", "pcs", 1),
            line("banana", "pcs", 1),
        ]);

        let names: Vec<&str> = list
            .lines()
            .iter()
            .map(|l| l.ingredient_name.as_str())
            .collect();
        assert_eq!(names, vec!["Zucchini", "apple", "banana"]);
    }

    #[test]
    fn should_be_empty_without_lines() {
        let list = ShoppingList::aggregate(Vec::new());
        assert!(list.is_empty());
        assert_eq!(list.total_amount(), 0);
    }

    #[test]
    fn should_not_overflow_on_large_totals() {
        let list = ShoppingList::aggregate(vec![line("rice", "g", u32::MAX); 3]);
        assert_eq!(list.total_amount(), 3 * u64::from(u32::MAX));
    }

    fn arb_line() -> impl Strategy<Value = IngredientLine> {
        (
            prop::sample::select(vec!["flour", "Flour", "sugar", "egg", "milk"]),
            prop::sample::select(vec!["g", "kg", "pcs", "ml"]),
            1u32..=10_000,
        )
            .prop_map(|(name, unit, amount)| line(name, unit, amount))
    }

    proptest! {
        #[test]
        fn prop_total_is_conserved(lines in prop::collection::vec(arb_line(), 0..64)) {
            let expected: u64 = lines.iter().map(|l| u64::from(l.amount)).sum();
            let list = ShoppingList::aggregate(lines);
            prop_assert_eq!(list.total_amount(), expected);
        }

        #[test]
        fn prop_each_key_appears_once(lines in prop::collection::vec(arb_line(), 0..64)) {
            let distinct: std::collections::HashSet<(String, String)> = lines
                .iter()
                .map(|l| (l.ingredient_name.clone(), l.measurement_unit.clone()))
                .collect();
            let list = ShoppingList::aggregate(lines);
            prop_assert_eq!(list.lines().len(), distinct.len());
        }

        #[test]
        fn prop_input_order_does_not_matter(lines in prop::collection::vec(arb_line(), 0..32)) {
            let mut reversed = lines.clone();
            reversed.reverse();
            prop_assert_eq!(ShoppingList::aggregate(lines), ShoppingList::aggregate(reversed));
        }
    }
}
