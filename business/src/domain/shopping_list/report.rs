//! Plain-text rendering of a [`ShoppingList`].
//!
//! ```text
//! Shopping list
//! Ingredient                      Amount    Unit
//! egg                             2         pcs
//! flour                           500       g
//! ```

use super::model::ShoppingList;

pub const TITLE: &str = "Shopping list";
pub const NAME_COLUMN_WIDTH: usize = 32;
pub const AMOUNT_COLUMN_WIDTH: usize = 10;

const NAME_HEADER: &str = "Ingredient";
const AMOUNT_HEADER: &str = "Amount";
const UNIT_HEADER: &str = "Unit";

pub fn render(list: &ShoppingList) -> String {
    let mut report = String::new();
    report.push_str(TITLE);
    report.push('\n');
    push_row(&mut report, NAME_HEADER, AMOUNT_HEADER, UNIT_HEADER);

    for line in list.lines() {
        push_row(
            &mut report,
            &line.ingredient_name,
            &line.total_amount.to_string(),
            &line.measurement_unit,
        );
    }
    report
}

fn push_row(report: &mut String, name: &str, amount: &str, unit: &str) {
    report.push_str(name);
    report.push_str(&padding(name, NAME_COLUMN_WIDTH));
    report.push_str(amount);
    report.push_str(&padding(amount, AMOUNT_COLUMN_WIDTH));
    report.push_str(unit);
    report.push('\n');
}

/// Spaces needed to fill `width`, never fewer than one.
fn padding(value: &str, width: usize) -> String {
    let used = value.chars().count();
    " ".repeat(width.saturating_sub(used).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::value_objects::IngredientLine;

    fn line(name: &str, unit: &str, amount: u32) -> IngredientLine {
        IngredientLine {
            ingredient_name: name.to_string(),
            measurement_unit: unit.to_string(),
            amount,
        }
    }

    #[test]
    fn should_render_header_only_for_empty_list() {
        let report = render(&ShoppingList::default());

        assert_eq!(
            report,
            format!(
                "Shopping list\nIngredient{}Amount{}Unit\n",
                " ".repeat(22),
                " ".repeat(4)
            )
        );
        assert_eq!(report.lines().count(), 2);
    }

    #[test]
    fn should_align_columns() {
        let list = ShoppingList::aggregate(vec![line("flour", "g", 500), line("egg", "pcs", 2)]);

        let report = render(&list);
        let rows: Vec<&str> = report.lines().skip(2).collect();

        assert_eq!(
            rows,
            vec![
                format!("egg{}2{}pcs", " ".repeat(29), " ".repeat(9)),
                format!("flour{}500{}g", " ".repeat(27), " ".repeat(7)),
            ]
        );
        for row in rows {
            assert_eq!(row.find(char::is_numeric), Some(NAME_COLUMN_WIDTH));
        }
    }

    #[test]
    fn should_keep_one_space_when_name_overflows_column() {
        let long_name = "x".repeat(NAME_COLUMN_WIDTH + 5);
        let list = ShoppingList::aggregate(vec![line(&long_name, "g", 1)]);

        let report = render(&list);
        let row = report.lines().nth(2).unwrap();

        assert!(row.starts_with(&format!("{} 1", long_name)));
    }

    #[test]
    fn should_pad_by_characters_not_bytes() {
        let list = ShoppingList::aggregate(vec![line("мука", "г", 100)]);

        let report = render(&list);
        let row = report.lines().nth(2).unwrap();

        assert_eq!(row, format!("мука{}100{}г", " ".repeat(28), " ".repeat(7)));
    }

    #[test]
    fn should_render_identically_twice() {
        let list = ShoppingList::aggregate(vec![line("sugar", "g", 50), line("egg", "pcs", 2)]);
        assert_eq!(render(&list), render(&list));
    }
}
