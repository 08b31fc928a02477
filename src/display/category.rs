//! Category display formatting

use super::render_table;
use crate::models::Category;

/// Format categories as a table with a capitalized type column
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    render_table(
        &["ID", "NAME", "TYPE", "COUNT"],
        categories.iter().map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                c.type_label(),
                c.count.to_string(),
            ]
        }),
    )
}

pub fn format_category_details(category: &Category) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:    {}\n", category.id));
    output.push_str(&format!("Name:  {}\n", category.name));
    output.push_str(&format!("Type:  {}\n", category.type_label()));
    output.push_str(&format!("Count: {}\n", category.count));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_category(id: u64, name: &str, kind: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            category_type: kind.to_string(),
            count: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_format_category_list() {
        let categories = vec![
            create_test_category(1, "Sales", "income"),
            create_test_category(2, "Rent", "expense"),
        ];

        let output = format_category_list(&categories);
        assert!(output.contains("TYPE"));
        assert!(output.contains("Income"));
        assert!(output.contains("Expense"));
        assert!(output.contains("Rent"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_category_list(&[]).contains("No categories found"));
    }

    #[test]
    fn test_format_category_details() {
        let output = format_category_details(&create_test_category(9, "Travel", "expense"));
        assert!(output.contains("ID:    9"));
        assert!(output.contains("Type:  Expense"));
        assert!(output.contains("Count: 4"));
    }
}
