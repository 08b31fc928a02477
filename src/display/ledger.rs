//! Ledger display formatting
//!
//! Formats ledger entries and the ledger summary for terminal output.

use super::{format_amount, indent, render_table};
use crate::models::{Ledger, LedgerSummary};

/// Format a page of ledger entries as a table
pub fn format_ledger_list(entries: &[Ledger]) -> String {
    if entries.is_empty() {
        return "No ledger entries found.".to_string();
    }

    render_table(
        &["ID", "DATE", "AMOUNT", "CONTACT", "CATEGORY", "NOTE"],
        entries.iter().map(|l| {
            vec![
                l.id.to_string(),
                l.date.clone(),
                format_amount(l.amount),
                l.contact.name.clone(),
                l.category.name.clone(),
                l.note.clone(),
            ]
        }),
    )
}

/// Format a single entry with its labels and attachment count
pub fn format_ledger_details(entry: &Ledger) -> String {
    let mut output = String::new();

    output.push_str(&format!("ID:        {}\n", entry.id));
    output.push_str(&format!("Date:      {}\n", entry.date));
    output.push_str(&format!("Amount:    {}\n", format_amount(entry.amount)));
    output.push_str(&format!("Contact:   {}\n", entry.contact.name));
    output.push_str(&format!("Category:  {}\n", entry.category.name));
    if !entry.note.is_empty() {
        output.push_str(&format!("Note:      {}\n", entry.note));
    }
    if !entry.labels.is_empty() {
        output.push_str(&format!("Labels:    {}\n", entry.label_names()));
    }
    if !entry.files.is_empty() {
        output.push_str(&format!("Files:     {} attached\n", entry.files.len()));
    }

    output
}

/// Format entry counts by year, category and label; empty groups are left out
pub fn format_ledger_summary(summary: &LedgerSummary) -> String {
    let mut sections = Vec::new();

    if !summary.years.is_empty() {
        let table = render_table(
            &["YEAR", "COUNT"],
            summary
                .years
                .iter()
                .map(|y| vec![y.year.to_string(), y.count.to_string()]),
        );
        sections.push(format!("Years:\n{}", indent(&table, "  ")));
    }

    for (title, items) in [
        ("Categories:", &summary.categories),
        ("Labels:", &summary.labels),
    ] {
        if items.is_empty() {
            continue;
        }
        let table = render_table(
            &["NAME", "COUNT"],
            items
                .iter()
                .map(|i| vec![i.name.clone(), i.count.to_string()]),
        );
        sections.push(format!("{}\n{}", title, indent(&table, "  ")));
    }

    if sections.is_empty() {
        return "No ledger entries found.".to_string();
    }
    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Contact, Label, LedgerSummaryItem, LedgerSummaryYear};

    fn create_test_entry() -> Ledger {
        Ledger {
            id: 101,
            date: "2026-01-15".to_string(),
            amount: -45.5,
            contact: Contact {
                name: "Office Depot".to_string(),
                ..Default::default()
            },
            category: Category {
                name: "Supplies".to_string(),
                ..Default::default()
            },
            note: "printer paper".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_ledger_list() {
        let output = format_ledger_list(&[create_test_entry()]);

        let header = output.lines().next().unwrap();
        for column in ["ID", "DATE", "AMOUNT", "CONTACT", "CATEGORY", "NOTE"] {
            assert!(header.contains(column));
        }
        assert!(output.contains("-45.50"));
        assert!(output.contains("Office Depot"));
        assert!(output.contains("printer paper"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_ledger_list(&[]).contains("No ledger entries found"));
    }

    #[test]
    fn test_format_ledger_details() {
        let mut entry = create_test_entry();
        let output = format_ledger_details(&entry);
        assert!(output.contains("Amount:    -45.50"));
        assert!(output.contains("Note:      printer paper"));
        assert!(!output.contains("Labels:"));
        assert!(!output.contains("Files:"));

        entry.labels = vec![
            Label {
                name: "q1".to_string(),
                ..Default::default()
            },
            Label {
                name: "tax".to_string(),
                ..Default::default()
            },
        ];
        entry.files = vec![Default::default()];
        let output = format_ledger_details(&entry);
        assert!(output.contains("Labels:    q1, tax"));
        assert!(output.contains("Files:     1 attached"));
    }

    #[test]
    fn test_format_ledger_summary() {
        let summary = LedgerSummary {
            years: vec![LedgerSummaryYear {
                year: 2025,
                count: 340,
            }],
            categories: vec![LedgerSummaryItem {
                id: 4,
                name: "Supplies".to_string(),
                count: 18,
            }],
            labels: Vec::new(),
        };

        let output = format_ledger_summary(&summary);
        assert!(output.contains("Years:"));
        assert!(output.contains("2025"));
        assert!(output.contains("Categories:"));
        assert!(output.contains("Supplies"));
        assert!(!output.contains("Labels:"));
    }
}
