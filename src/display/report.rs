//! Profit and loss report display formatting
//!
//! All reports share one shape; the view decides which totals are shown and
//! how the breakdown is titled.

use super::{format_amount, indent, render_table};
use crate::models::PnlReport;

/// Which report a [`PnlReport`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportView {
    Pnl,
    Current,
    ByCategory,
    ByLabel,
    IncomeByContact,
    ExpensesByContact,
}

impl ReportView {
    /// Section title and name column of the breakdown, if the view has one
    fn breakdown(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Pnl => Some(("Breakdown:", "NAME")),
            Self::Current => None,
            Self::ByCategory => Some(("By Category:", "CATEGORY")),
            Self::ByLabel => Some(("By Label:", "LABEL")),
            Self::IncomeByContact | Self::ExpensesByContact => Some(("By Contact:", "CONTACT")),
        }
    }
}

pub fn format_pnl_report(report: &PnlReport, view: ReportView) -> String {
    let mut output = match view {
        ReportView::IncomeByContact => {
            format!("Total Income: {}\n", format_amount(report.income))
        }
        ReportView::ExpensesByContact => {
            format!("Total Expenses: {}\n", format_amount(report.expense))
        }
        _ => format!(
            "Income:  {}\nExpense: {}\nProfit:  {}\n",
            format_amount(report.income),
            format_amount(report.expense),
            format_amount(report.profit)
        ),
    };

    if let Some((title, column)) = view.breakdown() {
        if !report.breakdown.is_empty() {
            let table = render_table(
                &[column, "AMOUNT"],
                report
                    .breakdown
                    .iter()
                    .map(|b| vec![b.name.clone(), format_amount(b.amount)]),
            );
            output.push_str(&format!("\n{}\n{}", title, indent(&table, "  ")));
        }
    }

    output
}
