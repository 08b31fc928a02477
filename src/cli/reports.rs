//! Report CLI commands

use clap::{Args, Subcommand};

use super::Context;
use crate::display::{format_pnl_report, ReportView};
use crate::error::SkyclerkResult;

/// Optional `--start` / `--end` bounds shared by the reports
#[derive(Args, Debug, Default, Clone)]
pub struct DateRange {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,
    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,
}

impl DateRange {
    /// Query parameters; unset bounds are empty and get dropped by the client
    pub fn params(&self) -> [(&'static str, &str); 2] {
        [
            ("start", self.start.as_deref().unwrap_or("")),
            ("end", self.end.as_deref().unwrap_or("")),
        ]
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportsCommands {
    /// Profit and loss for a date range
    Pnl(DateRange),
    /// Profit and loss for the current year
    PnlCurrent,
    /// Profit and loss broken down by category
    PnlByCategory(DateRange),
    /// Profit and loss broken down by label
    PnlByLabel(DateRange),
    /// Income broken down by contact
    IncomeByContact(DateRange),
    /// Expenses broken down by contact
    ExpensesByContact(DateRange),
}

/// Handle a reports command
pub fn handle_reports_command(ctx: &Context, cmd: ReportsCommands) -> SkyclerkResult<()> {
    let client = ctx.client()?;

    let (report, view) = match cmd {
        ReportsCommands::Pnl(range) => (client.get_pnl_report(&range.params())?, ReportView::Pnl),
        ReportsCommands::PnlCurrent => (client.get_pnl_current()?, ReportView::Current),
        ReportsCommands::PnlByCategory(range) => (
            client.get_pnl_by_category(&range.params())?,
            ReportView::ByCategory,
        ),
        ReportsCommands::PnlByLabel(range) => {
            (client.get_pnl_by_label(&range.params())?, ReportView::ByLabel)
        }
        ReportsCommands::IncomeByContact(range) => (
            client.get_income_by_contact(&range.params())?,
            ReportView::IncomeByContact,
        ),
        ReportsCommands::ExpensesByContact(range) => (
            client.get_expenses_by_contact(&range.params())?,
            ReportView::ExpensesByContact,
        ),
    };

    ctx.emit(&report, |r| format_pnl_report(r, view))
}
