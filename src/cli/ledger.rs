//! Ledger CLI commands
//!
//! Implements CLI commands for listing and editing ledger entries.

use clap::Subcommand;

use super::reports::DateRange;
use super::Context;
use crate::display::{
    format_amount, format_ledger_details, format_ledger_list, format_ledger_summary,
    format_pnl_report, ReportView,
};
use crate::error::SkyclerkResult;
use crate::models::{LedgerCreateRequest, LedgerUpdateRequest};

/// Ledger subcommands
#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// List ledger entries
    List {
        /// Number of entries to return
        #[arg(long, default_value = "25")]
        limit: String,
        /// Page number
        #[arg(long, default_value = "1")]
        page: String,
        /// Sort direction (ASC or DESC)
        #[arg(long, default_value = "DESC")]
        sort: String,
    },
    /// Get a single ledger entry
    Get {
        /// Ledger entry ID
        id: u64,
    },
    /// Create a new ledger entry
    Create {
        /// Amount; negative for an expense
        #[arg(long, allow_hyphen_values = true)]
        amount: f64,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[arg(long)]
        contact_id: u64,
        #[arg(long)]
        category_id: u64,
        #[arg(long)]
        note: Option<String>,
        /// Label to attach; repeat for several
        #[arg(long = "label-id")]
        label_ids: Vec<u64>,
    },
    /// Update a ledger entry; only the given fields change
    Update {
        /// Ledger entry ID
        id: u64,
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<f64>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        contact_id: Option<u64>,
        #[arg(long)]
        category_id: Option<u64>,
        #[arg(long)]
        note: Option<String>,
        /// Replace the labels; repeat for several
        #[arg(long = "label-id")]
        label_ids: Option<Vec<u64>>,
    },
    /// Delete a ledger entry
    Delete {
        /// Ledger entry ID
        id: u64,
    },
    /// Show entry counts by year, category and label
    Summary,
    /// Show income, expense and profit across the ledger
    Pl(DateRange),
}

/// Handle a ledger command
pub fn handle_ledger_command(ctx: &Context, cmd: LedgerCommands) -> SkyclerkResult<()> {
    let client = ctx.client()?;

    match cmd {
        LedgerCommands::List { limit, page, sort } => {
            let entries = client.get_ledgers(&[
                ("limit", limit.as_str()),
                ("page", page.as_str()),
                ("sort", sort.as_str()),
            ])?;
            ctx.emit(&entries, |entries| format_ledger_list(entries))?;
        }

        LedgerCommands::Get { id } => {
            let entry = client.get_ledger(id)?;
            ctx.emit(&entry, format_ledger_details)?;
        }

        LedgerCommands::Create {
            amount,
            date,
            contact_id,
            category_id,
            note,
            label_ids,
        } => {
            let request = LedgerCreateRequest {
                amount,
                date,
                contact_id,
                category_id,
                label_ids,
                note: note.filter(|n| !n.is_empty()),
            };
            let entry = client.create_ledger(&request)?;
            ctx.emit(&entry, |e| {
                format!(
                    "Created ledger entry {} ({} on {})",
                    e.id,
                    format_amount(e.amount),
                    e.date
                )
            })?;
        }

        LedgerCommands::Update {
            id,
            amount,
            date,
            contact_id,
            category_id,
            note,
            label_ids,
        } => {
            let request = LedgerUpdateRequest {
                amount,
                date,
                contact_id,
                category_id,
                label_ids,
                note,
            };
            let entry = client.update_ledger(id, &request)?;
            ctx.emit(&entry, |e| format!("Updated ledger entry {}", e.id))?;
        }

        LedgerCommands::Delete { id } => {
            client.delete_ledger(id)?;
            println!("Deleted ledger entry {}", id);
        }

        LedgerCommands::Summary => {
            let summary = client.get_ledger_summary(&[])?;
            ctx.emit(&summary, format_ledger_summary)?;
        }

        LedgerCommands::Pl(range) => {
            let report = client.get_ledger_pl(&range.params())?;
            ctx.emit(&report, |r| format_pnl_report(r, ReportView::Current))?;
        }
    }

    Ok(())
}
