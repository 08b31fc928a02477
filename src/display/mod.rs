//! Display formatting for terminal output
//!
//! Every `format_*` function returns the text to print so it can be tested
//! without capturing stdout. Lists are rendered as borderless tables with
//! upper-case headers; single records as aligned `Label: value` lines.

pub mod account;
pub mod activity;
pub mod category;
pub mod contact;
pub mod label;
pub mod ledger;
pub mod report;
pub mod user;

use clap::ValueEnum;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::error::SkyclerkResult;

pub use account::{format_account_details, format_account_list, format_billing};
pub use activity::format_activity_list;
pub use category::{format_category_details, format_category_list};
pub use contact::{format_contact_details, format_contact_list};
pub use label::{format_label_details, format_label_list};
pub use ledger::{format_ledger_details, format_ledger_list, format_ledger_summary};
pub use report::{format_pnl_report, ReportView};
pub use user::{format_invite_list, format_profile, format_user_list};

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Pretty-print any value as indented JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> SkyclerkResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> SkyclerkResult<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

/// Money as shown everywhere in the CLI: two decimals, no grouping
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Render a borderless table with one header row
pub(crate) fn render_table<I>(headers: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::blank());
    format!("{}\n", table)
}

/// Prefix every line of `text` with `prefix`
pub(crate) fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}\n", prefix, line))
        .collect()
}
