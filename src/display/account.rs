//! Account display formatting
//!
//! Formats accounts and billing for terminal output in table and detail views.

use super::render_table;
use crate::models::{Account, Billing};

/// Format the accounts a user can access as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    render_table(
        &["ID", "NAME", "CURRENCY", "LOCALE"],
        accounts.iter().map(|a| {
            vec![
                a.id.to_string(),
                a.name.clone(),
                a.currency.clone(),
                a.locale.clone(),
            ]
        }),
    )
}

/// Format a single account's details; empty address fields are skipped
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();

    output.push_str(&format!("ID:       {}\n", account.id));
    output.push_str(&format!("Name:     {}\n", account.name));
    output.push_str(&format!("Currency: {}\n", account.currency));
    output.push_str(&format!("Locale:   {}\n", account.locale));

    for (label, value) in [
        ("Address:  ", &account.address),
        ("City:     ", &account.city),
        ("State:    ", &account.state),
        ("Zip:      ", &account.zip),
        ("Country:  ", &account.country),
    ] {
        if !value.is_empty() {
            output.push_str(&format!("{}{}\n", label, value));
        }
    }

    output
}

pub fn format_billing(billing: &Billing) -> String {
    let mut output = String::new();

    output.push_str(&format!("Subscription: {}\n", billing.subscription));
    output.push_str(&format!("Status:       {}\n", billing.status));
    if !billing.trial_expire.is_empty() {
        output.push_str(&format!("Trial Ends:   {}\n", billing.trial_expire));
    }
    if !billing.card_last4.is_empty() {
        output.push_str(&format!(
            "Card:         {} ending {} ({:02}/{})\n",
            billing.card_brand, billing.card_last4, billing.card_exp_month, billing.card_exp_year
        ));
    }
    if !billing.current_period_end.is_empty() {
        output.push_str(&format!(
            "Period:       {} - {}\n",
            billing.current_period_start, billing.current_period_end
        ));
    }

    output
}
