//! Account CLI commands
//!
//! Listing comes from the authenticated user and needs no account; the rest
//! operate on the selected account.

use clap::Subcommand;

use super::Context;
use crate::display::{format_account_details, format_account_list, format_billing};
use crate::error::SkyclerkResult;
use crate::models::Account;

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountsCommands {
    /// List the accounts you have access to
    List,
    /// Show the current account
    Show,
    /// Set the default account
    Use {
        /// Account ID
        id: u64,
    },
    /// Show billing for the current account
    Billing,
    /// Update the current account
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        zip: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        locale: Option<String>,
        #[arg(long)]
        currency: Option<String>,
    },
}

/// Fields `accounts update` may change; `None` keeps the current value
#[derive(Debug, Default)]
struct AccountChanges {
    name: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
    country: Option<String>,
    locale: Option<String>,
    currency: Option<String>,
}

impl AccountChanges {
    fn apply(self, account: &mut Account) {
        let fields = [
            (self.name, &mut account.name),
            (self.address, &mut account.address),
            (self.city, &mut account.city),
            (self.state, &mut account.state),
            (self.zip, &mut account.zip),
            (self.country, &mut account.country),
            (self.locale, &mut account.locale),
            (self.currency, &mut account.currency),
        ];
        for (change, field) in fields {
            if let Some(value) = change {
                *field = value;
            }
        }
    }
}

/// Handle an accounts command
pub fn handle_accounts_command(ctx: &Context, cmd: AccountsCommands) -> SkyclerkResult<()> {
    match cmd {
        AccountsCommands::List => {
            let (client, _) = ctx.client_no_account()?;
            let user = client.get_auth_user()?;
            ctx.emit(&user.accounts, |accounts| format_account_list(accounts))?;
        }

        AccountsCommands::Show => {
            let account = ctx.client()?.get_account()?;
            ctx.emit(&account, format_account_details)?;
        }

        AccountsCommands::Use { id } => {
            let mut config = ctx.load_config()?;
            config.default_account_id = id;
            config.save(&ctx.paths)?;
            println!("Default account set to {}", id);
        }

        AccountsCommands::Billing => {
            let billing = ctx.client()?.get_billing()?;
            ctx.emit(&billing, format_billing)?;
        }

        AccountsCommands::Update {
            name,
            address,
            city,
            state,
            zip,
            country,
            locale,
            currency,
        } => {
            let client = ctx.client()?;

            // the endpoint replaces the whole record
            let mut account = client.get_account()?;
            AccountChanges {
                name,
                address,
                city,
                state,
                zip,
                country,
                locale,
                currency,
            }
            .apply(&mut account);

            let account = client.update_account(&account)?;
            ctx.emit(&account, |a| format!("Updated account {}: {}", a.id, a.name))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_keep_unset_fields() {
        let mut account = Account {
            id: 1,
            name: "Old".into(),
            currency: "USD".into(),
            city: "Portland".into(),
            ..Default::default()
        };

        AccountChanges {
            name: Some("New".into()),
            city: Some(String::new()),
            ..Default::default()
        }
        .apply(&mut account);

        assert_eq!(account.name, "New");
        assert_eq!(account.city, "");
        assert_eq!(account.currency, "USD");
        assert_eq!(account.id, 1);
    }
}
