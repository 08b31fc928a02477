//! Login and logout
//!
//! Login exchanges email and password for a token, looks up the user's
//! accounts and writes the config. Logout revokes the token and removes it.

use clap::Args;

use super::prompt::{prompt_line, prompt_password, prompt_required};
use super::Context;
use crate::api::Client;
use crate::config::{Config, DEFAULT_API_URL};
use crate::error::{SkyclerkError, SkyclerkResult};
use crate::models::Account;

/// Arguments for `skyclerk login`; anything missing is prompted for
#[derive(Args, Debug, Default)]
pub struct LoginArgs {
    /// OAuth client id of this application
    #[arg(long, env = "SKYCLERK_CLIENT_ID")]
    pub client_id: Option<String>,
    /// Account email
    #[arg(long)]
    pub email: Option<String>,
    /// API base URL
    #[arg(long, env = "SKYCLERK_API_URL")]
    pub api_url: Option<String>,
}

/// Handle the login command
pub fn handle_login(ctx: &Context, args: LoginArgs) -> SkyclerkResult<()> {
    let api_url = args
        .api_url
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let client_id = match args.client_id.filter(|v| !v.is_empty()) {
        Some(client_id) => client_id,
        None => prompt_required("Client ID: ", "client ID")?,
    };
    let email = match args.email.filter(|v| !v.is_empty()) {
        Some(email) => email,
        None => prompt_required("Email: ", "email")?,
    };

    let password = prompt_password("Password: ")?;
    if password.is_empty() {
        return Err(SkyclerkError::Validation("password is required".into()));
    }

    let token = Client::new(&api_url, "", 0)?.login(&email, &password, &client_id)?;
    drop(password);

    let client = Client::new(&api_url, &token.access_token, 0)?;
    let user = client
        .get_auth_user()
        .map_err(|e| e.context("unable to fetch user profile"))?;

    let default_account_id =
        choose_account(&user.accounts, || prompt_line("\nSelect default account ID: "))?;

    let config = Config {
        access_token: token.access_token.clone(),
        user_id: token.user_id,
        default_account_id,
        api_url,
        client_id,
    };
    config.save(&ctx.paths)?;
    tracing::debug!(user_id = config.user_id, default_account_id, "login complete");

    println!("\nLogged in as {} ({})", user.full_name(), user.email);
    Ok(())
}

/// Handle the logout command
///
/// A failed revocation only warns; the local config is removed regardless.
pub fn handle_logout(ctx: &Context) -> SkyclerkResult<()> {
    let (client, _) = ctx.client_no_account()?;

    if let Err(e) = client.logout() {
        eprintln!("Warning: could not revoke token: {}", e);
    }

    Config::delete(&ctx.paths)?;
    println!("Logged out successfully.");
    Ok(())
}

/// Pick the default account after login
///
/// A single account is used directly. With several, `pick` supplies the id
/// and it must be one of them. No accounts leaves the default unset.
fn choose_account<F>(accounts: &[Account], pick: F) -> SkyclerkResult<u64>
where
    F: FnOnce() -> SkyclerkResult<String>,
{
    match accounts {
        [] => Ok(0),
        [only] => {
            println!("Using account: {} (ID: {})", only.name, only.id);
            Ok(only.id)
        }
        _ => {
            println!("\nAvailable accounts:");
            for account in accounts {
                println!("  [{}] {}", account.id, account.name);
            }

            let choice = pick()?;
            let id: u64 = choice
                .parse()
                .map_err(|_| SkyclerkError::Validation("invalid account ID".into()))?;

            if accounts.iter().any(|a| a.id == id) {
                Ok(id)
            } else {
                Err(SkyclerkError::Validation("invalid account ID".into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: u64, name: &str) -> Account {
        Account {
            id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_account_is_used() {
        let id = choose_account(&[account(9, "Books")], || {
            panic!("should not prompt with one account")
        })
        .unwrap();
        assert_eq!(id, 9);
    }

    #[test]
    fn test_no_accounts_leaves_default_unset() {
        assert_eq!(choose_account(&[], || Ok("1".into())).unwrap(), 0);
    }

    #[test]
    fn test_choice_must_belong_to_user() {
        let accounts = [account(1, "Personal"), account(2, "Business")];

        assert_eq!(choose_account(&accounts, || Ok("2".into())).unwrap(), 2);

        let err = choose_account(&accounts, || Ok("3".into())).unwrap_err();
        assert!(err.is_validation());

        let err = choose_account(&accounts, || Ok("two".into())).unwrap_err();
        assert_eq!(err.to_string(), "invalid account ID");
    }
}
