//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the API client.
//!
//! Each resource gets a `*Commands` subcommand enum and a `handle_*_command`
//! function taking the invocation [`Context`].

pub mod accounts;
pub mod activities;
pub mod categories;
pub mod config;
pub mod contacts;
pub mod files;
pub mod labels;
pub mod ledger;
pub mod login;
pub mod me;
pub mod prompt;
pub mod reports;
pub mod users;

use serde::Serialize;

use crate::api::Client;
use crate::config::{Config, ConfigPaths};
use crate::display::{print_json, OutputFormat};
use crate::error::{SkyclerkError, SkyclerkResult};

pub use accounts::{handle_accounts_command, AccountsCommands};
pub use activities::{handle_activities_command, ActivitiesArgs};
pub use categories::{handle_categories_command, CategoriesCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use contacts::{handle_contacts_command, ContactsCommands};
pub use files::{handle_files_command, FilesCommands};
pub use labels::{handle_labels_command, LabelsCommands};
pub use ledger::{handle_ledger_command, LedgerCommands};
pub use login::{handle_login, handle_logout, LoginArgs};
pub use me::{handle_me_command, MeCommands};
pub use reports::{handle_reports_command, ReportsCommands};
pub use users::{handle_users_command, UsersCommands};

/// Per-invocation settings shared by every handler
#[derive(Debug, Clone)]
pub struct Context {
    pub output: OutputFormat,
    /// `--account`, taking precedence over the configured default
    pub account_override: Option<u64>,
    pub paths: ConfigPaths,
}

impl Context {
    pub fn new(output: OutputFormat, account_override: Option<u64>, paths: ConfigPaths) -> Self {
        Self {
            output,
            account_override: account_override.filter(|id| *id > 0),
            paths,
        }
    }

    pub fn load_config(&self) -> SkyclerkResult<Config> {
        Config::load(&self.paths)
    }

    /// Client for account-scoped commands
    ///
    /// Fails when neither `--account` nor the config selects an account.
    pub fn client(&self) -> SkyclerkResult<Client> {
        let config = self.load_config()?;
        let account_id = self
            .account_override
            .unwrap_or(config.default_account_id);

        if account_id == 0 {
            return Err(SkyclerkError::NoAccount);
        }

        Client::new(config.api_url_or_default(), &config.access_token, account_id)
    }

    /// Client for commands that work before an account is chosen
    pub fn client_no_account(&self) -> SkyclerkResult<(Client, Config)> {
        let config = self.load_config()?;
        let client = Client::new(config.api_url_or_default(), &config.access_token, 0)?;
        Ok((client, config))
    }

    pub fn is_json(&self) -> bool {
        self.output == OutputFormat::Json
    }

    /// Print `value` as JSON, or the text produced by `table` otherwise
    pub fn emit<T, F>(&self, value: &T, table: F) -> SkyclerkResult<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        match self.output {
            OutputFormat::Json => print_json(value),
            OutputFormat::Table => {
                println!("{}", table(value).trim_end_matches('\n'));
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context_with(config: Option<Config>, account: Option<u64>) -> (TempDir, Context) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base_dir(temp_dir.path().to_path_buf());
        if let Some(config) = config {
            config.save(&paths).unwrap();
        }
        (temp_dir, Context::new(OutputFormat::Table, account, paths))
    }

    #[test]
    fn test_client_requires_login() {
        let (_dir, ctx) = context_with(None, None);
        assert!(matches!(ctx.client(), Err(SkyclerkError::NotLoggedIn)));
    }

    #[test]
    fn test_client_requires_account() {
        let config = Config {
            access_token: "token".into(),
            ..Default::default()
        };
        let (_dir, ctx) = context_with(Some(config), None);

        let err = ctx.client().unwrap_err();
        assert!(matches!(err, SkyclerkError::NoAccount));
        assert!(err.to_string().contains("skyclerk accounts use"));
    }

    #[test]
    fn test_account_override_wins() {
        let config = Config {
            access_token: "token".into(),
            default_account_id: 7,
            ..Default::default()
        };
        let (_dir, ctx) = context_with(Some(config.clone()), Some(42));
        assert_eq!(ctx.client().unwrap().account_id(), 42);

        // zero means "not given"
        let (_dir, ctx) = context_with(Some(config), Some(0));
        assert_eq!(ctx.client().unwrap().account_id(), 7);
    }

    #[test]
    fn test_client_uses_default_url() {
        let config = Config {
            access_token: "token".into(),
            default_account_id: 1,
            ..Default::default()
        };
        let (_dir, ctx) = context_with(Some(config), None);
        assert_eq!(ctx.client().unwrap().base_url(), crate::config::DEFAULT_API_URL);
    }

    #[test]
    fn test_client_no_account() {
        let config = Config {
            access_token: "token".into(),
            api_url: "http://localhost:9000".into(),
            ..Default::default()
        };
        let (_dir, ctx) = context_with(Some(config), None);

        let (client, config) = ctx.client_no_account().unwrap();
        assert_eq!(client.account_id(), 0);
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(config.access_token, "token");
    }
}
