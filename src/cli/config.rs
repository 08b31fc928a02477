//! Config CLI commands

use clap::Subcommand;
use serde::Serialize;

use super::prompt::prompt_line;
use super::Context;
use crate::config::{mask_string, Config, DEFAULT_API_URL};
use crate::error::{SkyclerkError, SkyclerkResult};

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration (token masked)
    Show,
    /// Set the token, API URL and default account by hand
    Init,
}

/// What `config show` prints; never carries the raw token
#[derive(Debug, Serialize)]
struct ConfigView {
    access_token: String,
    user_id: u64,
    default_account_id: u64,
    api_url: String,
}

impl From<&Config> for ConfigView {
    fn from(config: &Config) -> Self {
        Self {
            access_token: mask_string(&config.access_token),
            user_id: config.user_id,
            default_account_id: config.default_account_id,
            api_url: config.api_url.clone(),
        }
    }
}

/// Handle a config command
pub fn handle_config_command(ctx: &Context, cmd: ConfigCommands) -> SkyclerkResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let config = ctx.load_config()?;
            ctx.emit(&ConfigView::from(&config), format_config)?;
        }

        ConfigCommands::Init => {
            let access_token = prompt_line("Access Token: ")?;

            let mut api_url = prompt_line(&format!("API URL (default: {}): ", DEFAULT_API_URL))?;
            if api_url.is_empty() {
                api_url = DEFAULT_API_URL.to_string();
            }

            let account = prompt_line("Default Account ID: ")?;
            let default_account_id = parse_account_id(&account)?;

            let config = Config {
                access_token,
                default_account_id,
                api_url,
                ..Default::default()
            };
            config.save(&ctx.paths)?;
            println!("Configuration saved.");
        }
    }

    Ok(())
}

fn format_config(view: &ConfigView) -> String {
    format!(
        "Access Token:       {}\nUser ID:            {}\nDefault Account ID: {}\nAPI URL:            {}\n",
        view.access_token, view.user_id, view.default_account_id, view.api_url
    )
}

/// Empty input means no default account
fn parse_account_id(input: &str) -> SkyclerkResult<u64> {
    if input.is_empty() {
        return Ok(0);
    }
    input
        .parse()
        .map_err(|_| SkyclerkError::Validation(format!("invalid account ID: '{}'", input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_masks_token() {
        let config = Config {
            access_token: "abcdefghijklmnop".into(),
            user_id: 3,
            default_account_id: 5,
            api_url: "https://app.skyclerk.com".into(),
            client_id: "secret-client".into(),
        };

        let output = format_config(&ConfigView::from(&config));
        assert!(output.contains("abcd****mnop"));
        assert!(!output.contains("abcdefghijklmnop"));
        assert!(output.contains("Default Account ID: 5"));

        let json = serde_json::to_value(ConfigView::from(&config)).unwrap();
        assert_eq!(json["access_token"], "abcd****mnop");
        assert!(json.get("client_id").is_none());
    }

    #[test]
    fn test_parse_account_id() {
        assert_eq!(parse_account_id("").unwrap(), 0);
        assert_eq!(parse_account_id("12").unwrap(), 12);
        assert!(parse_account_id("abc").unwrap_err().is_validation());
    }
}
