//! Profile CLI commands

use clap::Subcommand;

use super::prompt::prompt_password;
use super::Context;
use crate::display::format_profile;
use crate::error::{SkyclerkError, SkyclerkResult};
use crate::models::{ChangePasswordRequest, MeUpdateRequest};

/// Profile subcommands; with none, the profile is shown
#[derive(Subcommand, Debug)]
pub enum MeCommands {
    /// Update your profile
    Update {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Change your password
    ChangePassword,
}

/// Handle `skyclerk me [subcommand]`
pub fn handle_me_command(ctx: &Context, cmd: Option<MeCommands>) -> SkyclerkResult<()> {
    let client = ctx.client()?;

    match cmd {
        None => {
            let me = client.get_me()?;
            ctx.emit(&me, format_profile)?;
        }

        Some(MeCommands::Update {
            first_name,
            last_name,
            email,
        }) => {
            let request = MeUpdateRequest {
                first_name,
                last_name,
                email,
            };
            let me = client.update_me(&request)?;
            ctx.emit(&me, |me| {
                format!(
                    "Updated profile: {} {} ({})",
                    me.first_name, me.last_name, me.email
                )
            })?;
        }

        Some(MeCommands::ChangePassword) => {
            let current = prompt_password("Current password: ")?;
            let new = prompt_password("New password: ")?;
            let confirm = prompt_password("Confirm new password: ")?;

            if new.is_empty() {
                return Err(SkyclerkError::Validation("new password is required".into()));
            }
            if *new != *confirm {
                return Err(SkyclerkError::Validation("passwords do not match".into()));
            }

            let request = ChangePasswordRequest {
                current_password: (*current).clone(),
                new_password: (*new).clone(),
            };
            client.change_password(&request)?;
            println!("Password changed.");
        }
    }

    Ok(())
}
