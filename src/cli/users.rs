//! User and invitation CLI commands

use clap::Subcommand;

use super::Context;
use crate::display::{format_invite_list, format_user_list};
use crate::error::SkyclerkResult;
use crate::models::InviteCreateRequest;

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UsersCommands {
    /// List users with access to the account
    List,
    /// Remove a user from the account
    Remove {
        /// User ID
        id: u64,
    },
    /// Invite someone to the account
    Invite {
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// Personal note included in the invitation
        #[arg(long)]
        message: Option<String>,
    },
    /// List pending invitations
    Invites,
    /// Cancel a pending invitation
    CancelInvite {
        /// Invitation ID
        id: u64,
    },
}

/// Handle a users command
pub fn handle_users_command(ctx: &Context, cmd: UsersCommands) -> SkyclerkResult<()> {
    let client = ctx.client()?;

    match cmd {
        UsersCommands::List => {
            let users = client.get_users()?;
            ctx.emit(&users, |u| format_user_list(u))?;
        }

        UsersCommands::Remove { id } => {
            client.remove_user(id)?;
            println!("Removed user {} from account", id);
        }

        UsersCommands::Invite {
            email,
            first_name,
            last_name,
            message,
        } => {
            let invite = client.create_invite(&InviteCreateRequest {
                email,
                first_name,
                last_name,
                message: message.filter(|m| !m.is_empty()),
            })?;
            ctx.emit(&invite, |i| {
                format!("Invitation sent to {} (expires: {})", i.email, i.expires_at)
            })?;
        }

        UsersCommands::Invites => {
            let invites = client.get_invites()?;
            ctx.emit(&invites, |i| format_invite_list(i))?;
        }

        UsersCommands::CancelInvite { id } => {
            client.cancel_invite(id)?;
            println!("Cancelled invitation {}", id);
        }
    }

    Ok(())
}
