//! User, profile and invitation display formatting

use super::render_table;
use crate::models::{Invite, MeResponse, User};

pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    render_table(
        &["ID", "NAME", "EMAIL", "STATUS"],
        users.iter().map(|u| {
            vec![
                u.id.to_string(),
                u.full_name(),
                u.email.clone(),
                u.status.clone(),
            ]
        }),
    )
}

pub fn format_invite_list(invites: &[Invite]) -> String {
    if invites.is_empty() {
        return "No pending invites.".to_string();
    }

    render_table(
        &["ID", "EMAIL", "NAME", "EXPIRES"],
        invites.iter().map(|i| {
            vec![
                i.id.to_string(),
                i.email.clone(),
                format!("{} {}", i.first_name, i.last_name),
                i.expires_at.clone(),
            ]
        }),
    )
}

/// Format the current user's profile
pub fn format_profile(me: &MeResponse) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:         {}\n", me.id));
    output.push_str(&format!("First Name: {}\n", me.first_name));
    output.push_str(&format!("Last Name:  {}\n", me.last_name));
    output.push_str(&format!("Email:      {}\n", me.email));
    output.push_str(&format!("Status:     {}\n", me.status));
    output
}
