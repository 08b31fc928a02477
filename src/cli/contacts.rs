//! Contact CLI commands
//!
//! Create and update share one set of detail flags; on update only the flags
//! actually given are sent.

use clap::{Args, Subcommand};

use super::Context;
use crate::display::{format_contact_details, format_contact_list};
use crate::error::{SkyclerkError, SkyclerkResult};
use crate::models::{ContactCreateRequest, ContactUpdateRequest};

/// Optional contact detail flags
#[derive(Args, Debug, Default, Clone)]
pub struct ContactFields {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub zip: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub account_number: Option<String>,
}

/// Contact subcommands
#[derive(Subcommand, Debug)]
pub enum ContactsCommands {
    /// List contacts
    List {
        /// Search contacts by name
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a single contact
    Get {
        /// Contact ID
        id: u64,
    },
    /// Create a new contact
    Create {
        /// Contact name
        #[arg(long)]
        name: String,
        #[command(flatten)]
        fields: ContactFields,
    },
    /// Update a contact
    Update {
        /// Contact ID
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: ContactFields,
    },
    /// Delete a contact
    Delete {
        /// Contact ID
        id: u64,
    },
}

/// Blank detail values are not sent on create
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn create_request(name: String, fields: ContactFields) -> ContactCreateRequest {
    ContactCreateRequest {
        name,
        first_name: non_empty(fields.first_name),
        last_name: non_empty(fields.last_name),
        email: non_empty(fields.email),
        phone: non_empty(fields.phone),
        address: non_empty(fields.address),
        city: non_empty(fields.city),
        state: non_empty(fields.state),
        zip: non_empty(fields.zip),
        country: non_empty(fields.country),
        website: non_empty(fields.website),
        account_number: non_empty(fields.account_number),
    }
}

/// Given flags are sent as-is, so an empty value clears the field
fn update_request(name: Option<String>, fields: ContactFields) -> ContactUpdateRequest {
    ContactUpdateRequest {
        name,
        first_name: fields.first_name,
        last_name: fields.last_name,
        email: fields.email,
        phone: fields.phone,
        address: fields.address,
        city: fields.city,
        state: fields.state,
        zip: fields.zip,
        country: fields.country,
        website: fields.website,
        account_number: fields.account_number,
    }
}

/// Handle a contacts command
pub fn handle_contacts_command(ctx: &Context, cmd: ContactsCommands) -> SkyclerkResult<()> {
    let client = ctx.client()?;

    match cmd {
        ContactsCommands::List { search } => {
            let contacts =
                client.get_contacts(&[("search", search.as_deref().unwrap_or(""))])?;
            ctx.emit(&contacts, |c| format_contact_list(c))?;
        }

        ContactsCommands::Get { id } => {
            let contact = client.get_contact(id)?;
            ctx.emit(&contact, format_contact_details)?;
        }

        ContactsCommands::Create { name, fields } => {
            if name.is_empty() {
                return Err(SkyclerkError::Validation("contact name is required".into()));
            }
            let contact = client.create_contact(&create_request(name, fields))?;
            ctx.emit(&contact, |c| format!("Created contact {}: {}", c.id, c.name))?;
        }

        ContactsCommands::Update { id, name, fields } => {
            let request = update_request(name, fields);
            if request.is_empty() {
                return Err(SkyclerkError::Validation(
                    "nothing to update; pass at least one field".into(),
                ));
            }
            let contact = client.update_contact(id, &request)?;
            ctx.emit(&contact, |c| format!("Updated contact {}: {}", c.id, c.name))?;
        }

        ContactsCommands::Delete { id } => {
            client.delete_contact(id)?;
            println!("Deleted contact {}", id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_drops_blank_fields() {
        let fields = ContactFields {
            email: Some("ap@acme.test".into()),
            phone: Some(String::new()),
            ..Default::default()
        };

        let request = create_request("Acme".into(), fields);
        assert_eq!(request.email.as_deref(), Some("ap@acme.test"));
        assert!(request.phone.is_none());
    }

    #[test]
    fn test_update_keeps_explicit_empty() {
        let fields = ContactFields {
            phone: Some(String::new()),
            ..Default::default()
        };

        let request = update_request(None, fields);
        assert_eq!(request.phone.as_deref(), Some(""));
        assert!(request.name.is_none());
        assert!(!request.is_empty());
    }
}
