//! Contact display formatting

use super::render_table;
use crate::models::Contact;

pub fn format_contact_list(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    render_table(
        &["ID", "NAME", "EMAIL", "PHONE"],
        contacts.iter().map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                c.email.clone(),
                c.phone.clone(),
            ]
        }),
    )
}

/// Format a contact; only the id and name are always shown
pub fn format_contact_details(contact: &Contact) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:      {}\n", contact.id));
    output.push_str(&format!("Name:    {}\n", contact.name));

    for (label, value) in [
        ("First:   ", &contact.first_name),
        ("Last:    ", &contact.last_name),
        ("Email:   ", &contact.email),
        ("Phone:   ", &contact.phone),
        ("Address: ", &contact.address),
        ("City:    ", &contact.city),
        ("State:   ", &contact.state),
        ("Zip:     ", &contact.zip),
        ("Country: ", &contact.country),
        ("Website: ", &contact.website),
    ] {
        if !value.is_empty() {
            output.push_str(&format!("{}{}\n", label, value));
        }
    }

    output
}
