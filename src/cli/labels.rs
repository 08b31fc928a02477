//! Label CLI commands

use clap::Subcommand;

use super::Context;
use crate::display::{format_label_details, format_label_list};
use crate::error::SkyclerkResult;
use crate::models::{LabelCreateRequest, LabelUpdateRequest};

/// Label subcommands
#[derive(Subcommand, Debug)]
pub enum LabelsCommands {
    /// List labels
    List,
    /// Get a single label
    Get {
        /// Label ID
        id: u64,
    },
    /// Create a new label
    Create {
        #[arg(long)]
        name: String,
    },
    /// Rename a label
    Update {
        /// Label ID
        id: u64,
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a label
    Delete {
        /// Label ID
        id: u64,
    },
}

pub fn handle_labels_command(ctx: &Context, cmd: LabelsCommands) -> SkyclerkResult<()> {
    let client = ctx.client()?;

    match cmd {
        LabelsCommands::List => {
            let labels = client.get_labels(&[])?;
            ctx.emit(&labels, |l| format_label_list(l))?;
        }
        LabelsCommands::Get { id } => {
            let label = client.get_label(id)?;
            ctx.emit(&label, format_label_details)?;
        }
        LabelsCommands::Create { name } => {
            let label = client.create_label(&LabelCreateRequest { name })?;
            ctx.emit(&label, |l| format!("Created label {}: {}", l.id, l.name))?;
        }
        LabelsCommands::Update { id, name } => {
            let label = client.update_label(id, &LabelUpdateRequest { name })?;
            ctx.emit(&label, |l| format!("Updated label {}: {}", l.id, l.name))?;
        }
        LabelsCommands::Delete { id } => {
            client.delete_label(id)?;
            println!("Deleted label {}", id);
        }
    }

    Ok(())
}
