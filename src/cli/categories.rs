//! Category CLI commands

use clap::Subcommand;

use super::Context;
use crate::display::{format_category_details, format_category_list};
use crate::error::SkyclerkResult;
use crate::models::{CategoryCreateRequest, CategoryUpdateRequest};

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoriesCommands {
    /// List categories
    List,
    /// Get a single category
    Get {
        /// Category ID
        id: u64,
    },
    /// Create a new category
    Create {
        /// Category name
        #[arg(long)]
        name: String,
        /// Category type (expense or income)
        #[arg(long = "type")]
        category_type: String,
    },
    /// Update a category
    Update {
        /// Category ID
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "type")]
        category_type: Option<String>,
    },
    /// Delete a category
    Delete {
        /// Category ID
        id: u64,
    },
}

/// Handle a categories command
pub fn handle_categories_command(ctx: &Context, cmd: CategoriesCommands) -> SkyclerkResult<()> {
    let client = ctx.client()?;

    match cmd {
        CategoriesCommands::List => {
            let categories = client.get_categories(&[])?;
            ctx.emit(&categories, |c| format_category_list(c))?;
        }

        CategoriesCommands::Get { id } => {
            let category = client.get_category(id)?;
            ctx.emit(&category, format_category_details)?;
        }

        CategoriesCommands::Create {
            name,
            category_type,
        } => {
            let category = client.create_category(&CategoryCreateRequest {
                name,
                category_type,
            })?;
            ctx.emit(&category, |c| format!("Created category {}: {}", c.id, c.name))?;
        }

        CategoriesCommands::Update {
            id,
            name,
            category_type,
        } => {
            let category = client.update_category(
                id,
                &CategoryUpdateRequest {
                    name,
                    category_type,
                },
            )?;
            ctx.emit(&category, |c| format!("Updated category {}: {}", c.id, c.name))?;
        }

        CategoriesCommands::Delete { id } => {
            client.delete_category(id)?;
            println!("Deleted category {}", id);
        }
    }

    Ok(())
}
