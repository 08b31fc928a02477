//! File CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use super::Context;
use crate::error::{SkyclerkError, SkyclerkResult};

/// File subcommands
#[derive(Subcommand, Debug)]
pub enum FilesCommands {
    /// Upload a file or receipt
    Upload {
        /// Path of the file to upload
        path: PathBuf,
        /// Attach the file to this ledger entry
        #[arg(long)]
        ledger_id: Option<String>,
    },
}

/// Handle a files command
pub fn handle_files_command(ctx: &Context, cmd: FilesCommands) -> SkyclerkResult<()> {
    match cmd {
        FilesCommands::Upload { path, ledger_id } => {
            if !path.exists() {
                return Err(SkyclerkError::Validation(format!(
                    "file not found: {}",
                    path.display()
                )));
            }

            let client = ctx.client()?;
            let file = client.upload(&path, ledger_id.as_deref().unwrap_or(""))?;
            ctx.emit(&file, |f| {
                format!(
                    "Uploaded file {}: {} ({}, {} bytes)",
                    f.id, f.name, f.file_type, f.size
                )
            })
        }
    }
}
