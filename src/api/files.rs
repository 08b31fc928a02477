//! File and receipt uploads

use std::path::Path;

use super::client::{decode, Client};
use crate::error::SkyclerkResult;
use crate::models::File;

impl Client {
    /// Upload a file, attaching it to a ledger entry when `ledger_id` is non-empty
    pub fn upload(&self, file_path: impl AsRef<Path>, ledger_id: &str) -> SkyclerkResult<File> {
        let ledger_field = [("ledger_id", ledger_id)];
        let fields: &[(&str, &str)] = if ledger_id.is_empty() {
            &[]
        } else {
            &ledger_field
        };

        let data = self
            .upload_file(&self.account_path("/files"), file_path, fields)
            .map_err(|e| e.context("unable to upload file"))?;
        decode(&data, "file")
    }
}
