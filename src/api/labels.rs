//! Labels

use super::client::{decode, Client, Params};
use crate::error::SkyclerkResult;
use crate::models::{Label, LabelCreateRequest, LabelUpdateRequest};

impl Client {
    pub fn get_labels(&self, params: &Params<'_>) -> SkyclerkResult<Vec<Label>> {
        let data = self
            .get(&self.account_path("/labels"), params)
            .map_err(|e| e.context("unable to get labels"))?;
        decode(&data, "labels")
    }

    pub fn get_label(&self, id: u64) -> SkyclerkResult<Label> {
        let data = self
            .get(&self.account_path(&format!("/labels/{}", id)), &[])
            .map_err(|e| e.context("unable to get label"))?;
        decode(&data, "label")
    }

    pub fn create_label(&self, request: &LabelCreateRequest) -> SkyclerkResult<Label> {
        let data = self
            .post(&self.account_path("/labels"), request)
            .map_err(|e| e.context("unable to create label"))?;
        decode(&data, "label")
    }

    pub fn update_label(&self, id: u64, request: &LabelUpdateRequest) -> SkyclerkResult<Label> {
        let data = self
            .put(&self.account_path(&format!("/labels/{}", id)), request)
            .map_err(|e| e.context("unable to update label"))?;
        decode(&data, "label")
    }

    pub fn delete_label(&self, id: u64) -> SkyclerkResult<()> {
        self.delete(&self.account_path(&format!("/labels/{}", id)))
            .map_err(|e| e.context("unable to delete label"))?;
        Ok(())
    }
}
