//! Income and expense categories

use super::client::{decode, Client, Params};
use crate::error::SkyclerkResult;
use crate::models::{Category, CategoryCreateRequest, CategoryUpdateRequest};

impl Client {
    pub fn get_categories(&self, params: &Params<'_>) -> SkyclerkResult<Vec<Category>> {
        let data = self
            .get(&self.account_path("/categories"), params)
            .map_err(|e| e.context("unable to get categories"))?;
        decode(&data, "categories")
    }

    pub fn get_category(&self, id: u64) -> SkyclerkResult<Category> {
        let data = self
            .get(&self.account_path(&format!("/categories/{}", id)), &[])
            .map_err(|e| e.context("unable to get category"))?;
        decode(&data, "category")
    }

    pub fn create_category(&self, request: &CategoryCreateRequest) -> SkyclerkResult<Category> {
        let data = self
            .post(&self.account_path("/categories"), request)
            .map_err(|e| e.context("unable to create category"))?;
        decode(&data, "category")
    }

    pub fn update_category(
        &self,
        id: u64,
        request: &CategoryUpdateRequest,
    ) -> SkyclerkResult<Category> {
        let data = self
            .put(&self.account_path(&format!("/categories/{}", id)), request)
            .map_err(|e| e.context("unable to update category"))?;
        decode(&data, "category")
    }

    pub fn delete_category(&self, id: u64) -> SkyclerkResult<()> {
        self.delete(&self.account_path(&format!("/categories/{}", id)))
            .map_err(|e| e.context("unable to delete category"))?;
        Ok(())
    }
}
