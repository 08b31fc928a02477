//! Contacts

use super::client::{decode, Client, Params};
use crate::error::SkyclerkResult;
use crate::models::{Contact, ContactCreateRequest, ContactUpdateRequest};

impl Client {
    /// Contacts matching `params` (`search` filters by name)
    pub fn get_contacts(&self, params: &Params<'_>) -> SkyclerkResult<Vec<Contact>> {
        let data = self
            .get(&self.account_path("/contacts"), params)
            .map_err(|e| e.context("unable to get contacts"))?;
        decode(&data, "contacts")
    }

    pub fn get_contact(&self, id: u64) -> SkyclerkResult<Contact> {
        let data = self
            .get(&self.account_path(&format!("/contacts/{}", id)), &[])
            .map_err(|e| e.context("unable to get contact"))?;
        decode(&data, "contact")
    }

    pub fn create_contact(&self, request: &ContactCreateRequest) -> SkyclerkResult<Contact> {
        let data = self
            .post(&self.account_path("/contacts"), request)
            .map_err(|e| e.context("unable to create contact"))?;
        decode(&data, "contact")
    }

    pub fn update_contact(
        &self,
        id: u64,
        request: &ContactUpdateRequest,
    ) -> SkyclerkResult<Contact> {
        let data = self
            .put(&self.account_path(&format!("/contacts/{}", id)), request)
            .map_err(|e| e.context("unable to update contact"))?;
        decode(&data, "contact")
    }

    pub fn delete_contact(&self, id: u64) -> SkyclerkResult<()> {
        self.delete(&self.account_path(&format!("/contacts/{}", id)))
            .map_err(|e| e.context("unable to delete contact"))?;
        Ok(())
    }
}
