//! Current account and billing

use super::client::{decode, Client};
use crate::error::SkyclerkResult;
use crate::models::{Account, Billing};

impl Client {
    pub fn get_account(&self) -> SkyclerkResult<Account> {
        let data = self
            .get(&self.account_path("/account"), &[])
            .map_err(|e| e.context("unable to get account"))?;
        decode(&data, "account")
    }

    /// Replace the account record with `account`
    pub fn update_account(&self, account: &Account) -> SkyclerkResult<Account> {
        let data = self
            .put(&self.account_path("/account"), account)
            .map_err(|e| e.context("unable to update account"))?;
        decode(&data, "account")
    }

    pub fn get_billing(&self) -> SkyclerkResult<Billing> {
        let data = self
            .get(&self.account_path("/account/billing"), &[])
            .map_err(|e| e.context("unable to get billing"))?;
        decode(&data, "billing")
    }
}
