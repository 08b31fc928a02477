//! Ledger entries, the ledger summary and the ledger P&L

use super::client::{decode, Client, Params};
use crate::error::SkyclerkResult;
use crate::models::{Ledger, LedgerCreateRequest, LedgerSummary, LedgerUpdateRequest, PnlReport};

impl Client {
    /// A page of ledger entries; `limit`, `page`, `sort` and filters go in `params`
    pub fn get_ledgers(&self, params: &Params<'_>) -> SkyclerkResult<Vec<Ledger>> {
        let data = self
            .get(&self.account_path("/ledger"), params)
            .map_err(|e| e.context("unable to get ledgers"))?;
        decode(&data, "ledgers")
    }

    pub fn get_ledger(&self, id: u64) -> SkyclerkResult<Ledger> {
        let data = self
            .get(&self.account_path(&format!("/ledger/{}", id)), &[])
            .map_err(|e| e.context("unable to get ledger"))?;
        decode(&data, "ledger")
    }

    pub fn create_ledger(&self, request: &LedgerCreateRequest) -> SkyclerkResult<Ledger> {
        let data = self
            .post(&self.account_path("/ledger"), request)
            .map_err(|e| e.context("unable to create ledger"))?;
        decode(&data, "ledger")
    }

    pub fn update_ledger(&self, id: u64, request: &LedgerUpdateRequest) -> SkyclerkResult<Ledger> {
        let data = self
            .put(&self.account_path(&format!("/ledger/{}", id)), request)
            .map_err(|e| e.context("unable to update ledger"))?;
        decode(&data, "ledger")
    }

    pub fn delete_ledger(&self, id: u64) -> SkyclerkResult<()> {
        self.delete(&self.account_path(&format!("/ledger/{}", id)))
            .map_err(|e| e.context("unable to delete ledger"))?;
        Ok(())
    }

    /// Entry counts by year, label and category
    pub fn get_ledger_summary(&self, params: &Params<'_>) -> SkyclerkResult<LedgerSummary> {
        let data = self
            .get(&self.account_path("/ledger-summary"), params)
            .map_err(|e| e.context("unable to get ledger summary"))?;
        decode(&data, "summary")
    }

    /// Income, expense and profit over the entries matching `params`
    pub fn get_ledger_pl(&self, params: &Params<'_>) -> SkyclerkResult<PnlReport> {
        let data = self
            .get(&self.account_path("/ledger-pl-summary"), params)
            .map_err(|e| e.context("unable to get ledger P&L"))?;
        decode(&data, "P&L")
    }
}
