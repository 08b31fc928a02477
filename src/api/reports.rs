//! Profit and loss reports
//!
//! Every report decodes into [`PnlReport`]; the grouped ones fill its
//! breakdown. Date ranges are passed as `start` / `end` params.

use super::client::{decode, Client, Params};
use crate::error::SkyclerkResult;
use crate::models::PnlReport;

impl Client {
    pub fn get_pnl_report(&self, params: &Params<'_>) -> SkyclerkResult<PnlReport> {
        self.pnl("/reports/pnl", params, "P&L report")
    }

    pub fn get_pnl_by_label(&self, params: &Params<'_>) -> SkyclerkResult<PnlReport> {
        self.pnl("/reports/pnl/label", params, "P&L by label")
    }

    pub fn get_pnl_by_category(&self, params: &Params<'_>) -> SkyclerkResult<PnlReport> {
        self.pnl("/reports/pnl/category", params, "P&L by category")
    }

    /// P&L for the current year
    pub fn get_pnl_current(&self) -> SkyclerkResult<PnlReport> {
        self.pnl("/reports/pnl/current", &[], "current P&L")
    }

    pub fn get_income_by_contact(&self, params: &Params<'_>) -> SkyclerkResult<PnlReport> {
        self.pnl("/reports/income/by-contact", params, "income by contact")
    }

    pub fn get_expenses_by_contact(&self, params: &Params<'_>) -> SkyclerkResult<PnlReport> {
        self.pnl("/reports/expenses/by-contact", params, "expenses by contact")
    }

    fn pnl(&self, suffix: &str, params: &Params<'_>, what: &str) -> SkyclerkResult<PnlReport> {
        let data = self
            .get(&self.account_path(suffix), params)
            .map_err(|e| e.context(format!("unable to get {}", what)))?;
        decode(&data, what)
    }
}
