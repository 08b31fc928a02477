//! Account activity log

use super::client::{decode, Client, Params};
use crate::error::SkyclerkResult;
use crate::models::Activity;

impl Client {
    pub fn get_activities(&self, params: &Params<'_>) -> SkyclerkResult<Vec<Activity>> {
        let data = self
            .get(&self.account_path("/activities"), params)
            .map_err(|e| e.context("unable to get activities"))?;
        decode(&data, "activities")
    }
}
