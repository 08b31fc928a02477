//! The current user's profile

use super::client::{decode, Client};
use crate::error::SkyclerkResult;
use crate::models::{ChangePasswordRequest, MeResponse, MeUpdateRequest};

impl Client {
    pub fn get_me(&self) -> SkyclerkResult<MeResponse> {
        let data = self
            .get(&self.account_path("/me"), &[])
            .map_err(|e| e.context("unable to get profile"))?;
        decode(&data, "profile")
    }

    pub fn update_me(&self, request: &MeUpdateRequest) -> SkyclerkResult<MeResponse> {
        let data = self
            .put(&self.account_path("/me"), request)
            .map_err(|e| e.context("unable to update profile"))?;
        decode(&data, "profile")
    }

    pub fn change_password(&self, request: &ChangePasswordRequest) -> SkyclerkResult<()> {
        self.post(&self.account_path("/me/change-password"), request)
            .map_err(|e| e.context("unable to change password"))?;
        Ok(())
    }
}
