//! Account users and invitations

use super::client::{decode, Client};
use crate::error::SkyclerkResult;
use crate::models::{Invite, InviteCreateRequest, User};

impl Client {
    pub fn get_users(&self) -> SkyclerkResult<Vec<User>> {
        let data = self
            .get(&self.account_path("/users"), &[])
            .map_err(|e| e.context("unable to get users"))?;
        decode(&data, "users")
    }

    /// Remove a user's access to the current account
    pub fn remove_user(&self, id: u64) -> SkyclerkResult<()> {
        self.delete(&self.account_path(&format!("/users/{}", id)))
            .map_err(|e| e.context("unable to remove user"))?;
        Ok(())
    }

    pub fn get_invites(&self) -> SkyclerkResult<Vec<Invite>> {
        let data = self
            .get(&self.account_path("/users/invite"), &[])
            .map_err(|e| e.context("unable to get invites"))?;
        decode(&data, "invites")
    }

    pub fn create_invite(&self, request: &InviteCreateRequest) -> SkyclerkResult<Invite> {
        let data = self
            .post(&self.account_path("/users/invite"), request)
            .map_err(|e| e.context("unable to create invite"))?;
        decode(&data, "invite")
    }

    /// Cancel a pending invitation; note the singular `/user-invite` path
    pub fn cancel_invite(&self, id: u64) -> SkyclerkResult<()> {
        self.delete(&self.account_path(&format!("/user-invite/{}", id)))
            .map_err(|e| e.context("unable to cancel invite"))?;
        Ok(())
    }
}
