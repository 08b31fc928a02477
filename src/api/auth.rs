//! OAuth endpoints: token exchange, revocation and the authenticated user

use super::client::{decode, Client};
use crate::error::SkyclerkResult;
use crate::models::{LoginRequest, LoginResponse, User};

impl Client {
    /// Exchange email and password for an access token
    ///
    /// This is the only call made without a bearer token.
    pub fn login(
        &self,
        email: &str,
        password: &str,
        client_id: &str,
    ) -> SkyclerkResult<LoginResponse> {
        let request = LoginRequest::password(email, password, client_id);
        let data = self
            .post_no_auth("/oauth/token", &request)
            .map_err(|e| e.context("login failed"))?;
        decode(&data, "login")
    }

    /// Revoke the current access token
    ///
    /// The token travels as a query parameter, not as a header.
    pub fn logout(&self) -> SkyclerkResult<()> {
        self.get("/oauth/logout", &[("access_token", self.access_token())])
            .map_err(|e| e.context("logout failed"))?;
        Ok(())
    }

    /// The user the token belongs to, with every account they can access
    pub fn get_auth_user(&self) -> SkyclerkResult<User> {
        let data = self
            .get("/oauth/me", &[])
            .map_err(|e| e.context("unable to get authenticated user"))?;
        decode(&data, "user")
    }
}
