//! OAuth password-grant payloads

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Grant type sent with every login
pub const PASSWORD_GRANT: &str = "password";

/// Body posted to `/oauth/token`; the password is wiped on drop
#[derive(Debug, Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub grant_type: String,
    pub client_id: String,
}

impl LoginRequest {
    /// Build a password-grant request
    pub fn password(
        username: impl Into<String>,
        password: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            grant_type: PASSWORD_GRANT.to_string(),
            client_id: client_id.into(),
        }
    }
}

/// Token returned by `/oauth/token`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: u64,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_grant_body() {
        let req = LoginRequest::password("me@example.com", "hunter22", "abc");
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["username"], "me@example.com");
        assert_eq!(json["password"], "hunter22");
        assert_eq!(json["grant_type"], "password");
        assert_eq!(json["client_id"], "abc");
    }
}
