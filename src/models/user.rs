//! User, profile and invitation models

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::Account;

/// A user with the accounts they belong to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
    pub last_activity: String,
    pub accounts: Vec<Account>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The current user's profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeResponse {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
}

/// Body for `PUT /me`
#[derive(Debug, Clone, Default, Serialize)]
pub struct MeUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Body for `POST /me/change-password`
#[derive(Debug, Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// A pending invitation to join an account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Invite {
    pub id: u64,
    pub account_id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub message: String,
    pub expires_at: String,
    pub created_at: String,
}

/// Body for `POST /users/invite`
#[derive(Debug, Clone, Serialize)]
pub struct InviteCreateRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
