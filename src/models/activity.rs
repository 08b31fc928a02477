//! Activity log model

use serde::{Deserialize, Serialize};

/// One entry of the account activity log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub id: u64,
    pub account_id: u64,
    pub user_id: u64,
    pub ledger_id: u64,
    pub contact_id: u64,
    pub label_id: u64,
    pub category_id: u64,
    pub action: String,
    pub sub_action: String,
    pub amount: f64,
    pub message: String,
    pub created_at: String,
}
