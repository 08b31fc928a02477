//! Label models

use serde::{Deserialize, Serialize};

/// A free-form tag attached to ledger entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub id: u64,
    pub account_id: u64,
    pub name: String,
    pub count: i64,
}

/// Body for `POST /labels`
#[derive(Debug, Clone, Serialize)]
pub struct LabelCreateRequest {
    pub name: String,
}

/// Body for `PUT /labels/{id}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct LabelUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
