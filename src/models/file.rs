//! Uploaded file model

use serde::{Deserialize, Serialize};

/// A file or receipt stored on the server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    pub id: u64,
    pub account_id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub size: i64,
    pub url: String,
    #[serde(rename = "thumb_600_by_600_url")]
    pub thumb_600_by_600: String,
    pub created_at: String,
    pub updated_at: String,
}
