//! Category models

use serde::{Deserialize, Serialize};

/// A ledger category (income or expense)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: u64,
    pub account_id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: String,
    pub count: i64,
}

impl Category {
    /// Category type with its first letter upper-cased ("expense" -> "Expense")
    pub fn type_label(&self) -> String {
        let mut chars = self.category_type.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Body for `POST /categories`
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCreateRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: String,
}

/// Body for `PUT /categories/{id}`; only the fields that are `Some` are sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category_type: Option<String>,
}
