//! Ledger entry models
//!
//! A ledger entry is a single income (positive amount) or expense (negative
//! amount) line with its contact, category, labels and attached files.

use serde::{Deserialize, Serialize};

use super::{Category, Contact, File, Label};

/// A financial transaction entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ledger {
    pub id: u64,
    pub account_id: u64,
    pub added_by_id: u64,
    pub amount: f64,
    pub date: String,
    pub contact: Contact,
    pub category: Category,
    pub labels: Vec<Label>,
    pub files: Vec<File>,
    pub note: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Ledger {
    /// Comma separated label names
    pub fn label_names(&self) -> String {
        self.labels
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Body for `POST /ledger`
#[derive(Debug, Clone, Default, Serialize)]
pub struct LedgerCreateRequest {
    pub amount: f64,
    pub date: String,
    pub contact_id: u64,
    pub category_id: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Body for `PUT /ledger/{id}`; only the fields that are `Some` are sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct LedgerUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Entry counts grouped by year, label and category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerSummary {
    pub years: Vec<LedgerSummaryYear>,
    pub labels: Vec<LedgerSummaryItem>,
    pub categories: Vec<LedgerSummaryItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerSummaryYear {
    pub year: i32,
    pub count: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerSummaryItem {
    pub id: u64,
    pub name: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_nested_entry() {
        let json = r#"{
            "id": 10,
            "amount": -45.5,
            "date": "2026-01-15",
            "contact": {"id": 2, "name": "Office Depot"},
            "category": {"id": 4, "name": "Supplies", "type": "expense"},
            "labels": [{"id": 1, "name": "q1"}, {"id": 2, "name": "tax"}],
            "note": "printer paper"
        }"#;

        let ledger: Ledger = serde_json::from_str(json).unwrap();
        assert_eq!(ledger.id, 10);
        assert_eq!(ledger.amount, -45.5);
        assert_eq!(ledger.contact.name, "Office Depot");
        assert_eq!(ledger.category.category_type, "expense");
        assert_eq!(ledger.label_names(), "q1, tax");
        assert!(ledger.files.is_empty());
    }

    #[test]
    fn test_create_omits_empty_optionals() {
        let req = LedgerCreateRequest {
            amount: 100.0,
            date: "2026-02-01".into(),
            contact_id: 3,
            category_id: 5,
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("label_ids").is_none());
        assert!(json.get("note").is_none());
        assert_eq!(json["contact_id"], 3);
    }

    #[test]
    fn test_update_sends_explicit_zero() {
        let req = LedgerUpdateRequest {
            amount: Some(0.0),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"amount":0.0}"#);
    }
}
