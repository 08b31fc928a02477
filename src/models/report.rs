//! Profit and loss report models

use serde::{Deserialize, Serialize};

/// Totals for a period, optionally broken down by label, category or contact
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PnlReport {
    pub income: f64,
    pub expense: f64,
    pub profit: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub breakdown: Vec<PnlBreakdown>,
}

/// One line of a report breakdown
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PnlBreakdown {
    pub name: String,
    pub amount: f64,
}
