//! Account and billing models

use serde::{Deserialize, Serialize};

/// A Skyclerk account (a set of books)
///
/// The whole record is sent back on update, so it serializes every field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: u64,
    pub owner_id: u64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub locale: String,
    pub currency: String,
    pub last_activity: String,
}

/// Billing details for the current account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Billing {
    pub id: u64,
    pub payment_processor: String,
    pub subscription: String,
    pub status: String,
    pub trial_expire: String,
    pub card_brand: String,
    pub card_last4: String,
    pub card_exp_month: u32,
    pub card_exp_year: u32,
    pub current_period_start: String,
    pub current_period_end: String,
}
