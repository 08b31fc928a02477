//! Wire models for the Skyclerk API
//!
//! Plain records mirroring the JSON shapes the server sends and accepts.
//! Read models default every field so a sparse response still decodes;
//! request models use `Option` for fields that are only sent when given.

pub mod account;
pub mod activity;
pub mod auth;
pub mod category;
pub mod contact;
pub mod file;
pub mod label;
pub mod ledger;
pub mod report;
pub mod user;

pub use account::{Account, Billing};
pub use activity::Activity;
pub use auth::{LoginRequest, LoginResponse};
pub use category::{Category, CategoryCreateRequest, CategoryUpdateRequest};
pub use contact::{Contact, ContactCreateRequest, ContactUpdateRequest};
pub use file::File;
pub use label::{Label, LabelCreateRequest, LabelUpdateRequest};
pub use ledger::{
    Ledger, LedgerCreateRequest, LedgerSummary, LedgerSummaryItem, LedgerSummaryYear,
    LedgerUpdateRequest,
};
pub use report::{PnlBreakdown, PnlReport};
pub use user::{
    ChangePasswordRequest, Invite, InviteCreateRequest, MeResponse, MeUpdateRequest, User,
};
