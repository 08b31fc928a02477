//! Skyclerk REST API client
//!
//! [`Client`] is the transport; the other modules add one method per endpoint
//! on top of it. Everything under an account lives at `/api/v3/{account}`;
//! the OAuth endpoints in [`auth`] are not account-scoped.

pub mod accounts;
pub mod activities;
pub mod auth;
pub mod categories;
pub mod client;
pub mod contacts;
pub mod files;
pub mod labels;
pub mod ledger;
pub mod me;
pub mod reports;
pub mod users;

pub use client::{Client, ClientBuilder, Params, API_PREFIX, DEFAULT_TIMEOUT};
