//! Skyclerk CLI - bookkeeping from the terminal
//!
//! This library provides the pieces behind the `skyclerk` binary: a small
//! blocking client for the Skyclerk REST API, the wire models it speaks,
//! the on-disk login config and the table/JSON rendering of results.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `api`: HTTP transport and one method per API endpoint
//! - `models`: Request and response records
//! - `config`: Config file location, load/save and secret masking
//! - `display`: Table and detail formatting
//! - `cli`: Subcommand definitions and handlers
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,no_run
//! use skyclerk::api::Client;
//!
//! let client = Client::new("https://app.skyclerk.com", "token", 1)?;
//! let entries = client.get_ledgers(&[("limit", "25"), ("page", "1")])?;
//! println!("{} entries", entries.len());
//! # Ok::<(), skyclerk::SkyclerkError>(())
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;

pub use error::{SkyclerkError, SkyclerkResult};
