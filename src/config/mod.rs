//! Configuration module for the Skyclerk CLI
//!
//! This module provides configuration management including:
//! - config directory resolution
//! - token and default account persistence
//! - secret masking for display

pub mod paths;
pub mod settings;

pub use paths::ConfigPaths;
pub use settings::{mask_string, Config, DEFAULT_API_URL};
