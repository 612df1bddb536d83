//! Shared vocabulary, configuration and error types for the cadence workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod types;
