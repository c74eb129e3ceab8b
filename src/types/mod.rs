//! Types module
//!
//! Contains the data structures shared by the loader and its callers:
//! - `config`: the parsed board configuration
//! - `error`: error types for the options loader

pub mod config;
pub mod error;

pub use config::Configuration;
pub use error::OptionsError;
