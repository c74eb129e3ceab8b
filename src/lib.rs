//! Gridwar Options Library
//! # Overview
//!
//! This library turns command-line tokens into the board configuration used by
//! the grid simulation. Parsing is pure: it never prints and never exits, so the
//! binary decides how to present help text and errors.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Configuration, OptionsError)
//! - [`cli`] - Argument parsing and usage text
//! - [`logging`] - Diagnostic output for the binary
//!
//! # Options
//!
//! - `--help`: request usage text
//! - `--width <int>`: horizontal board spaces (default 10)
//! - `--height <int>`: vertical board spaces (default 10)
//!
//! ```
//! let (config, _usage) = gridwar_options::parse(["--width", "5"]).unwrap();
//! assert_eq!((config.width(), config.height()), (5, 10));
//! ```

// Module declarations
pub mod cli;
pub mod logging;
pub mod types;

pub use cli::{parse, usage};
pub use types::{Configuration, OptionsError};
