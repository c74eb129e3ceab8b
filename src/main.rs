//! Gridwar CLI
//!
//! Reads the board dimensions from the command line.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --width 12 --height 8
//! cargo run -- --help
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success, including `--help`
//! - 1: Malformed arguments (bad integer, missing value, unknown option)

use gridwar_options::{cli, logging};
use std::process;

fn main() {
    logging::init();

    let (config, usage) = match cli::parse(std::env::args_os().skip(1)) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprint!("{}", cli::usage());
            process::exit(1);
        }
    };

    // Help is the whole purpose of the invocation once requested
    if config.help_requested() {
        print!("{usage}");
        return;
    }

    println!("board: {}", config);
}
