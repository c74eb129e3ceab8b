// CLI module
// Command-line argument parsing and usage text

mod args;

pub use args::CliArgs;

use crate::types::{Configuration, OptionsError};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use tracing::debug;

/// Program name handed to clap in front of the caller's arguments
const PROGRAM_NAME: &str = "gridwar";

/// clap's end-of-options marker, rejected as an unknown option
const ESCAPE: &str = "--";

/// Parse board options from command-line tokens
///
/// `arguments` must not include the program name. Options not present keep
/// their defaults. Nothing is printed: when `--help` is present the caller
/// finds `help_requested()` set and prints the returned usage text itself.
///
/// # Errors
///
/// - [`OptionsError::InvalidValue`] when `--width` or `--height` gets a
///   token that is not an `i32`
/// - [`OptionsError::MissingValue`] when a value option has nothing after it
/// - [`OptionsError::UnknownOption`] for an unrecognized option name,
///   including a bare `--`
/// - [`OptionsError::UnexpectedValue`] for a value attached to `--help`
/// - [`OptionsError::UnexpectedArgument`] for a bare positional token
pub fn parse<I, T>(arguments: I) -> Result<(Configuration, String), OptionsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let tokens = attach_hyphen_values(arguments.into_iter().map(Into::into).collect());

    // A bare `--` is not an end-of-options marker here; everything before it
    // still gets checked first so errors come out in command-line order
    let escape = tokens.iter().position(|t| t == ESCAPE);
    let head = &tokens[..escape.unwrap_or(tokens.len())];

    let argv = std::iter::once(OsString::from(PROGRAM_NAME)).chain(head.iter().cloned());
    let args = CliArgs::try_parse_from(argv)
        .map_err(OptionsError::from)
        .and_then(|args| match escape {
            Some(_) => Err(OptionsError::unknown_option(ESCAPE, None)),
            None => Ok(args),
        })
        .map_err(|error| {
            debug!(%error, "rejected command line");
            error
        })?;

    let config = Configuration::from(args);
    debug!(
        width = config.width(),
        height = config.height(),
        help_requested = config.help_requested(),
        "parsed board options"
    );

    Ok((config, usage()))
}

/// Glue `--width -abc` into `--width=-abc`
///
/// clap would otherwise split `-abc` into short flags and report `-a`, which
/// the user never typed. Attached, the token is parsed as the option's value.
fn attach_hyphen_values(tokens: Vec<OsString>) -> Vec<OsString> {
    let command = CliArgs::command();
    let value_options: Vec<String> = command
        .get_arguments()
        .filter(|arg| arg.get_action().takes_values())
        .filter_map(|arg| arg.get_long())
        .map(|long| format!("--{long}"))
        .collect();

    let mut attached = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.into_iter().peekable();
    while let Some(token) = tokens.next() {
        let is_value_option = token
            .to_str()
            .is_some_and(|t| value_options.iter().any(|o| o == t));
        let hyphen_value = tokens
            .peek()
            .and_then(|next| next.to_str())
            .filter(|next| next.starts_with('-') && !next.starts_with("--"))
            .map(str::to_string);

        match hyphen_value {
            Some(value) if is_value_option => {
                tokens.next();
                let mut joined = token;
                joined.push("=");
                joined.push(value);
                attached.push(joined);
            }
            _ => attached.push(token),
        }
    }
    attached
}

/// Usage text describing every recognized option
pub fn usage() -> String {
    CliArgs::command().render_help().to_string()
}
