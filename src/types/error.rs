//! Error types for the board options loader
//!
//! Every failure the loader can report is a malformed command line. None of
//! them are retried; the caller prints the message together with the usage
//! text and exits non-zero.
//!
//! # Error Categories
//!
//! - **Value Errors**: a value-bearing option got a token that is not an integer,
//!   or got no token at all
//! - **Option Errors**: an option name that the loader does not recognize, or a
//!   value attached to a flag that takes none
//! - **Argument Errors**: a bare token where no positional arguments are accepted

use clap::error::{ContextKind, ContextValue, ErrorKind};
use thiserror::Error;

/// Main error type for the options loader
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A value-bearing option received a token that fails integer conversion
    ///
    /// Out-of-range integers land here too.
    #[error("invalid value '{value}' for '{option}': expected an integer")]
    InvalidValue {
        /// Option spelling, e.g. `--width`
        option: String,
        /// The rejected token
        value: String,
    },

    /// A `-`-prefixed token that matches no recognized option
    #[error("unknown option '{option}'{}", suggestion.as_ref().map(|s| format!(" (did you mean '{}'?)", s)).unwrap_or_default())]
    UnknownOption {
        /// The token as given on the command line
        option: String,
        /// Closest recognized option, if one is similar enough
        suggestion: Option<String>,
    },

    /// A value-bearing option appeared without a following value
    #[error("missing value for '{option}'")]
    MissingValue {
        /// Option spelling, e.g. `--height`
        option: String,
    },

    /// A value was attached to a flag, e.g. `--help=yes`
    #[error("option '{option}' takes no value, got '{value}'")]
    UnexpectedValue {
        /// Flag spelling, e.g. `--help`
        option: String,
        /// The attached value
        value: String,
    },

    /// A bare token was found; the loader takes no positional arguments
    #[error("unexpected argument '{argument}'")]
    UnexpectedArgument {
        /// The stray token
        argument: String,
    },

    /// Any other command line clap refuses
    #[error("malformed command line: {reason}")]
    Rejected {
        /// clap's description of the problem
        reason: String,
    },
}

impl OptionsError {
    /// Create an InvalidValue error
    pub fn invalid_value(option: &str, value: &str) -> Self {
        OptionsError::InvalidValue {
            option: option.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an UnknownOption error
    pub fn unknown_option(option: &str, suggestion: Option<&str>) -> Self {
        OptionsError::UnknownOption {
            option: option.to_string(),
            suggestion: suggestion.map(str::to_string),
        }
    }

    /// Create a MissingValue error
    pub fn missing_value(option: &str) -> Self {
        OptionsError::MissingValue {
            option: option.to_string(),
        }
    }

    /// Create an UnexpectedValue error
    pub fn unexpected_value(option: &str, value: &str) -> Self {
        OptionsError::UnexpectedValue {
            option: option.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an UnexpectedArgument error
    pub fn unexpected_argument(argument: &str) -> Self {
        OptionsError::UnexpectedArgument {
            argument: argument.to_string(),
        }
    }
}

// Conversion from clap::Error to OptionsError
impl From<clap::Error> for OptionsError {
    fn from(error: clap::Error) -> Self {
        let arg = context_string(&error, ContextKind::InvalidArg).unwrap_or_default();
        let value = context_string(&error, ContextKind::InvalidValue);

        match error.kind() {
            ErrorKind::UnknownArgument => {
                // clap reports `--name=value` tokens without their value, but strip it anyway
                let token = arg.split('=').next().unwrap_or_default();
                if token.starts_with('-') {
                    let suggestion = context_string(&error, ContextKind::SuggestedArg)
                        .map(|s| s.trim_start_matches('-').to_string())
                        .map(|s| format!("--{s}"));
                    OptionsError::unknown_option(token, suggestion.as_deref())
                } else {
                    OptionsError::unexpected_argument(token)
                }
            }
            // clap uses InvalidValue with an empty value for "a value is required"
            ErrorKind::InvalidValue if value.as_deref().map_or(true, str::is_empty) => {
                OptionsError::missing_value(option_spelling(&arg))
            }
            ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
                OptionsError::invalid_value(option_spelling(&arg), &value.unwrap_or_default())
            }
            ErrorKind::TooManyValues => {
                OptionsError::unexpected_value(option_spelling(&arg), &value.unwrap_or_default())
            }
            kind => OptionsError::Rejected {
                reason: kind.as_str().unwrap_or("unrecognized input").to_string(),
            },
        }
    }
}

/// Pull a single-string context entry out of a clap error
fn context_string(error: &clap::Error, kind: ContextKind) -> Option<String> {
    match error.get(kind)? {
        ContextValue::String(s) => Some(s.clone()),
        ContextValue::Strings(values) => values.first().cloned(),
        _ => None,
    }
}

/// clap renders options as `--width <WIDTH>`; keep only the flag spelling
fn option_spelling(rendered: &str) -> &str {
    rendered.split_whitespace().next().unwrap_or(rendered)
}
