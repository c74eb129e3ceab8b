//! Board configuration produced by the options loader
//!
//! The configuration is built once per parse and handed to the host
//! application. Fields are private so the value stays as parsed.

use std::fmt;

/// Board dimensions and the help request, as read from the command line
///
/// No range validation is applied: zero and negative dimensions are kept
/// exactly as supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    width: i32,
    height: i32,
    help_requested: bool,
}

impl Configuration {
    /// Number of horizontal board spaces when `--width` is not given
    pub const DEFAULT_WIDTH: i32 = 10;

    /// Number of vertical board spaces when `--height` is not given
    pub const DEFAULT_HEIGHT: i32 = 10;

    pub fn new(width: i32, height: i32, help_requested: bool) -> Self {
        Self {
            width,
            height,
            help_requested,
        }
    }

    /// Number of horizontal board spaces
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of vertical board spaces
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `--help` appeared among the arguments
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT, false)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
