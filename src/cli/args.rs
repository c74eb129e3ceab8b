use crate::types::Configuration;
use clap::{ArgAction, Parser};

/// Board options for the grid simulation
///
/// clap's built-in help and version flags are disabled: `--help` is an
/// ordinary flag here and the caller decides what to do with it.
#[derive(Parser, Debug)]
#[command(name = "gridwar")]
#[command(about = "Board options for the grid simulation", long_about = None)]
#[command(
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct CliArgs {
    /// Print usage text
    #[arg(long = "help", action = ArgAction::SetTrue, help = "produce help message")]
    pub help: bool,

    /// Number of horizontal spaces on the board
    #[arg(
        long = "width",
        value_name = "WIDTH",
        default_value_t = Configuration::DEFAULT_WIDTH,
        allow_negative_numbers = true,
        help = "number of horizontal spaces on board"
    )]
    pub width: i32,

    /// Number of vertical spaces on the board
    #[arg(
        long = "height",
        value_name = "HEIGHT",
        default_value_t = Configuration::DEFAULT_HEIGHT,
        allow_negative_numbers = true,
        help = "number of vertical spaces on board"
    )]
    pub height: i32,
}

impl From<CliArgs> for Configuration {
    fn from(args: CliArgs) -> Self {
        Configuration::new(args.width, args.height, args.help)
    }
}
