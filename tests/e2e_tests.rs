//! End-to-end tests for the `gridwar` binary
//!
//! These tests run the compiled binary and check the process boundary:
//! - which stream receives usage text and error messages
//! - exit codes for help, success and malformed input
//!
//! Parsing details are covered by the unit tests in `src/cli`.

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use rstest::rstest;

    fn gridwar() -> Command {
        let mut cmd = Command::cargo_bin("gridwar").unwrap();
        cmd.env_remove("RUST_LOG");
        cmd
    }

    #[rstest]
    #[case::defaults(&[], "board: 10x10")]
    #[case::width(&["--width", "5"], "board: 5x10")]
    #[case::equals_form(&["--width=12", "--height=8"], "board: 12x8")]
    #[case::negative(&["--height", "-3"], "board: 10x-3")]
    fn test_prints_board(#[case] args: &[&str], #[case] expected: &str) {
        gridwar()
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }

    #[test]
    fn test_help_prints_usage_and_exits() {
        gridwar()
            .args(["--width", "5", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--width <WIDTH>"))
            .stdout(predicate::str::contains("--height <HEIGHT>"))
            .stdout(predicate::str::contains("--help"))
            .stdout(predicate::str::contains("board:").not())
            .stdout(predicate::str::ends_with("\n"))
            .stdout(predicate::str::ends_with("\n\n").not())
            .stderr(predicate::str::is_empty());
    }

    #[rstest]
    #[case::invalid_value(&["--width", "abc"], "invalid value 'abc' for '--width'")]
    #[case::missing_value(&["--height"], "missing value for '--height'")]
    #[case::unknown_option(&["--unknown"], "unknown option '--unknown'")]
    #[case::unexpected_argument(&["board"], "unexpected argument 'board'")]
    #[case::escape(&["--", "--width", "5"], "unknown option '--'")]
    #[case::flag_with_value(&["--help=yes"], "option '--help' takes no value")]
    fn test_malformed_arguments(#[case] args: &[&str], #[case] message: &str) {
        gridwar()
            .args(args)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(format!("Error: {}", message)))
            .stderr(predicate::str::contains("Usage:"));
    }
}
