//! CLI error handling
//!
//! Every failure maps to one line on stderr and a fixed process exit code.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use mcvol_sampler::SamplerError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Too Many Arguments")]
    TooManyArguments,

    #[error("Too Few Arguments")]
    TooFewArguments,

    #[error("Invalid Threads Number")]
    InvalidThreads,

    #[error("Invalid Input Filename")]
    InvalidInput,

    #[error("Invalid Iterations Number")]
    InvalidIterations,

    #[error("Unknown Argument")]
    UnknownArgument,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Sampling failed: {0}")]
    Sampling(#[from] SamplerError),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Process exit code for this error.
    ///
    /// The argument-count errors are the unsigned forms of `-1` and `-2`.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::TooManyArguments => 255,
            CliError::TooFewArguments => 254,
            CliError::InvalidThreads => 1,
            CliError::InvalidInput => 2,
            CliError::InvalidIterations => 3,
            CliError::UnknownArgument => 4,
            CliError::Config(_) => 5,
            CliError::Output(_) | CliError::Sampling(_) => 6,
        }
    }

    /// Maps an argument parsing failure.
    ///
    /// Returns `None` for `--help` and `--version`, which clap prints itself.
    pub fn from_clap(err: &clap::Error) -> Option<Self> {
        match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
            ErrorKind::ArgumentConflict | ErrorKind::TooManyValues => {
                Some(CliError::TooManyArguments)
            }
            ErrorKind::MissingRequiredArgument
            | ErrorKind::TooFewValues
            | ErrorKind::WrongNumberOfValues
            | ErrorKind::InvalidValue => Some(CliError::TooFewArguments),
            ErrorKind::UnknownArgument => match err.get(ContextKind::InvalidArg) {
                // A bare value with no flag in front of it
                Some(ContextValue::String(arg)) if !arg.starts_with('-') => {
                    Some(CliError::TooManyArguments)
                }
                _ => Some(CliError::UnknownArgument),
            },
            ErrorKind::ValueValidation => Some(CliError::Config(ConfigError::InvalidArgument(
                err.render().to_string().lines().next().unwrap_or_default().to_string(),
            ))),
            _ => Some(CliError::UnknownArgument),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;

    fn parse_err(argv: &[&str]) -> Option<CliError> {
        let err = Args::try_parse_from(argv).unwrap_err();
        CliError::from_clap(&err)
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::TooManyArguments.exit_code(), 255);
        assert_eq!(CliError::TooFewArguments.exit_code(), 254);
        assert_eq!(CliError::InvalidThreads.exit_code(), 1);
        assert_eq!(CliError::InvalidInput.exit_code(), 2);
        assert_eq!(CliError::InvalidIterations.exit_code(), 3);
        assert_eq!(CliError::UnknownArgument.exit_code(), 4);
        assert_eq!(
            CliError::Config(ConfigError::InvalidChunkSize(0)).exit_code(),
            5
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(CliError::TooManyArguments.to_string(), "Too Many Arguments");
        assert_eq!(CliError::TooFewArguments.to_string(), "Too Few Arguments");
        assert_eq!(CliError::InvalidThreads.to_string(), "Invalid Threads Number");
        assert_eq!(CliError::InvalidInput.to_string(), "Invalid Input Filename");
        assert_eq!(
            CliError::InvalidIterations.to_string(),
            "Invalid Iterations Number"
        );
    }

    #[test]
    fn test_missing_output_is_too_few() {
        let err = parse_err(&["mcvol", "--input", "in.txt"]);
        assert!(matches!(err, Some(CliError::TooFewArguments)));
    }

    #[test]
    fn test_flag_without_value_is_too_few() {
        let err = parse_err(&["mcvol", "--output", "out.txt", "--input"]);
        assert!(matches!(err, Some(CliError::TooFewArguments)));
    }

    #[test]
    fn test_repeated_flag_is_too_many() {
        let err = parse_err(&[
            "mcvol", "--input", "a", "--input", "b", "--output", "c",
        ]);
        assert!(matches!(err, Some(CliError::TooManyArguments)));
    }

    #[test]
    fn test_stray_value_is_too_many() {
        let err = parse_err(&["mcvol", "--input", "a", "--output", "b", "extra"]);
        assert!(matches!(err, Some(CliError::TooManyArguments)));
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse_err(&["mcvol", "--input", "a", "--output", "b", "--fast"]);
        assert!(matches!(err, Some(CliError::UnknownArgument)));
    }

    #[test]
    fn test_bad_seed_is_config_error() {
        let err = parse_err(&["mcvol", "--input", "a", "--output", "b", "--seed", "x"]);
        assert!(matches!(err, Some(CliError::Config(_))));
    }

    #[test]
    fn test_help_is_not_an_error() {
        assert!(parse_err(&["mcvol", "--help"]).is_none());
    }
}
