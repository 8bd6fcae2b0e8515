//! CLI error presentation and exit codes.

use colored::Colorize;
use ontoqual_api::ApiError;
use std::fmt;
use std::process;

pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Error from the pipeline layer.
    Api(ApiError),
    /// Report serialization failure.
    Output(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Api(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Output(msg) => write!(f, "{} {msg}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<ApiError> for CliError {
    fn from(e: ApiError) -> Self {
        CliError::Api(e)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = std::result::Result<T, CliError>;

/// Print the error to stderr and exit with the matching code.
/// Bad request parameters are usage errors; everything else is a plain
/// failure.
pub fn exit_with_error(e: CliError) -> ! {
    eprintln!("{e}");
    let code = match &e {
        CliError::Api(ApiError::Configuration(_)) => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code);
}
