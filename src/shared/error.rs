use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a skipped render apart from a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The graph was rendered
    Success = 0,
    /// The server returned no edges, so nothing was rendered
    EmptyDataset = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (network error, parse error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::EmptyDataset => write!(f, "Empty Dataset (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for fetching and rendering dependency graphs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(
        "Invalid view: {value}\n\n💡 Hint: Use a number from 1 to 5 or one of: \
         arch, debian, gentoo, homebrew, nix"
    )]
    InvalidView { value: String },

    #[error(
        "Invalid endpoint URL: {url}\nDetails: {details}\n\n💡 Hint: Use an absolute \
         http(s) URL such as http://localhost:5000"
    )]
    InvalidEndpoint { url: String, details: String },

    #[error(
        "Dependency server returned status {status} for {url}\n\n💡 Hint: Check that the \
         dependency server is running and the query parameters are valid"
    )]
    ServerStatus { url: String, status: u16 },

    #[error("No nodes generated from data (min_count={min_count}, view={view})")]
    EmptyDataset { min_count: i64, view: String },

    #[error(
        "Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify \
         that the directory exists and you have write permissions"
    )]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for settings and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
