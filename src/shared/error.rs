use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// An empty cache and a missing requested package are both valid outcomes,
/// but scripts need to tell them apart from each other and from real failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// At least one coordinate was extracted and rendered
    Success = 0,
    /// The listing produced no package artifacts (or could not be obtained)
    NoPackagesFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (bad URL, config error, file I/O error, etc.)
    ApplicationError = 3,
    /// `--package` matched nothing in the extracted coordinates
    PackageNotFound = 4,
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
            ExitCode::NoPackagesFound => write!(f, "No Packages Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::PackageNotFound => write!(f, "Package Not Found (4)"),
        }
    }
}

/// User-facing failures of an inventory run.
///
/// Per-artifact parse failures never appear here; those artifacts are skipped.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Cannot parse repository URL: {url}\n\n💡 Hint: Expected format: https://host/artifactory/repo-name")]
    InvalidRepositoryUrl { url: String },

    #[error("Authentication failed for {url}\n\n💡 Hint: Please check your username and password")]
    AuthenticationFailed { url: String },

    #[error("Repository manager returned HTTP {status} for {url}\nDetails: {details}")]
    UpstreamStatus {
        url: String,
        status: u16,
        details: String,
    },

    #[error("Malformed listing response from {url}\nDetails: {details}")]
    MalformedListing { url: String, details: String },

    #[error("Both a username and a password must be provided together\n\n💡 Hint: Pass --password or set CACHE_INVENTORY_PASSWORD")]
    IncompleteCredentials,

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid config: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
