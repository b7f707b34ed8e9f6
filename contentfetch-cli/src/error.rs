//! CLI error types.

use std::fmt;

use contentfetch::DownloadError;

/// Errors surfaced to the user by the CLI.
#[derive(Debug)]
pub enum CliError {
    /// The download itself failed.
    Download(DownloadError),
    /// Could not install the Ctrl-C handler.
    Signal(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Download(e) => write!(f, "{}", e),
            Self::Signal(reason) => write!(f, "failed to install signal handler: {}", reason),
        }
    }
}

impl std::error::Error for CliError {}

impl From<DownloadError> for CliError {
    fn from(e: DownloadError) -> Self {
        Self::Download(e)
    }
}
