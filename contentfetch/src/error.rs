//! Error types and call outcomes for download operations.

use std::io;

use thiserror::Error;

/// Result type for download operations.
pub type DownloadResult<T> = Result<T, DownloadError>;

/// How a download call ended.
///
/// Cancellation is not an error: a cancelled transfer stops at a chunk
/// boundary and leaves the destination at a valid resume point. Both the
/// ranged-fetch and simple-copy entry points use this one convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    /// The source was exhausted; all available bytes were written.
    Completed,
    /// Cancellation was observed before the next chunk read.
    Cancelled,
}

/// Errors that can occur during a download.
///
/// Every error is raised synchronously to the immediate caller; there is
/// no retry or partial-failure recovery inside this crate.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Requested resume offset is at or beyond the expected total size.
    #[error("invalid start offset {offset} for content of {size} bytes")]
    InvalidOffset { offset: u64, size: u64 },

    /// The metadata probe failed or advertised no usable content length.
    #[error("size probe failed for {url}: {reason}")]
    SizeProbeFailed { url: String, reason: String },

    /// The probed remote size disagrees with the declared content size.
    #[error("size mismatch for {url}: expected {expected} bytes, server reports {actual}")]
    SizeMismatch {
        url: String,
        expected: u64,
        actual: u64,
    },

    /// The download request did not indicate success.
    #[error("download failed for {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    /// I/O error from the underlying file system.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
