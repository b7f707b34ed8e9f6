//! Configuration for the downloader.

use std::time::Duration;

/// Default timeout for HTTP requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 300; // 5 minutes

/// Default chunk size for streaming copies (10 MiB).
///
/// Balances syscall overhead against memory footprint; optimal values are
/// environment-dependent, which is why this is configuration rather than
/// a hard-coded constant.
const DEFAULT_CHUNK_SIZE: usize = 10 * 1024 * 1024;

/// Tuning knobs for a [`Downloader`](crate::Downloader).
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// Size of each read/write chunk during streaming copies.
    pub chunk_size: usize,

    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl DownloadConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chunk size. Values below one byte are clamped to one.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Set the HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
