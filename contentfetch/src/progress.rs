//! Progress reporting for downloads.
//!
//! Progress is delivered synchronously, in-line with the download loop:
//! after each chunk is written the downloader advances
//! [`DownloadProgress::current`] and invokes every registered observer.
//! Observers must not block indefinitely or they stall the transfer.

use crate::content::ContentFile;

/// Progress observer invoked once per chunk during a download.
///
/// Receives the current progress snapshot. Delivery is synchronous and
/// unbuffered; zero or more observers may be registered on a
/// [`Downloader`](crate::Downloader).
pub type ProgressObserver = Box<dyn Fn(&DownloadProgress<'_>) + Send + Sync>;

/// Tag identifying the operation a progress event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Remote ranged fetch over HTTP(S).
    Download,
    /// Full copy from a local `file` scheme source.
    LocalCopy,
}

/// Progress snapshot for one download call.
///
/// Created once per call and advanced in place as chunks arrive; never
/// persisted. Under correct server behavior `current` never exceeds
/// `maximum`, and `maximum` equals the content's declared size for the
/// lifetime of the call.
#[derive(Debug)]
pub struct DownloadProgress<'a> {
    /// The content file this transfer belongs to.
    pub content: &'a ContentFile,
    /// Bytes transferred so far, including any resumed prefix.
    pub current: u64,
    /// Total expected bytes.
    pub maximum: u64,
    /// Which operation produced this event.
    pub operation: Operation,
}

impl<'a> DownloadProgress<'a> {
    /// Create a progress snapshot starting at the given offset.
    pub fn new(content: &'a ContentFile, start: u64, operation: Operation) -> Self {
        Self {
            content,
            current: start,
            maximum: content.size,
            operation,
        }
    }

    /// Advance the transferred byte count by one chunk.
    pub fn advance(&mut self, bytes: u64) {
        self.current += bytes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_new_starts_at_offset() {
        let content = ContentFile::new("https://example.com/a.bin", 1000);
        let progress = DownloadProgress::new(&content, 250, Operation::Download);

        assert_eq!(progress.current, 250);
        assert_eq!(progress.maximum, 1000);
        assert_eq!(progress.operation, Operation::Download);
    }

    #[test]
    fn test_progress_advance() {
        let content = ContentFile::new("https://example.com/a.bin", 1000);
        let mut progress = DownloadProgress::new(&content, 0, Operation::Download);

        progress.advance(100);
        progress.advance(400);

        assert_eq!(progress.current, 500);
    }
}
