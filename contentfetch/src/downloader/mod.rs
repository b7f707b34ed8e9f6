//! Resumable downloader.
//!
//! This module implements the retrieval pipeline:
//!
//! - offset validation against the declared content size
//! - scheme dispatch (`file` → local copy, anything else → remote fetch)
//! - a HEAD size probe reconciled against the declared size
//! - a byte-range GET resumed from the destination's current length
//! - chunked streaming copy with progress events and cancellation checks
//!
//! Calls are synchronous and blocking; each call builds its own HTTP
//! client and owns the destination exclusively until it returns.

mod copy;
mod http;
mod local;

use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use url::Url;

use crate::cancel::CancelToken;
use crate::config::DownloadConfig;
use crate::content::ContentFile;
use crate::error::{DownloadError, DownloadResult, DownloadStatus};
use crate::progress::{DownloadProgress, Operation, ProgressObserver};
use crate::sink::ContentSink;

/// Resumable content downloader.
///
/// Holds tuning configuration and registered progress observers. One
/// `Downloader` may serve many calls, but each call is independent: no
/// state is shared between them beyond this configuration.
#[derive(Default)]
pub struct Downloader {
    config: DownloadConfig,
    observers: Vec<ProgressObserver>,
}

impl Downloader {
    /// Create a downloader with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a downloader with custom settings.
    pub fn with_config(config: DownloadConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Get the active configuration.
    pub fn config(&self) -> &DownloadConfig {
        &self.config
    }

    /// Register a progress observer.
    ///
    /// Observers are invoked synchronously after each chunk is written;
    /// they must not block indefinitely or they stall the download loop.
    pub fn on_progress<F>(&mut self, observer: F)
    where
        F: Fn(&DownloadProgress<'_>) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Query the total size of a remote resource via a HEAD probe.
    pub fn remote_size(&self, url: &str) -> DownloadResult<u64> {
        let client = http::build_client(self.config.timeout);
        http::probe_size(&client, url)
    }

    /// One-shot full-stream copy: plain GET, no resume, no size check,
    /// no progress events.
    ///
    /// Cancellation is still honored at chunk boundaries and reported as
    /// [`DownloadStatus::Cancelled`]; an unsuccessful response is an
    /// error, the same convention as the ranged entry points.
    pub fn fetch_to_writer<W>(
        &self,
        url: &str,
        writer: &mut W,
        cancel: &CancelToken,
    ) -> DownloadResult<DownloadStatus>
    where
        W: Write + ?Sized,
    {
        let client = http::build_client(self.config.timeout);
        let mut response = http::send_get(&client, url)?;

        let (_, status) =
            copy::copy_chunks(&mut response, writer, self.config.chunk_size, cancel, |_| {})?;
        Ok(status)
    }

    /// Resume-aware download into a destination file.
    ///
    /// Inspects the destination's current state:
    /// - absent → create it and fetch from offset 0
    /// - length equals the declared size → already complete, no network
    ///   operation is performed
    /// - length below the declared size → resume from the current length
    /// - length above the declared size → truncate and restart from 0
    ///
    /// The file handle is scoped to this call: opened, used, and closed
    /// before returning. On [`DownloadStatus::Completed`] the file's
    /// length equals the declared content size.
    pub fn download_to_file(
        &self,
        dest: &Path,
        content: &ContentFile,
        cancel: &CancelToken,
    ) -> DownloadResult<DownloadStatus> {
        let (mut file, start) = if dest.exists() {
            let length = dest.metadata()?.len();

            if length == content.size {
                tracing::debug!(
                    path = %dest.display(),
                    size = length,
                    "destination already complete"
                );
                return Ok(DownloadStatus::Completed);
            }

            let mut file = OpenOptions::new().write(true).open(dest)?;
            if length > content.size {
                tracing::warn!(
                    path = %dest.display(),
                    length,
                    expected = content.size,
                    "destination longer than expected, truncating and restarting"
                );
                ContentSink::truncate(&mut file)?;
                (file, 0)
            } else {
                tracing::debug!(
                    path = %dest.display(),
                    resume_from = length,
                    expected = content.size,
                    "resuming partial destination"
                );
                file.seek(SeekFrom::End(0))?;
                (file, length)
            }
        } else {
            (File::create(dest)?, 0)
        };

        // Covers zero-size content on a fresh or truncated destination.
        if start == content.size {
            return Ok(DownloadStatus::Completed);
        }

        self.download_to_stream(&mut file, content, start, cancel)
    }

    /// Core routine: download into an open sink starting at `start_offset`.
    ///
    /// Validates the offset, dispatches on the source's URL scheme, and
    /// for remote sources runs the probe/reconcile/ranged-fetch protocol.
    /// Unrecognized schemes take the remote branch and fail at the first
    /// request.
    pub fn download_to_stream<S>(
        &self,
        sink: &mut S,
        content: &ContentFile,
        start_offset: u64,
        cancel: &CancelToken,
    ) -> DownloadResult<DownloadStatus>
    where
        S: ContentSink + ?Sized,
    {
        if start_offset >= content.size {
            return Err(DownloadError::InvalidOffset {
                offset: start_offset,
                size: content.size,
            });
        }

        if let Ok(parsed) = Url::parse(&content.source) {
            if parsed.scheme() == "file" {
                return local::copy_local(
                    &parsed,
                    sink,
                    content,
                    &self.config,
                    cancel,
                    &self.observers,
                );
            }
        }

        self.fetch_ranged(sink, content, start_offset, cancel)
    }

    /// Remote ranged fetch: probe, reconcile, ranged GET, streamed copy.
    fn fetch_ranged<S>(
        &self,
        sink: &mut S,
        content: &ContentFile,
        start_offset: u64,
        cancel: &CancelToken,
    ) -> DownloadResult<DownloadStatus>
    where
        S: ContentSink + ?Sized,
    {
        let url = &content.source;
        let client = http::build_client(self.config.timeout);

        let server_size = http::probe_size(&client, url)?;
        if server_size != content.size {
            return Err(DownloadError::SizeMismatch {
                url: url.clone(),
                expected: content.size,
                actual: server_size,
            });
        }

        tracing::debug!(
            url = %url,
            start = start_offset,
            total = server_size,
            "starting ranged fetch"
        );

        let mut response = http::send_ranged(&client, url, start_offset, server_size - 1)?;

        let mut progress = DownloadProgress::new(content, start_offset, Operation::Download);
        let observers = &self.observers;
        let (_, status) = copy::copy_chunks(
            &mut response,
            sink,
            self.config.chunk_size,
            cancel,
            |bytes| {
                progress.advance(bytes);
                for observer in observers {
                    observer(&progress);
                }
            },
        )?;

        Ok(status)
    }
}
