//! Local-scheme copy path.
//!
//! Local files are assumed atomically available and cheap to re-copy, so
//! this path ignores any requested start offset: the destination is reset
//! to empty and the whole source file is copied. Progress events are
//! emitted with [`Operation::LocalCopy`] and cancellation is honored at
//! chunk boundaries, matching the remote path.

use std::fs::File;

use url::Url;

use super::copy::copy_chunks;
use crate::cancel::CancelToken;
use crate::config::DownloadConfig;
use crate::content::ContentFile;
use crate::error::{DownloadError, DownloadResult, DownloadStatus};
use crate::progress::{DownloadProgress, Operation, ProgressObserver};
use crate::sink::ContentSink;

/// Copy a `file` scheme source into the sink in full.
pub(crate) fn copy_local<S>(
    url: &Url,
    sink: &mut S,
    content: &ContentFile,
    config: &DownloadConfig,
    cancel: &CancelToken,
    observers: &[ProgressObserver],
) -> DownloadResult<DownloadStatus>
where
    S: ContentSink + ?Sized,
{
    let path = url
        .to_file_path()
        .map_err(|_| DownloadError::DownloadFailed {
            url: content.source.clone(),
            reason: "not a valid local file URL".to_string(),
        })?;

    tracing::debug!(path = %path.display(), "copying local source in full");

    sink.truncate()?;
    let mut source = File::open(&path)?;

    let mut progress = DownloadProgress::new(content, 0, Operation::LocalCopy);
    let (_, status) = copy_chunks(&mut source, sink, config.chunk_size, cancel, |bytes| {
        progress.advance(bytes);
        for observer in observers {
            observer(&progress);
        }
    })?;

    Ok(status)
}
