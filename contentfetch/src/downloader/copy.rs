//! Chunked streaming copy with cancellation checks.

use std::io::{Read, Write};

use crate::cancel::CancelToken;
use crate::error::{DownloadResult, DownloadStatus};

/// Copy `reader` into `writer` in fixed-size chunks.
///
/// Cancellation is polled before each read, never mid-chunk; whatever a
/// read returns is written in full with `write_all`, so the destination
/// always reflects exactly the bytes read so far. `on_chunk` is invoked
/// with the chunk length after each write.
///
/// Returns the number of bytes copied and whether the loop ended by
/// source exhaustion or by cancellation.
pub(crate) fn copy_chunks<R, W>(
    reader: &mut R,
    writer: &mut W,
    chunk_size: usize,
    cancel: &CancelToken,
    mut on_chunk: impl FnMut(u64),
) -> DownloadResult<(u64, DownloadStatus)>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = vec![0u8; chunk_size];
    let mut copied = 0u64;

    loop {
        if cancel.is_cancelled() {
            writer.flush()?;
            return Ok((copied, DownloadStatus::Cancelled));
        }

        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }

        writer.write_all(&buffer[..bytes_read])?;
        copied += bytes_read as u64;
        on_chunk(bytes_read as u64);
    }

    writer.flush()?;
    Ok((copied, DownloadStatus::Completed))
}
