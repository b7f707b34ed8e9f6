//! ContentFetch - Resumable content retrieval for package files
//!
//! This library fetches individual content files identified by a URL
//! (HTTP, HTTPS, or local `file` scheme) into a destination byte sink,
//! reporting per-chunk progress and honoring cooperative cancellation.
//!
//! The central type is [`Downloader`]:
//!
//! - [`Downloader::download_to_file`] — resume-aware entry point that
//!   inspects the destination file's current length and continues an
//!   interrupted transfer where it left off.
//! - [`Downloader::download_to_stream`] — the core ranged-fetch routine
//!   against any [`ContentSink`].
//! - [`Downloader::fetch_to_writer`] — one-shot full-stream copy with no
//!   resume and no size reconciliation.
//!
//! All calls are synchronous and blocking; callers wanting concurrent
//! transfers run separate calls on separate threads with disjoint
//! destinations.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use contentfetch::{CancelToken, ContentFile, Downloader};
//!
//! let content = ContentFile::new("https://example.com/pkg/part1.bin", 1_048_576);
//! let mut downloader = Downloader::new();
//! downloader.on_progress(|p| {
//!     println!("{} / {} bytes", p.current, p.maximum);
//! });
//!
//! let cancel = CancelToken::new();
//! downloader.download_to_file(Path::new("/tmp/part1.bin"), &content, &cancel)?;
//! # Ok::<(), contentfetch::DownloadError>(())
//! ```

pub mod cancel;
pub mod config;
pub mod content;
pub mod downloader;
pub mod error;
pub mod progress;
pub mod sink;

pub use cancel::CancelToken;
pub use config::DownloadConfig;
pub use content::ContentFile;
pub use downloader::Downloader;
pub use error::{DownloadError, DownloadResult, DownloadStatus};
pub use progress::{DownloadProgress, Operation, ProgressObserver};
pub use sink::ContentSink;
