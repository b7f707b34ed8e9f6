//! ContentFetch CLI - fetch one content file to disk.
//!
//! Thin front end over the `contentfetch` library: downloads a single
//! URL to a file with a progress bar, and turns Ctrl-C into a cooperative
//! cancellation that leaves a resumable partial file behind. Re-running
//! the same command resumes where the transfer stopped.

mod error;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use contentfetch::{CancelToken, ContentFile, DownloadConfig, DownloadStatus, Downloader};
use error::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "contentfetch",
    version,
    about = "Resumable single-file downloader"
)]
struct Args {
    /// Source URL (http, https, or file scheme)
    url: String,

    /// Destination file path
    #[arg(short, long)]
    output: PathBuf,

    /// Expected total size in bytes; probed from the server when omitted
    #[arg(short, long)]
    size: Option<u64>,

    /// Chunk size in bytes for streaming reads
    #[arg(long)]
    chunk_size: Option<usize>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 300)]
    timeout: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let mut config = DownloadConfig::new().with_timeout(Duration::from_secs(args.timeout));
    if let Some(chunk_size) = args.chunk_size {
        config = config.with_chunk_size(chunk_size);
    }
    let mut downloader = Downloader::with_config(config);

    let size = match args.size {
        Some(size) => size,
        None => downloader.remote_size(&args.url)?,
    };
    let content = ContentFile::new(args.url.as_str(), size);
    tracing::debug!(url = %content.source, size, "starting fetch");

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .map_err(|e| CliError::Signal(e.to_string()))?;

    let bar = ProgressBar::new(size);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let observer_bar = bar.clone();
    downloader.on_progress(move |p| observer_bar.set_position(p.current));

    let status = downloader.download_to_file(&args.output, &content, &cancel)?;

    match status {
        DownloadStatus::Completed => {
            bar.finish();
            println!("saved to {}", args.output.display());
        }
        DownloadStatus::Cancelled => {
            bar.abandon();
            println!(
                "cancelled; partial file kept at {} (re-run to resume)",
                args.output.display()
            );
        }
    }

    Ok(())
}
