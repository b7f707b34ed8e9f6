//! HTTP primitives: size probe and (ranged) GET requests.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{CONTENT_LENGTH, RANGE};

use crate::error::{DownloadError, DownloadResult};

/// Build a fresh HTTP client for one download call.
///
/// Clients are scoped to a single call and dropped before it returns;
/// there is no connection reuse across calls.
pub(crate) fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client")
}

/// Probe the total size of a remote resource via a HEAD request.
///
/// Fails with [`DownloadError::SizeProbeFailed`] if the request does not
/// succeed or no content-length is advertised.
pub(crate) fn probe_size(client: &Client, url: &str) -> DownloadResult<u64> {
    let response = client
        .head(url)
        .send()
        .map_err(|e| DownloadError::SizeProbeFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(DownloadError::SizeProbeFailed {
            url: url.to_string(),
            reason: format!("server returned {}", response.status()),
        });
    }

    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .ok_or_else(|| DownloadError::SizeProbeFailed {
            url: url.to_string(),
            reason: "no content-length advertised".to_string(),
        })
}

/// Issue a GET request for bytes `[start, end]` inclusive.
///
/// Fails with [`DownloadError::DownloadFailed`] carrying the server's
/// status line if the response does not indicate success (200 and 206
/// both qualify).
pub(crate) fn send_ranged(
    client: &Client,
    url: &str,
    start: u64,
    end: u64,
) -> DownloadResult<Response> {
    let response = client
        .get(url)
        .header(RANGE, format!("bytes={}-{}", start, end))
        .send()
        .map_err(|e| DownloadError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    check_success(url, response)
}

/// Issue a plain GET request with no range restriction.
pub(crate) fn send_get(client: &Client, url: &str) -> DownloadResult<Response> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| DownloadError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    check_success(url, response)
}

fn check_success(url: &str, response: Response) -> DownloadResult<Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::DownloadFailed {
            url: url.to_string(),
            reason: format!("server returned {}", status),
        });
    }
    Ok(response)
}
