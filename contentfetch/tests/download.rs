//! End-to-end download tests against a mock HTTP server.
//!
//! The downloader is blocking, so each call runs under
//! `tokio::task::spawn_blocking` while wiremock serves canned responses.

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use contentfetch::{
    CancelToken, ContentFile, DownloadConfig, DownloadError, DownloadStatus, Downloader,
};

fn body_of(len: u8) -> Vec<u8> {
    (0..len).collect()
}

/// Mount a HEAD mock advertising the full body's length.
async fn mount_head(server: &MockServer, route: &str, body: &[u8]) {
    Mock::given(method("HEAD"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .mount(server)
        .await;
}

/// Mount a GET mock answering one specific byte range with 206.
async fn mount_range(server: &MockServer, route: &str, range: &str, slice: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("Range", range))
        .respond_with(ResponseTemplate::new(206).set_body_bytes(slice.to_vec()))
        .mount(server)
        .await;
}

async fn run_to_file(
    downloader: Downloader,
    dest: PathBuf,
    content: ContentFile,
    cancel: CancelToken,
) -> Result<DownloadStatus, DownloadError> {
    tokio::task::spawn_blocking(move || downloader.download_to_file(&dest, &content, &cancel))
        .await
        .unwrap()
}

#[tokio::test]
async fn fresh_download_writes_full_body() {
    let server = MockServer::start().await;
    let body = body_of(100);
    mount_head(&server, "/a.bin", &body).await;
    mount_range(&server, "/a.bin", "bytes=0-99", &body).await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("a.bin");
    let content = ContentFile::new(format!("{}/a.bin", server.uri()), 100);

    let status = run_to_file(Downloader::new(), dest.clone(), content, CancelToken::new())
        .await
        .unwrap();

    assert_eq!(status, DownloadStatus::Completed);
    assert_eq!(std::fs::read(&dest).unwrap(), body);
}

#[tokio::test]
async fn resume_continues_from_existing_length() {
    let server = MockServer::start().await;
    let body = body_of(10);
    mount_head(&server, "/a.bin", &body).await;
    mount_range(&server, "/a.bin", "bytes=3-9", &body[3..]).await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("a.bin");
    std::fs::write(&dest, &body[..3]).unwrap();

    let content = ContentFile::new(format!("{}/a.bin", server.uri()), 10);
    let status = run_to_file(Downloader::new(), dest.clone(), content, CancelToken::new())
        .await
        .unwrap();

    assert_eq!(status, DownloadStatus::Completed);
    assert_eq!(std::fs::read(&dest).unwrap(), body);
}

#[tokio::test]
async fn complete_destination_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("a.bin");
    std::fs::write(&dest, body_of(10)).unwrap();

    let content = ContentFile::new(format!("{}/a.bin", server.uri()), 10);
    let status = run_to_file(Downloader::new(), dest.clone(), content, CancelToken::new())
        .await
        .unwrap();

    assert_eq!(status, DownloadStatus::Completed);
    assert_eq!(std::fs::read(&dest).unwrap(), body_of(10));
    server.verify().await;
}

#[tokio::test]
async fn probed_size_disagreement_writes_nothing() {
    let server = MockServer::start().await;
    let body = body_of(100);
    mount_head(&server, "/a.bin", &body).await;

    let content = ContentFile::new(format!("{}/a.bin", server.uri()), 50);
    let result = tokio::task::spawn_blocking(move || {
        let downloader = Downloader::new();
        let mut sink = Cursor::new(Vec::new());
        let result = downloader.download_to_stream(&mut sink, &content, 0, &CancelToken::new());
        (result, sink.into_inner())
    })
    .await
    .unwrap();

    let (result, written) = result;
    assert!(matches!(
        result,
        Err(DownloadError::SizeMismatch {
            expected: 50,
            actual: 100,
            ..
        })
    ));
    assert!(written.is_empty());
}

#[tokio::test]
async fn failed_probe_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/gone.bin"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("gone.bin");
    let content = ContentFile::new(format!("{}/gone.bin", server.uri()), 10);

    let result = run_to_file(Downloader::new(), dest, content, CancelToken::new()).await;

    assert!(matches!(result, Err(DownloadError::SizeProbeFailed { .. })));
}

#[tokio::test]
async fn failed_ranged_get_carries_server_reason() {
    let server = MockServer::start().await;
    let body = body_of(10);
    mount_head(&server, "/a.bin", &body).await;
    Mock::given(method("GET"))
        .and(path("/a.bin"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("a.bin");
    let content = ContentFile::new(format!("{}/a.bin", server.uri()), 10);

    let result = run_to_file(Downloader::new(), dest, content, CancelToken::new()).await;

    match result {
        Err(DownloadError::DownloadFailed { reason, .. }) => {
            assert!(reason.contains("503"), "unexpected reason: {reason}");
        }
        other => panic!("expected DownloadFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn cancellation_leaves_resumable_partial_file() {
    let server = MockServer::start().await;
    let body = body_of(10);
    mount_head(&server, "/a.bin", &body).await;
    mount_range(&server, "/a.bin", "bytes=0-9", &body).await;
    mount_range(&server, "/a.bin", "bytes=4-9", &body[4..]).await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("a.bin");
    let content = ContentFile::new(format!("{}/a.bin", server.uri()), 10);

    // Cancel after the first 4-byte chunk lands.
    let cancel = CancelToken::new();
    let cancel_inner = cancel.clone();
    let mut downloader = Downloader::with_config(DownloadConfig::new().with_chunk_size(4));
    downloader.on_progress(move |_| cancel_inner.cancel());

    let status = run_to_file(downloader, dest.clone(), content.clone(), cancel)
        .await
        .unwrap();

    assert_eq!(status, DownloadStatus::Cancelled);
    assert_eq!(std::fs::read(&dest).unwrap(), body[..4]);

    // A later resume call produces a file identical to an
    // uninterrupted download.
    let status = run_to_file(Downloader::new(), dest.clone(), content, CancelToken::new())
        .await
        .unwrap();

    assert_eq!(status, DownloadStatus::Completed);
    assert_eq!(std::fs::read(&dest).unwrap(), body);
}

#[tokio::test]
async fn progress_is_monotonic_and_reaches_size() {
    let server = MockServer::start().await;
    let body = body_of(10);
    mount_head(&server, "/a.bin", &body).await;
    mount_range(&server, "/a.bin", "bytes=2-9", &body[2..]).await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("a.bin");
    std::fs::write(&dest, &body[..2]).unwrap();

    let seen: Arc<Mutex<Vec<u64>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_obs = Arc::clone(&seen);
    let mut downloader = Downloader::with_config(DownloadConfig::new().with_chunk_size(3));
    downloader.on_progress(move |p| {
        assert_eq!(p.maximum, 10);
        seen_obs.lock().unwrap().push(p.current);
    });

    let content = ContentFile::new(format!("{}/a.bin", server.uri()), 10);
    run_to_file(downloader, dest, content, CancelToken::new())
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert!(!seen.is_empty());
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert!(seen.iter().all(|&c| c > 2 && c <= 10));
    assert_eq!(*seen.last().unwrap(), 10);
}

#[tokio::test]
async fn simple_copy_streams_whole_body() {
    let server = MockServer::start().await;
    let body = body_of(25);
    Mock::given(method("GET"))
        .and(path("/one-shot.bin"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&server)
        .await;

    let url = format!("{}/one-shot.bin", server.uri());
    let (status, written) = tokio::task::spawn_blocking(move || {
        let downloader = Downloader::new();
        let mut sink = Vec::new();
        let status = downloader
            .fetch_to_writer(&url, &mut sink, &CancelToken::new())
            .unwrap();
        (status, sink)
    })
    .await
    .unwrap();

    assert_eq!(status, DownloadStatus::Completed);
    assert_eq!(written, body);
}

#[tokio::test]
async fn simple_copy_reports_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken.bin"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = format!("{}/broken.bin", server.uri());
    let result = tokio::task::spawn_blocking(move || {
        let downloader = Downloader::new();
        let mut sink = Vec::new();
        downloader.fetch_to_writer(&url, &mut sink, &CancelToken::new())
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(DownloadError::DownloadFailed { .. })));
}

#[tokio::test]
async fn remote_size_probes_content_length() {
    let server = MockServer::start().await;
    let body = body_of(42);
    mount_head(&server, "/sized.bin", &body).await;

    let url = format!("{}/sized.bin", server.uri());
    let size = tokio::task::spawn_blocking(move || Downloader::new().remote_size(&url))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(size, 42);
}

#[tokio::test]
async fn unrecognized_scheme_fails_at_first_request() {
    let content = ContentFile::new("ftp://example.com/a.bin", 10);

    let result = tokio::task::spawn_blocking(move || {
        let downloader = Downloader::new();
        let mut sink = Cursor::new(Vec::new());
        downloader.download_to_stream(&mut sink, &content, 0, &CancelToken::new())
    })
    .await
    .unwrap();

    assert!(result.is_err());
}
