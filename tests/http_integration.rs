// SPDX-License-Identifier: MPL-2.0
//! Network operations against a loopback HTTP responder.

use gallery_lens::error::Error;
use gallery_lens::net::{download, images, stats, HttpClient};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

type Requests = Arc<Mutex<Vec<String>>>;

struct Route {
    path: &'static str,
    status: &'static str,
    content_type: &'static str,
    body: Vec<u8>,
    /// Announced body length when it differs from the bytes actually sent.
    declared_len: Option<usize>,
}

impl Route {
    fn ok(path: &'static str, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            path,
            status: "200 OK",
            content_type,
            body: body.into(),
            declared_len: None,
        }
    }

    /// Announces `declared_len` bytes but closes the connection after `body`.
    fn truncated(mut self, declared_len: usize) -> Self {
        self.declared_len = Some(declared_len);
        self
    }
}

/// Serves `routes` on an ephemeral port. Unknown paths answer 404.
/// Returns the base URL and the request heads received so far.
async fn serve(routes: Vec<Route>) -> (String, Requests) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let requests: Requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    let routes = Arc::new(routes);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let routes = Arc::clone(&routes);
            let seen = Arc::clone(&seen);
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&buf).to_string();
                let path = head
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();
                seen.lock().unwrap().push(head);

                let (status, content_type, body, declared_len) =
                    match routes.iter().find(|r| r.path == path) {
                        Some(route) => (
                            route.status,
                            route.content_type,
                            route.body.clone(),
                            route.declared_len.unwrap_or(route.body.len()),
                        ),
                        None => ("404 Not Found", "text/plain", b"not found".to_vec(), 9),
                    };
                let header = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {declared_len}\r\nConnection: close\r\n\r\n"
                );
                let _ = socket.write_all(header.as_bytes()).await;
                let _ = socket.write_all(&body).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{addr}"), requests)
}

#[tokio::test]
async fn stats_request_carries_session_cookie_and_user_agent() {
    let body = r#"{"total_generations": 4, "total_images": 9, "last_generation": null}"#;
    let (base, requests) = serve(vec![Route::ok("/api/user/stats", "application/json", body)]).await;
    let client = HttpClient::new(&base, Some("session=abc123")).expect("client");

    let value = stats::fetch_user_stats(client).await.expect("stats");
    let parsed = stats::UserStats::from_value(&value).expect("known shape");
    assert_eq!(parsed.total_generations, 4);
    assert_eq!(parsed.total_images, 9);

    let heads = requests.lock().unwrap();
    let head = heads[0].to_ascii_lowercase();
    assert!(head.starts_with("get /api/user/stats "));
    assert!(head.contains("cookie: session=abc123"));
    assert!(head.contains("user-agent: gallerylens/"));
}

#[tokio::test]
async fn stats_error_status_is_reported() {
    let (base, _requests) = serve(Vec::new()).await;
    let client = HttpClient::new(&base, None).expect("client");

    let result = stats::fetch_user_stats(client).await;
    match result {
        Err(Error::Http(message)) => assert!(message.contains("404")),
        other => panic!("expected an HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_stats_body_is_an_error() {
    let (base, _requests) = serve(vec![Route::ok("/api/user/stats", "text/html", "<html></html>")]).await;
    let client = HttpClient::new(&base, None).expect("client");
    assert!(stats::fetch_user_stats(client).await.is_err());
}

#[tokio::test]
async fn download_writes_file_and_avoids_collisions() {
    let payload = vec![0x89, b'P', b'N', b'G', 1, 2, 3, 4];
    let (base, _requests) = serve(vec![Route::ok("/media/fox.png", "image/png", payload.clone())]).await;
    let client = HttpClient::new(&base, None).expect("client");
    let dir = tempdir().expect("temp dir");

    let first = download::download_to_dir(
        client.clone(),
        "/media/fox.png".to_string(),
        "fox.png".to_string(),
        dir.path().to_path_buf(),
    )
    .await
    .expect("first download");
    let second = download::download_to_dir(
        client,
        "/media/fox.png".to_string(),
        "fox.png".to_string(),
        dir.path().to_path_buf(),
    )
    .await
    .expect("second download");

    assert_eq!(first, dir.path().join("fox.png"));
    assert_eq!(second, dir.path().join("fox (1).png"));
    assert_eq!(std::fs::read(&first).expect("read"), payload);
    assert_eq!(std::fs::read(&second).expect("read"), payload);
}

#[tokio::test]
async fn download_creates_missing_directory_and_sanitizes_name() {
    let (base, _requests) = serve(vec![Route::ok("/media/owl.png", "image/png", vec![1u8, 2, 3])]).await;
    let client = HttpClient::new(&base, None).expect("client");
    let dir = tempdir().expect("temp dir");
    let target = dir.path().join("nested").join("downloads");

    let path = download::download_to_dir(
        client,
        "/media/owl.png".to_string(),
        "../../owl.png".to_string(),
        target.clone(),
    )
    .await
    .expect("download");

    assert_eq!(path, target.join("owl.png"));
}

#[tokio::test]
async fn failed_download_leaves_no_file() {
    let (base, _requests) = serve(Vec::new()).await;
    let client = HttpClient::new(&base, None).expect("client");
    let dir = tempdir().expect("temp dir");

    let result = download::download_to_dir(
        client,
        "/media/missing.png".to_string(),
        "missing.png".to_string(),
        dir.path().to_path_buf(),
    )
    .await;

    assert!(matches!(result, Err(Error::Http(_))));
    assert!(!dir.path().join("missing.png").exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_downloads_of_one_name_never_share_a_file() {
    let payload = vec![0x89u8, b'P', b'N', b'G', 9, 8, 7, 6];
    let (base, _requests) = serve(vec![Route::ok("/media/fox.png", "image/png", payload.clone())]).await;
    let client = HttpClient::new(&base, None).expect("client");

    for _ in 0..20 {
        let dir = tempdir().expect("temp dir");
        let start = |client: HttpClient| {
            tokio::spawn(download::download_to_dir(
                client,
                "/media/fox.png".to_string(),
                "fox.png".to_string(),
                dir.path().to_path_buf(),
            ))
        };
        let first = start(client.clone());
        let second = start(client.clone());

        let first = first.await.expect("join").expect("first download");
        let second = second.await.expect("join").expect("second download");

        assert_ne!(first, second);
        let mut names = vec![first.clone(), second.clone()];
        names.sort();
        assert_eq!(names, [dir.path().join("fox (1).png"), dir.path().join("fox.png")]);
        assert_eq!(std::fs::read(&first).expect("read"), payload);
        assert_eq!(std::fs::read(&second).expect("read"), payload);
    }
}

#[tokio::test]
async fn interrupted_download_removes_partial_file() {
    let (base, _requests) = serve(vec![
        Route::ok("/media/big.png", "image/png", vec![1u8; 64]).truncated(4096),
    ])
    .await;
    let client = HttpClient::new(&base, None).expect("client");
    let dir = tempdir().expect("temp dir");

    let result = download::download_to_dir(
        client,
        "/media/big.png".to_string(),
        "big.png".to_string(),
        dir.path().to_path_buf(),
    )
    .await;

    assert!(matches!(result, Err(Error::Http(_))));
    assert_eq!(std::fs::read_dir(dir.path()).expect("read dir").count(), 0);
}

#[tokio::test]
async fn absolute_download_url_bypasses_base() {
    let (image_server, _requests) = serve(vec![Route::ok("/cdn/a.png", "image/png", vec![7u8, 7])]).await;
    let client = HttpClient::new("http://127.0.0.1:9", None).expect("client");
    let dir = tempdir().expect("temp dir");

    let path = download::download_to_dir(
        client,
        format!("{image_server}/cdn/a.png"),
        "a.png".to_string(),
        dir.path().to_path_buf(),
    )
    .await
    .expect("download");

    assert_eq!(std::fs::read(path).expect("read"), vec![7u8, 7]);
}

#[tokio::test]
async fn image_fetch_returns_handle_and_rejects_empty_body() {
    let (base, _requests) = serve(vec![
        Route::ok("/media/a.png", "image/png", vec![1u8, 2, 3]),
        Route::ok("/media/empty.png", "image/png", Vec::<u8>::new()),
    ])
    .await;
    let client = HttpClient::new(&base, None).expect("client");

    assert!(images::fetch_image(client.clone(), "/media/a.png".to_string()).await.is_ok());
    assert!(images::fetch_image(client, "/media/empty.png".to_string()).await.is_err());
}
