//! In-process HTTP stub used by the lookup tests

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A one-shot registry stub
pub(crate) struct StubRegistry {
    /// Base URL to put in a `RegistryConfig`
    pub base_url: String,
    /// Raw text of the request the stub received
    pub request: oneshot::Receiver<String>,
}

/// Serve exactly one request, answering with `status_line` and a JSON `body`.
pub(crate) async fn serve_once(status_line: &'static str, body: &'static str) -> StubRegistry {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let n = socket.read(&mut buf).await.unwrap();
        let _ = tx.send(String::from_utf8_lossy(&buf[..n]).to_string());

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    StubRegistry {
        base_url: format!("http://{}", addr),
        request: rx,
    }
}

/// Accept connections but never answer them
pub(crate) async fn serve_silently() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
    });

    format!("http://{}", addr)
}

/// Base URL of a port nothing is listening on
pub(crate) async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Minimal Crossref payload for `10.1038/nature12373`
pub(crate) const NATURE_WORK: &str = r#"{
  "status": "ok",
  "message-type": "work",
  "message": {
    "DOI": "10.1038/nature12373",
    "title": ["Nanometre-scale thermometry in a living cell"],
    "container-title": ["Nature"],
    "publisher": "Springer Science and Business Media LLC",
    "author": [
      {"given": "G.", "family": "Kucsko"},
      {"given": "P. C.", "family": "Maurer"},
      {"given": "N. Y.", "family": "Yao"},
      {"given": "M.", "family": "Kubo"},
      {"given": "H. J.", "family": "Noh"}
    ],
    "published-print": {"date-parts": [[2013, 8]]},
    "published-online": {"date-parts": [[2013, 7, 31]]}
  }
}"#;
