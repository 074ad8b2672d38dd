//! Minimal HTTP server for exercising the real HTTP source

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Canned response served for every request
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl CannedResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    #[allow(dead_code)]
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: "{\"code\":\"error\"}".to_string(),
            delay: Duration::ZERO,
        }
    }

    #[allow(dead_code)]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Starts a server answering every connection with `response`
///
/// Returns the base URL, e.g. `http://127.0.0.1:41234`.
pub async fn serve(response: CannedResponse) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr: SocketAddr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let response = response.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let mut request = Vec::new();
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                tokio::time::sleep(response.delay).await;

                let reply = format!(
                    "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    response.status,
                    response.body.len(),
                    response.body
                );
                let _ = socket.write_all(reply.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

/// A local URL nothing is listening on
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}", addr)
}

/// A designs payload as returned by `/designs?_embed`
pub const DESIGNS_PAYLOAD: &str = r#"[
    {
        "id": 11,
        "title": {"rendered": "Mesa High-Rise Trousers"},
        "content": {"rendered": "<p>Tailored trousers</p>"},
        "meta": {"price": "650", "category": "pants"},
        "_embedded": {"wp:featuredmedia": [{"source_url": "https://cms.test/trousers.jpg"}]}
    },
    {
        "id": 12,
        "title": {"rendered": "Prairie Dress"},
        "content": {"rendered": ""},
        "meta": {"category": "dress"},
        "_embedded": {"wp:featuredmedia": []}
    }
]"#;
