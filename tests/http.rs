#[cfg(test)]
mod tests {
    use clk::api::{ApiError, Request, Transport};
    use clk::libs::config::Config;
    use clk::libs::http::Http;
    use serde_json::{json, Value};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const API_KEY: &str = "pk_1";

    /// A one-shot HTTP server on a local port.
    ///
    /// Answers the first connection with `status` and `body`, then yields the
    /// raw request it received (head and body).
    struct OneShotServer {
        base_url: String,
        received: JoinHandle<String>,
    }

    impl OneShotServer {
        async fn start(status: &'static str, body: &'static str) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let base_url = format!("http://{}", listener.local_addr().unwrap());

            let received = tokio::spawn(async move {
                let (mut socket, _) = listener.accept().await.unwrap();
                let request = read_request(&mut socket).await;

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.ok();
                request
            });

            Self { base_url, received }
        }

        fn transport(&self) -> Http {
            Http::new(&Config {
                api_key: API_KEY.to_string(),
                api_url: self.base_url.clone(),
            })
        }

        async fn received(self) -> String {
            self.received.await.unwrap()
        }
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];

        let head_end = loop {
            let n = socket.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before the request head");
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&raw[..head_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while raw.len() < head_end + content_length {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }

        String::from_utf8_lossy(&raw).to_string()
    }

    fn request_line(received: &str) -> &str {
        received.lines().next().unwrap_or_default()
    }

    fn header<'a>(received: &'a str, name: &str) -> Option<&'a str> {
        received
            .lines()
            .take_while(|line| !line.is_empty())
            .find_map(|line| {
                let (key, value) = line.split_once(':')?;
                key.eq_ignore_ascii_case(name).then(|| value.trim())
            })
    }

    #[tokio::test]
    async fn test_sends_credential_content_type_and_escaped_query() {
        let server = OneShotServer::start("200 OK", r#"{"tasks":[]}"#).await;

        let request = Request::get("/team/1/task").query("search", "R&D / q=1").query("assignees[]", 42);
        let value = server.transport().send(request).await.unwrap();
        assert_eq!(value, json!({ "tasks": [] }));

        let received = server.received().await;
        assert_eq!(
            request_line(&received),
            "GET /team/1/task?search=R%26D+%2F+q%3D1&assignees%5B%5D=42 HTTP/1.1"
        );
        assert_eq!(header(&received, "authorization"), Some(API_KEY));
        assert_eq!(header(&received, "content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_posts_json_body() {
        let server = OneShotServer::start("200 OK", "{}").await;

        let request = Request::post("/team/1/time_entries/start").json(json!({ "tid": "86abc" }));
        server.transport().send(request).await.unwrap();

        let received = server.received().await;
        assert_eq!(request_line(&received), "POST /team/1/time_entries/start HTTP/1.1");
        assert!(received.ends_with(r#"{"tid":"86abc"}"#));
    }

    #[tokio::test]
    async fn test_non_success_status_keeps_raw_body() {
        let server = OneShotServer::start("401 Unauthorized", r#"{"err":"Token bad"}"#).await;

        let err = server.transport().send(Request::get("/user")).await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), r#"ClickUp API error 401: {"err":"Token bad"}"#);
        server.received().await;
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let server = OneShotServer::start("200 OK", "").await;

        let value = server.transport().send(Request::post("/team/1/time_entries/stop")).await.unwrap();
        assert_eq!(value, Value::Null);
        server.received().await;
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_decode_error() {
        let server = OneShotServer::start("200 OK", "<html>maintenance</html>").await;

        let err = server.transport().send(Request::get("/team")).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { ref endpoint, .. } if endpoint == "/team"));
        server.received().await;
    }
}
