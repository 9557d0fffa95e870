use std::time::Duration;

use async_trait::async_trait;

use crate::common::{ChatMessage, MessagesResponse, OutgoingMessage, PostReceipt};
use crate::error::{FetchError, SendError};

/// The remote chat endpoint. One URL serves both the list (GET) and submissions (POST).
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn fetch_messages(&self) -> Result<Vec<ChatMessage>, FetchError>;

    async fn post_message(
        &self,
        message: &OutgoingMessage,
    ) -> Result<Option<PostReceipt>, SendError>;
}

pub struct HttpChatApi {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpChatApi {
    pub fn new(endpoint: &str, timeout: Duration) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn fetch_messages(&self) -> Result<Vec<ChatMessage>, FetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        parse_messages(&body)
    }

    async fn post_message(
        &self,
        message: &OutgoingMessage,
    ) -> Result<Option<PostReceipt>, SendError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(message)
            .send()
            .await
            .map_err(|err| SendError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SendError::Rejected(status.as_u16()));
        }

        // The body is not part of the contract; an unreadable one still counts as accepted.
        match response.bytes().await {
            Ok(body) => Ok(serde_json::from_slice::<PostReceipt>(&body).ok()),
            Err(err) => {
                log::debug!("Ignoring unreadable POST response body: {err}");
                Ok(None)
            }
        }
    }
}

/// Decode a `{ "messages": [...] }` body, keeping the server's order.
pub fn parse_messages(body: &[u8]) -> Result<Vec<ChatMessage>, FetchError> {
    serde_json::from_slice::<MessagesResponse>(body)
        .map(|response| response.messages)
        .map_err(|err| FetchError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    const TIMEOUT: Duration = Duration::from_secs(5);

    /// Reads one request (head plus `content-length` body) and returns it as text.
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(head_end) = text.find("\r\n\r\n") {
                let body_len = text[..head_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + body_len {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Serves a single canned response and hands back the request it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/chat", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (endpoint, server)
    }

    /// Stub servers live on loopback; keep proxy settings from the environment out of it.
    fn local_api(endpoint: &str) -> HttpChatApi {
        let http = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .no_proxy()
            .build()
            .unwrap();
        HttpChatApi {
            http,
            endpoint: endpoint.to_string(),
        }
    }

    fn outgoing() -> OutgoingMessage {
        OutgoingMessage::new("user_1", "Ann", " hello ")
    }

    #[test]
    fn parse_keeps_server_order() {
        let body = br#"{"messages":[
            {"id":5,"userId":"a","username":"A","text":"first","isCreator":false,"timestamp":"09:00"},
            {"id":2,"userId":"b","username":"B","text":"second","isCreator":true,"timestamp":"09:01"}
        ]}"#;
        let messages = parse_messages(body).unwrap();
        let ids: Vec<i64> = messages.iter().map(|message| message.id).collect();
        assert_eq!(ids, vec![5, 2]);
    }

    #[test]
    fn parse_rejects_malformed_body() {
        assert!(matches!(
            parse_messages(b"<html>502</html>"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn body_without_messages_is_an_empty_list() {
        assert!(parse_messages(b"{}").unwrap().is_empty());
    }

    #[test]
    fn client_keeps_configured_endpoint() {
        let api = HttpChatApi::new("http://localhost:9/chat", Duration::from_secs(1)).unwrap();
        assert_eq!(api.endpoint(), "http://localhost:9/chat");
    }

    #[tokio::test]
    async fn get_returns_served_messages() {
        let (endpoint, server) = serve_once(
            "200 OK",
            r#"{"messages":[{"id":1,"userId":"user_1","username":"Ann","text":"hi","isCreator":false,"timestamp":"10:30"}]}"#,
        )
        .await;
        let api = local_api(&endpoint);

        let messages = api.fetch_messages().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "hi");
        assert!(server.await.unwrap().starts_with("GET /chat "));
    }

    #[tokio::test]
    async fn get_server_error_is_a_status_failure() {
        let (endpoint, _server) = serve_once("500 Internal Server Error", "{}").await;
        let api = local_api(&endpoint);

        assert!(matches!(
            api.fetch_messages().await,
            Err(FetchError::Status(500))
        ));
    }

    #[tokio::test]
    async fn post_sends_json_and_reads_receipt() {
        let (endpoint, server) = serve_once(
            "201 Created",
            r#"{"success":true,"messageId":7,"timestamp":"10:30"}"#,
        )
        .await;
        let api = local_api(&endpoint);

        let receipt = api.post_message(&outgoing()).await.unwrap().unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.message_id, Some(7));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /chat "));
        assert!(request.contains(r#""messageText":"hello""#));
        assert!(request.contains(r#""userId":"user_1""#));
    }

    #[tokio::test]
    async fn post_with_unreadable_body_is_still_accepted() {
        let (endpoint, _server) = serve_once("200 OK", "ok").await;
        let api = local_api(&endpoint);

        assert!(api.post_message(&outgoing()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn post_server_error_is_rejected() {
        let (endpoint, _server) = serve_once("500 Internal Server Error", "{}").await;
        let api = local_api(&endpoint);

        assert!(matches!(
            api.post_message(&outgoing()).await,
            Err(SendError::Rejected(500))
        ));
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/chat", listener.local_addr().unwrap());
        drop(listener);
        let api = local_api(&endpoint);

        assert!(matches!(
            api.post_message(&outgoing()).await,
            Err(SendError::Network(_))
        ));
        assert!(matches!(
            api.fetch_messages().await,
            Err(FetchError::Transport(_))
        ));
    }
}
