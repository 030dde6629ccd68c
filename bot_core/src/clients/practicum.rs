use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::clients::StatusProvider;
use crate::error::BotError;

/// Client for the homework-statuses endpoint.
///
/// Issues `GET <endpoint>?from_date=<cursor>` with an
/// `Authorization: OAuth <token>` header and hands back the parsed JSON
/// body. Anything other than HTTP 200 is an error.
#[derive(Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The token stays out of logs
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl StatusProvider for PracticumClient {
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, BotError> {
        // A zero cursor means "no window yet": poll from now
        let from_date = if from_date > 0 {
            from_date
        } else {
            Utc::now().timestamp()
        };

        let resp = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| BotError::ApiUnreachable {
                endpoint: self.endpoint.clone(),
                source: e.without_url(),
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(BotError::ApiStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        resp.json::<Value>().await.map_err(|_| {
            BotError::ResponseShape("тело ответа не является корректным JSON".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one canned HTTP response on a local port and hand
    /// back the endpoint URL plus the raw request the client sent.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = stream.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 {status_line}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            request
        });

        (format!("http://{addr}/api/homework_statuses/"), handle)
    }

    #[tokio::test]
    async fn test_get_api_answer_returns_parsed_body_on_200() {
        let (endpoint, request) =
            serve_once("200 OK", r#"{"homeworks": [], "current_date": 1000}"#).await;
        let client = PracticumClient::new(endpoint, "test-token".to_string());

        let payload = client.get_api_answer(900).await.unwrap();

        assert_eq!(payload, json!({"homeworks": [], "current_date": 1000}));
        let request = request.await.unwrap();
        assert!(request.contains("from_date=900"), "got: {request}");
        // Header names arrive lowercased on the wire
        assert!(request
            .to_lowercase()
            .contains("authorization: oauth test-token"));
    }

    #[tokio::test]
    async fn test_get_api_answer_maps_non_200_to_api_status() {
        let (endpoint, _request) = serve_once("503 Service Unavailable", "").await;
        let client = PracticumClient::new(endpoint.clone(), "test-token".to_string());

        let err = client.get_api_answer(900).await.unwrap_err();

        match err {
            BotError::ApiStatus {
                endpoint: reported,
                status,
            } => {
                assert_eq!(status, 503);
                assert_eq!(reported, endpoint);
            }
            other => panic!("expected ApiStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_api_answer_unparsable_body_is_shape_error() {
        let (endpoint, _request) = serve_once("200 OK", "not json").await;
        let client = PracticumClient::new(endpoint, "test-token".to_string());

        let err = client.get_api_answer(900).await.unwrap_err();
        assert!(matches!(err, BotError::ResponseShape(_)));
    }

    #[tokio::test]
    async fn test_get_api_answer_zero_cursor_polls_from_now() {
        let (endpoint, request) =
            serve_once("200 OK", r#"{"homeworks": [], "current_date": 1000}"#).await;
        let client = PracticumClient::new(endpoint, "test-token".to_string());

        let before = Utc::now().timestamp();
        client.get_api_answer(0).await.unwrap();

        let request = request.await.unwrap();
        let from_date: i64 = request
            .split("from_date=")
            .nth(1)
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|raw| raw.parse().ok())
            .expect("request carries a numeric from_date");
        assert!(from_date >= before, "cursor fell back to {from_date}");
    }
}
