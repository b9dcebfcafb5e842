//! GeminiGateway -- [`GenerationGateway`] over the Gemini REST API.
//!
//! One `POST {base_url}/v1beta/models/{model}:generateContent?key=…` per
//! call, no retries, no streaming. The key only ever appears in the query
//! string; transport errors have their URL stripped before they are
//! surfaced so it cannot leak into logs.

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};
use twin_application::ports::generation_gateway::{
    GatewayError, GenerationGateway, GenerationRequest,
};
use twin_domain::util::truncate_str;

/// Longest error body kept in a protocol failure
const MAX_ERROR_BODY: usize = 512;

/// Resolved settings for [`GeminiGateway`]
#[derive(Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Option<Duration>,
}

impl GeminiConfig {
    /// Resolve from the `[gemini]` section, reading the key env var.
    pub fn from_file_config(file: &FileGeminiConfig) -> Self {
        Self {
            model: file.model.clone(),
            base_url: file.base_url.clone(),
            api_key: file.resolve_api_key(),
            timeout: file.timeout_seconds.map(Duration::from_secs),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Gemini text-generation adapter
pub struct GeminiGateway {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    /// Create a gateway. A missing key is allowed; every call then fails
    /// with [`GatewayError::MissingApiKey`].
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        if config.has_api_key() {
            info!(model = %config.model, "Gemini gateway initialized");
        } else {
            warn!(
                model = %config.model,
                "Gemini API key is not configured; replies will use the fallback text"
            );
        }

        Ok(Self { client, config })
    }

    /// Endpoint URL without the key
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl fmt::Debug for GeminiGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiGateway")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl GenerationGateway for GeminiGateway {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingApiKey)?;

        let body = GenerateContentRequest::new(&request.system_instruction, &request.user_text);
        let url = self.endpoint();
        debug!(%url, "Calling generateContent");

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(GatewayError::Protocol {
                status: status.as_u16(),
                body: truncate_str(&text, MAX_ERROR_BODY).to_string(),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))?;

        let reply = parsed
            .first_text()
            .map_err(|reason| GatewayError::Shape(reason.to_string()))?;

        debug!(status = status.as_u16(), chars = reply.chars().count(), "Reply received");
        Ok(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn config(base_url: &str, api_key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            model: "gemini-test".to_string(),
            base_url: base_url.to_string(),
            api_key: api_key.map(str::to_string),
            timeout: Some(Duration::from_secs(5)),
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("PERSONA", "Who are you?")
    }

    /// Serve one canned HTTP response; resolves to the raw request text.
    async fn serve_once(status_line: &str, body: &str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&buf);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    if buf.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&buf).to_string()
        });

        (base, handle)
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let gateway = GeminiGateway::new(config("https://example.test/", Some("k"))).unwrap();
        assert_eq!(
            gateway.endpoint(),
            "https://example.test/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let gateway = GeminiGateway::new(config("https://example.test", Some("secret-key"))).unwrap();
        let debug = format!("{:?}", gateway);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_from_file_config() {
        let file = FileGeminiConfig {
            api_key: Some("k".to_string()),
            timeout_seconds: Some(9),
            ..Default::default()
        };
        let config = GeminiConfig::from_file_config(&file).with_model("override");
        assert_eq!(config.model, "override");
        assert_eq!(config.timeout, Some(Duration::from_secs(9)));
        assert!(config.has_api_key());
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        // Unroutable base: reaching the network would not yield MissingApiKey
        let gateway = GeminiGateway::new(config("http://127.0.0.1:1", None)).unwrap();
        assert_eq!(
            gateway.generate(&request()).await,
            Err(GatewayError::MissingApiKey)
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway =
            GeminiGateway::new(config(&format!("http://{}", addr), Some("secret-key"))).unwrap();
        let err = gateway.generate(&request()).await.unwrap_err();
        assert_eq!(err.kind(), "transport-failure");
        assert!(!err.to_string().contains("secret-key"));
    }

    #[tokio::test]
    async fn test_successful_call() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello there"}]}}]}"#;
        let (base, server) = serve_once("200 OK", body).await;

        let gateway = GeminiGateway::new(config(&base, Some("k123"))).unwrap();
        let reply = gateway.generate(&request()).await.unwrap();
        assert_eq!(reply, "Hello there");

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /v1beta/models/gemini-test:generateContent?key=k123 "));
        assert!(raw.contains(r#""systemInstruction":{"parts":[{"text":"PERSONA"}]}"#));
        assert!(raw.contains(r#""contents":[{"parts":[{"text":"Who are you?"}]}]"#));
    }

    #[tokio::test]
    async fn test_missing_candidates_is_shape_failure() {
        let (base, server) = serve_once("200 OK", r#"{"promptFeedback":{}}"#).await;

        let gateway = GeminiGateway::new(config(&base, Some("k"))).unwrap();
        let err = gateway.generate(&request()).await.unwrap_err();
        assert_eq!(err, GatewayError::Shape("missing candidates".to_string()));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_protocol_failure() {
        let (base, server) =
            serve_once("403 Forbidden", r#"{"error":{"message":"API key not valid"}}"#).await;

        let gateway = GeminiGateway::new(config(&base, Some("bad"))).unwrap();
        let err = gateway.generate(&request()).await.unwrap_err();
        match err {
            GatewayError::Protocol { status, body } => {
                assert_eq!(status, 403);
                assert!(body.contains("API key not valid"));
            }
            other => panic!("expected protocol failure, got {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_failure() {
        let (base, server) = serve_once("200 OK", "<html>oops</html>").await;

        let gateway = GeminiGateway::new(config(&base, Some("k"))).unwrap();
        let err = gateway.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
        assert_eq!(err.kind(), "protocol-failure");
        server.await.unwrap();
    }
}
