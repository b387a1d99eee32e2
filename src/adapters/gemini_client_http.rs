//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{API_KEY_ENV, AppError, CompletionConfig, MODEL_ENV};
use crate::ports::CompletionProvider;

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const DEFAULT_STATUS_MESSAGE: &str = "Completion request failed";

/// HTTP transport for the Gemini API.
///
/// One request per call; failures are returned to the caller without retrying.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a client for the configured model.
    pub fn new(api_key: String, config: &CompletionConfig) -> Result<Self, AppError> {
        if api_key.trim().is_empty() {
            return Err(AppError::NotConfigured(API_KEY_ENV.into()));
        }

        let endpoint = generate_content_url(&config.api_url, &config.model)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::CompletionApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, endpoint, client })
    }

    /// Create from `GEMINI_API_KEY`, honoring a `GEMINI_MODEL` override.
    ///
    /// Fails with [`AppError::NotConfigured`] before any network access when the key
    /// is absent.
    pub fn from_env_with_config(config: &CompletionConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::NotConfigured(API_KEY_ENV.into()))?;

        let mut config = config.clone();
        if let Some(model) = std::env::var(MODEL_ENV).ok().filter(|m| !m.trim().is_empty()) {
            config.model = model;
        }

        Self::new(api_key, &config)
    }

    /// Whether a credential is present in the environment.
    pub fn is_configured() -> bool {
        std::env::var(API_KEY_ENV).map(|key| !key.trim().is_empty()).unwrap_or(false)
    }

    fn send_request(&self, request: &ApiRequest) -> Result<String, AppError> {
        log::debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::CompletionApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::CompletionApi {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            return api_response.text().ok_or_else(|| AppError::CompletionApi {
                message: "No candidate text in response".into(),
                status: Some(status.as_u16()),
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::CompletionApi { message, status: Some(status.as_u16()) })
    }
}

fn generate_content_url(base: &Url, model: &str) -> Result<Url, AppError> {
    let raw = format!("{}/models/{}:generateContent", base.as_str().trim_end_matches('/'), model);
    Url::parse(&raw).map_err(|e| AppError::InvalidConfig(format!("Invalid API URL {}: {}", raw, e)))
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl ApiResponse {
    fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String =
            candidate.content.parts.iter().filter_map(|part| part.text.as_deref()).collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl CompletionProvider for HttpGeminiClient {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let request = ApiRequest {
            contents: vec![Content { parts: vec![Part { text: Some(prompt.to_string()) }] }],
        };

        self.send_request(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "/models/test-model:generateContent";

    fn config_for(server: &mockito::Server) -> CompletionConfig {
        CompletionConfig {
            api_url: Url::parse(&server.url()).unwrap(),
            model: "test-model".to_string(),
            timeout_secs: 1,
        }
    }

    #[test]
    fn builds_generate_content_endpoint() {
        let base = Url::parse("https://example.com/v1beta/").unwrap();
        let url = generate_content_url(&base, "gemini-1.5-flash").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn blank_api_key_is_not_configured() {
        let err = HttpGeminiClient::new("  ".into(), &CompletionConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::NotConfigured(_)));
    }

    #[test]
    fn complete_returns_candidate_text() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", ENDPOINT)
            .match_header("x-goog-api-key", "fake-key")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"contents":[{"parts":[{"text":"fill these"}]}]}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"{\"A\":"},{"text":"\"1\"}"}]}}]}"#,
            )
            .expect(1)
            .create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let text = client.complete("fill these").unwrap();

        assert_eq!(text, r#"{"A":"1"}"#);
        mock.assert();
    }

    #[test]
    fn complete_without_candidates_is_an_error() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", ENDPOINT).with_status(200).with_body("{}").create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = client.complete("x").unwrap_err();

        assert!(matches!(err, AppError::CompletionApi { status: Some(200), .. }));
    }

    #[test]
    fn server_error_is_returned_without_retry() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", ENDPOINT).with_status(500).expect(1).create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = client.complete("x").unwrap_err();

        match err {
            AppError::CompletionApi { message, status } => {
                assert_eq!(status, Some(500));
                assert_eq!(message, "Server error");
            }
            other => panic!("unexpected error variant: {}", other),
        }
        mock.assert();
    }

    #[test]
    fn rate_limit_has_readable_message() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", ENDPOINT).with_status(429).create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = client.complete("x").unwrap_err();

        assert_eq!(err.to_string(), "Completion API error: Rate limited");
    }

    #[test]
    fn parses_nested_error_message() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", ENDPOINT)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"API key not valid"}}"#)
            .create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = client.complete("x").unwrap_err();

        match err {
            AppError::CompletionApi { message, status } => {
                assert_eq!(status, Some(400));
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error variant: {}", other),
        }
    }
}
