use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::observability;
use crate::types::{ChatCompletion, ChatCompletionParams};

const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// The completion seam between the session and the remote service.
///
/// The session composes the request and calls through this trait; the
/// production implementation is [`Groq`], and tests substitute a scripted
/// backend so failures become first-class return values.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Performs one synchronous (awaited, non-streaming) completion call.
    async fn complete(&self, params: ChatCompletionParams) -> Result<ChatCompletion>;
}

/// Client for the Groq OpenAI-compatible chat-completions API.
#[derive(Debug, Clone)]
pub struct Groq {
    api_key: String,
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
}

impl Groq {
    /// Create a new Groq client.
    ///
    /// The API key can be provided directly or resolved through
    /// [`crate::credentials::resolve`] (secrets file, then the
    /// GROQ_API_KEY environment variable).
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_options(api_key, None, None)
    }

    /// Create a new client with custom settings.
    pub fn with_options(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let api_key = match api_key {
            Some(key) => key,
            None => crate::credentials::resolve(None, None)?,
        };

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            api_key,
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout,
        })
    }

    /// Create and return default headers for API requests.
    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key)).map_err(|_| {
            Error::configuration("API key contains characters not valid in a header")
        })?;
        headers.insert(header::AUTHORIZATION, bearer);
        Ok(headers)
    }

    /// Process API response errors and convert to our Error type
    async fn process_error_response(response: Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        // Get headers we might need for error processing
        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|val| val.to_str().ok())
            .map(String::from);

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|val| val.to_str().ok())
            .and_then(|val| val.parse::<u64>().ok());

        // Try to parse error response body
        #[derive(Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(Deserialize)]
        struct ErrorDetail {
            #[serde(rename = "type")]
            error_type: Option<String>,
            message: Option<String>,
            param: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        // Try to parse as JSON first
        let parsed_error = serde_json::from_str::<ErrorResponse>(&error_body).ok();
        let error_type = parsed_error
            .as_ref()
            .and_then(|e| e.error.as_ref())
            .and_then(|e| e.error_type.clone());
        let error_message = parsed_error
            .as_ref()
            .and_then(|e| e.error.as_ref())
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| error_body.clone());
        let error_param = parsed_error
            .as_ref()
            .and_then(|e| e.error.as_ref())
            .and_then(|e| e.param.clone());

        // Map HTTP status code to appropriate error type
        match status_code {
            400 => Error::bad_request(error_message, error_param),
            401 => Error::authentication(error_message),
            403 => Error::permission(error_message),
            404 => Error::not_found(error_message),
            408 => Error::timeout(error_message, None),
            429 => Error::rate_limit(error_message, retry_after),
            500 => Error::internal_server(error_message, request_id),
            502..=504 => Error::service_unavailable(error_message, retry_after),
            _ => Error::api(status_code, error_type, error_message, request_id),
        }
    }

    /// Send a completion request and get the non-streaming response.
    ///
    /// One blocking call per user turn; no retries, no response caching.
    pub async fn complete(&self, params: ChatCompletionParams) -> Result<ChatCompletion> {
        let url = format!("{}chat/completions", self.base_url);
        let headers = self.default_headers()?;

        observability::CLIENT_REQUESTS.click();
        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&params)
            .send()
            .await
            .map_err(|e| {
                observability::CLIENT_REQUEST_ERRORS.click();
                if e.is_timeout() {
                    Error::timeout(
                        format!("Request timed out: {}", e),
                        Some(self.timeout.as_secs_f64()),
                    )
                } else if e.is_connect() {
                    Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
                } else {
                    Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
                }
            })?;

        observability::CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());

        if !response.status().is_success() {
            observability::CLIENT_REQUEST_ERRORS.click();
            return Err(Self::process_error_response(response).await);
        }

        response.json::<ChatCompletion>().await.map_err(|e| {
            observability::CLIENT_REQUEST_ERRORS.click();
            Error::serialization(
                format!("Failed to parse response: {}", e),
                Some(Box::new(e)),
            )
        })
    }
}

#[async_trait::async_trait]
impl CompletionBackend for Groq {
    async fn complete(&self, params: ChatCompletionParams) -> Result<ChatCompletion> {
        Groq::complete(self, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        // Test with explicit API key
        let client = Groq::new(Some("test-key".to_string())).unwrap();
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, DEFAULT_API_URL);
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);

        // Test with custom options
        let client = Groq::with_options(
            Some("test-key".to_string()),
            Some("https://custom-api.example.com/".to_string()),
            Some(Duration::from_secs(30)),
        )
        .unwrap();
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, "https://custom-api.example.com/");
        assert_eq!(client.timeout, Duration::from_secs(30));
    }

    #[test]
    fn bearer_header_present() {
        let client = Groq::new(Some("gsk_test".to_string())).unwrap();
        let headers = client.default_headers().unwrap();
        assert_eq!(
            headers
                .get(header::AUTHORIZATION)
                .and_then(|val| val.to_str().ok()),
            Some("Bearer gsk_test")
        );
        assert_eq!(
            headers
                .get(header::CONTENT_TYPE)
                .and_then(|val| val.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn header_unsafe_key_is_configuration_error() {
        let client = Groq::new(Some("bad\nkey".to_string())).unwrap();
        let err = client.default_headers().unwrap_err();
        assert!(err.is_configuration());
    }
}
