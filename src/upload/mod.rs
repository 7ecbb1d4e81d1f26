//! The upload operation triggered by the Upload button.
//!
//! A click maps to exactly one POST to the configured endpoint. The outcome
//! is absorbed here: it is written to the log (informational on success,
//! error on failure) and never retried, re-thrown, or shown in the UI.
//! Multiple clicks may have multiple uploads in flight at once; each one is
//! independent and their completions are unordered.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::config::{ConfigError, UploadConfig};
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A fully resolved upload request.
///
/// Built once from [`UploadConfig`] at startup; each click clones it, so
/// in-flight uploads share nothing mutable.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Target URL
    pub url: String,
    /// Raw request body
    pub body: String,
    /// Request headers
    pub headers: Headers,
}

impl UploadRequest {
    /// Resolve a request from config. Fails only when no endpoint is set.
    pub fn from_config(config: &UploadConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            url: config.endpoint()?.to_string(),
            body: config.body().to_string(),
            headers: config.headers(),
        })
    }
}

/// Result of one upload invocation.
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// The call settled with a success response
    Completed(Response),
    /// The call failed (connection, timeout, non-2xx, anything else)
    Failed(HttpError),
}

impl UploadOutcome {
    /// Whether this outcome is a success.
    pub fn is_completed(&self) -> bool {
        matches!(self, UploadOutcome::Completed(_))
    }

    /// The log line for this outcome.
    ///
    /// Success: `Completed! <status> <body>`. Failure: `Error: <cause>`.
    pub fn summary(&self) -> String {
        match self {
            UploadOutcome::Completed(response) => {
                let body = response
                    .text()
                    .unwrap_or_else(|_| format!("<{} bytes>", response.body.len()));
                format!("Completed! {} {}", response.status, body)
            }
            UploadOutcome::Failed(err) => format!("Error: {}", err),
        }
    }

    /// Write this outcome to the log. Exactly one line per invocation:
    /// informational channel on success, error channel on failure.
    pub fn log(&self) {
        match self {
            UploadOutcome::Completed(_) => tracing::info!("{}", self.summary()),
            UploadOutcome::Failed(_) => tracing::error!("{}", self.summary()),
        }
    }
}

/// Perform one upload and fold the result into an [`UploadOutcome`].
///
/// A response with a non-2xx status is a failure here, same as a transport
/// error: the server said no, and this application has no further use for
/// the distinction.
pub async fn send_upload(client: &dyn HttpClient, request: &UploadRequest) -> UploadOutcome {
    match client
        .post(&request.url, &request.body, &request.headers)
        .await
    {
        Ok(response) if response.is_success() => UploadOutcome::Completed(response),
        Ok(response) => {
            let message = response.text().unwrap_or_default();
            UploadOutcome::Failed(HttpError::ServerError {
                status: response.status,
                message,
            })
        }
        Err(err) => UploadOutcome::Failed(err),
    }
}

/// Spawn a detached upload task for one click.
///
/// The task performs the call, logs the outcome, and ends. The handle is
/// returned so tests can await settlement; the event loop drops it.
pub fn spawn_upload(
    client: Arc<dyn HttpClient>,
    request: UploadRequest,
) -> JoinHandle<UploadOutcome> {
    tokio::spawn(async move {
        tracing::debug!(url = %request.url, "upload started");
        let outcome = send_upload(client.as_ref(), &request).await;
        outcome.log();
        outcome
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use bytes::Bytes;

    fn request() -> UploadRequest {
        UploadRequest {
            url: "https://gallery.example.com/upload".to_string(),
            body: String::new(),
            headers: Headers::new(),
        }
    }

    #[test]
    fn test_request_from_config() {
        let config = UploadConfig::new()
            .with_endpoint("https://gallery.example.com/upload")
            .with_body("{}")
            .with_content_type("application/json");

        let request = UploadRequest::from_config(&config).unwrap();
        assert_eq!(request.url, "https://gallery.example.com/upload");
        assert_eq!(request.body, "{}");
        assert_eq!(
            request.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_request_from_config_requires_endpoint() {
        assert!(UploadRequest::from_config(&UploadConfig::new()).is_err());
    }

    #[test]
    fn test_summary_completed() {
        let outcome = UploadOutcome::Completed(Response::new(200, Bytes::from("OK")));
        let summary = outcome.summary();
        assert!(summary.contains("Completed!"));
        assert!(summary.contains("OK"));
    }

    #[test]
    fn test_summary_failed() {
        let outcome = UploadOutcome::Failed(HttpError::ConnectionFailed("network down".to_string()));
        let summary = outcome.summary();
        assert!(summary.starts_with("Error:"));
        assert!(summary.contains("network down"));
    }

    #[test]
    fn test_summary_non_utf8_body() {
        let outcome = UploadOutcome::Completed(Response::new(200, Bytes::from(vec![0xff, 0xfe])));
        let summary = outcome.summary();
        assert!(summary.contains("Completed!"));
        assert!(summary.contains("<2 bytes>"));
    }

    #[tokio::test]
    async fn test_send_upload_success() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(200, Bytes::from("OK"))));

        let outcome = send_upload(&client, &request()).await;
        assert!(outcome.is_completed());
        assert_eq!(client.request_count(), 1);
    }

    #[tokio::test]
    async fn test_send_upload_non_2xx_is_failure() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(
            500,
            Bytes::from("boom"),
        )));

        let outcome = send_upload(&client, &request()).await;
        match outcome {
            UploadOutcome::Failed(HttpError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected ServerError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_upload_transport_failure() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::Timeout("30s".to_string())));

        let outcome = send_upload(&client, &request()).await;
        assert!(!outcome.is_completed());
    }

    #[tokio::test]
    async fn test_spawn_upload_settles_and_is_observable() {
        let client = Arc::new(MockHttpClient::new());
        client.set_default_response(MockResponse::Success(Response::new(200, Bytes::from("OK"))));

        let handle = spawn_upload(client.clone(), request());
        let outcome = handle.await.unwrap();
        assert!(outcome.is_completed());
        assert_eq!(client.request_count(), 1);
    }
}
