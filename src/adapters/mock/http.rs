//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that records requests and
//! returns scripted outcomes, so tests can verify the upload boundary
//! without network access.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body
    pub body: Option<String>,
}

/// Configuration for a mock outcome.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Resolve with a response
    Success(Response),
    /// Reject with an error
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// Outcomes can be scripted two ways:
/// - per URL with [`set_response`](Self::set_response) (exact match, then
///   prefix match), or
/// - as a FIFO queue with [`queue_response`](Self::queue_response), which
///   takes priority and lets each successive request get its own outcome.
///
/// Every request is recorded and retrievable with
/// [`requests`](Self::requests).
///
/// # Example
///
/// ```ignore
/// use mosaiq::adapters::mock::{MockHttpClient, MockResponse};
/// use mosaiq::traits::{Headers, HttpClient, Response};
/// use bytes::Bytes;
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "https://example.com/upload",
///     MockResponse::Success(Response::new(200, Bytes::from("OK"))),
/// );
///
/// let response = client.post("https://example.com/upload", "{}", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// FIFO queue of outcomes, consumed before URL patterns
    queued: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Default response when nothing else matches
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a specific URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Queue a one-shot response. Queued responses are consumed in order,
    /// before any URL match is attempted.
    pub fn queue_response(&self, response: MockResponse) {
        self.queued.lock().unwrap().push_back(response);
    }

    /// Set a default response for requests without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of recorded requests.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// Record a request.
    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    /// Resolve the outcome for a URL.
    fn next_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(queued) = self.queued.lock().unwrap().pop_front() {
            return Some(queued);
        }

        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        // Prefix match for URL patterns
        for (pattern, response) in responses.iter() {
            if url.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));

        match self.next_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_mock_records_post() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/upload",
            MockResponse::Success(Response::new(200, Bytes::from("OK"))),
        );

        let response = client
            .post("https://example.com/upload", r#"{"a":1}"#, &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].url, "https://example.com/upload");
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"a":1}"#));
    }

    #[tokio::test]
    async fn test_mock_error_outcome() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/upload",
            MockResponse::Error(HttpError::ConnectionFailed("network down".to_string())),
        );

        let result = client
            .post("https://example.com/upload", "{}", &Headers::new())
            .await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_mock_queue_consumed_in_order() {
        let client = MockHttpClient::new();
        client.queue_response(MockResponse::Success(Response::new(200, Bytes::from("first"))));
        client.queue_response(MockResponse::Error(HttpError::Timeout("second".to_string())));

        let first = client.post("u", "{}", &Headers::new()).await.unwrap();
        assert_eq!(first.text().unwrap(), "first");

        let second = client.post("u", "{}", &Headers::new()).await;
        assert!(matches!(second, Err(HttpError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_mock_prefix_match_and_default() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/",
            MockResponse::Success(Response::new(201, Bytes::new())),
        );
        client.set_default_response(MockResponse::Success(Response::new(418, Bytes::new())));

        let prefixed = client
            .post("https://example.com/upload", "{}", &Headers::new())
            .await
            .unwrap();
        assert_eq!(prefixed.status, 201);

        let fallback = client
            .post("https://other.example/upload", "{}", &Headers::new())
            .await
            .unwrap();
        assert_eq!(fallback.status, 418);
    }

    #[tokio::test]
    async fn test_mock_no_response_configured() {
        let client = MockHttpClient::new();
        let result = client.post("u", "{}", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[test]
    fn test_clear_requests() {
        let client = MockHttpClient::new();
        client.record_request("POST", "u", &Headers::new(), None);
        assert_eq!(client.request_count(), 1);
        client.clear_requests();
        assert_eq!(client.request_count(), 0);
    }
}
