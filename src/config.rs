//! Upload target configuration.
//!
//! The endpoint URL and request body are integration points, not values the
//! application can invent, so they come from external configuration: a JSON
//! config file at `~/.mosaiq/config.json`, overridden field-by-field by
//! environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::traits::Headers;

/// Environment variable naming the upload endpoint URL.
pub const ENV_UPLOAD_URL: &str = "MOSAIQ_UPLOAD_URL";
/// Environment variable holding the raw request body.
pub const ENV_UPLOAD_BODY: &str = "MOSAIQ_UPLOAD_BODY";
/// Environment variable for the Content-Type header.
pub const ENV_CONTENT_TYPE: &str = "MOSAIQ_CONTENT_TYPE";
/// Environment variable for the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "MOSAIQ_TIMEOUT_SECS";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No endpoint was configured anywhere
    #[error("no upload endpoint configured; set {ENV_UPLOAD_URL} or add \"endpoint\" to the config file")]
    MissingEndpoint,
    /// Config file exists but could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Config file exists but is not valid JSON
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Upload target configuration.
///
/// Use the builder methods to customize, or [`UploadConfig::load`] to pull
/// from the config file and environment.
///
/// # Example
///
/// ```ignore
/// use mosaiq::config::UploadConfig;
///
/// let config = UploadConfig::default()
///     .with_endpoint("https://gallery.example.com/upload")
///     .with_body(r#"{"album":"inbox"}"#);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Target URL for the POST request
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Raw request body (empty when unset)
    #[serde(default)]
    pub body: Option<String>,
    /// Content-Type header value
    #[serde(default)]
    pub content_type: Option<String>,
    /// Request timeout in seconds (client default when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl UploadConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the Content-Type header.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Default config file path: `~/.mosaiq/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".mosaiq").join("config.json"))
    }

    /// Load config from a JSON file.
    ///
    /// A missing file is not an error; it yields an empty config.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay environment variables onto this config.
    ///
    /// Each variable that is set replaces the corresponding field.
    pub fn overlay_env(mut self) -> Self {
        if let Ok(url) = std::env::var(ENV_UPLOAD_URL) {
            self.endpoint = Some(url);
        }
        if let Ok(body) = std::env::var(ENV_UPLOAD_BODY) {
            self.body = Some(body);
        }
        if let Ok(content_type) = std::env::var(ENV_CONTENT_TYPE) {
            self.content_type = Some(content_type);
        }
        if let Ok(secs) = std::env::var(ENV_TIMEOUT_SECS) {
            if let Ok(secs) = secs.parse() {
                self.timeout_secs = Some(secs);
            }
        }
        self
    }

    /// Load the effective config: config file first, environment on top.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match Self::default_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        Ok(base.overlay_env())
    }

    /// The configured endpoint, or an error when unset.
    pub fn endpoint(&self) -> Result<&str, ConfigError> {
        self.endpoint
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingEndpoint)
    }

    /// The request body ("" when unset, matching an empty form post).
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// Headers for the upload request.
    pub fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        if let Some(content_type) = &self.content_type {
            headers.insert("Content-Type".to_string(), content_type.clone());
        }
        headers
    }
}
