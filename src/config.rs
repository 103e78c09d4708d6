//! Client configuration
//!
//! Centralized configuration with environment variable support and a
//! sensible default pointing at a locally running service.

use std::env;

/// Default base URL for a locally running Advisor Prep service
const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// API client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the Advisor Prep service, without a trailing slash
    pub base_url: String,
}

impl ApiConfig {
    /// Load configuration from environment variables with defaults
    ///
    /// Reads `PREP_API_BASE`; falls back to `http://localhost:8000/api`.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("PREP_API_BASE")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Create a configuration pointing at an explicit base URL
    ///
    /// Used by tests to target a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of a raw document as served by the backend's static mount
    ///
    /// The service exposes uploaded files directly under
    /// `{base}/documents/{client}/{file}`, so a UI can open the document
    /// an agenda source points at.
    pub fn document_url(&self, client_id: &str, filename: &str) -> String {
        format!("{}/documents/{}/{}", self.base_url, client_id, filename)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
