//! Advisor Prep service client
//!
//! Direct HTTP client for the four REST endpoints the prep workflow
//! consumes. One method per endpoint; all methods share a pooled
//! [`reqwest::Client`] and the base URL from [`ApiConfig`], so tests can
//! point an instance at a mock server.

pub mod types;

use std::path::Path;

use reqwest::multipart;

use crate::config::ApiConfig;
use crate::error::ApiError;
use types::{ClientsResponse, ErrorBody, FilesResponse, PrepBrief};

/// HTTP client for the Advisor Prep service
#[derive(Debug, Clone)]
pub struct PrepApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PrepApiClient {
    /// Create a client for the service at `config.base_url`
    ///
    /// The underlying connection pool is shared across all calls made
    /// through this instance and its clones.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch the list of known clients
    ///
    /// `GET /clients`, order preserved as the server sent it.
    pub async fn list_clients(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/clients", self.config.base_url);
        tracing::debug!(url = %url, "Fetching client list");

        let response = self.http.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        let body: ClientsResponse = response.json().await?;

        tracing::debug!(count = body.clients.len(), "Fetched client list");
        Ok(body.clients)
    }

    /// Fetch the filenames stored for one client
    ///
    /// `GET /clients/{id}/files`.
    pub async fn list_client_files(&self, client_id: &str) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/clients/{}/files", self.config.base_url, client_id);
        tracing::debug!(url = %url, client_id = %client_id, "Fetching client files");

        let response = self.http.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        let body: FilesResponse = response.json().await?;

        tracing::debug!(
            client_id = %client_id,
            count = body.files.len(),
            "Fetched client files"
        );
        Ok(body.files)
    }

    /// Request an AI-generated preparatory brief for one client
    ///
    /// `POST /generate_prep/{id}`. The service runs retrieval over the
    /// client's ingested documents and can take a while; no explicit
    /// timeout is applied beyond reqwest's defaults.
    ///
    /// # Errors
    /// Returns [`ApiError::Status`] with the server's `detail` message
    /// when generation is rejected (no document context, quota, model
    /// failure), so callers can surface it verbatim.
    pub async fn generate_prep(&self, client_id: &str) -> Result<PrepBrief, ApiError> {
        let url = format!("{}/generate_prep/{}", self.config.base_url, client_id);
        tracing::debug!(url = %url, client_id = %client_id, "Requesting prep brief generation");

        let response = self.http.post(&url).send().await?;
        let response = Self::check_status(response).await?;
        let brief: PrepBrief = response.json().await?;

        tracing::debug!(
            client_id = %client_id,
            item_count = brief.ai_generated_agenda.len(),
            "Generated prep brief"
        );
        Ok(brief)
    }

    /// Upload one document for a client as a multipart form
    ///
    /// `POST /upload/{id}` with the file contents under the form field
    /// `file`. The response body is ignored; any 2xx counts as success.
    pub async fn upload_file(&self, client_id: &str, path: &Path) -> Result<(), ApiError> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name")
            })?
            .to_string();
        let bytes = tokio::fs::read(path).await?;

        let url = format!("{}/upload/{}", self.config.base_url, client_id);
        tracing::debug!(
            url = %url,
            client_id = %client_id,
            filename = %filename,
            size = bytes.len(),
            "Uploading file"
        );

        let form = multipart::Form::new().part("file", multipart::Part::bytes(bytes).file_name(filename));
        let response = self.http.post(&url).multipart(form).send().await?;
        Self::check_status(response).await?;

        Ok(())
    }

    /// Map a non-success response to `ApiError::Status`
    ///
    /// Reads the error body and extracts the FastAPI `detail` field when
    /// present; the raw body is logged either way.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());

        tracing::error!(
            status_code = status_code,
            error_body = %error_body,
            "Server returned error status"
        );

        let detail = serde_json::from_str::<ErrorBody>(&error_body)
            .ok()
            .and_then(|body| body.detail);

        Err(ApiError::Status {
            status: status_code,
            detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serial_test::serial;
    use std::io::Write;

    fn client_for(server: &Server) -> PrepApiClient {
        PrepApiClient::new(ApiConfig::with_base_url(server.url()))
    }

    #[tokio::test]
    #[serial]
    async fn test_list_clients_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/clients")
            .with_status(200)
            .with_body(r#"{"clients": ["acme", "globex"]}"#)
            .create_async()
            .await;

        let result = client_for(&server).list_clients().await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), vec!["acme", "globex"]);
    }

    #[tokio::test]
    #[serial]
    async fn test_list_client_files_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/clients/acme/files")
            .with_status(200)
            .with_body(r#"{"files": ["q3-report.pdf", "notes.txt"]}"#)
            .create_async()
            .await;

        let result = client_for(&server).list_client_files("acme").await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), vec!["q3-report.pdf", "notes.txt"]);
    }

    #[tokio::test]
    #[serial]
    async fn test_generate_prep_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/generate_prep/acme")
            .with_status(200)
            .with_body(
                r#"{
                    "client_name": "Acme Corp",
                    "meeting_type": "portfolio review",
                    "ai_generated_agenda": [
                        {"id": "1", "topic": "Q3 losses", "insight": "Tech exposure", "action_required": "rebalance", "sources": []}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let result = client_for(&server).generate_prep("acme").await;

        mock.assert_async().await;
        let brief = result.unwrap();
        assert_eq!(brief.client_name.as_deref(), Some("Acme Corp"));
        assert_eq!(brief.meeting_type.as_deref(), Some("portfolio review"));
        assert_eq!(brief.ai_generated_agenda.len(), 1);
        assert_eq!(
            brief.ai_generated_agenda[0].get("topic").unwrap(),
            "Q3 losses"
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_generate_prep_extracts_detail() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/generate_prep/acme")
            .with_status(404)
            .with_body(r#"{"detail": "No document context found for this client."}"#)
            .create_async()
            .await;

        let result = client_for(&server).generate_prep("acme").await;

        mock.assert_async().await;
        let err = result.unwrap_err();
        assert_eq!(
            err.detail(),
            Some("No document context found for this client.")
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_generate_prep_non_json_error_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/generate_prep/acme")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let result = client_for(&server).generate_prep("acme").await;

        mock.assert_async().await;
        match result.unwrap_err() {
            ApiError::Status { status, detail } => {
                assert_eq!(status, 502);
                assert!(detail.is_none());
            }
            other => panic!("expected status error, got: {other}"),
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_upload_file_sends_multipart() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/upload/acme")
            .match_header(
                "content-type",
                mockito::Matcher::Regex("multipart/form-data.*".to_string()),
            )
            .with_status(200)
            .with_body(r#"{"filename": "notes.txt", "status": "Uploaded and ingested successfully"}"#)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "meeting notes").unwrap();

        let result = client_for(&server).upload_file("acme", &path).await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_upload_file_missing_local_file() {
        let server = Server::new_async().await;
        let result = client_for(&server)
            .upload_file("acme", Path::new("/nonexistent/notes.txt"))
            .await;
        assert!(matches!(result.unwrap_err(), ApiError::FileRead(_)));
    }
}
