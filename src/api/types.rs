//! Wire types for the Advisor Prep REST API
//!
//! These mirror the JSON bodies the service produces. Agenda items are
//! kept as raw JSON maps: the generation service owns their schema
//! (currently `id`, `topic`, `insight`, `action_required`, `sources`)
//! and this client must not break when it evolves.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Response for `GET /clients`
#[derive(Debug, Deserialize)]
pub struct ClientsResponse {
    /// Client identifiers in server-provided order
    pub clients: Vec<String>,
}

/// Response for `GET /clients/{id}/files`
#[derive(Debug, Deserialize)]
pub struct FilesResponse {
    /// Filenames belonging to the client
    pub files: Vec<String>,
}

/// Response for `POST /generate_prep/{id}`
///
/// One generated preparatory brief for an upcoming client meeting.
#[derive(Debug, Clone, Deserialize)]
pub struct PrepBrief {
    /// Display name of the client the brief was generated for
    #[serde(default)]
    pub client_name: Option<String>,
    /// Kind of meeting the service inferred (e.g. "portfolio review")
    #[serde(default)]
    pub meeting_type: Option<String>,
    /// Draft agenda items, one opaque payload each
    pub ai_generated_agenda: Vec<Map<String, Value>>,
}

/// Error body FastAPI-style services attach to non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description
    pub detail: Option<String>,
}
