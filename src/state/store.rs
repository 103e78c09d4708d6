//! Review session store
//!
//! Owns everything a prep-review UI renders from: the client list, the
//! current selection, the draft agenda under review, and the
//! loading/error flags. Operations either call the Advisor Prep service
//! through the injected [`PrepApiClient`] or mutate workflow state
//! locally; callers re-read fields after each call.
//!
//! The store is explicitly constructed (no global instance) so its
//! lifecycle is owned by whoever drives the UI.

use std::path::Path;

use serde_json::Value;

use crate::api::PrepApiClient;
use crate::state::models::{AgendaItem, ReviewStatus};

/// Message surfaced when the client list cannot be fetched
const CLIENTS_LOAD_FAILED: &str = "Failed to load clients";
/// Fallback message when generation fails without a server detail
const GENERATE_FAILED: &str = "Failed to generate prep";
/// Message surfaced when a document upload fails
const UPLOAD_FAILED: &str = "Upload failed";

/// State container for one meeting-prep review session
#[derive(Debug)]
pub struct ReviewStore {
    api: PrepApiClient,
    /// Known client identifiers, in server-provided order
    pub clients: Vec<String>,
    /// The client currently being prepared for, if any
    pub selected_client: Option<String>,
    /// Draft agenda items under review, in generation order
    pub agenda_items: Vec<AgendaItem>,
    /// Opaque source reference the UI is currently inspecting
    pub active_source: Option<Value>,
    /// Filenames stored for the selected client
    pub client_files: Vec<String>,
    /// True exactly while a generation or upload request is in flight
    pub is_loading: bool,
    /// Pending user-visible error message, `None` when clear
    pub error: Option<String>,
    /// Client display name from the last generated brief
    pub client_name: Option<String>,
    /// Meeting type from the last generated brief
    pub meeting_type: Option<String>,
}

impl ReviewStore {
    /// Create an empty session backed by the given API client
    pub fn new(api: PrepApiClient) -> Self {
        Self {
            api,
            clients: Vec::new(),
            selected_client: None,
            agenda_items: Vec::new(),
            active_source: None,
            client_files: Vec::new(),
            is_loading: false,
            error: None,
            client_name: None,
            meeting_type: None,
        }
    }

    /// The API client this session talks through
    pub fn api(&self) -> &PrepApiClient {
        &self.api
    }

    /// Select the client to prepare for
    ///
    /// Does not clear `client_files` or `agenda_items`; callers that
    /// want a clean slate use [`ReviewStore::reset`] first.
    pub fn select_client(&mut self, client_id: impl Into<String>) {
        self.selected_client = Some(client_id.into());
    }

    /// Clear all session state back to its initial values
    ///
    /// The API client and its connection pool are kept.
    pub fn reset(&mut self) {
        self.clients.clear();
        self.selected_client = None;
        self.agenda_items.clear();
        self.active_source = None;
        self.client_files.clear();
        self.is_loading = false;
        self.error = None;
        self.client_name = None;
        self.meeting_type = None;
    }

    /// Fetch the client list from the service
    ///
    /// On failure `clients` is left unchanged and a fixed message is
    /// surfaced through `error`.
    pub async fn load_clients(&mut self) {
        match self.api.list_clients().await {
            Ok(clients) => {
                self.clients = clients;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load clients");
                self.error = Some(CLIENTS_LOAD_FAILED.to_string());
            }
        }
    }

    /// Fetch the file list for the selected client
    ///
    /// No-op when nothing is selected. Failures are logged but never
    /// surfaced through `error`; `client_files` keeps its stale value.
    pub async fn load_client_files(&mut self) {
        let Some(client_id) = self.selected_client.clone() else {
            return;
        };
        match self.api.list_client_files(&client_id).await {
            Ok(files) => {
                self.client_files = files;
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    client_id = %client_id,
                    "Failed to load client files"
                );
            }
        }
    }

    /// Request a fresh draft agenda for the selected client
    ///
    /// No-op when nothing is selected. Clears `error` up front, holds
    /// `is_loading` for the duration of the call, and on success
    /// replaces `agenda_items` wholesale with every new item `Pending`.
    /// On failure the server's detail message is surfaced when present,
    /// otherwise a fixed fallback.
    pub async fn generate_prep(&mut self) {
        let Some(client_id) = self.selected_client.clone() else {
            return;
        };
        self.is_loading = true;
        self.error = None;

        match self.api.generate_prep(&client_id).await {
            Ok(brief) => {
                self.client_name = brief.client_name;
                self.meeting_type = brief.meeting_type;
                self.agenda_items = brief
                    .ai_generated_agenda
                    .into_iter()
                    .map(AgendaItem::from_payload)
                    .collect();
            }
            Err(err) => {
                self.error = Some(
                    err.detail()
                        .map(str::to_string)
                        .unwrap_or_else(|| GENERATE_FAILED.to_string()),
                );
            }
        }

        self.is_loading = false;
    }

    /// Upload a local document for the selected client
    ///
    /// No-op when nothing is selected. Holds `is_loading` for the
    /// duration; on success refreshes `client_files` before clearing the
    /// flag. A failure to read the local file counts as an upload
    /// failure.
    pub async fn upload_file(&mut self, path: &Path) {
        let Some(client_id) = self.selected_client.clone() else {
            return;
        };
        self.is_loading = true;

        match self.api.upload_file(&client_id, path).await {
            Ok(()) => {
                self.load_client_files().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, client_id = %client_id, "Upload failed");
                self.error = Some(UPLOAD_FAILED.to_string());
            }
        }

        self.is_loading = false;
    }

    /// Replace the source reference the UI is inspecting
    ///
    /// `None` closes the inspector. The value's shape is owned by the
    /// generation service and passed through untouched.
    pub fn set_active_source(&mut self, source: Option<Value>) {
        self.active_source = source;
    }

    /// Record a human decision to keep an agenda item
    ///
    /// No-op if no item carries the id or the item is already decided.
    pub fn approve_item(&mut self, id: &str) {
        self.set_item_status(id, ReviewStatus::Approved);
    }

    /// Record a human decision to drop an agenda item
    ///
    /// No-op if no item carries the id or the item is already decided.
    pub fn discard_item(&mut self, id: &str) {
        self.set_item_status(id, ReviewStatus::Discarded);
    }

    /// The approved subsequence of the agenda, order preserved
    pub fn approved_items(&self) -> Vec<&AgendaItem> {
        self.agenda_items
            .iter()
            .filter(|item| item.status == ReviewStatus::Approved)
            .collect()
    }

    /// Whether every agenda item has received an explicit decision
    ///
    /// False on an empty agenda: "nothing to review" is not "review
    /// complete".
    pub fn is_review_complete(&self) -> bool {
        !self.agenda_items.is_empty()
            && self.agenda_items.iter().all(|item| item.status.is_decided())
    }

    /// Apply a decision to the pending item with the given id
    ///
    /// Decided items are terminal; a second decision never overwrites
    /// the first.
    fn set_item_status(&mut self, id: &str, status: ReviewStatus) {
        if let Some(item) = self
            .agenda_items
            .iter_mut()
            .find(|item| item.id() == Some(id))
        {
            if item.status == ReviewStatus::Pending {
                item.status = status;
            }
        }
    }
}
