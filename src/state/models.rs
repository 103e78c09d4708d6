//! Agenda item model
//!
//! One draft discussion point for a client meeting, as produced by the
//! generation service, plus the locally managed human-review status.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Human-review status of an agenda item
///
/// Every item starts `Pending`. An explicit human decision moves it to
/// `Approved` or `Discarded`; both are terminal. There is no way back
/// to `Pending` short of regenerating the whole agenda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Awaiting a human decision
    Pending,
    /// Accepted for the meeting agenda
    Approved,
    /// Rejected by the reviewer
    Discarded,
}

impl ReviewStatus {
    /// Whether a human decision has been recorded
    pub fn is_decided(&self) -> bool {
        !matches!(self, ReviewStatus::Pending)
    }
}

/// One draft agenda item under human review
///
/// The payload is whatever JSON object the generation service emitted;
/// its schema belongs to the service and is passed through untouched.
/// Only `status` is owned by this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaItem {
    /// Service-produced fields, passed through as-is
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    /// Locally managed review status
    pub status: ReviewStatus,
}

impl AgendaItem {
    /// Wrap a freshly generated payload; status always starts `Pending`
    pub fn from_payload(payload: Map<String, Value>) -> Self {
        Self {
            payload,
            status: ReviewStatus::Pending,
        }
    }

    /// The item's identifier, if the payload carries an `id` string
    pub fn id(&self) -> Option<&str> {
        self.payload.get("id").and_then(Value::as_str)
    }
}
