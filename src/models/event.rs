//! Event response records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event received by the configured user, as served by
/// `users/{username}/received_events`.
///
/// Event payloads vary by event type and stay opaque JSON; callers that care
/// about a specific type pick the fields they need out of `payload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivedEvent {
    /// The event id. Numeric on the wire, but delivered as a string.
    pub id: String,

    /// The event type, e.g. `"WatchEvent"` or `"PushEvent"`.
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,

    #[serde(default)]
    pub actor: Option<EventActor>,

    #[serde(default)]
    pub repo: Option<EventRepo>,

    #[serde(default)]
    pub payload: serde_json::Value,

    #[serde(default)]
    pub public: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The account that triggered an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventActor {
    pub id: u64,

    pub login: String,

    /// Login as shown in timelines; can differ from `login` for renames.
    #[serde(default)]
    pub display_login: Option<String>,

    #[serde(default)]
    pub gravatar_id: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// The repository an event happened in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRepo {
    pub id: u64,

    /// The `owner/name` form.
    pub name: String,

    #[serde(default)]
    pub url: Option<String>,
}
