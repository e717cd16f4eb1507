use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category template for life events: a unique name plus optional
/// display metadata and an advisory JSON Schema for event payloads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventType {
    pub id: i64,
    pub name: String,

    pub description: Option<String>,

    /// JSON-Schema-shaped document describing the expected shape of
    /// associated events' `data`. Stored as metadata only, never enforced
    /// against writes.
    pub event_schema: Option<serde_json::Value>,

    pub icon: Option<String>,

    /// Hex color for UI display, `#RRGGBB` when present.
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventType {
    pub name: String,
    pub description: Option<String>,
    pub event_schema: Option<serde_json::Value>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// Patch for an existing event type. Fields left as `None` (omitted or
/// explicit JSON null) are not touched by the update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventType {
    pub name: Option<String>,
    pub description: Option<String>,
    pub event_schema: Option<serde_json::Value>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// Query parameters accepted by the event-type list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListEventTypesQuery {
    pub name: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Returns true if `value` is a 6-digit hex color of the form `#RRGGBB`.
pub fn is_valid_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
