use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single timestamped occurrence belonging to exactly one event type.
/// The shape of `data` is free-form; the owning event type's schema is
/// advisory only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LifeEvent {
    pub id: i64,

    pub timestamp: DateTime<Utc>,

    pub data: serde_json::Value,

    pub event_type_id: i64,

    /// Name of the owning event type, resolved through the relationship.
    pub event_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLifeEvent {
    pub event_type_id: i64,

    /// Defaults to the current time when omitted.
    pub timestamp: Option<DateTime<Utc>>,

    pub data: serde_json::Value,
}

/// Patch for an existing life event. Fields left as `None` (omitted or
/// explicit JSON null) are not touched by the update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLifeEvent {
    pub event_type_id: Option<i64>,
    pub timestamp: Option<DateTime<Utc>>,
    pub data: Option<serde_json::Value>,
}

/// Sparse set of list predicates, combined with logical AND. Unset fields
/// impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct LifeEventFilter {
    pub event_type_id: Option<i64>,

    /// Keep events with `timestamp >= start_date`.
    pub start_date: Option<DateTime<Utc>>,

    /// Keep events with `timestamp <= end_date`.
    pub end_date: Option<DateTime<Utc>>,
}

/// Query parameters accepted by the life-event list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListLifeEventsQuery {
    pub event_type_id: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Bare skip/limit parameters, for endpoints that paginate without
/// filtering.
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl ListLifeEventsQuery {
    pub fn filter(&self) -> LifeEventFilter {
        LifeEventFilter {
            event_type_id: self.event_type_id,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}
