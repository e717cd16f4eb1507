pub mod event_type_service;
pub mod life_event_service;

pub use event_type_service::EventTypeService;
pub use life_event_service::LifeEventService;

/// Domain-level failures surfaced by the service layer.
///
/// Absent rows are not errors: `get`/`update` return `Option` and `delete`
/// returns `bool`, so callers decide how to represent "not found".
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A referenced `event_type_id` does not exist.
    #[error("event type {0} not found")]
    UnknownEventType(i64),

    /// An event type with this name already exists.
    #[error("event type name '{0}' already exists")]
    DuplicateName(String),

    /// A color value that is not a 6-digit hex code.
    #[error("invalid color '{0}': expected #RRGGBB")]
    InvalidColor(String),

    /// Life event `data` must be a non-null JSON document.
    #[error("event data must not be null")]
    NullData,

    /// Any other store failure, surfaced as-is.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// True when `err` is a Postgres unique-constraint violation (code 23505).
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
}

/// True when `err` is a Postgres foreign-key violation (code 23503).
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503"))
}
