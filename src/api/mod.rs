pub mod event_types;
pub mod events;
pub mod health;
pub mod response;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

pub fn build_router(pool: PgPool) -> Router {
    let state = AppState { pool };

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/event-types", get(event_types::list_event_types))
        .route("/api/v1/event-types", post(event_types::create_event_type))
        .route("/api/v1/event-types/{id}", get(event_types::get_event_type))
        .route("/api/v1/event-types/{id}", put(event_types::update_event_type))
        .route("/api/v1/event-types/{id}", delete(event_types::delete_event_type))
        .route(
            "/api/v1/event-types/{id}/events",
            get(event_types::list_events_of_type),
        )
        .route("/api/v1/events", get(events::list_events))
        .route("/api/v1/events", post(events::create_event))
        .route("/api/v1/events/{id}", get(events::get_event))
        .route("/api/v1/events/{id}", put(events::update_event))
        .route("/api/v1/events/{id}", delete(events::delete_event))
        .with_state(state)
}
