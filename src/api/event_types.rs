use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::api::{response::ApiError, AppState};
use crate::models::event_type::{CreateEventType, ListEventTypesQuery, UpdateEventType};
use crate::models::life_event::PaginationQuery;
use crate::services::EventTypeService;

pub async fn create_event_type(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventType>,
) -> Result<impl IntoResponse, ApiError> {
    let service = EventTypeService::new(&state.pool);
    let event_type = service.create(payload).await?;

    info!("Created event type {} ({})", event_type.id, event_type.name);
    Ok((StatusCode::CREATED, Json(json!(event_type))))
}

pub async fn list_event_types(
    State(state): State<AppState>,
    Query(query): Query<ListEventTypesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(100);

    let service = EventTypeService::new(&state.pool);
    let event_types = service.list(query.name.as_deref(), skip, limit).await?;

    Ok((StatusCode::OK, Json(json!(event_types))))
}

pub async fn get_event_type(
    State(state): State<AppState>,
    Path(type_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let service = EventTypeService::new(&state.pool);
    match service.get(type_id).await? {
        Some(event_type) => Ok((StatusCode::OK, Json(json!(event_type)))),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Event type not found"})),
        )),
    }
}

pub async fn update_event_type(
    State(state): State<AppState>,
    Path(type_id): Path<i64>,
    Json(payload): Json<UpdateEventType>,
) -> Result<impl IntoResponse, ApiError> {
    let service = EventTypeService::new(&state.pool);
    match service.update(type_id, payload).await? {
        Some(event_type) => {
            info!("Updated event type {}", type_id);
            Ok((StatusCode::OK, Json(json!(event_type))))
        }
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Event type not found"})),
        )),
    }
}

pub async fn delete_event_type(
    State(state): State<AppState>,
    Path(type_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let service = EventTypeService::new(&state.pool);
    if service.delete(type_id).await? {
        info!("Deleted event type {} and its events", type_id);
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Event type not found"})),
        )
            .into_response())
    }
}

pub async fn list_events_of_type(
    State(state): State<AppState>,
    Path(type_id): Path<i64>,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(100);

    let service = EventTypeService::new(&state.pool);
    match service.events_of(type_id, skip, limit).await? {
        Some(events) => Ok((StatusCode::OK, Json(json!(events)))),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Event type not found"})),
        )),
    }
}
