use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::api::{response::ApiError, AppState};
use crate::models::life_event::{CreateLifeEvent, ListLifeEventsQuery, UpdateLifeEvent};
use crate::services::LifeEventService;

#[axum::debug_handler]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateLifeEvent>,
) -> Result<impl IntoResponse, ApiError> {
    let service = LifeEventService::new(&state.pool);
    let event = service.create(payload).await?;

    info!("Created life event {} (type {})", event.id, event.event_type_id);
    Ok((StatusCode::CREATED, Json(json!(event))))
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListLifeEventsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(100);
    let filter = query.filter();

    let service = LifeEventService::new(&state.pool);
    let events = service.list(&filter, skip, limit).await?;

    Ok((StatusCode::OK, Json(json!(events))))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let service = LifeEventService::new(&state.pool);
    match service.get(event_id).await? {
        Some(event) => Ok((StatusCode::OK, Json(json!(event)))),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Life event not found"})),
        )),
    }
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(payload): Json<UpdateLifeEvent>,
) -> Result<impl IntoResponse, ApiError> {
    let service = LifeEventService::new(&state.pool);
    match service.update(event_id, payload).await? {
        Some(event) => {
            info!("Updated life event {}", event_id);
            Ok((StatusCode::OK, Json(json!(event))))
        }
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Life event not found"})),
        )),
    }
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let service = LifeEventService::new(&state.pool);
    if service.delete(event_id).await? {
        info!("Deleted life event {}", event_id);
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Life event not found"})),
        )
            .into_response())
    }
}
