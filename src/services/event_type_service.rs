use sqlx::PgPool;

use crate::models::event_type::{is_valid_color, CreateEventType, EventType, UpdateEventType};
use crate::models::life_event::{LifeEvent, LifeEventFilter};
use crate::repositories::{EventTypeRepository, LifeEventRepository};
use crate::services::{is_unique_violation, ServiceError};

pub struct EventTypeService<'a> {
    pool: &'a PgPool,
}

impl<'a> EventTypeService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Creates an event type. The color is checked before the write; a
    /// duplicate name is caught by the store's unique constraint.
    pub async fn create(&self, input: CreateEventType) -> Result<EventType, ServiceError> {
        if let Some(color) = &input.color {
            if !is_valid_color(color) {
                return Err(ServiceError::InvalidColor(color.clone()));
            }
        }

        let repo = EventTypeRepository::new(self.pool);
        match repo.create(&input).await {
            Ok(event_type) => Ok(event_type),
            Err(err) if is_unique_violation(&err) => Err(ServiceError::DuplicateName(input.name)),
            Err(err) => Err(ServiceError::Database(err)),
        }
    }

    pub async fn get(&self, id: i64) -> Result<Option<EventType>, ServiceError> {
        let repo = EventTypeRepository::new(self.pool);
        Ok(repo.find_by_id(id).await?)
    }

    pub async fn list(
        &self,
        name: Option<&str>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<EventType>, ServiceError> {
        let repo = EventTypeRepository::new(self.pool);
        Ok(repo.list(name, skip, limit).await?)
    }

    /// Applies a partial update. Returns `Ok(None)` when the id does not
    /// exist; nothing is written in that case.
    pub async fn update(
        &self,
        id: i64,
        patch: UpdateEventType,
    ) -> Result<Option<EventType>, ServiceError> {
        if let Some(color) = &patch.color {
            if !is_valid_color(color) {
                return Err(ServiceError::InvalidColor(color.clone()));
            }
        }

        let repo = EventTypeRepository::new(self.pool);
        match repo.update(id, &patch).await {
            Ok(event_type) => Ok(event_type),
            Err(err) if is_unique_violation(&err) => Err(ServiceError::DuplicateName(
                patch.name.unwrap_or_default(),
            )),
            Err(err) => Err(ServiceError::Database(err)),
        }
    }

    /// Deletes an event type and, through the FK cascade, every life event
    /// it owns. Returns `false` when the id does not exist.
    pub async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let repo = EventTypeRepository::new(self.pool);
        Ok(repo.delete(id).await?)
    }

    /// The life events owned by one event type, in insertion order.
    /// Returns `Ok(None)` when the event type does not exist.
    pub async fn events_of(
        &self,
        id: i64,
        skip: i64,
        limit: i64,
    ) -> Result<Option<Vec<LifeEvent>>, ServiceError> {
        let type_repo = EventTypeRepository::new(self.pool);
        if !type_repo.exists(id).await? {
            return Ok(None);
        }

        let event_repo = LifeEventRepository::new(self.pool);
        let filter = LifeEventFilter {
            event_type_id: Some(id),
            ..Default::default()
        };
        let events = event_repo.list(&filter, skip, limit).await?;

        Ok(Some(events))
    }
}
