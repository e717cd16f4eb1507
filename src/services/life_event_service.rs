use sqlx::PgPool;

use crate::models::life_event::{CreateLifeEvent, LifeEvent, LifeEventFilter, UpdateLifeEvent};
use crate::repositories::{EventTypeRepository, LifeEventRepository};
use crate::services::{is_foreign_key_violation, ServiceError};

pub struct LifeEventService<'a> {
    pool: &'a PgPool,
}

impl<'a> LifeEventService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Creates a life event after confirming the referenced event type
    /// exists, so unknown references fail before anything is written. The
    /// store's FK constraint remains the backstop for the check-then-insert
    /// race.
    pub async fn create(&self, input: CreateLifeEvent) -> Result<LifeEvent, ServiceError> {
        if input.data.is_null() {
            return Err(ServiceError::NullData);
        }

        let type_repo = EventTypeRepository::new(self.pool);
        if !type_repo.exists(input.event_type_id).await? {
            return Err(ServiceError::UnknownEventType(input.event_type_id));
        }

        let repo = LifeEventRepository::new(self.pool);
        match repo.create(&input).await {
            Ok(event) => Ok(event),
            Err(err) if is_foreign_key_violation(&err) => {
                Err(ServiceError::UnknownEventType(input.event_type_id))
            }
            Err(err) => Err(ServiceError::Database(err)),
        }
    }

    pub async fn get(&self, id: i64) -> Result<Option<LifeEvent>, ServiceError> {
        let repo = LifeEventRepository::new(self.pool);
        Ok(repo.find_by_id(id).await?)
    }

    pub async fn list(
        &self,
        filter: &LifeEventFilter,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<LifeEvent>, ServiceError> {
        let repo = LifeEventRepository::new(self.pool);
        Ok(repo.list(filter, skip, limit).await?)
    }

    /// Applies a partial update. A reassigned `event_type_id` is checked to
    /// exist first; on failure the record is left unchanged. Returns
    /// `Ok(None)` when the id does not exist.
    pub async fn update(
        &self,
        id: i64,
        patch: UpdateLifeEvent,
    ) -> Result<Option<LifeEvent>, ServiceError> {
        if let Some(data) = &patch.data {
            if data.is_null() {
                return Err(ServiceError::NullData);
            }
        }

        if let Some(event_type_id) = patch.event_type_id {
            let type_repo = EventTypeRepository::new(self.pool);
            if !type_repo.exists(event_type_id).await? {
                return Err(ServiceError::UnknownEventType(event_type_id));
            }
        }

        let repo = LifeEventRepository::new(self.pool);
        match repo.update(id, &patch).await {
            Ok(event) => Ok(event),
            Err(err) if is_foreign_key_violation(&err) => Err(ServiceError::UnknownEventType(
                patch.event_type_id.unwrap_or_default(),
            )),
            Err(err) => Err(ServiceError::Database(err)),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let repo = LifeEventRepository::new(self.pool);
        Ok(repo.delete(id).await?)
    }
}
