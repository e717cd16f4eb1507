use sqlx::{PgPool, QueryBuilder};

use crate::models::life_event::{CreateLifeEvent, LifeEvent, LifeEventFilter, UpdateLifeEvent};

const COLUMNS: &str = "id, timestamp, data, event_type_id, \
    (SELECT name FROM event_types WHERE event_types.id = life_events.event_type_id) AS event_name";

pub struct LifeEventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LifeEventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new life event. A missing `timestamp` falls back to the
    /// database clock.
    pub async fn create(&self, input: &CreateLifeEvent) -> Result<LifeEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO life_events (event_type_id, timestamp, data)
             VALUES ($1, COALESCE($2, NOW()), $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LifeEvent>(&query)
            .bind(input.event_type_id)
            .bind(input.timestamp)
            .bind(&input.data)
            .fetch_one(self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<LifeEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM life_events WHERE id = $1");
        sqlx::query_as::<_, LifeEvent>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await
    }

    /// Lists life events matching every predicate set in `filter`, in
    /// insertion order. Pagination applies after filtering.
    pub async fn list(
        &self,
        filter: &LifeEventFilter,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<LifeEvent>, sqlx::Error> {
        let mut query_builder =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM life_events WHERE 1=1"));

        if let Some(event_type_id) = filter.event_type_id {
            query_builder.push(" AND event_type_id = ");
            query_builder.push_bind(event_type_id);
        }

        if let Some(start_date) = filter.start_date {
            query_builder.push(" AND timestamp >= ");
            query_builder.push_bind(start_date);
        }

        if let Some(end_date) = filter.end_date {
            query_builder.push(" AND timestamp <= ");
            query_builder.push_bind(end_date);
        }

        query_builder.push(" ORDER BY id LIMIT ");
        query_builder.push_bind(limit);
        query_builder.push(" OFFSET ");
        query_builder.push_bind(skip);

        query_builder
            .build_query_as::<LifeEvent>()
            .fetch_all(self.pool)
            .await
    }

    /// Applies only the fields set in `patch`; unset fields keep their
    /// stored value. Returns `None` when no row with `id` exists.
    pub async fn update(
        &self,
        id: i64,
        patch: &UpdateLifeEvent,
    ) -> Result<Option<LifeEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE life_events SET
                event_type_id = COALESCE($2, event_type_id),
                timestamp = COALESCE($3, timestamp),
                data = COALESCE($4, data)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LifeEvent>(&query)
            .bind(id)
            .bind(patch.event_type_id)
            .bind(patch.timestamp)
            .bind(&patch.data)
            .fetch_optional(self.pool)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM life_events WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
