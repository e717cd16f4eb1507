use sqlx::{PgPool, QueryBuilder};

use crate::models::event_type::{CreateEventType, EventType, UpdateEventType};

const COLUMNS: &str = "id, name, description, event_schema, icon, color";

pub struct EventTypeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventTypeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &CreateEventType) -> Result<EventType, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_types (name, description, event_schema, icon, color)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.event_schema)
            .bind(&input.icon)
            .bind(&input.color)
            .fetch_one(self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<EventType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM event_types WHERE id = $1");
        sqlx::query_as::<_, EventType>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await
    }

    pub async fn exists(&self, id: i64) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM event_types WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        Ok(exists)
    }

    /// Lists event types in insertion order, optionally restricted to an
    /// exact name match.
    pub async fn list(
        &self,
        name: Option<&str>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<EventType>, sqlx::Error> {
        let mut query_builder =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM event_types WHERE 1=1"));

        if let Some(name) = name {
            query_builder.push(" AND name = ");
            query_builder.push_bind(name);
        }

        query_builder.push(" ORDER BY id LIMIT ");
        query_builder.push_bind(limit);
        query_builder.push(" OFFSET ");
        query_builder.push_bind(skip);

        query_builder
            .build_query_as::<EventType>()
            .fetch_all(self.pool)
            .await
    }

    /// Applies only the fields set in `patch`; unset fields keep their
    /// stored value. Returns `None` when no row with `id` exists.
    pub async fn update(
        &self,
        id: i64,
        patch: &UpdateEventType,
    ) -> Result<Option<EventType>, sqlx::Error> {
        let query = format!(
            "UPDATE event_types SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                event_schema = COALESCE($4, event_schema),
                icon = COALESCE($5, icon),
                color = COALESCE($6, color)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventType>(&query)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.description)
            .bind(&patch.event_schema)
            .bind(&patch.icon)
            .bind(&patch.color)
            .fetch_optional(self.pool)
            .await
    }

    /// Returns whether a row was deleted. The FK cascade removes all life
    /// events owned by the deleted type in the same statement.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM event_types WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
