use anyhow::Result;
use serde_json::json;
use sqlx::PgPool;
use tracing::info;

use crate::models::event_type::CreateEventType;

/// Inserts the built-in event type categories, skipping any name that
/// already exists. Safe to run on every startup.
pub async fn seed_default_event_types(pool: &PgPool) -> Result<()> {
    let mut inserted = 0u64;

    for event_type in default_event_types() {
        let result = sqlx::query(
            "INSERT INTO event_types (name, description, event_schema, icon, color)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(&event_type.name)
        .bind(&event_type.description)
        .bind(&event_type.event_schema)
        .bind(&event_type.icon)
        .bind(&event_type.color)
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    info!("Seeded {} default event type(s)", inserted);
    Ok(())
}

/// The built-in categories a fresh install starts with.
pub fn default_event_types() -> Vec<CreateEventType> {
    vec![
        CreateEventType {
            name: "photo".to_string(),
            description: Some("Captured a photo moment".to_string()),
            icon: Some("camera".to_string()),
            color: Some("#4CAF50".to_string()),
            event_schema: Some(json!({
                "type": "object",
                "required": ["photo_url"],
                "properties": {
                    "photo_url": {"type": "string", "format": "uri"},
                    "location": {
                        "type": "object",
                        "properties": {
                            "lat": {"type": "number"},
                            "lng": {"type": "number"}
                        }
                    },
                    "caption": {"type": "string"},
                    "tags": {"type": "array", "items": {"type": "string"}}
                }
            })),
        },
        CreateEventType {
            name: "meal".to_string(),
            description: Some("Food consumption record".to_string()),
            icon: Some("restaurant".to_string()),
            color: Some("#FF9800".to_string()),
            event_schema: Some(json!({
                "type": "object",
                "required": ["meal_type", "foods"],
                "properties": {
                    "meal_type": {
                        "type": "string",
                        "enum": ["breakfast", "lunch", "dinner", "snack"]
                    },
                    "foods": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": {"type": "string"},
                                "quantity": {"type": "string"},
                                "calories": {"type": "number"}
                            }
                        }
                    },
                    "location": {"type": "string"},
                    "mood": {"type": "string"}
                }
            })),
        },
        CreateEventType {
            name: "exercise".to_string(),
            description: Some("Physical activity record".to_string()),
            icon: Some("fitness_center".to_string()),
            color: Some("#2196F3".to_string()),
            event_schema: Some(json!({
                "type": "object",
                "required": ["type", "duration"],
                "properties": {
                    "type": {
                        "type": "string",
                        "enum": ["running", "cycling", "swimming", "weights", "yoga", "other"]
                    },
                    "duration": {"type": "number"},
                    "distance": {"type": "number"},
                    "calories_burned": {"type": "number"},
                    "heart_rate": {
                        "type": "object",
                        "properties": {
                            "avg": {"type": "number"},
                            "max": {"type": "number"}
                        }
                    }
                }
            })),
        },
        CreateEventType {
            name: "note".to_string(),
            description: Some("Quick text note or thought".to_string()),
            icon: Some("note".to_string()),
            color: Some("#9C27B0".to_string()),
            event_schema: Some(json!({
                "type": "object",
                "required": ["content"],
                "properties": {
                    "content": {"type": "string"},
                    "tags": {"type": "array", "items": {"type": "string"}},
                    "mood": {"type": "string"}
                }
            })),
        },
        CreateEventType {
            name: "sleep".to_string(),
            description: Some("Sleep record".to_string()),
            icon: Some("bedtime".to_string()),
            color: Some("#3F51B5".to_string()),
            event_schema: Some(json!({
                "type": "object",
                "required": ["start_time", "end_time"],
                "properties": {
                    "start_time": {"type": "string", "format": "date-time"},
                    "end_time": {"type": "string", "format": "date-time"},
                    "quality": {"type": "integer", "minimum": 1, "maximum": 5},
                    "interruptions": {"type": "integer"},
                    "notes": {"type": "string"}
                }
            })),
        },
    ]
}
