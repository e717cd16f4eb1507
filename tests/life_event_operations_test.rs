use chrono::{DateTime, Duration, Utc};
use lifelog::models::event_type::CreateEventType;
use lifelog::models::life_event::{CreateLifeEvent, LifeEvent, LifeEventFilter, UpdateLifeEvent};
use lifelog::services::{EventTypeService, LifeEventService, ServiceError};
use serde_json::json;
use sqlx::PgPool;

async fn create_test_type(pool: &PgPool, name: &str) -> i64 {
    let event_type = EventTypeService::new(pool)
        .create(CreateEventType {
            name: name.to_string(),
            description: None,
            event_schema: None,
            icon: None,
            color: None,
        })
        .await
        .unwrap();
    event_type.id
}

async fn create_test_event(
    pool: &PgPool,
    event_type_id: i64,
    timestamp: DateTime<Utc>,
) -> LifeEvent {
    LifeEventService::new(pool)
        .create(CreateLifeEvent {
            event_type_id,
            timestamp: Some(timestamp),
            data: json!({"content": "logged"}),
        })
        .await
        .unwrap()
}

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_create_defaults_timestamp_to_now(pool: PgPool) {
    let type_id = create_test_type(&pool, "note").await;
    let before = Utc::now();

    let event = LifeEventService::new(&pool)
        .create(CreateLifeEvent {
            event_type_id: type_id,
            timestamp: None,
            data: json!({"content": "hi"}),
        })
        .await
        .unwrap();

    let after = Utc::now();
    assert!(event.timestamp >= before - Duration::seconds(5));
    assert!(event.timestamp <= after + Duration::seconds(5));
    assert_eq!(event.event_name.as_deref(), Some("note"));
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_create_with_unknown_type_persists_nothing(pool: PgPool) {
    let service = LifeEventService::new(&pool);

    let result = service
        .create(CreateLifeEvent {
            event_type_id: 4242,
            timestamp: None,
            data: json!({}),
        })
        .await;
    assert!(matches!(result, Err(ServiceError::UnknownEventType(4242))));

    let all = service
        .list(&LifeEventFilter::default(), 0, 100)
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_null_data_is_rejected(pool: PgPool) {
    let type_id = create_test_type(&pool, "note").await;
    let service = LifeEventService::new(&pool);

    let result = service
        .create(CreateLifeEvent {
            event_type_id: type_id,
            timestamp: None,
            data: serde_json::Value::Null,
        })
        .await;
    assert!(matches!(result, Err(ServiceError::NullData)));

    // An empty document is still a document.
    let event = service
        .create(CreateLifeEvent {
            event_type_id: type_id,
            timestamp: None,
            data: json!({}),
        })
        .await
        .unwrap();
    assert_eq!(event.data, json!({}));
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_create_and_get_round_trip(pool: PgPool) {
    let type_id = create_test_type(&pool, "meal").await;
    let timestamp = ts("2024-03-10T12:30:00Z");
    let created = create_test_event(&pool, type_id, timestamp).await;

    let fetched = LifeEventService::new(&pool)
        .get(created.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.timestamp, timestamp);
    assert_eq!(fetched.data, json!({"content": "logged"}));
    assert_eq!(fetched.event_type_id, type_id);
    assert_eq!(fetched.event_name.as_deref(), Some("meal"));
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_date_range_filter_is_inclusive(pool: PgPool) {
    let type_id = create_test_type(&pool, "note").await;
    let first = create_test_event(&pool, type_id, ts("2024-01-01T00:00:00Z")).await;
    let second = create_test_event(&pool, type_id, ts("2024-01-05T00:00:00Z")).await;
    create_test_event(&pool, type_id, ts("2024-02-01T00:00:00Z")).await;

    let filter = LifeEventFilter {
        event_type_id: None,
        start_date: Some(ts("2024-01-01T00:00:00Z")),
        end_date: Some(ts("2024-01-10T00:00:00Z")),
    };
    let events = LifeEventService::new(&pool)
        .list(&filter, 0, 100)
        .await
        .unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, first.id);
    assert_eq!(events[1].id, second.id);
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_combined_filters_with_pagination(pool: PgPool) {
    let notes = create_test_type(&pool, "note").await;
    let meals = create_test_type(&pool, "meal").await;

    for day in 1..=4 {
        create_test_event(&pool, notes, ts(&format!("2024-01-0{day}T08:00:00Z"))).await;
    }
    // Same window, different type: must not match.
    create_test_event(&pool, meals, ts("2024-01-02T12:00:00Z")).await;

    let filter = LifeEventFilter {
        event_type_id: Some(notes),
        start_date: Some(ts("2024-01-02T00:00:00Z")),
        end_date: Some(ts("2024-01-04T23:59:59Z")),
    };

    let service = LifeEventService::new(&pool);
    let all_matching = service.list(&filter, 0, 100).await.unwrap();
    assert_eq!(all_matching.len(), 3);

    // skip/limit apply to the filtered result, not the raw table.
    let page = service.list(&filter, 1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, all_matching[1].id);
    assert_eq!(page[0].timestamp, ts("2024-01-03T08:00:00Z"));
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_update_changes_only_supplied_fields(pool: PgPool) {
    let type_id = create_test_type(&pool, "note").await;
    let created = create_test_event(&pool, type_id, ts("2024-01-01T00:00:00Z")).await;

    let patch = UpdateLifeEvent {
        data: Some(json!({"content": "edited"})),
        ..Default::default()
    };
    let updated = LifeEventService::new(&pool)
        .update(created.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.data, json!({"content": "edited"}));
    assert_eq!(updated.timestamp, created.timestamp);
    assert_eq!(updated.event_type_id, created.event_type_id);
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_reassigning_event_type_is_validated(pool: PgPool) {
    let notes = create_test_type(&pool, "note").await;
    let meals = create_test_type(&pool, "meal").await;
    let created = create_test_event(&pool, notes, ts("2024-01-01T00:00:00Z")).await;

    let service = LifeEventService::new(&pool);

    // Unknown target: the update fails and the record is untouched.
    let result = service
        .update(
            created.id,
            UpdateLifeEvent {
                event_type_id: Some(4242),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ServiceError::UnknownEventType(4242))));

    let unchanged = service.get(created.id).await.unwrap().unwrap();
    assert_eq!(unchanged.event_type_id, notes);

    // Known target: the reassignment lands and event_name follows.
    let updated = service
        .update(
            created.id,
            UpdateLifeEvent {
                event_type_id: Some(meals),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.event_type_id, meals);
    assert_eq!(updated.event_name.as_deref(), Some("meal"));
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_update_missing_id_returns_none(pool: PgPool) {
    let patch = UpdateLifeEvent {
        data: Some(json!({"content": "ghost"})),
        ..Default::default()
    };
    let result = LifeEventService::new(&pool).update(4242, patch).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_empty_patch_is_a_noop(pool: PgPool) {
    let type_id = create_test_type(&pool, "note").await;
    let created = create_test_event(&pool, type_id, ts("2024-01-01T00:00:00Z")).await;

    let updated = LifeEventService::new(&pool)
        .update(created.id, UpdateLifeEvent::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.timestamp, created.timestamp);
    assert_eq!(updated.data, created.data);
    assert_eq!(updated.event_type_id, created.event_type_id);
    assert_eq!(updated.event_name, created.event_name);
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_delete_contract(pool: PgPool) {
    let service = LifeEventService::new(&pool);
    assert!(!service.delete(4242).await.unwrap());

    let type_id = create_test_type(&pool, "note").await;
    let created = create_test_event(&pool, type_id, ts("2024-01-01T00:00:00Z")).await;

    assert!(service.delete(created.id).await.unwrap());
    assert!(service.get(created.id).await.unwrap().is_none());
}
