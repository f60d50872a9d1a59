//! 排班提交集成测试
//!
//! 使用 ServerState::initialize 完整初始化（含迁移），验证批量提交的
//! 全有或全无语义。

use booking_server::db::repository::staff::StaffCreate;
use booking_server::db::repository::{opening_hour, schedule, staff, store};
use booking_server::services::SchedulingError;
use booking_server::{Config, ServerState};
use shared::models::{ScheduleEntry, Staff, Weekday};
use tempfile::TempDir;

async fn setup() -> (TempDir, ServerState) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config).await;
    (tmp, state)
}

/// Store with Monday 09:00-18:00 opening hours + one staff member
async fn seed(state: &ServerState) -> Staff {
    let store = store::create(&state.pool, "Downtown Salon", "12 Rose Street")
        .await
        .expect("Failed to create store");
    opening_hour::upsert(
        &state.pool,
        store.id,
        Weekday::Monday,
        "09:00:00",
        "18:00:00",
    )
    .await
    .expect("Failed to set opening hours");

    staff::create(
        &state.pool,
        StaffCreate {
            store_id: store.id,
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
            password: "correct-horse-battery".to_string(),
        },
    )
    .await
    .expect("Failed to create staff")
}

fn entry(day: Weekday, start: &str, end: &str) -> ScheduleEntry {
    ScheduleEntry {
        day,
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

async fn schedule_count(state: &ServerState, user_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM schedule WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(&state.pool)
        .await
        .expect("Failed to count schedules")
}

#[tokio::test]
async fn accepts_schedule_within_opening_hours() {
    let (_tmp, state) = setup().await;
    let jane = seed(&state).await;
    let svc = state.scheduling_service();

    let saved = svc
        .submit(&jane, &[entry(Weekday::Monday, "09:00:00", "17:00:00")])
        .await
        .expect("Submission inside opening hours must pass");

    assert_eq!(saved.len(), 1);
    assert!(saved[0].is_valid);

    let row = schedule::find_by_user_day(&state.pool, jane.id, Weekday::Monday)
        .await
        .unwrap()
        .expect("Row must exist after commit");
    assert_eq!(row.start_time, "09:00:00");
    assert_eq!(row.end_time, "17:00:00");
}

#[tokio::test]
async fn accepts_window_matching_opening_hours_exactly() {
    let (_tmp, state) = setup().await;
    let jane = seed(&state).await;

    let result = state
        .scheduling_service()
        .submit(&jane, &[entry(Weekday::Monday, "09:00:00", "18:00:00")])
        .await;

    assert!(result.is_ok(), "Boundary window must be accepted");
}

#[tokio::test]
async fn rejects_schedule_outside_opening_hours() {
    let (_tmp, state) = setup().await;
    let jane = seed(&state).await;

    // Starts one hour before the store opens
    let result = state
        .scheduling_service()
        .submit(&jane, &[entry(Weekday::Monday, "08:00:00", "17:00:00")])
        .await;

    assert!(matches!(
        result,
        Err(SchedulingError::OutsideOpeningHours { .. })
    ));
    assert_eq!(schedule_count(&state, jane.id).await, 0);
}

#[tokio::test]
async fn rejects_schedule_ending_after_closing() {
    let (_tmp, state) = setup().await;
    let jane = seed(&state).await;

    let result = state
        .scheduling_service()
        .submit(&jane, &[entry(Weekday::Monday, "09:00:00", "19:00:00")])
        .await;

    assert!(matches!(
        result,
        Err(SchedulingError::OutsideOpeningHours { .. })
    ));
    assert_eq!(schedule_count(&state, jane.id).await, 0);
}

#[tokio::test]
async fn whole_batch_rejected_when_opening_hours_missing() {
    let (_tmp, state) = setup().await;
    let jane = seed(&state).await;

    // Monday entry is individually valid; Tuesday has no opening hours
    let result = state
        .scheduling_service()
        .submit(
            &jane,
            &[
                entry(Weekday::Monday, "09:00:00", "17:00:00"),
                entry(Weekday::Tuesday, "09:00:00", "17:00:00"),
            ],
        )
        .await;

    assert!(matches!(
        result,
        Err(SchedulingError::OpeningHoursNotFound {
            day: Weekday::Tuesday
        })
    ));
    // The already-applied Monday entry must be rolled back too
    assert_eq!(schedule_count(&state, jane.id).await, 0);
}

#[tokio::test]
async fn whole_batch_rejected_when_one_entry_is_outside() {
    let (_tmp, state) = setup().await;
    let jane = seed(&state).await;
    opening_hour::upsert(
        &state.pool,
        jane.store_id,
        Weekday::Tuesday,
        "10:00:00",
        "16:00:00",
    )
    .await
    .unwrap();

    let result = state
        .scheduling_service()
        .submit(
            &jane,
            &[
                entry(Weekday::Monday, "09:00:00", "17:00:00"),
                entry(Weekday::Tuesday, "09:00:00", "17:00:00"),
            ],
        )
        .await;

    assert!(matches!(
        result,
        Err(SchedulingError::OutsideOpeningHours { .. })
    ));
    assert_eq!(schedule_count(&state, jane.id).await, 0);
}

#[tokio::test]
async fn resubmission_updates_existing_row_in_place() {
    let (_tmp, state) = setup().await;
    let jane = seed(&state).await;
    let svc = state.scheduling_service();

    let first = svc
        .submit(&jane, &[entry(Weekday::Monday, "09:00:00", "17:00:00")])
        .await
        .unwrap();

    let second = svc
        .submit(&jane, &[entry(Weekday::Monday, "10:00:00", "16:00:00")])
        .await
        .unwrap();

    assert_eq!(schedule_count(&state, jane.id).await, 1, "No duplicate rows");
    assert_eq!(second[0].id, first[0].id);
    assert_eq!(second[0].created_at, first[0].created_at);
    assert_eq!(second[0].start_time, "10:00:00");
    assert_eq!(second[0].end_time, "16:00:00");
}

#[tokio::test]
async fn rejects_malformed_time_strings() {
    let (_tmp, state) = setup().await;
    let jane = seed(&state).await;

    let result = state
        .scheduling_service()
        .submit(&jane, &[entry(Weekday::Monday, "9am", "17:00:00")])
        .await;

    assert!(matches!(result, Err(SchedulingError::InvalidTime { .. })));
    assert_eq!(schedule_count(&state, jane.id).await, 0);
}

#[tokio::test]
async fn invalidation_marks_only_the_flagged_row() {
    let (_tmp, state) = setup().await;
    let jane = seed(&state).await;
    opening_hour::upsert(
        &state.pool,
        jane.store_id,
        Weekday::Tuesday,
        "09:00:00",
        "18:00:00",
    )
    .await
    .unwrap();

    let svc = state.scheduling_service();
    let saved = svc
        .submit(
            &jane,
            &[
                entry(Weekday::Monday, "09:00:00", "17:00:00"),
                entry(Weekday::Tuesday, "10:00:00", "16:00:00"),
            ],
        )
        .await
        .unwrap();

    svc.invalidate(saved[1].id).await.unwrap();

    let flagged = schedule::find_by_id(&state.pool, saved[1].id)
        .await
        .unwrap()
        .unwrap();
    assert!(!flagged.is_valid);
    assert!(flagged.updated_at >= saved[1].updated_at);

    let listed = svc.list_for_staff(jane.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    // Insertion order is preserved
    assert_eq!(listed[0].id, saved[0].id);
    assert!(listed[0].is_valid);
    assert!(listed[0].error.is_none());
    assert!(!listed[1].is_valid);
    assert!(listed[1].error.is_some());

    // Resubmitting the flagged day restores validity
    svc.submit(&jane, &[entry(Weekday::Tuesday, "10:00:00", "16:00:00")])
        .await
        .unwrap();
    let listed = svc.list_for_staff(jane.id).await.unwrap();
    assert!(listed[1].is_valid);
    assert!(listed[1].error.is_none());
}

#[tokio::test]
async fn invalidating_unknown_schedule_is_not_found() {
    let (_tmp, state) = setup().await;
    seed(&state).await;

    let result = state.scheduling_service().invalidate(999_999).await;
    assert!(matches!(result, Err(SchedulingError::Repo(_))));
}
