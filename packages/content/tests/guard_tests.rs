// ABOUTME: Tests for the publish date guard
// ABOUTME: Conflict detection, self-exclusion, and the override flag

use chrono::{TimeZone, Utc};

use trygo_content::{assert_publish_date_available, ContentStorage, PipelineError};

mod common;
use common::{item_input, setup_test_db};

async fn storage_with_holder() -> (ContentStorage, String) {
    let storage = ContentStorage::new(setup_test_db().await);
    let date = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();

    let mut input = item_input("p1", "h1", "Holder");
    input.publish_date = Some(date);
    let holder = storage.upsert_content_item(input).await.unwrap();

    (storage, holder.id)
}

#[tokio::test]
async fn rejects_a_date_already_held_in_scope() {
    let (storage, holder_id) = storage_with_holder().await;
    let date = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();

    let err = assert_publish_date_available(&storage, "p1", "h1", Some(date), None, false)
        .await
        .unwrap_err();

    match err {
        PipelineError::PublishDateConflict { conflicting_id } => {
            assert_eq!(conflicting_id, holder_id)
        }
        other => panic!("expected PublishDateConflict, got {:?}", other.to_string()),
    }
}

#[tokio::test]
async fn accepts_the_holder_updating_itself() {
    let (storage, holder_id) = storage_with_holder().await;
    let date = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();

    assert_publish_date_available(&storage, "p1", "h1", Some(date), Some(&holder_id), false)
        .await
        .unwrap();
}

#[tokio::test]
async fn accepts_a_taken_date_with_override() {
    let (storage, _) = storage_with_holder().await;
    let date = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();

    assert_publish_date_available(&storage, "p1", "h1", Some(date), None, true)
        .await
        .unwrap();
}

#[tokio::test]
async fn accepts_a_null_date_trivially() {
    let (storage, _) = storage_with_holder().await;

    assert_publish_date_available(&storage, "p1", "h1", None, None, false)
        .await
        .unwrap();
}

#[tokio::test]
async fn a_different_scope_is_free_to_use_the_date() {
    let (storage, _) = storage_with_holder().await;
    let date = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();

    assert_publish_date_available(&storage, "p1", "h2", Some(date), None, false)
        .await
        .unwrap();
    assert_publish_date_available(&storage, "p2", "h1", Some(date), None, false)
        .await
        .unwrap();
}
