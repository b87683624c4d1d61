// ABOUTME: Integration tests for the content item storage layer
// ABOUTME: Upsert semantics, idea linkage, and the publish-state probes

use chrono::{TimeZone, Utc};

use trygo_content::{ContentStatus, ContentStorage};
use trygo_ideas::IdeaStorage;
use trygo_storage::StorageError;

mod common;
use common::{item_input, seed_idea, setup_test_db};

// ============================================================================
// Upsert
// ============================================================================

#[tokio::test]
async fn upsert_rejects_missing_required_fields() {
    let storage = ContentStorage::new(setup_test_db().await);

    let mut input = item_input("p1", "h1", "title");
    input.user_id = "".to_string();
    let err = storage.upsert_content_item(input).await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidInput(_)));

    let mut input = item_input("p1", "h1", "title");
    input.title = "  ".to_string();
    let err = storage.upsert_content_item(input).await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidInput(_)));
}

#[tokio::test]
async fn upsert_without_id_creates_a_draft() {
    let storage = ContentStorage::new(setup_test_db().await);

    let item = storage
        .upsert_content_item(item_input("p1", "h1", "First post"))
        .await
        .unwrap();

    assert_eq!(item.status, ContentStatus::Draft);
    assert_eq!(item.title, "First post");
    assert!(item.content.is_none());
    assert!(item.wordpress_post_id.is_none());
}

#[tokio::test]
async fn upsert_with_id_replaces_mutable_fields() {
    let storage = ContentStorage::new(setup_test_db().await);

    let created = storage
        .upsert_content_item(item_input("p1", "h1", "Old title"))
        .await
        .unwrap();

    let mut replacement = item_input("p1", "h1", "New title");
    replacement.id = Some(created.id.clone());
    replacement.content = Some("body".to_string());
    let updated = storage.upsert_content_item(replacement).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content.as_deref(), Some("body"));
    // Status was not supplied, so it stays where it was
    assert_eq!(updated.status, ContentStatus::Draft);
}

#[tokio::test]
async fn upsert_with_unknown_id_is_not_found() {
    let storage = ContentStorage::new(setup_test_db().await);

    let mut input = item_input("p1", "h1", "title");
    input.id = Some("missing".to_string());
    let err = storage.upsert_content_item(input).await.unwrap_err();

    assert!(matches!(err, StorageError::NotFound(_)));
}

// ============================================================================
// Idea linkage
// ============================================================================

#[tokio::test]
async fn finds_the_item_linked_to_an_idea() {
    let pool = setup_test_db().await;
    let storage = ContentStorage::new(pool.clone());

    let mut input = item_input("p1", "h1", "Linked");
    input.backlog_idea_id = Some("idea-1".to_string());
    let item = storage.upsert_content_item(input).await.unwrap();

    let found = storage.get_content_item_by_idea("idea-1").await.unwrap();
    assert_eq!(found.unwrap().id, item.id);

    let none = storage.get_content_item_by_idea("idea-2").await.unwrap();
    assert!(none.is_none());
}

#[tokio::test]
async fn linked_item_survives_idea_deletion() {
    let pool = setup_test_db().await;
    let ideas = IdeaStorage::new(pool.clone());
    let storage = ContentStorage::new(pool.clone());

    let idea = seed_idea(&ideas, "p1", "h1", "t", trygo_ideas::IdeaCategory::Pain).await;

    let mut input = item_input("p1", "h1", "Orphan-to-be");
    input.backlog_idea_id = Some(idea.id.clone());
    let item = storage.upsert_content_item(input).await.unwrap();

    assert!(ideas.delete_idea(&idea.id).await.unwrap());

    // The dangling reference is tolerated, not fatal
    let found = storage.get_content_item_by_idea(&idea.id).await.unwrap();
    assert_eq!(found.unwrap().id, item.id);
}

// ============================================================================
// Publish-state probes
// ============================================================================

#[tokio::test]
async fn publish_date_holder_probe_respects_scope_and_exclusion() {
    let storage = ContentStorage::new(setup_test_db().await);
    let date = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();

    let mut input = item_input("p1", "h1", "Holder");
    input.publish_date = Some(date);
    let holder = storage.upsert_content_item(input).await.unwrap();

    let found = storage
        .find_publish_date_holder("p1", "h1", date, None)
        .await
        .unwrap();
    assert_eq!(found.unwrap().id, holder.id);

    // Excluding the holder itself finds nothing
    let found = storage
        .find_publish_date_holder("p1", "h1", date, Some(&holder.id))
        .await
        .unwrap();
    assert!(found.is_none());

    // A different scope does not see the date
    let found = storage
        .find_publish_date_holder("p1", "h2", date, None)
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn orphan_probe_flags_post_reference_without_published_status() {
    let storage = ContentStorage::new(setup_test_db().await);

    let item = storage
        .upsert_content_item(item_input("p1", "h1", "Diverged"))
        .await
        .unwrap();
    storage
        .set_published_fields(&item.id, None, "42", "https://blog.example/42")
        .await
        .unwrap();

    // Fully published items are not orphans
    assert!(storage
        .find_orphaned_published("p1", "h1")
        .await
        .unwrap()
        .is_empty());

    // A rollback leaves the post reference behind; that is the detectable state
    storage.set_status(&item.id, ContentStatus::Ready).await.unwrap();
    let orphans = storage.find_orphaned_published("p1", "h1").await.unwrap();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].id, item.id);
}
