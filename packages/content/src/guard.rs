// ABOUTME: Publish date guard for content items
// ABOUTME: Precondition check that a publish date is free within a scope

use chrono::{DateTime, Utc};
use tracing::debug;

use super::error::{PipelineError, Result};
use super::storage::ContentStorage;

/// Assert that `publish_date` is not already held by another item in the
/// same (project, hypothesis) scope. Trivially Ok on a null date or when
/// the caller overrides. This runs before the date is committed; the
/// store itself permits duplicates, so this check is the sole enforcement
/// point.
pub async fn assert_publish_date_available(
    storage: &ContentStorage,
    project_id: &str,
    hypothesis_id: &str,
    publish_date: Option<DateTime<Utc>>,
    exclude_id: Option<&str>,
    allow_override: bool,
) -> Result<()> {
    let Some(publish_date) = publish_date else {
        return Ok(());
    };
    if allow_override {
        debug!(
            "Publish date override set for {}/{}, skipping conflict check",
            project_id, hypothesis_id
        );
        return Ok(());
    }

    match storage
        .find_publish_date_holder(project_id, hypothesis_id, publish_date, exclude_id)
        .await?
    {
        Some(holder) => Err(PipelineError::PublishDateConflict {
            conflicting_id: holder.id,
        }),
        None => Ok(()),
    }
}
