// ABOUTME: Content item storage layer using SQLite
// ABOUTME: Upsert-by-idea semantics, publish-date probes, and field-level updates

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use trygo_storage::{StorageError, StorageResult};

use super::types::{ContentItem, ContentStatus, UpsertContentItemInput};

pub struct ContentStorage {
    pool: SqlitePool,
}

impl ContentStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new item, or fully replace the mutable fields of an
    /// existing one when `input.id` is present.
    pub async fn upsert_content_item(
        &self,
        input: UpsertContentItemInput,
    ) -> StorageResult<ContentItem> {
        for (field, value) in [
            ("projectId", &input.project_id),
            ("hypothesisId", &input.hypothesis_id),
            ("userId", &input.user_id),
            ("title", &input.title),
        ] {
            if value.trim().is_empty() {
                return Err(StorageError::InvalidInput(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }

        match input.id.clone() {
            Some(id) => self.replace_content_item(&id, input).await,
            None => self.create_content_item(input).await,
        }
    }

    async fn create_content_item(
        &self,
        input: UpsertContentItemInput,
    ) -> StorageResult<ContentItem> {
        let item_id = trygo_core::generate_entity_id();
        let now = Utc::now();
        let status = input.status.unwrap_or(ContentStatus::Draft);

        debug!(
            "Creating content item: {} for project: {} hypothesis: {}",
            item_id, input.project_id, input.hypothesis_id
        );

        sqlx::query(
            r#"
            INSERT INTO content_items (
                id, project_id, hypothesis_id, user_id, backlog_idea_id,
                title, category, format, outline, content, image_url,
                status, due_date, publish_date, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item_id)
        .bind(&input.project_id)
        .bind(&input.hypothesis_id)
        .bind(&input.user_id)
        .bind(&input.backlog_idea_id)
        .bind(&input.title)
        .bind(input.category)
        .bind(input.format)
        .bind(&input.outline)
        .bind(&input.content)
        .bind(&input.image_url)
        .bind(status)
        .bind(input.due_date)
        .bind(input.publish_date)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        self.get_content_item(&item_id).await
    }

    async fn replace_content_item(
        &self,
        id: &str,
        input: UpsertContentItemInput,
    ) -> StorageResult<ContentItem> {
        debug!("Replacing content item: {}", id);

        // Full replace of mutable fields; status only moves when the caller
        // supplies one.
        let result = sqlx::query(
            r#"
            UPDATE content_items SET
                backlog_idea_id = ?,
                title = ?,
                category = ?,
                format = ?,
                outline = ?,
                content = ?,
                image_url = ?,
                status = COALESCE(?, status),
                due_date = ?,
                publish_date = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.backlog_idea_id)
        .bind(&input.title)
        .bind(input.category)
        .bind(input.format)
        .bind(&input.outline)
        .bind(&input.content)
        .bind(&input.image_url)
        .bind(input.status)
        .bind(input.due_date)
        .bind(input.publish_date)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("content item {}", id)));
        }

        self.get_content_item(id).await
    }

    pub async fn get_content_item(&self, id: &str) -> StorageResult<ContentItem> {
        debug!("Fetching content item: {}", id);

        let row = sqlx::query("SELECT * FROM content_items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
            .ok_or_else(|| StorageError::NotFound(format!("content item {}", id)))?;

        row_to_content_item(&row)
    }

    /// The single linked item for an idea, if any. Used by generation to
    /// update in place instead of creating a duplicate.
    pub async fn get_content_item_by_idea(
        &self,
        backlog_idea_id: &str,
    ) -> StorageResult<Option<ContentItem>> {
        debug!("Fetching content item for idea: {}", backlog_idea_id);

        let row = sqlx::query(
            "SELECT * FROM content_items WHERE backlog_idea_id = ? ORDER BY created_at LIMIT 1",
        )
        .bind(backlog_idea_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        row.as_ref().map(row_to_content_item).transpose()
    }

    pub async fn list_content_items(
        &self,
        project_id: &str,
        hypothesis_id: &str,
    ) -> StorageResult<Vec<ContentItem>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM content_items
            WHERE project_id = ? AND hypothesis_id = ?
            ORDER BY created_at
            "#,
        )
        .bind(project_id)
        .bind(hypothesis_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_content_item).collect()
    }

    /// Find another item in the same scope holding the given publish date.
    pub async fn find_publish_date_holder(
        &self,
        project_id: &str,
        hypothesis_id: &str,
        publish_date: DateTime<Utc>,
        exclude_id: Option<&str>,
    ) -> StorageResult<Option<ContentItem>> {
        let row = sqlx::query(
            r#"
            SELECT * FROM content_items
            WHERE project_id = ? AND hypothesis_id = ?
            AND publish_date = ?
            AND (? IS NULL OR id != ?)
            LIMIT 1
            "#,
        )
        .bind(project_id)
        .bind(hypothesis_id)
        .bind(publish_date)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        row.as_ref().map(row_to_content_item).transpose()
    }

    /// Items holding a WordPress post reference while not marked published.
    /// These are the detectable leftovers of a publish whose status write
    /// failed after the post went live.
    pub async fn find_orphaned_published(
        &self,
        project_id: &str,
        hypothesis_id: &str,
    ) -> StorageResult<Vec<ContentItem>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM content_items
            WHERE project_id = ? AND hypothesis_id = ?
            AND wordpress_post_id IS NOT NULL
            AND status != 'published'
            "#,
        )
        .bind(project_id)
        .bind(hypothesis_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_content_item).collect()
    }

    /// Write the generated outline and body onto an existing item.
    pub async fn set_generated_fields(
        &self,
        id: &str,
        outline: Option<&str>,
        content: &str,
    ) -> StorageResult<ContentItem> {
        let result = sqlx::query(
            "UPDATE content_items SET outline = ?, content = ?, updated_at = ? WHERE id = ?",
        )
        .bind(outline)
        .bind(content)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("content item {}", id)));
        }

        self.get_content_item(id).await
    }

    /// Replace the body only; title and category stay untouched.
    pub async fn set_content(&self, id: &str, content: &str) -> StorageResult<ContentItem> {
        let result =
            sqlx::query("UPDATE content_items SET content = ?, updated_at = ? WHERE id = ?")
                .bind(content)
                .bind(Utc::now())
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("content item {}", id)));
        }

        self.get_content_item(id).await
    }

    pub async fn set_image_url(&self, id: &str, image_url: &str) -> StorageResult<ContentItem> {
        let result =
            sqlx::query("UPDATE content_items SET image_url = ?, updated_at = ? WHERE id = ?")
                .bind(image_url)
                .bind(Utc::now())
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("content item {}", id)));
        }

        self.get_content_item(id).await
    }

    pub async fn set_status(&self, id: &str, status: ContentStatus) -> StorageResult<ContentItem> {
        debug!("Updating content item {} status to {:?}", id, status);

        let result =
            sqlx::query("UPDATE content_items SET status = ?, updated_at = ? WHERE id = ?")
                .bind(status)
                .bind(Utc::now())
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("content item {}", id)));
        }

        self.get_content_item(id).await
    }

    /// The content-side write of a successful publish: date, external post
    /// reference, and published status land in one statement.
    pub async fn set_published_fields(
        &self,
        id: &str,
        publish_date: Option<DateTime<Utc>>,
        wordpress_post_id: &str,
        wordpress_post_url: &str,
    ) -> StorageResult<ContentItem> {
        let result = sqlx::query(
            r#"
            UPDATE content_items SET
                publish_date = COALESCE(?, publish_date),
                wordpress_post_id = ?,
                wordpress_post_url = ?,
                status = 'published',
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(publish_date)
        .bind(wordpress_post_id)
        .bind(wordpress_post_url)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("content item {}", id)));
        }

        self.get_content_item(id).await
    }
}

fn row_to_content_item(row: &SqliteRow) -> StorageResult<ContentItem> {
    Ok(ContentItem {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        hypothesis_id: row.try_get("hypothesis_id")?,
        user_id: row.try_get("user_id")?,
        backlog_idea_id: row.try_get("backlog_idea_id")?,
        title: row.try_get("title")?,
        category: row.try_get("category")?,
        format: row.try_get("format")?,
        outline: row.try_get("outline")?,
        content: row.try_get("content")?,
        image_url: row.try_get("image_url")?,
        status: row.try_get("status")?,
        due_date: row.try_get("due_date")?,
        publish_date: row.try_get("publish_date")?,
        wordpress_post_id: row.try_get("wordpress_post_id")?,
        wordpress_post_url: row.try_get("wordpress_post_url")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
