// ABOUTME: Backlog idea storage layer using SQLite
// ABOUTME: Handles CRUD operations for ideas scoped by project and hypothesis

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use trygo_storage::{StorageError, StorageResult};

use super::types::{BacklogIdea, CreateIdeaInput, IdeaStatus};

pub struct IdeaStorage {
    pool: SqlitePool,
}

impl IdeaStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_idea(&self, input: CreateIdeaInput) -> StorageResult<BacklogIdea> {
        if input.title.trim().is_empty() {
            return Err(StorageError::InvalidInput(
                "idea title must not be empty".to_string(),
            ));
        }

        let idea_id = trygo_core::generate_entity_id();
        let now = Utc::now();

        debug!(
            "Creating idea: {} for project: {} hypothesis: {}",
            idea_id, input.project_id, input.hypothesis_id
        );

        sqlx::query(
            r#"
            INSERT INTO backlog_ideas (
                id, project_id, hypothesis_id, title, description, category,
                cluster_id, status, scheduled_date, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, NULL, ?, ?)
            "#,
        )
        .bind(&idea_id)
        .bind(&input.project_id)
        .bind(&input.hypothesis_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.category)
        .bind(&input.cluster_id)
        .bind(IdeaStatus::Pending)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        self.get_idea(&idea_id).await
    }

    pub async fn get_idea(&self, idea_id: &str) -> StorageResult<BacklogIdea> {
        debug!("Fetching idea: {}", idea_id);

        let row = sqlx::query("SELECT * FROM backlog_ideas WHERE id = ?")
            .bind(idea_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
            .ok_or_else(|| StorageError::NotFound(format!("idea {}", idea_id)))?;

        row_to_idea(&row)
    }

    /// List ideas in a project, optionally narrowed to a single hypothesis.
    /// No pagination; callers own unbounded result sets.
    pub async fn list_ideas(
        &self,
        project_id: &str,
        hypothesis_id: Option<&str>,
    ) -> StorageResult<Vec<BacklogIdea>> {
        debug!(
            "Listing ideas for project: {} (hypothesis: {:?})",
            project_id, hypothesis_id
        );

        let rows = match hypothesis_id {
            Some(hypothesis_id) => {
                sqlx::query(
                    r#"
                    SELECT * FROM backlog_ideas
                    WHERE project_id = ? AND hypothesis_id = ?
                    ORDER BY created_at
                    "#,
                )
                .bind(project_id)
                .bind(hypothesis_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT * FROM backlog_ideas
                    WHERE project_id = ?
                    ORDER BY created_at
                    "#,
                )
                .bind(project_id)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_idea).collect()
    }

    /// Low-level status write. Does not validate transition legality; the
    /// status synchronizer owns the lifecycle table, this primitive allows
    /// administrative overrides.
    pub async fn update_idea_status(
        &self,
        idea_id: &str,
        status: IdeaStatus,
    ) -> StorageResult<BacklogIdea> {
        debug!("Updating idea {} status to {:?}", idea_id, status);

        let result = sqlx::query("UPDATE backlog_ideas SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status)
            .bind(Utc::now())
            .bind(idea_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("idea {}", idea_id)));
        }

        self.get_idea(idea_id).await
    }

    pub async fn update_idea_scheduled_date(
        &self,
        idea_id: &str,
        scheduled_date: Option<DateTime<Utc>>,
    ) -> StorageResult<BacklogIdea> {
        let result =
            sqlx::query("UPDATE backlog_ideas SET scheduled_date = ?, updated_at = ? WHERE id = ?")
                .bind(scheduled_date)
                .bind(Utc::now())
                .bind(idea_id)
                .execute(&self.pool)
                .await
                .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("idea {}", idea_id)));
        }

        self.get_idea(idea_id).await
    }

    /// Hard delete. Does not cascade to content items; a dangling
    /// backlog_idea_id is tolerated by readers.
    pub async fn delete_idea(&self, idea_id: &str) -> StorageResult<bool> {
        debug!("Deleting idea: {}", idea_id);

        let result = sqlx::query("DELETE FROM backlog_ideas WHERE id = ?")
            .bind(idea_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_idea(row: &SqliteRow) -> StorageResult<BacklogIdea> {
    Ok(BacklogIdea {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        hypothesis_id: row.try_get("hypothesis_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        category: row.try_get("category")?,
        cluster_id: row.try_get("cluster_id")?,
        status: row.try_get("status")?,
        scheduled_date: row.try_get("scheduled_date")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
