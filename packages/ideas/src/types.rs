// ABOUTME: Backlog idea type definitions
// ABOUTME: Structures for ideas, their categories and lifecycle statuses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IdeaCategory {
    Pain,
    Goal,
    Trigger,
    Feature,
    Benefit,
    Faq,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IdeaStatus {
    Pending,
    Backlog,
    Scheduled,
    InProgress,
    Completed,
    Archived,
    Published,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogIdea {
    pub id: String,
    pub project_id: String,
    pub hypothesis_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: IdeaCategory,
    pub cluster_id: Option<String>,
    pub status: IdeaStatus,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdeaInput {
    pub project_id: String,
    pub hypothesis_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: IdeaCategory,
    pub cluster_id: Option<String>,
}
