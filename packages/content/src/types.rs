// ABOUTME: Content item type definitions
// ABOUTME: Structures for authored/generated content tied to backlog ideas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use trygo_ideas::IdeaCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Blog,
    Commercial,
    Faq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Review,
    Ready,
    Published,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub project_id: String,
    pub hypothesis_id: String,
    pub user_id: String,
    pub backlog_idea_id: Option<String>,
    pub title: String,
    pub category: IdeaCategory,
    pub format: ContentFormat,
    pub outline: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub status: ContentStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub publish_date: Option<DateTime<Utc>>,
    pub wordpress_post_id: Option<String>,
    pub wordpress_post_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating or fully replacing a content item. With `id` set the
/// mutable fields of the existing row are replaced; without it a new item
/// is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertContentItemInput {
    pub id: Option<String>,
    pub project_id: String,
    pub hypothesis_id: String,
    pub user_id: String,
    pub backlog_idea_id: Option<String>,
    pub title: String,
    pub category: IdeaCategory,
    pub format: ContentFormat,
    pub outline: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<ContentStatus>,
    pub due_date: Option<DateTime<Utc>>,
    pub publish_date: Option<DateTime<Utc>>,
}
