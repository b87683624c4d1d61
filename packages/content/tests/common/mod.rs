// ABOUTME: Shared test database setup for content package tests
// ABOUTME: In-memory SQLite with the two pipeline tables

// Not every test binary uses every helper
#![allow(dead_code)]

use sqlx::SqlitePool;

use trygo_content::UpsertContentItemInput;
use trygo_ideas::{BacklogIdea, CreateIdeaInput, IdeaCategory, IdeaStorage};

pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:").await.unwrap();

    sqlx::query(
        "CREATE TABLE backlog_ideas (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL,
            hypothesis_id TEXT NOT NULL,
            title TEXT NOT NULL,
            description TEXT,
            category TEXT NOT NULL,
            cluster_id TEXT,
            status TEXT NOT NULL DEFAULT 'pending',
            scheduled_date TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE content_items (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL,
            hypothesis_id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            backlog_idea_id TEXT,
            title TEXT NOT NULL,
            category TEXT NOT NULL,
            format TEXT NOT NULL,
            outline TEXT,
            content TEXT,
            image_url TEXT,
            status TEXT NOT NULL DEFAULT 'draft',
            due_date TEXT,
            publish_date TEXT,
            wordpress_post_id TEXT,
            wordpress_post_url TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

pub async fn seed_idea(
    ideas: &IdeaStorage,
    project: &str,
    hypothesis: &str,
    title: &str,
    category: IdeaCategory,
) -> BacklogIdea {
    ideas
        .create_idea(CreateIdeaInput {
            project_id: project.to_string(),
            hypothesis_id: hypothesis.to_string(),
            title: title.to_string(),
            description: None,
            category,
            cluster_id: None,
        })
        .await
        .unwrap()
}

pub fn item_input(project: &str, hypothesis: &str, title: &str) -> UpsertContentItemInput {
    UpsertContentItemInput {
        id: None,
        project_id: project.to_string(),
        hypothesis_id: hypothesis.to_string(),
        user_id: "u1".to_string(),
        backlog_idea_id: None,
        title: title.to_string(),
        category: IdeaCategory::Pain,
        format: trygo_content::ContentFormat::Blog,
        outline: None,
        content: None,
        image_url: None,
        status: None,
        due_date: None,
        publish_date: None,
    }
}
