// ABOUTME: HTTP API layer for Trygo providing REST endpoints and routing
// ABOUTME: Integration layer that depends on all domain packages

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use sqlx::SqlitePool;

use trygo_content::{ContentGenerator, ContentPipeline, ContentStorage, ImageGenerator, PostPublisher};
use trygo_ideas::IdeaStorage;

pub mod content_handlers;
pub mod ideas_handlers;
pub mod response;

pub use response::{ApiError, ApiResponse};

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub idea_storage: Arc<IdeaStorage>,
    pub content_storage: Arc<ContentStorage>,
    pub pipeline: Arc<ContentPipeline>,
}

impl AppState {
    /// Create application state from a SQLite pool and injected adapters
    pub fn new(
        pool: SqlitePool,
        generator: Arc<dyn ContentGenerator>,
        images: Arc<dyn ImageGenerator>,
        publisher: Arc<dyn PostPublisher>,
    ) -> Self {
        let idea_storage = Arc::new(IdeaStorage::new(pool.clone()));
        let content_storage = Arc::new(ContentStorage::new(pool.clone()));
        let pipeline = Arc::new(ContentPipeline::new(
            idea_storage.clone(),
            content_storage.clone(),
            generator,
            images,
            publisher,
        ));

        Self {
            pool,
            idea_storage,
            content_storage,
            pipeline,
        }
    }
}

/// Creates the ideas API router (nested under /api/ideas)
pub fn create_ideas_router() -> Router<AppState> {
    Router::new()
        .route(
            "/seoAgentContentIdeas",
            get(ideas_handlers::seo_agent_content_ideas),
        )
        .route(
            "/createCustomContentIdea",
            post(ideas_handlers::create_custom_content_idea),
        )
        .route(
            "/dismissContentIdea",
            post(ideas_handlers::dismiss_content_idea),
        )
        .route("/{idea_id}", delete(ideas_handlers::delete_idea))
}

/// Creates the content API router (nested under /api/content)
pub fn create_content_router() -> Router<AppState> {
    Router::new()
        .route(
            "/generateContentForBacklogIdea",
            post(content_handlers::generate_content_for_backlog_idea),
        )
        .route(
            "/contentItemByBacklogIdea",
            get(content_handlers::content_item_by_backlog_idea),
        )
        .route(
            "/upsertContentItem",
            post(content_handlers::upsert_content_item),
        )
        .route(
            "/regenerateContent",
            post(content_handlers::regenerate_content),
        )
        .route("/moveToReview", post(content_handlers::move_to_review))
        .route("/markReady", post(content_handlers::mark_ready))
        .route("/attachImage", post(content_handlers::attach_image))
        .route(
            "/publishToWordPress",
            post(content_handlers::publish_to_wordpress),
        )
        .route("/unpublish", post(content_handlers::unpublish))
        .route(
            "/orphanedPublishStates",
            get(content_handlers::orphaned_publish_states),
        )
}

/// Assemble the full application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api/ideas", create_ideas_router())
        .nest("/api/content", create_content_router())
        .with_state(state)
}
