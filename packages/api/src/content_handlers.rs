// ABOUTME: HTTP request handlers for content item operations
// ABOUTME: Generation, authoring workflow, and WordPress publishing

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use trygo_content::pipeline::GenerationContext;
use trygo_content::{ContentItem, UpsertContentItemInput, WordPressConnection};

use super::response::{ApiError, ApiResponse};
use super::AppState;

/// Request body for generating content from a backlog idea
#[derive(Deserialize)]
pub struct GenerateContentRequest {
    #[serde(rename = "backlogIdeaId")]
    pub backlog_idea_id: String,
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(rename = "hypothesisId")]
    pub hypothesis_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "leanCanvas")]
    pub lean_canvas: Option<String>,
    pub icp: Option<String>,
    pub keywords: Option<String>,
}

/// Generate (or refresh) the content item linked to a backlog idea
pub async fn generate_content_for_backlog_idea(
    State(state): State<AppState>,
    Json(request): Json<GenerateContentRequest>,
) -> Result<Json<ApiResponse<ContentItem>>, ApiError> {
    info!(
        "Generating content for idea: {} in project: {}",
        request.backlog_idea_id, request.project_id
    );

    let item = state
        .pipeline
        .generate_content_for_idea(
            &request.backlog_idea_id,
            &request.project_id,
            &request.hypothesis_id,
            &request.user_id,
            GenerationContext {
                lean_canvas: request.lean_canvas,
                icp: request.icp,
                keywords: request.keywords,
            },
        )
        .await?;

    Ok(Json(ApiResponse::success(item)))
}

#[derive(Deserialize)]
pub struct ContentByIdeaQuery {
    #[serde(rename = "backlogIdeaId")]
    pub backlog_idea_id: String,
}

/// Fetch the single content item linked to an idea, if any
pub async fn content_item_by_backlog_idea(
    State(state): State<AppState>,
    Query(query): Query<ContentByIdeaQuery>,
) -> Result<Json<ApiResponse<Option<ContentItem>>>, ApiError> {
    let item = state
        .content_storage
        .get_content_item_by_idea(&query.backlog_idea_id)
        .await?;

    Ok(Json(ApiResponse::success(item)))
}

/// Create or fully replace a content item
pub async fn upsert_content_item(
    State(state): State<AppState>,
    Json(input): Json<UpsertContentItemInput>,
) -> Result<Json<ApiResponse<ContentItem>>, ApiError> {
    info!(
        "Upserting content item (id: {:?}) for project: {}",
        input.id, input.project_id
    );

    let item = state.content_storage.upsert_content_item(input).await?;

    Ok(Json(ApiResponse::success(item)))
}

#[derive(Deserialize)]
pub struct RegenerateContentRequest {
    pub id: String,
    #[serde(rename = "promptPart")]
    pub prompt_part: Option<String>,
}

/// Re-run generation for an item, replacing only the body
pub async fn regenerate_content(
    State(state): State<AppState>,
    Json(request): Json<RegenerateContentRequest>,
) -> Result<Json<ApiResponse<ContentItem>>, ApiError> {
    info!("Regenerating content for item: {}", request.id);

    let item = state
        .pipeline
        .regenerate_content(&request.id, request.prompt_part)
        .await?;

    Ok(Json(ApiResponse::success(item)))
}

#[derive(Deserialize)]
pub struct ContentItemIdRequest {
    #[serde(rename = "contentItemId")]
    pub content_item_id: String,
}

/// Move a draft into author review
pub async fn move_to_review(
    State(state): State<AppState>,
    Json(request): Json<ContentItemIdRequest>,
) -> Result<Json<ApiResponse<ContentItem>>, ApiError> {
    let item = state.pipeline.move_to_review(&request.content_item_id).await?;
    Ok(Json(ApiResponse::success(item)))
}

/// Mark a reviewed item ready for publishing
pub async fn mark_ready(
    State(state): State<AppState>,
    Json(request): Json<ContentItemIdRequest>,
) -> Result<Json<ApiResponse<ContentItem>>, ApiError> {
    let item = state.pipeline.mark_ready(&request.content_item_id).await?;
    Ok(Json(ApiResponse::success(item)))
}

/// Generate and attach a hero image; failure leaves the item unchanged
pub async fn attach_image(
    State(state): State<AppState>,
    Json(request): Json<ContentItemIdRequest>,
) -> Result<Json<ApiResponse<ContentItem>>, ApiError> {
    info!("Attaching image to item: {}", request.content_item_id);

    let item = state.pipeline.attach_image(&request.content_item_id).await?;
    Ok(Json(ApiResponse::success(item)))
}

/// Request body for publishing an item to WordPress
#[derive(Deserialize)]
pub struct PublishRequestBody {
    #[serde(rename = "contentItemId")]
    pub content_item_id: String,
    #[serde(rename = "publishDate")]
    pub publish_date: Option<DateTime<Utc>>,
    #[serde(rename = "allowOverride", default)]
    pub allow_override: bool,
    pub wordpress: WordPressConnection,
}

/// Publish a finished item to the connected WordPress site
pub async fn publish_to_wordpress(
    State(state): State<AppState>,
    Json(request): Json<PublishRequestBody>,
) -> Result<Json<ApiResponse<ContentItem>>, ApiError> {
    info!("Publishing item: {}", request.content_item_id);

    let item = state
        .pipeline
        .publish_to_wordpress(
            &request.content_item_id,
            request.publish_date,
            request.allow_override,
            request.wordpress,
        )
        .await?;

    Ok(Json(ApiResponse::success(item)))
}

#[derive(Deserialize)]
pub struct UnpublishRequest {
    #[serde(rename = "contentItemId")]
    pub content_item_id: String,
    #[serde(rename = "toBacklog", default)]
    pub to_backlog: bool,
}

/// Administrative rollback of a published item
pub async fn unpublish(
    State(state): State<AppState>,
    Json(request): Json<UnpublishRequest>,
) -> Result<Json<ApiResponse<ContentItem>>, ApiError> {
    info!("Unpublishing item: {}", request.content_item_id);

    let item = state
        .pipeline
        .unpublish(&request.content_item_id, request.to_backlog)
        .await?;

    Ok(Json(ApiResponse::success(item)))
}

#[derive(Deserialize)]
pub struct ScopeQuery {
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(rename = "hypothesisId")]
    pub hypothesis_id: String,
}

/// Items whose WordPress post exists but whose local status diverged
pub async fn orphaned_publish_states(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<ApiResponse<Vec<ContentItem>>>, ApiError> {
    let items = state
        .content_storage
        .find_orphaned_published(&query.project_id, &query.hypothesis_id)
        .await?;

    Ok(Json(ApiResponse::success(items)))
}
