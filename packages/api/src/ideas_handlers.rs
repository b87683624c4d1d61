// ABOUTME: HTTP request handlers for backlog idea operations
// ABOUTME: Idea listing, custom creation, dismissal, and deletion

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use trygo_ideas::{BacklogIdea, CreateIdeaInput, IdeaCategory, IdeaStatus};

use super::response::{ApiError, ApiResponse};
use super::AppState;

#[derive(Deserialize)]
pub struct IdeasQuery {
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(rename = "hypothesisId")]
    pub hypothesis_id: Option<String>,
}

/// List backlog ideas for a project, optionally scoped to one hypothesis
pub async fn seo_agent_content_ideas(
    State(state): State<AppState>,
    Query(query): Query<IdeasQuery>,
) -> Result<Json<ApiResponse<Vec<BacklogIdea>>>, ApiError> {
    info!(
        "Listing content ideas for project: {} (hypothesis: {:?})",
        query.project_id, query.hypothesis_id
    );

    let ideas = state
        .idea_storage
        .list_ideas(&query.project_id, query.hypothesis_id.as_deref())
        .await?;

    Ok(Json(ApiResponse::success(ideas)))
}

/// Request body for creating a custom idea
#[derive(Deserialize)]
pub struct CreateIdeaRequest {
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(rename = "hypothesisId")]
    pub hypothesis_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: IdeaCategory,
    #[serde(rename = "clusterId")]
    pub cluster_id: Option<String>,
}

/// Create a user-authored backlog idea
pub async fn create_custom_content_idea(
    State(state): State<AppState>,
    Json(request): Json<CreateIdeaRequest>,
) -> Result<Json<ApiResponse<BacklogIdea>>, ApiError> {
    info!(
        "Creating custom idea '{}' for project: {}",
        request.title, request.project_id
    );

    let idea = state
        .idea_storage
        .create_idea(CreateIdeaInput {
            project_id: request.project_id,
            hypothesis_id: request.hypothesis_id,
            title: request.title,
            description: request.description,
            category: request.category,
            cluster_id: request.cluster_id,
        })
        .await?;

    Ok(Json(ApiResponse::success(idea)))
}

#[derive(Deserialize)]
pub struct DismissIdeaRequest {
    #[serde(rename = "ideaId")]
    pub idea_id: String,
}

/// Archive an idea the user does not want to pursue
pub async fn dismiss_content_idea(
    State(state): State<AppState>,
    Json(request): Json<DismissIdeaRequest>,
) -> Result<Json<ApiResponse<BacklogIdea>>, ApiError> {
    info!("Dismissing idea: {}", request.idea_id);

    let idea = state
        .idea_storage
        .update_idea_status(&request.idea_id, IdeaStatus::Archived)
        .await?;

    Ok(Json(ApiResponse::success(idea)))
}

/// Hard-delete an idea. Linked content items are left in place.
pub async fn delete_idea(
    State(state): State<AppState>,
    Path(idea_id): Path<String>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    info!("Deleting idea: {}", idea_id);

    let deleted = state.idea_storage.delete_idea(&idea_id).await?;

    Ok(Json(ApiResponse::success(deleted)))
}
