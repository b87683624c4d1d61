// ABOUTME: External collaborator boundaries for the content pipeline
// ABOUTME: Traits for LLM generation, image generation, and WordPress publishing

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use trygo_ideas::IdeaCategory;

use super::error::Result;

/// Everything the generation adapter needs to draft a piece of content.
/// Project context (lean canvas, ICP, keyword data) is supplied by the
/// caller as opaque strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: IdeaCategory,
    pub lean_canvas: Option<String>,
    pub icp: Option<String>,
    pub keywords: Option<String>,
    /// Extra caller instructions, e.g. the promptPart of a regeneration.
    pub prompt_part: Option<String>,
}

/// Target WordPress connection for a publish call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPressConnection {
    pub base_url: String,
    pub username: String,
    pub application_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub title: String,
    pub content: String,
    pub category: IdeaCategory,
    pub connection: WordPressConnection,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOutcome {
    pub post_id: String,
    pub post_url: String,
}

/// LLM boundary. Returns the raw model text; the pipeline owns parsing.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_draft(&self, request: &GenerationRequest) -> Result<String>;

    /// Body-only regeneration for an existing item.
    async fn regenerate_body(&self, request: &GenerationRequest) -> Result<String>;
}

/// Image service boundary. Returns a hosted image URL.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, title: &str, description: Option<&str>) -> Result<String>;
}

/// WordPress boundary. All-or-nothing: any error means no post was
/// recorded and the caller leaves both entities unchanged.
#[async_trait]
pub trait PostPublisher: Send + Sync {
    async fn publish(&self, request: &PublishRequest) -> Result<PublishOutcome>;
}
