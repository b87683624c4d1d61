// ABOUTME: WordPress REST client for publishing content items
// ABOUTME: Posts and media sub-resources over Basic-Auth application passwords

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

use trygo_content::{PipelineError, PostPublisher, PublishOutcome, PublishRequest, WordPressConnection};

#[derive(Debug, Error)]
pub enum WordPressError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("WordPress API error: {0}")]
    ApiError(String),

    #[error("Invalid response format")]
    InvalidResponse,
}

pub type WordPressResult<T> = Result<T, WordPressError>;

#[derive(Debug, Serialize)]
struct CreatePostRequest {
    title: String,
    content: String,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    featured_media: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct PostResponse {
    id: u64,
    link: String,
}

#[derive(Debug, Deserialize)]
struct MediaResponse {
    id: u64,
}

/// Client for a WordPress site's REST API. Connection parameters arrive
/// per call; the client only owns the HTTP plumbing.
pub struct WordPressClient {
    client: Client,
}

impl WordPressClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Sideload an image into the site's media library. The asset is
    /// fetched from `image_url` and re-uploaded to the target site.
    pub async fn upload_media(
        &self,
        connection: &WordPressConnection,
        image_url: &str,
    ) -> WordPressResult<u64> {
        info!("Uploading media asset to {}", connection.base_url);

        let image = self.client.get(image_url).send().await?;
        if !image.status().is_success() {
            return Err(WordPressError::ApiError(format!(
                "fetching media asset returned {}",
                image.status()
            )));
        }
        let content_type = image
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();
        let bytes = image.bytes().await?;

        let response = self
            .client
            .post(format!("{}/wp-json/wp/v2/media", connection.base_url))
            .basic_auth(&connection.username, Some(&connection.application_password))
            .header("content-type", content_type)
            .header(
                "content-disposition",
                "attachment; filename=\"trygo-hero.png\"",
            )
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("WordPress media upload failed: {} - {}", status, error_text);
            return Err(WordPressError::ApiError(format!(
                "media upload returned {}: {}",
                status, error_text
            )));
        }

        let media: MediaResponse = response
            .json()
            .await
            .map_err(|_| WordPressError::InvalidResponse)?;

        Ok(media.id)
    }

    /// Create a live post. Returns the post's id and public URL.
    pub async fn create_post(
        &self,
        connection: &WordPressConnection,
        title: &str,
        content: &str,
        featured_media: Option<u64>,
    ) -> WordPressResult<(u64, String)> {
        info!("Creating WordPress post on {}", connection.base_url);

        let request = CreatePostRequest {
            title: title.to_string(),
            content: content.to_string(),
            status: "publish".to_string(),
            featured_media,
        };

        let response = self
            .client
            .post(format!("{}/wp-json/wp/v2/posts", connection.base_url))
            .basic_auth(&connection.username, Some(&connection.application_password))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("WordPress post creation failed: {} - {}", status, error_text);
            return Err(WordPressError::ApiError(format!(
                "post creation returned {}: {}",
                status, error_text
            )));
        }

        let post: PostResponse = response
            .json()
            .await
            .map_err(|_| WordPressError::InvalidResponse)?;

        Ok((post.id, post.link))
    }
}

impl Default for WordPressClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostPublisher for WordPressClient {
    async fn publish(&self, request: &PublishRequest) -> trygo_content::Result<PublishOutcome> {
        // A failed media upload downgrades to a post without a hero image;
        // a failed post creation is the all-or-nothing failure surfaced to
        // the pipeline.
        let featured_media = match &request.image_url {
            Some(image_url) => match self.upload_media(&request.connection, image_url).await {
                Ok(id) => Some(id),
                Err(err) => {
                    warn!("Media upload failed, publishing without image: {}", err);
                    None
                }
            },
            None => None,
        };

        let (post_id, post_url) = self
            .create_post(
                &request.connection,
                &request.title,
                &request.content,
                featured_media,
            )
            .await
            .map_err(|e| PipelineError::Upstream(e.to_string()))?;

        Ok(PublishOutcome {
            post_id: post_id.to_string(),
            post_url,
        })
    }
}
