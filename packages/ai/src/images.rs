// ABOUTME: Image generation client for content hero images
// ABOUTME: Calls the OpenAI images endpoint and returns a hosted URL

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use trygo_content::{ImageGenerator, PipelineError};

use crate::service::{AiServiceError, AiServiceResult};

const OPENAI_API_BASE: &str = "https://api.openai.com";
const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
const DEFAULT_IMAGE_SIZE: &str = "1792x1024";

#[derive(Debug, Serialize)]
struct ImageRequest {
    model: String,
    prompt: String,
    n: u32,
    size: String,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: String,
}

/// Client for generating hero images for content items
pub struct ImageService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl ImageService {
    fn create_client() -> Client {
        Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client")
    }

    /// API key from OPENAI_API_KEY, model override via OPENAI_IMAGE_MODEL
    pub fn new() -> Self {
        Self {
            client: Self::create_client(),
            base_url: OPENAI_API_BASE.to_string(),
            api_key: env::var("OPENAI_API_KEY").ok(),
            model: env::var("OPENAI_IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
        }
    }

    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            client: Self::create_client(),
            base_url,
            api_key: Some(api_key),
            model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    pub async fn create_image(&self, prompt: String) -> AiServiceResult<String> {
        let api_key = self.api_key.as_ref().ok_or(AiServiceError::NoApiKey)?;

        let request = ImageRequest {
            model: self.model.clone(),
            prompt,
            n: 1,
            size: DEFAULT_IMAGE_SIZE.to_string(),
        };

        info!("Making OpenAI image request: model={}", request.model);

        let response = self
            .client
            .post(format!("{}/v1/images/generations", self.base_url))
            .header("authorization", format!("Bearer {}", api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("OpenAI image API error: {} - {}", status, error_text);
            return Err(AiServiceError::ApiError(format!(
                "API returned {}: {}",
                status, error_text
            )));
        }

        let images: ImageResponse = response
            .json()
            .await
            .map_err(|_| AiServiceError::InvalidResponse)?;

        images
            .data
            .into_iter()
            .next()
            .map(|d| d.url)
            .ok_or(AiServiceError::InvalidResponse)
    }
}

impl Default for ImageService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerator for ImageService {
    async fn generate_image(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> trygo_content::Result<String> {
        let prompt = match description {
            Some(description) => format!(
                "Hero image for an article titled \"{}\". Article outline: {}",
                title, description
            ),
            None => format!("Hero image for an article titled \"{}\"", title),
        };

        self.create_image(prompt)
            .await
            .map_err(|e| PipelineError::Upstream(e.to_string()))
    }
}
