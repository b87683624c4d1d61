// ABOUTME: AI service for making structured generation calls to OpenAI
// ABOUTME: Handles API requests, response extraction, and the generation adapter

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use trygo_content::prompts::{generation_prompt, regeneration_prompt, CONTENT_SYSTEM_PROMPT};
use trygo_content::{ContentGenerator, GenerationRequest, PipelineError};

const OPENAI_API_BASE: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_MAX_TOKENS: u32 = 4096;
const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum AiServiceError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("No API key configured")]
    NoApiKey,

    #[error("Invalid response format")]
    InvalidResponse,
}

pub type AiServiceResult<T> = Result<T, AiServiceError>;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// AI service for making generation calls to OpenAI chat completions
pub struct OpenAiService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiService {
    /// Create HTTP client with timeout configuration
    fn create_client() -> Client {
        Client::builder()
            .timeout(std::time::Duration::from_secs(600))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client")
    }

    /// Creates a new AI service instance
    /// API key is fetched from OPENAI_API_KEY environment variable
    /// Model can be overridden with OPENAI_MODEL environment variable
    pub fn new() -> Self {
        let api_key = env::var("OPENAI_API_KEY").ok();
        if api_key.is_none() {
            info!("OPENAI_API_KEY not set - generation calls will fail until configured");
        }

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        if model != DEFAULT_MODEL {
            info!("Using custom OpenAI model: {}", model);
        }

        Self {
            client: Self::create_client(),
            base_url: OPENAI_API_BASE.to_string(),
            api_key,
            model,
        }
    }

    /// Creates a new AI service instance with a specific API key
    pub fn with_api_key(api_key: String) -> Self {
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            client: Self::create_client(),
            base_url: OPENAI_API_BASE.to_string(),
            api_key: Some(api_key),
            model,
        }
    }

    /// Creates an instance against a non-default API base (tests, proxies)
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            client: Self::create_client(),
            base_url,
            api_key: Some(api_key),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Get the model being used by this service
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a text generation call and returns the raw completion text
    pub async fn generate_text(
        &self,
        prompt: String,
        system_prompt: Option<String>,
    ) -> AiServiceResult<String> {
        let api_key = self.api_key.as_ref().ok_or(AiServiceError::NoApiKey)?;

        let mut messages = Vec::new();
        if let Some(system) = system_prompt {
            messages.push(Message {
                role: "system".to_string(),
                content: system,
            });
        }
        messages.push(Message {
            role: "user".to_string(),
            content: prompt,
        });

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            messages,
        };

        info!(
            "Making OpenAI API request: model={}, max_tokens={}",
            request.model, request.max_tokens
        );

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("authorization", format!("Bearer {}", api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("OpenAI API request timed out");
                    AiServiceError::ApiError(
                        "Request timed out. The AI service may be overloaded or unavailable."
                            .to_string(),
                    )
                } else if e.is_connect() {
                    error!("Failed to connect to OpenAI API: {}", e);
                    AiServiceError::ApiError(format!("Connection failed: {}", e))
                } else {
                    error!("OpenAI API request failed: {}", e);
                    AiServiceError::RequestFailed(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("OpenAI API error: {} - {}", status, error_text);
            return Err(AiServiceError::ApiError(format!(
                "API returned {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|_| AiServiceError::InvalidResponse)?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .ok_or(AiServiceError::InvalidResponse)?
            .message
            .content;

        Ok(text)
    }
}

impl Default for OpenAiService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentGenerator for OpenAiService {
    async fn generate_draft(&self, request: &GenerationRequest) -> trygo_content::Result<String> {
        self.generate_text(
            generation_prompt(request),
            Some(CONTENT_SYSTEM_PROMPT.to_string()),
        )
        .await
        .map_err(|e| PipelineError::Upstream(e.to_string()))
    }

    async fn regenerate_body(&self, request: &GenerationRequest) -> trygo_content::Result<String> {
        self.generate_text(
            regeneration_prompt(request),
            Some(CONTENT_SYSTEM_PROMPT.to_string()),
        )
        .await
        .map_err(|e| PipelineError::Upstream(e.to_string()))
    }
}
