// ABOUTME: OpenAI service integration for Trygo
// ABOUTME: Chat-completion drafting and image generation clients

pub mod images;
pub mod service;

pub use images::ImageService;
pub use service::{AiServiceError, AiServiceResult, OpenAiService};
