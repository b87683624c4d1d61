// ABOUTME: Content lifecycle pipeline for Trygo
// ABOUTME: Content items, status synchronization, publish-date guard, and orchestration

pub mod adapters;
pub mod error;
pub mod guard;
pub mod parser;
pub mod pipeline;
pub mod prompts;
pub mod storage;
pub mod sync;
pub mod types;

pub use adapters::{
    ContentGenerator, GenerationRequest, ImageGenerator, PostPublisher, PublishOutcome,
    PublishRequest, WordPressConnection,
};
pub use error::{PipelineError, Result};
pub use guard::assert_publish_date_available;
pub use parser::{parse_generated_draft, GeneratedDraft};
pub use pipeline::ContentPipeline;
pub use storage::ContentStorage;
pub use sync::{PipelineEvent, StatusSynchronizer, StatusTargets};
pub use types::{ContentFormat, ContentItem, ContentStatus, UpsertContentItemInput};

// Re-exported so adapter crates can name the category without depending on
// the ideas package directly
pub use trygo_ideas::IdeaCategory;
