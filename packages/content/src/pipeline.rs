// ABOUTME: Content pipeline orchestration
// ABOUTME: Drives idea -> draft -> review -> publish across stores and adapters

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use trygo_ideas::{BacklogIdea, IdeaCategory, IdeaStorage};

use super::adapters::{
    ContentGenerator, GenerationRequest, ImageGenerator, PostPublisher, PublishRequest,
    WordPressConnection,
};
use super::error::{PipelineError, Result};
use super::guard::assert_publish_date_available;
use super::parser::parse_generated_draft;
use super::storage::ContentStorage;
use super::sync::{PipelineEvent, StatusSynchronizer};
use super::types::{ContentFormat, ContentItem, UpsertContentItemInput};

/// Project-level context handed in by the caller for generation calls.
/// The pipeline treats these as opaque strings.
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    pub lean_canvas: Option<String>,
    pub icp: Option<String>,
    pub keywords: Option<String>,
}

/// Orchestrates the content lifecycle. Adapters are injected so tests can
/// substitute fakes.
pub struct ContentPipeline {
    ideas: Arc<IdeaStorage>,
    content: Arc<ContentStorage>,
    generator: Arc<dyn ContentGenerator>,
    images: Arc<dyn ImageGenerator>,
    publisher: Arc<dyn PostPublisher>,
}

impl ContentPipeline {
    pub fn new(
        ideas: Arc<IdeaStorage>,
        content: Arc<ContentStorage>,
        generator: Arc<dyn ContentGenerator>,
        images: Arc<dyn ImageGenerator>,
        publisher: Arc<dyn PostPublisher>,
    ) -> Self {
        Self {
            ideas,
            content,
            generator,
            images,
            publisher,
        }
    }

    fn synchronizer(&self) -> StatusSynchronizer<'_> {
        StatusSynchronizer::new(&self.ideas, &self.content)
    }

    /// Generate (or refresh) the content item for a backlog idea. Updates
    /// the existing linked item when one exists instead of creating a
    /// second one, then moves the idea to scheduled and the item to draft.
    pub async fn generate_content_for_idea(
        &self,
        backlog_idea_id: &str,
        project_id: &str,
        hypothesis_id: &str,
        user_id: &str,
        context: GenerationContext,
    ) -> Result<ContentItem> {
        let idea = self.ideas.get_idea(backlog_idea_id).await?;
        verify_scope(&idea, project_id, hypothesis_id)?;

        info!(
            "Generating content for idea {} ({:?})",
            backlog_idea_id, idea.category
        );

        let request = GenerationRequest {
            title: idea.title.clone(),
            description: idea.description.clone(),
            category: idea.category,
            lean_canvas: context.lean_canvas,
            icp: context.icp,
            keywords: context.keywords,
            prompt_part: None,
        };

        let raw = self.generator.generate_draft(&request).await?;
        let draft = parse_generated_draft(&raw)?;

        let item = match self.content.get_content_item_by_idea(backlog_idea_id).await? {
            Some(existing) => {
                self.content
                    .set_generated_fields(&existing.id, draft.outline.as_deref(), &draft.body)
                    .await?
            }
            None => {
                self.content
                    .upsert_content_item(UpsertContentItemInput {
                        id: None,
                        project_id: project_id.to_string(),
                        hypothesis_id: hypothesis_id.to_string(),
                        user_id: user_id.to_string(),
                        backlog_idea_id: Some(backlog_idea_id.to_string()),
                        title: draft.title,
                        category: idea.category,
                        format: format_for_category(idea.category),
                        outline: draft.outline,
                        content: Some(draft.body),
                        image_url: None,
                        status: None,
                        due_date: None,
                        publish_date: None,
                    })
                    .await?
            }
        };

        self.synchronizer()
            .apply(
                PipelineEvent::ContentGenerated,
                Some(backlog_idea_id),
                Some(&item.id),
            )
            .await?;

        self.content.get_content_item(&item.id).await.map_err(Into::into)
    }

    /// Re-invoke generation for an existing item, replacing the body only.
    pub async fn regenerate_content(
        &self,
        content_item_id: &str,
        prompt_part: Option<String>,
    ) -> Result<ContentItem> {
        let item = self.content.get_content_item(content_item_id).await?;

        info!("Regenerating content for item {}", content_item_id);

        let request = GenerationRequest {
            title: item.title.clone(),
            description: None,
            category: item.category,
            lean_canvas: None,
            icp: None,
            keywords: None,
            prompt_part,
        };

        let raw = self.generator.regenerate_body(&request).await?;
        let draft = parse_generated_draft(&raw)?;

        self.content
            .set_content(content_item_id, &draft.body)
            .await
            .map_err(Into::into)
    }

    /// Optional image step. A failed image call is tolerated; the item
    /// proceeds without an image.
    pub async fn attach_image(&self, content_item_id: &str) -> Result<ContentItem> {
        let item = self.content.get_content_item(content_item_id).await?;

        match self
            .images
            .generate_image(&item.title, item.outline.as_deref())
            .await
        {
            Ok(url) => self
                .content
                .set_image_url(content_item_id, &url)
                .await
                .map_err(Into::into),
            Err(err) => {
                warn!(
                    "Image generation failed for item {}, continuing without image: {}",
                    content_item_id, err
                );
                Ok(item)
            }
        }
    }

    pub async fn move_to_review(&self, content_item_id: &str) -> Result<ContentItem> {
        self.apply_workflow_event(content_item_id, PipelineEvent::MovedToReview)
            .await
    }

    pub async fn mark_ready(&self, content_item_id: &str) -> Result<ContentItem> {
        self.apply_workflow_event(content_item_id, PipelineEvent::MarkedReady)
            .await
    }

    /// Administrative rollback of a published item.
    pub async fn unpublish(&self, content_item_id: &str, to_backlog: bool) -> Result<ContentItem> {
        self.apply_workflow_event(content_item_id, PipelineEvent::Unpublished { to_backlog })
            .await
    }

    async fn apply_workflow_event(
        &self,
        content_item_id: &str,
        event: PipelineEvent,
    ) -> Result<ContentItem> {
        let item = self.content.get_content_item(content_item_id).await?;

        self.synchronizer()
            .apply(event, item.backlog_idea_id.as_deref(), Some(&item.id))
            .await?;

        self.content
            .get_content_item(content_item_id)
            .await
            .map_err(Into::into)
    }

    /// Publish a finished item to WordPress. Publishing is one business
    /// event: only a successful adapter response triggers the two status
    /// writes, and a non-success response leaves both entities untouched.
    pub async fn publish_to_wordpress(
        &self,
        content_item_id: &str,
        publish_date: Option<DateTime<Utc>>,
        allow_override: bool,
        connection: WordPressConnection,
    ) -> Result<ContentItem> {
        let item = self.content.get_content_item(content_item_id).await?;

        let body = match item.content.as_deref() {
            Some(body) if !body.trim().is_empty() => body.to_string(),
            _ => {
                return Err(PipelineError::Validation(
                    "content item has no body to publish".to_string(),
                ))
            }
        };

        let effective_date = publish_date.or(item.publish_date);
        assert_publish_date_available(
            &self.content,
            &item.project_id,
            &item.hypothesis_id,
            effective_date,
            Some(&item.id),
            allow_override,
        )
        .await?;

        info!(
            "Publishing content item {} to {}",
            content_item_id, connection.base_url
        );

        let outcome = self
            .publisher
            .publish(&PublishRequest {
                title: item.title.clone(),
                content: body,
                category: item.category,
                connection,
                image_url: item.image_url.clone(),
            })
            .await?;

        // Adapter succeeded; from here on a failure leaves a live post
        // behind. The content-side write carries date, reference and
        // status in one statement, then the idea side follows.
        if let Err(err) = self
            .content
            .set_published_fields(
                content_item_id,
                effective_date,
                &outcome.post_id,
                &outcome.post_url,
            )
            .await
        {
            error!(
                "WordPress post {} is live but the publish write for item {} failed: {}. \
                 Stores have diverged; reconcile via the orphan probe.",
                outcome.post_id, content_item_id, err
            );
            return Err(err.into());
        }

        self.synchronizer()
            .apply(
                PipelineEvent::Published,
                item.backlog_idea_id.as_deref(),
                None,
            )
            .await?;

        self.content
            .get_content_item(content_item_id)
            .await
            .map_err(Into::into)
    }
}

fn format_for_category(category: IdeaCategory) -> ContentFormat {
    match category {
        IdeaCategory::Faq => ContentFormat::Faq,
        _ => ContentFormat::Blog,
    }
}

fn verify_scope(idea: &BacklogIdea, project_id: &str, hypothesis_id: &str) -> Result<()> {
    if idea.project_id != project_id || idea.hypothesis_id != hypothesis_id {
        return Err(PipelineError::NotFound(format!(
            "idea {} in scope {}/{}",
            idea.id, project_id, hypothesis_id
        )));
    }
    Ok(())
}
