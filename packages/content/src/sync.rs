// ABOUTME: Status synchronizer keeping idea and content statuses consistent
// ABOUTME: A fixed event-to-status mapping, not a general state machine

use tracing::{debug, error};

use trygo_ideas::{IdeaStatus, IdeaStorage};

use super::error::Result;
use super::storage::ContentStorage;
use super::types::ContentStatus;

/// Business events that move the pipeline. The mapping below is the
/// authoritative transition set; anything else is a data-integrity defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineEvent {
    IdeaCreated,
    ContentGenerated,
    MovedToReview,
    MarkedReady,
    Published,
    PublishFailed,
    Unpublished { to_backlog: bool },
}

/// Target statuses for one event. `None` means that side does not move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTargets {
    pub idea: Option<IdeaStatus>,
    pub content: Option<ContentStatus>,
}

impl PipelineEvent {
    pub fn targets(self) -> StatusTargets {
        match self {
            PipelineEvent::IdeaCreated => StatusTargets {
                idea: Some(IdeaStatus::Pending),
                content: None,
            },
            PipelineEvent::ContentGenerated => StatusTargets {
                idea: Some(IdeaStatus::Scheduled),
                content: Some(ContentStatus::Draft),
            },
            PipelineEvent::MovedToReview => StatusTargets {
                idea: Some(IdeaStatus::Scheduled),
                content: Some(ContentStatus::Review),
            },
            PipelineEvent::MarkedReady => StatusTargets {
                idea: Some(IdeaStatus::Scheduled),
                content: Some(ContentStatus::Ready),
            },
            PipelineEvent::Published => StatusTargets {
                idea: Some(IdeaStatus::Published),
                content: Some(ContentStatus::Published),
            },
            // A failed publish is treated as not having happened.
            PipelineEvent::PublishFailed => StatusTargets {
                idea: None,
                content: None,
            },
            PipelineEvent::Unpublished { to_backlog } => StatusTargets {
                idea: Some(if to_backlog {
                    IdeaStatus::Backlog
                } else {
                    IdeaStatus::Pending
                }),
                content: Some(ContentStatus::Ready),
            },
        }
    }
}

/// Applies an event's target statuses to both stores.
pub struct StatusSynchronizer<'a> {
    ideas: &'a IdeaStorage,
    content: &'a ContentStorage,
}

impl<'a> StatusSynchronizer<'a> {
    pub fn new(ideas: &'a IdeaStorage, content: &'a ContentStorage) -> Self {
        Self { ideas, content }
    }

    /// Write the event's target statuses. Content side first, idea side
    /// second; a failure between the two is logged as a recoverable
    /// inconsistency and surfaced to the caller.
    pub async fn apply(
        &self,
        event: PipelineEvent,
        idea_id: Option<&str>,
        content_item_id: Option<&str>,
    ) -> Result<()> {
        let targets = event.targets();
        debug!("Applying pipeline event {:?}: {:?}", event, targets);

        if let (Some(status), Some(id)) = (targets.content, content_item_id) {
            self.content.set_status(id, status).await?;
        }

        if let (Some(status), Some(id)) = (targets.idea, idea_id) {
            if let Err(err) = self.ideas.update_idea_status(id, status).await {
                error!(
                    "Status sync for {:?} half-applied: content item {:?} updated but idea {} write failed: {}. \
                     Stores have diverged; reconcile via the orphan probe.",
                    event, content_item_id, id, err
                );
                return Err(err.into());
            }
        }

        Ok(())
    }
}
