use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::backend::RepositoryError;
use crate::tenancy::{NotificationId, OrgContext};

use super::domain::{ComposeError, ComposeRequest, NotificationMessage};
use super::repository::{BulkOutcome, NotificationRepository};
use super::stats::NotificationStats;
use super::templates::{standard_catalog, NotificationTemplate};

/// Service composing the message repository and the template catalog.
pub struct NotificationService<R> {
    repository: Arc<R>,
    templates: Vec<NotificationTemplate>,
}

static MESSAGE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_message_id() -> NotificationId {
    let id = MESSAGE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    NotificationId(format!("ntf-{id:06}"))
}

impl<R> NotificationService<R>
where
    R: NotificationRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            templates: standard_catalog(),
        }
    }

    /// Persist a composed message as a single row.
    ///
    /// The row is written immediately even when `scheduled_for` lies in the
    /// future; scheduling is stored, not dispatched. `sent_at` is stamped
    /// here, so a read receipt can never precede the send timestamp.
    /// There is no retry and no idempotency key: a resubmission after a
    /// lost acknowledgment writes a second row.
    pub fn send(
        &self,
        ctx: &OrgContext,
        request: ComposeRequest,
    ) -> Result<NotificationMessage, NotificationServiceError> {
        request.validate()?;

        let columns = request.target.columns();
        let now = Utc::now();

        let mut metadata = request.metadata;
        if !request.tags.is_empty() {
            metadata.insert("tags".to_string(), request.tags.join(","));
        }

        let message = NotificationMessage {
            id: next_message_id(),
            org_id: ctx.org_id.clone(),
            sender_id: ctx.user_id.clone(),
            sender_name: ctx.user_name.clone(),
            sender_role: ctx.role.clone(),
            recipient_id: columns.recipient_id,
            recipient_role: columns.recipient_role,
            title: request.title,
            body: request.body,
            kind: request.kind,
            priority: request.priority,
            category: request.category,
            channels: request.channels,
            scheduled_for: request.scheduled_for,
            sent_at: Some(now),
            delivered_at: None,
            read_at: None,
            metadata,
            created_at: now,
        };

        Ok(self.repository.insert(ctx, message)?)
    }

    /// The caller's inbox, resolved by read-time fan-out.
    pub fn inbox(&self, ctx: &OrgContext) -> Result<Vec<NotificationMessage>, NotificationServiceError> {
        Ok(self.repository.inbox(ctx)?)
    }

    pub fn stats(&self, ctx: &OrgContext) -> Result<NotificationStats, NotificationServiceError> {
        let messages = self.repository.inbox(ctx)?;
        Ok(NotificationStats::collect(&messages))
    }

    pub fn mark_read(
        &self,
        ctx: &OrgContext,
        id: &NotificationId,
    ) -> Result<NotificationMessage, NotificationServiceError> {
        Ok(self.repository.mark_read(ctx, id, Utc::now())?)
    }

    /// Mark several messages read, reporting the ids that could not be
    /// updated instead of failing the whole batch.
    pub fn mark_read_bulk(
        &self,
        ctx: &OrgContext,
        ids: &[NotificationId],
    ) -> Result<BulkOutcome, NotificationServiceError> {
        Ok(self.repository.mark_read_bulk(ctx, ids, Utc::now())?)
    }

    pub fn delete(
        &self,
        ctx: &OrgContext,
        id: &NotificationId,
    ) -> Result<(), NotificationServiceError> {
        Ok(self.repository.delete(ctx, id)?)
    }

    pub fn delete_bulk(
        &self,
        ctx: &OrgContext,
        ids: &[NotificationId],
    ) -> Result<BulkOutcome, NotificationServiceError> {
        Ok(self.repository.delete_bulk(ctx, ids)?)
    }

    pub fn templates(&self) -> &[NotificationTemplate] {
        &self.templates
    }

    pub fn template(&self, name: &str) -> Option<&NotificationTemplate> {
        self.templates
            .iter()
            .find(|template| template.name == name)
    }
}

/// Error raised by the notification service.
#[derive(Debug, thiserror::Error)]
pub enum NotificationServiceError {
    #[error(transparent)]
    Compose(#[from] ComposeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
