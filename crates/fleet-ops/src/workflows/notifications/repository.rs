use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::backend::RepositoryError;
use crate::tenancy::{NotificationId, OrgContext};

use super::domain::NotificationMessage;

/// Per-id result of a bulk mutation: the ids that were applied and the ids
/// that no longer exist (or are outside the caller's inbox).
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkOutcome {
    pub applied: Vec<NotificationId>,
    pub missing: Vec<NotificationId>,
}

/// Storage abstraction for notification rows.
///
/// `inbox` performs the read-time fan-out: it returns every row of the
/// caller's organization addressed to the caller directly, to the caller's
/// role, or to everyone. Deletes are hard.
pub trait NotificationRepository: Send + Sync {
    fn insert(
        &self,
        ctx: &OrgContext,
        message: NotificationMessage,
    ) -> Result<NotificationMessage, RepositoryError>;
    fn inbox(&self, ctx: &OrgContext) -> Result<Vec<NotificationMessage>, RepositoryError>;
    fn mark_read(
        &self,
        ctx: &OrgContext,
        id: &NotificationId,
        read_at: DateTime<Utc>,
    ) -> Result<NotificationMessage, RepositoryError>;
    fn mark_read_bulk(
        &self,
        ctx: &OrgContext,
        ids: &[NotificationId],
        read_at: DateTime<Utc>,
    ) -> Result<BulkOutcome, RepositoryError>;
    fn delete(&self, ctx: &OrgContext, id: &NotificationId) -> Result<(), RepositoryError>;
    fn delete_bulk(
        &self,
        ctx: &OrgContext,
        ids: &[NotificationId],
    ) -> Result<BulkOutcome, RepositoryError>;
}
