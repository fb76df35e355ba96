//! Notification composition, read-time fan-out, and read/delivery tracking.
//!
//! A message is one persisted row regardless of audience size: role and
//! broadcast targeting are resolved when a user loads their inbox, never by
//! materializing per-recipient copies at send time.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod stats;
pub mod templates;

pub use domain::{
    Channel, ComposeError, ComposeRequest, NotificationCategory, NotificationKind,
    NotificationMessage, NotificationPriority, RecipientColumns, RecipientTarget, EVERYONE_ROLE,
};
pub use repository::{BulkOutcome, NotificationRepository};
pub use router::notification_router;
pub use service::{NotificationService, NotificationServiceError};
pub use stats::{NotificationStats, NotificationStatsSummary};
pub use templates::{standard_catalog, NotificationTemplate};
