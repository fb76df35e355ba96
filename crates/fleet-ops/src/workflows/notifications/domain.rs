use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tenancy::{NotificationId, OrgId, RoleName, UserId};

/// Sentinel role stored on broadcast messages; every user matches it.
pub const EVERYONE_ROLE: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
    Error,
}

impl NotificationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    Low,
    Normal,
    High,
    Emergency,
}

impl NotificationPriority {
    pub const fn ordered() -> [Self; 4] {
        [Self::Low, Self::Normal, Self::High, Self::Emergency]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
            Self::Emergency => "Emergency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    General,
    Safety,
    Schedule,
    Maintenance,
    Emergency,
}

impl NotificationCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Safety => "Safety",
            Self::Schedule => "Schedule",
            Self::Maintenance => "Maintenance",
            Self::Emergency => "Emergency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    InApp,
    Push,
    Email,
    Sms,
}

impl Channel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::InApp => "In-App",
            Self::Push => "Push",
            Self::Email => "Email",
            Self::Sms => "SMS",
        }
    }
}

/// Compose-time audience selection: exactly one of a specific user, a role,
/// or everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecipientTarget {
    Specific { user_id: UserId },
    Role { role: RoleName },
    Everyone,
}

impl RecipientTarget {
    /// Resolve the target into its persisted column pair.
    ///
    /// Exactly one column is set; broadcast targeting is stored as the
    /// `"all"` sentinel role so it only exists at the persistence edge.
    pub fn columns(&self) -> RecipientColumns {
        match self {
            Self::Specific { user_id } => RecipientColumns {
                recipient_id: Some(user_id.clone()),
                recipient_role: None,
            },
            Self::Role { role } => RecipientColumns {
                recipient_id: None,
                recipient_role: Some(role.clone()),
            },
            Self::Everyone => RecipientColumns {
                recipient_id: None,
                recipient_role: Some(RoleName(EVERYONE_ROLE.to_string())),
            },
        }
    }
}

/// Persisted recipient shape of a message row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientColumns {
    pub recipient_id: Option<UserId>,
    pub recipient_role: Option<RoleName>,
}

/// A single persisted notification row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub id: NotificationId,
    pub org_id: OrgId,
    pub sender_id: UserId,
    pub sender_name: String,
    pub sender_role: RoleName,
    pub recipient_id: Option<UserId>,
    pub recipient_role: Option<RoleName>,
    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
    pub priority: NotificationPriority,
    pub category: NotificationCategory,
    pub channels: Vec<Channel>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub sent_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub read_at: Option<DateTime<Utc>>,
    pub metadata: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

impl NotificationMessage {
    /// Read-time fan-out: does this row belong in the given user's inbox?
    pub fn addressed_to(&self, user_id: &UserId, role: &RoleName) -> bool {
        if self.recipient_id.as_ref() == Some(user_id) {
            return true;
        }

        match &self.recipient_role {
            Some(target_role) => target_role == role || target_role.0 == EVERYONE_ROLE,
            None => false,
        }
    }

    pub fn is_unread(&self) -> bool {
        self.read_at.is_none()
    }
}

/// Compose form handed to the notification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeRequest {
    pub target: RecipientTarget,
    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
    pub priority: NotificationPriority,
    pub category: NotificationCategory,
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ComposeRequest {
    pub(crate) fn validate(&self) -> Result<(), ComposeError> {
        if self.title.trim().is_empty() {
            return Err(ComposeError::EmptyTitle);
        }
        if self.body.trim().is_empty() {
            return Err(ComposeError::EmptyBody);
        }
        if self.channels.is_empty() {
            return Err(ComposeError::NoChannels);
        }
        Ok(())
    }
}

/// Compose validation failures caught before any backend call.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("notification title must not be empty")]
    EmptyTitle,
    #[error("notification body must not be empty")]
    EmptyBody,
    #[error("at least one delivery channel is required")]
    NoChannels,
}
