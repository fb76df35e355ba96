use serde::Serialize;

use super::domain::{ComposeRequest, NotificationCategory, NotificationKind, NotificationPriority};

/// Pre-seeded compose template: a copy source for message content fields.
///
/// The catalog is static; `usage_count` is a display figure and is not
/// incremented when a template is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationTemplate {
    pub name: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub kind: NotificationKind,
    pub priority: NotificationPriority,
    pub category: NotificationCategory,
    pub tags: Vec<&'static str>,
    pub usage_count: u32,
}

impl NotificationTemplate {
    /// Copy the template's content fields into a draft, leaving the draft's
    /// audience, channels, and schedule untouched. The template itself is
    /// never mutated, so applying twice is a no-op after the first.
    pub fn apply_to(&self, mut draft: ComposeRequest) -> ComposeRequest {
        draft.title = self.title.to_string();
        draft.body = self.body.to_string();
        draft.kind = self.kind;
        draft.priority = self.priority;
        draft.category = self.category;
        draft.tags = self.tags.iter().map(|tag| tag.to_string()).collect();
        draft
    }
}

/// The stock catalog shipped with the dashboard.
pub fn standard_catalog() -> Vec<NotificationTemplate> {
    vec![
        NotificationTemplate {
            name: "vehicle_breakdown",
            title: "Vehicle Breakdown Reported",
            body: "A vehicle on an active route has reported a breakdown. Dispatch a recovery unit and reassign the route if needed.",
            kind: NotificationKind::Error,
            priority: NotificationPriority::Emergency,
            category: NotificationCategory::Emergency,
            tags: vec!["breakdown", "dispatch"],
            usage_count: 48,
        },
        NotificationTemplate {
            name: "route_delay",
            title: "Route Running Late",
            body: "The route is running behind schedule. Affected parents and schools will see updated arrival estimates.",
            kind: NotificationKind::Warning,
            priority: NotificationPriority::High,
            category: NotificationCategory::Schedule,
            tags: vec!["route", "delay"],
            usage_count: 131,
        },
        NotificationTemplate {
            name: "maintenance_due",
            title: "Scheduled Maintenance Due",
            body: "A vehicle is due for scheduled maintenance this week. Book a workshop slot before the compliance deadline.",
            kind: NotificationKind::Info,
            priority: NotificationPriority::Normal,
            category: NotificationCategory::Maintenance,
            tags: vec!["maintenance"],
            usage_count: 77,
        },
        NotificationTemplate {
            name: "safety_alert",
            title: "Safety Alert",
            body: "A safety concern has been raised. Review the incident report and acknowledge receipt.",
            kind: NotificationKind::Warning,
            priority: NotificationPriority::High,
            category: NotificationCategory::Safety,
            tags: vec!["safety", "incident"],
            usage_count: 29,
        },
        NotificationTemplate {
            name: "document_expiry",
            title: "Document Expiring Soon",
            body: "A compliance document is approaching its expiry date. Upload a renewed copy to stay compliant.",
            kind: NotificationKind::Info,
            priority: NotificationPriority::Normal,
            category: NotificationCategory::General,
            tags: vec!["documents", "compliance"],
            usage_count: 95,
        },
    ]
}
