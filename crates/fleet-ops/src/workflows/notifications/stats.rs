use std::collections::HashMap;

use serde::Serialize;

use super::domain::{NotificationMessage, NotificationPriority};

#[derive(Debug, Default)]
pub struct NotificationStats {
    pub total: usize,
    pub unread: usize,
    pub sent: usize,
    pub delivered: usize,
    pub by_priority: HashMap<NotificationPriority, usize>,
}

impl NotificationStats {
    /// Aggregate the full fetched message set; nothing is cached between
    /// loads.
    pub fn collect(messages: &[NotificationMessage]) -> Self {
        let mut stats = Self {
            total: messages.len(),
            ..Self::default()
        };

        for message in messages {
            if message.is_unread() {
                stats.unread += 1;
            }
            if message.sent_at.is_some() {
                stats.sent += 1;
            }
            if message.delivered_at.is_some() {
                stats.delivered += 1;
            }
            *stats.by_priority.entry(message.priority).or_default() += 1;
        }

        stats
    }

    /// Delivered share of sent messages as a whole percentage, rounded to
    /// the nearest integer; zero when nothing has been sent.
    pub fn delivery_rate_pct(&self) -> u8 {
        if self.sent == 0 {
            return 0;
        }

        ((self.delivered as f64 / self.sent as f64) * 100.0).round() as u8
    }

    pub fn summary(&self) -> NotificationStatsSummary {
        let priority_counts = NotificationPriority::ordered()
            .into_iter()
            .filter_map(|priority| {
                self.by_priority
                    .get(&priority)
                    .map(|count| PriorityCountEntry {
                        priority,
                        priority_label: priority.label(),
                        count: *count,
                    })
            })
            .collect();

        NotificationStatsSummary {
            total: self.total,
            unread: self.unread,
            delivery_rate_pct: self.delivery_rate_pct(),
            priority_counts,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityCountEntry {
    pub priority: NotificationPriority,
    pub priority_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationStatsSummary {
    pub total: usize,
    pub unread: usize,
    pub delivery_rate_pct: u8,
    pub priority_counts: Vec<PriorityCountEntry>,
}
