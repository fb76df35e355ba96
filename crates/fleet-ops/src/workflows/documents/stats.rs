use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::domain::{Document, DocumentCategory, DocumentStatus};
use super::lifecycle::ExpiryState;

/// Documents uploaded within this window count as recent.
pub const RECENT_UPLOAD_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Default)]
pub struct DocumentStats {
    pub total: usize,
    pub by_status: HashMap<DocumentStatus, usize>,
    pub by_category: HashMap<DocumentCategory, usize>,
    pub expiring_soon: usize,
    pub expired: usize,
    pub recently_uploaded: usize,
    pub favorites: usize,
}

impl DocumentStats {
    /// Aggregate the whole document set in one pass.
    ///
    /// Status counts use the derived (effective) status, so a row still
    /// marked `Active` with an elapsed expiry tallies under `Expired`.
    /// Already-expired documents never count toward `expiring_soon`.
    pub fn collect(documents: &[Document], now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let recent_cutoff = now - Duration::days(RECENT_UPLOAD_WINDOW_DAYS);
        let mut stats = Self {
            total: documents.len(),
            ..Self::default()
        };

        for document in documents {
            *stats
                .by_status
                .entry(document.effective_status(today))
                .or_default() += 1;
            *stats.by_category.entry(document.category).or_default() += 1;

            match ExpiryState::classify(document.expiry_date, today) {
                ExpiryState::Expired => stats.expired += 1,
                ExpiryState::ExpiringSoon => stats.expiring_soon += 1,
                ExpiryState::Current | ExpiryState::NotApplicable => {}
            }

            if document.created_at > recent_cutoff {
                stats.recently_uploaded += 1;
            }

            if document.favorite {
                stats.favorites += 1;
            }
        }

        stats
    }

    pub fn summary(&self) -> DocumentStatsSummary {
        let status_counts = DocumentStatus::ordered()
            .into_iter()
            .filter_map(|status| {
                self.by_status.get(&status).map(|count| StatusCountEntry {
                    status,
                    status_label: status.label(),
                    count: *count,
                })
            })
            .collect();

        let category_counts = DocumentCategory::ordered()
            .into_iter()
            .filter_map(|category| {
                self.by_category
                    .get(&category)
                    .map(|count| CategoryCountEntry {
                        category,
                        category_label: category.label(),
                        count: *count,
                    })
            })
            .collect();

        DocumentStatsSummary {
            total: self.total,
            status_counts,
            category_counts,
            expiring_soon: self.expiring_soon,
            expired: self.expired,
            recently_uploaded: self.recently_uploaded,
            favorites: self.favorites,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCountEntry {
    pub status: DocumentStatus,
    pub status_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCountEntry {
    pub category: DocumentCategory,
    pub category_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentStatsSummary {
    pub total: usize,
    pub status_counts: Vec<StatusCountEntry>,
    pub category_counts: Vec<CategoryCountEntry>,
    pub expiring_soon: usize,
    pub expired: usize,
    pub recently_uploaded: usize,
    pub favorites: usize,
}
