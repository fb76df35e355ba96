use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{Document, DocumentPatch, DocumentStatus};

/// Documents whose expiry falls strictly inside this window count as expiring soon.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 30;

/// Derived expiry classification of a document relative to an evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryState {
    NotApplicable,
    Current,
    ExpiringSoon,
    Expired,
}

impl ExpiryState {
    /// Classify an optional expiry date against `today`.
    ///
    /// No expiry date is `NotApplicable`, never `Expired`. The expiring-soon
    /// window is strict on both bounds, so a document expiring exactly today
    /// is neither expired nor expiring soon.
    pub fn classify(expiry_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(expiry) = expiry_date else {
            return Self::NotApplicable;
        };

        if expiry < today {
            Self::Expired
        } else if expiry > today && expiry < today + Duration::days(EXPIRING_SOON_WINDOW_DAYS) {
            Self::ExpiringSoon
        } else {
            Self::Current
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotApplicable => "Not Applicable",
            Self::Current => "Current",
            Self::ExpiringSoon => "Expiring Soon",
            Self::Expired => "Expired",
        }
    }
}

impl Document {
    /// Stored status, except that an elapsed expiry date always reports
    /// `Expired` regardless of what the row still says.
    pub fn effective_status(&self, today: NaiveDate) -> DocumentStatus {
        match ExpiryState::classify(self.expiry_date, today) {
            ExpiryState::Expired => DocumentStatus::Expired,
            _ => self.status,
        }
    }
}

/// Update request flipping the favorite flag; status and expiry are untouched.
pub fn favorite_patch(value: bool) -> DocumentPatch {
    DocumentPatch {
        favorite: Some(value),
        ..DocumentPatch::default()
    }
}

/// Update request archiving or restoring a document.
///
/// This is a blunt status overwrite: un-archiving writes `Active` even if the
/// document was `Pending` or `Rejected` before it was archived.
pub fn archive_patch(archived: bool) -> DocumentPatch {
    let status = if archived {
        DocumentStatus::Archived
    } else {
        DocumentStatus::Active
    };

    DocumentPatch {
        status: Some(status),
        ..DocumentPatch::default()
    }
}

/// Update request bumping the download counter by one.
pub fn download_patch(document: &Document) -> DocumentPatch {
    DocumentPatch {
        download_count: Some(document.download_count.saturating_add(1)),
        ..DocumentPatch::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn missing_expiry_is_never_expired() {
        let today = day(2026, 8, 7);
        assert_eq!(ExpiryState::classify(None, today), ExpiryState::NotApplicable);
    }

    #[test]
    fn past_expiry_is_expired() {
        let today = day(2026, 8, 7);
        assert_eq!(
            ExpiryState::classify(Some(day(2026, 8, 6)), today),
            ExpiryState::Expired
        );
    }

    #[test]
    fn expiry_today_is_current_not_expiring() {
        let today = day(2026, 8, 7);
        assert_eq!(
            ExpiryState::classify(Some(today), today),
            ExpiryState::Current
        );
    }

    #[test]
    fn window_bounds_are_strict() {
        let today = day(2026, 8, 7);
        assert_eq!(
            ExpiryState::classify(Some(today + Duration::days(1)), today),
            ExpiryState::ExpiringSoon
        );
        assert_eq!(
            ExpiryState::classify(Some(today + Duration::days(29)), today),
            ExpiryState::ExpiringSoon
        );
        assert_eq!(
            ExpiryState::classify(Some(today + Duration::days(30)), today),
            ExpiryState::Current
        );
    }
}
