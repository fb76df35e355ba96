use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::tenancy::{DocumentId, OrgId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Compliance,
    Insurance,
    Vehicle,
    Driver,
    Operational,
    Financial,
    Other,
}

impl DocumentCategory {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Compliance,
            Self::Insurance,
            Self::Vehicle,
            Self::Driver,
            Self::Operational,
            Self::Financial,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliance => "Compliance",
            Self::Insurance => "Insurance",
            Self::Vehicle => "Vehicle",
            Self::Driver => "Driver",
            Self::Operational => "Operational",
            Self::Financial => "Financial",
            Self::Other => "Other",
        }
    }

    /// Parse a free-form category label; anything unrecognized lands in `Other`.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "compliance" => Self::Compliance,
            "insurance" => Self::Insurance,
            "vehicle" => Self::Vehicle,
            "driver" => Self::Driver,
            "operational" => Self::Operational,
            "financial" => Self::Financial,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
    Expired,
    Active,
    Archived,
}

impl DocumentStatus {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Draft,
            Self::Pending,
            Self::Approved,
            Self::Rejected,
            Self::Expired,
            Self::Active,
            Self::Archived,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Expired => "Expired",
            Self::Active => "Active",
            Self::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl DocumentPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// A stored compliance artifact and its lifecycle metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub org_id: OrgId,
    pub name: String,
    pub category: DocumentCategory,
    pub status: DocumentStatus,
    pub priority: DocumentPriority,
    pub expiry_date: Option<NaiveDate>,
    pub confidential: bool,
    pub tags: Vec<String>,
    pub version: String,
    pub favorite: bool,
    pub download_count: u64,
    pub uploaded_by: UserId,
    pub storage_path: String,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Metadata supplied alongside the file bytes when a document is uploaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDocument {
    pub name: String,
    pub category: DocumentCategory,
    #[serde(default = "default_priority")]
    pub priority: DocumentPriority,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub confidential: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_priority() -> DocumentPriority {
    DocumentPriority::Medium
}

fn default_version() -> String {
    "1.0".to_string()
}

/// Partial update applied to a stored document.
///
/// Only the set fields are written; the repository stamps `updated_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_count: Option<u64>,
}
