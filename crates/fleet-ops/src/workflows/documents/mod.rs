//! Document lifecycle tracking for uploaded fleet artifacts.
//!
//! Documents are created through a two-step upload saga (blob first, record
//! second, with a compensating blob delete if the record insert fails),
//! carry a derived expiry state, and feed a single-pass stats aggregation
//! the dashboard recomputes on every load.

pub mod domain;
pub mod lifecycle;
pub mod repository;
pub mod router;
pub mod service;
pub mod stats;
pub mod storage;

pub use domain::{
    Document, DocumentCategory, DocumentPatch, DocumentPriority, DocumentStatus, NewDocument,
};
pub use lifecycle::{ExpiryState, EXPIRING_SOON_WINDOW_DAYS};
pub use repository::DocumentRepository;
pub use router::document_router;
pub use service::{DocumentService, DocumentServiceError, DocumentValidationError};
pub use stats::{DocumentStats, DocumentStatsSummary, RECENT_UPLOAD_WINDOW_DAYS};
pub use storage::{StorageGateway, StoredObject, UploadError, UploadedFile};
