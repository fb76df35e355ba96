use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::backend::RepositoryError;
use crate::tenancy::{DocumentId, OrgContext};

use super::domain::{Document, DocumentStatus, NewDocument};
use super::lifecycle::{archive_patch, download_patch, favorite_patch};
use super::repository::DocumentRepository;
use super::stats::DocumentStats;
use super::storage::{StorageGateway, UploadError, UploadedFile};

/// Service composing the storage gateway and document repository.
pub struct DocumentService<R, S> {
    repository: Arc<R>,
    storage: Arc<S>,
    document_folder: String,
}

static DOCUMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_document_id() -> DocumentId {
    let id = DOCUMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    DocumentId(format!("doc-{id:06}"))
}

impl<R, S> DocumentService<R, S>
where
    R: DocumentRepository + 'static,
    S: StorageGateway + 'static,
{
    pub fn new(repository: Arc<R>, storage: Arc<S>, document_folder: impl Into<String>) -> Self {
        Self {
            repository,
            storage,
            document_folder: document_folder.into(),
        }
    }

    /// Upload a document: blob first, record second.
    ///
    /// The record is never created when the transfer fails. If the record
    /// insert fails after a successful transfer, the blob is deleted on a
    /// best-effort basis so no orphan is left behind; a failed cleanup is
    /// logged and the insert error is still returned.
    pub fn upload(
        &self,
        ctx: &OrgContext,
        metadata: NewDocument,
        file: UploadedFile,
    ) -> Result<Document, DocumentServiceError> {
        if metadata.name.trim().is_empty() {
            return Err(DocumentValidationError::EmptyName.into());
        }
        if file.file_name.trim().is_empty() {
            return Err(DocumentValidationError::EmptyFileName.into());
        }

        let stored = self.storage.upload(ctx, &self.document_folder, &file)?;

        let now = Utc::now();
        let document = Document {
            id: next_document_id(),
            org_id: ctx.org_id.clone(),
            name: metadata.name,
            category: metadata.category,
            status: DocumentStatus::Draft,
            priority: metadata.priority,
            expiry_date: metadata.expiry_date,
            confidential: metadata.confidential,
            tags: metadata.tags,
            version: metadata.version,
            favorite: false,
            download_count: 0,
            uploaded_by: ctx.user_id.clone(),
            storage_path: stored.storage_path.clone(),
            thumbnail_url: stored.thumbnail_url,
            created_at: now,
            updated_at: now,
        };

        match self.repository.insert(ctx, document) {
            Ok(inserted) => Ok(inserted),
            Err(err) => {
                if let Err(cleanup) = self.storage.delete(&stored.storage_path) {
                    warn!(
                        storage_path = %stored.storage_path,
                        error = %cleanup,
                        "failed to remove uploaded blob after record insert failure"
                    );
                }
                Err(err.into())
            }
        }
    }

    pub fn list(&self, ctx: &OrgContext) -> Result<Vec<Document>, DocumentServiceError> {
        Ok(self.repository.list(ctx)?)
    }

    /// Aggregate stats over the organization's full document set.
    pub fn stats(
        &self,
        ctx: &OrgContext,
        now: chrono::DateTime<Utc>,
    ) -> Result<DocumentStats, DocumentServiceError> {
        let documents = self.repository.list(ctx)?;
        Ok(DocumentStats::collect(&documents, now))
    }

    pub fn set_favorite(
        &self,
        ctx: &OrgContext,
        id: &DocumentId,
        favorite: bool,
    ) -> Result<Document, DocumentServiceError> {
        Ok(self.repository.update(ctx, id, favorite_patch(favorite))?)
    }

    pub fn set_archived(
        &self,
        ctx: &OrgContext,
        id: &DocumentId,
        archived: bool,
    ) -> Result<Document, DocumentServiceError> {
        Ok(self.repository.update(ctx, id, archive_patch(archived))?)
    }

    /// Bump the download counter.
    ///
    /// Downloads are not gated on an approved status; pending documents
    /// still count, matching the dashboard's observed behavior.
    pub fn record_download(
        &self,
        ctx: &OrgContext,
        id: &DocumentId,
    ) -> Result<Document, DocumentServiceError> {
        let document = self
            .repository
            .fetch(ctx, id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(self.repository.update(ctx, id, download_patch(&document))?)
    }

    pub fn delete(&self, ctx: &OrgContext, id: &DocumentId) -> Result<(), DocumentServiceError> {
        Ok(self.repository.delete(ctx, id)?)
    }
}

/// Pre-flight validation failures caught before any backend call.
#[derive(Debug, thiserror::Error)]
pub enum DocumentValidationError {
    #[error("document name must not be empty")]
    EmptyName,
    #[error("file name must not be empty")]
    EmptyFileName,
}

/// Error raised by the document service.
#[derive(Debug, thiserror::Error)]
pub enum DocumentServiceError {
    #[error(transparent)]
    Validation(#[from] DocumentValidationError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
