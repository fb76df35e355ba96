use crate::backend::RepositoryError;
use crate::tenancy::{DocumentId, OrgContext};

use super::domain::{Document, DocumentPatch};

/// Storage abstraction for the document collection.
///
/// Every call is scoped by the caller's organization; implementations must
/// not return or touch rows owned by another tenant. Deletes are hard.
pub trait DocumentRepository: Send + Sync {
    fn list(&self, ctx: &OrgContext) -> Result<Vec<Document>, RepositoryError>;
    fn insert(&self, ctx: &OrgContext, document: Document) -> Result<Document, RepositoryError>;
    fn fetch(&self, ctx: &OrgContext, id: &DocumentId)
        -> Result<Option<Document>, RepositoryError>;
    fn update(
        &self,
        ctx: &OrgContext,
        id: &DocumentId,
        patch: DocumentPatch,
    ) -> Result<Document, RepositoryError>;
    fn delete(&self, ctx: &OrgContext, id: &DocumentId) -> Result<(), RepositoryError>;
}
