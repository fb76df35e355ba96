use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;

use fleet_ops::backend::RepositoryError;
use fleet_ops::tenancy::{DocumentId, NotificationId, OrgContext};
use fleet_ops::workflows::compliance::{
    ComplianceRepository, InspectionRecord, ViolationRecord,
};
use fleet_ops::workflows::documents::{
    Document, DocumentPatch, DocumentRepository, StorageGateway, StoredObject, UploadError,
    UploadedFile,
};
use fleet_ops::workflows::notifications::{
    BulkOutcome, NotificationMessage, NotificationRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryDocumentRepository {
    records: Arc<Mutex<HashMap<DocumentId, Document>>>,
}

impl DocumentRepository for InMemoryDocumentRepository {
    fn list(&self, ctx: &OrgContext) -> Result<Vec<Document>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|document| document.org_id == ctx.org_id)
            .cloned()
            .collect())
    }

    fn insert(&self, _ctx: &OrgContext, document: Document) -> Result<Document, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&document.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(document.id.clone(), document.clone());
        Ok(document)
    }

    fn fetch(
        &self,
        ctx: &OrgContext,
        id: &DocumentId,
    ) -> Result<Option<Document>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .get(id)
            .filter(|document| document.org_id == ctx.org_id)
            .cloned())
    }

    fn update(
        &self,
        ctx: &OrgContext,
        id: &DocumentId,
        patch: DocumentPatch,
    ) -> Result<Document, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let document = guard
            .get_mut(id)
            .filter(|document| document.org_id == ctx.org_id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(status) = patch.status {
            document.status = status;
        }
        if let Some(favorite) = patch.favorite {
            document.favorite = favorite;
        }
        if let Some(download_count) = patch.download_count {
            document.download_count = download_count;
        }
        document.updated_at = Utc::now();

        Ok(document.clone())
    }

    fn delete(&self, ctx: &OrgContext, id: &DocumentId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.get(id) {
            Some(document) if document.org_id == ctx.org_id => {
                guard.remove(id);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound),
        }
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryComplianceRepository {
    inspections: Arc<Mutex<Vec<InspectionRecord>>>,
    violations: Arc<Mutex<Vec<ViolationRecord>>>,
}

impl InMemoryComplianceRepository {
    pub(crate) fn inspections(&self) -> Vec<InspectionRecord> {
        self.inspections.lock().expect("mutex poisoned").clone()
    }

    pub(crate) fn violations(&self) -> Vec<ViolationRecord> {
        self.violations.lock().expect("mutex poisoned").clone()
    }
}

impl ComplianceRepository for InMemoryComplianceRepository {
    fn insert_inspection(
        &self,
        _ctx: &OrgContext,
        record: InspectionRecord,
    ) -> Result<InspectionRecord, RepositoryError> {
        self.inspections
            .lock()
            .expect("mutex poisoned")
            .push(record.clone());
        Ok(record)
    }

    fn insert_violation(
        &self,
        _ctx: &OrgContext,
        record: ViolationRecord,
    ) -> Result<ViolationRecord, RepositoryError> {
        self.violations
            .lock()
            .expect("mutex poisoned")
            .push(record.clone());
        Ok(record)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryNotificationRepository {
    messages: Arc<Mutex<HashMap<NotificationId, NotificationMessage>>>,
}

impl NotificationRepository for InMemoryNotificationRepository {
    fn insert(
        &self,
        _ctx: &OrgContext,
        message: NotificationMessage,
    ) -> Result<NotificationMessage, RepositoryError> {
        let mut guard = self.messages.lock().expect("mutex poisoned");
        if guard.contains_key(&message.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(message.id.clone(), message.clone());
        Ok(message)
    }

    fn inbox(&self, ctx: &OrgContext) -> Result<Vec<NotificationMessage>, RepositoryError> {
        let guard = self.messages.lock().expect("mutex poisoned");
        let mut messages: Vec<NotificationMessage> = guard
            .values()
            .filter(|message| message.org_id == ctx.org_id)
            .filter(|message| message.addressed_to(&ctx.user_id, &ctx.role))
            .cloned()
            .collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    fn mark_read(
        &self,
        ctx: &OrgContext,
        id: &NotificationId,
        read_at: DateTime<Utc>,
    ) -> Result<NotificationMessage, RepositoryError> {
        let mut guard = self.messages.lock().expect("mutex poisoned");
        let message = guard
            .get_mut(id)
            .filter(|message| message.org_id == ctx.org_id)
            .ok_or(RepositoryError::NotFound)?;

        if message.read_at.is_none() {
            message.read_at = Some(read_at);
        }

        Ok(message.clone())
    }

    fn mark_read_bulk(
        &self,
        ctx: &OrgContext,
        ids: &[NotificationId],
        read_at: DateTime<Utc>,
    ) -> Result<BulkOutcome, RepositoryError> {
        let mut guard = self.messages.lock().expect("mutex poisoned");
        let mut outcome = BulkOutcome::default();

        for id in ids {
            match guard
                .get_mut(id)
                .filter(|message| message.org_id == ctx.org_id)
            {
                Some(message) => {
                    if message.read_at.is_none() {
                        message.read_at = Some(read_at);
                    }
                    outcome.applied.push(id.clone());
                }
                None => outcome.missing.push(id.clone()),
            }
        }

        Ok(outcome)
    }

    fn delete(&self, ctx: &OrgContext, id: &NotificationId) -> Result<(), RepositoryError> {
        let mut guard = self.messages.lock().expect("mutex poisoned");
        match guard.get(id) {
            Some(message) if message.org_id == ctx.org_id => {
                guard.remove(id);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound),
        }
    }

    fn delete_bulk(
        &self,
        ctx: &OrgContext,
        ids: &[NotificationId],
    ) -> Result<BulkOutcome, RepositoryError> {
        let mut guard = self.messages.lock().expect("mutex poisoned");
        let mut outcome = BulkOutcome::default();

        for id in ids {
            let owned = guard
                .get(id)
                .map(|message| message.org_id == ctx.org_id)
                .unwrap_or(false);
            if owned {
                guard.remove(id);
                outcome.applied.push(id.clone());
            } else {
                outcome.missing.push(id.clone());
            }
        }

        Ok(outcome)
    }
}

/// Blob store stand-in holding uploads in memory.
#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryStorage {
    blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryStorage {
    pub(crate) fn blob_count(&self) -> usize {
        self.blobs.lock().expect("mutex poisoned").len()
    }
}

impl StorageGateway for InMemoryStorage {
    fn upload(
        &self,
        ctx: &OrgContext,
        folder: &str,
        file: &UploadedFile,
    ) -> Result<StoredObject, UploadError> {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let storage_path = format!("mem://{folder}/{}/{sequence}-{}", ctx.org_id.0, file.file_name);
        self.blobs
            .lock()
            .expect("mutex poisoned")
            .insert(storage_path.clone(), file.bytes.clone());

        Ok(StoredObject {
            storage_path,
            thumbnail_url: None,
        })
    }

    fn delete(&self, storage_path: &str) -> Result<(), UploadError> {
        self.blobs
            .lock()
            .expect("mutex poisoned")
            .remove(storage_path);
        Ok(())
    }
}
