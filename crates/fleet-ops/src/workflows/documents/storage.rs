use std::fmt::Debug;
use std::io::Cursor;

use google_drive3::{api::File, api::Scope, DriveHub};
use tokio::runtime::Runtime;

use crate::tenancy::OrgContext;

/// File bytes and transfer metadata handed to the storage gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Location of a successfully stored blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub storage_path: String,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("file transfer failed: {0}")]
    Transfer(String),
    #[error("storage runtime unavailable: {0}")]
    Runtime(String),
}

/// Blob store boundary for document uploads.
///
/// `upload` must complete before any document record is created; `delete`
/// is the compensation hook used when the record insert fails afterwards.
pub trait StorageGateway: Debug + Send + Sync {
    fn upload(
        &self,
        ctx: &OrgContext,
        folder: &str,
        file: &UploadedFile,
    ) -> Result<StoredObject, UploadError>;
    fn delete(&self, storage_path: &str) -> Result<(), UploadError>;
}

/// Thin wrapper around the generated google-drive3 client allowing synchronous
/// workflows to move document blobs without exposing async details.
pub struct GoogleDriveStorage<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    hub: DriveHub<C>,
    runtime: Runtime,
}

impl<C> GoogleDriveStorage<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    pub fn new(hub: DriveHub<C>, runtime: Runtime) -> Self {
        Self { hub, runtime }
    }

    pub fn with_runtime(hub: DriveHub<C>) -> Result<Self, UploadError> {
        let runtime = Runtime::new().map_err(|err| UploadError::Runtime(err.to_string()))?;
        Ok(Self::new(hub, runtime))
    }

    fn map_error<E: std::fmt::Display>(err: E) -> UploadError {
        UploadError::Transfer(err.to_string())
    }
}

impl<C> Debug for GoogleDriveStorage<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleDriveStorage").finish_non_exhaustive()
    }
}

impl<C> StorageGateway for GoogleDriveStorage<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    fn upload(
        &self,
        ctx: &OrgContext,
        folder: &str,
        file: &UploadedFile,
    ) -> Result<StoredObject, UploadError> {
        let metadata = File {
            name: Some(format!("{}-{}", ctx.org_id.0, file.file_name)),
            parents: Some(vec![folder.to_string()]),
            ..File::default()
        };

        let content_type: mime::Mime = file
            .content_type
            .parse()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);
        let cursor = Cursor::new(file.bytes.clone());

        let result = self.runtime.block_on(async {
            self.hub
                .files()
                .create(metadata)
                .param("fields", "id,thumbnailLink")
                .supports_all_drives(true)
                .add_scope(Scope::File)
                .upload(cursor, content_type)
                .await
        });

        let (_, created) = result.map_err(GoogleDriveStorage::<C>::map_error)?;
        Ok(StoredObject {
            storage_path: created.id.unwrap_or_default(),
            thumbnail_url: created.thumbnail_link,
        })
    }

    fn delete(&self, storage_path: &str) -> Result<(), UploadError> {
        let result = self.runtime.block_on(async {
            self.hub
                .files()
                .delete(storage_path)
                .supports_all_drives(true)
                .add_scope(Scope::File)
                .doit()
                .await
        });

        result
            .map(|_| ())
            .map_err(GoogleDriveStorage::<C>::map_error)
    }
}
