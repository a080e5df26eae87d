use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, warn};

use crate::media::application::domain::{stored_file_name, UploadKind, UploadPolicy};
use crate::media::application::ports::incoming::use_cases::{
    UploadFileCommand, UploadFileError, UploadFileUseCase, UploadedFile,
};
use crate::media::application::ports::outgoing::{FileStorage, StoredObject};

pub struct UploadFileService {
    storage: Arc<dyn FileStorage + Send + Sync>,
    policy: UploadPolicy,
}

impl UploadFileService {
    pub fn new(storage: Arc<dyn FileStorage + Send + Sync>, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }
}

#[async_trait]
impl UploadFileUseCase for UploadFileService {
    async fn execute(&self, command: UploadFileCommand) -> Result<UploadedFile, UploadFileError> {
        let bytes = command.bytes.ok_or(UploadFileError::MissingFile)?;

        let raw_kind = command.kind.unwrap_or_default();
        let kind: UploadKind = raw_kind.parse().map_err(UploadFileError::UnknownKind)?;

        let content_type = command.content_type.unwrap_or_default();
        if !kind.accepts(&content_type) {
            warn!(kind = %kind, content_type = %content_type, "Rejected upload MIME type");
            return Err(UploadFileError::InvalidFileType {
                content_type,
                allowed: kind.allowed_mime_types().join(", "),
            });
        }

        let size = bytes.len() as u64;
        if !self.policy.allows_size(size) {
            return Err(UploadFileError::TooLarge {
                size,
                max: self.policy.max_file_size_bytes,
            });
        }

        let original = command.file_name.unwrap_or_else(|| "upload".to_string());
        let object_name = stored_file_name(&original, Utc::now().timestamp_millis());
        let bucket = kind.bucket().to_string();

        self.storage
            .put(StoredObject {
                bucket: bucket.clone(),
                name: object_name.clone(),
                content_type,
                cache_control_secs: self.policy.cache_control_secs,
                bytes,
            })
            .await
            .map_err(|e| {
                error!(bucket = %bucket, object = %object_name, error = %e, "Upload to storage failed");
                UploadFileError::StorageFailed(e.to_string())
            })?;

        info!(bucket = %bucket, object = %object_name, size, "File uploaded");

        Ok(UploadedFile {
            public_url: self.storage.public_url(&bucket, &object_name),
            bucket,
            object_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::application::ports::outgoing::FileStorageError;
    use crate::tests::support::in_memory::InMemoryFileStorage;
    use regex::Regex;

    fn command(kind: &str, content_type: &str, size: usize) -> UploadFileCommand {
        UploadFileCommand {
            kind: Some(kind.to_string()),
            file_name: Some("Team Photo.PNG".to_string()),
            content_type: Some(content_type.to_string()),
            bytes: Some(vec![0u8; size]),
        }
    }

    #[tokio::test]
    async fn test_image_goes_to_images_bucket() {
        let storage = Arc::new(InMemoryFileStorage::default());
        let service = UploadFileService::new(storage.clone(), UploadPolicy::default());

        let uploaded = service.execute(command("image", "image/png", 16)).await.unwrap();

        assert_eq!(uploaded.bucket, "images");
        assert!(Regex::new(r"^\d+-team-photo\.png$")
            .unwrap()
            .is_match(&uploaded.object_name));
        assert_eq!(
            uploaded.public_url,
            format!("memory://images/{}", uploaded.object_name)
        );

        let stored = storage.objects();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].cache_control_secs, 3600);
        assert_eq!(stored[0].content_type, "image/png");
    }

    #[tokio::test]
    async fn test_document_with_png_is_invalid_type() {
        let storage = Arc::new(InMemoryFileStorage::default());
        let service = UploadFileService::new(storage.clone(), UploadPolicy::default());

        let err = service
            .execute(command("document", "image/png", 16))
            .await
            .unwrap_err();

        assert!(matches!(err, UploadFileError::InvalidFileType { .. }));
        assert!(storage.objects().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_and_unknown_kind() {
        let service = UploadFileService::new(
            Arc::new(InMemoryFileStorage::default()),
            UploadPolicy::default(),
        );

        let err = service
            .execute(UploadFileCommand {
                kind: Some("image".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err, UploadFileError::MissingFile);

        let err = service
            .execute(command("video", "video/mp4", 1))
            .await
            .unwrap_err();
        assert_eq!(err, UploadFileError::UnknownKind("video".into()));
    }

    #[tokio::test]
    async fn test_oversized_file_rejected() {
        let policy = UploadPolicy {
            max_file_size_bytes: 8,
            ..Default::default()
        };
        let service = UploadFileService::new(Arc::new(InMemoryFileStorage::default()), policy);

        let err = service
            .execute(command("profile", "image/jpeg", 9))
            .await
            .unwrap_err();

        assert_eq!(err, UploadFileError::TooLarge { size: 9, max: 8 });
    }

    #[tokio::test]
    async fn test_storage_error_passes_message_through() {
        let storage = Arc::new(InMemoryFileStorage::failing(FileStorageError::Rejected(
            "Bucket not found".into(),
        )));
        let service = UploadFileService::new(storage, UploadPolicy::default());

        let err = service
            .execute(command("document", "application/pdf", 4))
            .await
            .unwrap_err();

        assert_eq!(err, UploadFileError::StorageFailed("Bucket not found".into()));
    }
}
