use async_trait::async_trait;

use crate::upload::application::domain::entities::{GrantPermissions, GrantWindow, StorageKey};

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised by an object storage backend.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ObjectStorageError {
    #[error("Backend is not configured to sign credentials")]
    SigningUnsupported,

    #[error("Access denied")]
    AccessDenied,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

// ============================================================================
// Port Interface
// ============================================================================

/// Port for the storage service clients upload to directly.
///
/// The service never sees file bytes. It only makes sure the container
/// exists and asks the backend for a scoped, time-boxed write credential.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Whether this backend holds the secret needed to sign grants.
    fn can_sign(&self) -> bool;

    /// Idempotent create-if-absent.
    async fn ensure_container(&self, container: &str) -> Result<(), ObjectStorageError>;

    /// Returns a URL that authorizes `permissions` on exactly `key` during
    /// `window`, bound to `content_type`.
    async fn sign_write_url(
        &self,
        container: &str,
        key: &StorageKey,
        permissions: GrantPermissions,
        window: GrantWindow,
        content_type: &str,
    ) -> Result<String, ObjectStorageError>;
}
