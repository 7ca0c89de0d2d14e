use async_trait::async_trait;

use crate::upload::application::domain::{
    entities::{UploadGrant, UploadRequest},
    policies::upload_policy::PolicyViolation,
};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthorizationError {
    /// Client error. Never retryable without changing the request.
    #[error(transparent)]
    Rejected(#[from] PolicyViolation),

    /// Transient storage failure. Safe to retry.
    #[error("Object storage is unavailable")]
    StorageUnavailable,

    /// The backend cannot mint scoped credentials. Deployment problem.
    #[error("Storage backend cannot generate upload credentials")]
    CredentialGenerationUnsupported,
}

#[async_trait]
pub trait AuthorizeUploadUseCase: Send + Sync {
    async fn execute(&self, request: UploadRequest) -> Result<UploadGrant, AuthorizationError>;
}
