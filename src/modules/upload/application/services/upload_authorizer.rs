use async_trait::async_trait;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use std::future::Future;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::upload::application::{
    domain::{
        entities::{GrantPermissions, GrantWindow, StorageKey, UploadGrant, UploadRequest},
        policies::upload_policy::{self, UploadPolicyConfig},
    },
    ports::{
        incoming::use_cases::{AuthorizationError, AuthorizeUploadUseCase},
        outgoing::{ObjectStorage, ObjectStorageError},
    },
};

/// Timing of issued grants and the bound on each storage call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrantSettings {
    pub ttl: Duration,
    pub clock_skew: Duration,
    pub storage_timeout: std::time::Duration,
}

impl GrantSettings {
    pub const MAX_TTL_SECS: i64 = 7 * 24 * 60 * 60;
    pub const MAX_CLOCK_SKEW_SECS: i64 = 60 * 60;

    /// `None` when either bound falls outside the representable date range.
    pub fn window_at(&self, issued_at: DateTime<Utc>) -> Option<GrantWindow> {
        Some(GrantWindow {
            starts_at: issued_at.checked_sub_signed(self.clock_skew)?,
            expires_at: issued_at.checked_add_signed(self.ttl)?,
        })
    }
}

impl Default for GrantSettings {
    fn default() -> Self {
        Self {
            ttl: Duration::minutes(10),
            clock_skew: Duration::minutes(1),
            storage_timeout: std::time::Duration::from_secs(10),
        }
    }
}

pub struct UploadAuthorizer<S>
where
    S: ObjectStorage,
{
    storage: S,
    policy: Arc<UploadPolicyConfig>,
    settings: GrantSettings,
}

impl<S> UploadAuthorizer<S>
where
    S: ObjectStorage,
{
    pub fn new(storage: S, policy: Arc<UploadPolicyConfig>, settings: GrantSettings) -> Self {
        Self {
            storage,
            policy,
            settings,
        }
    }

    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, AuthorizationError>
    where
        F: Future<Output = Result<T, ObjectStorageError>>,
    {
        match tokio::time::timeout(self.settings.storage_timeout, call).await {
            Ok(result) => result.map_err(|e| map_storage_error(operation, e)),
            Err(_) => {
                warn!(
                    operation,
                    timeout_ms = self.settings.storage_timeout.as_millis() as u64,
                    "Object storage call timed out"
                );
                Err(AuthorizationError::StorageUnavailable)
            }
        }
    }
}

fn map_storage_error(operation: &'static str, err: ObjectStorageError) -> AuthorizationError {
    match err {
        ObjectStorageError::SigningUnsupported | ObjectStorageError::AccessDenied => {
            error!(operation, error = %err, "Object storage rejected upload credentials");
            AuthorizationError::CredentialGenerationUnsupported
        }
        ObjectStorageError::Unavailable(detail) => {
            warn!(operation, detail = %detail, "Object storage unavailable");
            AuthorizationError::StorageUnavailable
        }
    }
}

#[async_trait]
impl<S> AuthorizeUploadUseCase for UploadAuthorizer<S>
where
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self, request: UploadRequest) -> Result<UploadGrant, AuthorizationError> {
        // 1) Policy. Local and deterministic, nothing external touched on failure.
        upload_policy::validate(&self.policy, &request)?;

        // 2) Misconfiguration is reported before any network call.
        if !self.storage.can_sign() {
            error!("Object storage has no signing key; upload grants cannot be issued");
            return Err(AuthorizationError::CredentialGenerationUnsupported);
        }

        // Whole seconds, so expires_at - issued_at is exactly the TTL once
        // rendered at storage (second) precision.
        let issued_at = Utc::now().trunc_subsecs(0);
        let storage_key = StorageKey::generate(issued_at, request.file_name());
        let container = self.policy.container_name();

        let Some(window) = self.settings.window_at(issued_at) else {
            error!(
                ttl_secs = self.settings.ttl.num_seconds(),
                clock_skew_secs = self.settings.clock_skew.num_seconds(),
                "Grant window out of range; check grant settings"
            );
            return Err(AuthorizationError::CredentialGenerationUnsupported);
        };

        // 3) Container
        self.bounded("ensure_container", self.storage.ensure_container(container))
            .await?;

        // 4) Grant

        let write_url = self
            .bounded(
                "sign_write_url",
                self.storage.sign_write_url(
                    container,
                    &storage_key,
                    GrantPermissions::create_write(),
                    window,
                    request.content_type(),
                ),
            )
            .await?;

        info!(
            storage_key = %storage_key,
            content_type = request.content_type(),
            expires_at = %window.expires_at,
            "Issued upload grant"
        );

        Ok(UploadGrant {
            storage_key,
            write_url,
            issued_at,
            expires_at: window.expires_at,
        })
    }
}
