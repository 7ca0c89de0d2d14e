use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use url::Url;

use super::connection_string::StorageAccount;
use super::shared_key::{self, BlobSas, SERVICE_VERSION};
use crate::upload::application::domain::entities::{GrantPermissions, GrantWindow, StorageKey};
use crate::upload::application::ports::outgoing::{ObjectStorage, ObjectStorageError};

fn map_container_status(status: u16) -> Result<(), ObjectStorageError> {
    match status {
        // 409: ContainerAlreadyExists
        201 | 409 => Ok(()),
        401 | 403 => Err(ObjectStorageError::AccessDenied),
        other => Err(ObjectStorageError::Unavailable(format!(
            "create container returned HTTP {other}"
        ))),
    }
}

/// Internal seam so the adapter can be tested without a live storage account.
#[async_trait]
trait BlobHttpClient: Send + Sync {
    /// Sends the create-container request and returns the HTTP status.
    async fn put_container(
        &self,
        url: &Url,
        x_ms_date: &str,
        authorization: &str,
    ) -> Result<u16, String>;
}

#[cfg(test)]
struct ArcBlobHttpClient(Arc<dyn BlobHttpClient>);

#[cfg(test)]
#[async_trait]
impl BlobHttpClient for ArcBlobHttpClient {
    async fn put_container(
        &self,
        url: &Url,
        x_ms_date: &str,
        authorization: &str,
    ) -> Result<u16, String> {
        self.0.put_container(url, x_ms_date, authorization).await
    }
}

/// Production adapter: implements the ObjectStorage port on Azure Blob Storage.
#[derive(Clone)]
pub struct AzureBlobStorage {
    account: StorageAccount,
    client: Arc<OnceCell<Box<dyn BlobHttpClient>>>,
    request_timeout: Duration,
}

impl AzureBlobStorage {
    /// Synchronous constructor - HTTP client is initialized lazily on first use.
    pub fn new(account: StorageAccount, request_timeout: Duration) -> Self {
        Self {
            account,
            client: Arc::new(OnceCell::new()),
            request_timeout,
        }
    }

    async fn get_client(&self) -> Result<&dyn BlobHttpClient, String> {
        let timeout = self.request_timeout;
        self.client
            .get_or_try_init(|| async move {
                let real_client = ReqwestBlobClient::new(timeout).map_err(|e| e.to_string())?;
                Ok::<_, String>(Box::new(real_client) as Box<dyn BlobHttpClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    /// Test-friendly constructor with pre-initialized client.
    #[cfg(test)]
    fn with_client(account: StorageAccount, client: Arc<dyn BlobHttpClient>) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcBlobHttpClient(client)) as Box<dyn BlobHttpClient>);

        Self {
            account,
            client: Arc::new(once),
            request_timeout: Duration::from_secs(10),
        }
    }

    fn container_url(&self, container: &str) -> Url {
        let mut url = self.account.blob_endpoint().clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(container);
        }
        url
    }

    fn blob_url(&self, container: &str, key: &StorageKey) -> Url {
        let mut url = self.container_url(container);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.extend(key.as_str().split('/'));
        }
        url
    }
}

#[async_trait]
impl ObjectStorage for AzureBlobStorage {
    fn can_sign(&self) -> bool {
        self.account.key().is_some()
    }

    async fn ensure_container(&self, container: &str) -> Result<(), ObjectStorageError> {
        let key = self
            .account
            .key()
            .ok_or(ObjectStorageError::SigningUnsupported)?;

        let mut url = self.container_url(container);
        let date = shared_key::x_ms_date(Utc::now());
        let to_sign =
            shared_key::create_container_string_to_sign(self.account.name(), url.path(), &date);
        let authorization = shared_key::shared_key_authorization(self.account.name(), key, &to_sign);
        url.query_pairs_mut().append_pair("restype", "container");

        let client = self.get_client().await.map_err(|e| {
            tracing::error!("Failed to build blob HTTP client: {}", e);
            ObjectStorageError::Unavailable(e)
        })?;

        let status = client
            .put_container(&url, &date, &authorization)
            .await
            .map_err(ObjectStorageError::Unavailable)?;

        tracing::debug!(container, status, "Ensured blob container");
        map_container_status(status)
    }

    async fn sign_write_url(
        &self,
        container: &str,
        key: &StorageKey,
        permissions: GrantPermissions,
        window: GrantWindow,
        content_type: &str,
    ) -> Result<String, ObjectStorageError> {
        let account_key = self
            .account
            .key()
            .ok_or(ObjectStorageError::SigningUnsupported)?;

        let sas = BlobSas {
            account: self.account.name(),
            container,
            blob: key.as_str(),
            permissions: shared_key::permission_letters(permissions),
            start: shared_key::sas_time(window.starts_at),
            expiry: shared_key::sas_time(window.expires_at),
            protocol: self.account.is_https().then_some("https"),
            content_type,
        };

        let mut url = self.blob_url(container, key);
        url.query_pairs_mut()
            .extend_pairs(sas.query_pairs(account_key));

        Ok(url.into())
    }
}

// ============================================================================
// Real HTTP client (reqwest)
// ============================================================================

struct ReqwestBlobClient {
    http: reqwest::Client,
}

impl ReqwestBlobClient {
    fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        tracing::info!("Initializing blob HTTP client...");
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl BlobHttpClient for ReqwestBlobClient {
    async fn put_container(
        &self,
        url: &Url,
        x_ms_date: &str,
        authorization: &str,
    ) -> Result<u16, String> {
        let response = self
            .http
            .put(url.clone())
            .header("x-ms-date", x_ms_date)
            .header("x-ms-version", SERVICE_VERSION)
            .header("Authorization", authorization)
            .header("Content-Length", "0")
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Ok(response.status().as_u16())
    }
}

// ============================================================================
// Tests
// ============================================================================
