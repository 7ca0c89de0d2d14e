use base64::Engine;
use std::fmt;
use url::Url;

/// Well-known Azurite development account.
const DEV_ACCOUNT_NAME: &str = "devstoreaccount1";
const DEV_ACCOUNT_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";
const DEV_BLOB_ENDPOINT: &str = "http://127.0.0.1:10000/devstoreaccount1";

const DEFAULT_ENDPOINT_SUFFIX: &str = "core.windows.net";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StorageAccountError {
    #[error("Connection string is missing '{0}'")]
    MissingField(&'static str),

    #[error("Malformed connection string segment: {0}")]
    MalformedSegment(String),

    #[error("Account key is not valid base64")]
    InvalidAccountKey,

    #[error("Invalid blob endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Azure storage account as far as the blob adapter needs it.
///
/// `key` is the decoded shared key. Without it the account can still be
/// addressed but nothing can be signed.
#[derive(Clone)]
pub struct StorageAccount {
    name: String,
    key: Option<Vec<u8>>,
    blob_endpoint: Url,
}

impl fmt::Debug for StorageAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageAccount")
            .field("name", &self.name)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("blob_endpoint", &self.blob_endpoint.as_str())
            .finish()
    }
}

impl StorageAccount {
    /// Parses `Key=Value;Key=Value` connection strings as issued by the
    /// Azure portal, plus `UseDevelopmentStorage=true` for Azurite.
    pub fn from_connection_string(raw: &str) -> Result<Self, StorageAccountError> {
        let mut protocol = None;
        let mut account_name = None;
        let mut account_key = None;
        let mut blob_endpoint = None;
        let mut endpoint_suffix = None;
        let mut development = false;

        for segment in raw.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            // Account keys end in '=', so only the first one separates.
            let (name, value) = segment
                .split_once('=')
                .ok_or_else(|| StorageAccountError::MalformedSegment(segment.to_string()))?;
            let value = value.trim();

            match name.trim().to_ascii_lowercase().as_str() {
                "defaultendpointsprotocol" => protocol = Some(value.to_ascii_lowercase()),
                "accountname" => account_name = Some(value.to_string()),
                "accountkey" => account_key = Some(value.to_string()),
                "blobendpoint" => blob_endpoint = Some(value.to_string()),
                "endpointsuffix" => endpoint_suffix = Some(value.to_string()),
                "usedevelopmentstorage" => development = value.eq_ignore_ascii_case("true"),
                _ => {}
            }
        }

        if development {
            return Self::build(
                DEV_ACCOUNT_NAME.to_string(),
                Some(DEV_ACCOUNT_KEY),
                blob_endpoint.as_deref().unwrap_or(DEV_BLOB_ENDPOINT),
            );
        }

        let name = account_name.ok_or(StorageAccountError::MissingField("AccountName"))?;
        let endpoint = match blob_endpoint {
            Some(endpoint) => endpoint,
            None => format!(
                "{}://{}.blob.{}",
                protocol.as_deref().unwrap_or("https"),
                name,
                endpoint_suffix.as_deref().unwrap_or(DEFAULT_ENDPOINT_SUFFIX)
            ),
        };

        Self::build(name, account_key.as_deref(), &endpoint)
    }

    /// Account addressed by name only: URLs can be built, nothing can be signed.
    pub fn without_key(name: &str) -> Result<Self, StorageAccountError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StorageAccountError::MissingField("AccountName"));
        }
        let endpoint = format!("https://{}.blob.{}", name, DEFAULT_ENDPOINT_SUFFIX);
        Self::build(name.to_string(), None, &endpoint)
    }

    fn build(
        name: String,
        key: Option<&str>,
        endpoint: &str,
    ) -> Result<Self, StorageAccountError> {
        let key = key
            .filter(|k| !k.is_empty())
            .map(|k| {
                base64::engine::general_purpose::STANDARD
                    .decode(k)
                    .map_err(|_| StorageAccountError::InvalidAccountKey)
            })
            .transpose()?;

        let blob_endpoint = Url::parse(endpoint)
            .map_err(|e| StorageAccountError::InvalidEndpoint(e.to_string()))?;
        let scheme_ok = matches!(blob_endpoint.scheme(), "http" | "https");
        if !scheme_ok || blob_endpoint.host_str().is_none() || blob_endpoint.cannot_be_a_base() {
            return Err(StorageAccountError::InvalidEndpoint(endpoint.to_string()));
        }

        Ok(Self {
            name,
            key,
            blob_endpoint,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> Option<&[u8]> {
        self.key.as_deref()
    }

    pub fn blob_endpoint(&self) -> &Url {
        &self.blob_endpoint
    }

    pub fn is_https(&self) -> bool {
        self.blob_endpoint.scheme() == "https"
    }
}
