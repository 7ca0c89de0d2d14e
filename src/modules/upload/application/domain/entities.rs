use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, RngCore};
use std::fmt;

/// Longest sanitized file name kept in a storage key.
const MAX_SAFE_NAME_LEN: usize = 200;

const FALLBACK_FILE_NAME: &str = "file";

// ============================================================================
// Upload request
// ============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum UploadRequestError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("File size cannot be negative (got {0})")]
    NegativeSize(i64),
}

/// A file the client intends to upload directly to storage. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    file_name: String,
    content_type: String,
    byte_size: u64,
}

impl UploadRequest {
    pub fn try_new(
        file_name: String,
        content_type: String,
        byte_size: i64,
    ) -> Result<Self, UploadRequestError> {
        let file_name = file_name.trim().to_string();
        let content_type = content_type.trim().to_string();

        if file_name.is_empty() {
            return Err(UploadRequestError::MissingField("fileName"));
        }
        if content_type.is_empty() {
            return Err(UploadRequestError::MissingField("contentType"));
        }
        let byte_size =
            u64::try_from(byte_size).map_err(|_| UploadRequestError::NegativeSize(byte_size))?;

        Ok(Self {
            file_name,
            content_type,
            byte_size,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }
}

// ============================================================================
// Storage key
// ============================================================================

/// Unique object name inside the upload container:
/// `{yyyy}/{MM}/{32 hex chars}-{sanitized file name}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// New key with a 128-bit random component drawn from the OS CSPRNG.
    pub fn generate(issued_at: DateTime<Utc>, file_name: &str) -> Self {
        let mut random = [0u8; 16];
        OsRng.fill_bytes(&mut random);
        Self::compose(issued_at, &random, file_name)
    }

    pub fn compose(issued_at: DateTime<Utc>, random: &[u8; 16], file_name: &str) -> Self {
        Self(format!(
            "{}/{}-{}",
            issued_at.format("%Y/%m"),
            hex::encode(random),
            sanitize_file_name(file_name)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Reduces a caller-supplied file name to `[A-Za-z0-9._-]`.
///
/// Runs of unsafe characters (path delimiters, whitespace, control and
/// non-ASCII characters) become a single `_`, leading dots and underscores
/// are dropped so the result can never start a `..` segment, and long names
/// are cut while keeping the extension.
pub fn sanitize_file_name(file_name: &str) -> String {
    let joined = file_name
        .split(|c: char| !is_safe_char(c))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    let trimmed = joined.trim_start_matches(['.', '_']);
    if trimmed.is_empty() {
        return FALLBACK_FILE_NAME.to_string();
    }

    truncate_keeping_extension(trimmed, MAX_SAFE_NAME_LEN)
}

// Input is ASCII only at this point, so byte slicing is char-safe.
fn truncate_keeping_extension(name: &str, max_len: usize) -> String {
    if name.len() <= max_len {
        return name.to_string();
    }

    match name.rfind('.') {
        Some(dot) if name.len() - dot < max_len / 2 => {
            let ext = &name[dot..];
            format!("{}{}", &name[..max_len - ext.len()], ext)
        }
        _ => name[..max_len].to_string(),
    }
}

// ============================================================================
// Grant
// ============================================================================

/// Operations a grant may authorize on its single object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrantPermissions {
    pub read: bool,
    pub create: bool,
    pub write: bool,
    pub delete: bool,
    pub list: bool,
}

impl GrantPermissions {
    /// Create + write. The only set the authorizer ever requests.
    pub const fn create_write() -> Self {
        Self {
            read: false,
            create: true,
            write: true,
            delete: false,
            list: false,
        }
    }

    pub fn allows_read_or_delete(&self) -> bool {
        self.read || self.delete || self.list
    }
}

/// Validity interval of a grant. `starts_at` is backdated by the configured
/// clock skew, `expires_at` is issuance time plus the grant TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrantWindow {
    pub starts_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadGrant {
    pub storage_key: StorageKey,
    pub write_url: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
