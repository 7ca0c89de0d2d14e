use std::collections::BTreeSet;

use crate::upload::application::domain::entities::UploadRequest;

/// Limits every upload grant is checked against.
///
/// Built once at startup and shared read-only (`Arc`) by every caller.
/// Content types are stored trimmed and lowercased so lookups are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicyConfig {
    container_name: String,
    max_bytes: u64,
    allowed_content_types: BTreeSet<String>,
}

impl UploadPolicyConfig {
    pub const DEFAULT_CONTAINER_NAME: &'static str = "contest-photos";
    pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_ALLOWED_CONTENT_TYPES: &'static [&'static str] =
        &["image/webp", "image/jpeg", "image/png"];

    pub fn new<I, S>(container_name: impl Into<String>, max_bytes: u64, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed_content_types = allowed
            .into_iter()
            .map(|s| s.as_ref().trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            container_name: container_name.into(),
            max_bytes,
            allowed_content_types,
        }
    }

    pub fn container_name(&self) -> &str {
        &self.container_name
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    pub fn allows_content_type(&self, content_type: &str) -> bool {
        self.allowed_content_types
            .contains(&content_type.trim().to_ascii_lowercase())
    }

    pub fn allowed_content_types(&self) -> impl Iterator<Item = &str> {
        self.allowed_content_types.iter().map(String::as_str)
    }
}

impl Default for UploadPolicyConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_CONTAINER_NAME,
            Self::DEFAULT_MAX_BYTES,
            Self::DEFAULT_ALLOWED_CONTENT_TYPES,
        )
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("Content type '{0}' is not allowed")]
    UnsupportedContentType(String),

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge { max_bytes: u64, actual_bytes: u64 },
}

/// Checks a proposed upload against the policy. Pure: no I/O, no clock.
pub fn validate(config: &UploadPolicyConfig, request: &UploadRequest) -> Result<(), PolicyViolation> {
    validate_metadata(config, request.content_type(), request.byte_size())
}

/// Same checks as [`validate`] for callers that only hold file metadata
/// (e.g. a submission referencing an already uploaded blob).
pub fn validate_metadata(
    config: &UploadPolicyConfig,
    content_type: &str,
    byte_size: u64,
) -> Result<(), PolicyViolation> {
    // Content type first: a disallowed type is rejected whatever its size.
    if !config.allows_content_type(content_type) {
        return Err(PolicyViolation::UnsupportedContentType(
            content_type.to_string(),
        ));
    }

    if byte_size > config.max_bytes {
        return Err(PolicyViolation::FileTooLarge {
            max_bytes: config.max_bytes,
            actual_bytes: byte_size,
        });
    }

    Ok(())
}
