use async_trait::async_trait;
use email_address::EmailAddress;

use crate::submission::application::domain::entities::{
    PhotoAttachment, Submission, DEFAULT_CONSENT_VERSION,
};
use crate::upload::application::domain::policies::upload_policy::PolicyViolation;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 255;
pub const MAX_PHONE_LEN: usize = 40;
pub const MAX_CONSENT_VERSION_LEN: usize = 20;
pub const MAX_BLOB_NAME_LEN: usize = 1024;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Raw photo fields as supplied by the client; either all or none must be present.
#[derive(Debug, Clone, Default)]
pub struct PhotoInput {
    pub blob_name: Option<String>,
    pub content_type: Option<String>,
    pub size_bytes: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct CreateSubmissionCommand {
    contest_slug: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    consent_given: bool,
    consent_version: String,
    photo: Option<PhotoAttachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateSubmissionCommandError {
    #[error("Contest slug cannot be empty")]
    EmptyContestSlug,

    #[error("First name cannot be empty")]
    EmptyFirstName,

    #[error("First name must not exceed 100 characters")]
    FirstNameTooLong,

    #[error("Last name cannot be empty")]
    EmptyLastName,

    #[error("Last name must not exceed 100 characters")]
    LastNameTooLong,

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Email must not exceed 255 characters")]
    EmailTooLong,

    #[error("Phone must not exceed 40 characters")]
    PhoneTooLong,

    #[error("Consent version must not exceed 20 characters")]
    ConsentVersionTooLong,

    #[error("Photo requires blobName, contentType and sizeBytes together")]
    IncompletePhoto,

    #[error("Photo blob name is not valid")]
    InvalidBlobName,

    #[error("Photo size cannot be negative")]
    NegativePhotoSize,
}

fn required(
    value: String,
    empty: CreateSubmissionCommandError,
    max: usize,
    too_long: CreateSubmissionCommandError,
) -> Result<String, CreateSubmissionCommandError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(empty);
    }
    if value.chars().count() > max {
        return Err(too_long);
    }
    Ok(value.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn photo_from_input(
    input: PhotoInput,
) -> Result<Option<PhotoAttachment>, CreateSubmissionCommandError> {
    let blob_name = non_blank(input.blob_name);
    let content_type = non_blank(input.content_type);

    match (blob_name, content_type, input.size_bytes) {
        (None, None, None) => Ok(None),
        (Some(blob_name), Some(content_type), Some(size_bytes)) => {
            if blob_name.len() > MAX_BLOB_NAME_LEN
                || blob_name.starts_with('/')
                || blob_name.split('/').any(|segment| segment.is_empty() || segment == "..")
                || blob_name.chars().any(|c| c.is_control() || c == '\\')
            {
                return Err(CreateSubmissionCommandError::InvalidBlobName);
            }
            if size_bytes < 0 {
                return Err(CreateSubmissionCommandError::NegativePhotoSize);
            }
            Ok(Some(PhotoAttachment {
                blob_name,
                content_type,
                size_bytes: size_bytes as u64,
            }))
        }
        _ => Err(CreateSubmissionCommandError::IncompletePhoto),
    }
}

impl CreateSubmissionCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        contest_slug: String,
        first_name: String,
        last_name: String,
        email: String,
        phone: Option<String>,
        consent_given: bool,
        consent_version: Option<String>,
        photo: PhotoInput,
    ) -> Result<Self, CreateSubmissionCommandError> {
        use CreateSubmissionCommandError as E;

        let contest_slug = contest_slug.trim().to_string();
        if contest_slug.is_empty() {
            return Err(E::EmptyContestSlug);
        }

        let first_name =
            required(first_name, E::EmptyFirstName, MAX_NAME_LEN, E::FirstNameTooLong)?;
        let last_name = required(last_name, E::EmptyLastName, MAX_NAME_LEN, E::LastNameTooLong)?;

        let email = email.trim().to_string();
        if email.len() > MAX_EMAIL_LEN {
            return Err(E::EmailTooLong);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(E::InvalidEmail);
        }

        let phone = phone.map(|p| p.trim().to_string()).unwrap_or_default();
        if phone.chars().count() > MAX_PHONE_LEN {
            return Err(E::PhoneTooLong);
        }

        let consent_version = non_blank(consent_version)
            .unwrap_or_else(|| DEFAULT_CONSENT_VERSION.to_string());
        if consent_version.chars().count() > MAX_CONSENT_VERSION_LEN {
            return Err(E::ConsentVersionTooLong);
        }

        let photo = photo_from_input(photo)?;

        Ok(Self {
            contest_slug,
            first_name,
            last_name,
            email,
            phone,
            consent_given,
            consent_version,
            photo,
        })
    }

    pub fn contest_slug(&self) -> &str {
        &self.contest_slug
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn consent_given(&self) -> bool {
        self.consent_given
    }

    pub fn consent_version(&self) -> &str {
        &self.consent_version
    }

    pub fn photo(&self) -> Option<&PhotoAttachment> {
        self.photo.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSubmissionError {
    #[error("Contest not found or inactive")]
    ContestNotFound,

    #[error("This email already submitted")]
    DuplicateSubmission,

    #[error(transparent)]
    PhotoRejected(#[from] PolicyViolation),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateSubmissionUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateSubmissionCommand,
    ) -> Result<Submission, CreateSubmissionError>;
}
