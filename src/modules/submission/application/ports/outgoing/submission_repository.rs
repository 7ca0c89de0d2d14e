use async_trait::async_trait;

use crate::submission::application::domain::entities::{PhotoAttachment, Submission};

#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub contest_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub consent_given: bool,
    pub consent_version: String,
    pub photo: Option<PhotoAttachment>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmissionRepositoryError {
    #[error("Email already submitted for this contest")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn create_submission(
        &self,
        data: NewSubmission,
    ) -> Result<Submission, SubmissionRepositoryError>;
}
