//! Default use cases for `TestAppStateBuilder`. Each one fails loudly so a
//! route test that forgets to inject its own implementation is obvious.

use async_trait::async_trait;

use crate::contest::application::domain::entities::Contest;
use crate::contest::application::ports::incoming::use_cases::{
    CreateContestCommand, CreateContestError, CreateContestUseCase, GetContestError,
    GetContestUseCase, SeedContestsError, SeedContestsUseCase, SeedOutcome,
};
use crate::submission::application::domain::entities::{Submission, SubmissionRow};
use crate::submission::application::ports::incoming::use_cases::{
    CreateSubmissionCommand, CreateSubmissionError, CreateSubmissionUseCase,
    ExportSubmissionsError, ExportSubmissionsUseCase, ListSubmissionsError,
    ListSubmissionsUseCase, SubmissionExport,
};
use crate::submission::application::ports::outgoing::{PageRequest, PageResult};
use crate::upload::application::domain::entities::{UploadGrant, UploadRequest};
use crate::upload::application::ports::incoming::use_cases::{
    AuthorizationError, AuthorizeUploadUseCase,
};

const NOT_USED: &str = "not used in this test";

// ──────────────────────────────────────────────────────────
// Upload
// ──────────────────────────────────────────────────────────

pub struct StubAuthorizeUploadUseCase;

#[async_trait]
impl AuthorizeUploadUseCase for StubAuthorizeUploadUseCase {
    async fn execute(&self, _request: UploadRequest) -> Result<UploadGrant, AuthorizationError> {
        Err(AuthorizationError::StorageUnavailable)
    }
}

// ──────────────────────────────────────────────────────────
// Contest
// ──────────────────────────────────────────────────────────

pub struct StubCreateContestUseCase;

#[async_trait]
impl CreateContestUseCase for StubCreateContestUseCase {
    async fn execute(&self, _command: CreateContestCommand) -> Result<Contest, CreateContestError> {
        Err(CreateContestError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubGetContestUseCase;

#[async_trait]
impl GetContestUseCase for StubGetContestUseCase {
    async fn execute(&self, _slug: &str) -> Result<Contest, GetContestError> {
        Err(GetContestError::NotFound)
    }
}

pub struct StubSeedContestsUseCase;

#[async_trait]
impl SeedContestsUseCase for StubSeedContestsUseCase {
    async fn execute(&self) -> Result<SeedOutcome, SeedContestsError> {
        Err(SeedContestsError::RepositoryError(NOT_USED.to_string()))
    }
}

// ──────────────────────────────────────────────────────────
// Submission
// ──────────────────────────────────────────────────────────

pub struct StubCreateSubmissionUseCase;

#[async_trait]
impl CreateSubmissionUseCase for StubCreateSubmissionUseCase {
    async fn execute(
        &self,
        _command: CreateSubmissionCommand,
    ) -> Result<Submission, CreateSubmissionError> {
        Err(CreateSubmissionError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubListSubmissionsUseCase;

#[async_trait]
impl ListSubmissionsUseCase for StubListSubmissionsUseCase {
    async fn execute(
        &self,
        _contest_slug: &str,
        _page: PageRequest,
    ) -> Result<PageResult<SubmissionRow>, ListSubmissionsError> {
        Err(ListSubmissionsError::QueryError(NOT_USED.to_string()))
    }
}

pub struct StubExportSubmissionsUseCase;

#[async_trait]
impl ExportSubmissionsUseCase for StubExportSubmissionsUseCase {
    async fn execute(&self, _contest_slug: &str) -> Result<SubmissionExport, ExportSubmissionsError> {
        Err(ExportSubmissionsError::QueryError(NOT_USED.to_string()))
    }
}
