use std::sync::Arc;

use actix_web::web;

use crate::contest::application::ports::incoming::use_cases::{
    CreateContestUseCase, GetContestUseCase, SeedContestsUseCase,
};
use crate::contest::application::ContestUseCases;
use crate::submission::application::ports::incoming::use_cases::{
    CreateSubmissionUseCase, ExportSubmissionsUseCase, ListSubmissionsUseCase,
};
use crate::submission::application::SubmissionUseCases;
use crate::tests::support::stubs::*;
use crate::upload::application::ports::incoming::use_cases::AuthorizeUploadUseCase;
use crate::upload::application::UploadUseCases;
use crate::AppState;

pub struct TestAppStateBuilder {
    upload: UploadUseCases,
    contest: ContestUseCases,
    submission: SubmissionUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            upload: UploadUseCases {
                authorize: Arc::new(StubAuthorizeUploadUseCase),
            },
            contest: ContestUseCases {
                create: Arc::new(StubCreateContestUseCase),
                get_by_slug: Arc::new(StubGetContestUseCase),
                seed: Arc::new(StubSeedContestsUseCase),
            },
            submission: SubmissionUseCases {
                create: Arc::new(StubCreateSubmissionUseCase),
                list: Arc::new(StubListSubmissionsUseCase),
                export: Arc::new(StubExportSubmissionsUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_authorize_upload(
        mut self,
        uc: impl AuthorizeUploadUseCase + Send + Sync + 'static,
    ) -> Self {
        self.upload.authorize = Arc::new(uc);
        self
    }

    pub fn with_create_contest(
        mut self,
        uc: impl CreateContestUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contest.create = Arc::new(uc);
        self
    }

    pub fn with_get_contest(mut self, uc: impl GetContestUseCase + Send + Sync + 'static) -> Self {
        self.contest.get_by_slug = Arc::new(uc);
        self
    }

    pub fn with_seed_contests(
        mut self,
        uc: impl SeedContestsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contest.seed = Arc::new(uc);
        self
    }

    pub fn with_create_submission(
        mut self,
        uc: impl CreateSubmissionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submission.create = Arc::new(uc);
        self
    }

    pub fn with_list_submissions(
        mut self,
        uc: impl ListSubmissionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submission.list = Arc::new(uc);
        self
    }

    pub fn with_export_submissions(
        mut self,
        uc: impl ExportSubmissionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submission.export = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            upload: self.upload,
            contest: self.contest,
            submission: self.submission,
        })
    }
}
