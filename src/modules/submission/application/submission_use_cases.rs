use std::sync::Arc;

use crate::submission::application::ports::incoming::use_cases::{
    CreateSubmissionUseCase, ExportSubmissionsUseCase, ListSubmissionsUseCase,
};

#[derive(Clone)]
pub struct SubmissionUseCases {
    pub create: Arc<dyn CreateSubmissionUseCase + Send + Sync>,
    pub list: Arc<dyn ListSubmissionsUseCase + Send + Sync>,
    pub export: Arc<dyn ExportSubmissionsUseCase + Send + Sync>,
}
