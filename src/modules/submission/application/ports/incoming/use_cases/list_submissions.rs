use async_trait::async_trait;

use crate::submission::application::{
    domain::entities::SubmissionRow,
    ports::outgoing::{PageRequest, PageResult},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSubmissionsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListSubmissionsUseCase: Send + Sync {
    async fn execute(
        &self,
        contest_slug: &str,
        page: PageRequest,
    ) -> Result<PageResult<SubmissionRow>, ListSubmissionsError>;
}
