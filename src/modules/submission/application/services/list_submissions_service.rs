use async_trait::async_trait;

use crate::submission::application::{
    domain::entities::SubmissionRow,
    ports::{
        incoming::use_cases::{ListSubmissionsError, ListSubmissionsUseCase},
        outgoing::{PageRequest, PageResult, SubmissionQuery},
    },
};

#[derive(Debug, Clone)]
pub struct ListSubmissionsService<Q>
where
    Q: SubmissionQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListSubmissionsService<Q>
where
    Q: SubmissionQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListSubmissionsUseCase for ListSubmissionsService<Q>
where
    Q: SubmissionQuery + Send + Sync,
{
    async fn execute(
        &self,
        contest_slug: &str,
        page: PageRequest,
    ) -> Result<PageResult<SubmissionRow>, ListSubmissionsError> {
        self.query
            .list_by_contest_slug(contest_slug.trim(), page)
            .await
            .map_err(|e| ListSubmissionsError::QueryError(e.to_string()))
    }
}
