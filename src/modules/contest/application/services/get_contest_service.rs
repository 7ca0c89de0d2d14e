use async_trait::async_trait;

use crate::contest::application::{
    domain::entities::Contest,
    ports::{
        incoming::use_cases::{GetContestError, GetContestUseCase},
        outgoing::ContestQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetContestService<Q>
where
    Q: ContestQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetContestService<Q>
where
    Q: ContestQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetContestUseCase for GetContestService<Q>
where
    Q: ContestQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<Contest, GetContestError> {
        self.query
            .find_by_slug(slug.trim())
            .await
            .map_err(|e| GetContestError::QueryError(e.to_string()))?
            .ok_or(GetContestError::NotFound)
    }
}
