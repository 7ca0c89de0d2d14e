use async_trait::async_trait;

use crate::contest::application::domain::entities::Contest;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContestError {
    #[error("Contest not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetContestUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Contest, GetContestError>;
}
