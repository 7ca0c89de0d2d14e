use async_trait::async_trait;

use crate::contest::application::domain::entities::Contest;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContestQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContestQuery: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Contest>, ContestQueryError>;

    /// Like `find_by_slug` but ignores contests with `is_active = false`.
    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Contest>, ContestQueryError>;

    async fn any_exists(&self) -> Result<bool, ContestQueryError>;
}
