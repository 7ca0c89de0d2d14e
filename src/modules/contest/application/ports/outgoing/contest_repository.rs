use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::contest::application::domain::entities::Contest;

#[derive(Debug, Clone)]
pub struct NewContest {
    pub name: String,
    pub slug: String,
    pub starts_at_utc: DateTime<Utc>,
    pub ends_at_utc: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContestRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Slug already exists")]
    SlugAlreadyExists,
}

#[async_trait]
pub trait ContestRepository: Send + Sync {
    async fn create_contest(&self, data: NewContest) -> Result<Contest, ContestRepositoryError>;
}
