use async_trait::async_trait;

use crate::contest::application::{
    domain::entities::Contest,
    ports::{
        incoming::use_cases::{CreateContestCommand, CreateContestError, CreateContestUseCase},
        outgoing::{ContestRepository, ContestRepositoryError, NewContest},
    },
};

#[derive(Debug, Clone)]
pub struct CreateContestService<R>
where
    R: ContestRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateContestService<R>
where
    R: ContestRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateContestUseCase for CreateContestService<R>
where
    R: ContestRepository + Send + Sync,
{
    async fn execute(&self, command: CreateContestCommand) -> Result<Contest, CreateContestError> {
        let data = NewContest {
            name: command.name().to_string(),
            slug: command.slug().to_string(),
            starts_at_utc: command.starts_at_utc(),
            ends_at_utc: command.ends_at_utc(),
            is_active: command.is_active(),
        };

        // The unique index on slug is the source of truth, no pre-check.
        self.repository
            .create_contest(data)
            .await
            .map_err(|e| match e {
                ContestRepositoryError::SlugAlreadyExists => CreateContestError::SlugAlreadyExists,
                other => CreateContestError::RepositoryError(other.to_string()),
            })
    }
}
