use async_trait::async_trait;
use chrono::{Duration, SubsecRound, Utc};
use tracing::info;

use crate::contest::application::ports::{
    incoming::use_cases::{SeedContestsError, SeedContestsUseCase, SeedOutcome},
    outgoing::{ContestQuery, ContestRepository, NewContest},
};

pub const SEED_CONTEST_NAME: &str = "Photo Contest 2025";
pub const SEED_CONTEST_SLUG: &str = "photo-contest-2025";
const SEED_CONTEST_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct SeedContestsService<Q, R>
where
    Q: ContestQuery + Send + Sync,
    R: ContestRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> SeedContestsService<Q, R>
where
    Q: ContestQuery + Send + Sync,
    R: ContestRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> SeedContestsUseCase for SeedContestsService<Q, R>
where
    Q: ContestQuery + Send + Sync,
    R: ContestRepository + Send + Sync,
{
    async fn execute(&self) -> Result<SeedOutcome, SeedContestsError> {
        let exists = self
            .query
            .any_exists()
            .await
            .map_err(|e| SeedContestsError::RepositoryError(e.to_string()))?;

        if exists {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let now = Utc::now().trunc_subsecs(0);
        self.repository
            .create_contest(NewContest {
                name: SEED_CONTEST_NAME.to_string(),
                slug: SEED_CONTEST_SLUG.to_string(),
                starts_at_utc: now,
                ends_at_utc: now + Duration::days(SEED_CONTEST_DAYS),
                is_active: true,
            })
            .await
            .map_err(|e| SeedContestsError::RepositoryError(e.to_string()))?;

        info!(slug = SEED_CONTEST_SLUG, "Seeded demo contest");
        Ok(SeedOutcome::Seeded)
    }
}
