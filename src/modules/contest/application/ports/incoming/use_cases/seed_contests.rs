use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded,
    AlreadySeeded,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedContestsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Development-only: inserts a demo contest into an empty database.
#[async_trait]
pub trait SeedContestsUseCase: Send + Sync {
    async fn execute(&self) -> Result<SeedOutcome, SeedContestsError>;
}
