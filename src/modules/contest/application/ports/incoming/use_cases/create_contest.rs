use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::contest::application::domain::entities::Contest;

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_SLUG_LEN: usize = 120;

//
// ──────────────────────────────────────────────────────────
// Create Contest Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateContestCommand {
    name: String,
    slug: String,
    starts_at_utc: DateTime<Utc>,
    ends_at_utc: DateTime<Utc>,
    is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateContestCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Slug cannot be empty")]
    EmptySlug,

    #[error("Slug too long")]
    SlugTooLong,
}

impl CreateContestCommand {
    pub fn new(
        name: String,
        slug: String,
        starts_at_utc: DateTime<Utc>,
        ends_at_utc: DateTime<Utc>,
        is_active: bool,
    ) -> Result<Self, CreateContestCommandError> {
        let name = name.trim();
        let slug = slug.trim();

        if name.is_empty() {
            return Err(CreateContestCommandError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CreateContestCommandError::NameTooLong);
        }
        if slug.is_empty() {
            return Err(CreateContestCommandError::EmptySlug);
        }
        if slug.chars().count() > MAX_SLUG_LEN {
            return Err(CreateContestCommandError::SlugTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            slug: slug.to_string(),
            starts_at_utc,
            ends_at_utc,
            is_active,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn starts_at_utc(&self) -> DateTime<Utc> {
        self.starts_at_utc
    }

    pub fn ends_at_utc(&self) -> DateTime<Utc> {
        self.ends_at_utc
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateContestError {
    #[error("Contest slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateContestUseCase: Send + Sync {
    async fn execute(&self, command: CreateContestCommand) -> Result<Contest, CreateContestError>;
}
