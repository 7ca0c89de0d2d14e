use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::{Arc, Mutex};

use crate::contest::application::{
    domain::entities::Contest,
    ports::outgoing::{
        ContestQuery, ContestQueryError, ContestRepository, ContestRepositoryError, NewContest,
    },
};

pub fn sample_contest(slug: &str, is_active: bool) -> Contest {
    let starts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    Contest {
        id: 7,
        name: "Photo Contest 2025".to_string(),
        slug: slug.to_string(),
        starts_at_utc: starts,
        ends_at_utc: starts + chrono::Duration::days(30),
        is_active,
        created_at_utc: starts,
    }
}

// ──────────────────────────────────────────────────────────
// Repository
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockContestRepository {
    result: Result<Contest, ContestRepositoryError>,
    pub captured: Arc<Mutex<Vec<NewContest>>>,
}

impl MockContestRepository {
    pub fn success(contest: Contest) -> Self {
        Self {
            result: Ok(contest),
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(err: ContestRepositoryError) -> Self {
        Self {
            result: Err(err),
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ContestRepository for MockContestRepository {
    async fn create_contest(&self, data: NewContest) -> Result<Contest, ContestRepositoryError> {
        self.captured.lock().unwrap().push(data);
        self.result.clone()
    }
}

// ──────────────────────────────────────────────────────────
// Query
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockContestQuery {
    pub contests: Vec<Contest>,
    pub error: Option<String>,
}

impl MockContestQuery {
    pub fn with(contests: Vec<Contest>) -> Self {
        Self {
            contests,
            error: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            contests: Vec::new(),
            error: Some(msg.to_string()),
        }
    }

    fn check(&self) -> Result<(), ContestQueryError> {
        match &self.error {
            Some(msg) => Err(ContestQueryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContestQuery for MockContestQuery {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Contest>, ContestQueryError> {
        self.check()?;
        Ok(self.contests.iter().find(|c| c.slug == slug).cloned())
    }

    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Contest>, ContestQueryError> {
        self.check()?;
        Ok(self
            .contests
            .iter()
            .find(|c| c.slug == slug && c.is_active)
            .cloned())
    }

    async fn any_exists(&self) -> Result<bool, ContestQueryError> {
        self.check()?;
        Ok(!self.contests.is_empty())
    }
}
