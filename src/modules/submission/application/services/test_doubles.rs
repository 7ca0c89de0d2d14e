use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::submission::application::{
    domain::entities::{Submission, SubmissionRow},
    ports::outgoing::{
        NewSubmission, PageRequest, PageResult, SubmissionNotifier, SubmissionQuery,
        SubmissionQueryError, SubmissionRepository, SubmissionRepositoryError,
    },
};

pub fn sample_row(first_name: &str, minutes: i64) -> SubmissionRow {
    SubmissionRow {
        first_name: first_name.to_string(),
        last_name: "Lopez".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: "787-555-0100".to_string(),
        consent_given: true,
        consent_version: "v1".to_string(),
        created_at_utc: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
            + Duration::minutes(minutes),
    }
}

pub fn submission_from(data: &NewSubmission) -> Submission {
    Submission {
        id: Uuid::from_u128(0x42),
        contest_id: data.contest_id,
        first_name: data.first_name.clone(),
        last_name: data.last_name.clone(),
        email: data.email.clone(),
        phone: data.phone.clone(),
        consent_given: data.consent_given,
        consent_version: data.consent_version.clone(),
        created_at_utc: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        blob_name: data.photo.as_ref().map(|p| p.blob_name.clone()),
        content_type: data.photo.as_ref().map(|p| p.content_type.clone()),
        size_bytes: data.photo.as_ref().map(|p| p.size_bytes as i64),
    }
}

// ──────────────────────────────────────────────────────────
// Repository
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockSubmissionRepository {
    error: Option<SubmissionRepositoryError>,
    pub captured: Arc<Mutex<Vec<NewSubmission>>>,
}

impl MockSubmissionRepository {
    pub fn failing(err: SubmissionRepositoryError) -> Self {
        Self {
            error: Some(err),
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl SubmissionRepository for MockSubmissionRepository {
    async fn create_submission(
        &self,
        data: NewSubmission,
    ) -> Result<Submission, SubmissionRepositoryError> {
        self.captured.lock().unwrap().push(data.clone());
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(submission_from(&data)),
        }
    }
}

// ──────────────────────────────────────────────────────────
// Query
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockSubmissionQuery {
    pub rows: Vec<SubmissionRow>,
    pub error: Option<String>,
    pub requested: Arc<Mutex<Vec<(String, Option<PageRequest>)>>>,
}

impl MockSubmissionQuery {
    pub fn with(rows: Vec<SubmissionRow>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            error: Some(msg.to_string()),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), SubmissionQueryError> {
        match &self.error {
            Some(msg) => Err(SubmissionQueryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SubmissionQuery for MockSubmissionQuery {
    async fn list_by_contest_slug(
        &self,
        contest_slug: &str,
        page: PageRequest,
    ) -> Result<PageResult<SubmissionRow>, SubmissionQueryError> {
        self.requested
            .lock()
            .unwrap()
            .push((contest_slug.to_string(), Some(page)));
        self.check()?;

        let items = self
            .rows
            .iter()
            .skip(page.offset() as usize)
            .take(page.page_size as usize)
            .cloned()
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            page_size: page.page_size,
            total: self.rows.len() as u64,
        })
    }

    async fn all_by_contest_slug(
        &self,
        contest_slug: &str,
    ) -> Result<Vec<SubmissionRow>, SubmissionQueryError> {
        self.requested
            .lock()
            .unwrap()
            .push((contest_slug.to_string(), None));
        self.check()?;
        Ok(self.rows.clone())
    }
}

// ──────────────────────────────────────────────────────────
// Notifier
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub notified: Arc<Mutex<Vec<Uuid>>>,
}

impl SubmissionNotifier for RecordingNotifier {
    fn submission_received(&self, submission: &Submission) {
        self.notified.lock().unwrap().push(submission.id);
    }
}
