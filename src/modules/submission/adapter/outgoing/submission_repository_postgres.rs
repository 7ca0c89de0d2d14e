use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::submission::application::{
    domain::entities::Submission,
    ports::outgoing::{NewSubmission, SubmissionRepository, SubmissionRepositoryError},
};

use super::sea_orm_entity::{ActiveModel as SubmissionActiveModel, Model as SubmissionModel};

#[derive(Debug, Clone)]
pub struct SubmissionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubmissionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubmissionRepository for SubmissionRepositoryPostgres {
    async fn create_submission(
        &self,
        data: NewSubmission,
    ) -> Result<Submission, SubmissionRepositoryError> {
        let photo = data.photo;

        let active = SubmissionActiveModel {
            id: Set(Uuid::new_v4()),
            contest_id: Set(data.contest_id),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email),
            phone: Set(data.phone),
            consent_given: Set(data.consent_given),
            consent_version: Set(data.consent_version),
            created_at: Set(Utc::now().fixed_offset()),
            blob_name: Set(photo.as_ref().map(|p| p.blob_name.clone())),
            content_type: Set(photo.as_ref().map(|p| p.content_type.clone())),
            size_bytes: Set(photo.as_ref().map(|p| p.size_bytes as i64)),
        };

        let inserted: SubmissionModel = active.insert(&*self.db).await.map_err(map_insert_error)?;

        Ok(inserted.to_domain())
    }
}

// (contest_id, lower(email)) is the only unique index besides the primary key.
fn map_insert_error(e: DbErr) -> SubmissionRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        SubmissionRepositoryError::DuplicateEmail
    } else {
        SubmissionRepositoryError::DatabaseError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::application::domain::entities::PhotoAttachment;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn new_submission(photo: Option<PhotoAttachment>) -> NewSubmission {
        NewSubmission {
            contest_id: 7,
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            consent_given: true,
            consent_version: "v1".to_string(),
            photo,
        }
    }

    fn stored(data: &NewSubmission) -> SubmissionModel {
        SubmissionModel {
            id: Uuid::new_v4(),
            contest_id: data.contest_id,
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            consent_given: data.consent_given,
            consent_version: data.consent_version.clone(),
            created_at: Utc::now().fixed_offset(),
            blob_name: data.photo.as_ref().map(|p| p.blob_name.clone()),
            content_type: data.photo.as_ref().map(|p| p.content_type.clone()),
            size_bytes: data.photo.as_ref().map(|p| p.size_bytes as i64),
        }
    }

    #[tokio::test]
    async fn test_create_submission_with_photo() {
        let data = new_submission(Some(PhotoAttachment {
            blob_name: "2025/03/abc-me.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            size_bytes: 1234,
        }));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored(&data)]])
            .into_connection();

        let repo = SubmissionRepositoryPostgres::new(Arc::new(db));
        let submission = repo.create_submission(data).await.unwrap();

        assert_eq!(submission.contest_id, 7);
        assert_eq!(submission.blob_name.as_deref(), Some("2025/03/abc-me.jpg"));
        assert_eq!(submission.size_bytes, Some(1234));
    }

    #[tokio::test]
    async fn test_create_submission_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_submissions_contest_email_unique\""
                    .to_string(),
            )])
            .into_connection();

        let repo = SubmissionRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_submission(new_submission(None)).await;

        assert!(matches!(result, Err(SubmissionRepositoryError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_create_submission_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let repo = SubmissionRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_submission(new_submission(None)).await;

        assert!(matches!(
            result,
            Err(SubmissionRepositoryError::DatabaseError(msg)) if msg.contains("connection refused")
        ));
    }
}
