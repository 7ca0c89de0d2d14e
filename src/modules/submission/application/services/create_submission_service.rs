use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::contest::application::ports::outgoing::ContestQuery;
use crate::submission::application::{
    domain::entities::Submission,
    ports::{
        incoming::use_cases::{
            CreateSubmissionCommand, CreateSubmissionError, CreateSubmissionUseCase,
        },
        outgoing::{
            NewSubmission, SubmissionNotifier, SubmissionRepository, SubmissionRepositoryError,
        },
    },
};
use crate::upload::application::domain::policies::upload_policy::{
    validate_metadata, UploadPolicyConfig,
};

pub struct CreateSubmissionService<R, Q>
where
    R: SubmissionRepository + Send + Sync,
    Q: ContestQuery + Send + Sync,
{
    repository: R,
    contests: Q,
    upload_policy: Arc<UploadPolicyConfig>,
    notifier: Arc<dyn SubmissionNotifier>,
}

impl<R, Q> CreateSubmissionService<R, Q>
where
    R: SubmissionRepository + Send + Sync,
    Q: ContestQuery + Send + Sync,
{
    pub fn new(
        repository: R,
        contests: Q,
        upload_policy: Arc<UploadPolicyConfig>,
        notifier: Arc<dyn SubmissionNotifier>,
    ) -> Self {
        Self {
            repository,
            contests,
            upload_policy,
            notifier,
        }
    }
}

#[async_trait]
impl<R, Q> CreateSubmissionUseCase for CreateSubmissionService<R, Q>
where
    R: SubmissionRepository + Send + Sync,
    Q: ContestQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateSubmissionCommand,
    ) -> Result<Submission, CreateSubmissionError> {
        if let Some(photo) = command.photo() {
            validate_metadata(&self.upload_policy, &photo.content_type, photo.size_bytes)?;
        }

        let contest = self
            .contests
            .find_active_by_slug(command.contest_slug())
            .await
            .map_err(|e| CreateSubmissionError::RepositoryError(e.to_string()))?
            .ok_or(CreateSubmissionError::ContestNotFound)?;

        let data = NewSubmission {
            contest_id: contest.id,
            first_name: command.first_name().to_string(),
            last_name: command.last_name().to_string(),
            email: command.email().to_string(),
            phone: command.phone().to_string(),
            consent_given: command.consent_given(),
            consent_version: command.consent_version().to_string(),
            photo: command.photo().cloned(),
        };

        let submission = self
            .repository
            .create_submission(data)
            .await
            .map_err(|e| match e {
                SubmissionRepositoryError::DuplicateEmail => {
                    warn!(contest = %contest.slug, "Duplicate submission rejected");
                    CreateSubmissionError::DuplicateSubmission
                }
                other => CreateSubmissionError::RepositoryError(other.to_string()),
            })?;

        info!(
            submission_id = %submission.id,
            contest = %contest.slug,
            has_photo = submission.blob_name.is_some(),
            "Submission stored"
        );

        self.notifier.submission_received(&submission);

        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contest::application::services::test_doubles::{sample_contest, MockContestQuery};
    use crate::submission::application::ports::incoming::use_cases::PhotoInput;
    use crate::submission::application::services::test_doubles::{
        MockSubmissionRepository, RecordingNotifier,
    };
    use crate::upload::application::domain::policies::upload_policy::PolicyViolation;

    fn command(slug: &str, photo: PhotoInput) -> CreateSubmissionCommand {
        CreateSubmissionCommand::new(
            slug.to_string(),
            "Ana".to_string(),
            "Lopez".to_string(),
            "ana@example.com".to_string(),
            Some("787-555-0100".to_string()),
            true,
            None,
            photo,
        )
        .unwrap()
    }

    fn photo(content_type: &str, size: i64) -> PhotoInput {
        PhotoInput {
            blob_name: Some("2025/03/abc-me.jpg".to_string()),
            content_type: Some(content_type.to_string()),
            size_bytes: Some(size),
        }
    }

    fn policy() -> Arc<UploadPolicyConfig> {
        Arc::new(UploadPolicyConfig::new("contest-photos", 1_000_000, ["image/jpeg"]))
    }

    fn service(
        repo: MockSubmissionRepository,
        contests: MockContestQuery,
        notifier: RecordingNotifier,
    ) -> CreateSubmissionService<MockSubmissionRepository, MockContestQuery> {
        CreateSubmissionService::new(repo, contests, policy(), Arc::new(notifier))
    }

    #[tokio::test]
    async fn stores_submission_and_notifies() {
        let repo = MockSubmissionRepository::default();
        let notifier = RecordingNotifier::default();
        let svc = service(
            repo.clone(),
            MockContestQuery::with(vec![sample_contest("summer", true)]),
            notifier.clone(),
        );

        let submission = svc
            .execute(command("summer", photo("IMAGE/JPEG", 500_000)))
            .await
            .unwrap();

        assert_eq!(submission.contest_id, 7);
        assert_eq!(submission.consent_version, "v1");
        assert_eq!(submission.blob_name.as_deref(), Some("2025/03/abc-me.jpg"));

        let captured = repo.captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].phone, "787-555-0100");

        assert_eq!(*notifier.notified.lock().unwrap(), vec![submission.id]);
    }

    #[tokio::test]
    async fn inactive_or_unknown_contest_is_rejected() {
        let repo = MockSubmissionRepository::default();
        let svc = service(
            repo.clone(),
            MockContestQuery::with(vec![sample_contest("summer", false)]),
            RecordingNotifier::default(),
        );

        for slug in ["summer", "winter"] {
            let result = svc.execute(command(slug, PhotoInput::default())).await;
            assert!(matches!(result, Err(CreateSubmissionError::ContestNotFound)));
        }
        assert!(repo.captured.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn photo_outside_policy_is_rejected_before_any_lookup() {
        let repo = MockSubmissionRepository::default();
        let svc = service(
            repo.clone(),
            MockContestQuery::failing("must not be queried"),
            RecordingNotifier::default(),
        );

        let wrong_type = svc.execute(command("summer", photo("application/pdf", 10))).await;
        assert!(matches!(
            wrong_type,
            Err(CreateSubmissionError::PhotoRejected(
                PolicyViolation::UnsupportedContentType(_)
            ))
        ));

        let too_big = svc.execute(command("summer", photo("image/jpeg", 1_000_001))).await;
        assert!(matches!(
            too_big,
            Err(CreateSubmissionError::PhotoRejected(PolicyViolation::FileTooLarge { .. }))
        ));

        assert!(repo.captured.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_maps_to_duplicate_submission_without_notification() {
        let notifier = RecordingNotifier::default();
        let svc = service(
            MockSubmissionRepository::failing(SubmissionRepositoryError::DuplicateEmail),
            MockContestQuery::with(vec![sample_contest("summer", true)]),
            notifier.clone(),
        );

        let result = svc.execute(command("summer", PhotoInput::default())).await;

        assert!(matches!(result, Err(CreateSubmissionError::DuplicateSubmission)));
        assert!(notifier.notified.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn database_errors_are_repository_errors() {
        let svc = service(
            MockSubmissionRepository::failing(SubmissionRepositoryError::DatabaseError(
                "timeout".to_string(),
            )),
            MockContestQuery::with(vec![sample_contest("summer", true)]),
            RecordingNotifier::default(),
        );
        let result = svc.execute(command("summer", PhotoInput::default())).await;
        assert!(matches!(result, Err(CreateSubmissionError::RepositoryError(_))));

        let svc = service(
            MockSubmissionRepository::default(),
            MockContestQuery::failing("down"),
            RecordingNotifier::default(),
        );
        let result = svc.execute(command("summer", PhotoInput::default())).await;
        assert!(matches!(result, Err(CreateSubmissionError::RepositoryError(_))));
    }
}
