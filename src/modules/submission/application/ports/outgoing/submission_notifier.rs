use crate::submission::application::domain::entities::Submission;

/// Fire-and-forget hook run after a submission is stored.
pub trait SubmissionNotifier: Send + Sync {
    fn submission_received(&self, submission: &Submission);
}
