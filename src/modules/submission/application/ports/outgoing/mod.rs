pub mod submission_notifier;
pub mod submission_query;
pub mod submission_repository;

pub use submission_notifier::SubmissionNotifier;
pub use submission_query::{
    PageRequest, PageResult, SubmissionQuery, SubmissionQueryError, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
pub use submission_repository::{NewSubmission, SubmissionRepository, SubmissionRepositoryError};
