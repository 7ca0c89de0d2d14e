mod create_submission_service;
mod export_submissions_service;
mod list_submissions_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use create_submission_service::CreateSubmissionService;
pub use export_submissions_service::ExportSubmissionsService;
pub use list_submissions_service::ListSubmissionsService;
