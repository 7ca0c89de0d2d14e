mod create_submission;
mod export_submissions;
mod list_submissions;

pub use create_submission::{
    CreateSubmissionCommand, CreateSubmissionCommandError, CreateSubmissionError,
    CreateSubmissionUseCase, PhotoInput,
};
pub use export_submissions::{ExportSubmissionsError, ExportSubmissionsUseCase, SubmissionExport};
pub use list_submissions::{ListSubmissionsError, ListSubmissionsUseCase};
