mod create_submission;
mod export_submissions;
mod list_submissions;

pub use create_submission::*;
pub use export_submissions::*;
pub use list_submissions::*;
