pub mod domain;
pub mod ports;
pub mod services;
pub mod submission_use_cases;

pub use submission_use_cases::SubmissionUseCases;
