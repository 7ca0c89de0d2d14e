pub mod auth;
pub mod contest;
pub mod email;
pub mod submission;
pub mod upload;
