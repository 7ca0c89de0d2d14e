pub mod upload_authorizer;

pub use upload_authorizer::{GrantSettings, UploadAuthorizer};
