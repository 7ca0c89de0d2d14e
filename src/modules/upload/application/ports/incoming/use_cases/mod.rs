pub mod authorize_upload;

pub use authorize_upload::*;
