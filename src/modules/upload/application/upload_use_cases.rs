use std::sync::Arc;

use crate::upload::application::ports::incoming::use_cases::AuthorizeUploadUseCase;

#[derive(Clone)]
pub struct UploadUseCases {
    pub authorize: Arc<dyn AuthorizeUploadUseCase + Send + Sync>,
}
