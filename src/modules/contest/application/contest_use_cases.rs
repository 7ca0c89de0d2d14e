use std::sync::Arc;

use crate::contest::application::ports::incoming::use_cases::{
    CreateContestUseCase, GetContestUseCase, SeedContestsUseCase,
};

#[derive(Clone)]
pub struct ContestUseCases {
    pub create: Arc<dyn CreateContestUseCase + Send + Sync>,
    pub get_by_slug: Arc<dyn GetContestUseCase + Send + Sync>,
    pub seed: Arc<dyn SeedContestsUseCase + Send + Sync>,
}
