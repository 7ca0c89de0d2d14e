mod create_contest;
mod get_contest;
mod seed_contests;

pub use create_contest::{
    CreateContestCommand, CreateContestCommandError, CreateContestError, CreateContestUseCase,
};
pub use get_contest::{GetContestError, GetContestUseCase};
pub use seed_contests::{SeedContestsError, SeedContestsUseCase, SeedOutcome};
